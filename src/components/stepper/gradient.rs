// ABOUTME: Two-color background gradient for page cells
// Blends between a vertical (expanded) and horizontal (collapsed) orientation

use ratatui::{buffer::Buffer, layout::Rect, style::Color};

/// Approximate RGB triple for any terminal color
pub fn to_rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Reset | Color::Black => (0, 0, 0),
        Color::Red => (205, 0, 0),
        Color::Green => (0, 205, 0),
        Color::Yellow => (205, 205, 0),
        Color::Blue => (0, 0, 238),
        Color::Magenta => (205, 0, 205),
        Color::Cyan => (0, 205, 205),
        Color::Gray => (229, 229, 229),
        Color::DarkGray => (127, 127, 127),
        Color::LightRed => (255, 0, 0),
        Color::LightGreen => (0, 255, 0),
        Color::LightYellow => (255, 255, 0),
        Color::LightBlue => (92, 92, 255),
        Color::LightMagenta => (255, 0, 255),
        Color::LightCyan => (0, 255, 255),
        Color::White => (255, 255, 255),
        Color::Indexed(index) => indexed_to_rgb(index),
    }
}

fn indexed_to_rgb(index: u8) -> (u8, u8, u8) {
    const BASE: [Color; 16] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::Gray,
        Color::DarkGray,
        Color::LightRed,
        Color::LightGreen,
        Color::LightYellow,
        Color::LightBlue,
        Color::LightMagenta,
        Color::LightCyan,
        Color::White,
    ];

    match index {
        0..=15 => to_rgb(BASE[index as usize]),
        16..=231 => {
            let cube = index - 16;
            let level = |v: u8| if v == 0 { 0 } else { 55 + v * 40 };
            (level(cube / 36), level((cube / 6) % 6), level(cube % 6))
        }
        _ => {
            let gray = 8 + (index - 232) * 10;
            (gray, gray, gray)
        }
    }
}

pub fn lerp_color(start: Color, end: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let (r1, g1, b1) = to_rgb(start);
    let (r2, g2, b2) = to_rgb(end);
    let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
    Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
}

/// Gradient painted behind a page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub start: Color,
    pub end: Color,
    /// 0.0 = top-to-bottom, 1.0 = left-to-right
    pub horizontal: f32,
}

impl Gradient {
    pub fn new(start: Color, end: Color, horizontal: f32) -> Self {
        Self {
            start,
            end,
            horizontal: horizontal.clamp(0.0, 1.0),
        }
    }

    /// Color at a cell of the full (unclipped) page, given as row/column fractions
    pub fn color_at(&self, column: f32, row: f32) -> Color {
        let t = row + (column - row) * self.horizontal;
        lerp_color(self.start, self.end, t)
    }

    /// Paint the visible part of a page. `page_top` and `page_height` describe the
    /// whole page so the gradient does not shift while it slides off-screen.
    pub fn paint(&self, visible: Rect, page_top: f32, page_height: f32, buf: &mut Buffer) {
        let visible = visible.intersection(buf.area);
        let width_span = f32::from(visible.width.saturating_sub(1).max(1));
        let height_span = (page_height - 1.0).max(1.0);

        for y in visible.top()..visible.bottom() {
            let row = ((f32::from(y) - page_top) / height_span).clamp(0.0, 1.0);
            for x in visible.left()..visible.right() {
                let column = f32::from(x - visible.x) / width_span;
                buf.get_mut(x, y).set_bg(self.color_at(column, row));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_color_endpoints() {
        let start = Color::Rgb(0, 0, 0);
        let end = Color::Rgb(200, 100, 50);

        assert_eq!(lerp_color(start, end, 0.0), start);
        assert_eq!(lerp_color(start, end, 1.0), end);
        assert_eq!(lerp_color(start, end, 0.5), Color::Rgb(100, 50, 25));
    }

    #[test]
    fn test_named_and_indexed_colors_resolve() {
        assert_eq!(to_rgb(Color::White), (255, 255, 255));
        assert_eq!(to_rgb(Color::Indexed(15)), (255, 255, 255));
        assert_eq!(to_rgb(Color::Indexed(16)), (0, 0, 0));
        assert_eq!(to_rgb(Color::Indexed(231)), (255, 255, 255));
        assert_eq!(to_rgb(Color::Indexed(232)), (8, 8, 8));
    }

    #[test]
    fn test_orientation() {
        let black = Color::Rgb(0, 0, 0);
        let white = Color::Rgb(255, 255, 255);

        let vertical = Gradient::new(black, white, 0.0);
        assert_eq!(vertical.color_at(1.0, 0.0), black);
        assert_eq!(vertical.color_at(0.0, 1.0), white);

        let horizontal = Gradient::new(black, white, 1.0);
        assert_eq!(horizontal.color_at(1.0, 0.0), white);
        assert_eq!(horizontal.color_at(0.0, 1.0), black);
    }

    #[test]
    fn test_paint_fills_visible_rows() {
        let area = Rect::new(0, 0, 4, 4);
        let mut buf = Buffer::empty(area);
        let gradient = Gradient::new(Color::Rgb(0, 0, 0), Color::Rgb(255, 255, 255), 0.0);

        gradient.paint(area, 0.0, 4.0, &mut buf);

        assert_eq!(buf.get(0, 0).bg, Color::Rgb(0, 0, 0));
        assert_eq!(buf.get(3, 3).bg, Color::Rgb(255, 255, 255));
        assert_eq!(buf.get(0, 3).bg, Color::Rgb(255, 255, 255));
    }
}
