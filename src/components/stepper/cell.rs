// ABOUTME: Rendering of a single stepper page cell
// Draws the gradient, page content, and forward control; reports click targets

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::gradient::Gradient;
use super::page::StepupPage;
use super::state::ViewState;

const BUTTON_BG: Color = Color::Rgb(25, 25, 35);
const BUTTON_FG: Color = Color::Rgb(220, 220, 230);
const BUTTON_BORDER: Color = Color::Rgb(100, 149, 237);

/// Rows a cell needs before the forward control gets a bordered button
const FULL_BUTTON_MIN_ROWS: u16 = 8;

/// Where a rendered cell can be clicked, in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRegion {
    pub position: usize,
    pub view_state: ViewState,
    /// Visible part of the cell
    pub cell: Rect,
    /// Visible part of the forward control, if any
    pub action: Option<Rect>,
}

impl HitRegion {
    /// Collapsed cells are covered by the return overlay
    pub fn overlay_contains(&self, x: u16, y: u16) -> bool {
        self.view_state.is_collapsed() && contains(self.cell, x, y)
    }

    pub fn action_contains(&self, x: u16, y: u16) -> bool {
        !self.view_state.is_collapsed() && self.action.is_some_and(|rect| contains(rect, x, y))
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        contains(self.cell, x, y)
    }
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.left() && x < rect.right() && y >= rect.top() && y < rect.bottom()
}

/// Everything a cell needs to draw itself; resolved by the container
pub struct PageCell<'a> {
    pub page: &'a dyn StepupPage,
    pub position: usize,
    pub view_state: ViewState,
    pub action_label: &'static str,
    /// Gradient orientation progress, 0.0 vertical to 1.0 horizontal
    pub orientation: f32,
    /// Absolute top row of the whole page, may lie outside the screen
    pub top: i32,
    pub height: u16,
}

impl PageCell<'_> {
    /// Draw the cell clipped to `bounds`
    pub fn render(&self, bounds: Rect, buf: &mut Buffer) -> Option<HitRegion> {
        if self.height == 0 || bounds.width == 0 {
            return None;
        }

        // Draw the whole page off-screen, then copy the visible rows. This keeps the
        // content and the bottom-anchored control stable while the page slides.
        let local_area = Rect::new(0, 0, bounds.width, self.height);
        // Parked pages have no visible rows
        self.blit_rect(local_area, bounds)?;

        let mut local = Buffer::empty(local_area);
        let (start, end) = self.page.gradient_colors();
        Gradient::new(start, end, self.orientation).paint(
            local_area,
            0.0,
            f32::from(self.height),
            &mut local,
        );

        let inner = local_area.inner(&Margin {
            horizontal: 2,
            vertical: 1,
        });
        let button_rows = if self.height >= FULL_BUTTON_MIN_ROWS { 3 } else { 1 };
        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(button_rows)])
            .split(inner);

        self.page
            .render_content(sections[0], &mut local, self.view_state.is_collapsed());
        render_action(self.action_label, sections[1], &mut local);

        let cell = self.blit(&local, bounds, buf, local_area)?;
        let action = self.blit_rect(sections[1], bounds);

        Some(HitRegion {
            position: self.position,
            view_state: self.view_state,
            cell,
            action,
        })
    }

    fn blit(&self, local: &Buffer, bounds: Rect, buf: &mut Buffer, local_area: Rect) -> Option<Rect> {
        let visible = self.blit_rect(local_area, bounds)?;
        for y in visible.top()..visible.bottom() {
            let local_y = (i32::from(y) - self.top) as u16;
            for x in visible.left()..visible.right() {
                *buf.get_mut(x, y) = local.get(x - bounds.x, local_y).clone();
            }
        }
        Some(visible)
    }

    /// Translate a page-local rect to screen coordinates and clip it
    fn blit_rect(&self, local: Rect, bounds: Rect) -> Option<Rect> {
        let top = self.top + i32::from(local.y);
        let bottom = top + i32::from(local.height);
        let visible_top = top.max(i32::from(bounds.top()));
        let visible_bottom = bottom.min(i32::from(bounds.bottom()));
        if visible_bottom <= visible_top || local.width == 0 {
            return None;
        }

        Some(Rect {
            x: bounds.x + local.x,
            y: visible_top as u16,
            width: local.width,
            height: (visible_bottom - visible_top) as u16,
        })
    }
}

/// The forward control. Drawn directly from the current label, never interpolated.
fn render_action(label: &str, area: Rect, buf: &mut Buffer) {
    if area.height == 0 {
        return;
    }

    let text = Line::from(Span::styled(
        label.to_string(),
        Style::default().fg(BUTTON_FG).add_modifier(Modifier::BOLD),
    ));

    if area.height >= 3 {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(BUTTON_BORDER))
            .style(Style::default().bg(BUTTON_BG));
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    } else {
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().bg(BUTTON_BG))
            .render(area, buf);
    }
}
