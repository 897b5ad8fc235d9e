// ABOUTME: Contract every stepper page must satisfy

use ratatui::{buffer::Buffer, layout::Rect, style::Color};

/// A page hosted by the stepper.
///
/// Pages have no identity beyond their position in the list. The stepper paints
/// the background gradient and the forward control; the page only draws its own
/// content and adapts it to the collapsed/expanded state.
pub trait StepupPage {
    /// Start and end colors of the background gradient
    fn gradient_colors(&self) -> (Color, Color);

    /// Draw the page content into `area`
    fn render_content(&self, area: Rect, buf: &mut Buffer, is_collapsed: bool);
}
