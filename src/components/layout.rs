// ABOUTME: Main layout component: full-screen stepper with a bottom hint bar

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::AppState;

const GOLD: Color = Color::Rgb(255, 215, 0);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);

pub struct LayoutComponent;

impl LayoutComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&mut self, frame: &mut Frame, state: &mut AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Stepper
                Constraint::Length(1), // Hint bar
            ])
            .split(frame.size());

        state.stepper.render(frame, chunks[0]);
        self.render_hint_bar(frame, chunks[1], state);
    }

    fn render_hint_bar(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let progress = format!(
            " {}/{} ",
            state.stepper.active_index() + 1,
            state.stepper.page_count()
        );

        let key = |k: &'static str| Span::styled(k, Style::default().fg(GOLD).add_modifier(Modifier::BOLD));
        let text = |t: &'static str| Span::styled(t, Style::default().fg(MUTED_GRAY));

        let line = Line::from(vec![
            Span::styled(progress, Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)),
            text("  "),
            key("Enter"),
            text(" next  "),
            key("←"),
            text(" back  "),
            key("1-9"),
            text(" jump  "),
            key("click"),
            text(" band to return  "),
            key("q"),
            text(" quit"),
        ]);

        frame.render_widget(
            Paragraph::new(line).style(Style::default().bg(DARK_BG)),
            area,
        );
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
