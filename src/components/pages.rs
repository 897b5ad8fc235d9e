// ABOUTME: Demo pages for the stepup binary
// A small onboarding flow used to exercise the stepper interactively

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::stepper::StepupPage;

const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const GOLD: Color = Color::Rgb(255, 215, 0);

/// A titled page that shrinks to a one-line summary when collapsed
#[derive(Debug, Clone)]
pub struct InfoPage {
    pub title: &'static str,
    pub summary: &'static str,
    pub body: Vec<&'static str>,
    pub colors: (Color, Color),
}

impl InfoPage {
    pub fn new(title: &'static str, summary: &'static str, colors: (Color, Color)) -> Self {
        Self {
            title,
            summary,
            body: Vec::new(),
            colors,
        }
    }

    pub fn body(mut self, lines: &[&'static str]) -> Self {
        self.body = lines.to_vec();
        self
    }
}

impl StepupPage for InfoPage {
    fn gradient_colors(&self) -> (Color, Color) {
        self.colors
    }

    fn render_content(&self, area: Rect, buf: &mut Buffer, is_collapsed: bool) {
        let title = Span::styled(
            self.title,
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        );

        if is_collapsed {
            Paragraph::new(Line::from(vec![
                title,
                Span::styled("  ", Style::default()),
                Span::styled(self.summary, Style::default().fg(SOFT_WHITE)),
            ]))
            .alignment(Alignment::Left)
            .render(area, buf);
            return;
        }

        let mut lines = vec![Line::from(title), Line::from("")];
        lines.extend(
            self.body
                .iter()
                .map(|line| Line::from(Span::styled(*line, Style::default().fg(SOFT_WHITE)))),
        );

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

/// The onboarding flow shown by the binary
pub fn onboarding_pages() -> Vec<Box<dyn StepupPage>> {
    vec![
        Box::new(
            InfoPage::new(
                "Welcome",
                "Getting started",
                (Color::Rgb(120, 30, 40), Color::Rgb(30, 110, 60)),
            )
            .body(&[
                "This short tour sets up your workspace.",
                "",
                "Press Enter or click Next to continue.",
                "Click a collapsed band above to go back.",
            ]),
        ),
        Box::new(
            InfoPage::new(
                "Profile",
                "Name and avatar",
                (Color::Rgb(20, 120, 140), Color::Rgb(10, 10, 20)),
            )
            .body(&["Tell us what to call you.", "You can change this later."]),
        ),
        Box::new(
            InfoPage::new(
                "Preferences",
                "Theme and layout",
                (Color::Rgb(40, 60, 160), Color::Rgb(200, 200, 210)),
            )
            .body(&["Pick a theme and a default layout."]),
        ),
        Box::new(
            InfoPage::new(
                "Notifications",
                "What we tell you about",
                (Color::Rgb(170, 70, 120), Color::Rgb(20, 20, 20)),
            )
            .body(&["Choose which events deserve a ping."]),
        ),
        Box::new(
            InfoPage::new(
                "Ready",
                "All set",
                (Color::Rgb(90, 40, 130), Color::Rgb(110, 80, 50)),
            )
            .body(&["Everything is in place.", "", "Press Start to begin."]),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(page: &InfoPage, is_collapsed: bool) -> String {
        let area = Rect::new(0, 0, 50, 6);
        let mut buf = Buffer::empty(area);
        page.render_content(area, &mut buf, is_collapsed);
        (0..area.height)
            .map(|y| (0..area.width).map(|x| buf.get(x, y).symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_collapsed_shows_summary_only() {
        let page = InfoPage::new("Profile", "Name and avatar", (Color::Red, Color::Green))
            .body(&["Tell us what to call you."]);

        let collapsed = rendered(&page, true);
        assert!(collapsed.starts_with("Profile  Name and avatar"));
        assert!(!collapsed.contains("Tell us"));

        let expanded = rendered(&page, false);
        assert!(expanded.contains("Tell us what to call you."));
        assert!(!expanded.contains("Name and avatar"));
    }

    #[test]
    fn test_onboarding_flow_has_pages() {
        assert_eq!(onboarding_pages().len(), 5);
    }
}
