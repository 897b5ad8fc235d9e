// ABOUTME: End-to-end stepper scenario on a 1000-row canvas with three pages

use std::time::{Duration, Instant};

use ratatui::{buffer::Buffer, layout::Rect, style::Color};

use stepup::components::stepper::{
    StepOutcome, StepperComponent, StepperLayout, StepupPage, ViewState,
};

struct Swatch;

impl StepupPage for Swatch {
    fn gradient_colors(&self) -> (Color, Color) {
        (Color::Red, Color::Green)
    }

    fn render_content(&self, _area: Rect, _buf: &mut Buffer, _is_collapsed: bool) {}
}

fn three_pages() -> StepperComponent {
    let pages: Vec<Box<dyn StepupPage>> = vec![Box::new(Swatch), Box::new(Swatch), Box::new(Swatch)];
    StepperComponent::builder(pages)
        .collapsed_fraction(0.1)
        .animation(Duration::ZERO)
        .build()
        .unwrap()
}

fn assert_close(actual: &[f32], expected: &[f32]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-3, "expected {expected:?}, got {actual:?}");
    }
}

#[test]
fn test_three_page_scenario() {
    let area = Rect::new(0, 0, 10, 1000);
    let layout = StepperLayout::new(1000.0, 0.1);
    let mut stepper = three_pages();
    let now = Instant::now();

    // Offsets are fixed by position
    let offsets: Vec<f32> = (0..3).map(|p| layout.offset(p)).collect();
    assert_close(&offsets, &[0.0, 100.0, 200.0]);
    assert!((layout.height(0) - 1000.0).abs() < 1e-3);

    // Initial: page 0 fills the canvas, pages 1 and 2 parked below it
    assert_eq!(stepper.active_index(), 0);
    assert_close(&stepper.page_tops(area, now), &[0.0, 1000.0, 1000.0]);
    assert_eq!(stepper.state().view_state(0), ViewState::Expanded);

    // Next on page 0
    assert_eq!(stepper.next_at(now), StepOutcome::Advanced { from: 0, to: 1 });
    assert_eq!(stepper.state().view_state(0), ViewState::Collapsed);
    assert_eq!(stepper.state().view_state(1), ViewState::Expanded);
    assert_close(&stepper.page_tops(area, now), &[0.0, 100.0, 1000.0]);
    assert!((layout.height(1) - 900.0).abs() < 1e-3);

    // Overlay on page 0
    assert_eq!(stepper.jump_to_at(0, now), StepOutcome::Returned { from: 1, to: 0 });
    assert_eq!(stepper.state().view_state(0), ViewState::Expanded);
    assert_close(&stepper.page_tops(area, now), &[0.0, 1000.0, 1000.0]);
}

#[test]
fn test_offsets_do_not_depend_on_active_index() {
    let area = Rect::new(0, 0, 10, 1000);
    let mut stepper = three_pages();
    let layout = stepper.layout_for(area);
    let before: Vec<f32> = (0..3).map(|p| layout.frame(p).offset).collect();

    stepper.next();
    stepper.next();

    let after: Vec<f32> = (0..3).map(|p| stepper.layout_for(area).frame(p).offset).collect();
    assert_close(&before, &after);
    assert_close(&stepper.page_tops(area, Instant::now()), &before);
}

#[test]
fn test_start_label_only_on_last_page() {
    let stepper = three_pages();
    let labels: Vec<&str> = (0..3).map(|p| stepper.state().action_label(p)).collect();
    assert_eq!(labels, vec!["Next", "Next", "Start"]);
}
