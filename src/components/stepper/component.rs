// ABOUTME: The stepper container component
// Owns the pages and active index, lays out and animates the page stack

use std::time::{Duration, Instant};

use ratatui::{layout::Rect, widgets::Clear, Frame};
use tracing::{debug, info};

use super::animation::{AnimatedValue, Easing};
use super::cell::{HitRegion, PageCell};
use super::layout::{validate_fraction, StepperLayout};
use super::page::StepupPage;
use super::state::{StepOutcome, StepperError, StepperState, ViewState};

pub const DEFAULT_COLLAPSED_FRACTION: f32 = 0.1;
pub const DEFAULT_ANIMATION: Duration = Duration::from_millis(350);

/// What a click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The return overlay of a collapsed page
    Overlay(usize),
    /// The forward control of the active page
    Action(usize),
    /// Page content, not interactive at this level
    Content(usize),
}

/// Per-page transition state
#[derive(Debug, Clone, Copy)]
struct CellMotion {
    /// 0.0 = stacked at its offset, 1.0 = parked below the visible area
    reveal: AnimatedValue,
    /// 0.0 = vertical gradient, 1.0 = horizontal gradient
    collapse: AnimatedValue,
}

pub struct StepperBuilder {
    pages: Vec<Box<dyn StepupPage>>,
    initial_index: usize,
    collapsed_fraction: f32,
    animation: Duration,
    easing: Easing,
    bottom_inset: u16,
}

impl StepperBuilder {
    pub fn initial_index(mut self, index: usize) -> Self {
        self.initial_index = index;
        self
    }

    pub fn collapsed_fraction(mut self, fraction: f32) -> Self {
        self.collapsed_fraction = fraction;
        self
    }

    /// Transition length; zero disables animation
    pub fn animation(mut self, duration: Duration) -> Self {
        self.animation = duration;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Extra rows a parked page is pushed below the visible area
    pub fn bottom_inset(mut self, rows: u16) -> Self {
        self.bottom_inset = rows;
        self
    }

    pub fn build(self) -> Result<StepperComponent, StepperError> {
        let state = StepperState::new(self.pages.len(), self.initial_index)?;
        let collapsed_fraction = validate_fraction(self.collapsed_fraction)?;

        let motions = (0..self.pages.len())
            .map(|position| CellMotion {
                reveal: AnimatedValue::settled(resting_reveal(position, &state), self.animation)
                    .with_easing(self.easing),
                collapse: AnimatedValue::settled(resting_collapse(position, &state), self.animation)
                    .with_easing(self.easing),
            })
            .collect();

        debug!(
            pages = self.pages.len(),
            initial_index = self.initial_index,
            collapsed_fraction,
            "Built stepper"
        );

        Ok(StepperComponent {
            pages: self.pages,
            state,
            collapsed_fraction,
            bottom_inset: self.bottom_inset,
            motions,
            hit_regions: Vec::new(),
        })
    }
}

fn resting_reveal(position: usize, state: &StepperState) -> f32 {
    if position <= state.active_index() {
        0.0
    } else {
        1.0
    }
}

fn resting_collapse(position: usize, state: &StepperState) -> f32 {
    match state.view_state(position) {
        ViewState::Collapsed => 1.0,
        ViewState::Expanded => 0.0,
    }
}

/// Stacks pages vertically, collapsing completed ones into bands
pub struct StepperComponent {
    pages: Vec<Box<dyn StepupPage>>,
    state: StepperState,
    collapsed_fraction: f32,
    bottom_inset: u16,
    motions: Vec<CellMotion>,
    /// Click targets from the last render, in render order
    hit_regions: Vec<HitRegion>,
}

impl StepperComponent {
    pub fn builder(pages: Vec<Box<dyn StepupPage>>) -> StepperBuilder {
        StepperBuilder {
            pages,
            initial_index: 0,
            collapsed_fraction: DEFAULT_COLLAPSED_FRACTION,
            animation: DEFAULT_ANIMATION,
            easing: Easing::EaseInOut,
            bottom_inset: 0,
        }
    }

    /// Stepper with default index, fraction, and animation
    pub fn new(pages: Vec<Box<dyn StepupPage>>) -> Result<Self, StepperError> {
        Self::builder(pages).build()
    }

    pub fn state(&self) -> &StepperState {
        &self.state
    }

    pub fn active_index(&self) -> usize {
        self.state.active_index()
    }

    pub fn page_count(&self) -> usize {
        self.state.page_count()
    }

    pub fn is_completed(&self) -> bool {
        self.state.is_completed()
    }

    pub fn collapsed_fraction(&self) -> f32 {
        self.collapsed_fraction
    }

    pub fn layout_for(&self, area: Rect) -> StepperLayout {
        StepperLayout::new(f32::from(area.height), self.collapsed_fraction)
            .with_bottom_inset(f32::from(self.bottom_inset))
    }

    /// Forward control of the active page
    pub fn next(&mut self) -> StepOutcome {
        self.next_at(Instant::now())
    }

    pub fn next_at(&mut self, now: Instant) -> StepOutcome {
        let outcome = self.state.advance();
        self.after_navigation(outcome, now);
        outcome
    }

    /// Return overlay of a collapsed page
    pub fn jump_to(&mut self, position: usize) -> StepOutcome {
        self.jump_to_at(position, Instant::now())
    }

    pub fn jump_to_at(&mut self, position: usize, now: Instant) -> StepOutcome {
        let outcome = self.state.jump_to(position);
        self.after_navigation(outcome, now);
        outcome
    }

    pub fn go_back(&mut self) -> StepOutcome {
        self.go_back_at(Instant::now())
    }

    pub fn go_back_at(&mut self, now: Instant) -> StepOutcome {
        let outcome = self.state.go_back();
        self.after_navigation(outcome, now);
        outcome
    }

    fn after_navigation(&mut self, outcome: StepOutcome, now: Instant) {
        match outcome {
            StepOutcome::Advanced { from, to } => info!(from, to, "Advanced to next page"),
            StepOutcome::Returned { from, to } => info!(from, to, "Returned to collapsed page"),
            StepOutcome::Completed => info!(pages = self.page_count(), "Stepper completed"),
            StepOutcome::Ignored => debug!(active = self.active_index(), "Navigation ignored"),
        }

        if !outcome.changed_index() {
            return;
        }

        for (position, motion) in self.motions.iter_mut().enumerate() {
            motion.reveal.set_target(resting_reveal(position, &self.state), now);
            motion.collapse.set_target(resting_collapse(position, &self.state), now);
        }
    }

    /// Whether any page is still moving; the event loop redraws faster meanwhile
    pub fn is_animating(&self, now: Instant) -> bool {
        self.motions
            .iter()
            .any(|m| m.reveal.is_animating(now) || m.collapse.is_animating(now))
    }

    /// Settle every transition immediately
    pub fn finish_animations(&mut self) {
        for motion in &mut self.motions {
            motion.reveal.snap_to(motion.reveal.target());
            motion.collapse.snap_to(motion.collapse.target());
        }
    }

    /// Current top edge of each page relative to the stepper, sampled at `now`
    pub fn page_tops(&self, area: Rect, now: Instant) -> Vec<f32> {
        let layout = self.layout_for(area);
        self.motions
            .iter()
            .enumerate()
            .map(|(position, motion)| layout.frame(position).top_at(motion.reveal.value_at(now)))
            .collect()
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.render_at(frame, area, Instant::now());
    }

    /// Draw pages first-to-last so later pages overlay earlier bands
    pub fn render_at(&mut self, frame: &mut Frame, area: Rect, now: Instant) {
        frame.render_widget(Clear, area);
        self.hit_regions.clear();

        let layout = self.layout_for(area);
        let buf = frame.buffer_mut();

        for (position, page) in self.pages.iter().enumerate() {
            let page_frame = layout.frame(position);
            let motion = &self.motions[position];
            let top = page_frame.top_at(motion.reveal.value_at(now));

            let cell = PageCell {
                page: &**page,
                position,
                view_state: self.state.view_state(position),
                action_label: self.state.action_label(position),
                orientation: motion.collapse.value_at(now),
                top: i32::from(area.y) + top.round() as i32,
                height: page_frame.height.round().max(0.0) as u16,
            };

            if let Some(region) = cell.render(area, buf) {
                self.hit_regions.push(region);
            }
        }
    }

    /// Resolve a click against the last render, topmost page first
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickTarget> {
        let region = self.hit_regions.iter().rev().find(|r| r.contains(x, y))?;

        if region.overlay_contains(x, y) {
            Some(ClickTarget::Overlay(region.position))
        } else if region.action_contains(x, y) {
            Some(ClickTarget::Action(region.position))
        } else {
            Some(ClickTarget::Content(region.position))
        }
    }

    /// Apply a left click. Only the active page's control advances.
    pub fn handle_click(&mut self, x: u16, y: u16) -> StepOutcome {
        match self.hit_test(x, y) {
            Some(ClickTarget::Overlay(position)) => self.jump_to(position),
            Some(ClickTarget::Action(position)) if position == self.active_index() => self.next(),
            _ => StepOutcome::Ignored,
        }
    }
}
