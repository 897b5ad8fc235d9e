// ABOUTME: Application state wrapping the stepper and quit/completion flags

use anyhow::Result;
use tracing::info;

use crate::components::stepper::{StepOutcome, StepperComponent, StepupPage};
use crate::config::StepupConfig;

pub struct AppState {
    pub stepper: StepperComponent,
    pub should_quit: bool,
    /// Outcome of the most recent navigation, for status display and tests
    pub last_outcome: Option<StepOutcome>,
}

impl AppState {
    pub fn new(pages: Vec<Box<dyn StepupPage>>, config: &StepupConfig) -> Result<Self> {
        let stepper = config.apply(StepperComponent::builder(pages)).build()?;
        Ok(Self {
            stepper,
            should_quit: false,
            last_outcome: None,
        })
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn next_page(&mut self) {
        let outcome = self.stepper.next();
        self.record(outcome);
    }

    pub fn previous_page(&mut self) {
        let outcome = self.stepper.go_back();
        self.record(outcome);
    }

    pub fn jump_to_page(&mut self, position: usize) {
        let outcome = self.stepper.jump_to(position);
        self.record(outcome);
    }

    pub fn click(&mut self, x: u16, y: u16) {
        let outcome = self.stepper.handle_click(x, y);
        self.record(outcome);
    }

    fn record(&mut self, outcome: StepOutcome) {
        if outcome == StepOutcome::Completed {
            info!("Onboarding flow finished");
            self.quit();
        }
        self.last_outcome = Some(outcome);
    }
}

pub struct App {
    pub state: AppState,
}

impl App {
    pub fn new(pages: Vec<Box<dyn StepupPage>>, config: &StepupConfig) -> Result<Self> {
        Ok(Self {
            state: AppState::new(pages, config)?,
        })
    }
}
