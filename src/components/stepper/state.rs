// ABOUTME: Active-index bookkeeping for the stepper
// Resolves each page's collapsed/expanded state from its position

use thiserror::Error;

/// Visual state of a single page cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// Completed page shown as a thin band
    Collapsed,
    /// Active or upcoming page shown at full height
    Expanded,
}

impl ViewState {
    pub fn is_collapsed(self) -> bool {
        self == Self::Collapsed
    }
}

/// Errors raised while constructing a stepper
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StepperError {
    #[error("stepper requires at least one page")]
    NoPages,

    #[error("initial index {index} is out of range for {page_count} pages")]
    IndexOutOfRange { index: usize, page_count: usize },

    #[error("collapsed height fraction must be finite and in [0, 1), got {0}")]
    InvalidFraction(f32),
}

/// Result of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved forward one page
    Advanced { from: usize, to: usize },
    /// Jumped back to an earlier, collapsed page
    Returned { from: usize, to: usize },
    /// "Start" was activated on the last page
    Completed,
    /// Nothing changed
    Ignored,
}

impl StepOutcome {
    /// Whether the active index moved
    pub fn changed_index(&self) -> bool {
        matches!(self, Self::Advanced { .. } | Self::Returned { .. })
    }
}

/// Single source of truth for which page is being completed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepperState {
    page_count: usize,
    active_index: usize,
    completed: bool,
}

impl StepperState {
    pub fn new(page_count: usize, initial_index: usize) -> Result<Self, StepperError> {
        if page_count == 0 {
            return Err(StepperError::NoPages);
        }
        if initial_index >= page_count {
            return Err(StepperError::IndexOutOfRange {
                index: initial_index,
                page_count,
            });
        }

        Ok(Self {
            page_count,
            active_index: initial_index,
            completed: false,
        })
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Whether "Start" has been activated on the last page
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_last(&self, position: usize) -> bool {
        position + 1 == self.page_count
    }

    /// Collapsed iff the active index has moved past this position
    pub fn view_state(&self, position: usize) -> ViewState {
        if self.active_index > position {
            ViewState::Collapsed
        } else {
            ViewState::Expanded
        }
    }

    /// Resolved state for every page, in position order
    pub fn cell_states(&self) -> Vec<ViewState> {
        (0..self.page_count).map(|p| self.view_state(p)).collect()
    }

    /// Label of the forward control for the page at `position`
    pub fn action_label(&self, position: usize) -> &'static str {
        if self.is_last(position) {
            "Start"
        } else {
            "Next"
        }
    }

    /// Move forward one page, or complete the flow from the last page
    pub fn advance(&mut self) -> StepOutcome {
        if self.is_last(self.active_index) {
            self.completed = true;
            return StepOutcome::Completed;
        }

        let from = self.active_index;
        self.active_index += 1;
        StepOutcome::Advanced {
            from,
            to: self.active_index,
        }
    }

    /// Return to a collapsed page. Expanded positions are not reachable this way.
    pub fn jump_to(&mut self, position: usize) -> StepOutcome {
        if !self.view_state(position).is_collapsed() {
            return StepOutcome::Ignored;
        }

        let from = self.active_index;
        self.active_index = position;
        self.completed = false;
        StepOutcome::Returned { from, to: position }
    }

    /// Return to the page just before the active one, if any
    pub fn go_back(&mut self) -> StepOutcome {
        match self.active_index.checked_sub(1) {
            Some(previous) => self.jump_to(previous),
            None => StepOutcome::Ignored,
        }
    }
}
