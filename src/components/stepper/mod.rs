// ABOUTME: Stepped onboarding widget
// Stacks pages vertically, collapsing completed pages into bands above the active one

pub mod animation;
pub mod cell;
pub mod component;
pub mod gradient;
pub mod layout;
pub mod page;
pub mod state;

pub use animation::{AnimatedValue, Easing};
pub use cell::{HitRegion, PageCell};
pub use component::{ClickTarget, StepperBuilder, StepperComponent, DEFAULT_ANIMATION, DEFAULT_COLLAPSED_FRACTION};
pub use layout::{PageFrame, StepperLayout};
pub use page::StepupPage;
pub use state::{StepOutcome, StepperError, StepperState, ViewState};
