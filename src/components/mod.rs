// ABOUTME: UI components for the stepup TUI: the stepper widget, demo pages, and screen layout

pub mod layout;
pub mod pages;
pub mod stepper;

pub use layout::LayoutComponent;
pub use pages::{onboarding_pages, InfoPage};
pub use stepper::{StepperComponent, StepupPage};
