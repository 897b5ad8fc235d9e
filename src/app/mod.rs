// ABOUTME: Application structure and state management for the stepup TUI

pub mod events;
pub mod state;

pub use events::{AppEvent, EventHandler};
pub use state::{App, AppState};
