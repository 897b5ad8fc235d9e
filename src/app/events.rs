// ABOUTME: Event handling system for keyboard and mouse input

use crate::app::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    /// Forward control of the active page
    NextPage,
    /// Return to the page before the active one
    PreviousPage,
    /// Return to a collapsed page by position
    JumpTo(usize),
    MouseClick { x: u16, y: u16 },
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, _state: &mut AppState) -> Option<AppEvent> {
        if key_event.modifiers.contains(KeyModifiers::CONTROL) {
            return match key_event.code {
                KeyCode::Char('c') => Some(AppEvent::Quit),
                _ => None,
            };
        }

        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Enter | KeyCode::Right | KeyCode::Char(' ' | 'n') => Some(AppEvent::NextPage),
            KeyCode::Backspace | KeyCode::Left | KeyCode::Char('b') => Some(AppEvent::PreviousPage),
            // Pages are numbered from 1 in the hint bar
            KeyCode::Char(c @ '1'..='9') => {
                let position = c.to_digit(10).map(|d| d as usize - 1)?;
                Some(AppEvent::JumpTo(position))
            }
            _ => None,
        }
    }

    pub fn handle_mouse_event(mouse_event: MouseEvent, _state: &mut AppState) -> Option<AppEvent> {
        match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(AppEvent::MouseClick {
                x: mouse_event.column,
                y: mouse_event.row,
            }),
            _ => None,
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        debug!(?event, "Processing event");
        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::NextPage => state.next_page(),
            AppEvent::PreviousPage => state.previous_page(),
            AppEvent::JumpTo(position) => state.jump_to_page(position),
            AppEvent::MouseClick { x, y } => state.click(x, y),
        }
    }
}
