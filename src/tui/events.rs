//! # Module: TUI Event Handling
//!
//! ## Responsibility
//! Polls crossterm events and translates keyboard and mouse input into app
//! state mutations: toggle, quit, and the help overlay.
//!
//! ## Guarantees
//! - Non-blocking event polling with configurable timeout
//! - No panics on any key combination
//! - Ctrl+C always triggers quit

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use tracing::debug;

use super::app::App;
use super::ui::{hit, screen_layout};

/// Result of polling for a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// User pressed quit (q, Esc, or Ctrl+C).
    Quit,
    /// User asked to switch between unsorted and sorted order.
    Toggle,
    /// User toggled the help overlay.
    Help,
    /// Left mouse button pressed at (column, row).
    Click {
        /// Terminal column.
        column: u16,
        /// Terminal row.
        row: u16,
    },
    /// A terminal resize occurred.
    Resize(u16, u16),
    /// No actionable event within the poll window.
    None,
}

/// Polls for a single input event with the given timeout.
///
/// Returns `InputEvent::None` if nothing arrived or polling failed.
pub fn poll_event(timeout: Duration) -> InputEvent {
    let available = match event::poll(timeout) {
        Ok(v) => v,
        Err(_) => return InputEvent::None,
    };
    if !available {
        return InputEvent::None;
    }

    match event::read() {
        Ok(Event::Key(key)) => translate_key(key),
        Ok(Event::Mouse(mouse)) => translate_mouse(mouse),
        Ok(Event::Resize(w, h)) => InputEvent::Resize(w, h),
        _ => InputEvent::None,
    }
}

/// Applies an input event to the app state.
pub fn apply_event(app: &mut App, event: InputEvent) {
    match event {
        InputEvent::Quit => app.should_quit = true,
        InputEvent::Help => app.show_help = !app.show_help,
        InputEvent::Toggle => {
            if app.show_help {
                app.show_help = false;
            } else {
                app.toggle();
            }
        }
        InputEvent::Click { column, row } => {
            let (w, h) = app.viewport;
            let button = screen_layout(Rect::new(0, 0, w, h)).button;
            // The size guard hides the button.
            if !app.show_help && app.fits(w, h) && hit(button, column, row) {
                app.toggle();
            } else {
                debug!(column, row, "click outside button ignored");
            }
        }
        InputEvent::Resize(w, h) => app.viewport = (w, h),
        InputEvent::None => {}
    }
}

/// Translates a crossterm key event to an `InputEvent`.
fn translate_key(key: KeyEvent) -> InputEvent {
    // Windows reports both press and release
    if key.kind == KeyEventKind::Release {
        return InputEvent::None;
    }

    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputEvent::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => InputEvent::Quit,
        KeyCode::Esc => InputEvent::Quit,
        KeyCode::Char(' ') | KeyCode::Enter => InputEvent::Toggle,
        KeyCode::Char('t') | KeyCode::Char('T') => InputEvent::Toggle,
        KeyCode::Char('h') | KeyCode::Char('H') => InputEvent::Help,
        _ => InputEvent::None,
    }
}

/// Translates a crossterm mouse event to an `InputEvent`.
fn translate_mouse(mouse: MouseEvent) -> InputEvent {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => InputEvent::Click {
            column: mouse.column,
            row: mouse.row,
        },
        _ => InputEvent::None,
    }
}
