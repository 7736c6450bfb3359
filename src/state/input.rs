//! Input Module - Event conversion and polling
//!
//! Bridges crossterm's event system with our mouse and keyboard modules.
//! Provides event polling, conversion, and routing.
//!
//! # API
//!
//! - `convert_mouse_event` - Convert crossterm MouseEvent to our MouseEvent
//! - `convert_key_event` - Convert crossterm KeyEvent to our KeyboardEvent
//! - `poll_event` - Non-blocking event check with timeout
//! - `route_event` - Dispatch event to the appropriate handler
//! - `enable_mouse` / `disable_mouse` - Control mouse capture

use std::io::stdout;
use std::time::Duration;

use crossterm::event::{
    poll, read, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyCode,
    KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyModifiers,
    MouseButton as CrosstermMouseButton, MouseEvent as CrosstermMouseEvent, MouseEventKind,
};
use crossterm::execute;

use super::keyboard::{self, KeyboardEvent, Modifiers};
use super::mouse::{self, MouseAction, MouseButton, MouseEvent};
use crate::pipeline::terminal::set_terminal_size;

// =============================================================================
// INPUT EVENT ENUM
// =============================================================================

/// Unified event type for the framework.
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Mouse event (click, move, etc.)
    Mouse(MouseEvent),
    /// Keyboard event
    Key(KeyboardEvent),
    /// Terminal resize event (new width, height)
    Resize(u16, u16),
    /// No event or unhandled event type
    None,
}

// =============================================================================
// MOUSE EVENT CONVERSION
// =============================================================================

/// Convert crossterm MouseEvent to our MouseEvent.
///
/// Scroll and drag events have no consumer here and map to `None`.
pub fn convert_mouse_event(event: CrosstermMouseEvent) -> Option<MouseEvent> {
    let (action, button) = match event.kind {
        MouseEventKind::Down(btn) => (MouseAction::Down, convert_mouse_button(btn)),
        MouseEventKind::Up(btn) => (MouseAction::Up, convert_mouse_button(btn)),
        MouseEventKind::Moved => (MouseAction::Move, MouseButton::None),
        _ => return None,
    };

    Some(MouseEvent {
        action,
        button,
        x: event.column,
        y: event.row,
        modifiers: convert_modifiers(event.modifiers),
        component_index: None, // Filled by dispatch
    })
}

/// Convert crossterm MouseButton to our MouseButton
fn convert_mouse_button(btn: CrosstermMouseButton) -> MouseButton {
    match btn {
        CrosstermMouseButton::Left => MouseButton::Left,
        CrosstermMouseButton::Right => MouseButton::Right,
        CrosstermMouseButton::Middle => MouseButton::Middle,
    }
}

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Convert crossterm KeyEvent to our KeyboardEvent
pub fn convert_key_event(event: CrosstermKeyEvent) -> KeyboardEvent {
    let key = match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        other => format!("{:?}", other),
    };

    KeyboardEvent {
        key,
        modifiers: convert_modifiers(event.modifiers),
    }
}

fn convert_modifiers(modifiers: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: modifiers.contains(KeyModifiers::CONTROL),
        alt: modifiers.contains(KeyModifiers::ALT),
        shift: modifiers.contains(KeyModifiers::SHIFT),
    }
}

// =============================================================================
// POLLING
// =============================================================================

/// Poll for an event with a timeout.
///
/// Returns `Ok(None)` if no event arrived within the timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<InputEvent>> {
    if !poll(timeout)? {
        return Ok(None);
    }

    let event = match read()? {
        CrosstermEvent::Mouse(mouse_event) => match convert_mouse_event(mouse_event) {
            Some(event) => InputEvent::Mouse(event),
            None => InputEvent::None,
        },
        CrosstermEvent::Key(key_event) => {
            // Release events arrive on some terminals; handlers only
            // care about presses and repeats.
            if key_event.kind == KeyEventKind::Release {
                InputEvent::None
            } else {
                InputEvent::Key(convert_key_event(key_event))
            }
        }
        CrosstermEvent::Resize(width, height) => InputEvent::Resize(width, height),
        _ => InputEvent::None,
    };

    Ok(Some(event))
}

// =============================================================================
// ROUTING
// =============================================================================

/// Dispatch an event to the appropriate handler registry.
pub fn route_event(event: InputEvent) {
    match event {
        InputEvent::Mouse(mouse_event) => {
            mouse::dispatch(mouse_event);
        }
        InputEvent::Key(key_event) => {
            keyboard::dispatch(key_event);
        }
        InputEvent::Resize(width, height) => {
            tracing::debug!(width, height, "terminal resized");
            set_terminal_size(width, height);
        }
        InputEvent::None => {}
    }
}

// =============================================================================
// MOUSE CAPTURE
// =============================================================================

/// Enable mouse capture on the terminal.
pub fn enable_mouse() -> std::io::Result<()> {
    execute!(stdout(), EnableMouseCapture)
}

/// Disable mouse capture on the terminal.
pub fn disable_mouse() -> std::io::Result<()> {
    execute!(stdout(), DisableMouseCapture)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_key_event() {
        let event = CrosstermKeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let converted = convert_key_event(event);
        assert_eq!(converted.key, "c");
        assert!(converted.modifiers.ctrl);
        assert!(!converted.modifiers.shift);

        let event = CrosstermKeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(convert_key_event(event).key, "Enter");
    }

    #[test]
    fn test_convert_mouse_event() {
        let event = CrosstermMouseEvent {
            kind: MouseEventKind::Down(CrosstermMouseButton::Left),
            column: 5,
            row: 7,
            modifiers: KeyModifiers::NONE,
        };
        let converted = convert_mouse_event(event).unwrap();
        assert_eq!(converted.action, MouseAction::Down);
        assert_eq!(converted.button, MouseButton::Left);
        assert_eq!(converted.x, 5);
        assert_eq!(converted.y, 7);
    }

    #[test]
    fn test_scroll_events_dropped() {
        let event = CrosstermMouseEvent {
            kind: MouseEventKind::ScrollUp,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert!(convert_mouse_event(event).is_none());
    }
}
