//! Keyboard Module - Keyboard event state and handler registry
//!
//! State and handler registry for keyboard events.
//! Does NOT own stdin (that is the input module).
//!
//! # API
//!
//! - `last_event` - Get last keyboard event
//! - `last_key` - Get last key pressed
//! - `on(handler)` - Subscribe to all keyboard events
//! - `on_key(key, fn)` - Subscribe to a specific key
//! - `dispatch(event)` - Dispatch keyboard event

use std::cell::RefCell;

use spark_signals::{signal, Signal};

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    /// Create empty modifiers
    pub fn none() -> Self {
        Self::default()
    }

    /// Create modifiers with ctrl
    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "a", "Enter", "ArrowUp")
    pub key: String,
    /// Modifier keys state
    pub modifiers: Modifiers,
}

impl KeyboardEvent {
    /// Create a simple key press event
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
        }
    }

    /// Create a key press with modifiers
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
        }
    }
}

// =============================================================================
// REACTIVE STATE
// =============================================================================

thread_local! {
    static LAST_EVENT: Signal<Option<KeyboardEvent>> = signal(None);
}

/// Get the last keyboard event
pub fn last_event() -> Option<KeyboardEvent> {
    LAST_EVENT.with(|s| s.get())
}

/// Get the last key pressed
pub fn last_key() -> Option<String> {
    last_event().map(|e| e.key)
}

// =============================================================================
// HANDLER REGISTRY
// =============================================================================

/// Handler for keyboard events. Return true to consume the event.
pub type KeyHandler = Box<dyn Fn(&KeyboardEvent) -> bool>;

struct HandlerRegistry {
    handlers: Vec<(usize, KeyHandler)>,
    next_id: usize,
}

impl HandlerRegistry {
    fn new() -> Self {
        Self {
            handlers: Vec::new(),
            next_id: 0,
        }
    }
}

thread_local! {
    static REGISTRY: RefCell<HandlerRegistry> = RefCell::new(HandlerRegistry::new());
}

// =============================================================================
// PUBLIC API - REGISTRATION
// =============================================================================

/// Subscribe to all keyboard events. Returns cleanup function.
pub fn on<F>(handler: F) -> impl FnOnce()
where
    F: Fn(&KeyboardEvent) -> bool + 'static,
{
    let id = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let id = reg.next_id;
        reg.next_id += 1;
        reg.handlers.push((id, Box::new(handler)));
        id
    });

    move || {
        REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            reg.handlers.retain(|(handler_id, _)| *handler_id != id);
        });
    }
}

/// Subscribe to a specific key (without modifiers). Returns cleanup function.
pub fn on_key<F>(key: &str, handler: F) -> impl FnOnce()
where
    F: Fn() + 'static,
{
    let key = key.to_string();
    on(move |event| {
        if event.key == key && event.modifiers == Modifiers::none() {
            handler();
            true
        } else {
            false
        }
    })
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Dispatch a keyboard event to all registered handlers.
/// Returns true if any handler consumed the event.
pub fn dispatch(event: KeyboardEvent) -> bool {
    LAST_EVENT.with(|s| s.set(Some(event.clone())));

    REGISTRY.with(|reg| {
        let reg = reg.borrow();
        for (_, handler) in &reg.handlers {
            if handler(&event) {
                return true;
            }
        }
        false
    })
}

// =============================================================================
// Reset (for testing)
// =============================================================================

/// Reset keyboard state (for testing).
pub fn reset_keyboard_state() {
    LAST_EVENT.with(|s| s.set(None));
    REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        reg.handlers.clear();
        reg.next_id = 0;
    });
}

// =============================================================================
// Tests
// =============================================================================
