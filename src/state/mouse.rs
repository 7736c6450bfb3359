//! Mouse Module - Mouse event state and handler registry
//!
//! HitGrid for coordinate-to-component lookup.
//! State and handler registry for mouse events.
//! Does NOT own stdin (that is the input module).
//!
//! # API
//!
//! - `last_event` - Get last mouse event
//! - `mouse_x`, `mouse_y` - Get cursor position
//! - `is_mouse_down` - Get button state
//! - `hovered_component` - Get currently hovered component
//! - `dispatch(event)` - Dispatch mouse event
//! - `on_component(index, handlers)` - Per-component handlers
//! - `on_click(fn)` - Global click handler
//!
//! A click is synthesized when a press and release land on the same
//! component with the same button. Click handlers bubble: if the hit
//! component has no handler, its parent chain is walked until one fires.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use spark_signals::{signal, Signal};

use super::keyboard::Modifiers;
use crate::engine::arrays::core;

// =============================================================================
// TYPES
// =============================================================================

/// Mouse action type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    Down,
    Up,
    Move,
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    #[default]
    None,
}

/// Mouse event
#[derive(Debug, Clone, PartialEq)]
pub struct MouseEvent {
    /// Action type (down, up, move)
    pub action: MouseAction,
    /// Button pressed
    pub button: MouseButton,
    /// X coordinate (0-indexed)
    pub x: u16,
    /// Y coordinate (0-indexed)
    pub y: u16,
    /// Modifier keys state
    pub modifiers: Modifiers,
    /// Component index at this position (filled by dispatch)
    pub component_index: Option<usize>,
}

impl MouseEvent {
    /// Create a new mouse event
    pub fn new(action: MouseAction, button: MouseButton, x: u16, y: u16) -> Self {
        Self {
            action,
            button,
            x,
            y,
            modifiers: Modifiers::default(),
            component_index: None,
        }
    }

    /// Create a mouse down event
    pub fn down(button: MouseButton, x: u16, y: u16) -> Self {
        Self::new(MouseAction::Down, button, x, y)
    }

    /// Create a mouse up event
    pub fn up(button: MouseButton, x: u16, y: u16) -> Self {
        Self::new(MouseAction::Up, button, x, y)
    }

    /// Create a mouse move event
    pub fn move_to(x: u16, y: u16) -> Self {
        Self::new(MouseAction::Move, MouseButton::None, x, y)
    }
}

// =============================================================================
// HIT GRID - O(1) Coordinate to Component Lookup
// =============================================================================

/// A grid for O(1) mouse hit detection.
///
/// Each cell contains the component index that occupies that position,
/// or `None` if empty.
pub struct HitGrid {
    width: u16,
    height: u16,
    cells: Vec<usize>,
}

impl HitGrid {
    /// Create a new hit grid with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![usize::MAX; size],
        }
    }

    /// Get the grid width.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Get the grid height.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the grid, clearing all contents.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let size = width as usize * height as usize;
        self.cells.resize(size, usize::MAX);
        self.clear();
    }

    /// Clear all cells.
    pub fn clear(&mut self) {
        self.cells.fill(usize::MAX);
    }

    /// Fill a rectangle with a component index.
    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, index: usize) {
        for dy in 0..height {
            let cy = y + dy;
            if cy >= self.height {
                break;
            }
            for dx in 0..width {
                let cx = x + dx;
                if cx >= self.width {
                    break;
                }
                let idx = cy as usize * self.width as usize + cx as usize;
                if idx < self.cells.len() {
                    self.cells[idx] = index;
                }
            }
        }
    }

    /// Get the component index at a position.
    pub fn get(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y as usize * self.width as usize + x as usize;
        let value = self.cells.get(idx).copied().unwrap_or(usize::MAX);
        if value == usize::MAX { None } else { Some(value) }
    }
}

// =============================================================================
// GLOBAL HIT GRID
// =============================================================================

thread_local! {
    static HIT_GRID: RefCell<HitGrid> = RefCell::new(HitGrid::new(80, 24));
}

/// Resize the global hit grid.
pub fn resize_hit_grid(width: u16, height: u16) {
    HIT_GRID.with(|g| g.borrow_mut().resize(width, height));
}

/// Clear the global hit grid.
pub fn clear_hit_grid() {
    HIT_GRID.with(|g| g.borrow_mut().clear());
}

/// Fill a rectangle in the global hit grid.
pub fn fill_hit_rect(x: u16, y: u16, width: u16, height: u16, index: usize) {
    HIT_GRID.with(|g| g.borrow_mut().fill_rect(x, y, width, height, index));
}

/// Get the component at a position from the global hit grid.
pub fn hit_test(x: u16, y: u16) -> Option<usize> {
    HIT_GRID.with(|g| g.borrow().get(x, y))
}

/// Get the global hit grid dimensions.
pub fn hit_grid_size() -> (u16, u16) {
    HIT_GRID.with(|g| {
        let grid = g.borrow();
        (grid.width(), grid.height())
    })
}

// =============================================================================
// REACTIVE STATE
// =============================================================================

thread_local! {
    static LAST_EVENT: Signal<Option<MouseEvent>> = signal(None);
    static MOUSE_X: Signal<u16> = signal(0);
    static MOUSE_Y: Signal<u16> = signal(0);
    static IS_MOUSE_DOWN: Signal<bool> = signal(false);
    static HOVERED_COMPONENT: Signal<Option<usize>> = signal(None);
    static PRESSED_COMPONENT: Signal<Option<usize>> = signal(None);
    static PRESSED_BUTTON: Signal<MouseButton> = signal(MouseButton::None);
}

/// Get the last mouse event
pub fn last_event() -> Option<MouseEvent> {
    LAST_EVENT.with(|s| s.get())
}

/// Get current mouse X position
pub fn mouse_x() -> u16 {
    MOUSE_X.with(|s| s.get())
}

/// Get current mouse Y position
pub fn mouse_y() -> u16 {
    MOUSE_Y.with(|s| s.get())
}

/// Check if a mouse button is currently down
pub fn is_mouse_down() -> bool {
    IS_MOUSE_DOWN.with(|s| s.get())
}

/// Get the currently hovered component index
pub fn hovered_component() -> Option<usize> {
    HOVERED_COMPONENT.with(|s| s.get())
}

/// Get the currently pressed component index
pub fn pressed_component() -> Option<usize> {
    PRESSED_COMPONENT.with(|s| s.get())
}

// =============================================================================
// HANDLER TYPES
// =============================================================================

/// Handler for global mouse events. Return true to consume the event.
pub type MouseHandler = Box<dyn Fn(&MouseEvent) -> bool>;

/// Handlers for a component.
///
/// Uses Rc<dyn Fn> for handlers to allow cloning callbacks into closures.
#[derive(Default)]
pub struct MouseHandlers {
    pub on_mouse_down: Option<Rc<dyn Fn(&MouseEvent)>>,
    pub on_mouse_up: Option<Rc<dyn Fn(&MouseEvent)>>,
    pub on_click: Option<Rc<dyn Fn(&MouseEvent)>>,
    pub on_mouse_enter: Option<Rc<dyn Fn(&MouseEvent)>>,
    pub on_mouse_leave: Option<Rc<dyn Fn(&MouseEvent)>>,
}

// =============================================================================
// HANDLER REGISTRY
// =============================================================================

struct HandlerRegistry {
    component_handlers: HashMap<usize, MouseHandlers>,
    global_click_handlers: Vec<(usize, MouseHandler)>,
    next_id: usize,
}

impl HandlerRegistry {
    fn new() -> Self {
        Self {
            component_handlers: HashMap::new(),
            global_click_handlers: Vec::new(),
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

/// Register handlers for a component. Returns cleanup function.
pub fn on_component(index: usize, handlers: MouseHandlers) -> impl FnOnce() {
    REGISTRY.with(|reg| {
        reg.borrow_mut().component_handlers.insert(index, handlers);
    });

    move || {
        REGISTRY.with(|reg| {
            reg.borrow_mut().component_handlers.remove(&index);
        });
    }
}

/// Register a global click handler. Returns cleanup function.
pub fn on_click<F>(handler: F) -> impl FnOnce()
where
    F: Fn(&MouseEvent) -> bool + 'static,
{
    let id = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let id = reg.next_id;
        reg.next_id += 1;
        reg.global_click_handlers.push((id, Box::new(handler)));
        id
    });

    move || {
        REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            reg.global_click_handlers
                .retain(|(handler_id, _)| *handler_id != id);
        });
    }
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Dispatch a mouse event to all registered handlers.
/// Returns true if any handler consumed the event.
pub fn dispatch(mut event: MouseEvent) -> bool {
    // 1. Lookup component from HitGrid
    event.component_index = hit_test(event.x, event.y);

    // 2. Update reactive state
    LAST_EVENT.with(|s| s.set(Some(event.clone())));
    MOUSE_X.with(|s| s.set(event.x));
    MOUSE_Y.with(|s| s.set(event.y));

    match event.action {
        MouseAction::Down => {
            IS_MOUSE_DOWN.with(|s| s.set(true));
        }
        MouseAction::Up => {
            IS_MOUSE_DOWN.with(|s| s.set(false));
        }
        _ => {}
    }

    let component_index = event.component_index;

    // 3. Handle hover (enter/leave)
    let prev_hovered = HOVERED_COMPONENT.with(|s| s.get());
    if component_index != prev_hovered {
        if let Some(prev_idx) = prev_hovered {
            REGISTRY.with(|reg| {
                let reg = reg.borrow();
                if let Some(handlers) = reg.component_handlers.get(&prev_idx) {
                    if let Some(ref on_leave) = handlers.on_mouse_leave {
                        let mut leave_event = event.clone();
                        leave_event.component_index = Some(prev_idx);
                        on_leave(&leave_event);
                    }
                }
            });
        }

        if let Some(idx) = component_index {
            REGISTRY.with(|reg| {
                let reg = reg.borrow();
                if let Some(handlers) = reg.component_handlers.get(&idx) {
                    if let Some(ref on_enter) = handlers.on_mouse_enter {
                        on_enter(&event);
                    }
                }
            });
        }

        HOVERED_COMPONENT.with(|s| s.set(component_index));
    }

    // 4. Handle specific actions
    match event.action {
        MouseAction::Down => dispatch_down(&event),
        MouseAction::Up => dispatch_up(&event),
        MouseAction::Move => false,
    }
}

fn dispatch_down(event: &MouseEvent) -> bool {
    // Track pressed component
    PRESSED_COMPONENT.with(|s| s.set(event.component_index));
    PRESSED_BUTTON.with(|s| s.set(event.button));

    // Component handler (non-consuming, just fires)
    if let Some(idx) = event.component_index {
        REGISTRY.with(|reg| {
            let reg = reg.borrow();
            if let Some(handlers) = reg.component_handlers.get(&idx) {
                if let Some(ref on_down) = handlers.on_mouse_down {
                    on_down(event);
                }
            }
        });
    }

    false
}

fn dispatch_up(event: &MouseEvent) -> bool {
    let pressed_idx = PRESSED_COMPONENT.with(|s| s.get());
    let pressed_btn = PRESSED_BUTTON.with(|s| s.get());

    // Component handler (non-consuming, just fires)
    if let Some(idx) = event.component_index {
        REGISTRY.with(|reg| {
            let reg = reg.borrow();
            if let Some(handlers) = reg.component_handlers.get(&idx) {
                if let Some(ref on_up) = handlers.on_mouse_up {
                    on_up(event);
                }
            }
        });
    }

    let mut consumed = false;

    // Detect click (press and release on same component with same button)
    if pressed_idx == event.component_index && pressed_btn == event.button {
        tracing::trace!(component = ?event.component_index, "click synthesized");

        // Component click handler with bubbling - walk up the parent chain
        // until a handler is found
        if let Some(idx) = event.component_index {
            let mut current = Some(idx);
            while let Some(component_idx) = current {
                let handler_found = REGISTRY.with(|reg| {
                    let reg = reg.borrow();
                    if let Some(handlers) = reg.component_handlers.get(&component_idx) {
                        if let Some(ref on_click) = handlers.on_click {
                            on_click(event);
                            return true;
                        }
                    }
                    false
                });

                if handler_found {
                    consumed = true;
                    break;
                }

                current = core::get_parent_index(component_idx);
            }
        }

        // Global click handlers (can consume)
        let global_consumed = REGISTRY.with(|reg| {
            let reg = reg.borrow();
            for (_, handler) in &reg.global_click_handlers {
                if handler(event) {
                    return true;
                }
            }
            false
        });
        if global_consumed {
            consumed = true;
        }
    }

    // Clear pressed tracking
    PRESSED_COMPONENT.with(|s| s.set(None));
    PRESSED_BUTTON.with(|s| s.set(MouseButton::None));

    consumed
}

// =============================================================================
// Cleanup / Reset
// =============================================================================

/// Remove all per-component state for an index (called on release).
pub fn cleanup_index(index: usize) {
    REGISTRY.with(|reg| {
        reg.borrow_mut().component_handlers.remove(&index);
    });
    HOVERED_COMPONENT.with(|s| {
        if s.get() == Some(index) {
            s.set(None);
        }
    });
    PRESSED_COMPONENT.with(|s| {
        if s.get() == Some(index) {
            s.set(None);
        }
    });
}

/// Reset mouse state (for testing).
pub fn reset_mouse_state() {
    REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        reg.component_handlers.clear();
        reg.global_click_handlers.clear();
        reg.next_id = 0;
    });
    LAST_EVENT.with(|s| s.set(None));
    MOUSE_X.with(|s| s.set(0));
    MOUSE_Y.with(|s| s.set(0));
    IS_MOUSE_DOWN.with(|s| s.set(false));
    HOVERED_COMPONENT.with(|s| s.set(None));
    PRESSED_COMPONENT.with(|s| s.set(None));
    PRESSED_BUTTON.with(|s| s.set(MouseButton::None));
    HIT_GRID.with(|g| g.borrow_mut().clear());
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{allocate_index, reset_registry};
    use std::cell::Cell;

    fn setup() {
        reset_registry();
        reset_mouse_state();
    }

    #[test]
    fn test_hit_grid() {
        let mut grid = HitGrid::new(10, 10);

        // Initially empty
        assert_eq!(grid.get(5, 5), None);

        // Fill a rectangle
        grid.fill_rect(2, 2, 4, 4, 42);

        // Inside
        assert_eq!(grid.get(3, 3), Some(42));
        assert_eq!(grid.get(5, 5), Some(42));

        // Outside
        assert_eq!(grid.get(0, 0), None);
        assert_eq!(grid.get(8, 8), None);

        // Clear
        grid.clear();
        assert_eq!(grid.get(3, 3), None);
    }

    #[test]
    fn test_hit_grid_resize() {
        let mut grid = HitGrid::new(10, 10);
        grid.fill_rect(0, 0, 5, 5, 1);

        grid.resize(20, 20);
        // Should be cleared after resize
        assert_eq!(grid.get(2, 2), None);
    }

    #[test]
    fn test_click_synthesis() {
        setup();

        let idx = allocate_index(None);
        resize_hit_grid(20, 20);
        fill_hit_rect(0, 0, 10, 10, idx);

        let clicks = Rc::new(Cell::new(0));
        let clicks_clone = clicks.clone();
        let _cleanup = on_component(
            idx,
            MouseHandlers {
                on_click: Some(Rc::new(move |_| clicks_clone.set(clicks_clone.get() + 1))),
                ..Default::default()
            },
        );

        dispatch(MouseEvent::down(MouseButton::Left, 2, 2));
        dispatch(MouseEvent::up(MouseButton::Left, 3, 3));
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_no_click_when_release_elsewhere() {
        setup();

        let a = allocate_index(None);
        let b = allocate_index(None);
        resize_hit_grid(20, 20);
        fill_hit_rect(0, 0, 5, 5, a);
        fill_hit_rect(10, 10, 5, 5, b);

        let clicks = Rc::new(Cell::new(0));
        let clicks_clone = clicks.clone();
        let _cleanup = on_component(
            a,
            MouseHandlers {
                on_click: Some(Rc::new(move |_| clicks_clone.set(clicks_clone.get() + 1))),
                ..Default::default()
            },
        );

        // Press on a, release on b - no click
        dispatch(MouseEvent::down(MouseButton::Left, 2, 2));
        dispatch(MouseEvent::up(MouseButton::Left, 12, 12));
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn test_click_bubbles_to_parent() {
        setup();

        let parent = allocate_index(None);
        let child = allocate_index(None);
        core::set_parent_index(child, Some(parent));

        resize_hit_grid(20, 20);
        // The child covers the hit area (as inner text would)
        fill_hit_rect(0, 0, 5, 5, child);

        let clicks = Rc::new(Cell::new(0));
        let clicks_clone = clicks.clone();
        let _cleanup = on_component(
            parent,
            MouseHandlers {
                on_click: Some(Rc::new(move |_| clicks_clone.set(clicks_clone.get() + 1))),
                ..Default::default()
            },
        );

        dispatch(MouseEvent::down(MouseButton::Left, 1, 1));
        dispatch(MouseEvent::up(MouseButton::Left, 1, 1));
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_hover_enter_leave() {
        setup();

        let idx = allocate_index(None);
        resize_hit_grid(20, 20);
        fill_hit_rect(0, 0, 5, 5, idx);

        let entered = Rc::new(Cell::new(false));
        let left = Rc::new(Cell::new(false));
        let entered_clone = entered.clone();
        let left_clone = left.clone();
        let _cleanup = on_component(
            idx,
            MouseHandlers {
                on_mouse_enter: Some(Rc::new(move |_| entered_clone.set(true))),
                on_mouse_leave: Some(Rc::new(move |_| left_clone.set(true))),
                ..Default::default()
            },
        );

        dispatch(MouseEvent::move_to(2, 2));
        assert!(entered.get());
        assert!(!left.get());
        assert_eq!(hovered_component(), Some(idx));

        dispatch(MouseEvent::move_to(15, 15));
        assert!(left.get());
        assert_eq!(hovered_component(), None);
    }

    #[test]
    fn test_reactive_state_updates() {
        setup();

        resize_hit_grid(20, 20);
        dispatch(MouseEvent::down(MouseButton::Left, 4, 7));
        assert_eq!(mouse_x(), 4);
        assert_eq!(mouse_y(), 7);
        assert!(is_mouse_down());

        dispatch(MouseEvent::up(MouseButton::Left, 4, 7));
        assert!(!is_mouse_down());
    }
}
