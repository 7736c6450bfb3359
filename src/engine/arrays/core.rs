//! Core Arrays
//!
//! The structural properties every component has:
//! - componentType: What kind of component sits at this index
//! - parentIndex: Tree structure
//! - visible: Whether layout and rendering consider the component

use spark_signals::Signal;

use crate::engine::slots::SlotArray;
use crate::types::ComponentType;

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    /// Component type at each index.
    static COMPONENT_TYPE: SlotArray<ComponentType> = SlotArray::new(ComponentType::None);

    /// Parent index (None for roots).
    static PARENT_INDEX: SlotArray<Option<usize>> = SlotArray::new(None);

    /// Visibility flag (default true).
    static VISIBLE: SlotArray<bool> = SlotArray::new(true);
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    COMPONENT_TYPE.with(|arr| arr.ensure_capacity(index));
    PARENT_INDEX.with(|arr| arr.ensure_capacity(index));
    VISIBLE.with(|arr| arr.ensure_capacity(index));
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    COMPONENT_TYPE.with(|arr| arr.clear(index));
    PARENT_INDEX.with(|arr| arr.clear(index));
    VISIBLE.with(|arr| arr.clear(index));
}

/// Reset all arrays.
pub fn reset() {
    COMPONENT_TYPE.with(|arr| arr.clear_all());
    PARENT_INDEX.with(|arr| arr.clear_all());
    VISIBLE.with(|arr| arr.clear_all());
}

// =============================================================================
// Component Type
// =============================================================================

/// Get component type at index (reactive).
pub fn get_component_type(index: usize) -> ComponentType {
    COMPONENT_TYPE.with(|arr| arr.get(index))
}

/// Set component type at index.
pub fn set_component_type(index: usize, component_type: ComponentType) {
    COMPONENT_TYPE.with(|arr| arr.set_value(index, component_type));
}

// =============================================================================
// Parent Index
// =============================================================================

/// Get parent index (reactive).
pub fn get_parent_index(index: usize) -> Option<usize> {
    PARENT_INDEX.with(|arr| arr.get(index))
}

/// Set parent index.
pub fn set_parent_index(index: usize, parent: Option<usize>) {
    PARENT_INDEX.with(|arr| arr.set_value(index, parent));
}

// =============================================================================
// Visibility
// =============================================================================

/// Get visibility at index (reactive).
pub fn get_visible(index: usize) -> bool {
    VISIBLE.with(|arr| arr.get(index))
}

/// Set static visibility at index.
pub fn set_visible(index: usize, visible: bool) {
    VISIBLE.with(|arr| arr.set_value(index, visible));
}

/// Bind visibility to a signal.
pub fn set_visible_signal(index: usize, sig: Signal<bool>) {
    VISIBLE.with(|arr| arr.set_signal(index, sig));
}

/// Bind visibility to a getter.
pub fn set_visible_getter<F>(index: usize, getter: F)
where
    F: Fn() -> bool + 'static,
{
    VISIBLE.with(|arr| arr.set_getter(index, getter));
}

// =============================================================================
// Tests
// =============================================================================
