//! Parallel Arrays
//!
//! All component state lives in these parallel arrays.
//! Each array index corresponds to one component.
//!
//! Components write directly to these arrays using `set_value()`,
//! `set_signal()` or `set_getter()`. Deriveds read from them via `get()`;
//! every cell is a stable reactive [`crate::engine::slots::Slot`], so a
//! derived re-runs when the cells it read change.
//!
//! # Array Categories
//!
//! - **core**: Component type, parent, visibility
//! - **text**: Text content and styling
//! - **visual**: Colors and border style

pub mod core;
pub mod text;
pub mod visual;

use self::core as core_arrays;
use self::text as text_arrays;
use self::visual as visual_arrays;

/// Ensure all arrays have capacity for the given index.
///
/// Called by registry when allocating.
pub fn ensure_all_capacity(index: usize) {
    core_arrays::ensure_capacity(index);
    text_arrays::ensure_capacity(index);
    visual_arrays::ensure_capacity(index);
}

/// Clear all array values at an index.
///
/// Called by registry when releasing.
pub fn clear_all_at_index(index: usize) {
    core_arrays::clear_at_index(index);
    text_arrays::clear_at_index(index);
    visual_arrays::clear_at_index(index);
}

/// Reset all parallel arrays to release memory.
///
/// Called automatically when the last component is destroyed.
pub fn reset_all_arrays() {
    core_arrays::reset();
    text_arrays::reset();
    visual_arrays::reset();
}
