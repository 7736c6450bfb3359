//! Engine - Component registry and parallel arrays.
//!
//! The engine manages the core data structures:
//! - Registry: Index allocation, ID mapping, parent context
//! - Slots: Stable reactive cells that props bind to
//! - FlexNode: Persistent layout object with reactive Slot properties
//! - Arrays: Parallel slot columns for component state
//!
//! # Architecture
//!
//! Components are NOT objects. They are indices into parallel arrays:
//!
//! ```text
//! Index 0: Box  (parent=None, width=80, visible=true,  fg=default, ...)
//! Index 1: Text (parent=0,  width=auto, visible=true, fg=cyan,    ...)
//! Index 2: Box  (parent=0,  width=40,  visible=true, fg=default, ...)
//! ```
//!
//! This enables cache-friendly iteration and efficient reactivity: each cell
//! is a stable Slot that never moves.

mod flex_node;
mod registry;
pub mod arrays;
pub mod slots;

pub use flex_node::*;
pub use registry::*;
