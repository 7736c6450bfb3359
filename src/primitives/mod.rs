//! UI Primitives - Component building blocks.
//!
//! This module provides the core UI primitives:
//! - [`box_primitive`] - Container with flexbox layout, borders, and background
//! - [`text`] - Text display with styling
//!
//! # Architecture
//!
//! Components are indices into parallel arrays (ECS pattern). Each component:
//! 1. Allocates an index from the registry
//! 2. Creates a FlexNode with reactive Slot properties
//! 3. Binds props directly to slots (preserving reactivity!)
//! 4. Returns a cleanup function
//!
//! # Reactivity
//!
//! Props can be:
//! - Static values: `width: Some(50u16.into())`
//! - Signals: `width: Some(my_signal.into())` (stays connected!)
//! - Getters: `width: Some(PropValue::Getter(Rc::new(|| compute_width())))`
//!
//! The key is to pass props directly - don't extract values before binding!

mod box_primitive;
mod text;
mod types;

pub use box_primitive::box_primitive;
pub use text::text;
pub use types::*;
