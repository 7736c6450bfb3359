//! # glint-tui
//!
//! Reactive terminal widgets for Rust.
//!
//! Built on [spark-signals](https://crates.io/crates/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! Components are indices into columnar parallel arrays rather than objects.
//! Each array cell is a reactive slot that can be bound to signals, getters,
//! or static values.
//!
//! The rendering pipeline is purely derived-based:
//! ```text
//! Component Tree → FlexNode Slots → layoutDerived → frameBufferDerived → render effect
//! ```
//!
//! Widgets mount into *containers* - named regions registered on the
//! [`surface`] with classes and string data attributes - and react to
//! mouse and keyboard input routed through the [`state`] modules.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Dimension, Rgba, Cell, etc.)
//! - [`engine`] - Component registry, FlexNode, parallel arrays
//! - [`surface`] - Containers and queries (mount points for widgets)
//! - [`layout`] - Taffy layout engine bridge for flexbox computation
//! - [`renderer`] - Terminal renderer (ANSI output, diff rendering)
//! - [`pipeline`] - Reactive render pipeline and mount lifecycle
//! - [`widgets`] - The widget set (like button, title)

pub mod engine;
pub mod error;
pub mod layout;
pub mod pipeline;
pub mod primitives;
pub mod renderer;
pub mod state;
pub mod surface;
pub mod types;
pub mod widgets;

// Re-export commonly used items
pub use types::*;

pub use error::{Error, Result};

pub use engine::{
    allocate_index, get_allocated_indices, get_current_parent_index, get_id, get_index,
    is_allocated, on_destroy, pop_parent_context, push_parent_context, release_index,
    reset_registry, FlexNode,
};

pub use layout::{compute_layout, measure_text_height, string_width, wrap_lines, ComputedLayout};

pub use renderer::{DiffRenderer, FrameBuffer, InlineRenderer, OutputBuffer};

pub use pipeline::{
    create_frame_buffer_derived, create_layout_derived, mount, run, set_render_mode,
    set_terminal_size, terminal_height, terminal_width, tick, unmount, FrameBufferResult,
    HitRegion, MountHandle, RenderMode,
};

pub use primitives::{box_primitive, text, BoxProps, Cleanup, PropValue, TextProps};

pub use surface::{container, query_class, query_id, ContainerHandle, ContainerProps};

pub use widgets::{like_button, title, LikeButtonProps, TitleProps};
