//! Terminal renderer - the "blind" output layer.
//!
//! The renderer knows only about cells. It doesn't understand components,
//! layout, or reactivity. It simply takes a filled FrameBuffer and outputs
//! optimized ANSI escape sequences to the terminal.
//!
//! # Rendering Modes
//!
//! - **Fullscreen** ([`DiffRenderer`]): Uses the alternate screen buffer,
//!   differential rendering (only outputs changed cells)
//!
//! - **Inline** ([`InlineRenderer`]): Renders to the normal buffer,
//!   clears and redraws each frame

pub mod ansi;
pub mod buffer;
pub mod diff;
pub mod inline;
pub mod output;

// Re-exports for convenience
pub use buffer::FrameBuffer;
pub use diff::DiffRenderer;
pub use inline::InlineRenderer;
pub use output::{OutputBuffer, StatefulCellRenderer};
