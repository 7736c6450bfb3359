//! Reactive Pipeline
//!
//! This module implements the reactive rendering pipeline that connects
//! the component system to the terminal output.
//!
//! # Pipeline Architecture
//!
//! ```text
//! Component Tree → FlexNode Slots → layoutDerived → frameBufferDerived → render effect
//! ```
//!
//! ## Data Flow
//!
//! 1. **layoutDerived** - Reads FlexNode slots, calls Taffy, returns ComputedLayout
//! 2. **frameBufferDerived** - Reads layout + visual arrays, fills FrameBuffer
//! 3. **render effect** - Monitors frameBufferDerived, calls the blind renderer
//!
//! ## Key Design Principles
//!
//! - **Pure Deriveds**: layoutDerived and frameBufferDerived are pure computations
//! - **Side Effects in Effect**: Only the render effect mutates state (hitGrid, terminal I/O)
//! - **Reactive Dependencies**: Reads from signals/slots auto-track dependencies

pub mod frame_buffer_derived;
pub mod layout_derived;
pub mod mount;
pub mod terminal;

// Re-exports
pub use frame_buffer_derived::{create_frame_buffer_derived, FrameBufferResult, HitRegion};
pub use layout_derived::create_layout_derived;
pub use mount::{mount, run, tick, unmount, MountHandle};
pub use terminal::{
    render_mode, set_render_mode, set_terminal_size, terminal_height, terminal_width, RenderMode,
};
