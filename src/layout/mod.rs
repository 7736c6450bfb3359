//! Layout - Flexbox computation over the component tree.
//!
//! The taffy bridge translates FlexNode slots into taffy styles, runs the
//! layout pass, and extracts per-index positions and sizes into
//! [`ComputedLayout`].

mod taffy_bridge;
pub mod text_measure;

pub use taffy_bridge::compute_layout;
pub use text_measure::{char_width, measure_text_height, string_width, wrap_lines};

/// Computed layout for all components.
///
/// Positions are relative to the parent; the frame buffer derived
/// accumulates absolute coordinates while walking the tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComputedLayout {
    /// X position relative to parent, per index.
    pub x: Vec<u16>,
    /// Y position relative to parent, per index.
    pub y: Vec<u16>,
    /// Width, per index.
    pub width: Vec<u16>,
    /// Height, per index.
    pub height: Vec<u16>,
    /// Width of the root content area.
    pub content_width: u16,
    /// Height of the root content area.
    pub content_height: u16,
}

impl ComputedLayout {
    /// Create an empty layout.
    pub fn new() -> Self {
        Self::default()
    }
}
