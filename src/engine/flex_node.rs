//! FlexNode - Persistent flexbox layout object with reactive Slot properties.
//!
//! Each component gets one FlexNode that lives for the component's entire
//! lifetime. Properties are Slots that bind to user props (signals/getters/
//! static values). The layout algorithm reads `.get()` on properties,
//! creating reactive dependencies.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::engine::slots::Slot;
use crate::types::Dimension;

/// Persistent layout object with reactive Slot properties.
///
/// # Property Categories
///
/// - **Container**: flexDirection, justifyContent, alignItems
/// - **Item**: flexGrow, flexShrink
/// - **Dimensions**: width, height, minWidth, minHeight
/// - **Spacing**: padding (4), gap
/// - **Border**: border width (uniform, 0 or 1)
pub struct FlexNode {
    /// Component index in parallel arrays.
    pub index: usize,

    /// Flex direction: 0=column, 1=row.
    pub flex_direction: Slot<u8>,

    /// Justify content: 0=flex-start, 1=center, 2=flex-end, 3=space-between.
    pub justify_content: Slot<u8>,

    /// Align items: 0=stretch, 1=flex-start, 2=center, 3=flex-end.
    pub align_items: Slot<u8>,

    /// Flex grow factor (default 0).
    pub flex_grow: Slot<f32>,

    /// Flex shrink factor (default 1).
    pub flex_shrink: Slot<f32>,

    /// Width: Auto, Cells(n), or Percent(n).
    pub width: Slot<Dimension>,

    /// Height: Auto, Cells(n), or Percent(n).
    pub height: Slot<Dimension>,

    /// Minimum width constraint.
    pub min_width: Slot<Dimension>,

    /// Minimum height constraint.
    pub min_height: Slot<Dimension>,

    /// Padding top.
    pub padding_top: Slot<u16>,

    /// Padding right.
    pub padding_right: Slot<u16>,

    /// Padding bottom.
    pub padding_bottom: Slot<u16>,

    /// Padding left.
    pub padding_left: Slot<u16>,

    /// Gap between children (both axes).
    pub gap: Slot<u16>,

    /// Border width on all sides (0=none, 1=bordered).
    pub border: Slot<u16>,
}

impl FlexNode {
    fn new(index: usize) -> Self {
        Self {
            index,
            flex_direction: Slot::new(0),
            justify_content: Slot::new(0),
            align_items: Slot::new(0),
            flex_grow: Slot::new(0.0),
            flex_shrink: Slot::new(1.0),
            width: Slot::new(Dimension::Auto),
            height: Slot::new(Dimension::Auto),
            min_width: Slot::new(Dimension::Auto),
            min_height: Slot::new(Dimension::Auto),
            padding_top: Slot::new(0),
            padding_right: Slot::new(0),
            padding_bottom: Slot::new(0),
            padding_left: Slot::new(0),
            gap: Slot::new(0),
            border: Slot::new(0),
        }
    }
}

// =============================================================================
// FlexNode Registry
// =============================================================================

thread_local! {
    static FLEX_NODES: RefCell<HashMap<usize, Rc<FlexNode>>> = RefCell::new(HashMap::new());
}

/// Create (or fetch) the FlexNode for a component index.
pub fn create_flex_node(index: usize) -> Rc<FlexNode> {
    FLEX_NODES.with(|nodes| {
        nodes
            .borrow_mut()
            .entry(index)
            .or_insert_with(|| Rc::new(FlexNode::new(index)))
            .clone()
    })
}

/// Get the FlexNode for an index, if one exists.
pub fn get_flex_node(index: usize) -> Option<Rc<FlexNode>> {
    FLEX_NODES.with(|nodes| nodes.borrow().get(&index).cloned())
}

/// Destroy the FlexNode for an index.
pub fn destroy_flex_node(index: usize) {
    FLEX_NODES.with(|nodes| {
        nodes.borrow_mut().remove(&index);
    });
}

/// Drop all FlexNodes (registry reset).
pub fn reset_flex_nodes() {
    FLEX_NODES.with(|nodes| nodes.borrow_mut().clear());
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_get() {
        reset_flex_nodes();

        assert!(get_flex_node(0).is_none());

        let node = create_flex_node(0);
        assert_eq!(node.index, 0);
        assert!(get_flex_node(0).is_some());

        // Creating again returns the same node.
        let again = create_flex_node(0);
        assert!(Rc::ptr_eq(&node, &again));
    }

    #[test]
    fn test_defaults() {
        reset_flex_nodes();

        let node = create_flex_node(1);
        assert_eq!(node.flex_direction.get(), 0);
        assert_eq!(node.flex_grow.get(), 0.0);
        assert_eq!(node.flex_shrink.get(), 1.0);
        assert_eq!(node.width.get(), Dimension::Auto);
        assert_eq!(node.padding_left.get(), 0);
        assert_eq!(node.border.get(), 0);
    }

    #[test]
    fn test_destroy() {
        reset_flex_nodes();

        create_flex_node(2);
        destroy_flex_node(2);
        assert!(get_flex_node(2).is_none());
    }

    #[test]
    fn test_slot_binding_on_node() {
        use spark_signals::signal;

        reset_flex_nodes();

        let node = create_flex_node(3);
        let width = signal(Dimension::Cells(40));
        node.width.set_signal(width.clone());
        assert_eq!(node.width.get(), Dimension::Cells(40));

        width.set(Dimension::Cells(80));
        assert_eq!(node.width.get(), Dimension::Cells(80));
    }
}
