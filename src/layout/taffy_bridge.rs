//! Taffy Bridge - Integration with the Taffy layout engine.
//!
//! Converts FlexNode properties to Taffy styles, runs layout computation,
//! and extracts results back to ComputedLayout.

use std::collections::HashMap;

use taffy::{
    AlignItems as TaffyAlignItems, AvailableSpace, Dimension as TaffyDimension, Display,
    FlexDirection as TaffyFlexDirection, JustifyContent as TaffyJustifyContent, LengthPercentage,
    NodeId, Rect, Size, Style, TaffyTree,
};

use crate::engine::arrays::{core, text};
use crate::engine::{get_allocated_indices, get_flex_node};
use crate::types::{AlignItems, ComponentType, Dimension, FlexDirection, JustifyContent};

use super::text_measure::{measure_text_height, string_width};
use super::ComputedLayout;

// =============================================================================
// CONVERSIONS
// =============================================================================

/// Convert our Dimension to Taffy's Dimension.
fn to_taffy_dimension(dim: Dimension) -> TaffyDimension {
    match dim {
        Dimension::Auto => TaffyDimension::Auto,
        Dimension::Cells(n) => TaffyDimension::Length(n as f32),
        Dimension::Percent(p) => TaffyDimension::Percent(p / 100.0),
    }
}

fn to_taffy_flex_direction(dir: FlexDirection) -> TaffyFlexDirection {
    match dir {
        FlexDirection::Column => TaffyFlexDirection::Column,
        FlexDirection::Row => TaffyFlexDirection::Row,
    }
}

fn to_taffy_justify_content(justify: JustifyContent) -> Option<TaffyJustifyContent> {
    Some(match justify {
        JustifyContent::FlexStart => TaffyJustifyContent::FlexStart,
        JustifyContent::Center => TaffyJustifyContent::Center,
        JustifyContent::FlexEnd => TaffyJustifyContent::FlexEnd,
        JustifyContent::SpaceBetween => TaffyJustifyContent::SpaceBetween,
    })
}

fn to_taffy_align_items(align: AlignItems) -> Option<TaffyAlignItems> {
    Some(match align {
        AlignItems::Stretch => TaffyAlignItems::Stretch,
        AlignItems::FlexStart => TaffyAlignItems::FlexStart,
        AlignItems::Center => TaffyAlignItems::Center,
        AlignItems::FlexEnd => TaffyAlignItems::FlexEnd,
    })
}

// =============================================================================
// STYLE BUILDING
// =============================================================================

/// Build a Taffy Style from a FlexNode.
fn build_style(idx: usize) -> Style {
    let Some(node) = get_flex_node(idx) else {
        return Style::default();
    };

    let comp_type = core::get_component_type(idx);
    let border = if node.border.get() > 0 { 1.0 } else { 0.0 };
    let gap = node.gap.get() as f32;

    let mut style = Style {
        display: Display::Flex,

        // Flex container properties
        flex_direction: to_taffy_flex_direction(FlexDirection::from(node.flex_direction.get())),
        justify_content: to_taffy_justify_content(JustifyContent::from(
            node.justify_content.get(),
        )),
        align_items: to_taffy_align_items(AlignItems::from(node.align_items.get())),

        // Flex item properties
        flex_grow: node.flex_grow.get(),
        flex_shrink: node.flex_shrink.get(),

        // Dimensions
        size: Size {
            width: to_taffy_dimension(node.width.get()),
            height: to_taffy_dimension(node.height.get()),
        },
        min_size: Size {
            width: to_taffy_dimension(node.min_width.get()),
            height: to_taffy_dimension(node.min_height.get()),
        },

        // Padding (uses LengthPercentage)
        padding: Rect {
            top: LengthPercentage::Length(node.padding_top.get() as f32),
            right: LengthPercentage::Length(node.padding_right.get() as f32),
            bottom: LengthPercentage::Length(node.padding_bottom.get() as f32),
            left: LengthPercentage::Length(node.padding_left.get() as f32),
        },

        // Border occupies one cell per side when present
        border: Rect {
            top: LengthPercentage::Length(border),
            right: LengthPercentage::Length(border),
            bottom: LengthPercentage::Length(border),
            left: LengthPercentage::Length(border),
        },

        // Gap applies on both axes
        gap: Size {
            width: LengthPercentage::Length(gap),
            height: LengthPercentage::Length(gap),
        },

        ..Default::default()
    };

    // Text nodes use intrinsic sizing through the measure function.
    if comp_type == ComponentType::Text {
        style.size = Size::auto();
    }

    style
}

// =============================================================================
// TEXT MEASUREMENT
// =============================================================================

/// Measure function for text content.
fn measure_text(
    idx: usize,
    known_dimensions: Size<Option<f32>>,
    available_space: Size<AvailableSpace>,
) -> Size<f32> {
    if core::get_component_type(idx) != ComponentType::Text {
        return Size::ZERO;
    }

    let content = text::get_text_content(idx);
    if content.is_empty() {
        return Size::ZERO;
    }

    let avail_width = match available_space.width {
        AvailableSpace::Definite(w) => w as u16,
        AvailableSpace::MinContent => string_width(&content),
        AvailableSpace::MaxContent => u16::MAX,
    };

    let text_width = string_width(&content).min(avail_width.max(1));
    let text_height = measure_text_height(&content, avail_width.max(1));

    Size {
        width: known_dimensions.width.unwrap_or(text_width as f32),
        height: known_dimensions.height.unwrap_or(text_height as f32),
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Compute layout for all allocated components using Taffy.
///
/// # Arguments
///
/// * `terminal_width` - Available width in terminal columns
/// * `terminal_height` - Available height in terminal rows
/// * `constrain_height` - If true, constrain to terminal height (fullscreen mode)
///
/// # Returns
///
/// Computed layout with positions and sizes for all components.
pub fn compute_layout(
    terminal_width: u16,
    terminal_height: u16,
    constrain_height: bool,
) -> ComputedLayout {
    let mut indices = get_allocated_indices();

    if indices.is_empty() {
        return ComputedLayout::new();
    }

    // Sort indices for consistent child ordering in flex layout
    indices.sort_unstable();

    let max_index = indices.iter().max().copied().unwrap_or(0);
    let array_size = max_index + 1;

    let mut result = ComputedLayout {
        x: vec![0; array_size],
        y: vec![0; array_size],
        width: vec![0; array_size],
        height: vec![0; array_size],
        content_width: 0,
        content_height: 0,
    };

    let mut tree: TaffyTree<usize> = TaffyTree::new();

    // Maps: our index → Taffy NodeId
    let mut index_to_node: HashMap<usize, NodeId> = HashMap::new();

    // First pass: Create all nodes (without children)
    for &idx in &indices {
        if !core::get_visible(idx) {
            continue;
        }

        let style = build_style(idx);
        let comp_type = core::get_component_type(idx);

        // Text leaves carry their index as context for the measure function
        let node_id = if comp_type == ComponentType::Text {
            tree.new_leaf_with_context(style, idx).unwrap()
        } else {
            tree.new_leaf(style).unwrap()
        };

        index_to_node.insert(idx, node_id);
    }

    // Second pass: Build parent-child relationships
    let mut roots: Vec<usize> = Vec::new();

    for &idx in &indices {
        if !core::get_visible(idx) {
            continue;
        }

        match core::get_parent_index(idx) {
            Some(parent_idx) => {
                if let (Some(&parent_node), Some(&child_node)) =
                    (index_to_node.get(&parent_idx), index_to_node.get(&idx))
                {
                    let _ = tree.add_child(parent_node, child_node);
                } else {
                    roots.push(idx);
                }
            }
            None => roots.push(idx),
        }
    }

    let available = Size {
        width: AvailableSpace::Definite(terminal_width as f32),
        height: if constrain_height {
            AvailableSpace::Definite(terminal_height as f32)
        } else {
            AvailableSpace::MaxContent
        },
    };

    let mut measure_fn = |known_dimensions: Size<Option<f32>>,
                          available_space: Size<AvailableSpace>,
                          _node_id: NodeId,
                          context: Option<&mut usize>,
                          _style: &Style| {
        if let Some(&mut idx) = context {
            measure_text(idx, known_dimensions, available_space)
        } else {
            Size::ZERO
        }
    };

    for &root_idx in &roots {
        if let Some(&root_node) = index_to_node.get(&root_idx) {
            let _ = tree.compute_layout_with_measure(root_node, available, &mut measure_fn);
        }
    }

    // Extract results
    for &idx in &indices {
        if let Some(&node_id) = index_to_node.get(&idx) {
            if let Ok(layout) = tree.layout(node_id) {
                result.x[idx] = layout.location.x.round() as u16;
                result.y[idx] = layout.location.y.round() as u16;
                result.width[idx] = layout.size.width.round() as u16;
                result.height[idx] = layout.size.height.round() as u16;
            }
        }
    }

    // Content bounds come from the first root
    if let Some(&first_root) = roots.first() {
        result.content_width = result.width.get(first_root).copied().unwrap_or(0);
        result.content_height = result.height.get(first_root).copied().unwrap_or(0);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{allocate_index, create_flex_node, reset_registry};

    fn setup() {
        reset_registry();
    }

    fn make_box(parent: Option<usize>) -> usize {
        let idx = allocate_index(None);
        core::set_component_type(idx, ComponentType::Box);
        if let Some(p) = parent {
            core::set_parent_index(idx, Some(p));
        }
        create_flex_node(idx);
        idx
    }

    #[test]
    fn test_compute_layout_empty() {
        setup();

        let layout = compute_layout(80, 24, true);
        assert_eq!(layout.content_width, 0);
        assert_eq!(layout.content_height, 0);
    }

    #[test]
    fn test_compute_layout_single_root() {
        setup();

        let idx = make_box(None);
        let node = get_flex_node(idx).unwrap();
        node.width.set_value(Dimension::Cells(40));
        node.height.set_value(Dimension::Cells(10));

        let layout = compute_layout(80, 24, true);

        assert_eq!(layout.x[idx], 0);
        assert_eq!(layout.y[idx], 0);
        assert_eq!(layout.width[idx], 40);
        assert_eq!(layout.height[idx], 10);
        assert_eq!(layout.content_width, 40);
        assert_eq!(layout.content_height, 10);
    }

    #[test]
    fn test_flex_row() {
        setup();

        let parent = make_box(None);
        let parent_node = get_flex_node(parent).unwrap();
        parent_node.width.set_value(Dimension::Cells(40));
        parent_node.height.set_value(Dimension::Cells(10));
        parent_node.flex_direction.set_value(1); // Row

        let child1 = make_box(Some(parent));
        let child1_node = get_flex_node(child1).unwrap();
        child1_node.width.set_value(Dimension::Cells(10));
        child1_node.height.set_value(Dimension::Cells(5));

        let child2 = make_box(Some(parent));
        let child2_node = get_flex_node(child2).unwrap();
        child2_node.width.set_value(Dimension::Cells(10));
        child2_node.height.set_value(Dimension::Cells(5));

        let layout = compute_layout(80, 24, true);

        // Children should be side by side
        assert_eq!(layout.x[child1], 0);
        assert_eq!(layout.x[child2], 10);
    }

    #[test]
    fn test_padding_and_border_offset_children() {
        setup();

        let parent = make_box(None);
        let parent_node = get_flex_node(parent).unwrap();
        parent_node.width.set_value(Dimension::Cells(40));
        parent_node.height.set_value(Dimension::Cells(10));
        parent_node.padding_left.set_value(2);
        parent_node.padding_top.set_value(1);
        parent_node.border.set_value(1);

        let child = make_box(Some(parent));
        let child_node = get_flex_node(child).unwrap();
        child_node.width.set_value(Dimension::Cells(10));
        child_node.height.set_value(Dimension::Cells(5));

        let layout = compute_layout(80, 24, true);

        // Child offset by padding + border
        assert_eq!(layout.x[child], 3); // 2 padding + 1 border
        assert_eq!(layout.y[child], 2); // 1 padding + 1 border
    }

    #[test]
    fn test_text_intrinsic_size() {
        setup();

        let parent = make_box(None);
        let parent_node = get_flex_node(parent).unwrap();
        parent_node.width.set_value(Dimension::Cells(40));
        parent_node.height.set_value(Dimension::Cells(5));
        parent_node.align_items.set_value(1); // flex-start, avoid stretch

        let txt = allocate_index(None);
        core::set_component_type(txt, ComponentType::Text);
        core::set_parent_index(txt, Some(parent));
        create_flex_node(txt);
        text::set_text_content(txt, "Like".to_string());

        let layout = compute_layout(80, 24, true);

        assert_eq!(layout.width[txt], 4);
        assert_eq!(layout.height[txt], 1);
    }

    #[test]
    fn test_justify_content_center() {
        setup();

        let parent = make_box(None);
        let parent_node = get_flex_node(parent).unwrap();
        parent_node.width.set_value(Dimension::Cells(100));
        parent_node.height.set_value(Dimension::Cells(10));
        parent_node.flex_direction.set_value(1); // Row
        parent_node.justify_content.set_value(1); // Center

        let child = make_box(Some(parent));
        let child_node = get_flex_node(child).unwrap();
        child_node.width.set_value(Dimension::Cells(20));
        child_node.height.set_value(Dimension::Cells(5));

        let layout = compute_layout(80, 24, true);

        // Child should be centered: (100 - 20) / 2 = 40
        assert_eq!(layout.x[child], 40);
    }
}
