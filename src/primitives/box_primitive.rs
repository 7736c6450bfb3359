//! Box Primitive - Container component with flexbox layout.
//!
//! The fundamental container component. Can have children, borders,
//! backgrounds, and handles clicks.
//!
//! # Reactivity
//!
//! Props are bound directly to FlexNode slots, preserving reactive
//! connections. When a signal changes, the layout or visual update happens
//! automatically.
//!
//! # Example
//!
//! ```ignore
//! use glint_tui::primitives::{box_primitive, text, BoxProps, TextProps};
//!
//! let cleanup = box_primitive(BoxProps {
//!     width: Some(40u16.into()),
//!     height: Some(10u16.into()),
//!     border: Some(BorderStyle::Single.into()),
//!     children: Some(Box::new(|| {
//!         text(TextProps {
//!             content: "Hello!".into(),
//!             ..Default::default()
//!         });
//!     })),
//!     ..Default::default()
//! });
//! ```

use crate::engine::arrays::{core, visual};
use crate::engine::{
    allocate_index, create_flex_node, get_current_parent_index, pop_parent_context,
    push_parent_context, release_index,
};
use crate::state::mouse;
use crate::types::ComponentType;

use super::types::{BoxProps, Cleanup, PropValue};

// =============================================================================
// Helper: Bind PropValue to Slot
// =============================================================================

/// Bind a PropValue to a FlexNode Slot.
///
/// This preserves reactivity:
/// - Static values are set directly
/// - Signals stay connected
/// - Getters are wrapped
macro_rules! bind_slot {
    ($slot:expr, $prop:expr) => {
        match $prop {
            PropValue::Static(v) => $slot.set_value(v),
            PropValue::Signal(s) => $slot.set_signal(s),
            PropValue::Getter(g) => $slot.set_getter(move || g()),
        }
    };
}

// =============================================================================
// Box Component
// =============================================================================

/// Create a box container component.
///
/// Boxes are the building blocks of layouts. They can:
/// - Have borders and backgrounds
/// - Use flexbox for child layout
/// - Contain other components as children
/// - Handle clicks
///
/// Returns a cleanup function that releases resources when called.
pub fn box_primitive(props: BoxProps) -> Cleanup {
    // 1. ALLOCATE INDEX
    let index = allocate_index(props.id.as_deref());

    // 2. CREATE FLEXNODE - Persistent layout object with reactive Slot properties
    let flex_node = create_flex_node(index);

    // 3. CORE SETUP - Type, parent
    core::set_component_type(index, ComponentType::Box);
    if let Some(parent) = get_current_parent_index() {
        core::set_parent_index(index, Some(parent));
    }

    // 4. BIND VISIBILITY
    if let Some(visible) = props.visible {
        match visible {
            PropValue::Static(v) => core::set_visible(index, v),
            PropValue::Signal(s) => core::set_visible_signal(index, s),
            PropValue::Getter(g) => core::set_visible_getter(index, move || g()),
        }
    }

    // 5. BIND FLEXNODE SLOTS - Layout properties
    if let Some(direction) = props.flex_direction {
        bind_slot!(flex_node.flex_direction, direction);
    }
    if let Some(justify) = props.justify_content {
        bind_slot!(flex_node.justify_content, justify);
    }
    if let Some(align) = props.align_items {
        bind_slot!(flex_node.align_items, align);
    }
    if let Some(grow) = props.grow {
        bind_slot!(flex_node.flex_grow, grow);
    }
    if let Some(shrink) = props.shrink {
        bind_slot!(flex_node.flex_shrink, shrink);
    }
    if let Some(w) = props.width {
        bind_slot!(flex_node.width, w);
    }
    if let Some(h) = props.height {
        bind_slot!(flex_node.height, h);
    }
    if let Some(min_w) = props.min_width {
        bind_slot!(flex_node.min_width, min_w);
    }
    if let Some(min_h) = props.min_height {
        bind_slot!(flex_node.min_height, min_h);
    }
    if let Some(gap) = props.gap {
        bind_slot!(flex_node.gap, gap);
    }

    // Shorthand padding fills any side not set explicitly
    if let Some(ref p) = props.padding {
        if props.padding_top.is_none() {
            bind_slot!(flex_node.padding_top, p.clone());
        }
        if props.padding_right.is_none() {
            bind_slot!(flex_node.padding_right, p.clone());
        }
        if props.padding_bottom.is_none() {
            bind_slot!(flex_node.padding_bottom, p.clone());
        }
        if props.padding_left.is_none() {
            bind_slot!(flex_node.padding_left, p.clone());
        }
    }
    if let Some(pt) = props.padding_top {
        bind_slot!(flex_node.padding_top, pt);
    }
    if let Some(pr) = props.padding_right {
        bind_slot!(flex_node.padding_right, pr);
    }
    if let Some(pb) = props.padding_bottom {
        bind_slot!(flex_node.padding_bottom, pb);
    }
    if let Some(pl) = props.padding_left {
        bind_slot!(flex_node.padding_left, pl);
    }

    // 6. BIND VISUAL ARRAYS
    if let Some(border) = props.border {
        // The border style drives both painting and the layout inset
        match border {
            PropValue::Static(v) => {
                visual::set_border_style(index, v);
                flex_node
                    .border
                    .set_value(if v == crate::types::BorderStyle::None { 0 } else { 1 });
            }
            PropValue::Signal(s) => {
                let s_for_style = s.clone();
                visual::set_border_style_getter(index, move || s_for_style.get());
                flex_node.border.set_getter(move || {
                    if s.get() == crate::types::BorderStyle::None { 0 } else { 1 }
                });
            }
            PropValue::Getter(g) => {
                let g_for_style = g.clone();
                visual::set_border_style_getter(index, move || g_for_style());
                flex_node.border.set_getter(move || {
                    if g() == crate::types::BorderStyle::None { 0 } else { 1 }
                });
            }
        }
    }

    if let Some(fg) = props.fg {
        match fg {
            PropValue::Static(v) => visual::set_fg_color(index, v),
            PropValue::Signal(s) => visual::set_fg_color_getter(index, move || s.get()),
            PropValue::Getter(g) => visual::set_fg_color_getter(index, move || g()),
        }
    }

    if let Some(bg) = props.bg {
        match bg {
            PropValue::Static(v) => visual::set_bg_color(index, v),
            PropValue::Signal(s) => visual::set_bg_color_getter(index, move || s.get()),
            PropValue::Getter(g) => visual::set_bg_color_getter(index, move || g()),
        }
    }

    // 7. REGISTER MOUSE HANDLER (if on_click provided)
    let mut mouse_cleanup: Option<Box<dyn FnOnce()>> = None;

    if let Some(on_click) = props.on_click {
        let handlers = mouse::MouseHandlers {
            on_click: Some(on_click),
            ..Default::default()
        };
        let cleanup_fn = mouse::on_component(index, handlers);
        mouse_cleanup = Some(Box::new(cleanup_fn));
    }

    // 8. CREATE CHILDREN - with this box as parent context
    if let Some(children) = props.children {
        push_parent_context(index);
        children();
        pop_parent_context();
    }

    // 9. RETURN CLEANUP
    Box::new(move || {
        if let Some(cleanup) = mouse_cleanup {
            cleanup();
        }
        mouse::cleanup_index(index);
        release_index(index);
    })
}

// =============================================================================
// Tests
// =============================================================================
