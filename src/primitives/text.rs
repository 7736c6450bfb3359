//! Text Primitive - Display text with styling.
//!
//! A pure display component for text content. Cannot have children.
//!
//! # Reactivity
//!
//! Content can be a static string, signal, or getter. When the content
//! source changes, the display updates automatically.
//!
//! # Example
//!
//! ```ignore
//! use glint_tui::primitives::{text, TextProps, PropValue};
//! use spark_signals::signal;
//!
//! // Static text
//! text(TextProps {
//!     content: "Hello, World!".into(),
//!     ..Default::default()
//! });
//!
//! // Reactive text
//! let liked = signal(false);
//! text(TextProps {
//!     content: PropValue::Getter(Rc::new(move || {
//!         if liked.get() { "You liked this.".into() } else { "Like".into() }
//!     })),
//!     ..Default::default()
//! });
//! ```

use crate::engine::arrays::{core, text as text_arrays, visual};
use crate::engine::{allocate_index, create_flex_node, get_current_parent_index, release_index};
use crate::state::mouse;
use crate::types::ComponentType;

use super::types::{Cleanup, PropValue, TextProps};

// =============================================================================
// Text Component
// =============================================================================

/// Create a text display component.
///
/// Text is used to display strings with optional styling (bold, underline,
/// etc.) and alignment.
///
/// Returns a cleanup function that releases resources when called.
pub fn text(props: TextProps) -> Cleanup {
    // 1. ALLOCATE INDEX
    let index = allocate_index(props.id.as_deref());

    // 2. CREATE FLEXNODE - Even text needs layout properties
    let _flex_node = create_flex_node(index);

    // 3. CORE SETUP - Type, parent
    core::set_component_type(index, ComponentType::Text);
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

    // 5. BIND TEXT CONTENT
    match props.content {
        PropValue::Static(v) => text_arrays::set_text_content(index, v),
        PropValue::Signal(s) => text_arrays::set_text_content_signal(index, s),
        PropValue::Getter(g) => text_arrays::set_text_content_getter(index, move || g()),
    }

    // 6. BIND TEXT STYLING
    if let Some(attrs) = props.attrs {
        match attrs {
            PropValue::Static(v) => text_arrays::set_text_attrs(index, v),
            PropValue::Signal(s) => text_arrays::set_text_attrs_getter(index, move || s.get()),
            PropValue::Getter(g) => text_arrays::set_text_attrs_getter(index, move || g()),
        }
    }

    if let Some(align) = props.align {
        match align {
            PropValue::Static(v) => text_arrays::set_text_align(index, v),
            PropValue::Signal(s) => text_arrays::set_text_align_getter(index, move || s.get()),
            PropValue::Getter(g) => text_arrays::set_text_align_getter(index, move || g()),
        }
    }

    // 7. BIND FOREGROUND COLOR
    if let Some(fg) = props.fg {
        match fg {
            PropValue::Static(v) => visual::set_fg_color(index, v),
            PropValue::Signal(s) => visual::set_fg_color_getter(index, move || s.get()),
            PropValue::Getter(g) => visual::set_fg_color_getter(index, move || g()),
        }
    }

    // 8. REGISTER MOUSE HANDLER (if on_click provided)
    let mut mouse_cleanup: Option<Box<dyn FnOnce()>> = None;

    if let Some(on_click) = props.on_click {
        let handlers = mouse::MouseHandlers {
            on_click: Some(on_click),
            ..Default::default()
        };
        let cleanup_fn = mouse::on_component(index, handlers);
        mouse_cleanup = Some(Box::new(cleanup_fn));
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::reset_registry;
    use crate::types::{Attr, TextAlign};
    use spark_signals::signal;

    fn setup() {
        reset_registry();
    }

    #[test]
    fn test_text_creation() {
        setup();

        let cleanup = text(TextProps {
            content: "Hello, World!".into(),
            ..Default::default()
        });

        assert_eq!(core::get_component_type(0), ComponentType::Text);
        assert_eq!(text_arrays::get_text_content(0), "Hello, World!");

        cleanup();
        assert_eq!(core::get_component_type(0), ComponentType::None);
    }

    #[test]
    fn test_text_reactive_content() {
        setup();

        let content = signal("Initial".to_string());
        let content_for_text = content.clone();

        let _cleanup = text(TextProps {
            content: PropValue::Signal(content_for_text),
            ..Default::default()
        });

        assert_eq!(text_arrays::get_text_content(0), "Initial");

        // Update signal - text should update
        content.set("Updated".to_string());
        assert_eq!(text_arrays::get_text_content(0), "Updated");
    }

    #[test]
    fn test_text_with_attrs() {
        setup();

        let _cleanup = text(TextProps {
            content: "Bold Text".into(),
            attrs: Some(PropValue::Static(Attr::BOLD | Attr::ITALIC)),
            ..Default::default()
        });

        assert_eq!(text_arrays::get_text_attrs(0), Attr::BOLD | Attr::ITALIC);
    }

    #[test]
    fn test_text_alignment() {
        setup();

        let _cleanup = text(TextProps {
            content: "Centered".into(),
            align: Some(PropValue::Static(TextAlign::Center)),
            ..Default::default()
        });

        assert_eq!(text_arrays::get_text_align(0), TextAlign::Center);
    }

    #[test]
    fn test_text_in_box() {
        setup();

        use super::super::{box_primitive, BoxProps};

        let _cleanup = box_primitive(BoxProps {
            children: Some(Box::new(|| {
                text(TextProps {
                    content: "Child Text".into(),
                    ..Default::default()
                });
            })),
            ..Default::default()
        });

        // Parent box at index 0, text at index 1
        assert_eq!(core::get_component_type(0), ComponentType::Box);
        assert_eq!(core::get_component_type(1), ComponentType::Text);
        assert_eq!(core::get_parent_index(1), Some(0));
        assert_eq!(text_arrays::get_text_content(1), "Child Text");
    }
}
