//! Like button widget.
//!
//! Renders a clickable "Like" affordance. The first click flips the
//! widget's `liked` flag; from then on it renders the fixed text
//! "You liked this." with no button chrome. The transition is one-way:
//! further clicks are no-ops and the flag lives as long as the widget.
//!
//! The flag is rebound, not remounted: border, padding and content are
//! getters over the `liked` signal, so the affordance collapses to plain
//! text on the same component indices.

use std::rc::Rc;

use spark_signals::signal;

use crate::primitives::{box_primitive, text, BoxProps, Cleanup, PropValue, TextProps};
use crate::types::BorderStyle;

/// The affordance label before the first click.
pub const LIKE_LABEL: &str = "Like";

/// The fixed text after the first click.
pub const LIKED_TEXT: &str = "You liked this.";

/// Properties for the like button.
#[derive(Default)]
pub struct LikeButtonProps {
    /// Numeric identifier of the thing being liked (read from the
    /// container's `commentid` attribute). Carried as data, never rendered.
    pub comment_id: Option<i64>,

    /// Label override for the unliked affordance (default "Like").
    pub label: Option<String>,
}

/// Create a like button.
///
/// Returns a cleanup function that releases the widget.
pub fn like_button(props: LikeButtonProps) -> Cleanup {
    let liked = signal(false);
    let label = props.label.unwrap_or_else(|| LIKE_LABEL.to_string());

    let id = props.comment_id.map(|cid| format!("like_button_{cid}"));
    tracing::debug!(comment_id = ?props.comment_id, "like button created");

    let liked_for_click = liked.clone();
    let liked_for_border = liked.clone();
    let liked_for_pad = liked.clone();
    let liked_for_content = liked.clone();

    // Horizontal padding only while the button chrome is visible
    let pad = PropValue::Getter(Rc::new(move || {
        if liked_for_pad.get() { 0u16 } else { 1 }
    }));

    box_primitive(BoxProps {
        id,
        border: Some(PropValue::Getter(Rc::new(move || {
            if liked_for_border.get() {
                BorderStyle::None
            } else {
                BorderStyle::Single
            }
        }))),
        padding_left: Some(pad.clone()),
        padding_right: Some(pad),
        on_click: Some(Rc::new(move |_| {
            // One-way transition; repeat clicks change nothing
            if !liked_for_click.get() {
                liked_for_click.set(true);
            }
        })),
        children: Some(Box::new(move || {
            text(TextProps {
                content: PropValue::Getter(Rc::new(move || {
                    if liked_for_content.get() {
                        LIKED_TEXT.to_string()
                    } else {
                        label.clone()
                    }
                })),
                ..Default::default()
            });
        })),
        ..Default::default()
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::arrays::{core, text as text_arrays, visual};
    use crate::engine::reset_registry;
    use crate::state::mouse::{self, MouseButton, MouseEvent};
    use crate::types::ComponentType;

    fn setup() {
        reset_registry();
        mouse::reset_mouse_state();
    }

    #[test]
    fn test_unliked_renders_button_affordance() {
        setup();

        let _cleanup = like_button(LikeButtonProps::default());

        // Box at index 0, text child at index 1
        assert_eq!(core::get_component_type(0), ComponentType::Box);
        assert_eq!(text_arrays::get_text_content(1), LIKE_LABEL);
        assert_eq!(visual::get_border_style(0), BorderStyle::Single);
    }

    #[test]
    fn test_click_flips_to_liked() {
        setup();

        let _cleanup = like_button(LikeButtonProps::default());

        mouse::resize_hit_grid(20, 20);
        mouse::fill_hit_rect(0, 0, 10, 3, 0);

        mouse::dispatch(MouseEvent::down(MouseButton::Left, 1, 1));
        mouse::dispatch(MouseEvent::up(MouseButton::Left, 1, 1));

        assert_eq!(text_arrays::get_text_content(1), LIKED_TEXT);
        assert_eq!(visual::get_border_style(0), BorderStyle::None);
    }

    #[test]
    fn test_liked_state_is_one_way() {
        setup();

        let _cleanup = like_button(LikeButtonProps::default());

        mouse::resize_hit_grid(20, 20);
        mouse::fill_hit_rect(0, 0, 10, 3, 0);

        for _ in 0..3 {
            mouse::dispatch(MouseEvent::down(MouseButton::Left, 1, 1));
            mouse::dispatch(MouseEvent::up(MouseButton::Left, 1, 1));
        }

        assert_eq!(text_arrays::get_text_content(1), LIKED_TEXT);
    }

    #[test]
    fn test_click_on_inner_text_bubbles() {
        setup();

        let _cleanup = like_button(LikeButtonProps::default());

        mouse::resize_hit_grid(20, 20);
        // The hit lands on the inner text component
        mouse::fill_hit_rect(0, 0, 10, 3, 1);

        mouse::dispatch(MouseEvent::down(MouseButton::Left, 1, 1));
        mouse::dispatch(MouseEvent::up(MouseButton::Left, 1, 1));

        assert_eq!(text_arrays::get_text_content(1), LIKED_TEXT);
    }

    #[test]
    fn test_comment_id_names_component() {
        setup();

        let _cleanup = like_button(LikeButtonProps {
            comment_id: Some(7),
            ..Default::default()
        });

        assert_eq!(crate::engine::get_index("like_button_7"), Some(0));
    }

    #[test]
    fn test_label_override() {
        setup();

        let _cleanup = like_button(LikeButtonProps {
            label: Some("J'aime".to_string()),
            ..Default::default()
        });

        assert_eq!(text_arrays::get_text_content(1), "J'aime");
    }
}
