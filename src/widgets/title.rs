//! Title widget - a heading line.
//!
//! Renders the supplied text as a bold, underlined heading.

use crate::primitives::{text, Cleanup, PropValue, TextProps};
use crate::types::{Attr, Rgba};

/// Properties for the title widget.
#[derive(Default)]
pub struct TitleProps {
    /// The heading text.
    pub text: PropValue<String>,

    /// Foreground color override.
    pub fg: Option<PropValue<Rgba>>,
}

/// Create a title heading.
///
/// Returns a cleanup function that releases the widget.
pub fn title(props: TitleProps) -> Cleanup {
    text(TextProps {
        content: props.text,
        attrs: Some(PropValue::Static(Attr::BOLD | Attr::UNDERLINE)),
        fg: props.fg,
        ..Default::default()
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::arrays::{core, text as text_arrays};
    use crate::engine::reset_registry;
    use crate::types::ComponentType;

    fn setup() {
        reset_registry();
    }

    #[test]
    fn test_title_renders_heading() {
        setup();

        let _cleanup = title(TitleProps {
            text: "标题".into(),
            ..Default::default()
        });

        assert_eq!(core::get_component_type(0), ComponentType::Text);
        assert_eq!(text_arrays::get_text_content(0), "标题");
        assert_eq!(text_arrays::get_text_attrs(0), Attr::BOLD | Attr::UNDERLINE);
    }

    #[test]
    fn test_title_reactive_text() {
        use spark_signals::signal;

        setup();

        let heading = signal("before".to_string());
        let _cleanup = title(TitleProps {
            text: heading.clone().into(),
            ..Default::default()
        });

        assert_eq!(text_arrays::get_text_content(0), "before");
        heading.set("after".to_string());
        assert_eq!(text_arrays::get_text_content(0), "after");
    }
}
