//! Text Arrays
//!
//! Text-related properties:
//! - textContent: The text string to display
//! - textAttrs: Text attributes (bold, underline, etc.)
//! - textAlign: Alignment (left, center, right)

use spark_signals::Signal;

use crate::engine::slots::SlotArray;
use crate::types::{Attr, TextAlign};

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    /// Text content string.
    static TEXT_CONTENT: SlotArray<String> = SlotArray::new(String::new());

    /// Text attributes (bold, underline, etc.).
    static TEXT_ATTRS: SlotArray<Attr> = SlotArray::new(Attr::NONE);

    /// Text alignment.
    static TEXT_ALIGN: SlotArray<TextAlign> = SlotArray::new(TextAlign::Left);
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    TEXT_CONTENT.with(|arr| arr.ensure_capacity(index));
    TEXT_ATTRS.with(|arr| arr.ensure_capacity(index));
    TEXT_ALIGN.with(|arr| arr.ensure_capacity(index));
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    TEXT_CONTENT.with(|arr| arr.clear(index));
    TEXT_ATTRS.with(|arr| arr.clear(index));
    TEXT_ALIGN.with(|arr| arr.clear(index));
}

/// Reset all arrays.
pub fn reset() {
    TEXT_CONTENT.with(|arr| arr.clear_all());
    TEXT_ATTRS.with(|arr| arr.clear_all());
    TEXT_ALIGN.with(|arr| arr.clear_all());
}

// =============================================================================
// Text Content
// =============================================================================

/// Get text content at index (reactive).
pub fn get_text_content(index: usize) -> String {
    TEXT_CONTENT.with(|arr| arr.get(index))
}

/// Set text content at index.
pub fn set_text_content(index: usize, content: String) {
    TEXT_CONTENT.with(|arr| arr.set_value(index, content));
}

/// Set text content from a signal.
pub fn set_text_content_signal(index: usize, sig: Signal<String>) {
    TEXT_CONTENT.with(|arr| arr.set_signal(index, sig));
}

/// Set text content from a getter function.
pub fn set_text_content_getter<F>(index: usize, getter: F)
where
    F: Fn() -> String + 'static,
{
    TEXT_CONTENT.with(|arr| arr.set_getter(index, getter));
}

// =============================================================================
// Text Attributes
// =============================================================================

/// Get text attributes at index (reactive).
pub fn get_text_attrs(index: usize) -> Attr {
    TEXT_ATTRS.with(|arr| arr.get(index))
}

/// Set text attributes at index.
pub fn set_text_attrs(index: usize, attrs: Attr) {
    TEXT_ATTRS.with(|arr| arr.set_value(index, attrs));
}

/// Set text attributes from a getter function.
pub fn set_text_attrs_getter<F>(index: usize, getter: F)
where
    F: Fn() -> Attr + 'static,
{
    TEXT_ATTRS.with(|arr| arr.set_getter(index, getter));
}

// =============================================================================
// Text Align
// =============================================================================

/// Get text alignment at index (reactive).
pub fn get_text_align(index: usize) -> TextAlign {
    TEXT_ALIGN.with(|arr| arr.get(index))
}

/// Set text alignment at index.
pub fn set_text_align(index: usize, align: TextAlign) {
    TEXT_ALIGN.with(|arr| arr.set_value(index, align));
}

/// Set text alignment from a getter function.
pub fn set_text_align_getter<F>(index: usize, getter: F)
where
    F: Fn() -> TextAlign + 'static,
{
    TEXT_ALIGN.with(|arr| arr.set_getter(index, getter));
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::signal;

    #[test]
    fn test_text_content_roundtrip() {
        reset();

        assert_eq!(get_text_content(0), "");
        set_text_content(0, "Like".to_string());
        assert_eq!(get_text_content(0), "Like");

        clear_at_index(0);
        assert_eq!(get_text_content(0), "");
    }

    #[test]
    fn test_text_content_signal() {
        reset();

        let content = signal("before".to_string());
        set_text_content_signal(1, content.clone());
        assert_eq!(get_text_content(1), "before");

        content.set("after".to_string());
        assert_eq!(get_text_content(1), "after");
    }

    #[test]
    fn test_text_attrs_and_align() {
        reset();

        set_text_attrs(0, Attr::BOLD | Attr::UNDERLINE);
        assert_eq!(get_text_attrs(0), Attr::BOLD | Attr::UNDERLINE);

        set_text_align(0, TextAlign::Center);
        assert_eq!(get_text_align(0), TextAlign::Center);
    }
}
