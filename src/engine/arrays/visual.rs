//! Visual Arrays
//!
//! Colors and border styling:
//! - fg: Foreground color
//! - bg: Background color
//! - borderStyle: Border character set (None = no border)

use crate::engine::slots::SlotArray;
use crate::types::{BorderStyle, Rgba};

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    /// Foreground color.
    static FG_COLOR: SlotArray<Rgba> = SlotArray::new(Rgba::TERMINAL_DEFAULT);

    /// Background color.
    static BG_COLOR: SlotArray<Rgba> = SlotArray::new(Rgba::TERMINAL_DEFAULT);

    /// Border style.
    static BORDER_STYLE: SlotArray<BorderStyle> = SlotArray::new(BorderStyle::None);
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    FG_COLOR.with(|arr| arr.ensure_capacity(index));
    BG_COLOR.with(|arr| arr.ensure_capacity(index));
    BORDER_STYLE.with(|arr| arr.ensure_capacity(index));
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    FG_COLOR.with(|arr| arr.clear(index));
    BG_COLOR.with(|arr| arr.clear(index));
    BORDER_STYLE.with(|arr| arr.clear(index));
}

/// Reset all arrays.
pub fn reset() {
    FG_COLOR.with(|arr| arr.clear_all());
    BG_COLOR.with(|arr| arr.clear_all());
    BORDER_STYLE.with(|arr| arr.clear_all());
}

// =============================================================================
// Foreground Color
// =============================================================================

/// Get foreground color at index (reactive).
pub fn get_fg_color(index: usize) -> Rgba {
    FG_COLOR.with(|arr| arr.get(index))
}

/// Set foreground color at index.
pub fn set_fg_color(index: usize, color: Rgba) {
    FG_COLOR.with(|arr| arr.set_value(index, color));
}

/// Bind foreground color to a getter.
pub fn set_fg_color_getter<F>(index: usize, getter: F)
where
    F: Fn() -> Rgba + 'static,
{
    FG_COLOR.with(|arr| arr.set_getter(index, getter));
}

// =============================================================================
// Background Color
// =============================================================================

/// Get background color at index (reactive).
pub fn get_bg_color(index: usize) -> Rgba {
    BG_COLOR.with(|arr| arr.get(index))
}

/// Set background color at index.
pub fn set_bg_color(index: usize, color: Rgba) {
    BG_COLOR.with(|arr| arr.set_value(index, color));
}

/// Bind background color to a getter.
pub fn set_bg_color_getter<F>(index: usize, getter: F)
where
    F: Fn() -> Rgba + 'static,
{
    BG_COLOR.with(|arr| arr.set_getter(index, getter));
}

// =============================================================================
// Border Style
// =============================================================================

/// Get border style at index (reactive).
pub fn get_border_style(index: usize) -> BorderStyle {
    BORDER_STYLE.with(|arr| arr.get(index))
}

/// Set border style at index.
pub fn set_border_style(index: usize, style: BorderStyle) {
    BORDER_STYLE.with(|arr| arr.set_value(index, style));
}

/// Bind border style to a getter.
pub fn set_border_style_getter<F>(index: usize, getter: F)
where
    F: Fn() -> BorderStyle + 'static,
{
    BORDER_STYLE.with(|arr| arr.set_getter(index, getter));
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_default_to_terminal() {
        reset();

        assert!(get_fg_color(0).is_terminal_default());
        assert!(get_bg_color(0).is_terminal_default());
    }

    #[test]
    fn test_color_roundtrip() {
        reset();

        set_fg_color(0, Rgba::CYAN);
        set_bg_color(0, Rgba::BLACK);
        assert_eq!(get_fg_color(0), Rgba::CYAN);
        assert_eq!(get_bg_color(0), Rgba::BLACK);

        clear_at_index(0);
        assert!(get_fg_color(0).is_terminal_default());
    }

    #[test]
    fn test_border_style_getter() {
        use spark_signals::signal;

        reset();

        let bordered = signal(true);
        let bordered_for_getter = bordered.clone();
        set_border_style_getter(0, move || {
            if bordered_for_getter.get() {
                BorderStyle::Single
            } else {
                BorderStyle::None
            }
        });

        assert_eq!(get_border_style(0), BorderStyle::Single);
        bordered.set(false);
        assert_eq!(get_border_style(0), BorderStyle::None);
    }
}
