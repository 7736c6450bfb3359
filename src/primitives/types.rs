//! Primitive types - Props and cleanup.
//!
//! These types define the interface for component props.
//! Props support static values, signals, and getters for reactivity.

use std::rc::Rc;

use spark_signals::Signal;

use crate::state::mouse::MouseEvent;
use crate::types::{Attr, BorderStyle, Dimension, Rgba, TextAlign};

// =============================================================================
// Cleanup Function
// =============================================================================

/// Cleanup function returned by components.
///
/// Call this to unmount the component and release resources.
pub type Cleanup = Box<dyn FnOnce()>;

// =============================================================================
// Callback Types
// =============================================================================

/// Mouse event callback type (Rc for shared ownership in closures).
pub type MouseCallback = Rc<dyn Fn(&MouseEvent)>;

// =============================================================================
// Prop Value - Reactive property wrapper
// =============================================================================

/// A property value that can be static, a signal, or a getter.
///
/// This enables reactive props while maintaining type safety.
/// When binding to FlexNode slots or arrays, the reactive connection is
/// preserved.
#[derive(Clone)]
pub enum PropValue<T: Clone + PartialEq + 'static> {
    /// Static value (not reactive).
    Static(T),
    /// Reactive signal (changes propagate automatically).
    Signal(Signal<T>),
    /// Getter function (called each time value is needed).
    Getter(Rc<dyn Fn() -> T>),
}

impl<T: Clone + PartialEq + 'static> PropValue<T> {
    /// Get the current value (for immediate reads).
    pub fn get(&self) -> T {
        match self {
            PropValue::Static(v) => v.clone(),
            PropValue::Signal(s) => s.get(),
            PropValue::Getter(f) => f(),
        }
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for PropValue<T> {
    fn default() -> Self {
        PropValue::Static(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> From<T> for PropValue<T> {
    fn from(value: T) -> Self {
        PropValue::Static(value)
    }
}

impl<T: Clone + PartialEq + 'static> From<Signal<T>> for PropValue<T> {
    fn from(signal: Signal<T>) -> Self {
        PropValue::Signal(signal)
    }
}

impl From<u16> for PropValue<Dimension> {
    fn from(value: u16) -> Self {
        PropValue::Static(Dimension::from(value))
    }
}

impl From<&str> for PropValue<String> {
    fn from(value: &str) -> Self {
        PropValue::Static(value.to_string())
    }
}

// =============================================================================
// Box Props
// =============================================================================

/// Properties for the Box component.
///
/// Box is the fundamental container - it can have children, borders,
/// backgrounds, and handles clicks.
#[derive(Default)]
pub struct BoxProps {
    /// Optional component ID for lookup.
    pub id: Option<String>,

    /// Whether the component is visible (default: true).
    pub visible: Option<PropValue<bool>>,

    /// Flex direction: 0=column (default), 1=row.
    pub flex_direction: Option<PropValue<u8>>,

    /// Justify content: 0=flex-start (default), 1=center, 2=flex-end, 3=space-between.
    pub justify_content: Option<PropValue<u8>>,

    /// Align items: 0=stretch (default), 1=flex-start, 2=center, 3=flex-end.
    pub align_items: Option<PropValue<u8>>,

    /// Flex grow factor (default: 0).
    pub grow: Option<PropValue<f32>>,

    /// Flex shrink factor (default: 1).
    pub shrink: Option<PropValue<f32>>,

    /// Width.
    pub width: Option<PropValue<Dimension>>,

    /// Height.
    pub height: Option<PropValue<Dimension>>,

    /// Minimum width.
    pub min_width: Option<PropValue<Dimension>>,

    /// Minimum height.
    pub min_height: Option<PropValue<Dimension>>,

    /// Padding (all sides).
    pub padding: Option<PropValue<u16>>,

    /// Padding top.
    pub padding_top: Option<PropValue<u16>>,

    /// Padding right.
    pub padding_right: Option<PropValue<u16>>,

    /// Padding bottom.
    pub padding_bottom: Option<PropValue<u16>>,

    /// Padding left.
    pub padding_left: Option<PropValue<u16>>,

    /// Gap between children (both axes).
    pub gap: Option<PropValue<u16>>,

    /// Border style.
    pub border: Option<PropValue<BorderStyle>>,

    /// Foreground color (text and border).
    pub fg: Option<PropValue<Rgba>>,

    /// Background color.
    pub bg: Option<PropValue<Rgba>>,

    /// Click handler (press and release over this box or its children).
    pub on_click: Option<MouseCallback>,

    /// Children builder - components created inside become children.
    pub children: Option<Box<dyn FnOnce()>>,
}

// =============================================================================
// Text Props
// =============================================================================

/// Properties for the Text component.
#[derive(Default)]
pub struct TextProps {
    /// Optional component ID for lookup.
    pub id: Option<String>,

    /// Whether the component is visible (default: true).
    pub visible: Option<PropValue<bool>>,

    /// The text to display (required).
    pub content: PropValue<String>,

    /// Text attributes like bold, underline.
    pub attrs: Option<PropValue<Attr>>,

    /// Text alignment: left, center, right.
    pub align: Option<PropValue<TextAlign>>,

    /// Foreground color.
    pub fg: Option<PropValue<Rgba>>,

    /// Click handler.
    pub on_click: Option<MouseCallback>,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::signal;

    #[test]
    fn test_prop_value_get() {
        let v: PropValue<u16> = 5u16.into();
        assert_eq!(v.get(), 5);

        let s = signal(7u16);
        let v: PropValue<u16> = s.clone().into();
        assert_eq!(v.get(), 7);
        s.set(9);
        assert_eq!(v.get(), 9);

        let v: PropValue<u16> = PropValue::Getter(Rc::new(|| 11));
        assert_eq!(v.get(), 11);
    }

    #[test]
    fn test_prop_value_from_str() {
        let v: PropValue<String> = "Like".into();
        assert_eq!(v.get(), "Like");
    }

    #[test]
    fn test_dimension_from_u16_prop() {
        let v: PropValue<Dimension> = 12u16.into();
        assert_eq!(v.get(), Dimension::Cells(12));
    }
}
