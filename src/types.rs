//! Core types for glint-tui.
//!
//! These types define the foundation that everything builds on.
//! They flow through the reactive pipeline and define what the renderer understands.

// =============================================================================
// Color
// =============================================================================

/// RGB color with 8-bit channels (0-255).
///
/// Using integers for exact comparison - no floating point epsilon needed.
/// Special value: r=-1 means "terminal default" (let terminal pick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
}

impl Rgba {
    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
        }
    }

    /// Terminal default color (let terminal decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
    };

    // Standard colors
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Check if this is the terminal default color.
    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }
}

// =============================================================================
// Cell Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield for efficient storage and comparison.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::UNDERLINE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const INVERSE = 1 << 4;
    }
}

// =============================================================================
// Cell - The atomic unit of terminal rendering
// =============================================================================

/// A single terminal cell.
///
/// This is what the renderer deals with. Nothing more complex.
/// The entire pipeline computes these, the renderer outputs them.
///
/// A `char` of 0 marks the continuation cell of a wide character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Unicode codepoint (32 for space, 0 for wide-char continuation).
    pub char: u32,
    /// Foreground color.
    pub fg: Rgba,
    /// Background color.
    pub bg: Rgba,
    /// Attribute flags (bold, underline, etc.).
    pub attrs: Attr,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: b' ' as u32,
            fg: Rgba::TERMINAL_DEFAULT,
            bg: Rgba::TERMINAL_DEFAULT,
            attrs: Attr::NONE,
        }
    }
}

// =============================================================================
// ClipRect
// =============================================================================

/// A clipping rectangle.
///
/// Used by the frame buffer derived to keep drawing inside container bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClipRect {
    /// Create a new clip rect.
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point is inside this rect.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Compute intersection of two rects.
    pub fn intersect(&self, other: &ClipRect) -> Option<ClipRect> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = (self.x + self.width).min(other.x + other.width);
        let y2 = (self.y + self.height).min(other.y + other.height);

        if x2 > x1 && y2 > y1 {
            Some(ClipRect {
                x: x1,
                y: y1,
                width: x2 - x1,
                height: y2 - y1,
            })
        } else {
            None
        }
    }
}

// =============================================================================
// Dimension - Supports absolute and percentage values
// =============================================================================

/// A dimension value that can be absolute (cells) or percentage.
///
/// # Examples
///
/// ```
/// use glint_tui::types::Dimension;
///
/// let width = Dimension::Cells(50);       // 50 characters
/// let height = Dimension::Percent(100.0); // Full parent height
/// let auto = Dimension::Auto;             // Content-determined
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    /// Auto-size based on content.
    Auto,
    /// Absolute size in terminal cells.
    Cells(u16),
    /// Percentage of parent size (0-100).
    Percent(f32),
}

impl Default for Dimension {
    fn default() -> Self {
        Self::Auto
    }
}

impl From<u16> for Dimension {
    fn from(value: u16) -> Self {
        if value == 0 {
            Self::Auto
        } else {
            Self::Cells(value)
        }
    }
}

// =============================================================================
// Component Types - For parallel arrays
// =============================================================================

/// Component types for the parallel arrays pattern.
///
/// Each component at index i has componentType[i] set to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ComponentType {
    #[default]
    None = 0,
    Box = 1,
    Text = 2,
}

// =============================================================================
// Border Styles
// =============================================================================

/// Border style constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum BorderStyle {
    #[default]
    None = 0,
    /// ─ │ ┌ ┐ └ ┘
    Single = 1,
    /// ═ ║ ╔ ╗ ╚ ╝
    Double = 2,
    /// ─ │ ╭ ╮ ╰ ╯
    Rounded = 3,
    /// - | + + + +
    Ascii = 4,
}

impl BorderStyle {
    /// Get the border characters for this style.
    ///
    /// Returns: (horizontal, vertical, top_left, top_right, bottom_right, bottom_left)
    pub const fn chars(
        &self,
    ) -> (
        &'static str,
        &'static str,
        &'static str,
        &'static str,
        &'static str,
        &'static str,
    ) {
        match self {
            Self::None => (" ", " ", " ", " ", " ", " "),
            Self::Single => ("─", "│", "┌", "┐", "┘", "└"),
            Self::Double => ("═", "║", "╔", "╗", "╝", "╚"),
            Self::Rounded => ("─", "│", "╭", "╮", "╯", "╰"),
            Self::Ascii => ("-", "|", "+", "+", "+", "+"),
        }
    }
}

// =============================================================================
// Flex Enums - For layout
// =============================================================================

/// Flex direction for container layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum FlexDirection {
    #[default]
    Column = 0,
    Row = 1,
}

impl From<u8> for FlexDirection {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Row,
            _ => Self::Column,
        }
    }
}

/// Justify content (main axis alignment).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum JustifyContent {
    #[default]
    FlexStart = 0,
    Center = 1,
    FlexEnd = 2,
    SpaceBetween = 3,
}

impl From<u8> for JustifyContent {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Center,
            2 => Self::FlexEnd,
            3 => Self::SpaceBetween,
            _ => Self::FlexStart,
        }
    }
}

/// Align items (cross axis alignment).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum AlignItems {
    #[default]
    Stretch = 0,
    FlexStart = 1,
    Center = 2,
    FlexEnd = 3,
}

impl From<u8> for AlignItems {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::FlexStart,
            2 => Self::Center,
            3 => Self::FlexEnd,
            _ => Self::Stretch,
        }
    }
}

/// Text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum TextAlign {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_terminal_default() {
        assert!(Rgba::TERMINAL_DEFAULT.is_terminal_default());
        assert!(!Rgba::rgb(255, 0, 0).is_terminal_default());
    }

    #[test]
    fn test_attr_combination() {
        let attrs = Attr::BOLD | Attr::UNDERLINE;
        assert!(attrs.contains(Attr::BOLD));
        assert!(attrs.contains(Attr::UNDERLINE));
        assert!(!attrs.contains(Attr::ITALIC));
    }

    #[test]
    fn test_cell_default() {
        let cell = Cell::default();
        assert_eq!(cell.char, b' ' as u32);
        assert!(cell.fg.is_terminal_default());
        assert!(cell.bg.is_terminal_default());
        assert_eq!(cell.attrs, Attr::NONE);
    }

    #[test]
    fn test_clip_rect_contains() {
        let rect = ClipRect::new(2, 2, 4, 4);
        assert!(rect.contains(2, 2));
        assert!(rect.contains(5, 5));
        assert!(!rect.contains(6, 6));
        assert!(!rect.contains(0, 0));
    }

    #[test]
    fn test_clip_rect_intersect() {
        let a = ClipRect::new(0, 0, 10, 10);
        let b = ClipRect::new(5, 5, 10, 10);
        let i = a.intersect(&b).unwrap();
        assert_eq!(i, ClipRect::new(5, 5, 5, 5));

        let c = ClipRect::new(20, 20, 5, 5);
        assert!(a.intersect(&c).is_none());
    }

    #[test]
    fn test_dimension_from_u16() {
        assert_eq!(Dimension::from(0u16), Dimension::Auto);
        assert_eq!(Dimension::from(42u16), Dimension::Cells(42));
    }

    #[test]
    fn test_border_style_chars() {
        let (h, v, tl, tr, br, bl) = BorderStyle::Single.chars();
        assert_eq!(h, "─");
        assert_eq!(v, "│");
        assert_eq!(tl, "┌");
        assert_eq!(tr, "┐");
        assert_eq!(br, "┘");
        assert_eq!(bl, "└");
    }

    #[test]
    fn test_flex_enum_conversions() {
        assert_eq!(FlexDirection::from(1u8), FlexDirection::Row);
        assert_eq!(FlexDirection::from(0u8), FlexDirection::Column);
        assert_eq!(FlexDirection::from(99u8), FlexDirection::Column);
        assert_eq!(JustifyContent::from(1u8), JustifyContent::Center);
        assert_eq!(AlignItems::from(2u8), AlignItems::Center);
    }
}
