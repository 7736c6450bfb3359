//! Text Measurement
//!
//! Utilities for measuring text dimensions in terminal cells.
//!
//! Terminal text width depends on Unicode character widths:
//! - ASCII characters: 1 cell
//! - CJK characters: 2 cells (fullwidth)
//! - Zero-width characters: 0 cells
//!
//! Widths come from the `unicode-width` crate.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Measure the display width of a single character in terminal cells.
pub fn char_width(c: char) -> u16 {
    UnicodeWidthChar::width(c).unwrap_or(0) as u16
}

/// Measure the display width of a string in terminal cells.
pub fn string_width(s: &str) -> u16 {
    UnicodeWidthStr::width(s).min(u16::MAX as usize) as u16
}

/// Wrap text to a given width using greedy word wrapping.
///
/// Words longer than the available width are split mid-word. Explicit
/// newlines in the input start new lines.
pub fn wrap_lines(text: &str, available_width: u16) -> Vec<String> {
    let width = available_width.max(1);
    let mut lines = Vec::new();

    for raw_line in text.split('\n') {
        if string_width(raw_line) <= width {
            lines.push(raw_line.to_string());
            continue;
        }

        let mut current = String::new();
        let mut current_width = 0u16;

        for word in raw_line.split(' ') {
            let word_width = string_width(word);

            // Word fits on the current line (with a joining space if needed).
            let needed = if current.is_empty() {
                word_width
            } else {
                current_width + 1 + word_width
            };

            if needed <= width {
                if !current.is_empty() {
                    current.push(' ');
                    current_width += 1;
                }
                current.push_str(word);
                current_width += word_width;
                continue;
            }

            // Flush the current line before placing the word.
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                // Split an over-long word across lines.
                for c in word.chars() {
                    let cw = char_width(c);
                    if current_width + cw > width && !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(c);
                    current_width += cw;
                }
            }
        }

        lines.push(current);
    }

    lines
}

/// Measure the height of text when wrapped to a given width.
///
/// Returns the number of lines the text would occupy
/// (0 for empty text, minimum 1 otherwise).
pub fn measure_text_height(text: &str, available_width: u16) -> u16 {
    if text.is_empty() {
        return 0;
    }
    wrap_lines(text, available_width).len().min(u16::MAX as usize) as u16
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_width_ascii() {
        assert_eq!(string_width(""), 0);
        assert_eq!(string_width("Like"), 4);
        assert_eq!(string_width("You liked this."), 15);
    }

    #[test]
    fn test_string_width_fullwidth() {
        // CJK characters occupy two cells each.
        assert_eq!(string_width("标题"), 4);
        assert_eq!(string_width("a标"), 3);
    }

    #[test]
    fn test_wrap_short_text() {
        let lines = wrap_lines("hello", 10);
        assert_eq!(lines, vec!["hello"]);
    }

    #[test]
    fn test_wrap_on_word_boundary() {
        let lines = wrap_lines("You liked this.", 9);
        assert_eq!(lines, vec!["You liked", "this."]);
    }

    #[test]
    fn test_wrap_splits_long_word() {
        let lines = wrap_lines("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_preserves_newlines() {
        let lines = wrap_lines("one\ntwo", 10);
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn test_measure_text_height() {
        assert_eq!(measure_text_height("", 10), 0);
        assert_eq!(measure_text_height("hello", 10), 1);
        assert_eq!(measure_text_height("You liked this.", 9), 2);
    }
}
