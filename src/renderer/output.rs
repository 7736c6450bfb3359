//! Output buffering and stateful cell rendering.
//!
//! These components optimize terminal output by:
//! - Batching writes into a single syscall
//! - Tracking terminal state to avoid redundant escape codes
//! - Only emitting changes (colors, attributes, cursor position)

use std::io::{self, Write};

use crate::types::{Attr, Cell, Rgba};

// =============================================================================
// OutputBuffer
// =============================================================================

/// A buffer that accumulates output for batch writing.
///
/// Instead of many small writes to stdout, we accumulate everything
/// and flush once. This reduces syscall overhead significantly.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with default capacity.
    pub fn new() -> Self {
        Self::with_capacity(16384) // 16KB default
    }

    /// Create a buffer with specific capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Get current buffer length.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Clear the buffer without deallocating.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Write a single character.
    #[inline]
    pub fn write_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        let s = c.encode_utf8(&mut buf);
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Write a unicode codepoint.
    #[inline]
    pub fn write_codepoint(&mut self, cp: u32) {
        if let Some(c) = char::from_u32(cp) {
            self.write_char(c);
        }
    }

    /// Flush buffer to stdout (blocking).
    pub fn flush_stdout(&mut self) -> io::Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        let mut stdout = io::stdout().lock();
        stdout.write_all(&self.data)?;
        stdout.flush()?;
        self.data.clear();
        Ok(())
    }

    /// Get the accumulated data as a string (lossy).
    pub fn as_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }
}

// =============================================================================
// StatefulCellRenderer
// =============================================================================

/// Renders cells while tracking terminal state.
///
/// Emits cursor moves only when the target cell is not adjacent to the last
/// one, and SGR sequences only when colors or attributes change.
pub struct StatefulCellRenderer {
    cursor: Option<(u16, u16)>,
    fg: Option<Rgba>,
    bg: Option<Rgba>,
    attrs: Option<Attr>,
}

impl StatefulCellRenderer {
    /// Create a renderer with no known terminal state.
    pub fn new() -> Self {
        Self {
            cursor: None,
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    /// Forget all tracked state (start of a frame).
    pub fn reset(&mut self) {
        self.cursor = None;
        self.fg = None;
        self.bg = None;
        self.attrs = None;
    }

    /// Render one cell at (x, y), positioning the cursor as needed.
    ///
    /// Continuation cells (char 0) are skipped; the preceding wide
    /// character already covered them.
    pub fn render_cell(&mut self, out: &mut OutputBuffer, x: u16, y: u16, cell: &Cell) {
        if cell.char == 0 {
            return;
        }

        // Cursor move, unless we're already there
        if self.cursor != Some((x, y)) {
            out.write_str(&format!("\x1b[{};{}H", y + 1, x + 1));
        }

        self.emit_style(out, cell);
        out.write_codepoint(cell.char);

        // The cursor advanced by the glyph width
        let advance = char::from_u32(cell.char)
            .map(crate::layout::text_measure::char_width)
            .unwrap_or(1)
            .max(1);
        self.cursor = Some((x + advance, y));
    }

    /// Render one cell without cursor positioning (sequential output).
    ///
    /// Used by the inline renderer, which writes rows in document order and
    /// must not emit absolute cursor moves.
    pub fn render_cell_sequential(&mut self, out: &mut OutputBuffer, cell: &Cell) {
        if cell.char == 0 {
            return;
        }
        self.emit_style(out, cell);
        out.write_codepoint(cell.char);
    }

    /// Emit SGR changes for a cell's style.
    fn emit_style(&mut self, out: &mut OutputBuffer, cell: &Cell) {
        // Attribute changes force a reset because SGR has no "unset bold"
        // that every terminal honors
        if self.attrs != Some(cell.attrs) {
            out.write_str("\x1b[0m");
            if cell.attrs.contains(Attr::BOLD) {
                out.write_str("\x1b[1m");
            }
            if cell.attrs.contains(Attr::DIM) {
                out.write_str("\x1b[2m");
            }
            if cell.attrs.contains(Attr::ITALIC) {
                out.write_str("\x1b[3m");
            }
            if cell.attrs.contains(Attr::UNDERLINE) {
                out.write_str("\x1b[4m");
            }
            if cell.attrs.contains(Attr::INVERSE) {
                out.write_str("\x1b[7m");
            }
            self.attrs = Some(cell.attrs);
            // Colors must be re-emitted after the reset
            self.fg = None;
            self.bg = None;
        }

        if self.fg != Some(cell.fg) {
            if cell.fg.is_terminal_default() {
                out.write_str("\x1b[39m");
            } else {
                out.write_str(&format!("\x1b[38;2;{};{};{}m", cell.fg.r, cell.fg.g, cell.fg.b));
            }
            self.fg = Some(cell.fg);
        }

        if self.bg != Some(cell.bg) {
            if cell.bg.is_terminal_default() {
                out.write_str("\x1b[49m");
            } else {
                out.write_str(&format!("\x1b[48;2;{};{};{}m", cell.bg.r, cell.bg.g, cell.bg.b));
            }
            self.bg = Some(cell.bg);
        }
    }
}

impl Default for StatefulCellRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
