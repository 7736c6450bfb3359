//! Inline renderer.
//!
//! Renders into the normal terminal buffer at the current scroll position,
//! redrawing in place each frame: move the cursor back up over the previous
//! frame, clear below, and write every row. Terminal scrollback keeps
//! working because no alternate screen is used.

use std::io;

use crossterm::terminal;

use super::ansi;
use super::buffer::FrameBuffer;
use super::output::{OutputBuffer, StatefulCellRenderer};

/// In-place renderer for inline mode.
pub struct InlineRenderer {
    output: OutputBuffer,
    cell_renderer: StatefulCellRenderer,
    last_height: u16,
    is_raw: bool,
}

impl InlineRenderer {
    /// Create a new inline renderer.
    pub fn new() -> Self {
        Self {
            output: OutputBuffer::new(),
            cell_renderer: StatefulCellRenderer::new(),
            last_height: 0,
            is_raw: false,
        }
    }

    /// Enter inline mode: raw mode for input, cursor hidden, no alternate
    /// screen.
    pub fn enter_inline(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        ansi::cursor_hide(&mut self.output)?;
        self.output.flush_stdout()?;
        self.is_raw = true;
        Ok(())
    }

    /// Exit inline mode, leaving the last frame in the scrollback.
    pub fn exit_inline(&mut self) -> io::Result<()> {
        if !self.is_raw {
            return Ok(());
        }
        ansi::sgr_reset(&mut self.output)?;
        ansi::cursor_show(&mut self.output)?;
        self.output.write_str("\r\n");
        self.output.flush_stdout()?;
        terminal::disable_raw_mode()?;
        self.is_raw = false;
        Ok(())
    }

    /// Render a frame, replacing the previously rendered frame in place.
    pub fn render(&mut self, buffer: &FrameBuffer) -> io::Result<()> {
        ansi::begin_sync(&mut self.output)?;

        // Move back over the previous frame and clear it
        ansi::cursor_up_lines(&mut self.output, self.last_height)?;
        ansi::clear_below(&mut self.output)?;

        self.cell_renderer.reset();

        for y in 0..buffer.height() {
            if y > 0 {
                self.output.write_str("\r\n");
            }
            for x in 0..buffer.width() {
                if let Some(cell) = buffer.get(x, y) {
                    self.cell_renderer
                        .render_cell_sequential(&mut self.output, cell);
                }
            }
        }

        ansi::sgr_reset(&mut self.output)?;
        ansi::end_sync(&mut self.output)?;
        self.output.flush_stdout()?;

        self.last_height = buffer.height().saturating_sub(1);
        Ok(())
    }
}

impl Default for InlineRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InlineRenderer {
    fn drop(&mut self) {
        let _ = self.exit_inline();
    }
}
