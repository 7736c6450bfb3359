//! ANSI escape sequence helpers.
//!
//! All terminal protocol writes go through these helpers into an
//! [`super::output::OutputBuffer`], so a frame becomes a single syscall.

use std::io;

use super::output::OutputBuffer;

/// Move the cursor to (x, y), 0-indexed.
pub fn cursor_to(out: &mut OutputBuffer, x: u16, y: u16) -> io::Result<()> {
    out.write_str(&format!("\x1b[{};{}H", y + 1, x + 1));
    Ok(())
}

/// Hide the cursor.
pub fn cursor_hide(out: &mut OutputBuffer) -> io::Result<()> {
    out.write_str("\x1b[?25l");
    Ok(())
}

/// Show the cursor.
pub fn cursor_show(out: &mut OutputBuffer) -> io::Result<()> {
    out.write_str("\x1b[?25h");
    Ok(())
}

/// Enter the alternate screen buffer.
pub fn enter_alt_screen(out: &mut OutputBuffer) -> io::Result<()> {
    out.write_str("\x1b[?1049h");
    Ok(())
}

/// Leave the alternate screen buffer.
pub fn exit_alt_screen(out: &mut OutputBuffer) -> io::Result<()> {
    out.write_str("\x1b[?1049l");
    Ok(())
}

/// Clear the whole screen.
pub fn clear_screen(out: &mut OutputBuffer) -> io::Result<()> {
    out.write_str("\x1b[2J");
    Ok(())
}

/// Clear from the cursor to the end of the screen.
pub fn clear_below(out: &mut OutputBuffer) -> io::Result<()> {
    out.write_str("\x1b[0J");
    Ok(())
}

/// Move the cursor up `n` lines (column 1).
pub fn cursor_up_lines(out: &mut OutputBuffer, n: u16) -> io::Result<()> {
    if n > 0 {
        out.write_str(&format!("\x1b[{}F", n));
    } else {
        out.write_str("\r");
    }
    Ok(())
}

/// Reset all SGR attributes.
pub fn sgr_reset(out: &mut OutputBuffer) -> io::Result<()> {
    out.write_str("\x1b[0m");
    Ok(())
}

/// Begin synchronized output (terminals that support it render the frame
/// atomically).
pub fn begin_sync(out: &mut OutputBuffer) -> io::Result<()> {
    out.write_str("\x1b[?2026h");
    Ok(())
}

/// End synchronized output.
pub fn end_sync(out: &mut OutputBuffer) -> io::Result<()> {
    out.write_str("\x1b[?2026l");
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_to_is_one_indexed() {
        let mut out = OutputBuffer::new();
        cursor_to(&mut out, 0, 0).unwrap();
        assert_eq!(out.as_str(), "\x1b[1;1H");

        out.clear();
        cursor_to(&mut out, 4, 2).unwrap();
        assert_eq!(out.as_str(), "\x1b[3;5H");
    }

    #[test]
    fn test_cursor_up_lines() {
        let mut out = OutputBuffer::new();
        cursor_up_lines(&mut out, 3).unwrap();
        assert_eq!(out.as_str(), "\x1b[3F");

        out.clear();
        cursor_up_lines(&mut out, 0).unwrap();
        assert_eq!(out.as_str(), "\r");
    }
}
