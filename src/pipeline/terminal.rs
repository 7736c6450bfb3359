//! Terminal state - size and render mode signals.
//!
//! Terminal width/height and the render mode are reactive signals so the
//! layout and frame buffer deriveds re-run when they change.

use spark_signals::{signal, Signal};

// =============================================================================
// Render Mode
// =============================================================================

/// Rendering mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Alternate screen buffer, full terminal control, diff rendering.
    #[default]
    Fullscreen,
    /// Renders inline at the current scroll position, updates in place.
    Inline,
}

impl RenderMode {
    /// Parse a render mode name ("fullscreen" or "inline").
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "fullscreen" => Some(Self::Fullscreen),
            "inline" => Some(Self::Inline),
            _ => None,
        }
    }
}

// =============================================================================
// Signals
// =============================================================================

thread_local! {
    static TERMINAL_WIDTH: Signal<u16> = signal(80);
    static TERMINAL_HEIGHT: Signal<u16> = signal(24);
    static RENDER_MODE: Signal<RenderMode> = signal(RenderMode::Fullscreen);
}

/// Get the terminal width signal (for deriveds).
pub fn terminal_width_signal() -> Signal<u16> {
    TERMINAL_WIDTH.with(|s| s.clone())
}

/// Get the terminal height signal (for deriveds).
pub fn terminal_height_signal() -> Signal<u16> {
    TERMINAL_HEIGHT.with(|s| s.clone())
}

/// Get the render mode signal (for deriveds).
pub fn render_mode_signal() -> Signal<RenderMode> {
    RENDER_MODE.with(|s| s.clone())
}

/// Get the current terminal width (reactive).
pub fn terminal_width() -> u16 {
    TERMINAL_WIDTH.with(|s| s.get())
}

/// Get the current terminal height (reactive).
pub fn terminal_height() -> u16 {
    TERMINAL_HEIGHT.with(|s| s.get())
}

/// Set the terminal size (called on resize events and at mount).
pub fn set_terminal_size(width: u16, height: u16) {
    TERMINAL_WIDTH.with(|s| s.set(width));
    TERMINAL_HEIGHT.with(|s| s.set(height));
}

/// Get the current render mode (reactive).
pub fn render_mode() -> RenderMode {
    RENDER_MODE.with(|s| s.get())
}

/// Set the render mode. Takes effect on the next frame.
pub fn set_render_mode(mode: RenderMode) {
    RENDER_MODE.with(|s| s.set(mode));
}

// =============================================================================
// Detection
// =============================================================================

/// Detect the real terminal size and update the signals.
///
/// Falls back to 80x24 when detection fails (e.g. not a tty).
pub fn detect_terminal_size() {
    let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
    set_terminal_size(width, height);
}

/// Read the render mode from the `GLINT_RENDER_MODE` environment variable,
/// if set to a recognized name.
pub fn detect_render_mode() {
    if let Ok(value) = std::env::var("GLINT_RENDER_MODE") {
        match RenderMode::from_name(&value) {
            Some(mode) => set_render_mode(mode),
            None => tracing::warn!(value, "unrecognized GLINT_RENDER_MODE, keeping default"),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_terminal_size() {
        set_terminal_size(100, 40);
        assert_eq!(terminal_width(), 100);
        assert_eq!(terminal_height(), 40);
    }

    #[test]
    fn test_render_mode_from_name() {
        assert_eq!(RenderMode::from_name("inline"), Some(RenderMode::Inline));
        assert_eq!(
            RenderMode::from_name(" Fullscreen "),
            Some(RenderMode::Fullscreen)
        );
        assert_eq!(RenderMode::from_name("append"), None);
    }

    #[test]
    fn test_set_render_mode() {
        set_render_mode(RenderMode::Inline);
        assert_eq!(render_mode(), RenderMode::Inline);
        set_render_mode(RenderMode::Fullscreen);
        assert_eq!(render_mode(), RenderMode::Fullscreen);
    }
}
