//! Mount API - Application lifecycle and render effect.
//!
//! This module provides the entry point for mounting the widget tree.
//! It sets up the render effect that monitors the reactive pipeline and
//! outputs to the terminal.
//!
//! # Example
//!
//! ```ignore
//! use glint_tui::pipeline::mount;
//!
//! // Mount the application
//! let handle = mount::mount()?;
//!
//! // Option 1: Run blocking event loop
//! mount::run(&handle)?;
//!
//! // Option 2: Tick manually in your own loop
//! while mount::tick(&handle)? {
//!     // Your logic here
//! }
//!
//! // Clean up
//! handle.unmount();
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use spark_signals::effect;

use crate::error::Result;
use crate::renderer::{DiffRenderer, InlineRenderer};
use crate::state::{input, keyboard, mouse};

use super::frame_buffer_derived::create_frame_buffer_derived;
use super::layout_derived::create_layout_derived;
use super::terminal::{detect_render_mode, detect_terminal_size, render_mode, RenderMode};

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by mount() that allows unmounting.
///
/// Holds references to:
/// - The render effect stop function
/// - The running flag (set to false on Ctrl+C or unmount)
/// - The Ctrl+C handler cleanup
pub struct MountHandle {
    stop_effect: Option<Box<dyn FnOnce()>>,
    running: Arc<AtomicBool>,
    quit_cleanup: Option<Box<dyn FnOnce()>>,
}

impl MountHandle {
    /// Stop the render effect and clean up.
    ///
    /// This will:
    /// 1. Set running to false
    /// 2. Remove the Ctrl+C handler
    /// 3. Disable mouse capture
    /// 4. Stop the render effect (dropping the renderer restores the terminal)
    pub fn unmount(mut self) {
        self.running.store(false, Ordering::SeqCst);

        if let Some(cleanup) = self.quit_cleanup.take() {
            cleanup();
        }

        let _ = input::disable_mouse();

        if let Some(stop) = self.stop_effect.take() {
            stop();
        }
    }

    /// Check if still running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Stop the application (sets running to false).
    /// Use this to trigger graceful shutdown from custom code.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        // Disable mouse on drop (best effort)
        let _ = input::disable_mouse();

        if let Some(stop) = self.stop_effect.take() {
            stop();
        }
    }
}

// =============================================================================
// Mount Function
// =============================================================================

/// Mount the widget tree.
///
/// This sets up:
/// 1. Terminal size detection and render mode selection
/// 2. Reactive render pipeline (layout -> frame buffer -> renderer)
/// 3. Mouse capture
/// 4. Ctrl+C handler for graceful shutdown
///
/// Returns a MountHandle for cleanup.
pub fn mount() -> Result<MountHandle> {
    detect_terminal_size();
    detect_render_mode();

    // Create reactive pipeline
    let layout_derived = create_layout_derived();
    let fb_derived = create_frame_buffer_derived(layout_derived);

    let mode = render_mode();
    tracing::debug!(?mode, "mounting");

    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();

    // Initialize the global hit grid with terminal size
    {
        let result = fb_derived.get();
        let (tw, th) = result.terminal_size;
        mouse::resize_hit_grid(tw, th);
    }

    // Track current hit grid size for resize detection
    let mut last_hit_grid_size: (u16, u16) = mouse::hit_grid_size();

    // Create the ONE render effect
    // Each branch needs to be boxed because effect() returns different
    // impl FnOnce() types
    let stop: Box<dyn FnOnce()> = match mode {
        RenderMode::Fullscreen => {
            let mut renderer = DiffRenderer::new();
            renderer.enter_fullscreen()?;

            let stop_fn = effect(move || {
                if !running_clone.load(Ordering::SeqCst) {
                    return;
                }

                // Read from derived (creates dependency)
                let result = fb_derived.get();

                // Resize/clear hit grid if needed
                let (tw, th) = result.terminal_size;
                if last_hit_grid_size != (tw, th) {
                    mouse::resize_hit_grid(tw, th);
                    last_hit_grid_size = (tw, th);
                } else {
                    mouse::clear_hit_grid();
                }

                // Apply hit regions (side effect!)
                for region in &result.hit_regions {
                    mouse::fill_hit_rect(
                        region.x,
                        region.y,
                        region.width,
                        region.height,
                        region.component_index,
                    );
                }

                // Render to terminal (side effect!)
                let _ = renderer.render(&result.buffer);
            });
            Box::new(stop_fn)
        }
        RenderMode::Inline => {
            let mut renderer = InlineRenderer::new();
            renderer.enter_inline()?;

            let stop_fn = effect(move || {
                if !running_clone.load(Ordering::SeqCst) {
                    return;
                }

                let result = fb_derived.get();

                let (tw, th) = result.terminal_size;
                if last_hit_grid_size != (tw, th) {
                    mouse::resize_hit_grid(tw, th);
                    last_hit_grid_size = (tw, th);
                } else {
                    mouse::clear_hit_grid();
                }

                for region in &result.hit_regions {
                    mouse::fill_hit_rect(
                        region.x,
                        region.y,
                        region.width,
                        region.height,
                        region.component_index,
                    );
                }

                let _ = renderer.render(&result.buffer);
            });
            Box::new(stop_fn)
        }
    };

    // The like button is pointer-driven, so both modes capture the mouse
    input::enable_mouse()?;

    // Ctrl+C - graceful shutdown
    let running_for_quit = running.clone();
    let quit_cleanup = keyboard::on(move |event| {
        if event.modifiers.ctrl && event.key == "c" {
            tracing::debug!("Ctrl+C, shutting down");
            running_for_quit.store(false, Ordering::SeqCst);
            true // Consume
        } else {
            false
        }
    });

    Ok(MountHandle {
        stop_effect: Some(stop),
        running,
        quit_cleanup: Some(Box::new(quit_cleanup)),
    })
}

/// Unmount and clean up.
pub fn unmount(handle: MountHandle) {
    handle.unmount();
}

// =============================================================================
// Event Loop
// =============================================================================

/// Run the event loop once (non-blocking).
///
/// Call this in your main loop to process input events.
///
/// # Returns
///
/// * `Ok(true)` - Continue running
/// * `Ok(false)` - Stop requested (Ctrl+C pressed or `handle.stop()` called)
/// * `Err(e)` - I/O error while polling
pub fn tick(handle: &MountHandle) -> Result<bool> {
    if !handle.is_running() {
        return Ok(false);
    }

    // Poll with short timeout (~60fps)
    if let Some(event) = input::poll_event(Duration::from_millis(16))? {
        input::route_event(event);
    }

    Ok(handle.is_running())
}

/// Run the event loop (blocking until stopped).
///
/// This function blocks until:
/// - Ctrl+C is pressed (sets running to false)
/// - `handle.stop()` is called from a handler
pub fn run(handle: &MountHandle) -> Result<()> {
    while tick(handle)? {
        // Continue processing events
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_flag() {
        let running = Arc::new(AtomicBool::new(true));
        assert!(running.load(Ordering::SeqCst));

        running.store(false, Ordering::SeqCst);
        assert!(!running.load(Ordering::SeqCst));
    }
}
