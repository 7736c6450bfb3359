//! FrameBuffer Derived - Reactive frame buffer computation.
//!
//! Creates a Derived that renders all visible components to a FrameBuffer
//! whenever the layout or visual properties change.

use std::collections::HashMap;

use spark_signals::{derived, Derived};

use crate::engine::arrays::{core, text, visual};
use crate::engine::{get_allocated_indices, get_flex_node};
use crate::layout::text_measure::{string_width, wrap_lines};
use crate::layout::ComputedLayout;
use crate::renderer::FrameBuffer;
use crate::types::{ClipRect, ComponentType, TextAlign};

use super::terminal::{render_mode_signal, terminal_height_signal, terminal_width_signal, RenderMode};

// =============================================================================
// Types
// =============================================================================

/// A hit region for mouse interaction detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    pub component_index: usize,
}

/// Result of frame buffer computation.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBufferResult {
    /// The rendered frame buffer.
    pub buffer: FrameBuffer,
    /// Hit regions for mouse interaction (collected as data, not side effects).
    pub hit_regions: Vec<HitRegion>,
    /// Terminal size at time of render.
    pub terminal_size: (u16, u16),
}

// =============================================================================
// FrameBuffer Derived Factory
// =============================================================================

/// Create the frame buffer derived.
///
/// Takes the layout derived as input and returns a Derived that produces
/// the rendered FrameBuffer whenever layout or visual properties change.
pub fn create_frame_buffer_derived(
    layout_derived: Derived<ComputedLayout>,
) -> Derived<FrameBufferResult> {
    let tw_signal = terminal_width_signal();
    let th_signal = terminal_height_signal();
    let mode_signal = render_mode_signal();

    derived(move || {
        // Read terminal dimensions
        let tw = tw_signal.get();
        let th = th_signal.get();
        let mode = mode_signal.get();

        // Read layout (creates dependency on layoutDerived)
        let computed_layout = layout_derived.get();

        // Inline mode sizes the buffer to the content
        let buffer_height = match mode {
            RenderMode::Fullscreen => th,
            RenderMode::Inline => computed_layout.content_height.max(1),
        };

        let mut buffer = FrameBuffer::new(tw, buffer_height);
        let mut hit_regions = Vec::new();

        let mut indices = get_allocated_indices();
        if indices.is_empty() {
            return FrameBufferResult {
                buffer,
                hit_regions,
                terminal_size: (tw, th),
            };
        }
        indices.sort_unstable();

        // Build parent-child map
        let mut child_map: HashMap<usize, Vec<usize>> = HashMap::new();
        let mut roots: Vec<usize> = Vec::new();

        for &idx in &indices {
            if !core::get_visible(idx) {
                continue;
            }

            if let Some(parent_idx) = core::get_parent_index(idx) {
                child_map.entry(parent_idx).or_default().push(idx);
            } else {
                roots.push(idx);
            }
        }

        // Render each root and its children
        for root_idx in roots {
            render_component(
                &mut buffer,
                root_idx,
                &computed_layout,
                &child_map,
                &mut hit_regions,
                None, // No parent clip
                0,    // Parent absolute X
                0,    // Parent absolute Y
            );
        }

        FrameBufferResult {
            buffer,
            hit_regions,
            terminal_size: (tw, th),
        }
    })
}

// =============================================================================
// Component Rendering
// =============================================================================

/// Render a component and its children recursively.
#[allow(clippy::too_many_arguments)]
fn render_component(
    buffer: &mut FrameBuffer,
    index: usize,
    layout: &ComputedLayout,
    child_map: &HashMap<usize, Vec<usize>>,
    hit_regions: &mut Vec<HitRegion>,
    parent_clip: Option<&ClipRect>,
    parent_abs_x: i32,
    parent_abs_y: i32,
) {
    if !core::get_visible(index) {
        return;
    }

    // Computed position is relative to the parent
    let rel_x = layout.x.get(index).copied().unwrap_or(0) as i32;
    let rel_y = layout.y.get(index).copied().unwrap_or(0) as i32;
    let w = layout.width.get(index).copied().unwrap_or(0);
    let h = layout.height.get(index).copied().unwrap_or(0);

    if w == 0 || h == 0 {
        return;
    }

    let abs_x = parent_abs_x + rel_x;
    let abs_y = parent_abs_y + rel_y;

    let x = abs_x.max(0) as u16;
    let y = abs_y.max(0) as u16;

    let component_bounds = ClipRect::new(x, y, w, h);

    // Effective clip is the intersection with the parent's clip
    let effective_clip = match parent_clip {
        Some(parent) => match component_bounds.intersect(parent) {
            Some(clip) => clip,
            None => return, // Completely clipped
        },
        None => component_bounds,
    };

    let fg = visual::get_fg_color(index);
    let bg = visual::get_bg_color(index);

    // Render background
    if !bg.is_terminal_default() {
        buffer.fill_rect(x, y, w, h, bg, Some(&effective_clip));
    }

    // Collect hit region (as data, not side effect!)
    hit_regions.push(HitRegion {
        x,
        y,
        width: w,
        height: h,
        component_index: index,
    });

    // Render border
    let border_style = visual::get_border_style(index);
    buffer.draw_border(x, y, w, h, border_style, fg, Some(&effective_clip));

    // Content area sits inside border and padding
    let (pad_top, pad_right, pad_bottom, pad_left, border_width) = match get_flex_node(index) {
        Some(node) => (
            node.padding_top.get(),
            node.padding_right.get(),
            node.padding_bottom.get(),
            node.padding_left.get(),
            if node.border.get() > 0 { 1u16 } else { 0 },
        ),
        None => (0, 0, 0, 0, 0),
    };

    let total_top = pad_top.saturating_add(border_width);
    let total_right = pad_right.saturating_add(border_width);
    let total_bottom = pad_bottom.saturating_add(border_width);
    let total_left = pad_left.saturating_add(border_width);

    let content_x = x.saturating_add(total_left);
    let content_y = y.saturating_add(total_top);
    let content_w = w.saturating_sub(total_left).saturating_sub(total_right);
    let content_h = h.saturating_sub(total_top).saturating_sub(total_bottom);

    if content_w > 0 && content_h > 0 {
        let content_bounds = ClipRect::new(content_x, content_y, content_w, content_h);
        if let Some(content_clip) = content_bounds.intersect(&effective_clip) {
            if core::get_component_type(index) == ComponentType::Text {
                render_text(
                    buffer,
                    index,
                    content_x,
                    content_y,
                    content_w,
                    content_h,
                    &content_clip,
                );
            }
        }
    }

    // Render children - pass this component's absolute position
    if let Some(children) = child_map.get(&index) {
        for &child_idx in children {
            render_component(
                buffer,
                child_idx,
                layout,
                child_map,
                hit_regions,
                Some(&effective_clip),
                abs_x,
                abs_y,
            );
        }
    }
}

/// Render wrapped, aligned text into the content area.
fn render_text(
    buffer: &mut FrameBuffer,
    index: usize,
    content_x: u16,
    content_y: u16,
    content_w: u16,
    content_h: u16,
    clip: &ClipRect,
) {
    let content = text::get_text_content(index);
    if content.is_empty() {
        return;
    }

    let fg = visual::get_fg_color(index);
    let attrs = text::get_text_attrs(index);
    let align = text::get_text_align(index);

    for (line_no, line) in wrap_lines(&content, content_w).iter().enumerate() {
        if line_no as u16 >= content_h {
            break;
        }

        let line_width = string_width(line);
        let offset = match align {
            TextAlign::Left => 0,
            TextAlign::Center => content_w.saturating_sub(line_width) / 2,
            TextAlign::Right => content_w.saturating_sub(line_width),
        };

        buffer.draw_str(
            content_x + offset,
            content_y + line_no as u16,
            line,
            fg,
            attrs,
            Some(clip),
        );
    }
}

// =============================================================================
// Tests
// =============================================================================
