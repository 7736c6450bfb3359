//! Layout Derived - Reactive layout computation.
//!
//! Creates a Derived that computes layout whenever:
//! - Terminal size changes
//! - Render mode changes
//! - Any FlexNode slot changes
//! - Components are added/removed

use spark_signals::{derived, Derived};

use crate::layout::{compute_layout, ComputedLayout};

use super::terminal::{render_mode_signal, terminal_height_signal, terminal_width_signal, RenderMode};

/// Create the layout derived.
///
/// Returns a Derived that computes layout and automatically re-runs when
/// any dependency changes (terminal size, render mode, FlexNode slots, etc.)
pub fn create_layout_derived() -> Derived<ComputedLayout> {
    let tw_signal = terminal_width_signal();
    let th_signal = terminal_height_signal();
    let mode_signal = render_mode_signal();

    derived(move || {
        // Read terminal dimensions (creates reactive dependency)
        let tw = tw_signal.get();
        let th = th_signal.get();

        // Read render mode (creates reactive dependency)
        let mode = mode_signal.get();

        // Constrain height only in fullscreen mode
        let constrain_height = mode == RenderMode::Fullscreen;

        // compute_layout reads FlexNode slots, creating dependencies on them
        compute_layout(tw, th, constrain_height)
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::arrays::core;
    use crate::engine::{allocate_index, create_flex_node, get_flex_node, reset_registry};
    use crate::pipeline::terminal::set_terminal_size;
    use crate::types::{ComponentType, Dimension};

    fn setup() {
        reset_registry();
        set_terminal_size(80, 24);
    }

    #[test]
    fn test_layout_derived_empty() {
        setup();

        let layout_derived = create_layout_derived();
        let layout = layout_derived.get();
        assert_eq!(layout.content_width, 0);
    }

    #[test]
    fn test_layout_derived_reacts_to_slot_change() {
        setup();

        let idx = allocate_index(None);
        core::set_component_type(idx, ComponentType::Box);
        create_flex_node(idx);

        let layout_derived = create_layout_derived();

        let node = get_flex_node(idx).unwrap();
        node.width.set_value(Dimension::Cells(30));
        node.height.set_value(Dimension::Cells(5));
        assert_eq!(layout_derived.get().width[idx], 30);

        node.width.set_value(Dimension::Cells(60));
        assert_eq!(layout_derived.get().width[idx], 60);
    }

    #[test]
    fn test_layout_derived_reacts_to_allocation() {
        setup();

        let layout_derived = create_layout_derived();
        assert_eq!(layout_derived.get().content_width, 0);

        let idx = allocate_index(None);
        core::set_component_type(idx, ComponentType::Box);
        let node = create_flex_node(idx);
        node.width.set_value(Dimension::Cells(10));
        node.height.set_value(Dimension::Cells(2));

        assert_eq!(layout_derived.get().width[idx], 10);
    }
}
