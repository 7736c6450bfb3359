//! End-to-end widget behavior through the derived pipeline.
//!
//! These tests drive the full path - containers, widgets, layout, frame
//! buffer, hit grid, mouse dispatch - without touching a real terminal.

use glint_tui::pipeline::FrameBufferResult;
use glint_tui::state::mouse::{self, MouseButton, MouseEvent};
use glint_tui::surface::{self, ContainerProps};
use glint_tui::widgets::{like_button, title, LikeButtonProps, TitleProps, LIKED_TEXT, LIKE_LABEL};
use glint_tui::{
    box_primitive, create_frame_buffer_derived, create_layout_derived, reset_registry,
    set_render_mode, set_terminal_size, Attr, BoxProps, RenderMode,
};

fn setup() {
    reset_registry();
    surface::reset_surface();
    mouse::reset_mouse_state();
    set_terminal_size(40, 12);
    set_render_mode(RenderMode::Fullscreen);
}

/// Mirror the mount effect: push the frame's hit regions into the hit grid.
fn sync_hit_grid(result: &FrameBufferResult) {
    let (tw, th) = result.terminal_size;
    mouse::resize_hit_grid(tw, th);
    for region in &result.hit_regions {
        mouse::fill_hit_rect(
            region.x,
            region.y,
            region.width,
            region.height,
            region.component_index,
        );
    }
}

fn buffer_contains(result: &FrameBufferResult, needle: &str) -> bool {
    result
        .buffer
        .to_text()
        .iter()
        .any(|line| line.contains(needle))
}

/// Build the page: a root column with one like-button container, the button
/// mounted into it. Returns the button box's component index.
fn build_like_button_page(comment_id: i64) -> usize {
    let _root = box_primitive(BoxProps {
        id: Some("root".to_string()),
        children: Some(Box::new(move || {
            surface::container(ContainerProps {
                classes: vec!["like_button_container".to_string()],
                attrs: vec![("commentid".to_string(), comment_id.to_string())],
                ..Default::default()
            });
        })),
        ..Default::default()
    });

    let handle = surface::query_class("like_button_container")
        .into_iter()
        .next()
        .unwrap();
    let id = handle.attr_int("commentid").unwrap();

    handle.render_into(|| {
        like_button(LikeButtonProps {
            comment_id: Some(id),
            ..Default::default()
        });
    });

    glint_tui::get_index(&format!("like_button_{comment_id}")).unwrap()
}

fn click(x: u16, y: u16) {
    mouse::dispatch(MouseEvent::down(MouseButton::Left, x, y));
    mouse::dispatch(MouseEvent::up(MouseButton::Left, x, y));
}

#[test]
fn like_button_shows_like_affordance_before_click() {
    setup();

    build_like_button_page(1);

    let fb = create_frame_buffer_derived(create_layout_derived());
    let result = fb.get();

    assert!(buffer_contains(&result, LIKE_LABEL));
    assert!(!buffer_contains(&result, LIKED_TEXT));
}

#[test]
fn one_click_renders_liked_text_and_stays() {
    setup();

    let button_index = build_like_button_page(1);

    let fb = create_frame_buffer_derived(create_layout_derived());
    let result = fb.get();
    sync_hit_grid(&result);

    // Click inside the button's content area
    let region = result
        .hit_regions
        .iter()
        .find(|r| r.component_index == button_index)
        .expect("button has a hit region");
    click(region.x + 1, region.y + 1);

    let result = fb.get();
    assert!(buffer_contains(&result, LIKED_TEXT));
    assert!(!buffer_contains(&result, LIKE_LABEL));

    // Further clicks change nothing
    sync_hit_grid(&result);
    click(region.x, region.y);
    click(region.x + 1, region.y);

    let result = fb.get();
    assert!(buffer_contains(&result, LIKED_TEXT));
}

#[test]
fn commentid_attribute_round_trips() {
    setup();

    let _c = surface::container(ContainerProps {
        classes: vec!["like_button_container".to_string()],
        attrs: vec![("commentid".to_string(), "42".to_string())],
        ..Default::default()
    });

    let handle = surface::query_class("like_button_container")
        .into_iter()
        .next()
        .unwrap();
    assert_eq!(handle.attr_int("commentid").unwrap(), 42);
    assert_eq!(handle.attr("commentid").unwrap(), "42");
}

#[test]
fn invalid_commentid_surfaces_an_error() {
    setup();

    let _c = surface::container(ContainerProps {
        classes: vec!["like_button_container".to_string()],
        attrs: vec![("commentid".to_string(), "NaN".to_string())],
        ..Default::default()
    });

    let handle = surface::query_class("like_button_container")
        .into_iter()
        .next()
        .unwrap();
    assert!(handle.attr_int("commentid").is_err());
}

#[test]
fn title_renders_bold_heading_text() {
    setup();

    let _root = box_primitive(BoxProps {
        id: Some("root".to_string()),
        children: Some(Box::new(|| {
            surface::container(ContainerProps {
                id: Some("create".to_string()),
                ..Default::default()
            });
        })),
        ..Default::default()
    });

    let handle = surface::query_id("create").unwrap();
    handle.render_into(|| {
        title(TitleProps {
            text: "标题".into(),
            ..Default::default()
        });
    });

    let fb = create_frame_buffer_derived(create_layout_derived());
    let result = fb.get();

    assert!(buffer_contains(&result, "标题"));

    // The heading cell carries the bold attribute
    let mut found = false;
    for y in 0..result.buffer.height() {
        for x in 0..result.buffer.width() {
            if let Some(cell) = result.buffer.get(x, y) {
                if cell.char == '标' as u32 {
                    assert!(cell.attrs.contains(Attr::BOLD));
                    assert!(cell.attrs.contains(Attr::UNDERLINE));
                    found = true;
                }
            }
        }
    }
    assert!(found, "heading glyph not found in frame");
}

#[test]
fn two_buttons_keep_independent_state() {
    setup();

    let _root = box_primitive(BoxProps {
        id: Some("root".to_string()),
        gap: Some(1u16.into()),
        children: Some(Box::new(|| {
            for comment_id in 1..=2 {
                surface::container(ContainerProps {
                    classes: vec!["like_button_container".to_string()],
                    attrs: vec![("commentid".to_string(), comment_id.to_string())],
                    ..Default::default()
                });
            }
        })),
        ..Default::default()
    });

    for handle in surface::query_class("like_button_container") {
        let id = handle.attr_int("commentid").unwrap();
        handle.render_into(|| {
            like_button(LikeButtonProps {
                comment_id: Some(id),
                ..Default::default()
            });
        });
    }

    let first = glint_tui::get_index("like_button_1").unwrap();

    let fb = create_frame_buffer_derived(create_layout_derived());
    let result = fb.get();
    sync_hit_grid(&result);

    let region = result
        .hit_regions
        .iter()
        .find(|r| r.component_index == first)
        .unwrap();
    click(region.x + 1, region.y + 1);

    // One button liked, the other still shows the affordance
    let result = fb.get();
    assert!(buffer_contains(&result, LIKED_TEXT));
    assert!(buffer_contains(&result, LIKE_LABEL));
}
