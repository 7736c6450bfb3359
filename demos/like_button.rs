//! Like button demo.
//!
//! Registers three containers carrying the `like_button_container` class and
//! a `commentid` attribute, then mounts one like button per container - the
//! widget-constructor rendition. A fourth box composes the same affordance
//! from raw primitives. Click a button, or press Ctrl+C to quit.
//!
//! Run with: cargo run --example like_button
//! Inline mode: GLINT_RENDER_MODE=inline cargo run --example like_button

use std::rc::Rc;

use glint_tui::surface::{self, ContainerProps};
use glint_tui::widgets::{like_button, LikeButtonProps};
use glint_tui::{
    box_primitive, mount, reset_registry, run, text, BorderStyle, BoxProps, PropValue, Result,
    TextProps,
};
use tracing_subscriber::EnvFilter;

/// The same affordance as the widget, composed from raw primitives
/// (the second rendition from the original pair).
fn raw_like_button() {
    let liked = spark_signals::signal(false);
    let liked_for_click = liked.clone();
    let liked_for_border = liked.clone();

    box_primitive(BoxProps {
        id: Some("raw_rendition".to_string()),
        border: Some(PropValue::Getter(Rc::new(move || {
            if liked_for_border.get() {
                BorderStyle::None
            } else {
                BorderStyle::Single
            }
        }))),
        on_click: Some(Rc::new(move |_| {
            if !liked_for_click.get() {
                liked_for_click.set(true);
            }
        })),
        children: Some(Box::new(move || {
            text(TextProps {
                content: PropValue::Getter(Rc::new(move || {
                    if liked.get() {
                        "You liked this.".to_string()
                    } else {
                        "Like".to_string()
                    }
                })),
                ..Default::default()
            });
        })),
        ..Default::default()
    });
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    reset_registry();

    // Root column: three comment containers, then the raw rendition
    let _root = box_primitive(BoxProps {
        id: Some("root".to_string()),
        padding: Some(1u16.into()),
        gap: Some(1u16.into()),
        children: Some(Box::new(|| {
            for comment_id in 1..=3 {
                surface::container(ContainerProps {
                    classes: vec!["like_button_container".to_string()],
                    attrs: vec![("commentid".to_string(), comment_id.to_string())],
                    ..Default::default()
                });
            }
            raw_like_button();
        })),
        ..Default::default()
    });

    // Mount one like button per container, reading the id from the attribute
    for handle in surface::query_class("like_button_container") {
        match handle.attr_int("commentid") {
            Ok(comment_id) => {
                handle.render_into(|| {
                    like_button(LikeButtonProps {
                        comment_id: Some(comment_id),
                        ..Default::default()
                    });
                });
            }
            Err(err) => {
                tracing::warn!(container = handle.name(), %err, "skipping container");
            }
        }
    }

    let handle = mount()?;
    run(&handle)?;
    handle.unmount();

    Ok(())
}
