//! Title demo.
//!
//! Mounts a heading into the container with id `create`, matching the
//! original page that rendered a title into `#create`. Press Ctrl+C to quit.
//!
//! Run with: cargo run --example title

use glint_tui::surface::{self, ContainerProps};
use glint_tui::widgets::{title, TitleProps};
use glint_tui::{box_primitive, mount, reset_registry, run, BoxProps, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    reset_registry();

    let _root = box_primitive(BoxProps {
        id: Some("root".to_string()),
        padding: Some(1u16.into()),
        children: Some(Box::new(|| {
            surface::container(ContainerProps {
                id: Some("create".to_string()),
                ..Default::default()
            });
        })),
        ..Default::default()
    });

    let handle = surface::query_id("create")?;
    handle.render_into(|| {
        title(TitleProps {
            text: "标题".into(),
            ..Default::default()
        });
    });

    let app = mount()?;
    run(&app)?;
    app.unmount();

    Ok(())
}
