//! Mount surface - containers that widgets render into.
//!
//! A container is a box component registered with classes and string data
//! attributes. Widgets are mounted into containers found by class or id,
//! mirroring how a page script selects mount points and reads their
//! attributes:
//!
//! ```ignore
//! use glint_tui::surface;
//!
//! let _c = surface::container(surface::ContainerProps {
//!     classes: vec!["like_button_container".into()],
//!     attrs: vec![("commentid".into(), "1".into())],
//!     ..Default::default()
//! });
//!
//! for handle in surface::query_class("like_button_container") {
//!     let comment_id = handle.attr_int("commentid")?;
//!     handle.render_into(|| {
//!         // components created here become children of the container
//!     });
//! }
//! ```

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

use crate::engine::{allocate_index, on_destroy, pop_parent_context, push_parent_context};
use crate::error::{Error, Result};
use crate::primitives::{box_primitive, BoxProps, Cleanup, PropValue};
use crate::types::{BorderStyle, Dimension, Rgba};

// =============================================================================
// Container Registry
// =============================================================================

struct ContainerInfo {
    name: String,
    classes: Vec<String>,
    attrs: HashMap<String, String>,
}

thread_local! {
    /// Registered containers, keyed by component index. BTreeMap keeps
    /// query results in allocation order.
    static CONTAINERS: RefCell<BTreeMap<usize, ContainerInfo>> = RefCell::new(BTreeMap::new());

    /// Counter for generated container names.
    static NAME_COUNTER: RefCell<usize> = const { RefCell::new(0) };
}

// =============================================================================
// Container Props
// =============================================================================

/// Properties for a container.
///
/// `id`, `classes` and `attrs` form the query surface; the rest are layout
/// passthroughs to the underlying box.
#[derive(Default)]
pub struct ContainerProps {
    /// Queryable id (also the component id).
    pub id: Option<String>,

    /// Classes for `query_class`.
    pub classes: Vec<String>,

    /// String data attributes.
    pub attrs: Vec<(String, String)>,

    /// Flex direction: 0=column (default), 1=row.
    pub flex_direction: Option<PropValue<u8>>,

    /// Width.
    pub width: Option<PropValue<Dimension>>,

    /// Height.
    pub height: Option<PropValue<Dimension>>,

    /// Padding (all sides).
    pub padding: Option<PropValue<u16>>,

    /// Gap between children.
    pub gap: Option<PropValue<u16>>,

    /// Border style.
    pub border: Option<PropValue<BorderStyle>>,

    /// Background color.
    pub bg: Option<PropValue<Rgba>>,
}

// =============================================================================
// Container Handle
// =============================================================================

/// Handle to a registered container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerHandle {
    index: usize,
    name: String,
}

impl ContainerHandle {
    /// The component index backing this container.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The container's name (its id, or a generated one).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get a raw data attribute.
    pub fn attr(&self, name: &str) -> Option<String> {
        CONTAINERS.with(|containers| {
            containers
                .borrow()
                .get(&self.index)
                .and_then(|info| info.attrs.get(name).cloned())
        })
    }

    /// Get a data attribute parsed as a base-10 integer.
    ///
    /// Returns `MissingAttribute` when absent and `InvalidAttribute` when
    /// present but unparsable.
    pub fn attr_int(&self, name: &str) -> Result<i64> {
        let value = self.attr(name).ok_or_else(|| Error::MissingAttribute {
            container: self.name.clone(),
            name: name.to_string(),
        })?;

        value
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::InvalidAttribute {
                name: name.to_string(),
                value,
            })
    }

    /// Run `f` with this container as the parent context, so components
    /// created inside become its children.
    pub fn render_into<F: FnOnce()>(&self, f: F) {
        push_parent_context(self.index);
        f();
        pop_parent_context();
    }
}

// =============================================================================
// Container Creation
// =============================================================================

/// Create and register a container.
///
/// Returns a cleanup function; releasing the container also removes it
/// from the query surface.
pub fn container(props: ContainerProps) -> Cleanup {
    let name = match props.id {
        Some(ref id) => id.clone(),
        None => NAME_COUNTER.with(|counter| {
            let mut counter = counter.borrow_mut();
            let name = format!("container{}", *counter);
            *counter += 1;
            name
        }),
    };

    // allocate_index is idempotent per id, so the box below gets this index
    let index = allocate_index(Some(&name));

    let cleanup = box_primitive(BoxProps {
        id: Some(name.clone()),
        flex_direction: props.flex_direction,
        width: props.width,
        height: props.height,
        padding: props.padding,
        gap: props.gap,
        border: props.border,
        bg: props.bg,
        ..Default::default()
    });

    tracing::debug!(container = %name, index, "container registered");

    CONTAINERS.with(|containers| {
        containers.borrow_mut().insert(
            index,
            ContainerInfo {
                name,
                classes: props.classes,
                attrs: props.attrs.into_iter().collect(),
            },
        );
    });

    // Unregister when the component is released, whichever path releases it
    on_destroy(index, move || {
        CONTAINERS.with(|containers| {
            containers.borrow_mut().remove(&index);
        });
    });

    cleanup
}

// =============================================================================
// Queries
// =============================================================================

/// Find all containers carrying a class, in registration order.
pub fn query_class(class: &str) -> Vec<ContainerHandle> {
    CONTAINERS.with(|containers| {
        containers
            .borrow()
            .iter()
            .filter(|(_, info)| info.classes.iter().any(|c| c == class))
            .map(|(&index, info)| ContainerHandle {
                index,
                name: info.name.clone(),
            })
            .collect()
    })
}

/// Find the container with the given id.
pub fn query_id(id: &str) -> Result<ContainerHandle> {
    CONTAINERS
        .with(|containers| {
            containers
                .borrow()
                .iter()
                .find(|(_, info)| info.name == id)
                .map(|(&index, info)| ContainerHandle {
                    index,
                    name: info.name.clone(),
                })
        })
        .ok_or_else(|| Error::ContainerNotFound {
            selector: format!("#{id}"),
        })
}

// =============================================================================
// Reset (for testing)
// =============================================================================

/// Reset the container registry (for testing).
pub fn reset_surface() {
    CONTAINERS.with(|containers| containers.borrow_mut().clear());
    NAME_COUNTER.with(|counter| *counter.borrow_mut() = 0);
}

// =============================================================================
// Tests
// =============================================================================
