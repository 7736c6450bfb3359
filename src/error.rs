//! Crate error type.
//!
//! Container lookup and attribute parsing can fail before any widget exists,
//! and terminal I/O can fail at mount time. Everything else in the pipeline
//! is infallible by construction.

/// Result type for glint-tui operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the widget/mount API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No container matched the given selector.
    #[error("no container matches {selector:?}")]
    ContainerNotFound { selector: String },

    /// The container has no attribute with this name.
    #[error("container {container:?} has no attribute {name:?}")]
    MissingAttribute { container: String, name: String },

    /// The attribute exists but its value could not be parsed.
    #[error("invalid value {value:?} for attribute {name:?}")]
    InvalidAttribute { name: String, value: String },

    /// Terminal I/O failed.
    #[error("terminal I/O failed")]
    Io(#[from] std::io::Error),
}
