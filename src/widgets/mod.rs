//! Widgets - small, self-contained components built on the primitives.
//!
//! - [`like_button`] - clickable affordance with a one-way liked flag
//! - [`title`] - bold underlined heading

mod like_button;
mod title;

pub use like_button::{like_button, LikeButtonProps, LIKED_TEXT, LIKE_LABEL};
pub use title::{title, TitleProps};
