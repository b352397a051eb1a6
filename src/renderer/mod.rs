//! Terminal renderer.
//!
//! - [`buffer`] - FrameBuffer and drawing primitives
//! - [`output`] - batched output and stateful cell rendering
//! - [`diff`] - differential fullscreen renderer
//! - [`inline`] - one-shot renderer for the static export
//! - [`ansi`] - escape sequences

pub mod ansi;
pub mod buffer;
pub mod diff;
pub mod inline;
pub mod output;

pub use buffer::{FrameBuffer, Paint};
pub use diff::DiffRenderer;
pub use inline::InlineRenderer;
pub use output::{OutputBuffer, StatefulCellRenderer};
