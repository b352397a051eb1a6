//! Frame pipeline
//!
//! ```text
//! DocumentLayout + motion → frame (compose) → frame signal → render effect
//! ```
//!
//! - [`frame`] paints the laid-out document for one instant
//! - [`mount`] owns the terminal, the render effect and the event loop
//! - [`export`] writes the page once, at rest, for pipes and scrollback

pub mod export;
pub mod frame;
pub mod mount;

pub use export::export_to;
pub use frame::{DocumentFrame, draw_document};
pub use mount::{MountHandle, mount, render_effect, route_event, run};
