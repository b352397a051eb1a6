//! Input sources and interaction state.
//!
//! - [`animate`] - frame demand registry
//! - [`pointer`] - pointer event source
//! - [`scroll`] - page scroll offset
//! - [`viewport`] - enter/exit observer and reveal latch
//! - [`media`] - reduced motion and breakpoint
//! - [`input`] - crossterm conversion and key bindings
//! - [`focus`] - link focus ring

pub mod animate;
pub mod focus;
pub mod input;
pub mod media;
pub mod pointer;
pub mod scroll;
pub mod viewport;

pub use animate::{FrameLease, is_animating, subscribe_to_frames};
pub use focus::FocusRing;
pub use input::{Action, InputEvent};
pub use media::Media;
pub use pointer::{PointerAction, PointerEvent, ScrollDirection};
pub use scroll::PageScroll;
pub use viewport::{RevealLatch, ViewportChange, ViewportObserver};
