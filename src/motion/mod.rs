//! Motion primitives evaluated per frame.
//!
//! - [`easing`] - cubic-bezier timing curves
//! - [`timeline`] - duration/repeat/easing timelines and keyframes
//! - [`spring`] - damped springs for hover
//! - [`tween`] - retargetable tweens
//! - [`transform`] - pixel transforms mapped onto cells
//! - [`reveal`] - per-element reveal and hover state

pub mod easing;
pub mod reveal;
pub mod spring;
pub mod timeline;
pub mod transform;
pub mod tween;

pub use easing::Easing;
pub use reveal::{
    CONTACT_HOVER, ElementMotion, FADE_UP, HoverSpec, INSTANT, POP_IN, PROJECT_HOVER, Phase,
    RevealVariant, SKILL_HOVER, Stagger,
};
pub use spring::{Spring, SpringConfig};
pub use timeline::{Keyframes, Repeat, Timeline};
pub use transform::{PX_PER_COL, PX_PER_ROW, Transform};
pub use tween::Tween2;
