//! Theme colors.

pub mod palette;

pub use palette::{MIDNIGHT, Theme};
