//! # spark-folio
//!
//! An animated single-page portfolio rendered in the terminal.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! The page is one tall virtual document laid out with Taffy at the terminal
//! width; the terminal is a viewport onto it. Each frame the page advances
//! its motion to the current instant, paints the visible rows into a
//! [`FrameBuffer`], and publishes the buffer on a signal that the single
//! render effect diff-renders.
//!
//! ```text
//! input → Portfolio → frame signal → render effect → terminal
//! ```
//!
//! ## Modules
//!
//! - [`content`] - profile data, built-in content and TOML loading
//! - [`layout`] - document tree and flexbox layout
//! - [`motion`] - easing, timelines, springs and reveal/hover state
//! - [`state`] - reactive inputs (scroll, pointer, viewport, media, focus)
//! - [`components`] - the page sections and animated layers
//! - [`renderer`] - frame buffer and ANSI output
//! - [`pipeline`] - frame composition, terminal lifecycle, export

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod layout;
pub mod links;
pub mod logging;
pub mod motion;
pub mod pipeline;
pub mod renderer;
pub mod state;
pub mod theme;
pub mod types;

pub use app::Portfolio;
pub use cli::Cli;
pub use config::{Config, Settings};
pub use content::{Profile, Section, builtin_profile, load_profile};
pub use error::{FolioError, Result};
pub use links::{LinkOpener, RecordingOpener, SystemOpener};
pub use renderer::{DiffRenderer, FrameBuffer, InlineRenderer};
pub use types::*;
