//! Page sections and overlay layers.
//!
//! Sections ([`hero`], [`about`], [`skills`], [`projects`], [`contact`],
//! [`footer`]) are plain functions from content to a document [`Node`]; the
//! document is laid out once per width. Layers ([`background`],
//! [`cursor_glow`], [`progress`], [`navbar`]) are drawn straight into the
//! frame buffer on every frame and own whatever input subscriptions they need.

pub mod about;
pub mod background;
pub mod contact;
pub mod cursor_glow;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod progress;
pub mod projects;
pub mod skills;

use crate::content::Profile;
use crate::layout::{Align, Edges, Node, TextStyle, Width};
use crate::theme::Theme;

pub use background::AnimatedBackground;
pub use cursor_glow::CursorGlow;
pub use hero::GradientTitle;
pub use navbar::{HEADER_ROWS, Navbar};
pub use progress::ScrollProgress;

/// `max-w-7xl`
pub const WIDE: u16 = 128;
/// `max-w-5xl`
pub const NARROW: u16 = 102;
/// Horizontal padding inside a container.
pub const GUTTER: u16 = 2;

/// Everything a section needs to build its nodes.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub profile: &'a Profile,
    pub theme: &'a Theme,
    /// Terminal width in columns
    pub width: u16,
    /// At or above the `md` breakpoint
    pub md: bool,
    /// Shown in the footer
    pub year: i32,
}

impl PageContext<'_> {
    /// Inner width of a container capped at `max`.
    pub fn inner_width(&self, max: u16) -> u16 {
        self.width.min(max).saturating_sub(GUTTER * 2)
    }

    /// Width of one card in a two-column grid (full width below `md`).
    pub fn grid_cell(&self, max: u16, gap: u16) -> Width {
        if self.md {
            Width::Cells(self.inner_width(max).saturating_sub(gap) / 2)
        } else {
            Width::Percent(1.0)
        }
    }
}

/// The whole document, sections in page order.
pub fn page(ctx: &PageContext<'_>) -> Node {
    Node::column()
        .align(Align::Center)
        .child(hero::hero(ctx))
        .child(about::about(ctx))
        .child(skills::skills(ctx))
        .child(projects::projects(ctx))
        .child(contact::contact(ctx))
        .child(footer::footer(ctx))
}

/// Centered column capped at `max` cells.
pub(crate) fn container(max: u16) -> Node {
    Node::column()
        .width(Width::Percent(1.0))
        .max_width(max)
        .padding(Edges::xy(GUTTER, 0))
}

/// Section title with the short accent bar under it.
pub(crate) fn heading(title: &str, bar: u16, theme: &Theme, centered: bool) -> Node {
    let mut title_style = TextStyle::new(theme.text).bold();
    let mut bar_style = TextStyle::new(theme.primary);
    if centered {
        title_style = title_style.centered();
        bar_style = bar_style.centered();
    }
    Node::column()
        .child(Node::text(title, title_style))
        .child(Node::text("▀".repeat(bar as usize), bar_style))
}
