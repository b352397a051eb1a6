//! Layout Module
//!
//! Document layout using [Taffy](https://github.com/DioxusLabs/taffy) flexbox:
//!
//! 1. Sections describe themselves as a [`Node`] tree
//! 2. The tree is converted to Taffy styles, with a measure function for text
//! 3. Results come back as placed boxes and wrapped lines in document cells
//!
//! The document is laid out once per width. Scrolling and motion only move
//! already placed items.

pub mod document;
pub mod text;

pub use document::{
    Align, BoxStyle, DocumentLayout, Edges, ElementId, Justify, LinkId, Node, NodeKind,
    PlacedBox, PlacedText, TextAlign, TextStyle, Width, layout_document,
};
pub use text::{char_width, string_width, wrap_text};
