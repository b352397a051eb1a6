//! About section.

use super::{NARROW, PageContext, container, heading};
use crate::content::Section;
use crate::layout::{Edges, ElementId, Node, TextStyle};

pub fn about(ctx: &PageContext<'_>) -> Node {
    let theme = ctx.theme;
    let mut body = container(NARROW)
        .padding(Edges::xy(2, 3))
        .anchor(Section::About)
        .element(ElementId::About)
        .child(heading("About Me", 8, theme, false))
        .child(Node::spacer(1));

    for (i, paragraph) in ctx.profile.about.iter().enumerate() {
        if i > 0 {
            body = body.child(Node::spacer(1));
        }
        body = body.child(Node::text(paragraph, TextStyle::new(theme.text_muted)));
    }
    body
}
