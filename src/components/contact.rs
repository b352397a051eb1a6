//! Contact section: a centered heading over a row of icon links.

use super::{NARROW, PageContext, container, heading};
use crate::content::{ContactLink, Section};
use crate::layout::{Align, Edges, ElementId, Justify, LinkId, Node, TextStyle};
use crate::theme::Theme;
use crate::types::BorderStyle;

pub fn contact(ctx: &PageContext<'_>) -> Node {
    let icons = ctx
        .profile
        .contact
        .iter()
        .enumerate()
        .map(|(i, link)| icon(i, link, ctx.theme));

    container(NARROW)
        .padding(Edges::xy(2, 4))
        .anchor(Section::Contact)
        .element(ElementId::Contact)
        .child(heading("Let’s Connect", 8, ctx.theme, true))
        .child(Node::spacer(2))
        .child(Node::row().justify(Justify::Center).gap(6, 0).children(icons))
}

fn icon(index: usize, link: &ContactLink, theme: &Theme) -> Node {
    Node::column()
        .align(Align::Center)
        .element(ElementId::ContactIcon(index))
        .link(LinkId::Contact(index))
        .child(
            Node::column()
                .border(BorderStyle::Rounded, theme.border_strong)
                .padding(Edges::xy(1, 0))
                .child(Node::text(link.kind.glyph(), TextStyle::new(theme.text_muted))),
        )
        .child(Node::text(&link.label, TextStyle::new(theme.text_dim)))
}
