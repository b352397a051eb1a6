//! Project cards, each revealed on its own.

use super::{PageContext, WIDE, container, heading};
use crate::content::{Project, Section};
use crate::layout::{Edges, ElementId, LinkId, Node, TextStyle, Width};
use crate::theme::Theme;
use crate::types::BorderStyle;

const GAP_X: u16 = 4;
const GAP_Y: u16 = 2;

pub fn projects(ctx: &PageContext<'_>) -> Node {
    let cell = ctx.grid_cell(WIDE, GAP_X);
    let cards = ctx
        .profile
        .projects
        .iter()
        .enumerate()
        .map(|(i, project)| card(i, project, cell, ctx.theme));

    container(WIDE)
        .padding(Edges::xy(2, 5))
        .anchor(Section::Projects)
        .child(heading("Projects", 8, ctx.theme, false))
        .child(Node::spacer(2))
        .child(Node::row().wrap().gap(GAP_X, GAP_Y).children(cards))
}

fn card(index: usize, project: &Project, width: Width, theme: &Theme) -> Node {
    let view_code = Node::row().child(
        Node::column()
            .link(LinkId::ProjectCode(index))
            .child(Node::text("View Code ↗", TextStyle::new(theme.primary).bold())),
    );

    Node::column()
        .width(width)
        .border(BorderStyle::Rounded, theme.border)
        .background(theme.surface)
        .padding(Edges::xy(4, 1))
        .element(ElementId::Project(index))
        .child(Node::text(&project.title, TextStyle::new(theme.text).bold()))
        .child(Node::spacer(1))
        .child(Node::text(&project.description, TextStyle::new(theme.text_muted)))
        .child(Node::spacer(1))
        .child(Node::text(&project.tech, TextStyle::new(theme.primary)))
        .child(Node::spacer(1))
        .child(view_code)
}
