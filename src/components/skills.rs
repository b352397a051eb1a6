//! Skills grid.
//!
//! The grid itself is the viewport-gated element; its cards reveal one after
//! another once it is first seen.

use super::{PageContext, WIDE, container, heading};
use crate::content::{Section, Skill};
use crate::layout::{Edges, ElementId, Node, TextStyle, Width};
use crate::theme::Theme;
use crate::types::BorderStyle;

const GAP_X: u16 = 4;
const GAP_Y: u16 = 2;

pub fn skills(ctx: &PageContext<'_>) -> Node {
    let cell = ctx.grid_cell(WIDE, GAP_X);
    let cards = ctx
        .profile
        .skills
        .iter()
        .enumerate()
        .map(|(i, skill)| card(i, skill, cell, ctx.theme));

    container(WIDE)
        .padding(Edges::xy(2, 4))
        .anchor(Section::Skills)
        .child(heading("Technical Expertise", 10, ctx.theme, false))
        .child(Node::spacer(2))
        .child(
            Node::row()
                .wrap()
                .gap(GAP_X, GAP_Y)
                .element(ElementId::SkillGrid)
                .children(cards),
        )
}

fn card(index: usize, skill: &Skill, width: Width, theme: &Theme) -> Node {
    Node::column()
        .width(width)
        .border(BorderStyle::Rounded, theme.border)
        .background(theme.surface)
        .padding(Edges::xy(3, 1))
        .element(ElementId::Skill(index))
        .child(Node::text(&skill.title, TextStyle::new(theme.text).bold()))
        .child(Node::text(&skill.value, TextStyle::new(theme.primary)))
        .child(Node::spacer(1))
        .child(Node::text(&skill.description, TextStyle::new(theme.text_muted)))
}
