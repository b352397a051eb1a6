//! Frame composition - paints the laid-out document into a FrameBuffer.
//!
//! The document is laid out once per width; every frame it is painted again
//! at the current scroll offset with each element's current transform.
//! Transforms compose down the owner chain, so a card inside a revealing
//! section moves with the section and then with its own hover spring.
//!
//! Paint order:
//! 1. Boxes and text not owned by the hovered element, in document order
//! 2. Everything owned by the hovered element, so a growing card sits on top

use crate::layout::{DocumentLayout, ElementId, LinkId, PlacedBox, PlacedText};
use crate::motion::Transform;
use crate::renderer::{FrameBuffer, Paint};
use crate::theme::Theme;
use crate::types::{Attr, Rgba};

/// Everything the document painter needs for one frame.
pub struct DocumentFrame<'a> {
    pub layout: &'a DocumentLayout,
    pub theme: &'a Theme,
    /// Document row shown on screen row 0
    pub scroll: i32,
    pub hovered: Option<ElementId>,
    pub hovered_link: Option<LinkId>,
    pub focused: Option<LinkId>,
    /// Current transform of one element
    pub transform: &'a dyn Fn(ElementId) -> Transform,
    /// Gradient title color for column `i` of a line `len` columns long
    pub gradient: &'a dyn Fn(usize, usize) -> Rgba,
}

impl DocumentFrame<'_> {
    fn chain(&self, owners: &[ElementId]) -> Transform {
        owners
            .iter()
            .fold(Transform::IDENTITY, |acc, id| acc.then((self.transform)(*id)))
    }

    fn is_lifted(&self, owners: &[ElementId]) -> bool {
        self.hovered.is_some_and(|hovered| owners.contains(&hovered))
    }

    /// True when the box is the outline of its innermost element.
    fn is_element_box(&self, placed: &PlacedBox) -> bool {
        placed
            .owners
            .last()
            .and_then(|id| self.layout.element_rect(*id))
            .is_some_and(|rect| rect == placed.rect)
    }
}

/// Paint the visible part of the document.
pub fn draw_document(buffer: &mut FrameBuffer, frame: &DocumentFrame<'_>) {
    for lifted in [false, true] {
        for placed in &frame.layout.boxes {
            if frame.is_lifted(&placed.owners) == lifted {
                draw_box(buffer, frame, placed);
            }
        }
        for placed in &frame.layout.texts {
            if frame.is_lifted(&placed.owners) == lifted {
                draw_line(buffer, frame, placed);
            }
        }
    }
}

fn draw_box(buffer: &mut FrameBuffer, frame: &DocumentFrame<'_>, placed: &PlacedBox) {
    let chain = frame.chain(&placed.owners);
    if chain.opacity <= 0.0 {
        return;
    }

    let own_box = frame.is_element_box(placed);
    let rect = if own_box {
        chain.apply(placed.rect)
    } else {
        placed.rect.offset(0, chain.row_offset())
    }
    .offset(0, -frame.scroll);

    if rect.bottom() <= 0 || rect.y >= buffer.height() as i32 {
        return;
    }

    if let Some(background) = placed.background {
        let alpha = background.a as f32 / 255.0 * chain.opacity;
        buffer.fill_rect(rect, background.with_alpha(alpha), None);
    }

    let hovered = own_box && placed.owners.last() == frame.hovered.as_ref();
    let focused = placed.link.is_some() && placed.link == frame.focused;
    let color = if focused {
        frame.theme.primary
    } else if hovered {
        frame.theme.border_hover
    } else {
        placed.border_color
    };
    // Translucent border colors are flattened over the surface they sit on.
    let color = if color.is_opaque() || color.is_terminal_default() {
        color
    } else {
        Theme::over(color, placed.background.unwrap_or(frame.theme.background))
    };
    buffer.draw_border(rect, placed.border, color, chain.opacity, None);
}

fn draw_line(buffer: &mut FrameBuffer, frame: &DocumentFrame<'_>, placed: &PlacedText) {
    let chain = frame.chain(&placed.owners);
    if chain.opacity <= 0.0 {
        return;
    }

    let y = placed.y + chain.row_offset() - frame.scroll;
    if y < 0 || y >= buffer.height() as i32 {
        return;
    }

    let mut paint = Paint::fg(placed.style.fg).with_attrs(placed.style.attrs);
    if let Some(link) = placed.link {
        if frame.focused == Some(link) {
            paint.attrs |= Attr::UNDERLINE;
        }
        if frame.hovered_link == Some(link) && !placed.style.fg.is_terminal_default() {
            paint.fg = Rgba::lerp(paint.fg, frame.theme.text, 0.5);
        }
    }

    if placed.style.gradient {
        let len = placed.line.chars().count();
        buffer.draw_text_with(placed.x, y, &placed.line, paint, chain.opacity, None, |i| {
            (frame.gradient)(i, len)
        });
    } else {
        buffer.draw_text(placed.x, y, &placed.line, paint, chain.opacity, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Edges, Node, TextStyle, layout_document};
    use crate::theme::MIDNIGHT;
    use crate::types::BorderStyle;

    fn card_layout() -> DocumentLayout {
        let root = Node::column()
            .child(Node::spacer(4))
            .child(
                Node::column()
                    .border(BorderStyle::Rounded, MIDNIGHT.border)
                    .background(MIDNIGHT.surface)
                    .padding(Edges::xy(1, 0))
                    .element(ElementId::Skill(0))
                    .child(Node::text("Java", TextStyle::new(MIDNIGHT.text))),
            );
        layout_document(&root, 20).unwrap()
    }

    fn paint(layout: &DocumentLayout, scroll: i32, t: Transform, hovered: Option<ElementId>) -> FrameBuffer {
        let mut buffer = FrameBuffer::with_background(20, 10, MIDNIGHT.background);
        let transform = move |_: ElementId| t;
        let gradient = |_: usize, _: usize| MIDNIGHT.primary;
        let frame = DocumentFrame {
            layout,
            theme: &MIDNIGHT,
            scroll,
            hovered,
            hovered_link: None,
            focused: None,
            transform: &transform,
            gradient: &gradient,
        };
        draw_document(&mut buffer, &frame);
        buffer
    }

    #[test]
    fn test_draws_at_scroll_offset() {
        let layout = card_layout();
        let buffer = paint(&layout, 0, Transform::IDENTITY, None);
        assert!(buffer.row_text(5).contains("Java"));

        let scrolled = paint(&layout, 2, Transform::IDENTITY, None);
        assert!(scrolled.row_text(3).contains("Java"));
        assert!(scrolled.row_text(2).starts_with('╭'));
    }

    #[test]
    fn test_hidden_element_not_drawn() {
        let layout = card_layout();
        let hidden = Transform {
            y: 40.0,
            scale: 1.0,
            opacity: 0.0,
        };
        let buffer = paint(&layout, 0, hidden, None);
        assert!(buffer.cells().iter().all(|c| c.char == ' ' as u32));
        assert!(buffer.cells().iter().all(|c| c.bg == MIDNIGHT.background));
    }

    #[test]
    fn test_lift_moves_card_up() {
        let layout = card_layout();
        let lifted = Transform {
            y: -20.0,
            scale: 1.0,
            opacity: 1.0,
        };
        let buffer = paint(&layout, 0, lifted, None);
        assert!(buffer.row_text(4).contains("Java"));
        assert!(buffer.row_text(3).starts_with('╭'));
    }

    #[test]
    fn test_hover_highlights_border() {
        let layout = card_layout();
        let plain = paint(&layout, 0, Transform::IDENTITY, None);
        let hovered = paint(&layout, 0, Transform::IDENTITY, Some(ElementId::Skill(0)));
        assert_ne!(plain.get(0, 4).unwrap().fg, hovered.get(0, 4).unwrap().fg);
    }
}
