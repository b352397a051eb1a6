//! Document tree and its Taffy layout.
//!
//! Sections are described as a tree of [`Node`]s (flex boxes and text
//! leaves), laid out once per terminal width. The result is a flat list of
//! placed boxes and text lines in document coordinates, each tagged with the
//! chain of animated elements that own it so the frame can apply their
//! transforms without laying out again.

use taffy::{
    AlignItems as TaffyAlignItems, AvailableSpace, Dimension as TaffyDimension,
    FlexDirection as TaffyFlexDirection, FlexWrap as TaffyFlexWrap,
    JustifyContent as TaffyJustifyContent, LengthPercentage, NodeId, Rect as TaffyRect, Size,
    Style, TaffyTree,
};

use super::text::{string_width, wrap_text};
use crate::content::Section;
use crate::error::Result;
use crate::types::{Attr, BorderStyle, Rect, Rgba};

// =============================================================================
// IDENTITIES
// =============================================================================

/// Elements with their own motion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementId {
    HeroText,
    HeroAvatar,
    About,
    SkillGrid,
    Skill(usize),
    Project(usize),
    Contact,
    ContactIcon(usize),
}

/// Activatable links, in no particular order (focus order is document order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkId {
    Resume,
    GitHub,
    ProjectCode(usize),
    Contact(usize),
}

// =============================================================================
// STYLE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Width {
    #[default]
    Auto,
    Cells(u16),
    /// Fraction of the parent, 0.0..=1.0
    Percent(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Stretch,
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Edges {
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn all(n: u16) -> Self {
        Self::new(n, n, n, n)
    }

    pub const fn xy(x: u16, y: u16) -> Self {
        Self::new(y, x, y, x)
    }
}

/// How a text leaf is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub fg: Rgba,
    pub attrs: Attr,
    pub align: TextAlign,
    /// Colored by the animated hero gradient instead of `fg`
    pub gradient: bool,
}

impl TextStyle {
    pub const fn new(fg: Rgba) -> Self {
        Self {
            fg,
            attrs: Attr::NONE,
            align: TextAlign::Left,
            gradient: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self {
            attrs: Attr::from_bits_retain(self.attrs.bits() | Attr::BOLD.bits()),
            ..self
        }
    }

    pub const fn centered(self) -> Self {
        Self {
            align: TextAlign::Center,
            ..self
        }
    }

    pub const fn gradient(self) -> Self {
        Self {
            gradient: true,
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxStyle {
    pub row: bool,
    pub wrap: bool,
    pub padding: Edges,
    pub column_gap: u16,
    pub row_gap: u16,
    pub width: Width,
    pub max_width: Option<u16>,
    pub height: Option<u16>,
    pub grow: f32,
    pub align: Align,
    pub justify: Justify,
    pub border: BorderStyle,
    pub border_color: Rgba,
    pub background: Option<Rgba>,
    pub element: Option<ElementId>,
    pub link: Option<LinkId>,
    pub anchor: Option<Section>,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            row: false,
            wrap: false,
            padding: Edges::default(),
            column_gap: 0,
            row_gap: 0,
            width: Width::Auto,
            max_width: None,
            height: None,
            grow: 0.0,
            align: Align::Stretch,
            justify: Justify::Start,
            border: BorderStyle::None,
            border_color: Rgba::TERMINAL_DEFAULT,
            background: None,
            element: None,
            link: None,
            anchor: None,
        }
    }
}

// =============================================================================
// NODE
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Box(Vec<Node>),
    Text(String, TextStyle),
}

/// One document node. Built with the chaining methods below.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub style: BoxStyle,
}

impl Node {
    pub fn column() -> Self {
        Self {
            kind: NodeKind::Box(Vec::new()),
            style: BoxStyle::default(),
        }
    }

    pub fn row() -> Self {
        let mut node = Self::column();
        node.style.row = true;
        node.style.align = Align::Start;
        node
    }

    pub fn text(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            kind: NodeKind::Text(text.into(), style),
            style: BoxStyle::default(),
        }
    }

    /// Fixed-height blank rows.
    pub fn spacer(rows: u16) -> Self {
        Self::column().height(rows)
    }

    pub fn child(mut self, child: Node) -> Self {
        if let NodeKind::Box(children) = &mut self.kind {
            children.push(child);
        }
        self
    }

    pub fn children(mut self, iter: impl IntoIterator<Item = Node>) -> Self {
        if let NodeKind::Box(children) = &mut self.kind {
            children.extend(iter);
        }
        self
    }

    pub fn wrap(mut self) -> Self {
        self.style.wrap = true;
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.style.padding = padding;
        self
    }

    pub fn gap(mut self, column_gap: u16, row_gap: u16) -> Self {
        self.style.column_gap = column_gap;
        self.style.row_gap = row_gap;
        self
    }

    pub fn width(mut self, width: Width) -> Self {
        self.style.width = width;
        self
    }

    pub fn max_width(mut self, cells: u16) -> Self {
        self.style.max_width = Some(cells);
        self
    }

    pub fn height(mut self, rows: u16) -> Self {
        self.style.height = Some(rows);
        self
    }

    pub fn grow(mut self, grow: f32) -> Self {
        self.style.grow = grow;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.style.align = align;
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.style.justify = justify;
        self
    }

    pub fn border(mut self, border: BorderStyle, color: Rgba) -> Self {
        self.style.border = border;
        self.style.border_color = color;
        self
    }

    pub fn background(mut self, color: Rgba) -> Self {
        self.style.background = Some(color);
        self
    }

    pub fn element(mut self, id: ElementId) -> Self {
        self.style.element = Some(id);
        self
    }

    pub fn link(mut self, id: LinkId) -> Self {
        self.style.link = Some(id);
        self
    }

    pub fn anchor(mut self, section: Section) -> Self {
        self.style.anchor = Some(section);
        self
    }
}

// =============================================================================
// LAYOUT OUTPUT
// =============================================================================

/// A box (border and/or background) in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBox {
    pub rect: Rect,
    pub border: BorderStyle,
    pub border_color: Rgba,
    pub background: Option<Rgba>,
    /// Animated elements containing this box, outermost first
    pub owners: Vec<ElementId>,
    pub link: Option<LinkId>,
}

/// One wrapped line of text in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub x: i32,
    pub y: i32,
    pub line: String,
    pub style: TextStyle,
    pub owners: Vec<ElementId>,
    pub link: Option<LinkId>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentLayout {
    pub width: u16,
    pub height: u16,
    pub boxes: Vec<PlacedBox>,
    pub texts: Vec<PlacedText>,
    /// Element rects in document order
    pub elements: Vec<(ElementId, Rect)>,
    /// Link rects in document order
    pub links: Vec<(LinkId, Rect)>,
    pub anchors: Vec<(Section, i32)>,
}

impl DocumentLayout {
    pub fn element_rect(&self, id: ElementId) -> Option<Rect> {
        self.elements.iter().find(|(e, _)| *e == id).map(|(_, r)| *r)
    }

    pub fn anchor_row(&self, section: Section) -> Option<i32> {
        self.anchors.iter().find(|(s, _)| *s == section).map(|(_, y)| *y)
    }

    /// Links in focus order.
    pub fn link_order(&self) -> Vec<LinkId> {
        self.links.iter().map(|(id, _)| *id).collect()
    }

    pub fn link_rect(&self, id: LinkId) -> Option<Rect> {
        self.links.iter().find(|(l, _)| *l == id).map(|(_, r)| *r)
    }

    /// Innermost element containing the document point, among `candidates`.
    pub fn element_at(&self, x: i32, y: i32, candidates: impl Fn(ElementId) -> bool) -> Option<ElementId> {
        self.elements
            .iter()
            .rev()
            .find(|(id, rect)| candidates(*id) && rect.contains(x, y))
            .map(|(id, _)| *id)
    }

    pub fn link_at(&self, x: i32, y: i32) -> Option<LinkId> {
        self.links
            .iter()
            .rev()
            .find(|(_, rect)| rect.contains(x, y))
            .map(|(id, _)| *id)
    }
}

// =============================================================================
// STYLE CONVERSION
// =============================================================================

fn to_taffy_width(width: Width) -> TaffyDimension {
    match width {
        Width::Auto => TaffyDimension::Auto,
        Width::Cells(n) => TaffyDimension::Length(n as f32),
        Width::Percent(p) => TaffyDimension::Percent(p),
    }
}

fn to_taffy_align(align: Align) -> Option<TaffyAlignItems> {
    Some(match align {
        Align::Stretch => TaffyAlignItems::Stretch,
        Align::Start => TaffyAlignItems::FlexStart,
        Align::Center => TaffyAlignItems::Center,
        Align::End => TaffyAlignItems::FlexEnd,
    })
}

fn to_taffy_justify(justify: Justify) -> Option<TaffyJustifyContent> {
    Some(match justify {
        Justify::Start => TaffyJustifyContent::FlexStart,
        Justify::Center => TaffyJustifyContent::Center,
        Justify::End => TaffyJustifyContent::FlexEnd,
        Justify::SpaceBetween => TaffyJustifyContent::SpaceBetween,
    })
}

fn length(n: u16) -> LengthPercentage {
    LengthPercentage::Length(n as f32)
}

fn build_style(style: &BoxStyle) -> Style {
    let border = if style.border == BorderStyle::None { 0 } else { 1 };
    Style {
        flex_direction: if style.row {
            TaffyFlexDirection::Row
        } else {
            TaffyFlexDirection::Column
        },
        flex_wrap: if style.wrap {
            TaffyFlexWrap::Wrap
        } else {
            TaffyFlexWrap::NoWrap
        },
        align_items: to_taffy_align(style.align),
        justify_content: to_taffy_justify(style.justify),
        flex_grow: style.grow,
        flex_shrink: 1.0,
        size: Size {
            width: to_taffy_width(style.width),
            height: style
                .height
                .map_or(TaffyDimension::Auto, |h| TaffyDimension::Length(h as f32)),
        },
        max_size: Size {
            width: style
                .max_width
                .map_or(TaffyDimension::Auto, |w| TaffyDimension::Length(w as f32)),
            height: TaffyDimension::Auto,
        },
        padding: TaffyRect {
            top: length(style.padding.top),
            right: length(style.padding.right),
            bottom: length(style.padding.bottom),
            left: length(style.padding.left),
        },
        border: TaffyRect {
            top: length(border),
            right: length(border),
            bottom: length(border),
            left: length(border),
        },
        gap: Size {
            width: length(style.column_gap),
            height: length(style.row_gap),
        },
        ..Default::default()
    }
}

// =============================================================================
// TEXT MEASUREMENT
// =============================================================================

fn longest_word(text: &str) -> usize {
    text.split_whitespace().map(string_width).max().unwrap_or(0)
}

fn measure_text(text: &str, known: Size<Option<f32>>, available: Size<AvailableSpace>) -> Size<f32> {
    if text.is_empty() {
        return Size::ZERO;
    }

    let natural = text.lines().map(string_width).max().unwrap_or(0);
    let wrap_at = match (known.width, available.width) {
        (Some(w), _) => w as usize,
        (None, AvailableSpace::Definite(w)) => (w as usize).min(natural),
        (None, AvailableSpace::MinContent) => longest_word(text),
        (None, AvailableSpace::MaxContent) => natural,
    }
    .max(1);

    let lines = wrap_text(text, wrap_at);
    let width = lines.iter().map(|l| string_width(l)).max().unwrap_or(0);

    Size {
        width: known.width.unwrap_or(width as f32),
        height: known.height.unwrap_or(lines.len() as f32),
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

fn add_node<'a>(tree: &mut TaffyTree<usize>, node: &'a Node, texts: &mut Vec<&'a str>) -> Result<NodeId> {
    let style = build_style(&node.style);
    match &node.kind {
        NodeKind::Text(text, _) => {
            texts.push(text);
            Ok(tree.new_leaf_with_context(style, texts.len() - 1)?)
        }
        NodeKind::Box(children) => {
            let id = tree.new_leaf(style)?;
            for child in children {
                let child_id = add_node(tree, child, texts)?;
                tree.add_child(id, child_id)?;
            }
            Ok(id)
        }
    }
}

struct Placer<'t> {
    tree: &'t TaffyTree<usize>,
    out: DocumentLayout,
    owners: Vec<ElementId>,
    link: Option<LinkId>,
}

impl Placer<'_> {
    fn place(&mut self, node: &Node, id: NodeId, parent_x: f32, parent_y: f32) -> Result<()> {
        let layout = self.tree.layout(id)?;
        let x = parent_x + layout.location.x;
        let y = parent_y + layout.location.y;
        let rect = Rect::new(
            x.round() as i32,
            y.round() as i32,
            layout.size.width.round() as i32,
            layout.size.height.round() as i32,
        );

        let pushed_owner = node.style.element.inspect(|&element| {
            self.owners.push(element);
            self.out.elements.push((element, rect));
        });
        let outer_link = self.link;
        if let Some(link) = node.style.link {
            self.link = Some(link);
            self.out.links.push((link, rect));
        }
        if let Some(section) = node.style.anchor {
            self.out.anchors.push((section, rect.y));
        }

        match &node.kind {
            NodeKind::Text(text, style) => {
                let wrap_at = (rect.width.max(1)) as usize;
                for (i, line) in wrap_text(text, wrap_at).into_iter().enumerate() {
                    let line_x = match style.align {
                        TextAlign::Left => rect.x,
                        TextAlign::Center => rect.x + (rect.width - string_width(&line) as i32).max(0) / 2,
                    };
                    self.out.texts.push(PlacedText {
                        x: line_x,
                        y: rect.y + i as i32,
                        line,
                        style: *style,
                        owners: self.owners.clone(),
                        link: self.link,
                    });
                }
            }
            NodeKind::Box(children) => {
                if node.style.border != BorderStyle::None || node.style.background.is_some() {
                    self.out.boxes.push(PlacedBox {
                        rect,
                        border: node.style.border,
                        border_color: node.style.border_color,
                        background: node.style.background,
                        owners: self.owners.clone(),
                        link: self.link,
                    });
                }
                let child_ids = self.tree.children(id)?;
                for (child, child_id) in children.iter().zip(child_ids) {
                    self.place(child, child_id, x, y)?;
                }
            }
        }

        self.link = outer_link;
        if pushed_owner.is_some() {
            self.owners.pop();
        }
        Ok(())
    }
}

/// Lay out `root` at `width` columns; height is unconstrained.
pub fn layout_document(root: &Node, width: u16) -> Result<DocumentLayout> {
    let mut tree: TaffyTree<usize> = TaffyTree::new();
    let mut texts: Vec<&str> = Vec::new();
    let root_id = add_node(&mut tree, root, &mut texts)?;

    let mut root_style = tree.style(root_id)?.clone();
    root_style.size.width = TaffyDimension::Length(width as f32);
    tree.set_style(root_id, root_style)?;

    let available = Size {
        width: AvailableSpace::Definite(width as f32),
        height: AvailableSpace::MaxContent,
    };

    tree.compute_layout_with_measure(
        root_id,
        available,
        |known_dimensions, available_space, _node_id, context: Option<&mut usize>, _style| match context {
            Some(&mut idx) => measure_text(texts[idx], known_dimensions, available_space),
            None => Size::ZERO,
        },
    )?;

    let mut placer = Placer {
        tree: &tree,
        out: DocumentLayout {
            width,
            ..Default::default()
        },
        owners: Vec::new(),
        link: None,
    };
    placer.place(root, root_id, 0.0, 0.0)?;

    let mut out = placer.out;
    out.height = tree.layout(root_id)?.size.height.round().max(0.0) as u16;
    Ok(out)
}

// =============================================================================
// TESTS
// =============================================================================
