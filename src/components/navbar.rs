//! Fixed navigation bar.
//!
//! Drawn over the document on every frame: a translucent strip with the
//! brand on the left and, at `md` and above, the section anchors on the
//! right. Anchor positions are recomputed from the width so clicks can be
//! hit-tested without a layout pass.

use super::{GUTTER, WIDE};
use crate::content::{Profile, Section, nav_items};
use crate::layout::string_width;
use crate::renderer::{FrameBuffer, Paint};
use crate::theme::Theme;
use crate::types::{Attr, Rect};

/// Rows covered by the header.
pub const HEADER_ROWS: u16 = 3;
const ITEM_GAP: i32 = 4;

/// One placed anchor label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSlot {
    pub section: Section,
    pub label: &'static str,
    pub rect: Rect,
}

#[derive(Debug, Clone)]
pub struct Navbar {
    first_name: String,
    last_name: String,
}

impl Navbar {
    pub fn new(profile: &Profile) -> Self {
        Self {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
        }
    }

    /// Left and right edges of the header content.
    fn content_span(width: u16) -> (i32, i32) {
        let inner = width.min(WIDE) as i32;
        let left = (width as i32 - inner) / 2 + GUTTER as i32;
        (left, left + inner - 2 * GUTTER as i32)
    }

    /// Anchor labels laid out right to left; empty below `md`.
    pub fn slots(width: u16, md: bool) -> Vec<NavSlot> {
        if !md {
            return Vec::new();
        }
        let (_, right) = Self::content_span(width);
        let mut x = right;
        let mut slots: Vec<NavSlot> = nav_items()
            .iter()
            .rev()
            .map(|item| {
                let w = string_width(item.label) as i32;
                x -= w;
                let slot = NavSlot {
                    section: item.section,
                    label: item.label,
                    rect: Rect::new(x, 1, w, 1),
                };
                x -= ITEM_GAP;
                slot
            })
            .collect();
        slots.reverse();
        slots
    }

    /// Section whose label is under the screen cell.
    pub fn hit_test(width: u16, md: bool, x: i32, y: i32) -> Option<Section> {
        Self::slots(width, md)
            .into_iter()
            .find(|slot| slot.rect.contains(x, y))
            .map(|slot| slot.section)
    }

    pub fn draw(&self, buffer: &mut FrameBuffer, theme: &Theme, md: bool, hovered: Option<Section>) {
        let width = buffer.width();
        let strip = Rect::new(0, 0, width as i32, HEADER_ROWS as i32 - 1);
        for row in strip.y..strip.bottom() {
            for col in strip.x..strip.right() {
                buffer.set_cell(col, row, ' ' as u32, Paint::fg(theme.text).with_bg(theme.header), 1.0, None);
            }
        }
        let rule = Paint::fg(Theme::over(theme.border, theme.background)).with_bg(theme.header);
        buffer.draw_hline(0, HEADER_ROWS as i32 - 1, width as i32, '─', rule, None);

        let (left, _) = Self::content_span(width);
        let brand = Paint::fg(theme.text).with_attrs(Attr::BOLD);
        let advanced = buffer.draw_text(left, 1, &self.first_name, brand, 1.0, None);
        if !self.last_name.is_empty() {
            let accent = Paint::fg(theme.primary).with_attrs(Attr::BOLD);
            buffer.draw_text(left + advanced + 1, 1, &self.last_name, accent, 1.0, None);
        }

        for slot in Self::slots(width, md) {
            let is_hovered = hovered == Some(slot.section);
            let paint = if is_hovered {
                Paint::fg(theme.text).with_attrs(Attr::UNDERLINE)
            } else {
                Paint::fg(theme.text_soft)
            };
            buffer.draw_text(slot.rect.x, slot.rect.y, slot.label, paint, 1.0, None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::builtin_profile;
    use crate::theme::MIDNIGHT;

    #[test]
    fn test_slots_right_aligned_in_order() {
        let slots = Navbar::slots(100, true);
        let sections: Vec<_> = slots.iter().map(|s| s.section).collect();
        assert_eq!(sections, Section::ALL.to_vec());
        assert_eq!(slots[3].rect.right(), 98);
        assert!(slots.windows(2).all(|w| w[0].rect.right() + ITEM_GAP == w[1].rect.x));
    }

    #[test]
    fn test_no_anchors_below_breakpoint() {
        assert!(Navbar::slots(60, false).is_empty());
        assert_eq!(Navbar::hit_test(60, false, 50, 1), None);
    }

    #[test]
    fn test_hit_test() {
        let slots = Navbar::slots(100, true);
        let skills = slots[1].rect;
        assert_eq!(Navbar::hit_test(100, true, skills.x, 1), Some(Section::Skills));
        assert_eq!(Navbar::hit_test(100, true, skills.x, 0), None);
    }

    #[test]
    fn test_draws_brand_and_rule() {
        let navbar = Navbar::new(&builtin_profile());
        let mut buffer = FrameBuffer::with_background(100, 5, MIDNIGHT.background);
        navbar.draw(&mut buffer, &MIDNIGHT, true, None);

        let brand_row = buffer.row_text(1);
        assert!(brand_row.trim_start().starts_with("Ritik Khare"));
        assert!(brand_row.contains("About    Skills    Projects    Contact"));
        assert_eq!(buffer.row_text(2), "─".repeat(100));
        assert_eq!(buffer.get(2 + 6, 1).unwrap().fg, MIDNIGHT.primary);
    }
}
