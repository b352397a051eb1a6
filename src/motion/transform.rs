//! Visual transforms and their mapping onto the cell grid.
//!
//! Transforms are expressed in CSS pixels, the unit the motion values are
//! tuned in. A terminal row is taken as 20 px tall and a column as 10 px wide.

use crate::types::Rect;

pub const PX_PER_ROW: f32 = 20.0;
pub const PX_PER_COL: f32 = 10.0;

/// Translation, uniform scale and opacity of one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Vertical offset in px (positive is down).
    pub y: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        y: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Apply `child` inside `self` (offsets add, scale and opacity multiply).
    pub fn then(self, child: Self) -> Self {
        Self {
            y: self.y + child.y,
            scale: self.scale * child.scale,
            opacity: self.opacity * child.opacity,
        }
    }

    /// Whole-row vertical offset.
    pub fn row_offset(&self) -> i32 {
        (self.y / PX_PER_ROW).round() as i32
    }

    /// Place `rect` on the grid: translate, then grow or shrink around its center.
    pub fn apply(&self, rect: Rect) -> Rect {
        let grow_x = ((self.scale - 1.0) * rect.width as f32 / 2.0).round() as i32;
        let grow_y = ((self.scale - 1.0) * rect.height as f32 / 2.0).round() as i32;
        rect.offset(0, self.row_offset()).inflate(grow_x, grow_y)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
