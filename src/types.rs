//! Core types for spark-folio.
//!
//! These types define the foundation that everything builds on.
//! They flow from the document layout through the compositor and define
//! what the renderer understands.

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Using integers for exact comparison - no floating point epsilon needed.
/// Alpha 255 = fully opaque, 0 = fully transparent.
/// Special value: r=-1 means "terminal default" (let terminal pick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Terminal default color (let terminal decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
        a: -1,
    };

    /// Transparent color.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Same color with a different alpha, given as a fraction (0.0 - 1.0).
    pub fn with_alpha(self, alpha: f32) -> Self {
        if self.is_terminal_default() {
            return self;
        }
        Self {
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as i16,
            ..self
        }
    }

    /// Check if this is the terminal default color.
    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }

    /// Check if color is fully opaque.
    #[inline]
    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Check if color is fully transparent.
    #[inline]
    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Alpha blend src over dst (Porter-Duff "over" operation).
    ///
    /// Terminal default as dst is treated as opaque black.
    #[inline]
    pub fn blend(src: Self, dst: Self) -> Self {
        if src.is_opaque() || src.is_terminal_default() {
            return src;
        }
        if src.is_transparent() {
            return dst;
        }

        let (dr, dg, db, da) = if dst.is_terminal_default() {
            (0i16, 0i16, 0i16, 255i16)
        } else {
            (dst.r, dst.g, dst.b, dst.a)
        };

        let sa = src.a as i32;
        let inv_sa = 255 - sa;

        // out_a = src_a + dst_a * (1 - src_a)
        let out_a = sa + (da as i32 * inv_sa) / 255;

        if out_a == 0 {
            return Self::TRANSPARENT;
        }

        // out_rgb = (src_rgb * src_a + dst_rgb * dst_a * (1 - src_a)) / out_a
        let out_r = ((src.r as i32 * sa) + (dr as i32 * da as i32 * inv_sa / 255)) / out_a;
        let out_g = ((src.g as i32 * sa) + (dg as i32 * da as i32 * inv_sa / 255)) / out_a;
        let out_b = ((src.b as i32 * sa) + (db as i32 * da as i32 * inv_sa / 255)) / out_a;

        Self {
            r: out_r.clamp(0, 255) as i16,
            g: out_g.clamp(0, 255) as i16,
            b: out_b.clamp(0, 255) as i16,
            a: out_a.clamp(0, 255) as i16,
        }
    }

    /// Linear interpolation between two colors.
    #[inline]
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;

        Self {
            r: ((a.r as f32 * inv_t) + (b.r as f32 * t)).round() as i16,
            g: ((a.g as f32 * inv_t) + (b.g as f32 * t)).round() as i16,
            b: ((a.b as f32 * inv_t) + (b.b as f32 * t)).round() as i16,
            a: ((a.a as f32 * inv_t) + (b.a as f32 * t)).round() as i16,
        }
    }
}

// =============================================================================
// Cell Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield for efficient storage and comparison.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const INVERSE = 1 << 5;
    }
}

// =============================================================================
// Cell - The atomic unit of terminal rendering
// =============================================================================

/// A single terminal cell.
///
/// This is what the renderer deals with. Nothing more complex.
/// The compositor computes these, the renderer outputs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Unicode codepoint (32 for space, 0 for a wide-char continuation).
    pub char: u32,
    /// Foreground color.
    pub fg: Rgba,
    /// Background color.
    pub bg: Rgba,
    /// Attribute flags (bold, italic, etc.).
    pub attrs: Attr,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: b' ' as u32,
            fg: Rgba::TERMINAL_DEFAULT,
            bg: Rgba::TERMINAL_DEFAULT,
            attrs: Attr::NONE,
        }
    }
}

// =============================================================================
// ClipRect - Screen-space clipping
// =============================================================================

/// A clipping rectangle in screen cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClipRect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Check if a point is inside this rect.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

// =============================================================================
// Rect - Document-space rectangle
// =============================================================================

/// A rectangle in document cells.
///
/// Signed so that transforms and scroll offsets can push it off screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check whether the row span `[top, bottom)` overlaps this rect.
    #[inline]
    pub fn intersects_rows(&self, top: i32, bottom: i32) -> bool {
        self.height > 0 && self.y < bottom && self.bottom() > top
    }

    /// Move by a delta.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Grow on every side (negative values shrink).
    pub const fn inflate(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x - dx,
            y: self.y - dy,
            width: self.width + dx * 2,
            height: self.height + dy * 2,
        }
    }
}

// =============================================================================
// Border Styles
// =============================================================================

/// Border style for boxed elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum BorderStyle {
    #[default]
    None = 0,
    /// ─ │ ┌ ┐ └ ┘
    Single = 1,
    /// ─ │ ╭ ╮ ╰ ╯
    Rounded = 3,
    /// ━ ┃ ┏ ┓ ┗ ┛
    Bold = 4,
}

impl BorderStyle {
    /// Get the border characters for this style.
    ///
    /// Returns: (horizontal, vertical, top_left, top_right, bottom_right, bottom_left)
    pub const fn chars(&self) -> (char, char, char, char, char, char) {
        match self {
            Self::None => (' ', ' ', ' ', ' ', ' ', ' '),
            Self::Single => ('─', '│', '┌', '┐', '┘', '└'),
            Self::Rounded => ('─', '│', '╭', '╮', '╯', '╰'),
            Self::Bold => ('━', '┃', '┏', '┓', '┛', '┗'),
        }
    }
}
