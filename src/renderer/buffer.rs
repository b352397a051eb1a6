//! FrameBuffer and drawing primitives.
//!
//! The FrameBuffer is a 2D grid of Cells that represents what should be displayed
//! on the terminal. All drawing operations work on this buffer.
//!
//! # Design Decisions
//!
//! - **Flat storage**: Uses `Vec<Cell>` with row-major indexing for cache efficiency.
//! - **Signed coordinates**: Drawing calls take `i32` positions because scrolled and
//!   transformed elements routinely start above or left of the screen. Anything
//!   outside the buffer (or the optional `ClipRect`) is dropped.
//! - **Alpha blending**: Transparent backgrounds blend with existing cells.
//! - **Opacity**: Faded text blends its foreground toward the background under it.
//! - **Wide characters**: Emoji and CJK characters use continuation markers.

use crate::layout::text::char_width;
use crate::types::{Attr, BorderStyle, Cell, ClipRect, Rect, Rgba};

/// Foreground/background/attribute triple used by the drawing calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    pub fg: Rgba,
    pub bg: Rgba,
    pub attrs: Attr,
}

impl Paint {
    /// Foreground only, background shows through.
    pub const fn fg(fg: Rgba) -> Self {
        Self {
            fg,
            bg: Rgba::TRANSPARENT,
            attrs: Attr::NONE,
        }
    }

    pub const fn with_attrs(self, attrs: Attr) -> Self {
        Self { attrs, ..self }
    }

    pub const fn with_bg(self, bg: Rgba) -> Self {
        Self { bg, ..self }
    }
}

// =============================================================================
// FrameBuffer
// =============================================================================

/// A 2D buffer of terminal cells.
///
/// Uses flat storage with row-major indexing: `index = y * width + x`
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a new buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    /// Create a new buffer with a specific background color.
    pub fn with_background(width: u16, height: u16, bg: Rgba) -> Self {
        let mut buffer = Self::new(width, height);
        buffer.clear_with_bg(bg);
        buffer
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get the full buffer bounds as a ClipRect.
    #[inline]
    pub fn bounds(&self) -> ClipRect {
        ClipRect::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Convert signed coordinates to buffer coordinates if visible.
    #[inline]
    fn visible(&self, x: i32, y: i32, clip: Option<&ClipRect>) -> Option<(u16, u16)> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        let (x, y) = (x as u16, y as u16);
        match clip {
            Some(clip) if !clip.contains(x, y) => None,
            _ => Some((x, y)),
        }
    }

    /// Get a cell reference (returns None if out of bounds).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Get a mutable cell reference (returns None if out of bounds).
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    /// Get raw cells slice.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Read one row back as plain text (continuation cells skipped).
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = self.index(0, y);
        self.cells[start..start + self.width as usize]
            .iter()
            .filter(|c| c.char != 0)
            .filter_map(|c| char::from_u32(c.char))
            .collect()
    }

    /// Clear with a specific background color.
    pub fn clear_with_bg(&mut self, bg: Rgba) {
        for cell in &mut self.cells {
            cell.char = b' ' as u32;
            cell.fg = Rgba::TERMINAL_DEFAULT;
            cell.bg = bg;
            cell.attrs = Attr::NONE;
        }
    }

    // =========================================================================
    // Drawing Primitives
    // =========================================================================

    /// Set a single cell with optional clipping.
    ///
    /// `opacity` fades the foreground toward the background the cell ends up
    /// with. Returns true if the cell was set.
    pub fn set_cell(
        &mut self,
        x: i32,
        y: i32,
        char: u32,
        paint: Paint,
        opacity: f32,
        clip: Option<&ClipRect>,
    ) -> bool {
        let Some((x, y)) = self.visible(x, y, clip) else {
            return false;
        };

        let idx = self.index(x, y);
        let cell = &mut self.cells[idx];

        let bg = if paint.bg.is_opaque() || paint.bg.is_terminal_default() {
            paint.bg
        } else {
            Rgba::blend(paint.bg, cell.bg)
        };

        let fg = if opacity >= 1.0 || paint.fg.is_terminal_default() || bg.is_terminal_default() {
            paint.fg
        } else {
            Rgba::lerp(bg, paint.fg, opacity)
        };

        cell.char = char;
        cell.fg = fg;
        cell.bg = bg;
        cell.attrs = paint.attrs;
        true
    }

    /// Blend a translucent color into the background of a cell, keeping its glyph.
    pub fn tint(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some((x, y)) = self.visible(x, y, None) {
            let idx = self.index(x, y);
            let cell = &mut self.cells[idx];
            cell.bg = Rgba::blend(color, cell.bg);
        }
    }

    /// Fill a rectangle with a background color (glyphs are cleared).
    pub fn fill_rect(&mut self, rect: Rect, bg: Rgba, clip: Option<&ClipRect>) {
        for row in rect.y..rect.bottom() {
            for col in rect.x..rect.right() {
                self.set_cell(col, row, b' ' as u32, Paint::fg(Rgba::TERMINAL_DEFAULT).with_bg(bg), 1.0, clip);
            }
        }
    }

    /// Draw text at a position.
    ///
    /// Returns the number of columns advanced (handles wide characters).
    pub fn draw_text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        paint: Paint,
        opacity: f32,
        clip: Option<&ClipRect>,
    ) -> i32 {
        let mut col = x;

        for ch in text.chars() {
            if col >= self.width as i32 {
                break;
            }

            let width = char_width(ch) as i32;
            if width == 0 {
                continue;
            }

            if self.set_cell(col, y, ch as u32, paint, opacity, clip) && width == 2 {
                // Mark next cell as continuation (char = 0)
                self.set_cell(col + 1, y, 0, paint, opacity, clip);
            }

            col += width;
        }

        col - x
    }

    /// Draw text with a per-column foreground.
    pub fn draw_text_with(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        paint: Paint,
        opacity: f32,
        clip: Option<&ClipRect>,
        mut fg_at: impl FnMut(usize) -> Rgba,
    ) -> i32 {
        let mut col = x;
        for (i, ch) in text.chars().enumerate() {
            let width = char_width(ch) as i32;
            if width == 0 {
                continue;
            }
            let paint = Paint { fg: fg_at(i), ..paint };
            if self.set_cell(col, y, ch as u32, paint, opacity, clip) && width == 2 {
                self.set_cell(col + 1, y, 0, paint, opacity, clip);
            }
            col += width;
        }
        col - x
    }

    /// Draw a border around a rectangle.
    pub fn draw_border(
        &mut self,
        rect: Rect,
        style: BorderStyle,
        color: Rgba,
        opacity: f32,
        clip: Option<&ClipRect>,
    ) {
        if rect.width < 2 || rect.height < 2 || style == BorderStyle::None {
            return;
        }

        let (horiz, vert, tl, tr, br, bl) = style.chars();
        let paint = Paint::fg(color);
        let x2 = rect.right() - 1;
        let y2 = rect.bottom() - 1;

        self.set_cell(rect.x, rect.y, tl as u32, paint, opacity, clip);
        self.set_cell(x2, rect.y, tr as u32, paint, opacity, clip);
        self.set_cell(x2, y2, br as u32, paint, opacity, clip);
        self.set_cell(rect.x, y2, bl as u32, paint, opacity, clip);

        for col in (rect.x + 1)..x2 {
            self.set_cell(col, rect.y, horiz as u32, paint, opacity, clip);
            self.set_cell(col, y2, horiz as u32, paint, opacity, clip);
        }

        for row in (rect.y + 1)..y2 {
            self.set_cell(rect.x, row, vert as u32, paint, opacity, clip);
            self.set_cell(x2, row, vert as u32, paint, opacity, clip);
        }
    }

    /// Draw a horizontal run of one character.
    pub fn draw_hline(&mut self, x: i32, y: i32, length: i32, char: char, paint: Paint, clip: Option<&ClipRect>) {
        for col in x..x + length {
            self.set_cell(col, y, char as u32, paint, 1.0, clip);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
