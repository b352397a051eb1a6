//! Output buffering and stateful cell rendering.
//!
//! Every frame is accumulated into one byte buffer and written with a single
//! syscall. The cell renderer remembers the last cursor position, colors and
//! attributes so that only changes produce escape codes.

use crate::types::{Attr, Cell, Rgba};
use std::io::{self, Write};

use super::ansi;

// =============================================================================
// OutputBuffer
// =============================================================================

/// A buffer that accumulates output for batch writing.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(16384),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    #[inline]
    pub fn write_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.data.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
    }

    /// Write a unicode codepoint (invalid codepoints are skipped).
    #[inline]
    pub fn write_codepoint(&mut self, cp: u32) {
        if let Some(c) = char::from_u32(cp) {
            self.write_char(c);
        }
    }

    /// Write everything to `writer`, flush it, and empty the buffer.
    pub fn flush_to<W: Write>(&mut self, writer: &mut W) -> io::Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        writer.write_all(&self.data)?;
        writer.flush()?;
        self.data.clear();
        Ok(())
    }

    /// Get the accumulated data as a string (lossy).
    pub fn as_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }
}

impl Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// =============================================================================
// StatefulCellRenderer
// =============================================================================

/// Renders cells while tracking terminal state to minimize output.
#[derive(Debug)]
pub struct StatefulCellRenderer {
    last_x: i32,
    last_y: i32,
    last_fg: Option<Rgba>,
    last_bg: Option<Rgba>,
    last_attrs: Attr,
}

impl StatefulCellRenderer {
    pub fn new() -> Self {
        Self {
            last_x: -1,
            last_y: -1,
            last_fg: None,
            last_bg: None,
            last_attrs: Attr::NONE,
        }
    }

    /// Forget all tracked state. Call at the start of each frame.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Render a cell at an absolute position.
    pub fn render_cell(&mut self, output: &mut OutputBuffer, x: u16, y: u16, cell: &Cell) {
        // Continuation cells only advance the tracked position
        if cell.char == 0 {
            self.last_x = x as i32;
            self.last_y = y as i32;
            return;
        }

        if y as i32 != self.last_y || x as i32 != self.last_x + 1 {
            ansi::cursor_to(output, x, y).ok();
        }

        self.render_style(output, cell);
        output.write_codepoint(cell.char);

        self.last_x = x as i32;
        self.last_y = y as i32;
    }

    /// Render a cell sequentially (inline mode, no cursor positioning).
    pub fn render_cell_inline(&mut self, output: &mut OutputBuffer, cell: &Cell) {
        if cell.char == 0 {
            return;
        }
        self.render_style(output, cell);
        output.write_codepoint(cell.char);
    }

    fn render_style(&mut self, output: &mut OutputBuffer, cell: &Cell) {
        if cell.attrs != self.last_attrs {
            ansi::reset(output).ok();
            if !cell.attrs.is_empty() {
                ansi::attrs(output, cell.attrs).ok();
            }
            // Reset cleared the colors too
            self.last_fg = None;
            self.last_bg = None;
            self.last_attrs = cell.attrs;
        }

        if self.last_fg != Some(cell.fg) {
            ansi::fg(output, cell.fg).ok();
            self.last_fg = Some(cell.fg);
        }

        if self.last_bg != Some(cell.bg) {
            ansi::bg(output, cell.bg).ok();
            self.last_bg = Some(cell.bg);
        }
    }
}

impl Default for StatefulCellRenderer {
    fn default() -> Self {
        Self::new()
    }
}
