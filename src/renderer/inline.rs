//! Inline renderer for the static export.
//!
//! Writes a whole frame to the normal terminal buffer, row by row, so the
//! result lands in scrollback (or a pipe) like any other command output.

use std::io::{self, Write};

use super::ansi;
use super::buffer::FrameBuffer;
use super::output::{OutputBuffer, StatefulCellRenderer};

/// Inline renderer for normal terminal mode.
pub struct InlineRenderer {
    output: OutputBuffer,
    cell_renderer: StatefulCellRenderer,
}

impl InlineRenderer {
    pub fn new() -> Self {
        Self {
            output: OutputBuffer::new(),
            cell_renderer: StatefulCellRenderer::new(),
        }
    }

    /// Write every row of `buffer` followed by a newline.
    pub fn render_to<W: Write>(&mut self, buffer: &FrameBuffer, out: &mut W) -> io::Result<()> {
        self.cell_renderer.reset();

        for y in 0..buffer.height() {
            for x in 0..buffer.width() {
                if let Some(cell) = buffer.get(x, y) {
                    self.cell_renderer.render_cell_inline(&mut self.output, cell);
                }
            }
            // Reset before the newline so the background does not bleed
            ansi::reset(&mut self.output)?;
            self.cell_renderer.reset();
            self.output.write_char('\n');
        }

        self.output.flush_to(out)
    }
}

impl Default for InlineRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::buffer::Paint;
    use crate::types::Rgba;

    #[test]
    fn test_one_line_per_row() {
        let mut buffer = FrameBuffer::new(3, 2);
        buffer.draw_text(0, 1, "ok", Paint::fg(Rgba::WHITE), 1.0, None);

        let mut sink = Vec::new();
        InlineRenderer::new().render_to(&buffer, &mut sink).unwrap();
        let text = String::from_utf8(sink).unwrap();

        assert_eq!(text.matches('\n').count(), 2);
        assert!(text.contains("ok"));
    }
}
