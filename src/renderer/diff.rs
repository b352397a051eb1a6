//! Differential renderer for fullscreen mode.
//!
//! The DiffRenderer compares the current frame to the previous frame and only
//! outputs cells that have changed.
//!
//! # Algorithm
//!
//! 1. Wrap output in synchronized block (beginSync/endSync)
//! 2. For each cell in the new frame:
//!    - If previous frame exists and cell is unchanged: skip
//!    - Otherwise: render cell with StatefulCellRenderer
//! 3. Flush output buffer (single write)
//! 4. Store current frame as previous for next comparison

use std::io::{self, Write};

use super::ansi;
use super::buffer::FrameBuffer;
use super::output::{OutputBuffer, StatefulCellRenderer};

/// Differential renderer for fullscreen mode.
pub struct DiffRenderer {
    output: OutputBuffer,
    cell_renderer: StatefulCellRenderer,
    previous: Option<FrameBuffer>,
}

impl DiffRenderer {
    pub fn new() -> Self {
        Self {
            output: OutputBuffer::new(),
            cell_renderer: StatefulCellRenderer::new(),
            previous: None,
        }
    }

    /// Render a frame to stdout, outputting only changed cells.
    ///
    /// Returns true if any cells were changed.
    pub fn render(&mut self, buffer: &FrameBuffer) -> io::Result<bool> {
        let mut stdout = io::stdout().lock();
        self.render_to(buffer, &mut stdout)
    }

    /// Render a frame to any writer.
    pub fn render_to<W: Write>(&mut self, buffer: &FrameBuffer, out: &mut W) -> io::Result<bool> {
        let mut has_changes = false;

        ansi::begin_sync(&mut self.output)?;
        self.cell_renderer.reset();

        let same_size = self
            .previous
            .as_ref()
            .is_some_and(|prev| prev.width() == buffer.width() && prev.height() == buffer.height());

        for y in 0..buffer.height() {
            for x in 0..buffer.width() {
                let Some(cell) = buffer.get(x, y) else {
                    continue;
                };

                let changed = match &self.previous {
                    Some(prev) if same_size => prev.get(x, y) != Some(cell),
                    _ => true,
                };

                if changed {
                    has_changes = true;
                    self.cell_renderer.render_cell(&mut self.output, x, y, cell);
                }
            }
        }

        ansi::end_sync(&mut self.output)?;
        self.output.flush_to(out)?;

        self.previous = Some(buffer.clone());
        Ok(has_changes)
    }

    /// Drop the previous frame; the next render is a full redraw.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Enter fullscreen mode (alternate screen buffer).
    pub fn enter_fullscreen(&mut self) -> io::Result<()> {
        ansi::enter_alt_screen(&mut self.output)?;
        ansi::cursor_hide(&mut self.output)?;
        ansi::clear_screen(&mut self.output)?;
        self.output.flush_to(&mut io::stdout().lock())?;
        self.invalidate();
        Ok(())
    }

    /// Exit fullscreen mode.
    pub fn exit_fullscreen(&mut self) -> io::Result<()> {
        ansi::reset(&mut self.output)?;
        ansi::cursor_show(&mut self.output)?;
        ansi::exit_alt_screen(&mut self.output)?;
        self.output.flush_to(&mut io::stdout().lock())
    }
}

impl Default for DiffRenderer {
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
    fn test_second_identical_frame_has_no_changes() {
        let mut renderer = DiffRenderer::new();
        let mut buffer = FrameBuffer::new(8, 2);
        buffer.draw_text(0, 0, "folio", Paint::fg(Rgba::WHITE), 1.0, None);

        let mut sink = Vec::new();
        assert!(renderer.render_to(&buffer, &mut sink).unwrap());
        assert!(renderer.has_previous());

        let mut sink = Vec::new();
        assert!(!renderer.render_to(&buffer, &mut sink).unwrap());
    }

    #[test]
    fn test_only_changed_cell_is_written() {
        let mut renderer = DiffRenderer::new();
        let mut buffer = FrameBuffer::new(8, 1);
        renderer.render_to(&buffer, &mut Vec::new()).unwrap();

        buffer.draw_text(3, 0, "Z", Paint::fg(Rgba::WHITE), 1.0, None);
        let mut sink = Vec::new();
        renderer.render_to(&buffer, &mut sink).unwrap();
        let text = String::from_utf8(sink).unwrap();
        assert!(text.contains("\x1b[1;4H"));
        assert_eq!(text.matches('Z').count(), 1);
    }

    #[test]
    fn test_invalidate_forces_full_redraw() {
        let mut renderer = DiffRenderer::new();
        let buffer = FrameBuffer::new(4, 1);
        renderer.render_to(&buffer, &mut Vec::new()).unwrap();
        renderer.invalidate();
        assert!(!renderer.has_previous());
        assert!(renderer.render_to(&buffer, &mut Vec::new()).unwrap());
    }
}
