//! Scroll progress bar pinned to the top row.

use spark_signals::{Derived, derived};

use crate::renderer::{FrameBuffer, Paint};
use crate::state::PageScroll;
use crate::types::Rgba;

/// Thin bar whose filled length tracks how far the page is scrolled.
pub struct ScrollProgress {
    progress: Derived<f32>,
    color: Rgba,
}

impl ScrollProgress {
    pub fn new(scroll: &PageScroll, color: Rgba) -> Self {
        let scroll = scroll.clone();
        Self {
            progress: derived(move || scroll.progress()),
            color,
        }
    }

    /// Current progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.progress.get()
    }

    /// Columns filled on a `width`-column screen.
    pub fn filled_columns(&self, width: u16) -> u16 {
        (self.progress() * width as f32).round() as u16
    }

    pub fn draw(&self, buffer: &mut FrameBuffer) {
        let filled = self.filled_columns(buffer.width());
        buffer.draw_hline(0, 0, filled as i32, '▀', Paint::fg(self.color), None);
    }
}
