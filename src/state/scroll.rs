//! Page Scroll - document offset as a reactive input source
//!
//! The page is one tall virtual document; the terminal shows `viewport`
//! rows of it starting at `offset`. Everything that depends on scrolling
//! (progress bar, viewport reveals, hit testing) reads these signals.
//!
//! Architecture:
//! - `offset` = user state (wheel, keys, nav anchors)
//! - `content_height` / `viewport_height` = computed by layout and resize
//! - writes are clamped to `0..=max_offset`

use spark_signals::{Signal, signal};

// =============================================================================
// SCROLL CONSTANTS
// =============================================================================

/// Default scroll amount for arrow keys (lines).
pub const LINE_SCROLL: i32 = 1;

/// Default scroll amount for mouse wheel.
pub const WHEEL_SCROLL: i32 = 3;

/// Default scroll amount for Page Up/Down (90% of viewport).
pub const PAGE_SCROLL_FACTOR: f32 = 0.9;

// =============================================================================
// PAGE SCROLL
// =============================================================================

/// Scroll state of the page. Clones share the same signals.
#[derive(Clone)]
pub struct PageScroll {
    offset: Signal<u16>,
    content_height: Signal<u16>,
    viewport_height: Signal<u16>,
}

impl PageScroll {
    pub fn new(content_height: u16, viewport_height: u16) -> Self {
        Self {
            offset: signal(0),
            content_height: signal(content_height),
            viewport_height: signal(viewport_height),
        }
    }

    pub fn offset(&self) -> u16 {
        self.offset.get()
    }

    pub fn content_height(&self) -> u16 {
        self.content_height.get()
    }

    pub fn viewport_height(&self) -> u16 {
        self.viewport_height.get()
    }

    /// Largest valid offset.
    pub fn max_offset(&self) -> u16 {
        self.content_height().saturating_sub(self.viewport_height())
    }

    /// Update the extents, re-clamping the offset.
    pub fn set_extent(&self, content_height: u16, viewport_height: u16) {
        if self.content_height.get() != content_height {
            self.content_height.set(content_height);
        }
        if self.viewport_height.get() != viewport_height {
            self.viewport_height.set(viewport_height);
        }
        let max = self.max_offset();
        if self.offset() > max {
            self.offset.set(max);
        }
    }

    /// Set the offset (clamped). Returns true if it changed.
    pub fn scroll_to(&self, offset: i32) -> bool {
        let clamped = offset.clamp(0, self.max_offset() as i32) as u16;
        if clamped == self.offset() {
            return false;
        }
        self.offset.set(clamped);
        true
    }

    /// Scroll by a delta. Returns false at the boundary.
    pub fn scroll_by(&self, delta: i32) -> bool {
        self.scroll_to(self.offset() as i32 + delta)
    }

    pub fn scroll_to_top(&self) -> bool {
        self.scroll_to(0)
    }

    pub fn scroll_to_bottom(&self) -> bool {
        self.scroll_to(self.max_offset() as i32)
    }

    /// Page Up/Down by 90% of the viewport (at least one line).
    pub fn page(&self, down: bool) -> bool {
        let amount = ((self.viewport_height() as f32 * PAGE_SCROLL_FACTOR) as i32).max(1);
        self.scroll_by(if down { amount } else { -amount })
    }

    /// Scroll so that document row `row` sits just below a fixed header of
    /// `header_rows`.
    pub fn scroll_to_anchor(&self, row: i32, header_rows: u16) -> bool {
        self.scroll_to(row - header_rows as i32)
    }

    /// Scroll progress in `[0, 1]`.
    ///
    /// A document that fits the viewport has nothing left to scroll and
    /// reports 1.
    pub fn progress(&self) -> f32 {
        let max = self.max_offset();
        if max == 0 {
            return 1.0;
        }
        (self.offset() as f32 / max as f32).clamp(0.0, 1.0)
    }

    /// Visible document rows as `[top, bottom)`.
    pub fn visible_rows(&self) -> (i32, i32) {
        let top = self.offset() as i32;
        (top, top + self.viewport_height() as i32)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_offset_over_max() {
        let scroll = PageScroll::new(124, 24);
        assert_eq!(scroll.max_offset(), 100);
        for s in [0u16, 1, 25, 50, 99, 100] {
            scroll.scroll_to(s as i32);
            assert_eq!(scroll.progress(), s as f32 / 100.0);
        }
    }

    #[test]
    fn test_scroll_clamped() {
        let scroll = PageScroll::new(50, 20);
        assert!(!scroll.scroll_by(-5));
        assert!(scroll.scroll_by(100));
        assert_eq!(scroll.offset(), 30);
        assert_eq!(scroll.progress(), 1.0);
        assert!(!scroll.scroll_to_bottom());
        assert!(scroll.scroll_to_top());
        assert_eq!(scroll.progress(), 0.0);
    }

    #[test]
    fn test_fits_viewport_reports_full() {
        let scroll = PageScroll::new(10, 24);
        assert_eq!(scroll.max_offset(), 0);
        assert_eq!(scroll.progress(), 1.0);
        assert!(!scroll.scroll_by(3));
    }

    #[test]
    fn test_resize_reclamps_offset() {
        let scroll = PageScroll::new(100, 20);
        scroll.scroll_to_bottom();
        assert_eq!(scroll.offset(), 80);
        scroll.set_extent(100, 40);
        assert_eq!(scroll.offset(), 60);
    }

    #[test]
    fn test_page_and_anchor() {
        let scroll = PageScroll::new(200, 20);
        scroll.page(true);
        assert_eq!(scroll.offset(), 18);
        scroll.page(false);
        assert_eq!(scroll.offset(), 0);

        scroll.scroll_to_anchor(57, 3);
        assert_eq!(scroll.offset(), 54);
        assert_eq!(scroll.visible_rows(), (54, 74));
    }

    #[test]
    fn test_clones_share_state() {
        let scroll = PageScroll::new(100, 10);
        let other = scroll.clone();
        other.scroll_by(7);
        assert_eq!(scroll.offset(), 7);
    }
}
