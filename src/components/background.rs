//! Animated background: two soft color blobs drifting across the document.
//!
//! Blob A hangs off the top-left corner of the document, blob B off the
//! bottom-right. Both loop forever and only ever tint the background.

use std::time::{Duration, Instant};

use crate::motion::{Easing, Keyframes, PX_PER_COL, PX_PER_ROW, Repeat, Timeline};
use crate::renderer::FrameBuffer;
use crate::state::animate::FrameLease;
use crate::types::{Rect, Rgba};

/// 600 px square.
pub const BLOB_COLS: i32 = 60;
pub const BLOB_ROWS: i32 = 30;
/// -200 px from the anchoring corner.
const OVERHANG_COLS: i32 = 20;
const OVERHANG_ROWS: i32 = 10;

/// Which corner of the document a blob hangs off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    BottomRight,
}

/// One drifting blob.
#[derive(Debug, Clone)]
pub struct Blob {
    pub corner: Corner,
    pub color: Rgba,
    x: Keyframes,
    y: Keyframes,
}

impl Blob {
    pub fn new(corner: Corner, color: Rgba, dx: [f32; 3], dy: [f32; 3], period: Duration) -> Self {
        let timeline = Timeline::new(period, Repeat::Loop, Easing::EaseInOut);
        Self {
            corner,
            color,
            x: Keyframes::new(dx, timeline),
            y: Keyframes::new(dy, timeline),
        }
    }

    /// Drift offset in pixels.
    pub fn offset_px(&self, elapsed: Duration) -> (f32, f32) {
        (self.x.value_at(elapsed), self.y.value_at(elapsed))
    }

    /// Rect in document cells for a `doc_width` x `doc_height` document.
    pub fn rect(&self, elapsed: Duration, doc_width: u16, doc_height: u16) -> Rect {
        let (dx, dy) = self.offset_px(elapsed);
        let (x, y) = match self.corner {
            Corner::TopLeft => (-OVERHANG_COLS, -OVERHANG_ROWS),
            Corner::BottomRight => (
                doc_width as i32 + OVERHANG_COLS - BLOB_COLS,
                doc_height as i32 + OVERHANG_ROWS - BLOB_ROWS,
            ),
        };
        Rect::new(
            x + (dx / PX_PER_COL).round() as i32,
            y + (dy / PX_PER_ROW).round() as i32,
            BLOB_COLS,
            BLOB_ROWS,
        )
    }
}

/// Tint a rect with a radial falloff, strongest at its center.
///
/// `dy` shifts document rows to screen rows.
pub fn radial_tint(buffer: &mut FrameBuffer, rect: Rect, dy: i32, color: Rgba) {
    if rect.width <= 0 || rect.height <= 0 {
        return;
    }
    let top = (rect.y - dy).max(0);
    let bottom = (rect.bottom() - dy).min(buffer.height() as i32);
    let left = rect.x.max(0);
    let right = rect.right().min(buffer.width() as i32);

    let cx = rect.x as f32 + rect.width as f32 / 2.0;
    let cy = rect.y as f32 + rect.height as f32 / 2.0;
    let rx = rect.width as f32 / 2.0;
    let ry = rect.height as f32 / 2.0;
    let base = color.a as f32 / 255.0;

    for screen_y in top..bottom {
        let doc_y = screen_y + dy;
        for x in left..right {
            let nx = (x as f32 + 0.5 - cx) / rx;
            let ny = (doc_y as f32 + 0.5 - cy) / ry;
            let falloff = 1.0 - (nx * nx + ny * ny).sqrt();
            if falloff > 0.0 {
                buffer.tint(x, screen_y, color.with_alpha(base * falloff * falloff));
            }
        }
    }
}

/// The two looping blobs.
#[derive(Debug)]
pub struct AnimatedBackground {
    blobs: [Blob; 2],
    started: Instant,
    reduced_motion: bool,
    lease: FrameLease,
}

impl AnimatedBackground {
    pub fn new(cyan: Rgba, blue: Rgba, now: Instant) -> Self {
        Self {
            blobs: [
                Blob::new(
                    Corner::TopLeft,
                    cyan.with_alpha(0.2),
                    [0.0, 200.0, 0.0],
                    [0.0, 150.0, 0.0],
                    Duration::from_secs(20),
                ),
                Blob::new(
                    Corner::BottomRight,
                    blue.with_alpha(0.2),
                    [0.0, -200.0, 0.0],
                    [0.0, -150.0, 0.0],
                    Duration::from_secs(22),
                ),
            ],
            started: now,
            reduced_motion: false,
            lease: FrameLease::new(),
        }
    }

    /// Start looping; under reduced motion the blobs rest at their origin.
    pub fn mount(&mut self, reduced_motion: bool) {
        self.reduced_motion = reduced_motion;
        self.lease.hold(!reduced_motion);
    }

    pub fn unmount(&mut self) {
        self.lease.release();
    }

    pub fn blobs(&self) -> &[Blob; 2] {
        &self.blobs
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        if self.reduced_motion {
            return Duration::ZERO;
        }
        now.saturating_duration_since(self.started)
    }

    /// Blob rects in document cells at `now`.
    pub fn rects(&self, now: Instant, doc_width: u16, doc_height: u16) -> [Rect; 2] {
        let elapsed = self.elapsed(now);
        [
            self.blobs[0].rect(elapsed, doc_width, doc_height),
            self.blobs[1].rect(elapsed, doc_width, doc_height),
        ]
    }

    /// Tint the part of the document visible from row `scroll`.
    pub fn draw(&self, buffer: &mut FrameBuffer, now: Instant, scroll: i32, doc_height: u16) {
        let rects = self.rects(now, buffer.width(), doc_height);
        for (blob, rect) in self.blobs.iter().zip(rects) {
            radial_tint(buffer, rect, scroll, blob.color);
        }
    }
}
