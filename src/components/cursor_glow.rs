//! Cursor glow: a faint cyan halo that trails the pointer.
//!
//! The layer owns its pointer position. It subscribes to pointer-move
//! events on mount, writes the latest position into its own signal, and on
//! each frame retargets a 0.2 s linear tween toward `pointer - 80 px`.
//! Several moves between frames coalesce into one retarget.

use std::time::{Duration, Instant};

use spark_signals::{Signal, signal};

use super::background::radial_tint;
use crate::motion::{Easing, PX_PER_COL, PX_PER_ROW, Tween2};
use crate::renderer::FrameBuffer;
use crate::state::animate::FrameLease;
use crate::state::pointer;
use crate::types::{Rect, Rgba};

/// 160 px square.
pub const GLOW_COLS: i32 = 16;
pub const GLOW_ROWS: i32 = 8;
/// Half the glow, in pixels.
pub const GLOW_OFFSET_PX: f32 = 80.0;
pub const GLOW_TWEEN: Duration = Duration::from_millis(200);

pub struct CursorGlow {
    /// Latest pointer cell, `None` until the first move
    pointer: Signal<Option<(u16, u16)>>,
    tween: Tween2,
    color: Rgba,
    lease: FrameLease,
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl CursorGlow {
    pub fn new(color: Rgba) -> Self {
        Self {
            pointer: signal(None),
            tween: Tween2::new((0.0, 0.0), GLOW_TWEEN, Easing::Linear),
            color: color.with_alpha(0.1),
            lease: FrameLease::new(),
            unsubscribe: None,
        }
    }

    /// Start listening to pointer moves.
    pub fn mount(&mut self) {
        if self.unsubscribe.is_some() {
            return;
        }
        let pointer = self.pointer.clone();
        let stop = pointer::on_pointer_move(move |event| {
            pointer.set(Some((event.x, event.y)));
        });
        self.unsubscribe = Some(Box::new(stop));
    }

    /// Stop listening and stop asking for frames.
    pub fn unmount(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
        self.lease.release();
    }

    pub fn is_mounted(&self) -> bool {
        self.unsubscribe.is_some()
    }

    pub fn pointer(&self) -> Option<(u16, u16)> {
        self.pointer.get()
    }

    /// Where the glow's top-left is heading, in pixels.
    pub fn target(&self) -> (f32, f32) {
        self.tween.target()
    }

    /// Retarget toward the latest pointer. Returns true while moving.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some((col, row)) = self.pointer.get() {
            let to = (
                col as f32 * PX_PER_COL - GLOW_OFFSET_PX,
                row as f32 * PX_PER_ROW - GLOW_OFFSET_PX,
            );
            self.tween.retarget(to, now);
        }
        let moving = !self.tween.is_finished(now);
        self.lease.hold(moving);
        moving
    }

    /// Top-left in pixels at `now`.
    pub fn position_px(&self, now: Instant) -> (f32, f32) {
        self.tween.value_at(now)
    }

    /// Screen rect at `now`.
    pub fn rect(&self, now: Instant) -> Rect {
        let (x, y) = self.position_px(now);
        Rect::new(
            (x / PX_PER_COL).round() as i32,
            (y / PX_PER_ROW).round() as i32,
            GLOW_COLS,
            GLOW_ROWS,
        )
    }

    /// Tint the screen under the glow. Hidden below the `md` breakpoint.
    pub fn draw(&self, buffer: &mut FrameBuffer, now: Instant, md: bool) {
        if md {
            radial_tint(buffer, self.rect(now), 0, self.color);
        }
    }
}

impl Drop for CursorGlow {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::animate::{get_subscriber_count, reset_frame_registry};
    use crate::state::pointer::{PointerEvent, dispatch, listener_count, reset_pointer_state};

    fn setup() {
        reset_pointer_state();
        reset_frame_registry();
    }

    fn glow() -> CursorGlow {
        CursorGlow::new(Rgba::rgb(0x22, 0xd3, 0xee))
    }

    #[test]
    fn test_rests_at_origin_without_events() {
        setup();
        let mut glow = glow();
        glow.mount();
        let now = Instant::now();
        assert!(!glow.tick(now));
        assert_eq!(glow.position_px(now), (0.0, 0.0));
        assert_eq!(glow.rect(now), Rect::new(0, 0, GLOW_COLS, GLOW_ROWS));
    }

    #[test]
    fn test_reaches_target_after_tween() {
        setup();
        let mut glow = glow();
        glow.mount();
        let start = Instant::now();

        dispatch(PointerEvent::move_to(40, 10));
        assert!(glow.tick(start));
        assert_eq!(glow.target(), (320.0, 120.0));
        assert_eq!(get_subscriber_count(), 1);

        let (x, y) = glow.position_px(start + GLOW_TWEEN / 2);
        assert!((x - 160.0).abs() < 1e-3 && (y - 60.0).abs() < 1e-3);

        let done = start + GLOW_TWEEN;
        assert!(!glow.tick(done));
        assert_eq!(glow.position_px(done), (320.0, 120.0));
        assert_eq!(glow.rect(done), Rect::new(32, 6, GLOW_COLS, GLOW_ROWS));
        assert_eq!(get_subscriber_count(), 0);
    }

    #[test]
    fn test_moves_between_frames_coalesce() {
        setup();
        let mut glow = glow();
        glow.mount();
        let start = Instant::now();

        dispatch(PointerEvent::move_to(5, 5));
        dispatch(PointerEvent::move_to(8, 8));
        dispatch(PointerEvent::move_to(30, 12));
        glow.tick(start);

        assert_eq!(glow.pointer(), Some((30, 12)));
        assert_eq!(glow.target(), (220.0, 160.0));
    }

    #[test]
    fn test_retarget_mid_flight_is_continuous() {
        setup();
        let mut glow = glow();
        glow.mount();
        let start = Instant::now();

        dispatch(PointerEvent::move_to(40, 10));
        glow.tick(start);
        let mid = start + Duration::from_millis(100);
        let before = glow.position_px(mid);

        dispatch(PointerEvent::move_to(0, 0));
        glow.tick(mid);
        assert_eq!(glow.position_px(mid), before);
    }

    #[test]
    fn test_unmount_leaves_no_listeners() {
        setup();
        let mut glow = glow();
        glow.mount();
        glow.mount();
        assert_eq!(listener_count(), 1);

        glow.unmount();
        assert_eq!(listener_count(), 0);

        dispatch(PointerEvent::move_to(9, 9));
        assert_eq!(glow.pointer(), None);
    }

    #[test]
    fn test_drop_unsubscribes() {
        setup();
        let mut glow = glow();
        glow.mount();
        drop(glow);
        assert_eq!(listener_count(), 0);
    }

    #[test]
    fn test_hidden_below_breakpoint() {
        setup();
        let glow = glow();
        let now = Instant::now();
        let bg = Rgba::rgb(11, 16, 32);

        let mut narrow = FrameBuffer::with_background(40, 20, bg);
        glow.draw(&mut narrow, now, false);
        assert!(narrow.cells().iter().all(|c| c.bg == bg));

        let mut wide = FrameBuffer::with_background(40, 20, bg);
        glow.draw(&mut wide, now, true);
        assert_ne!(wide.get(8, 4).unwrap().bg, bg);
    }
}
