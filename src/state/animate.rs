//! Frame Clock - Shared animation demand
//!
//! Animated layers subscribe while they need frames. The event loop asks
//! [`is_animating`] to choose between the frame interval and an idle wait,
//! so a page with nothing moving does not redraw at 60 fps.
//!
//! # Pattern
//!
//! - Looping layers (background, gradient title) subscribe on mount
//! - Transient motion (reveal, hover springs, glow tween) holds a subscription
//!   only while it runs
//! - Frames are wanted while at least one subscriber exists
//!
//! # Example
//!
//! ```ignore
//! use spark_folio::state::animate::{subscribe_to_frames, is_animating};
//!
//! let unsubscribe = subscribe_to_frames();
//! assert!(is_animating());
//! unsubscribe();
//! ```

use std::cell::RefCell;
use std::time::Duration;

/// Wait used by the event loop when nothing is animating.
pub const IDLE_WAIT: Duration = Duration::from_millis(250);

// =============================================================================
// FRAME REGISTRY
// =============================================================================

struct FrameRegistry {
    subscribers: usize,
}

thread_local! {
    static FRAME_REGISTRY: RefCell<FrameRegistry> = RefCell::new(FrameRegistry { subscribers: 0 });
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Subscribe to the frame clock.
///
/// Returns an unsubscribe function that must be called when the animation
/// stops or the owner is unmounted.
pub fn subscribe_to_frames() -> Box<dyn FnOnce()> {
    FRAME_REGISTRY.with(|registry| {
        registry.borrow_mut().subscribers += 1;
    });

    Box::new(|| {
        FRAME_REGISTRY.with(|registry| {
            let mut registry = registry.borrow_mut();
            registry.subscribers = registry.subscribers.saturating_sub(1);
        });
    })
}

/// True while any subscriber wants frames.
pub fn is_animating() -> bool {
    FRAME_REGISTRY.with(|registry| registry.borrow().subscribers > 0)
}

/// Get the number of active subscribers.
pub fn get_subscriber_count() -> usize {
    FRAME_REGISTRY.with(|registry| registry.borrow().subscribers)
}

/// Interval between frames at `fps` (clamped to at least 1 fps).
pub fn frame_interval(fps: u16) -> Duration {
    Duration::from_micros(1_000_000 / fps.max(1) as u64)
}

/// How long the event loop may block waiting for input.
pub fn poll_timeout(fps: u16) -> Duration {
    if is_animating() {
        frame_interval(fps)
    } else {
        IDLE_WAIT
    }
}

/// Reset the frame registry (for testing).
pub fn reset_frame_registry() {
    FRAME_REGISTRY.with(|registry| registry.borrow_mut().subscribers = 0);
}

// =============================================================================
// FRAME LEASE
// =============================================================================

/// Holds a frame subscription while some transient motion runs.
///
/// Call [`FrameLease::hold`] every frame with whether the owner is still
/// moving; the lease subscribes and unsubscribes on the edges.
#[derive(Default)]
pub struct FrameLease {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl FrameLease {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hold(&mut self, active: bool) {
        match (active, self.unsubscribe.is_some()) {
            (true, false) => self.unsubscribe = Some(subscribe_to_frames()),
            (false, true) => self.release(),
            _ => {}
        }
    }

    pub fn is_held(&self) -> bool {
        self.unsubscribe.is_some()
    }

    pub fn release(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for FrameLease {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for FrameLease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameLease").field("held", &self.is_held()).finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        reset_frame_registry();
    }

    #[test]
    fn test_subscribe_returns_unsubscribe() {
        setup();

        let unsubscribe = subscribe_to_frames();
        assert_eq!(get_subscriber_count(), 1);
        assert!(is_animating());

        unsubscribe();
        assert_eq!(get_subscriber_count(), 0);
        assert!(!is_animating());
    }

    #[test]
    fn test_shared_clock() {
        setup();

        let unsub1 = subscribe_to_frames();
        let unsub2 = subscribe_to_frames();
        assert_eq!(get_subscriber_count(), 2);

        unsub1();
        assert!(is_animating());

        unsub2();
        assert!(!is_animating());
    }

    #[test]
    fn test_poll_timeout_follows_demand() {
        setup();

        assert_eq!(poll_timeout(60), IDLE_WAIT);
        let unsub = subscribe_to_frames();
        assert_eq!(poll_timeout(50), Duration::from_millis(20));
        unsub();
        assert_eq!(poll_timeout(50), IDLE_WAIT);
    }

    #[test]
    fn test_zero_fps_clamped() {
        assert_eq!(frame_interval(0), Duration::from_secs(1));
    }

    #[test]
    fn test_lease_edges() {
        setup();

        let mut lease = FrameLease::new();
        lease.hold(true);
        lease.hold(true);
        assert_eq!(get_subscriber_count(), 1);

        lease.hold(false);
        assert_eq!(get_subscriber_count(), 0);

        lease.hold(true);
        drop(lease);
        assert_eq!(get_subscriber_count(), 0);
    }
}
