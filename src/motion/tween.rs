//! Retargetable tweens.
//!
//! A tween moves a value from where it is to a target over a fixed duration.
//! Retargeting mid-flight starts a new leg from the current sampled value, so
//! the motion never jumps.

use std::time::{Duration, Instant};

use super::easing::Easing;
use super::timeline::lerp;

/// A 2D point animated by tweening each axis together.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween2 {
    from: (f32, f32),
    to: (f32, f32),
    started: Option<Instant>,
    duration: Duration,
    easing: Easing,
}

impl Tween2 {
    /// A tween resting at `at`.
    pub fn new(at: (f32, f32), duration: Duration, easing: Easing) -> Self {
        Self {
            from: at,
            to: at,
            started: None,
            duration,
            easing,
        }
    }

    pub fn target(&self) -> (f32, f32) {
        self.to
    }

    /// Sample the position at `now`.
    pub fn value_at(&self, now: Instant) -> (f32, f32) {
        let Some(started) = self.started else {
            return self.to;
        };
        if self.duration.is_zero() {
            return self.to;
        }
        let p = now.saturating_duration_since(started).as_secs_f32() / self.duration.as_secs_f32();
        let t = self.easing.apply(p);
        (lerp(self.from.0, self.to.0, t), lerp(self.from.1, self.to.1, t))
    }

    /// Head for `to`, starting from wherever the tween is at `now`.
    pub fn retarget(&mut self, to: (f32, f32), now: Instant) {
        if to == self.to {
            return;
        }
        self.from = self.value_at(now);
        self.to = to;
        self.started = Some(now);
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        match self.started {
            None => true,
            Some(started) => now.saturating_duration_since(started) >= self.duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_reaches_target_after_duration() {
        let t0 = Instant::now();
        let mut tween = Tween2::new((0.0, 0.0), ms(200), Easing::Linear);
        tween.retarget((100.0, 40.0), t0);
        assert_eq!(tween.value_at(t0), (0.0, 0.0));
        assert_eq!(tween.value_at(t0 + ms(100)), (50.0, 20.0));
        assert_eq!(tween.value_at(t0 + ms(200)), (100.0, 40.0));
        assert!(tween.is_finished(t0 + ms(200)));
    }

    #[test]
    fn test_retarget_starts_from_current_position() {
        let t0 = Instant::now();
        let mut tween = Tween2::new((0.0, 0.0), ms(200), Easing::Linear);
        tween.retarget((100.0, 0.0), t0);
        tween.retarget((0.0, 0.0), t0 + ms(100));
        assert_eq!(tween.value_at(t0 + ms(100)), (50.0, 0.0));
        assert_eq!(tween.value_at(t0 + ms(200)), (25.0, 0.0));
        assert_eq!(tween.value_at(t0 + ms(300)), (0.0, 0.0));
    }

    #[test]
    fn test_idle_tween_is_finished() {
        let tween = Tween2::new((3.0, 4.0), ms(200), Easing::Linear);
        assert!(tween.is_finished(Instant::now()));
        assert_eq!(tween.value_at(Instant::now()), (3.0, 4.0));
    }
}
