//! Time-driven timelines and keyframe tracks.
//!
//! A [`Timeline`] turns elapsed time into linear progress for the current
//! cycle, honouring the repeat mode. [`Keyframes`] spreads values evenly over
//! a timeline and eases each segment between neighbouring values.

use std::time::Duration;

use super::easing::Easing;

/// What happens when a timeline reaches its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    /// Play once and hold the final value.
    #[default]
    Once,
    /// Restart from the beginning forever.
    Loop,
    /// Play forwards, then backwards, forever.
    Reverse,
}

/// Duration, repeat mode and easing of an animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timeline {
    pub duration: Duration,
    pub repeat: Repeat,
    pub easing: Easing,
}

impl Timeline {
    pub const fn new(duration: Duration, repeat: Repeat, easing: Easing) -> Self {
        Self {
            duration,
            repeat,
            easing,
        }
    }

    /// Linear progress in [0,1] within the current cycle.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        let total = self.duration.as_secs_f64();
        if total <= 0.0 {
            return 1.0;
        }

        let cycles = elapsed.as_secs_f64() / total;
        match self.repeat {
            Repeat::Once => cycles.min(1.0) as f32,
            Repeat::Loop => cycles.fract() as f32,
            Repeat::Reverse => {
                let cycle = cycles.floor() as u64;
                let p = cycles.fract() as f32;
                if cycle % 2 == 0 { p } else { 1.0 - p }
            }
        }
    }

    /// Eased progress in [0,1] within the current cycle.
    pub fn eased(&self, elapsed: Duration) -> f32 {
        self.easing.apply(self.progress(elapsed))
    }

    /// Only a `Once` timeline ever finishes.
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        self.repeat == Repeat::Once && elapsed >= self.duration
    }
}

/// Values spread evenly across a timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes {
    values: Vec<f32>,
    timeline: Timeline,
}

impl Keyframes {
    /// An empty value list behaves as a constant 0.
    pub fn new(values: impl Into<Vec<f32>>, timeline: Timeline) -> Self {
        Self {
            values: values.into(),
            timeline,
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Sample the track; easing is applied per segment.
    pub fn value_at(&self, elapsed: Duration) -> f32 {
        match self.values.len() {
            0 => 0.0,
            1 => self.values[0],
            n => {
                let p = self.timeline.progress(elapsed);
                let scaled = p * (n - 1) as f32;
                let segment = (scaled.floor() as usize).min(n - 2);
                let local = self.timeline.easing.apply(scaled - segment as f32);
                lerp(self.values[segment], self.values[segment + 1], local)
            }
        }
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: f32) -> Duration {
        Duration::from_secs_f32(s)
    }

    #[test]
    fn test_once_holds_end() {
        let tl = Timeline::new(secs(0.8), Repeat::Once, Easing::EaseOut);
        assert_eq!(tl.progress(secs(0.0)), 0.0);
        assert_eq!(tl.progress(secs(5.0)), 1.0);
        assert!(tl.is_finished(secs(0.8)));
        assert!(!tl.is_finished(secs(0.4)));
    }

    #[test]
    fn test_loop_wraps() {
        let tl = Timeline::new(secs(2.0), Repeat::Loop, Easing::Linear);
        assert!((tl.progress(secs(2.5)) - 0.25).abs() < 1e-4);
        assert!(!tl.is_finished(secs(100.0)));
    }

    #[test]
    fn test_reverse_mirrors_odd_cycles() {
        let tl = Timeline::new(secs(4.0), Repeat::Reverse, Easing::Linear);
        assert!((tl.progress(secs(1.0)) - 0.25).abs() < 1e-4);
        assert!((tl.progress(secs(5.0)) - 0.75).abs() < 1e-4);
        assert!((tl.progress(secs(9.0)) - 0.25).abs() < 1e-4);
    }

    #[test]
    fn test_keyframes_return_to_start_each_cycle() {
        let tl = Timeline::new(secs(20.0), Repeat::Loop, Easing::EaseInOut);
        let track = Keyframes::new(vec![0.0, 200.0, 0.0], tl);
        assert_eq!(track.value_at(secs(0.0)), 0.0);
        assert!((track.value_at(secs(10.0)) - 200.0).abs() < 1e-2);
        assert!(track.value_at(secs(20.0)).abs() < 1e-2);
        assert!(track.value_at(secs(40.0)).abs() < 1e-2);
        let quarter = track.value_at(secs(5.0));
        assert!((quarter - 100.0).abs() < 1.0);
    }

    #[test]
    fn test_keyframes_degenerate() {
        let tl = Timeline::new(secs(1.0), Repeat::Once, Easing::Linear);
        assert_eq!(Keyframes::new(Vec::new(), tl).value_at(secs(0.5)), 0.0);
        assert_eq!(Keyframes::new(vec![3.0], tl).value_at(secs(0.5)), 3.0);
    }

    #[test]
    fn test_zero_duration_is_complete() {
        let tl = Timeline::new(Duration::ZERO, Repeat::Once, Easing::Linear);
        assert_eq!(tl.progress(Duration::ZERO), 1.0);
    }
}
