//! Per-element motion state: one-shot reveal plus spring hover.
//!
//! ```text
//! Hidden --reveal()--> Revealing --duration elapsed--> Visible <--enter/leave--> Hovered
//! ```
//!
//! `Hidden -> Revealing -> Visible` is one-way. Pointer enter is ignored until
//! the element is Visible. Under reduced motion the phase still follows the
//! pointer (for hover styling) but the hover transform stays identity.

use std::time::{Duration, Instant};

use super::easing::Easing;
use super::spring::{Spring, SpringConfig};
use super::timeline::lerp;
use super::transform::Transform;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Hidden,
    Revealing,
    Visible,
    Hovered,
}

/// Hidden pose plus the transition into the resting pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealVariant {
    pub hidden: Transform,
    pub duration: Duration,
    pub easing: Easing,
}

/// Fade in while rising 40 px.
pub const FADE_UP: RevealVariant = RevealVariant {
    hidden: Transform {
        y: 40.0,
        scale: 1.0,
        opacity: 0.0,
    },
    duration: Duration::from_millis(800),
    easing: Easing::EaseOut,
};

/// Fade in while growing from 85%.
pub const POP_IN: RevealVariant = RevealVariant {
    hidden: Transform {
        y: 0.0,
        scale: 0.85,
        opacity: 0.0,
    },
    duration: Duration::from_millis(1000),
    easing: Easing::EaseInOut,
};

/// Already at rest; for elements that only react to hover.
pub const INSTANT: RevealVariant = RevealVariant {
    hidden: Transform::IDENTITY,
    duration: Duration::ZERO,
    easing: Easing::Linear,
};

/// Hover pose and the spring that drives it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverSpec {
    pub y: f32,
    pub scale: f32,
    pub spring: SpringConfig,
}

pub const SKILL_HOVER: HoverSpec = HoverSpec {
    y: -10.0,
    scale: 1.03,
    spring: SpringConfig::new(180.0, 15.0),
};

pub const PROJECT_HOVER: HoverSpec = HoverSpec {
    y: 0.0,
    scale: 1.04,
    spring: SpringConfig::new(180.0, 18.0),
};

pub const CONTACT_HOVER: HoverSpec = HoverSpec {
    y: -6.0,
    scale: 1.2,
    spring: SpringConfig::new(100.0, 10.0),
};

/// Fixed delay between sibling reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub step: Duration,
}

impl Stagger {
    pub const CHILDREN: Self = Self {
        step: Duration::from_millis(150),
    };

    pub fn delay(&self, index: usize) -> Duration {
        self.step * index as u32
    }
}

#[derive(Debug, Clone)]
pub struct ElementMotion {
    phase: Phase,
    variant: RevealVariant,
    reveal_at: Option<Instant>,
    hover: Option<HoverSpec>,
    lift: Spring,
    grow: Spring,
    reduced_motion: bool,
}

impl ElementMotion {
    pub fn new(variant: RevealVariant, hover: Option<HoverSpec>) -> Self {
        let config = hover.map(|h| h.spring).unwrap_or_default();
        Self {
            phase: Phase::Hidden,
            variant,
            reveal_at: None,
            hover,
            lift: Spring::new(0.0, config.with_rest(0.05, 0.5)),
            grow: Spring::new(1.0, config.with_rest(0.0005, 0.005)),
            reduced_motion: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_hovered(&self) -> bool {
        self.phase == Phase::Hovered
    }

    pub fn has_revealed(&self) -> bool {
        self.phase != Phase::Hidden
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
        if reduced {
            self.lift.snap(0.0);
            self.grow.snap(1.0);
        } else if self.phase == Phase::Hovered {
            if let Some(hover) = self.hover {
                self.lift.set_target(hover.y);
                self.grow.set_target(hover.scale);
            }
        }
    }

    /// Start the reveal `delay` after `now`. Only the first call has any effect.
    pub fn reveal(&mut self, now: Instant, delay: Duration) -> bool {
        if self.phase != Phase::Hidden {
            return false;
        }
        self.phase = Phase::Revealing;
        self.reveal_at = Some(now + delay);
        true
    }

    /// Returns true when the phase changed.
    pub fn pointer_enter(&mut self) -> bool {
        if self.phase != Phase::Visible || self.hover.is_none() {
            return false;
        }
        self.phase = Phase::Hovered;
        if let (Some(hover), false) = (self.hover, self.reduced_motion) {
            self.lift.set_target(hover.y);
            self.grow.set_target(hover.scale);
        }
        true
    }

    pub fn pointer_leave(&mut self) -> bool {
        if self.phase != Phase::Hovered {
            return false;
        }
        self.phase = Phase::Visible;
        self.lift.set_target(0.0);
        self.grow.set_target(1.0);
        true
    }

    /// Advance to `now`. Returns true while anything is still moving.
    pub fn tick(&mut self, now: Instant, dt: Duration) -> bool {
        let mut moving = false;
        if self.phase == Phase::Revealing {
            match self.reveal_at {
                Some(at) if now >= at + self.variant.duration => {
                    self.phase = Phase::Visible;
                }
                _ => moving = true,
            }
        }
        moving |= self.lift.step(dt);
        moving |= self.grow.step(dt);
        moving
    }

    fn reveal_transform(&self, now: Instant) -> Transform {
        let hidden = self.variant.hidden;
        match self.phase {
            Phase::Hidden => hidden,
            Phase::Visible | Phase::Hovered => Transform::IDENTITY,
            Phase::Revealing => {
                let Some(at) = self.reveal_at else {
                    return hidden;
                };
                if now < at {
                    return hidden;
                }
                let p = if self.variant.duration.is_zero() {
                    1.0
                } else {
                    (now - at).as_secs_f32() / self.variant.duration.as_secs_f32()
                };
                let t = self.variant.easing.apply(p);
                Transform {
                    y: lerp(hidden.y, 0.0, t),
                    scale: lerp(hidden.scale, 1.0, t),
                    opacity: lerp(hidden.opacity, 1.0, t),
                }
            }
        }
    }

    /// Transform to draw with at `now`.
    pub fn transform(&self, now: Instant) -> Transform {
        let base = self.reveal_transform(now);
        if self.reduced_motion {
            return base;
        }
        base.then(Transform {
            y: self.lift.value(),
            scale: self.grow.value(),
            opacity: 1.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn settle(motion: &mut ElementMotion, start: Instant, limit: Duration) -> Instant {
        let mut now = start;
        while now - start < limit {
            now += FRAME;
            if !motion.tick(now, FRAME) {
                break;
            }
        }
        now
    }

    #[test]
    fn test_starts_hidden() {
        let motion = ElementMotion::new(FADE_UP, None);
        let t = motion.transform(Instant::now());
        assert_eq!(motion.phase(), Phase::Hidden);
        assert_eq!(t.opacity, 0.0);
        assert_eq!(t.y, 40.0);
    }

    #[test]
    fn test_reveal_runs_to_visible() {
        let t0 = Instant::now();
        let mut motion = ElementMotion::new(FADE_UP, None);
        assert!(motion.reveal(t0, Duration::ZERO));
        assert_eq!(motion.phase(), Phase::Revealing);

        let mid = motion.transform(t0 + Duration::from_millis(400));
        assert!(mid.opacity > 0.5 && mid.opacity < 1.0);
        assert!(mid.y > 0.0 && mid.y < 40.0);

        motion.tick(t0 + Duration::from_millis(800), FRAME);
        assert_eq!(motion.phase(), Phase::Visible);
        assert!(motion.transform(t0 + Duration::from_millis(800)).is_identity());
    }

    #[test]
    fn test_reveal_fires_once() {
        let t0 = Instant::now();
        let mut motion = ElementMotion::new(FADE_UP, None);
        assert!(motion.reveal(t0, Duration::ZERO));
        assert!(!motion.reveal(t0 + Duration::from_millis(100), Duration::ZERO));
        motion.tick(t0 + Duration::from_secs(1), FRAME);
        assert!(!motion.reveal(t0 + Duration::from_secs(2), Duration::ZERO));
        assert_eq!(motion.phase(), Phase::Visible);
    }

    #[test]
    fn test_delayed_reveal_holds_hidden_pose() {
        let t0 = Instant::now();
        let mut motion = ElementMotion::new(FADE_UP, None);
        motion.reveal(t0, Stagger::CHILDREN.delay(3));
        let t = motion.transform(t0 + Duration::from_millis(300));
        assert_eq!(t.opacity, 0.0);
        assert!(motion.tick(t0 + Duration::from_millis(1000), FRAME));
        assert_eq!(motion.phase(), Phase::Revealing);
        motion.tick(t0 + Duration::from_millis(1250), FRAME);
        assert_eq!(motion.phase(), Phase::Visible);
    }

    #[test]
    fn test_hover_ignored_until_visible() {
        let t0 = Instant::now();
        let mut motion = ElementMotion::new(FADE_UP, Some(SKILL_HOVER));
        assert!(!motion.pointer_enter());
        motion.reveal(t0, Duration::ZERO);
        assert!(!motion.pointer_enter());
        assert_eq!(motion.phase(), Phase::Revealing);
    }

    #[test]
    fn test_hover_lifts_and_returns() {
        let t0 = Instant::now();
        let mut motion = ElementMotion::new(FADE_UP, Some(SKILL_HOVER));
        motion.reveal(t0, Duration::ZERO);
        let t1 = t0 + Duration::from_secs(1);
        motion.tick(t1, FRAME);

        assert!(motion.pointer_enter());
        let t2 = settle(&mut motion, t1, Duration::from_secs(3));
        let hovered = motion.transform(t2);
        assert!((hovered.y + 10.0).abs() < 0.1);
        assert!((hovered.scale - 1.03).abs() < 0.001);

        assert!(motion.pointer_leave());
        let t3 = settle(&mut motion, t2, Duration::from_secs(3));
        assert!(motion.transform(t3).is_identity());
        assert_eq!(motion.phase(), Phase::Visible);
    }

    #[test]
    fn test_reduced_motion_keeps_identity() {
        let t0 = Instant::now();
        let mut motion = ElementMotion::new(FADE_UP, Some(PROJECT_HOVER));
        motion.set_reduced_motion(true);
        motion.reveal(t0, Duration::ZERO);
        let t1 = t0 + Duration::from_secs(1);
        motion.tick(t1, FRAME);

        assert!(motion.pointer_enter());
        assert!(motion.is_hovered());
        let t2 = settle(&mut motion, t1, Duration::from_secs(1));
        assert!(motion.transform(t2).is_identity());
    }

    #[test]
    fn test_no_hover_spec_stays_visible() {
        let t0 = Instant::now();
        let mut motion = ElementMotion::new(FADE_UP, None);
        motion.reveal(t0, Duration::ZERO);
        motion.tick(t0 + Duration::from_secs(1), FRAME);
        assert!(!motion.pointer_enter());
        assert_eq!(motion.phase(), Phase::Visible);
    }

    #[test]
    fn test_stagger_delays() {
        assert_eq!(Stagger::CHILDREN.delay(0), Duration::ZERO);
        assert_eq!(Stagger::CHILDREN.delay(4), Duration::from_millis(600));
    }
}
