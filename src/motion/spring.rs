//! Damped spring simulation.
//!
//! Integrated with semi-implicit Euler in fixed 1 ms substeps so the result
//! does not depend on frame rate. A spring is at rest once both its distance
//! to the target and its speed fall under the rest thresholds; it then snaps
//! onto the target exactly.

use std::time::Duration;

const SUBSTEP: f32 = 0.001;

/// Physical parameters of a spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    pub rest_delta: f32,
    pub rest_speed: f32,
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
            rest_delta: 0.01,
            rest_speed: 0.01,
        }
    }

    /// Thresholds for values measured in pixels.
    pub const fn with_rest(self, rest_delta: f32, rest_speed: f32) -> Self {
        Self {
            rest_delta,
            rest_speed,
            ..self
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(100.0, 10.0)
    }
}

/// One animated value driven by a spring.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// A spring resting at `value`.
    pub fn new(value: f32, config: SpringConfig) -> Self {
        Self {
            config,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Retarget without touching position or velocity.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump to `value` and stop.
    pub fn snap(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_at_rest(&self) -> bool {
        (self.target - self.value).abs() <= self.config.rest_delta
            && self.velocity.abs() <= self.config.rest_speed
    }

    /// Advance by `dt`. Returns true while the spring is still moving.
    pub fn step(&mut self, dt: Duration) -> bool {
        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
            return false;
        }

        let SpringConfig {
            stiffness,
            damping,
            mass,
            ..
        } = self.config;

        let mut remaining = dt.as_secs_f32();
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP);
            let force = -stiffness * (self.value - self.target) - damping * self.velocity;
            self.velocity += force / mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
            false
        } else {
            true
        }
    }
}
