//! Easing curves.
//!
//! Named curves are the usual CSS cubic béziers. Evaluation solves the
//! bézier's x(t) = p by binary subdivision, then returns y(t).

/// Easing curve mapping linear progress in [0,1] to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

const SUBDIVISION_PRECISION: f32 = 1e-7;
const SUBDIVISION_MAX_ITERATIONS: usize = 24;

impl Easing {
    /// Evaluate the curve at `p` (clamped to [0,1]).
    pub fn apply(self, p: f32) -> f32 {
        let p = p.clamp(0.0, 1.0);
        match self {
            Self::Linear => p,
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, p),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, p),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, p),
        }
    }
}

/// One coordinate of a cubic bézier with endpoints 0 and 1.
#[inline]
fn bezier_at(t: f32, c1: f32, c2: f32) -> f32 {
    let inv = 1.0 - t;
    3.0 * inv * inv * t * c1 + 3.0 * inv * t * t * c2 + t * t * t
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, p: f32) -> f32 {
    if p <= 0.0 || p >= 1.0 {
        return p;
    }

    let (mut lower, mut upper) = (0.0f32, 1.0f32);
    let mut t = p;
    for _ in 0..SUBDIVISION_MAX_ITERATIONS {
        t = (lower + upper) / 2.0;
        let x = bezier_at(t, x1, x2) - p;
        if x.abs() <= SUBDIVISION_PRECISION {
            break;
        }
        if x > 0.0 {
            upper = t;
        } else {
            lower = t;
        }
    }

    bezier_at(t, y1, y2)
}
