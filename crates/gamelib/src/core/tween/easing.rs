use serde::{Deserialize, Serialize};

use crate::math::{cubic_bezier_point, normalize_zero_to_one, slow_stop};

/// An easing curve mapping progress in `[0, 1]` onto `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// The cubic Bézier curve through (0, 0), (0, cy), (cx, 1), (1, 1).
    CubicBezier {
        /// Second control point x.
        cx: f64,
        /// First control point y.
        cy: f64,
    },
    /// Sine ease-out.
    SlowStop,
    /// Constant speed.
    Linear,
}

impl Default for Easing {
    /// A front-loaded deceleration curve.
    fn default() -> Self {
        Self::CubicBezier { cx: 0.9, cy: 0.9 }
    }
}

impl Easing {
    /// Map progress `t` onto the curve. `t` is clamped into `[0, 1]`.
    pub fn ease(&self, t: f64) -> f64 {
        match *self {
            Self::CubicBezier { cx, cy } => cubic_bezier_point(t, cx, cy),
            Self::SlowStop => slow_stop(t),
            Self::Linear => normalize_zero_to_one(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        for e in [Easing::default(), Easing::SlowStop, Easing::Linear] {
            assert_eq!(e.ease(0.0), 0.0);
            assert!((e.ease(1.0) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn default_is_front_loaded() {
        assert!(Easing::default().ease(0.25) > 0.25);
        assert_eq!(Easing::Linear.ease(0.25), 0.25);
    }
}
