//! Numeric helpers shared by the widgets, easing curves and value types.
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use tracing::warn;

use crate::geom::Vec2;

/// Return `(min, max)` in order. A reversed range is logged and swapped.
pub fn ordered(min: f64, max: f64) -> (f64, f64) {
    if max < min {
        warn!(min, max, "range minimum above maximum, swapping");
        (max, min)
    } else {
        (min, max)
    }
}

/// Clamp `n` into `[min, max]`, swapping a reversed range.
pub fn clamp(n: f64, min: f64, max: f64) -> f64 {
    let (min, max) = ordered(min, max);
    n.max(min).min(max)
}

/// Clamp `n` into `[0, 1]`.
pub fn normalize_zero_to_one(n: f64) -> f64 {
    n.clamp(0.0, 1.0)
}

/// Wrap `n` into `[0, max)`. A zero `max` is logged and `n` is returned
/// unchanged.
pub fn wrap(n: f64, max: f64) -> f64 {
    if max == 0.0 {
        warn!(n, "wrap into an empty range, leaving value unchanged");
        return n;
    }
    let r = n % max;
    if r < 0.0 { r + max } else { r }
}

/// Wrap an angle in radians into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    wrap(angle, TAU)
}

/// Move `n` towards `dest` by at most `step`.
pub fn approach_num(n: f64, dest: f64, step: f64) -> f64 {
    if n > dest + step {
        n - step
    } else if n < dest - step {
        n + step
    } else {
        dest
    }
}

/// Move an angle towards `dest` along the shorter arc by at most `step`.
/// The result is in `[0, 2π)` plus `dest`'s normalized value.
pub fn approach_angle(angle: f64, dest: f64, step: f64) -> f64 {
    let dest = normalize_angle(dest);
    let mut d = normalize_angle(normalize_angle(angle) - dest);
    if (PI..TAU - step).contains(&d) {
        d += step;
    } else if d <= PI && d > step {
        d -= step;
    }
    if d > TAU - step || d < step {
        d = 0.0;
    }
    normalize_angle(d + dest)
}

/// Sine ease-out: maps `[0, 1]` onto `[0, 1]`, decelerating towards 1.
pub fn slow_stop(n: f64) -> f64 {
    (normalize_zero_to_one(n) * FRAC_PI_2).sin()
}

/// The per-frame multiplier for a move that decelerates along [`slow_stop`]
/// over `total` frames. Adding `speed * slow_stop_step(count, total)` on
/// frames `0..total` covers exactly `speed * total`. A zero `total` is
/// logged and yields 0.
pub fn slow_stop_step(count: u32, total: u32) -> f64 {
    if total == 0 {
        warn!(count, "slow stop over zero frames");
        return 0.0;
    }
    let n = f64::from(total);
    (slow_stop(f64::from(count + 1) / n) - slow_stop(f64::from(count) / n)) * n
}

/// The y value at parameter `t` of the cubic Bézier curve through
/// (0, 0), (0, cy), (cx, 1), (1, 1). `t` is clamped into `[0, 1]`.
pub fn cubic_bezier_point(t: f64, cx: f64, cy: f64) -> f64 {
    let t = normalize_zero_to_one(t);
    if t == 0.0 {
        return 0.0;
    } else if t == 1.0 {
        return 1.0;
    }
    let p = [
        Vec2::zero(),
        Vec2::new(0.0, cy),
        Vec2::new(cx, 1.0),
        Vec2::new(1.0, 1.0),
    ];
    // de Casteljau
    let a = p[0].lerp(p[1], t);
    let b = p[1].lerp(p[2], t);
    let c = p[2].lerp(p[3], t);
    let ab = a.lerp(b, t);
    let bc = b.lerp(c, t);
    ab.lerp(bc, t).y
}
