use std::ops::{Add, Mul, Neg, Sub};

/// A 2D vector, used both as a position and as a displacement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Vec2 {
    /// Construct a new vector.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin.
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Return true when both coordinates are zero.
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: Self) -> f64 {
        (other - *self).length()
    }

    /// Length of the vector.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle in radians from this point towards `other`.
    pub fn angle_to(&self, other: Self) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Move `length` units along `angle`.
    pub fn advance(&self, angle: f64, length: f64) -> Self {
        Self::new(self.x + angle.cos() * length, self.y + angle.sin() * length)
    }

    /// Rotate around the origin by `angle` radians.
    pub fn rotate(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Step towards `other` by at most `step` units, landing exactly on it when
    /// closer than that.
    pub fn approach(&self, other: Self, step: f64) -> Self {
        let distance = self.distance(other);
        if distance <= step {
            other
        } else {
            self.advance(self.angle_to(other), step)
        }
    }

    /// Linear interpolation; `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(&self, other: Self, t: f64) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Component-wise minimum.
    pub fn min(&self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum.
    pub fn max(&self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Vec2 {
    #[inline]
    fn from(v: (f64, f64)) -> Self {
        Self { x: v.0, y: v.1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        assert_eq!(Vec2::zero() + (1.0, 1.0).into(), Vec2::new(1.0, 1.0));
        assert_eq!(Vec2::new(3.0, 4.0) - Vec2::new(1.0, 1.0), Vec2::new(2.0, 3.0));
        assert_eq!(Vec2::new(1.0, -2.0) * 2.0, Vec2::new(2.0, -4.0));
        assert_eq!(-Vec2::new(1.0, -2.0), Vec2::new(-1.0, 2.0));
    }

    #[test]
    fn distance() {
        assert_eq!(Vec2::zero().distance(Vec2::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn approach() {
        let p = Vec2::zero().approach(Vec2::new(10.0, 0.0), 3.0);
        assert!((p.x - 3.0).abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);
        assert_eq!(
            Vec2::zero().approach(Vec2::new(1.0, 1.0), 5.0),
            Vec2::new(1.0, 1.0)
        );
    }

    #[test]
    fn lerp() {
        let a = Vec2::new(0.0, 10.0);
        let b = Vec2::new(10.0, 0.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Vec2::new(5.0, 5.0));
    }
}
