use super::{Rect, Vec2};

/// A circle given by its centre and radius.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    /// Centre point.
    pub center: Vec2,
    /// Radius.
    pub r: f64,
}

impl Circle {
    /// Construct a new circle. A negative radius is folded to its absolute
    /// value.
    pub fn new(cx: f64, cy: f64, r: f64) -> Self {
        Self {
            center: Vec2::new(cx, cy),
            r: r.abs(),
        }
    }

    /// The square with the same centre whose half-side equals the radius.
    pub fn bounding_square(&self) -> Rect {
        Rect::square(self.center.x, self.center.y, self.r)
    }
}
