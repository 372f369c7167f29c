use super::Vec2;

/// An axis-aligned rectangle stored as a centre point and a size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Centre of the rectangle.
    pub center: Vec2,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

impl Rect {
    /// Construct a rectangle from its centre and size. Negative sizes are
    /// folded to their absolute value.
    pub fn new(cx: f64, cy: f64, w: f64, h: f64) -> Self {
        Self {
            center: Vec2::new(cx, cy),
            w: w.abs(),
            h: h.abs(),
        }
    }

    /// A square centred on `(cx, cy)` with half-side `r`.
    pub fn square(cx: f64, cy: f64, r: f64) -> Self {
        Self::new(cx, cy, r * 2.0, r * 2.0)
    }

    /// Construct a rectangle from two opposite corners, in any order.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let ul = a.min(b);
        let br = a.max(b);
        let w = br.x - ul.x;
        let h = br.y - ul.y;
        Self {
            center: Vec2::new(ul.x + w / 2.0, ul.y + h / 2.0),
            w,
            h,
        }
    }

    /// Upper-left corner.
    pub fn ul(&self) -> Vec2 {
        Vec2::new(self.center.x - self.w / 2.0, self.center.y - self.h / 2.0)
    }

    /// Bottom-right corner.
    pub fn br(&self) -> Vec2 {
        Vec2::new(self.center.x + self.w / 2.0, self.center.y + self.h / 2.0)
    }

    /// Does this rect have a zero area?
    pub fn is_zero(&self) -> bool {
        self.w == 0.0 || self.h == 0.0
    }

    /// Return a copy moved by `delta`.
    pub fn shift(&self, delta: Vec2) -> Self {
        Self {
            center: self.center + delta,
            ..*self
        }
    }

    /// Return a copy grown by `n` on every side. Shrinking past zero clamps
    /// the size at zero.
    pub fn inflate(&self, n: f64) -> Self {
        Self {
            center: self.center,
            w: (self.w + n * 2.0).max(0.0),
            h: (self.h + n * 2.0).max(0.0),
        }
    }

    /// The point inside the rectangle closest to `p`.
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        let ul = self.ul();
        let br = self.br();
        Vec2::new(p.x.clamp(ul.x, br.x), p.y.clamp(ul.y, br.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners() {
        let r = Rect::new(50.0, 50.0, 20.0, 10.0);
        assert_eq!(r.ul(), Vec2::new(40.0, 45.0));
        assert_eq!(r.br(), Vec2::new(60.0, 55.0));
    }

    #[test]
    fn from_corners() {
        let a = Rect::from_corners(Vec2::new(10.0, 10.0), Vec2::new(0.0, 0.0));
        assert_eq!(a, Rect::new(5.0, 5.0, 10.0, 10.0));
        let b = Rect::from_corners(Vec2::new(0.0, 10.0), Vec2::new(10.0, 0.0));
        assert_eq!(a, b);
    }

    #[test]
    fn negative_size() {
        assert_eq!(Rect::new(0.0, 0.0, -4.0, -2.0), Rect::new(0.0, 0.0, 4.0, 2.0));
    }

    #[test]
    fn inflate() {
        let r = Rect::new(0.0, 0.0, 4.0, 4.0);
        assert_eq!(r.inflate(1.0), Rect::new(0.0, 0.0, 6.0, 6.0));
        assert!(r.inflate(-3.0).is_zero());
    }

    #[test]
    fn closest_point() {
        let r = Rect::new(0.0, 0.0, 2.0, 2.0);
        assert_eq!(r.closest_point(Vec2::new(5.0, 0.5)), Vec2::new(1.0, 0.5));
        assert_eq!(r.closest_point(Vec2::new(0.2, 0.3)), Vec2::new(0.2, 0.3));
    }
}
