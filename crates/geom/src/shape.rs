use super::{Circle, Rect, Vec2};

/// The closed set of shapes understood by [`crate::collision::check`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// A single point.
    Dot(Vec2),
    /// A circle.
    Circle(Circle),
    /// An axis-aligned rectangle (squares included).
    Rect(Rect),
}

impl Shape {
    /// Centre of the shape.
    pub fn center(&self) -> Vec2 {
        match self {
            Self::Dot(p) => *p,
            Self::Circle(c) => c.center,
            Self::Rect(r) => r.center,
        }
    }
}

impl From<Vec2> for Shape {
    fn from(p: Vec2) -> Self {
        Self::Dot(p)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Self::Circle(c)
    }
}

impl From<Rect> for Shape {
    fn from(r: Rect) -> Self {
        Self::Rect(r)
    }
}
