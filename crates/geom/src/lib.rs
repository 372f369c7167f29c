//! Geometry primitives and hit-testing used across gamelib.

/// Circle shape.
mod circle;
/// Shape collision checks.
pub mod collision;
/// Rectangle operations.
mod rect;
/// Closed set of hit-testable shapes.
mod shape;
/// Two-dimensional vector helpers.
mod vec2;

pub use circle::Circle;
pub use collision::check;
pub use rect::Rect;
pub use shape::Shape;
pub use vec2::Vec2;

/// Cardinal directions.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Direction {
    /// Upward direction.
    Up,
    /// Downward direction.
    Down,
    /// Leftward direction.
    Left,
    /// Rightward direction.
    Right,
}

impl Direction {
    /// All four directions, clockwise from `Up`.
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Rotate clockwise by `n` quarter turns.
    pub fn rotate_right(self, n: usize) -> Self {
        Self::ALL[(self.index() + n) % 4]
    }

    /// Rotate counter-clockwise by `n` quarter turns.
    pub fn rotate_left(self, n: usize) -> Self {
        Self::ALL[(self.index() + 4 - n % 4) % 4]
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        self.rotate_right(2)
    }

    /// Unit step in screen coordinates (y grows downward).
    pub fn delta(self) -> Vec2 {
        match self {
            Self::Up => Vec2::new(0.0, -1.0),
            Self::Down => Vec2::new(0.0, 1.0),
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Right => Vec2::new(1.0, 0.0),
        }
    }

    /// Position in the clockwise ordering.
    fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Right => 1,
            Self::Down => 2,
            Self::Left => 3,
        }
    }
}
