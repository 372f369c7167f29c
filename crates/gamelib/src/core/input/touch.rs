use crate::geom::Vec2;

/// Distance between the first two points, or 0 with fewer than two.
fn spread(points: &[Vec2]) -> f64 {
    match points {
        [a, b, ..] => a.distance(*b),
        _ => 0.0,
    }
}

/// Touch state. The first point of each platform point list is the primary
/// point; points have no persistent identity.
#[derive(Debug, Default)]
pub(super) struct Touch {
    /// Number of points currently down.
    pub(super) count: usize,
    /// Last known primary position, kept after the last touch ends.
    pub(super) primary: Option<Vec2>,
    /// Primary position that this frame's movement is measured from.
    anchor: Vec2,
    /// Primary displacement this frame.
    pub(super) moved: Vec2,
    /// Current distance between the first two points.
    distance: f64,
    /// Distance that this frame's pinch is measured from.
    anchor_distance: f64,
    /// Distance change this frame.
    pub(super) pinch: f64,
    /// Consecutive frames with a touch down.
    pub(super) press: u32,
    /// Consecutive frames with no touch down.
    pub(super) release: u32,
    /// Consecutive frames with exactly two points down.
    pub(super) two_press: u32,
    /// Consecutive frames without exactly two points down.
    pub(super) two_release: u32,
}

impl Touch {
    /// Touch state with no point down before the first frame.
    pub(super) fn new() -> Self {
        Self {
            release: 1,
            two_release: 1,
            ..Self::default()
        }
    }

    /// Anchor movement and pinch at the state left by the previous frame.
    pub(super) fn begin(&mut self) {
        self.anchor = self.primary.unwrap_or_default();
        self.anchor_distance = self.distance;
    }

    /// Re-anchor at the given points so that no jump is reported.
    fn reanchor(&mut self, points: &[Vec2]) {
        if let Some(p) = points.first() {
            self.anchor = *p;
        }
        self.anchor_distance = spread(points);
    }

    /// Touches began.
    pub(super) fn start(&mut self, points: &[Vec2]) {
        self.count = points.len();
        if let Some(p) = points.first() {
            self.primary = Some(*p);
        }
        self.distance = spread(points);
        self.reanchor(points);
    }

    /// Touches moved.
    pub(super) fn moved_to(&mut self, points: &[Vec2]) {
        if points.len() != self.count {
            self.reanchor(points);
        }
        self.count = points.len();
        if let Some(p) = points.first() {
            self.primary = Some(*p);
        }
        self.distance = spread(points);
    }

    /// Touches ended; `points` are the ones still down.
    pub(super) fn end(&mut self, points: &[Vec2]) {
        self.count = points.len();
        if let Some(p) = points.first() {
            // The remaining point becomes primary without a jump.
            self.primary = Some(*p);
        }
        self.distance = spread(points);
        self.reanchor(points);
        if points.is_empty() {
            self.anchor = self.primary.unwrap_or_default();
        }
    }

    /// Fold this frame's changes into the counters.
    pub(super) fn tick(&mut self) {
        self.moved = self.primary.unwrap_or_default() - self.anchor;
        self.pinch = if self.count >= 2 {
            self.distance - self.anchor_distance
        } else {
            0.0
        };
        if self.count > 0 {
            self.press = self.press.saturating_add(1);
            self.release = 0;
        } else {
            self.press = 0;
            self.release = self.release.saturating_add(1);
        }
        if self.count == 2 {
            self.two_press = self.two_press.saturating_add(1);
            self.two_release = 0;
        } else {
            self.two_press = 0;
            self.two_release = self.two_release.saturating_add(1);
        }
    }
}
