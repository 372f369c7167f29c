use std::time::{Duration, Instant};

/// Measures the wall-clock time between frames.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameClock {
    /// Time of the previous tick.
    last: Option<Instant>,
    /// Delta measured by the most recent tick.
    delta: Duration,
}

impl FrameClock {
    /// A clock that has not ticked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame at `now` and return the time since the previous one.
    /// The first tick reports zero.
    pub fn tick(&mut self, now: Instant) -> Duration {
        self.delta = self
            .last
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last = Some(now);
        self.delta
    }

    /// The delta measured by the most recent tick.
    pub fn delta(&self) -> Duration {
        self.delta
    }
}
