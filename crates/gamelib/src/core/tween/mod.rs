//! Time-based interpolation.
//!
//! A tween moves an [`Animated`] value from wherever it is when the tween
//! first runs to a destination over a wall-clock duration. The
//! [`TweenScheduler`] advances every running tween once per frame and drops
//! each one on the frame it completes.
use std::{fmt, time::Duration};

use tracing::debug;

/// Easing curves.
mod easing;
/// The interpolation capability and the shared value handle.
mod lerp;

pub use easing::Easing;
pub use lerp::{Angle, Animated, Lerp};

/// Identifies a tween registered with a [`TweenScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenId(u64);

/// A running tween with its value type erased.
trait Task {
    /// The tween's id.
    fn id(&self) -> TweenId;
    /// Advance by `dt`. Returns false once complete.
    fn advance(&mut self, dt: Duration) -> bool;
}

/// One interpolation task.
struct Tween<T: Lerp> {
    /// Id handed out at registration.
    id: TweenId,
    /// The value written on every advance.
    target: Animated<T>,
    /// Starting value, captured on the first advance.
    from: Option<T>,
    /// Destination value.
    dest: T,
    /// Total duration.
    duration: Duration,
    /// Time advanced so far.
    elapsed: Duration,
    /// Progress curve.
    easing: Easing,
}

impl<T: Lerp> Task for Tween<T> {
    fn id(&self) -> TweenId {
        self.id
    }

    fn advance(&mut self, dt: Duration) -> bool {
        let target = &self.target;
        let from = self.from.get_or_insert_with(|| target.get());
        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.target.set(self.dest.clone());
            return false;
        }
        let t = self
            .easing
            .ease(self.elapsed.as_secs_f64() / self.duration.as_secs_f64());
        self.target.set(from.lerp(&self.dest, t));
        true
    }
}

/// The registry of running tweens.
#[derive(Default)]
pub struct TweenScheduler {
    /// Running tasks in registration order.
    tasks: Vec<Box<dyn Task>>,
    /// Next id to hand out.
    next_id: u64,
}

impl fmt::Debug for TweenScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TweenScheduler")
            .field("running", &self.tasks.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl TweenScheduler {
    /// An empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Animate `target` to `dest` over `duration` with the default easing.
    pub fn animate<T: Lerp + 'static>(
        &mut self,
        target: &Animated<T>,
        dest: T,
        duration: Duration,
    ) -> TweenId {
        self.animate_with(target, dest, duration, Easing::default())
    }

    /// Animate `target` to `dest` over `duration` along `easing`.
    ///
    /// Only the destination and duration are captured now; the starting
    /// value is read on the first [`advance`](Self::advance), so changes
    /// made to `target` before then are animated from.
    pub fn animate_with<T: Lerp + 'static>(
        &mut self,
        target: &Animated<T>,
        dest: T,
        duration: Duration,
        easing: Easing,
    ) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Box::new(Tween {
            id,
            target: target.clone(),
            from: None,
            dest,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }));
        id
    }

    /// Advance every running tween by `dt`, dropping those that complete.
    pub fn advance(&mut self, dt: Duration) {
        self.tasks.retain_mut(|t| {
            let running = t.advance(dt);
            if !running {
                debug!(id = ?t.id(), "tween complete");
            }
            running
        });
    }

    /// Is a tween still running?
    pub fn is_running(&self, id: TweenId) -> bool {
        self.tasks.iter().any(|t| t.id() == id)
    }

    /// Number of running tweens.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Are there no running tweens?
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{geom::Vec2, style::Color};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn completes_exactly() {
        let mut s = TweenScheduler::new();
        let v = Animated::new(0.0);
        let id = s.animate(&v, 1.0 / 3.0, ms(100));
        s.advance(ms(40));
        assert!(s.is_running(id));
        let mid = v.get();
        assert!(mid > 0.0 && mid < 1.0 / 3.0);
        s.advance(ms(60));
        assert!(!s.is_running(id));
        assert_eq!(v.get(), 1.0 / 3.0);
        assert!(s.is_empty());
    }

    #[test]
    fn zero_duration_completes_on_first_advance() {
        let mut s = TweenScheduler::new();
        let v = Animated::new(Vec2::zero());
        s.animate(&v, Vec2::new(3.0, 4.0), Duration::ZERO);
        assert_eq!(s.len(), 1);
        s.advance(Duration::ZERO);
        assert_eq!(v.get(), Vec2::new(3.0, 4.0));
        assert!(s.is_empty());
    }

    #[test]
    fn start_is_captured_lazily() {
        let mut s = TweenScheduler::new();
        let v = Animated::new(0.0);
        s.animate_with(&v, 10.0, ms(1000), Easing::Linear);
        v.set(8.0);
        s.advance(ms(500));
        assert!((v.get() - 9.0).abs() < 1e-9);
    }

    #[test]
    fn independent_tasks() {
        let mut s = TweenScheduler::new();
        let a = Animated::new(Color::BLACK);
        let b = Animated::new(0.0);
        let ia = s.animate(&a, Color::WHITE, ms(10));
        let ib = s.animate(&b, 1.0, ms(1000));
        assert_ne!(ia, ib);
        s.advance(ms(20));
        assert_eq!(a.get(), Color::WHITE);
        assert!(!s.is_running(ia));
        assert!(s.is_running(ib));
    }

    proptest! {
        #[test]
        fn lands_on_destination(
            start in -1e6f64..1e6,
            dest in -1e6f64..1e6,
            duration in 1u64..2000,
            steps in proptest::collection::vec(1u64..50, 1..200),
        ) {
            let mut s = TweenScheduler::new();
            let v = Animated::new(start);
            let id = s.animate(&v, dest, ms(duration));
            let mut elapsed = 0;
            for step in steps {
                s.advance(ms(step));
                elapsed += step;
                if elapsed >= duration {
                    break;
                }
            }
            if elapsed >= duration {
                prop_assert_eq!(v.get(), dest);
                prop_assert!(!s.is_running(id));
            } else {
                prop_assert!(s.is_running(id));
            }
        }
    }
}
