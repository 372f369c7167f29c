use std::time::{Duration, Instant};

use crate::{
    Runtime,
    core::input::InputSampler,
    event::{Button, KeyCode, RawEvent},
    geom::Vec2,
};

/// Drives a [`Runtime`] one frame at a time on a synthetic clock.
///
/// Input helpers queue raw events for the next frame; [`Harness::frame`]
/// then runs the frame with a fixed time step so tweens advance
/// deterministically.
#[derive(Debug)]
pub struct Harness {
    /// The runtime under test.
    pub rt: Runtime,
    /// Synthetic time of the next frame.
    now: Instant,
    /// Time between frames.
    step: Duration,
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

impl Harness {
    /// A harness stepping 1/60th of a second per frame.
    pub fn new() -> Self {
        Self::with_step(Duration::from_micros(16_667))
    }

    /// A harness with a custom frame step.
    pub fn with_step(step: Duration) -> Self {
        Self {
            rt: Runtime::new(),
            now: Instant::now(),
            step,
        }
    }

    /// The input state of the last frame.
    pub fn input(&self) -> &InputSampler {
        self.rt.input()
    }

    /// Queue a raw event for the next frame.
    pub fn push(&mut self, event: RawEvent) -> &mut Self {
        self.rt.push(event);
        self
    }

    /// Queue a key press.
    pub fn key_down(&mut self, key: KeyCode) -> &mut Self {
        self.push(RawEvent::KeyDown(key))
    }

    /// Queue a key release.
    pub fn key_up(&mut self, key: KeyCode) -> &mut Self {
        self.push(RawEvent::KeyUp(key))
    }

    /// Queue a pointer move.
    pub fn pointer(&mut self, x: f64, y: f64) -> &mut Self {
        self.push(RawEvent::PointerMove(Vec2::new(x, y)))
    }

    /// Queue a primary button press.
    pub fn press(&mut self) -> &mut Self {
        self.push(RawEvent::PointerDown(Button::Primary))
    }

    /// Queue a primary button release.
    pub fn release(&mut self) -> &mut Self {
        self.push(RawEvent::PointerUp(Button::Primary))
    }

    /// Queue a touch start with the given points.
    pub fn touch_start(&mut self, points: &[(f64, f64)]) -> &mut Self {
        self.push(RawEvent::TouchStart(to_points(points)))
    }

    /// Queue a touch move with the given points.
    pub fn touch_move(&mut self, points: &[(f64, f64)]) -> &mut Self {
        self.push(RawEvent::TouchMove(to_points(points)))
    }

    /// Queue a touch end leaving the given points down.
    pub fn touch_end(&mut self, points: &[(f64, f64)]) -> &mut Self {
        self.push(RawEvent::TouchEnd(to_points(points)))
    }

    /// Run one frame with `f` as the update step.
    pub fn frame<R>(&mut self, f: impl FnOnce(&mut Runtime) -> R) -> R {
        let r = self.rt.frame(self.now, f);
        self.now += self.step;
        r
    }

    /// Run `n` frames with no update step.
    pub fn idle(&mut self, n: usize) {
        for _ in 0..n {
            self.frame(|_| ());
        }
    }
}

/// Convert coordinate pairs into points.
fn to_points(points: &[(f64, f64)]) -> Vec<Vec2> {
    points.iter().copied().map(Vec2::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::Input;

    #[test]
    fn queued_input_lands_on_next_frame() {
        let mut h = Harness::new();
        h.key_down(KeyCode::SPACE).pointer(4.0, 5.0);
        assert_eq!(h.input().get(&KeyCode::SPACE), 0);
        h.idle(3);
        assert_eq!(h.input().get(&KeyCode::SPACE), 3);
        assert_eq!(h.input().pointer_pos(), Vec2::new(4.0, 5.0));
        assert_eq!(h.input().frame(), 3);
    }
}
