use crate::{event::Button, geom::Vec2};

/// Pointer state: position, per-button counters and the wheel.
#[derive(Debug, Default)]
pub(super) struct Pointer {
    /// Last reported position.
    pub(super) pos: Vec2,
    /// Physical button flags, latest event wins.
    down: [bool; 3],
    /// Consecutive pressed frames per button.
    press: [u32; 3],
    /// Consecutive released frames per button.
    release: [u32; 3],
    /// Wheel steps delivered this frame.
    pub(super) wheel: i32,
}

impl Pointer {
    /// Pointer state with every button released before the first frame.
    pub(super) fn new() -> Self {
        Self {
            release: [1; 3],
            ..Self::default()
        }
    }

    /// Reset per-frame accumulators before events are applied.
    pub(super) fn begin(&mut self) {
        self.wheel = 0;
    }

    /// Record a button change.
    pub(super) fn set_button(&mut self, button: Button, down: bool) {
        self.down[button.index()] = down;
    }

    /// Record one wheel event.
    pub(super) fn scroll(&mut self, delta: f64) {
        if delta > 0.0 {
            self.wheel += 1;
        } else if delta < 0.0 {
            self.wheel -= 1;
        }
    }

    /// Advance the button counters by one frame.
    pub(super) fn tick(&mut self) {
        let counters = self.press.iter_mut().zip(self.release.iter_mut());
        for (down, (press, release)) in self.down.iter().zip(counters) {
            if *down {
                *press = press.saturating_add(1);
                *release = 0;
            } else {
                *press = 0;
                *release = release.saturating_add(1);
            }
        }
    }

    /// Pressed frames for a button.
    pub(super) fn press(&self, button: Button) -> u32 {
        self.press[button.index()]
    }

    /// Released frames for a button.
    pub(super) fn release(&self, button: Button) -> u32 {
        self.release[button.index()]
    }
}
