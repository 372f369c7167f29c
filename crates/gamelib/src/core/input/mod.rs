//! Frame-sampled input.
//!
//! The [`InputSampler`] turns the raw events delivered since the previous
//! frame into counters that are stable for the whole frame. Widgets read
//! those counters through the [`Input`] trait.
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    event::{Button, KeyCode},
    geom::Vec2,
};

/// Per-key press and release counters.
mod keyboard;
/// Pointer position, button counters and wheel.
mod pointer;
/// The sampler itself.
mod sampler;
/// Touch counters, primary position and pinch.
mod touch;

pub use sampler::InputSampler;

/// A debounce-then-repeat policy for held keys.
///
/// A key fires on its first pressed frame, stays silent until it has been
/// held for `delay` frames, then fires every `interval` frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LongPress {
    /// Frames a key must be held before auto-repeat starts.
    pub delay: u32,
    /// Frames between repeats once auto-repeat has started.
    pub interval: u32,
}

impl Default for LongPress {
    fn default() -> Self {
        Self {
            delay: 30,
            interval: 5,
        }
    }
}

impl LongPress {
    /// Construct a policy. A zero interval is replaced by 1.
    pub fn new(delay: u32, interval: u32) -> Self {
        Self { delay, interval }.normalized()
    }

    /// Replace a zero interval by 1, logging a warning.
    pub fn normalized(self) -> Self {
        if self.interval == 0 {
            warn!(delay = self.delay, "long-press interval of 0, using 1");
            Self {
                interval: 1,
                ..self
            }
        } else {
            self
        }
    }

    /// Does a key held for `count` frames fire on this frame?
    pub fn fires(&self, count: u32) -> bool {
        let interval = self.interval.max(1);
        count == 1 || (count >= self.delay && (count - self.delay) % interval == 0)
    }
}

/// Read-only, frame-stable view of the input state.
///
/// All counters are frame counts: a press counter is the number of
/// consecutive frames a key, button or touch has been held (0 while
/// released), and a release counter is the number of consecutive frames it
/// has been up (0 while held).
pub trait Input {
    /// Number of refreshes performed so far.
    fn frame(&self) -> u32;

    /// Consecutive pressed frames for `key`, or 0 if released.
    fn get(&self, key: &KeyCode) -> u32;

    /// Consecutive released frames for `key`, or 0 if pressed. Input counts
    /// as released for one frame before the first refresh, so a key that has
    /// never been pressed reports one more than the frame counter.
    fn get_release(&self, key: &KeyCode) -> u32;

    /// The largest press counter over `keys`. Used for one action bound to
    /// several keys.
    fn get_any(&self, keys: &[KeyCode]) -> u32 {
        keys.iter().map(|k| self.get(k)).max().unwrap_or(0)
    }

    /// The press counter of `key` on frames where `policy` fires, 0 otherwise.
    fn get_long_press(&self, key: &KeyCode, policy: LongPress) -> u32 {
        let count = self.get(key);
        if count > 0 && policy.fires(count) {
            count
        } else {
            0
        }
    }

    /// The pointer position.
    fn pointer_pos(&self) -> Vec2;

    /// Consecutive pressed frames for a pointer button.
    fn pointer_press(&self, button: Button) -> u32;

    /// Consecutive released frames for a pointer button.
    fn pointer_release(&self, button: Button) -> u32;

    /// Wheel steps this frame: positive for down, negative for up.
    fn wheel(&self) -> i32;

    /// The last known primary touch position. `None` until the first touch.
    fn touch_pos(&self) -> Option<Vec2>;

    /// Consecutive frames with at least one touch point down.
    fn touch_press(&self) -> u32;

    /// Consecutive frames with no touch point down.
    fn touch_release(&self) -> u32;

    /// Consecutive frames with exactly two touch points down.
    fn two_point_press(&self) -> u32;

    /// Consecutive frames without exactly two touch points down.
    fn two_point_release(&self) -> u32;

    /// Number of touch points currently down.
    fn touch_count(&self) -> usize;

    /// Displacement of the primary touch point since the previous frame.
    fn touch_move(&self) -> Vec2;

    /// Change of the distance between the first two touch points since the
    /// previous frame. 0 with fewer than two points.
    fn pinch_delta(&self) -> f64;
}
