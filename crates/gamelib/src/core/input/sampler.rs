use tracing::trace;

use super::{Input, keyboard::Keyboard, pointer::Pointer, touch::Touch};
use crate::{
    event::{Button, EventQueue, KeyCode, RawEvent},
    geom::Vec2,
};

/// Folds raw events into frame-granular counters.
///
/// `refresh` is the only point at which input state changes. Within one
/// frame the latest event for each key, button or touch list wins: a key
/// pressed and released between two refreshes is never seen as pressed.
/// Every input counts as released for one frame before the first refresh,
/// so a release counter only reads 1 after a real press.
#[derive(Debug)]
pub struct InputSampler {
    /// Refreshes performed.
    frame: u32,
    /// Key counters.
    keyboard: Keyboard,
    /// Pointer counters.
    pointer: Pointer,
    /// Touch counters.
    touch: Touch,
}

impl Default for InputSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSampler {
    /// A sampler that has seen no input.
    pub fn new() -> Self {
        Self {
            frame: 0,
            keyboard: Keyboard::default(),
            pointer: Pointer::new(),
            touch: Touch::new(),
        }
    }

    /// Drain `queue` and advance all counters by one frame.
    pub fn refresh(&mut self, queue: &EventQueue) {
        self.refresh_with(queue.drain());
    }

    /// Apply `events` in order and advance all counters by one frame.
    pub fn refresh_with(&mut self, events: impl IntoIterator<Item = RawEvent>) {
        self.pointer.begin();
        self.touch.begin();
        let mut n = 0usize;
        for e in events {
            self.apply(e);
            n += 1;
        }
        self.frame = self.frame.saturating_add(1);
        self.keyboard.tick();
        self.pointer.tick();
        self.touch.tick();
        trace!(frame = self.frame, events = n, "input refresh");
    }

    /// Apply one event to the physical state.
    fn apply(&mut self, event: RawEvent) {
        match event {
            RawEvent::KeyDown(k) => self.keyboard.key_down(k),
            RawEvent::KeyUp(k) => self.keyboard.key_up(&k),
            RawEvent::PointerDown(b) => self.pointer.set_button(b, true),
            RawEvent::PointerUp(b) => self.pointer.set_button(b, false),
            RawEvent::PointerMove(p) => self.pointer.pos = p,
            RawEvent::Wheel(d) => self.pointer.scroll(d),
            RawEvent::TouchStart(pts) => self.touch.start(&pts),
            RawEvent::TouchMove(pts) => self.touch.moved_to(&pts),
            RawEvent::TouchEnd(pts) => self.touch.end(&pts),
        }
    }

    /// Pin a key's counters at zero until it is enabled again.
    pub fn disable(&mut self, key: KeyCode) {
        self.keyboard.disable(key);
    }

    /// Re-enable a key. Counting resumes from its current physical state at
    /// the next refresh.
    pub fn enable(&mut self, key: &KeyCode) {
        self.keyboard.enable(key);
    }

    /// Is a key disabled?
    pub fn is_disabled(&self, key: &KeyCode) -> bool {
        self.keyboard.is_disabled(key)
    }

    /// Overwrite a key's press counter. The value is visible until the next
    /// refresh, which continues counting from it if the key is still held.
    pub fn override_count(&mut self, key: KeyCode, n: u32) {
        self.keyboard.override_press(key, n);
    }

    /// Add one to a key's press counter, as if it had been held for one
    /// more frame. Useful for nudging a held key onto its next long-press
    /// repeat.
    pub fn increment_count(&mut self, key: KeyCode) {
        self.keyboard.increment_press(key);
    }
}

impl Input for InputSampler {
    fn frame(&self) -> u32 {
        self.frame
    }

    fn get(&self, key: &KeyCode) -> u32 {
        self.keyboard.press(key)
    }

    fn get_release(&self, key: &KeyCode) -> u32 {
        self.keyboard.release(key, self.frame)
    }

    fn pointer_pos(&self) -> Vec2 {
        self.pointer.pos
    }

    fn pointer_press(&self, button: Button) -> u32 {
        self.pointer.press(button)
    }

    fn pointer_release(&self, button: Button) -> u32 {
        self.pointer.release(button)
    }

    fn wheel(&self) -> i32 {
        self.pointer.wheel
    }

    fn touch_pos(&self) -> Option<Vec2> {
        self.touch.primary
    }

    fn touch_press(&self) -> u32 {
        self.touch.press
    }

    fn touch_release(&self) -> u32 {
        self.touch.release
    }

    fn two_point_press(&self) -> u32 {
        self.touch.two_press
    }

    fn two_point_release(&self) -> u32 {
        self.touch.two_release
    }

    fn touch_count(&self) -> usize {
        self.touch.count
    }

    fn touch_move(&self) -> Vec2 {
        self.touch.moved
    }

    fn pinch_delta(&self) -> f64 {
        self.touch.pinch
    }
}
