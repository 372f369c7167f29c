use std::collections::{HashMap, HashSet};

use crate::event::KeyCode;

/// Press and release counters for one key.
#[derive(Debug, Default, Clone, Copy)]
struct Counter {
    /// Consecutive pressed frames.
    press: u32,
    /// Consecutive released frames.
    release: u32,
}

/// Keyboard state: physical key flags plus per-frame counters.
#[derive(Debug, Default)]
pub(super) struct Keyboard {
    /// Keys physically down, latest event wins.
    down: HashSet<KeyCode>,
    /// Counters for every key seen so far.
    counters: HashMap<KeyCode, Counter>,
    /// Keys whose counters are pinned at zero.
    disabled: HashSet<KeyCode>,
}

impl Keyboard {
    /// Record a key going down.
    pub(super) fn key_down(&mut self, key: KeyCode) {
        self.down.insert(key);
    }

    /// Record a key going up.
    pub(super) fn key_up(&mut self, key: &KeyCode) {
        self.down.remove(key);
    }

    /// Advance every counter by one frame.
    pub(super) fn tick(&mut self) {
        for k in &self.down {
            self.counters.entry(k.clone()).or_default();
        }
        for (k, c) in &mut self.counters {
            if self.disabled.contains(k) {
                *c = Counter::default();
            } else if self.down.contains(k) {
                c.press = c.press.saturating_add(1);
                c.release = 0;
            } else {
                c.press = 0;
                c.release = c.release.saturating_add(1);
            }
        }
    }

    /// Pressed frames for a key.
    pub(super) fn press(&self, key: &KeyCode) -> u32 {
        self.counters.get(key).map_or(0, |c| c.press)
    }

    /// Released frames for a key. A key never seen has been up since before
    /// the first frame.
    pub(super) fn release(&self, key: &KeyCode, frame: u32) -> u32 {
        if self.disabled.contains(key) {
            return 0;
        }
        self.counters.get(key).map_or(frame.saturating_add(1), |c| c.release)
    }

    /// Pin a key's counters at zero.
    pub(super) fn disable(&mut self, key: KeyCode) {
        if let Some(c) = self.counters.get_mut(&key) {
            *c = Counter::default();
        }
        self.disabled.insert(key);
    }

    /// Resume counting a key from its current physical state.
    pub(super) fn enable(&mut self, key: &KeyCode) {
        self.disabled.remove(key);
    }

    /// Is a key disabled?
    pub(super) fn is_disabled(&self, key: &KeyCode) -> bool {
        self.disabled.contains(key)
    }

    /// The counters for a key, created as released if never seen.
    fn counter_mut(&mut self, key: KeyCode) -> &mut Counter {
        self.counters.entry(key).or_insert(Counter {
            press: 0,
            release: 1,
        })
    }

    /// Overwrite a key's press counter.
    pub(super) fn override_press(&mut self, key: KeyCode, n: u32) {
        let c = self.counter_mut(key);
        c.press = n;
        if n > 0 {
            c.release = 0;
        }
    }

    /// Add one to a key's press counter.
    pub(super) fn increment_press(&mut self, key: KeyCode) {
        let c = self.counter_mut(key);
        c.press = c.press.saturating_add(1);
        c.release = 0;
    }
}
