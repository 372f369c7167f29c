//! Raw input events and the frame-bounded queue that carries them.
//!
//! Platform callbacks (or a backend reader thread) push [`RawEvent`]s into an
//! [`EventQueue`]. Nothing reacts to an event when it arrives: the queue is
//! drained exactly once per frame by the input sampler, which folds the
//! events into per-frame counters.
use std::sync::mpsc;

use crate::{
    error::{Error, Result},
    geom::Vec2,
};

/// Keyboard identifiers.
pub mod key;
/// Pointer buttons.
pub mod pointer;

pub use key::KeyCode;
pub use pointer::Button;

/// A single raw input signal as delivered by the platform.
#[derive(Debug, Clone, PartialEq)]
pub enum RawEvent {
    /// A key went down. Auto-repeat deliveries of an already-held key are
    /// harmless.
    KeyDown(KeyCode),
    /// A key was released.
    KeyUp(KeyCode),
    /// A pointer button went down.
    PointerDown(Button),
    /// A pointer button was released.
    PointerUp(Button),
    /// The pointer moved to an absolute position.
    PointerMove(Vec2),
    /// Wheel motion; positive values scroll down.
    Wheel(f64),
    /// Touches began. Carries the full current point list; index 0 is the
    /// primary point.
    TouchStart(Vec<Vec2>),
    /// Touches moved. Carries the full current point list.
    TouchMove(Vec<Vec2>),
    /// Touches ended. Carries the points still down after the change.
    TouchEnd(Vec<Vec2>),
}

/// A cloneable handle for delivering events into an [`EventQueue`] from
/// another thread.
#[derive(Debug, Clone)]
pub struct EventSender {
    /// Channel sender.
    tx: mpsc::Sender<RawEvent>,
}

impl EventSender {
    /// Deliver an event. Fails only if the queue has been dropped.
    pub fn send(&self, event: RawEvent) -> Result<()> {
        self.tx
            .send(event)
            .map_err(|e| Error::Backend(format!("event queue closed: {e}")))
    }
}

/// A frame-bounded queue of raw events.
#[derive(Debug)]
pub struct EventQueue {
    /// Sender retained so the channel never disconnects while the queue lives.
    tx: mpsc::Sender<RawEvent>,
    /// Receiver drained once per frame.
    rx: mpsc::Receiver<RawEvent>,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQueue {
    /// Construct an empty queue.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    /// A sender handle that can be moved to another thread.
    pub fn sender(&self) -> EventSender {
        EventSender {
            tx: self.tx.clone(),
        }
    }

    /// Enqueue an event from the loop thread.
    pub fn push(&self, event: RawEvent) {
        // The receiver lives in self, so the channel cannot be disconnected.
        self.tx.send(event).ok();
    }

    /// Take every event delivered so far, in arrival order.
    pub fn drain(&self) -> Vec<RawEvent> {
        self.rx.try_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn drain_preserves_order() {
        let q = EventQueue::new();
        q.push(RawEvent::KeyDown(KeyCode::ENTER));
        q.push(RawEvent::KeyUp(KeyCode::ENTER));
        assert_eq!(
            q.drain(),
            vec![
                RawEvent::KeyDown(KeyCode::ENTER),
                RawEvent::KeyUp(KeyCode::ENTER)
            ]
        );
        assert!(q.drain().is_empty());
    }

    #[test]
    fn sender_from_thread() {
        let q = EventQueue::new();
        let tx = q.sender();
        thread::spawn(move || {
            tx.send(RawEvent::Wheel(1.0)).unwrap();
        })
        .join()
        .unwrap();
        assert_eq!(q.drain(), vec![RawEvent::Wheel(1.0)]);
    }

    #[test]
    fn sender_fails_after_drop() {
        let q = EventQueue::new();
        let tx = q.sender();
        drop(q);
        assert!(tx.send(RawEvent::Wheel(1.0)).is_err());
    }
}
