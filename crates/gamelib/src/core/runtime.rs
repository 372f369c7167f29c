use std::time::{Duration, Instant};

use tracing::trace;

use crate::core::{
    clock::FrameClock,
    event::{EventQueue, EventSender, RawEvent},
    input::InputSampler,
    tween::TweenScheduler,
};

/// The explicit per-application context for the frame loop.
///
/// A runtime owns the raw event queue, the input sampler, the tween scheduler
/// and the frame clock. Each frame must, in order, refresh input, run widget
/// updates, and advance tweens by the measured delta. [`Runtime::frame`]
/// performs that sequence around a closure; [`Runtime::begin_frame`] and
/// [`Runtime::end_frame`] expose the two halves separately.
#[derive(Debug, Default)]
pub struct Runtime {
    /// Raw events waiting for the next refresh.
    events: EventQueue,
    /// Frame-sampled input.
    input: InputSampler,
    /// Running tweens.
    tweens: TweenScheduler,
    /// Wall-clock frame timing.
    clock: FrameClock,
}

impl Runtime {
    /// A runtime with no pending input and no running tweens.
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle for delivering events from another thread.
    pub fn sender(&self) -> EventSender {
        self.events.sender()
    }

    /// Queue an event for the next frame.
    pub fn push(&self, event: RawEvent) {
        self.events.push(event);
    }

    /// The input state for the current frame.
    pub fn input(&self) -> &InputSampler {
        &self.input
    }

    /// Mutable access to the sampler, e.g. to disable keys.
    pub fn input_mut(&mut self) -> &mut InputSampler {
        &mut self.input
    }

    /// The tween scheduler.
    pub fn tweens(&self) -> &TweenScheduler {
        &self.tweens
    }

    /// Mutable access to the tween scheduler, to start tweens.
    pub fn tweens_mut(&mut self) -> &mut TweenScheduler {
        &mut self.tweens
    }

    /// Borrow the input state and the scheduler at the same time.
    pub fn split(&mut self) -> (&InputSampler, &mut TweenScheduler) {
        (&self.input, &mut self.tweens)
    }

    /// The delta measured at the start of the current frame.
    pub fn delta(&self) -> Duration {
        self.clock.delta()
    }

    /// Start a frame at `now`: measure the delta and refresh input from the
    /// queued events.
    pub fn begin_frame(&mut self, now: Instant) -> Duration {
        let delta = self.clock.tick(now);
        self.input.refresh(&self.events);
        trace!(?delta, "begin frame");
        delta
    }

    /// Finish a frame: advance tweens by the delta measured in
    /// [`begin_frame`](Self::begin_frame).
    pub fn end_frame(&mut self) {
        self.tweens.advance(self.clock.delta());
    }

    /// Run one complete frame with `f` as the update step.
    pub fn frame<R>(&mut self, now: Instant, f: impl FnOnce(&mut Self) -> R) -> R {
        self.begin_frame(now);
        let r = f(self);
        self.end_frame();
        r
    }
}
