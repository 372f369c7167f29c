//! Core types for the gamelib frame loop.

/// Backend implementations.
pub mod backend;
/// Frame timing.
pub mod clock;
/// Core error types.
pub mod error;
/// Raw input event types and the frame-bounded queue.
pub mod event;
/// Frame-sampled input state.
pub mod input;
/// Numeric helpers.
pub mod math;
/// Drawing interfaces.
pub mod render;
/// The explicit per-application runtime context.
pub mod runtime;
/// Colour values.
pub mod style;
/// Testing utilities.
#[cfg(any(test, feature = "testing"))]
pub mod testing;
/// Per-frame processing time measurement.
pub mod timer;
/// Time-based interpolation.
pub mod tween;

pub use clock::FrameClock;
pub use input::{Input, InputSampler, LongPress};
pub use runtime::Runtime;
pub use timer::DebugTimer;
