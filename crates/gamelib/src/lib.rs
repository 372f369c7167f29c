//! gamelib: frame-driven input, widgets and animation for 2D games.
//!
//! Raw input arrives asynchronously as [`event::RawEvent`]s. Once per frame the
//! [`InputSampler`] folds everything delivered since the previous frame into
//! frame-granular counters, widgets read those counters to drive their state
//! machines, and the [`TweenScheduler`] advances running animations by the
//! measured wall-clock delta.
//!
//! # Quick Start
//!
//! The main entry points are:
//! - [`Runtime`] - owns the event queue, input sampler, tween scheduler and
//!   frame clock, and runs one frame in the required order
//! - [`widgets::ClickableButton`] - a single pointer/keyboard button
//! - [`widgets::ButtonGroup`] - a keyboard-navigable grid of buttons
//!
//! # Module Organization
//!
//! - [`geom`] - Geometry primitives and collision checks
//! - [`widgets`] - Button state machines and their visuals

#![warn(missing_docs)]

// Internal core module - re-export specific items below
mod core;

// Public modules
pub mod geom;
pub mod widgets;

#[cfg(any(test, feature = "testing"))]
pub use crate::core::testing;
// Re-export core runtime types
pub use crate::core::{
    DebugTimer, FrameClock, Input, InputSampler, LongPress, Runtime,
    tween::{Animated, Easing, Lerp, TweenId, TweenScheduler},
};
pub use crate::core::{backend, error, event, math, render, style, timer, tween};
