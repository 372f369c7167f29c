//! Button widgets.

/// The clickable button state machine.
pub mod button;
/// Keyboard-navigable button grids.
pub mod group;
/// Button visuals.
pub mod visual;

pub use button::{ClickableButton, OnEnter, Status};
pub use group::{ButtonGroup, GridIndex, GroupConfig, NavKeys};
pub use visual::{AnimatedFill, DebugVisual, Visual};
