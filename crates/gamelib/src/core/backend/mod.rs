/// Crossterm backend implementation.
pub mod crossterm;

use crate::{Runtime, error::Result, render::Canvas};

/// What the runloop should do after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Run another frame.
    Continue,
    /// Leave the loop.
    Exit,
}

/// An application driven one frame at a time by a backend runloop.
pub trait App {
    /// Update game state. Input has been refreshed for this frame; tweens
    /// advance after this returns.
    fn update(&mut self, rt: &mut Runtime) -> Result<Flow>;

    /// Draw the current state.
    fn draw(&self, canvas: &mut dyn Canvas) -> Result<()>;
}
