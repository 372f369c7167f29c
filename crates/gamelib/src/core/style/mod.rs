//! Colour values.

/// The RGBA colour type and its named palette.
mod color;

pub use color::{CHANNEL_MAX, Color};
