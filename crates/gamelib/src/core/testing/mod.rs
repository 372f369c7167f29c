/// Recording drawing context.
pub mod canvas;
/// Frame-stepping harness.
pub mod harness;

pub use canvas::{DrawCall, RecordingCanvas};
pub use harness::Harness;
