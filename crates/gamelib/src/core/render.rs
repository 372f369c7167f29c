use crate::{
    error::Result,
    geom::{Rect, Vec2},
    style::Color,
};

/// A drawing context. Widgets draw through this trait and never touch a
/// platform surface directly; passing no canvas disables drawing entirely.
pub trait Canvas {
    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()>;
    /// Outline a rectangle.
    fn stroke_rect(&mut self, rect: Rect, color: Color) -> Result<()>;
    /// Draw text with its top-left corner at `pos`.
    fn text(&mut self, pos: Vec2, txt: &str, color: Color) -> Result<()>;
}
