use crate::{
    error::Result,
    geom::{Rect, Vec2},
    render::Canvas,
    style::Color,
};

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    /// A filled rectangle.
    FillRect(Rect, Color),
    /// A rectangle outline.
    StrokeRect(Rect, Color),
    /// Text at a position.
    Text(Vec2, String, Color),
}

/// A canvas that records every call instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    /// Calls in the order they were made.
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    /// An empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// All text drawn, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text(_, t, _) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Colour of the last outline drawn for `rect`.
    pub fn stroke_color(&self, rect: Rect) -> Option<Color> {
        self.calls.iter().rev().find_map(|c| match c {
            DrawCall::StrokeRect(r, color) if *r == rect => Some(*color),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()> {
        self.calls.push(DrawCall::FillRect(rect, color));
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) -> Result<()> {
        self.calls.push(DrawCall::StrokeRect(rect, color));
        Ok(())
    }

    fn text(&mut self, pos: Vec2, txt: &str, color: Color) -> Result<()> {
        self.calls.push(DrawCall::Text(pos, txt.to_string(), color));
        Ok(())
    }
}
