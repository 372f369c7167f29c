//! Pluggable button visuals.
use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use super::button::{ClickableButton, Status};
use crate::{error::Result, geom::Vec2, render::Canvas, style::Color};

/// How a button looks. Visuals see the button's status after each update
/// and draw it on request; they never affect the state machine.
pub trait Visual: Debug {
    /// Called once per frame after the status has settled.
    fn update(&mut self, _status: Status, _count: u32) {}

    /// Draw `button`.
    fn draw(&self, button: &ClickableButton, canvas: &mut dyn Canvas) -> Result<()>;
}

/// Draw the label centred in the button.
fn draw_label(button: &ClickableButton, canvas: &mut dyn Canvas, color: Color) -> Result<()> {
    if let Some(label) = button.label() {
        let c = button.rect().center;
        let half = label.chars().count() as f64 / 2.0;
        canvas.text(Vec2::new((c.x - half).floor(), c.y.floor()), label, color)?;
    }
    Ok(())
}

/// Outline visual: white, pastel yellow on hover, pastel green while
/// pressed, gray while locked.
#[derive(Debug, Default, Clone, Copy)]
pub struct DebugVisual;

impl Visual for DebugVisual {
    fn draw(&self, button: &ClickableButton, canvas: &mut dyn Canvas) -> Result<()> {
        let color = if button.is_locked() {
            Color::GRAY
        } else if button.is_click() {
            Color::P_GREEN
        } else if button.is_hover() {
            Color::P_YELLOW
        } else {
            Color::WHITE
        };
        canvas.stroke_rect(button.rect(), color)?;
        draw_label(button, canvas, color)
    }
}

/// A fill colour that steps towards a status-dependent target every frame.
///
/// The target is the base colour at full opacity while active, at `faint`
/// opacity while inactive, and the base merged with black while pressed.
/// The fill moves by `step` channel units per frame, independent of wall
/// time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatedFill {
    /// Base colour.
    pub base: Color,
    /// Per-frame channel step.
    pub step: f64,
    /// Opacity while inactive.
    pub faint: f64,
    /// Current fill; starts at the inactive target.
    #[serde(skip)]
    fill: Option<Color>,
}

impl Default for AnimatedFill {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

impl AnimatedFill {
    /// A fill based on `base` with the default step.
    pub fn new(base: Color) -> Self {
        Self {
            base,
            step: 25.5,
            faint: 0.2,
            fill: None,
        }
    }

    /// Build with a different per-frame step.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// The target colour for a status.
    pub fn target(&self, status: Status) -> Color {
        match status {
            Status::ClickStart | Status::Click => self.base.merge(&[Color::BLACK]).with_a(1.0),
            s if s.is_active() => self.base.with_a(1.0),
            _ => self.base.with_a(self.faint),
        }
    }

    /// The current fill.
    pub fn fill(&self) -> Color {
        self.fill.unwrap_or_else(|| self.target(Status::Normal))
    }
}

impl Visual for AnimatedFill {
    fn update(&mut self, status: Status, _count: u32) {
        let dest = self.target(status);
        self.fill = Some(self.fill().approach(&dest, self.step));
    }

    fn draw(&self, button: &ClickableButton, canvas: &mut dyn Canvas) -> Result<()> {
        canvas.fill_rect(button.rect(), self.fill())?;
        canvas.stroke_rect(button.rect(), self.base)?;
        draw_label(button, canvas, Color::WHITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_steps_towards_target() {
        let mut v = AnimatedFill::new(Color::WHITE).with_step(51.0);
        assert_eq!(v.fill(), Color::WHITE.with_a(0.2));
        v.update(Status::Hover, 0);
        assert_eq!(v.fill(), Color::WHITE.with_a(0.4));
        for _ in 0..10 {
            v.update(Status::Hover, 0);
        }
        assert_eq!(v.fill(), Color::WHITE);
        v.update(Status::Click, 0);
        assert_eq!(v.fill(), Color::new(204.0, 204.0, 204.0));
    }

    #[test]
    fn targets() {
        let v = AnimatedFill::new(Color::new(100.0, 50.0, 0.0));
        assert_eq!(v.target(Status::Enter), Color::new(100.0, 50.0, 0.0));
        assert_eq!(v.target(Status::ClickStart), Color::new(50.0, 25.0, 0.0));
        assert_eq!(v.target(Status::ClickLeave).a, 0.2);
    }

    #[test]
    fn config_from_json() {
        let v: AnimatedFill = serde_json::from_str(r#"{"base": {"r": 1, "g": 2, "b": 3}}"#).unwrap();
        assert_eq!(v.base, Color::new(1.0, 2.0, 3.0));
        assert_eq!(v.step, 25.5);
    }
}
