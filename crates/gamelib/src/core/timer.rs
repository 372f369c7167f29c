use std::time::{Duration, Instant};

use tracing::debug;

use crate::{
    error::Result,
    geom::{Rect, Vec2},
    render::Canvas,
    style::Color,
};

/// Frame time above which the total is flagged: one frame at 60 fps.
pub const FRAME_BUDGET: Duration = Duration::from_micros(16_667);

/// Name given to the total when [`DebugTimer::stop_frame`] is not given one.
const TOTAL: &str = "total";

/// Height of one overlay line in canvas units.
const LINE_HEIGHT: f64 = 1.0;

/// Width of the value column in canvas units.
const VALUE_WIDTH: f64 = 12.0;

/// Measures named blocks within a frame and shows them as an overlay.
///
/// A frame is bracketed by [`start_frame`](Self::start_frame) and
/// [`stop_frame`](Self::stop_frame). Each [`step_frame`](Self::step_frame)
/// in between closes the running block and opens a new one, so the name
/// passed to a checkpoint labels the block that starts there.
#[derive(Debug, Clone, Default)]
pub struct DebugTimer {
    /// Top-left corner of the overlay.
    pub pos: Vec2,
    /// Checkpoints of the current frame, in order.
    marks: Vec<(String, Instant)>,
}

impl DebugTimer {
    /// A timer with its overlay at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// A timer with its overlay at `pos`.
    pub fn with_pos(pos: Vec2) -> Self {
        Self {
            pos,
            ..Self::default()
        }
    }

    /// Forget the previous frame and open the first block.
    pub fn start_frame(&mut self, name: impl Into<String>) {
        self.start_frame_at(name, Instant::now());
    }

    /// [`start_frame`](Self::start_frame) at an explicit time.
    pub fn start_frame_at(&mut self, name: impl Into<String>, now: Instant) {
        self.marks.clear();
        self.marks.push((name.into(), now));
    }

    /// Close the running block and open the next one.
    pub fn step_frame(&mut self, name: impl Into<String>) {
        self.step_frame_at(name, Instant::now());
    }

    /// [`step_frame`](Self::step_frame) at an explicit time.
    pub fn step_frame_at(&mut self, name: impl Into<String>, now: Instant) {
        self.marks.push((name.into(), now));
    }

    /// Close the last block. `name` labels the frame total.
    pub fn stop_frame(&mut self, name: Option<&str>) {
        self.stop_frame_at(name, Instant::now());
    }

    /// [`stop_frame`](Self::stop_frame) at an explicit time.
    pub fn stop_frame_at(&mut self, name: Option<&str>, now: Instant) {
        self.step_frame_at(name.unwrap_or(TOTAL), now);
    }

    /// Each closed block with its duration, in order.
    pub fn blocks(&self) -> Vec<(&str, Duration)> {
        self.marks
            .windows(2)
            .map(|w| (w[0].0.as_str(), w[1].1.saturating_duration_since(w[0].1)))
            .collect()
    }

    /// Time from the first to the last checkpoint, once two exist.
    pub fn total(&self) -> Option<Duration> {
        match (self.marks.first(), self.marks.last()) {
            (Some(first), Some(last)) if self.marks.len() >= 2 => {
                Some(last.1.saturating_duration_since(first.1))
            }
            _ => None,
        }
    }

    /// Frames per second implied by the total, or 0 before a frame has
    /// been measured.
    pub fn frame_rate(&self) -> f64 {
        match self.total() {
            Some(t) if !t.is_zero() => 1.0 / t.as_secs_f64(),
            _ => 0.0,
        }
    }

    /// Did the measured frame exceed [`FRAME_BUDGET`]?
    pub fn over_budget(&self) -> bool {
        self.total().is_some_and(|t| t > FRAME_BUDGET)
    }

    /// The overlay as `(label, value)` rows.
    ///
    /// Individual blocks are listed only when there are at least two, since
    /// a single block equals the total. The total is labelled with the name
    /// given to [`stop_frame`](Self::stop_frame).
    pub fn report(&self, show_fps: bool) -> Vec<(String, String)> {
        let mut rows = Vec::new();
        if self.marks.len() >= 3 {
            for (name, d) in self.blocks() {
                rows.push((name.to_string(), millis(d)));
            }
        }
        if let (Some(total), Some((name, _))) = (self.total(), self.marks.last()) {
            rows.push((name.clone(), millis(total)));
        }
        if show_fps {
            rows.push(("frame rate".into(), format!("{:.0} fps", self.frame_rate())));
        }
        rows
    }

    /// Draw the overlay: a translucent backdrop with one row per block. The
    /// total and frame rate turn red when over budget. Without a canvas the
    /// rows are logged instead.
    pub fn draw(&self, canvas: Option<&mut dyn Canvas>, show_fps: bool) -> Result<()> {
        let rows = self.report(show_fps);
        let Some(canvas) = canvas else {
            for (label, value) in &rows {
                debug!(%label, %value, "frame timing");
            }
            return Ok(());
        };

        let label_width = rows
            .iter()
            .map(|(l, _)| l.chars().count())
            .max()
            .unwrap_or(0) as f64
            + 2.0;
        let br = self.pos
            + Vec2::new(
                label_width + VALUE_WIDTH,
                LINE_HEIGHT * rows.len() as f64,
            );
        canvas.fill_rect(Rect::from_corners(self.pos, br), Color::BLACK.with_a(0.5))?;

        let blocks = if self.marks.len() >= 3 {
            self.marks.len() - 1
        } else {
            0
        };
        let alert = if self.over_budget() {
            Color::P_RED
        } else {
            Color::WHITE
        };
        for (i, (label, value)) in rows.iter().enumerate() {
            let color = if i < blocks { Color::WHITE } else { alert };
            let y = self.pos.y + LINE_HEIGHT * i as f64;
            canvas.text(Vec2::new(self.pos.x + 1.0, y), label, color)?;
            canvas.text(Vec2::new(self.pos.x + label_width, y), value, color)?;
        }
        Ok(())
    }
}

/// A duration in milliseconds with three decimals.
fn millis(d: Duration) -> String {
    format!("{:.3}", d.as_secs_f64() * 1000.0)
}
