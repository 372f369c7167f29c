//! The clickable button state machine.
use std::fmt;

use tracing::trace;

use super::visual::{DebugVisual, Visual};
use crate::{
    Input,
    error::Result,
    event::Button,
    geom::{Rect, Shape, Vec2, collision},
    render::Canvas,
};

/// The interaction phase of a button. Every phase except [`Status::Normal`]
/// is re-evaluated each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    /// Not interacted with.
    #[default]
    Normal,
    /// First frame of hover.
    HoverStart,
    /// Hovered or focused.
    Hover,
    /// First frame of a press on the button.
    ClickStart,
    /// Held down on the button.
    Click,
    /// Released on the button: the button was actuated this frame.
    Enter,
    /// Dragged off the button while held.
    ClickLeave,
}

impl Status {
    /// Hovered, pressed or entered.
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Normal | Self::ClickLeave)
    }
}

/// The next status for an input that is over the button.
///
/// `press` and `release` are the input's press and release counters.
fn on_bounds(prev: Status, press: u32, release: u32) -> Status {
    if press == 1 {
        Status::ClickStart
    } else if press > 0 {
        // Pressed elsewhere and dragged on: not a click yet.
        if prev == Status::Normal {
            Status::HoverStart
        } else {
            Status::Click
        }
    } else if release == 1 {
        Status::Enter
    } else if prev.is_active() {
        Status::Hover
    } else {
        Status::HoverStart
    }
}

/// The next status for an input that is off the button.
fn off_bounds(prev: Status, press: u32) -> Status {
    if press > 0 && prev == Status::Click {
        Status::ClickLeave
    } else {
        Status::Normal
    }
}

/// Callback invoked on the frame a button is entered.
pub type OnEnter = Box<dyn FnMut()>;

/// A rectangular button driven by pointer and touch input.
///
/// Each frame the owner calls [`update_status`](Self::update_status) and
/// then [`update`](Self::update). A locked button keeps tracking its status,
/// so it still shows hover and press feedback, but its click and enter
/// observers read false and its enter callback never runs.
pub struct ClickableButton {
    /// Hit area.
    rect: Rect,
    /// Optional text shown by visuals.
    label: Option<String>,
    /// Invoked on enter frames while unlocked.
    on_enter: Option<OnEnter>,
    /// Suppresses actuation.
    locked: bool,
    /// Current phase.
    status: Status,
    /// Frames spent in the current phase.
    count: u32,
    /// Drawing strategy.
    visual: Box<dyn Visual>,
}

impl fmt::Debug for ClickableButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickableButton")
            .field("rect", &self.rect)
            .field("label", &self.label)
            .field("locked", &self.locked)
            .field("status", &self.status)
            .field("count", &self.count)
            .field("visual", &self.visual)
            .finish()
    }
}

impl ClickableButton {
    /// A button covering `rect` with the debug visual.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            label: None,
            on_enter: None,
            locked: false,
            status: Status::Normal,
            count: 0,
            visual: Box::new(DebugVisual),
        }
    }

    /// Build with a label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Build with an enter callback.
    pub fn with_on_enter(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_enter = Some(Box::new(f));
        self
    }

    /// Build with a visual strategy.
    pub fn with_visual(mut self, visual: impl Visual + 'static) -> Self {
        self.visual = Box::new(visual);
        self
    }

    /// Build locked or unlocked.
    pub fn with_lock(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    /// The hit area.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Move or resize the hit area.
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// The label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Lock or unlock actuation.
    pub fn set_lock(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Is actuation suppressed?
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// The raw status, unaffected by the lock.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Frames spent in the current status.
    pub fn status_count(&self) -> u32 {
        self.count
    }

    /// Does `pos` fall inside the button?
    fn hit(&self, pos: Vec2) -> bool {
        collision::check(&Shape::Rect(self.rect), &Shape::Dot(pos))
    }

    /// Re-evaluate the status from this frame's input. Must run before
    /// [`update`](Self::update).
    ///
    /// The primary pointer button is evaluated first. A single touch that is
    /// down, or that ended on the previous refresh, overrides the pointer
    /// when it lands on the button or drags off it mid-click. Two or more
    /// touch points force [`Status::Normal`].
    pub fn update_status(&mut self, input: &dyn Input) {
        let prev = self.status;
        let press = input.pointer_press(Button::Primary);
        let mut next = if self.hit(input.pointer_pos()) {
            on_bounds(prev, press, input.pointer_release(Button::Primary))
        } else {
            off_bounds(prev, press)
        };

        let touches = input.touch_count();
        let touch_press = input.touch_press();
        let touch_release = input.touch_release();
        if touches > 1 {
            next = Status::Normal;
        } else if ((touches == 1 && touch_press > 0) || touch_release == 1)
            && let Some(pos) = input.touch_pos()
        {
            if self.hit(pos) {
                next = on_bounds(prev, touch_press, touch_release);
            } else if off_bounds(prev, touch_press) == Status::ClickLeave {
                next = Status::ClickLeave;
            }
        }
        self.set_status(next);
    }

    /// Set the status. The duration counter resets only if it changes.
    pub fn set_status(&mut self, status: Status) {
        if status != self.status {
            trace!(from = ?self.status, to = ?status, "button status");
            self.status = status;
            self.count = 0;
        }
    }

    /// Set both the status and its duration counter.
    pub fn force_status(&mut self, status: Status, count: u32) {
        self.set_status(status);
        self.count = count;
    }

    /// Finish the frame: run the enter callback if the button was entered
    /// and is unlocked, advance the visual, and count the frame.
    pub fn update(&mut self) {
        if self.is_enter()
            && let Some(f) = self.on_enter.as_mut()
        {
            f();
        }
        self.visual.update(self.status, self.count);
        self.count = self.count.saturating_add(1);
    }

    /// Draw through `canvas`. Does nothing without one.
    pub fn draw(&self, canvas: Option<&mut dyn Canvas>) -> Result<()> {
        match canvas {
            Some(c) => self.visual.draw(self, c),
            None => Ok(()),
        }
    }

    /// Hovered, on its first frame or after.
    pub fn is_hover(&self) -> bool {
        matches!(self.status, Status::HoverStart | Status::Hover)
    }

    /// First frame of hover.
    pub fn is_hover_start(&self) -> bool {
        self.status == Status::HoverStart
    }

    /// Pressed on the button. False while locked.
    pub fn is_click(&self) -> bool {
        !self.locked && matches!(self.status, Status::ClickStart | Status::Click)
    }

    /// First frame of a press. False while locked.
    pub fn is_click_start(&self) -> bool {
        !self.locked && self.status == Status::ClickStart
    }

    /// Actuated this frame. False while locked.
    pub fn is_enter(&self) -> bool {
        !self.locked && self.status == Status::Enter
    }

    /// Hovered, pressed or entered.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Neither hovered, pressed nor entered.
    pub fn is_inactive(&self) -> bool {
        !self.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_bounds_priority() {
        assert_eq!(on_bounds(Status::Normal, 1, 0), Status::ClickStart);
        assert_eq!(on_bounds(Status::Normal, 5, 0), Status::HoverStart);
        assert_eq!(on_bounds(Status::HoverStart, 5, 0), Status::Click);
        assert_eq!(on_bounds(Status::ClickStart, 2, 0), Status::Click);
        assert_eq!(on_bounds(Status::Click, 0, 1), Status::Enter);
        assert_eq!(on_bounds(Status::Normal, 0, 1), Status::Enter);
        assert_eq!(on_bounds(Status::Normal, 0, 9), Status::HoverStart);
        assert_eq!(on_bounds(Status::HoverStart, 0, 9), Status::Hover);
        assert_eq!(on_bounds(Status::Enter, 0, 2), Status::Hover);
        assert_eq!(on_bounds(Status::ClickLeave, 0, 9), Status::HoverStart);
    }

    #[test]
    fn off_bounds_drag() {
        assert_eq!(off_bounds(Status::Click, 3), Status::ClickLeave);
        assert_eq!(off_bounds(Status::ClickLeave, 4), Status::Normal);
        assert_eq!(off_bounds(Status::Click, 0), Status::Normal);
        assert_eq!(off_bounds(Status::Hover, 3), Status::Normal);
    }

    #[test]
    fn counter_resets_on_change_only() {
        let mut b = ClickableButton::new(Rect::new(0.0, 0.0, 2.0, 2.0));
        b.update();
        b.update();
        assert_eq!(b.status_count(), 2);
        b.set_status(Status::Normal);
        assert_eq!(b.status_count(), 2);
        b.set_status(Status::Hover);
        assert_eq!(b.status_count(), 0);
        b.force_status(Status::Hover, 17);
        assert_eq!(b.status_count(), 17);
    }

    #[test]
    fn lock_hides_actuation() {
        let mut b = ClickableButton::new(Rect::new(0.0, 0.0, 2.0, 2.0)).with_lock(true);
        b.set_status(Status::Enter);
        assert_eq!(b.status(), Status::Enter);
        assert!(!b.is_enter());
        assert!(b.is_active());
        b.set_status(Status::ClickStart);
        assert!(!b.is_click());
        assert!(!b.is_click_start());
        b.set_lock(false);
        assert!(b.is_click_start());
    }
}
