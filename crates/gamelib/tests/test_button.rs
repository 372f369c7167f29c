use std::{cell::Cell, rc::Rc};

use gamelib::{
    error::Result,
    geom::Rect,
    style::Color,
    testing::{Harness, RecordingCanvas},
    widgets::{ClickableButton, Status},
};
use proptest::prelude::*;

fn button() -> ClickableButton {
    ClickableButton::new(Rect::new(50.0, 50.0, 20.0, 20.0))
}

/// Run one frame of a lone button.
fn step(h: &mut Harness, b: &mut ClickableButton) {
    h.frame(|rt| {
        b.update_status(rt.input());
        b.update();
    });
}

#[test]
fn locked_button_never_enters() {
    let fired = Rc::new(Cell::new(0));
    let f = fired.clone();
    let mut b = button().with_lock(true).with_on_enter(move || f.set(f.get() + 1));
    let mut h = Harness::new();

    h.pointer(50.0, 50.0).press();
    step(&mut h, &mut b);
    assert_eq!(b.status(), Status::ClickStart);
    assert!(!b.is_click_start());
    assert!(!b.is_click());

    h.release();
    step(&mut h, &mut b);
    // The status is tracked, but actuation is suppressed.
    assert_eq!(b.status(), Status::Enter);
    assert!(!b.is_enter());
    assert_eq!(fired.get(), 0);

    b.set_lock(false);
    h.press();
    step(&mut h, &mut b);
    h.release();
    step(&mut h, &mut b);
    assert!(b.is_enter());
    assert_eq!(fired.get(), 1);
}

#[test]
fn drag_off_and_back() {
    let mut h = Harness::new();
    let mut b = button();

    h.pointer(50.0, 50.0).press();
    step(&mut h, &mut b);
    step(&mut h, &mut b);
    assert_eq!(b.status(), Status::Click);

    h.pointer(200.0, 200.0);
    step(&mut h, &mut b);
    assert_eq!(b.status(), Status::ClickLeave);
    assert!(!b.is_active());

    // Releasing away from the button does not actuate it.
    h.release();
    step(&mut h, &mut b);
    assert_eq!(b.status(), Status::Normal);
}

#[test]
fn press_elsewhere_then_drag_on() {
    let mut h = Harness::new();
    let mut b = button();

    h.pointer(200.0, 200.0).press();
    step(&mut h, &mut b);
    assert_eq!(b.status(), Status::Normal);

    h.pointer(50.0, 50.0);
    step(&mut h, &mut b);
    assert_eq!(b.status(), Status::HoverStart);
    step(&mut h, &mut b);
    assert_eq!(b.status(), Status::Click);
}

#[test]
fn single_touch_overrides_pointer() {
    let mut h = Harness::new();
    let mut b = button();

    h.touch_start(&[(50.0, 50.0)]);
    step(&mut h, &mut b);
    assert_eq!(b.status(), Status::ClickStart);
    step(&mut h, &mut b);
    assert_eq!(b.status(), Status::Click);

    h.touch_end(&[]);
    step(&mut h, &mut b);
    assert_eq!(b.status(), Status::Enter);
    step(&mut h, &mut b);
    assert_eq!(b.status(), Status::Normal);
}

#[test]
fn multi_touch_forces_normal() {
    let mut h = Harness::new();
    let mut b = button();

    h.touch_start(&[(50.0, 50.0), (52.0, 52.0)]);
    step(&mut h, &mut b);
    assert_eq!(b.status(), Status::Normal);
}

#[test]
fn debug_visual_follows_status() -> Result<()> {
    let mut h = Harness::new();
    let mut b = button();
    let mut c = RecordingCanvas::new();

    h.pointer(500.0, 500.0);
    step(&mut h, &mut b);
    b.draw(Some(&mut c))?;
    assert_eq!(c.stroke_color(b.rect()), Some(Color::WHITE));

    h.pointer(50.0, 50.0);
    step(&mut h, &mut b);
    b.draw(Some(&mut c))?;
    assert_eq!(c.stroke_color(b.rect()), Some(Color::P_YELLOW));

    h.press();
    step(&mut h, &mut b);
    b.draw(Some(&mut c))?;
    assert_eq!(c.stroke_color(b.rect()), Some(Color::P_GREEN));

    b.set_lock(true);
    b.draw(Some(&mut c))?;
    assert_eq!(c.stroke_color(b.rect()), Some(Color::GRAY));

    c.clear();
    b.draw(None)?;
    assert_eq!(c.stroke_color(b.rect()), None);
    Ok(())
}

proptest! {
    #[test]
    fn counter_resets_only_on_change(script in prop::collection::vec((any::<bool>(), any::<bool>()), 1..60)) {
        let mut h = Harness::new();
        let mut b = button();
        let mut down = false;
        for (inside, press) in script {
            if inside {
                h.pointer(50.0, 50.0);
            } else {
                h.pointer(500.0, 500.0);
            }
            if press != down {
                if press { h.press(); } else { h.release(); }
                down = press;
            }
            let (before, count) = (b.status(), b.status_count());
            step(&mut h, &mut b);
            if b.status() == before {
                prop_assert_eq!(b.status_count(), count + 1);
            } else {
                prop_assert_eq!(b.status_count(), 1);
            }
        }
    }

    #[test]
    fn away_and_idle_is_normal(x in 100.0f64..1000.0, y in 100.0f64..1000.0, frames in 1usize..10) {
        let mut h = Harness::new();
        let mut b = button();
        h.pointer(x, y);
        for _ in 0..frames {
            step(&mut h, &mut b);
            prop_assert_eq!(b.status(), Status::Normal);
        }
    }
}
