use gamelib::{
    error::Result,
    geom::Rect,
    testing::{Harness, RecordingCanvas},
    widgets::{ClickableButton, Status},
};

#[test]
fn press_release_leave() -> Result<()> {
    let mut h = Harness::new();
    let mut b = ClickableButton::new(Rect::new(50.0, 50.0, 20.0, 20.0));

    h.pointer(50.0, 50.0).press();
    h.frame(|rt| {
        b.update_status(rt.input());
        b.update();
    });
    assert_eq!(b.status(), Status::ClickStart);
    assert!(b.is_click_start());

    h.release();
    h.frame(|rt| {
        b.update_status(rt.input());
        b.update();
    });
    assert_eq!(b.status(), Status::Enter);
    assert!(b.is_enter());

    h.pointer(1000.0, 1000.0);
    h.frame(|rt| {
        b.update_status(rt.input());
        b.update();
    });
    assert_eq!(b.status(), Status::Normal);

    let mut c = RecordingCanvas::new();
    b.draw(Some(&mut c))?;
    assert!(!c.calls.is_empty());
    Ok(())
}

#[test]
fn held_click_then_enter_once() {
    let mut h = Harness::new();
    let mut b = ClickableButton::new(Rect::new(50.0, 50.0, 20.0, 20.0));
    let mut statuses = vec![];

    h.pointer(45.0, 52.0).press();
    for _ in 0..3 {
        h.frame(|rt| b.update_status(rt.input()));
        statuses.push(b.status());
        b.update();
    }
    h.release();
    for _ in 0..3 {
        h.frame(|rt| b.update_status(rt.input()));
        statuses.push(b.status());
        b.update();
    }
    assert_eq!(
        statuses,
        vec![
            Status::ClickStart,
            Status::Click,
            Status::Click,
            Status::Enter,
            Status::Hover,
            Status::Hover,
        ]
    );
}

#[test]
fn first_frame_is_not_an_enter() {
    // A pointer resting on a button before any press must not actuate it.
    let mut h = Harness::new();
    let mut b = ClickableButton::new(Rect::new(0.0, 0.0, 20.0, 20.0));
    h.frame(|rt| b.update_status(rt.input()));
    assert_eq!(b.status(), Status::HoverStart);
    assert!(!b.is_enter());
}
