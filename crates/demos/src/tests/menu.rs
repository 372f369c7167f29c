use gamelib::{
    backend::{App, Flow},
    error::Result,
    event::KeyCode,
    testing::{Harness, RecordingCanvas},
    widgets::{GridIndex, GroupConfig},
};

use crate::menu::Menu;

fn run(h: &mut Harness, m: &mut Menu) -> Result<Flow> {
    h.frame(|rt| m.update(rt))
}

fn tap(h: &mut Harness, m: &mut Menu, key: KeyCode) -> Result<Flow> {
    h.key_down(key.clone());
    let flow = run(h, m)?;
    h.key_up(key);
    run(h, m)?;
    Ok(flow)
}

#[test]
fn navigates_past_locked_entry() -> Result<()> {
    let mut h = Harness::new();
    let mut m = Menu::new(GroupConfig::default());
    assert_eq!(m.group().active_index(), GridIndex::new(0, 0));

    tap(&mut h, &mut m, KeyCode::DOWN)?;
    // Row 1 column 0 is locked; the search continues to the next row.
    assert_eq!(m.group().active_index(), GridIndex::new(2, 0));

    tap(&mut h, &mut m, KeyCode::UP)?;
    assert_eq!(m.group().active_index(), GridIndex::new(0, 0));
    tap(&mut h, &mut m, KeyCode::RIGHT)?;
    tap(&mut h, &mut m, KeyCode::RIGHT)?;
    // Horizontal moves wrap onto the next row, again passing the lock.
    assert_eq!(m.group().active_index(), GridIndex::new(1, 1));

    tap(&mut h, &mut m, KeyCode::ENTER)?;
    assert_eq!(m.chosen(), Some("Options"));
    Ok(())
}

#[test]
fn quit_and_escape_exit() -> Result<()> {
    let mut h = Harness::new();
    let mut m = Menu::new(GroupConfig::default());
    assert!(m.group_mut().focus(GridIndex::new(2, 0)));
    assert_eq!(tap(&mut h, &mut m, KeyCode::ENTER)?, Flow::Exit);

    let mut m = Menu::new(GroupConfig::default());
    assert_eq!(tap(&mut h, &mut m, KeyCode::ESCAPE)?, Flow::Exit);
    Ok(())
}

#[test]
fn title_pulses() -> Result<()> {
    let mut h = Harness::new();
    let mut m = Menu::new(GroupConfig::default());
    let start = m.title_color();
    for _ in 0..20 {
        run(&mut h, &mut m)?;
    }
    assert_ne!(m.title_color(), start);

    let mut c = RecordingCanvas::new();
    m.draw(&mut c)?;
    assert_eq!(c.texts().first(), Some(&"GAMELIB"));
    assert!(c.texts().contains(&"Quit"));
    Ok(())
}
