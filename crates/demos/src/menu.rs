use std::{cell::RefCell, rc::Rc, time::Duration};

use gamelib::{
    Animated, Input, Runtime, TweenId,
    backend::{App, Flow},
    error::Result,
    event::KeyCode,
    geom::{Rect, Vec2},
    render::Canvas,
    style::Color,
    widgets::{AnimatedFill, ButtonGroup, ClickableButton, DebugVisual, GroupConfig},
};
use tracing::info;

/// Menu entries by row. Rows are deliberately uneven.
const ITEMS: &[&[&str]] = &[
    &["Start", "Continue"],
    &["Online", "Options", "Scores"],
    &["Quit"],
];

/// Entries that cannot be chosen.
const LOCKED: &[&str] = &["Online"];

/// Button size in terminal cells.
const CELL: Vec2 = Vec2::new(12.0, 3.0);

/// Title pulse period.
const PULSE: Duration = Duration::from_millis(800);

/// The hit area for the button at `(row, col)`.
fn cell_rect(row: usize, col: usize) -> Rect {
    let x = 2.0 + (CELL.x + 2.0) * col as f64 + CELL.x / 2.0;
    let y = 3.0 + (CELL.y + 1.0) * row as f64 + CELL.y / 2.0;
    Rect::new(x, y, CELL.x, CELL.y)
}

/// A title over a jagged grid of buttons.
///
/// Arrows and the mouse move focus, Enter or a click chooses, Escape or the
/// Quit entry leaves.
#[derive(Debug)]
pub struct Menu {
    /// The buttons.
    group: ButtonGroup,
    /// The last chosen entry, written by button callbacks.
    chosen: Rc<RefCell<Option<&'static str>>>,
    /// Title colour, pulsed by tweens.
    title: Animated<Color>,
    /// The running pulse.
    pulse: Option<TweenId>,
    /// Next pulse goes towards the bright colour?
    brighten: bool,
}

impl Menu {
    /// A menu with the given group behaviour.
    pub fn new(config: GroupConfig) -> Self {
        let mut group = ButtonGroup::new(config);
        let chosen = Rc::new(RefCell::new(None));
        for (r, row) in ITEMS.iter().enumerate() {
            if r > 0 {
                group.new_line();
            }
            for (c, label) in row.iter().copied().enumerate() {
                let slot = chosen.clone();
                let mut b = ClickableButton::new(cell_rect(r, c))
                    .with_label(label)
                    .with_on_enter(move || *slot.borrow_mut() = Some(label));
                b = if LOCKED.contains(&label) {
                    b.with_lock(true).with_visual(DebugVisual)
                } else {
                    b.with_visual(AnimatedFill::new(Color::P_BLUE))
                };
                group.push(b, false);
            }
        }
        Self {
            group,
            chosen,
            title: Animated::new(Color::GRAY),
            pulse: None,
            brighten: true,
        }
    }

    /// The entry chosen most recently.
    pub fn chosen(&self) -> Option<&'static str> {
        *self.chosen.borrow()
    }

    /// The button group.
    pub fn group(&self) -> &ButtonGroup {
        &self.group
    }

    /// Mutable access to the button group.
    pub fn group_mut(&mut self) -> &mut ButtonGroup {
        &mut self.group
    }

    /// The current title colour.
    pub fn title_color(&self) -> Color {
        self.title.get()
    }
}

impl App for Menu {
    fn update(&mut self, rt: &mut Runtime) -> Result<Flow> {
        let (input, tweens) = rt.split();
        if input.get(&KeyCode::ESCAPE) == 1 {
            return Ok(Flow::Exit);
        }

        let before = self.chosen();
        self.group.update(input);
        let chosen = self.chosen();
        if chosen != before
            && let Some(label) = chosen
        {
            info!(label, "menu choice");
            if label == "Quit" {
                return Ok(Flow::Exit);
            }
        }

        if self.pulse.is_none_or(|id| !tweens.is_running(id)) {
            let dest = if self.brighten {
                Color::P_YELLOW
            } else {
                Color::GRAY
            };
            self.pulse = Some(self.title.animate_to(tweens, dest, PULSE));
            self.brighten = !self.brighten;
        }
        Ok(Flow::Continue)
    }

    fn draw(&self, canvas: &mut dyn Canvas) -> Result<()> {
        canvas.text(Vec2::new(2.0, 1.0), "GAMELIB", self.title.get())?;
        self.group.draw(Some(canvas))?;
        let status = match self.chosen() {
            Some(label) => format!("chose: {label}"),
            None => "arrows/mouse to move, enter to choose, esc to quit".into(),
        };
        let rows = ITEMS.len() as f64;
        canvas.text(
            Vec2::new(2.0, 3.0 + (CELL.y + 1.0) * rows),
            &status,
            Color::WHITE,
        )
    }
}
