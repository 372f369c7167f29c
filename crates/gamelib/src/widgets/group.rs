//! A keyboard-navigable grid of buttons.
use std::mem;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::button::{ClickableButton, Status};
use crate::{
    Input, LongPress,
    error::Result,
    event::KeyCode,
    geom::Direction,
    render::Canvas,
};

/// Keys that move focus, per direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavKeys {
    /// Move up.
    pub up: Vec<KeyCode>,
    /// Move down.
    pub down: Vec<KeyCode>,
    /// Move left.
    pub left: Vec<KeyCode>,
    /// Move right.
    pub right: Vec<KeyCode>,
}

impl Default for NavKeys {
    fn default() -> Self {
        Self {
            up: vec![KeyCode::UP],
            down: vec![KeyCode::DOWN],
            left: vec![KeyCode::LEFT],
            right: vec![KeyCode::RIGHT],
        }
    }
}

impl NavKeys {
    /// The keys bound to a direction.
    pub fn keys(&self, dir: Direction) -> &[KeyCode] {
        match dir {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }
}

/// Group behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupConfig {
    /// Keys that actuate the focused button.
    pub enter_keys: Vec<KeyCode>,
    /// Lock the whole group after the first actuation.
    pub single_selection: bool,
    /// Auto-repeat policy for navigation keys.
    pub long_press: LongPress,
    /// Navigation bindings.
    pub nav: NavKeys,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            enter_keys: vec![KeyCode::ENTER],
            single_selection: false,
            long_press: LongPress::default(),
            nav: NavKeys::default(),
        }
    }
}

impl GroupConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        let c: Self = serde_json::from_str(s)?;
        Ok(Self {
            long_press: c.long_press.normalized(),
            ..c
        })
    }
}

/// A cell position in a [`ButtonGroup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct GridIndex {
    /// Row.
    pub row: usize,
    /// Column within the row.
    pub col: usize,
}

impl GridIndex {
    /// Construct an index.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Order in which navigation directions are polled; the first that fires
/// wins.
const NAV_ORDER: [Direction; 4] = [
    Direction::Right,
    Direction::Left,
    Direction::Down,
    Direction::Up,
];

/// A jagged grid of buttons sharing one focus.
///
/// Focus follows the pointer whenever a button is directly hovered or
/// pressed, and otherwise moves with the navigation keys, skipping locked
/// cells. The focused button is shown hovered and is actuated by the enter
/// keys. Under single selection the group locks after the first actuation
/// and stays locked until [`set_lock`](Self::set_lock) releases it.
#[derive(Debug)]
pub struct ButtonGroup {
    /// Behaviour.
    config: GroupConfig,
    /// Cells by row. Never empty; only the last row may be empty.
    rows: Vec<Vec<ClickableButton>>,
    /// Focused cell.
    active: GridIndex,
    /// Frames since focus last moved.
    active_count: u32,
    /// Group-wide lock.
    locked: bool,
}

impl Default for ButtonGroup {
    fn default() -> Self {
        Self::new(GroupConfig::default())
    }
}

impl ButtonGroup {
    /// An empty group.
    pub fn new(config: GroupConfig) -> Self {
        Self {
            config: GroupConfig {
                long_press: config.long_press.normalized(),
                ..config
            },
            rows: vec![Vec::new()],
            active: GridIndex::default(),
            active_count: 0,
            locked: false,
        }
    }

    /// The group's configuration.
    pub fn config(&self) -> &GroupConfig {
        &self.config
    }

    /// Start a new row for subsequent [`push`](Self::push) calls. Ignored
    /// while the current last row is empty.
    pub fn new_line(&mut self) {
        if self.rows.last().is_some_and(Vec::is_empty) {
            warn!(rows = self.rows.len(), "new_line on an empty row ignored");
            return;
        }
        self.rows.push(Vec::new());
    }

    /// Append a button to the last row. `focus` requests focus for it.
    pub fn push(&mut self, button: ClickableButton, focus: bool) -> GridIndex {
        if self.rows.is_empty() {
            self.rows.push(Vec::new());
        }
        let row = self.rows.len() - 1;
        let cells = &mut self.rows[row];
        cells.push(button);
        let idx = GridIndex::new(row, cells.len() - 1);
        self.inserted(idx, focus);
        idx
    }

    /// Append a button on a row of its own.
    pub fn push_vertical(&mut self, button: ClickableButton, focus: bool) -> GridIndex {
        if self.rows.last().is_some_and(|r| !r.is_empty()) {
            self.rows.push(Vec::new());
        }
        self.push(button, focus)
    }

    /// Place a button at `idx`, returning the button it replaces.
    ///
    /// A column past the end of its row appends to the row; a row past the
    /// end appends a new row. Both cases log a warning.
    pub fn set_at(
        &mut self,
        idx: GridIndex,
        button: ClickableButton,
        focus: bool,
    ) -> (GridIndex, Option<ClickableButton>) {
        if idx.row >= self.rows.len() {
            warn!(?idx, rows = self.rows.len(), "set_at row out of range, appending");
            return (self.push_vertical(button, focus), None);
        }
        let cells = &mut self.rows[idx.row];
        if idx.col >= cells.len() {
            warn!(?idx, cols = cells.len(), "set_at column out of range, appending");
            cells.push(button);
            let at = GridIndex::new(idx.row, cells.len() - 1);
            self.inserted(at, focus);
            return (at, None);
        }
        let old = mem::replace(&mut cells[idx.col], button);
        self.inserted(idx, focus);
        (idx, Some(old))
    }

    /// Focus a newly inserted cell if requested, or if it is the first
    /// unlocked cell in an unlocked group.
    fn inserted(&mut self, idx: GridIndex, focus: bool) {
        let unlocked = self.get(idx).is_some_and(|b| !b.is_locked());
        let others_locked = self
            .indices()
            .filter(|i| *i != idx)
            .all(|i| self.get(i).is_some_and(ClickableButton::is_locked));
        if focus || (!self.locked && unlocked && others_locked) {
            self.focus(idx);
        }
    }

    /// Move focus to `idx`. Returns false if there is no such cell.
    pub fn focus(&mut self, idx: GridIndex) -> bool {
        if self.get(idx).is_none() {
            return false;
        }
        if idx != self.active {
            debug!(from = ?self.active, to = ?idx, "focus");
            self.active = idx;
            self.active_count = 0;
        }
        true
    }

    /// Every cell index in row-major order.
    fn indices(&self) -> impl Iterator<Item = GridIndex> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| (0..row.len()).map(move |c| GridIndex::new(r, c)))
    }

    /// The button at `idx`.
    pub fn get(&self, idx: GridIndex) -> Option<&ClickableButton> {
        self.rows.get(idx.row).and_then(|r| r.get(idx.col))
    }

    /// Mutable access to the button at `idx`.
    pub fn get_mut(&mut self, idx: GridIndex) -> Option<&mut ClickableButton> {
        self.rows.get_mut(idx.row).and_then(|r| r.get_mut(idx.col))
    }

    /// The focused cell index.
    pub fn active_index(&self) -> GridIndex {
        self.active
    }

    /// The focused button, if the group has any.
    pub fn active(&self) -> Option<&ClickableButton> {
        self.get(self.active)
    }

    /// Frames since focus last moved.
    pub fn active_count(&self) -> u32 {
        self.active_count
    }

    /// The rows of the grid.
    pub fn rows(&self) -> &[Vec<ClickableButton>] {
        &self.rows
    }

    /// Is the group locked?
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Lock or unlock the group. The group never unlocks itself.
    pub fn set_lock(&mut self, locked: bool) {
        if locked != self.locked {
            debug!(locked, "group lock");
        }
        self.locked = locked;
    }

    /// Number of buttons.
    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Does the group have no buttons?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The nearest unlocked cell from `from` in `dir`, passing over locked
    /// cells. Horizontal moves wrap onto the neighbouring rows; vertical
    /// moves keep the column, clamped to each row's length. Empty rows are
    /// skipped.
    fn search(&self, from: GridIndex, dir: Direction) -> Option<GridIndex> {
        let unlocked = |i: &GridIndex| self.get(*i).is_some_and(|b| !b.is_locked());
        match dir {
            Direction::Right => self.indices().skip_while(|i| *i <= from).find(unlocked),
            Direction::Left => {
                let before: Vec<GridIndex> = self.indices().take_while(|i| *i < from).collect();
                before.into_iter().rev().find(unlocked)
            }
            Direction::Down | Direction::Up => {
                let column = |r: usize| {
                    let len = self.rows[r].len();
                    (len > 0).then(|| GridIndex::new(r, from.col.min(len - 1)))
                };
                if dir == Direction::Down {
                    (from.row + 1..self.rows.len())
                        .filter_map(column)
                        .find(unlocked)
                } else {
                    (0..from.row).rev().filter_map(column).find(unlocked)
                }
            }
        }
    }

    /// The first navigation direction that fires this frame.
    fn nav_direction(&self, input: &dyn Input) -> Option<Direction> {
        NAV_ORDER.into_iter().find(|d| {
            self.config
                .nav
                .keys(*d)
                .iter()
                .any(|k| input.get_long_press(k, self.config.long_press) > 0)
        })
    }

    /// Run one frame of the group.
    ///
    /// While unlocked, every button's status is refreshed from the pointer
    /// and touch input, a directly engaged button takes focus, and at most
    /// one navigation key moves focus. While locked, a button left in
    /// [`Status::Enter`] is returned to [`Status::Normal`] so a selection
    /// fires only once. The focused button is then held in hover and
    /// actuated by the enter keys, and every button is updated.
    pub fn update(&mut self, input: &dyn Input) {
        let was_locked = self.locked;
        let mut lock = false;

        if was_locked {
            for b in self.rows.iter_mut().flatten() {
                if b.status() == Status::Enter {
                    b.set_status(Status::Normal);
                }
            }
        } else {
            let mut engaged = None;
            for (r, row) in self.rows.iter_mut().enumerate() {
                for (c, b) in row.iter_mut().enumerate() {
                    b.update_status(input);
                    if b.is_active() {
                        engaged = Some(GridIndex::new(r, c));
                    }
                    if b.is_enter() && self.config.single_selection {
                        lock = true;
                    }
                }
            }
            if let Some(idx) = engaged {
                self.focus(idx);
            }

            if let Some(dir) = self.nav_direction(input) {
                let from = self.active;
                if let Some(to) = self.search(from, dir) {
                    self.focus(to);
                    if let Some(b) = self.get_mut(from) {
                        b.set_status(Status::Normal);
                    }
                }
            }
        }

        let active_count = self.active_count;
        let enter = input.get_any(&self.config.enter_keys) == 1;
        let single = self.config.single_selection;
        if let Some(b) = self.get_mut(self.active) {
            if b.is_inactive() {
                if active_count == 0 {
                    b.force_status(Status::HoverStart, 0);
                } else {
                    b.force_status(Status::Hover, active_count);
                }
            }
            // Enter keys are off while the group is locked.
            if enter && !was_locked && !b.is_locked() {
                b.set_status(Status::Enter);
                lock |= single;
            }
        }

        if lock && !self.locked {
            self.set_lock(true);
        }
        for b in self.rows.iter_mut().flatten() {
            b.update();
        }
        self.active_count = self.active_count.saturating_add(1);
    }

    /// Draw every button. Does nothing without a canvas.
    pub fn draw(&self, canvas: Option<&mut dyn Canvas>) -> Result<()> {
        if let Some(c) = canvas {
            for b in self.rows.iter().flatten() {
                b.draw(Some(&mut *c))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Rect;

    fn cell(x: f64, locked: bool) -> ClickableButton {
        ClickableButton::new(Rect::new(x, 0.0, 1.0, 1.0)).with_lock(locked)
    }

    #[test]
    fn new_line_on_empty_row_is_ignored() {
        let mut g = ButtonGroup::default();
        g.new_line();
        assert_eq!(g.rows().len(), 1);
        g.push(cell(0.0, false), false);
        g.new_line();
        g.new_line();
        assert_eq!(g.rows().len(), 2);
    }

    #[test]
    fn first_unlocked_cell_takes_focus() {
        let mut g = ButtonGroup::default();
        g.push(cell(0.0, true), false);
        assert_eq!(g.active_index(), GridIndex::new(0, 0));
        let idx = g.push(cell(1.0, false), false);
        assert_eq!(g.active_index(), idx);
        g.push(cell(2.0, false), false);
        assert_eq!(g.active_index(), idx);
        let req = g.push_vertical(cell(3.0, false), true);
        assert_eq!(req, GridIndex::new(1, 0));
        assert_eq!(g.active_index(), req);
    }

    #[test]
    fn no_auto_focus_while_locked() {
        let mut g = ButtonGroup::default();
        g.push(cell(0.0, true), false);
        g.set_lock(true);
        g.push(cell(1.0, false), false);
        assert_eq!(g.active_index(), GridIndex::new(0, 0));
    }

    #[test]
    fn set_at_replaces_and_appends() {
        let mut g = ButtonGroup::default();
        g.push(cell(0.0, false), false);
        let (idx, old) = g.set_at(GridIndex::new(0, 0), cell(5.0, false), false);
        assert_eq!(idx, GridIndex::new(0, 0));
        assert!(old.is_some());
        let (idx, old) = g.set_at(GridIndex::new(0, 9), cell(6.0, false), false);
        assert_eq!(idx, GridIndex::new(0, 1));
        assert!(old.is_none());
        let (idx, _) = g.set_at(GridIndex::new(7, 0), cell(7.0, false), false);
        assert_eq!(idx, GridIndex::new(1, 0));
        assert_eq!(g.len(), 3);
    }

    #[test]
    fn search_skips_locked_and_wraps() {
        let mut g = ButtonGroup::default();
        g.push(cell(0.0, false), false);
        g.push(cell(1.0, true), false);
        g.new_line();
        g.push(cell(2.0, true), false);
        g.push(cell(3.0, false), false);
        g.push(cell(4.0, false), false);

        let a = GridIndex::new(0, 0);
        assert_eq!(g.search(a, Direction::Right), Some(GridIndex::new(1, 1)));
        assert_eq!(g.search(GridIndex::new(1, 1), Direction::Left), Some(a));
        assert_eq!(g.search(a, Direction::Left), None);
        // Column 2 clamps to the last cell of row 0, which is locked.
        assert_eq!(g.search(GridIndex::new(1, 2), Direction::Up), None);
        assert_eq!(g.search(a, Direction::Down), None);
        assert_eq!(g.search(GridIndex::new(0, 1), Direction::Down), Some(GridIndex::new(1, 1)));
    }

    #[test]
    fn config_from_json() {
        let c = GroupConfig::from_json(r#"{"single_selection": true, "long_press": {"interval": 0}}"#)
            .unwrap();
        assert!(c.single_selection);
        assert_eq!(c.enter_keys, vec![KeyCode::ENTER]);
        assert_eq!(c.long_press, LongPress::new(30, 1));
        assert!(GroupConfig::from_json("{").is_err());
        assert!(GroupConfig::from_json(r#"{"enter_keys": 5}"#).is_err());
    }
}
