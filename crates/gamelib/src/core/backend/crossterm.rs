use std::{
    collections::HashSet,
    io::{self, Write},
    panic, thread,
    time::{Duration, Instant},
};

use crossterm::{
    ExecutableCommand, QueueableCommand, cursor as ccursor, event as cevent, style, terminal,
};
use scopeguard::guard;
use tracing::{debug, error};

use super::{App, Flow};
use crate::{
    Runtime,
    error::Result,
    event::{Button, EventSender, KeyCode, RawEvent},
    geom::{Rect, Vec2},
    render::Canvas,
    style::Color,
};

/// Translate a crossterm key code. Keys without a stable code are dropped.
pub fn translate_key(code: cevent::KeyCode) -> Option<KeyCode> {
    Some(match code {
        cevent::KeyCode::Enter => KeyCode::ENTER,
        cevent::KeyCode::Esc => KeyCode::ESCAPE,
        cevent::KeyCode::Tab => KeyCode::TAB,
        cevent::KeyCode::Backspace => KeyCode::BACKSPACE,
        cevent::KeyCode::Up => KeyCode::UP,
        cevent::KeyCode::Down => KeyCode::DOWN,
        cevent::KeyCode::Left => KeyCode::LEFT,
        cevent::KeyCode::Right => KeyCode::RIGHT,
        cevent::KeyCode::F(n) => KeyCode::function(n),
        cevent::KeyCode::Char(c) => return KeyCode::from_char(c),
        cevent::KeyCode::Modifier(m) => match m {
            cevent::ModifierKeyCode::LeftShift | cevent::ModifierKeyCode::RightShift => {
                KeyCode::SHIFT
            }
            cevent::ModifierKeyCode::LeftControl | cevent::ModifierKeyCode::RightControl => {
                KeyCode::CTRL
            }
            cevent::ModifierKeyCode::LeftAlt | cevent::ModifierKeyCode::RightAlt => KeyCode::ALT,
            _ => return None,
        },
        _ => return None,
    })
}

/// Translate a crossterm mouse button.
fn translate_button(b: cevent::MouseButton) -> Button {
    match b {
        cevent::MouseButton::Left => Button::Primary,
        cevent::MouseButton::Right => Button::Secondary,
        cevent::MouseButton::Middle => Button::Middle,
    }
}

/// The pointer position for a terminal cell: the centre of the cell, so
/// that it falls strictly inside rectangles aligned to cell edges.
fn cell_center(column: u16, row: u16) -> Vec2 {
    Vec2::new(f64::from(column) + 0.5, f64::from(row) + 0.5)
}

/// Translate a crossterm mouse event. Button events carry their position,
/// so they are preceded by a move.
pub fn translate_mouse(m: cevent::MouseEvent) -> Vec<RawEvent> {
    let pos = RawEvent::PointerMove(cell_center(m.column, m.row));
    match m.kind {
        cevent::MouseEventKind::Down(b) => vec![pos, RawEvent::PointerDown(translate_button(b))],
        cevent::MouseEventKind::Up(b) => vec![pos, RawEvent::PointerUp(translate_button(b))],
        cevent::MouseEventKind::Drag(_) | cevent::MouseEventKind::Moved => vec![pos],
        cevent::MouseEventKind::ScrollDown => vec![RawEvent::Wheel(1.0)],
        cevent::MouseEventKind::ScrollUp => vec![RawEvent::Wheel(-1.0)],
        cevent::MouseEventKind::ScrollLeft | cevent::MouseEventKind::ScrollRight => vec![],
    }
}

/// Is this the interrupt chord?
fn is_interrupt(k: &cevent::KeyEvent) -> bool {
    k.code == cevent::KeyCode::Char('c') && k.modifiers.contains(cevent::KeyModifiers::CONTROL)
}

/// Feeds terminal input into an event queue once per frame.
///
/// Most terminals report key presses but not releases. Unless the terminal
/// reports releases, a key pressed during one poll is released at the start
/// of the next poll that does not see it again, so held keys flicker at the
/// terminal's auto-repeat rate.
#[derive(Debug)]
pub struct TerminalInput {
    /// Destination queue.
    tx: EventSender,
    /// Does the terminal report key releases?
    reports_release: bool,
    /// Keys pressed during the previous poll awaiting a synthetic release.
    held: HashSet<KeyCode>,
    /// Set when the interrupt chord is seen.
    interrupted: bool,
}

impl TerminalInput {
    /// Feed events into `tx`.
    pub fn new(tx: EventSender, reports_release: bool) -> Self {
        Self {
            tx,
            reports_release,
            held: HashSet::new(),
            interrupted: false,
        }
    }

    /// Has Ctrl-C been pressed?
    pub fn interrupted(&self) -> bool {
        self.interrupted
    }

    /// Fold one terminal event into the queue.
    pub fn handle(&mut self, e: cevent::Event, pressed: &mut HashSet<KeyCode>) -> Result<()> {
        match e {
            cevent::Event::Key(k) => {
                if is_interrupt(&k) {
                    self.interrupted = true;
                    return Ok(());
                }
                let Some(code) = translate_key(k.code) else {
                    return Ok(());
                };
                if k.kind == cevent::KeyEventKind::Release {
                    self.held.remove(&code);
                    pressed.remove(&code);
                    self.tx.send(RawEvent::KeyUp(code))?;
                } else {
                    pressed.insert(code.clone());
                    self.tx.send(RawEvent::KeyDown(code))?;
                }
            }
            cevent::Event::Mouse(m) => {
                for raw in translate_mouse(m) {
                    self.tx.send(raw)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Release keys held over from the previous poll that were not pressed
    /// again in this one.
    pub fn release_stale(&mut self, pressed: HashSet<KeyCode>) -> Result<()> {
        if self.reports_release {
            return Ok(());
        }
        for k in self.held.difference(&pressed) {
            self.tx.send(RawEvent::KeyUp(k.clone()))?;
        }
        self.held = pressed;
        Ok(())
    }

    /// Drain every pending terminal event without blocking.
    pub fn poll(&mut self) -> Result<()> {
        let mut pressed = HashSet::new();
        loop {
            match cevent::poll(Duration::ZERO) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    error!("terminal poll failed: {e}");
                    return Err(e.into());
                }
            }
            let e = cevent::read().inspect_err(|e| error!("terminal read failed: {e}"))?;
            self.handle(e, &mut pressed)?;
        }
        self.release_stale(pressed)
    }
}

/// Raw mode and the alternate screen for the lifetime of the guard.
#[derive(Debug)]
pub struct TerminalSession {
    /// Were keyboard enhancement flags pushed?
    enhanced: bool,
    /// Is the terminal still in session mode?
    active: bool,
}

impl TerminalSession {
    /// Enter raw mode and the alternate screen, with mouse capture. Key
    /// release reporting is requested when the terminal supports it.
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        out.execute(terminal::EnterAlternateScreen)?;
        out.execute(cevent::EnableMouseCapture)?;
        out.execute(ccursor::Hide)?;
        let enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if enhanced {
            out.execute(cevent::PushKeyboardEnhancementFlags(
                cevent::KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
        }
        debug!(enhanced, "terminal session started");
        Ok(Self {
            enhanced,
            active: true,
        })
    }

    /// Does the terminal report key releases?
    pub fn reports_release(&self) -> bool {
        self.enhanced
    }

    /// Restore the terminal.
    pub fn stop(&mut self) -> Result<()> {
        if self.active {
            self.active = false;
            restore_terminal(self.enhanced)?;
        }
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        drop(self.stop());
    }
}

/// Leave raw mode and the alternate screen.
fn restore_terminal(enhanced: bool) -> io::Result<()> {
    let mut out = io::stdout();
    if enhanced {
        out.execute(cevent::PopKeyboardEnhancementFlags)?;
    }
    out.execute(cevent::DisableMouseCapture)?;
    out.execute(terminal::LeaveAlternateScreen)?;
    out.execute(ccursor::Show)?;
    terminal::disable_raw_mode()
}

/// Translate a colour into a terminal colour, blending alpha over black.
fn translate_color(c: Color) -> style::Color {
    let (r, g, b) = c.darken(c.a).to_rgb8();
    style::Color::Rgb { r, g, b }
}

/// One character cell.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    /// Glyph.
    ch: char,
    /// Foreground colour.
    fg: Color,
    /// Background colour.
    bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::WHITE,
            bg: Color::BLACK,
        }
    }
}

/// A [`Canvas`] over a grid of terminal cells. One canvas unit is one cell.
#[derive(Debug)]
pub struct TermCanvas {
    /// Grid width.
    width: u16,
    /// Grid height.
    height: u16,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl TermCanvas {
    /// A blank canvas of the given size.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); usize::from(width) * usize::from(height)],
        }
    }

    /// A canvas the size of the terminal.
    pub fn from_terminal() -> Result<Self> {
        let (w, h) = terminal::size()?;
        Ok(Self::new(w, h))
    }

    /// Blank every cell.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// The glyph at a cell, for inspection.
    pub fn char_at(&self, x: u16, y: u16) -> Option<char> {
        self.index(i64::from(x), i64::from(y)).map(|i| self.cells[i].ch)
    }

    /// The grid as text, one line per row.
    pub fn lines(&self) -> Vec<String> {
        self.cells
            .chunks(usize::from(self.width).max(1))
            .map(|row| row.iter().map(|c| c.ch).collect())
            .collect()
    }

    /// Index of an in-bounds cell.
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        let in_bounds = (0..i64::from(self.width)).contains(&x) && (0..i64::from(self.height)).contains(&y);
        in_bounds.then(|| (y * i64::from(self.width) + x) as usize)
    }

    /// Apply `f` to a cell, clipping out-of-bounds writes.
    fn with_cell(&mut self, x: i64, y: i64, f: impl FnOnce(&mut Cell)) {
        if let Some(i) = self.index(x, y) {
            f(&mut self.cells[i]);
        }
    }

    /// Cell bounds covered by a rectangle: `(x0, y0, x1, y1)`, exclusive.
    fn cell_bounds(rect: Rect) -> (i64, i64, i64, i64) {
        let ul = rect.ul();
        let br = rect.br();
        (
            ul.x.round() as i64,
            ul.y.round() as i64,
            br.x.round() as i64,
            br.y.round() as i64,
        )
    }

    /// Write the grid to `out`.
    pub fn flush(&self, out: &mut impl Write) -> Result<()> {
        for (y, row) in self.cells.chunks(usize::from(self.width).max(1)).enumerate() {
            out.queue(ccursor::MoveTo(0, y as u16))?;
            for c in row {
                out.queue(style::SetForegroundColor(translate_color(c.fg)))?;
                out.queue(style::SetBackgroundColor(translate_color(c.bg)))?;
                out.queue(style::Print(c.ch))?;
            }
        }
        out.queue(style::ResetColor)?;
        out.flush()?;
        Ok(())
    }
}

impl Canvas for TermCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()> {
        let (x0, y0, x1, y1) = Self::cell_bounds(rect);
        for y in y0..y1 {
            for x in x0..x1 {
                self.with_cell(x, y, |c| c.bg = color);
            }
        }
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) -> Result<()> {
        let (x0, y0, x1, y1) = Self::cell_bounds(rect);
        if x1 <= x0 || y1 <= y0 {
            return Ok(());
        }
        let (r, b) = (x1 - 1, y1 - 1);
        for y in y0..y1 {
            for x in x0..x1 {
                let ch = match (x == x0, x == r, y == y0, y == b) {
                    (true, _, true, _) => '┌',
                    (_, true, true, _) => '┐',
                    (true, _, _, true) => '└',
                    (_, true, _, true) => '┘',
                    (_, _, true, _) | (_, _, _, true) => '─',
                    (true, _, _, _) | (_, true, _, _) => '│',
                    _ => continue,
                };
                self.with_cell(x, y, |c| {
                    c.ch = ch;
                    c.fg = color;
                });
            }
        }
        Ok(())
    }

    fn text(&mut self, pos: Vec2, txt: &str, color: Color) -> Result<()> {
        let y = pos.y.round() as i64;
        let x = pos.x.round() as i64;
        for (i, ch) in txt.chars().enumerate() {
            self.with_cell(x + i as i64, y, |c| {
                c.ch = ch;
                c.fg = color;
            });
        }
        Ok(())
    }
}

/// Run `app` in the terminal at `fps` frames per second until it returns
/// [`Flow::Exit`] or Ctrl-C is pressed.
///
/// The terminal is restored on return, on error, and on panic.
pub fn runloop(app: &mut dyn App, rt: &mut Runtime, fps: u32) -> Result<()> {
    let mut session = TerminalSession::new()?;
    let enhanced = session.reports_release();
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        drop(restore_terminal(enhanced));
        eprintln!("{info}");
    }));
    let _hook = guard(previous, |hook| {
        panic::set_hook(hook);
    });

    let period = Duration::from_secs(1) / fps.max(1);
    let mut input = TerminalInput::new(rt.sender(), session.reports_release());
    let mut canvas = TermCanvas::from_terminal()?;
    let mut out = io::stdout();
    let result = loop {
        let start = Instant::now();
        if let Err(e) = input.poll() {
            break Err(e);
        }
        if input.interrupted() {
            debug!("interrupted");
            break Ok(());
        }
        rt.begin_frame(start);
        let flow = app.update(rt);
        rt.end_frame();
        let flow = match flow {
            Ok(f) => f,
            Err(e) => break Err(e),
        };
        canvas.clear();
        if let Err(e) = app.draw(&mut canvas).and_then(|()| canvas.flush(&mut out)) {
            break Err(e);
        }
        if flow == Flow::Exit {
            break Ok(());
        }
        if let Some(rest) = period.checked_sub(start.elapsed()) {
            thread::sleep(rest);
        }
    };
    session.stop()?;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Input, InputSampler, event::EventQueue};

    fn key(code: cevent::KeyCode) -> cevent::Event {
        cevent::Event::Key(cevent::KeyEvent::new(code, cevent::KeyModifiers::NONE))
    }

    #[test]
    fn keys() {
        assert_eq!(translate_key(cevent::KeyCode::Enter), Some(KeyCode::ENTER));
        assert_eq!(translate_key(cevent::KeyCode::Char('q')), KeyCode::from_char('q'));
        assert_eq!(translate_key(cevent::KeyCode::F(2)), Some(KeyCode::named("F2")));
        assert_eq!(translate_key(cevent::KeyCode::Insert), None);
    }

    #[test]
    fn mouse_down_carries_position() {
        let m = cevent::MouseEvent {
            kind: cevent::MouseEventKind::Down(cevent::MouseButton::Left),
            column: 3,
            row: 4,
            modifiers: cevent::KeyModifiers::NONE,
        };
        assert_eq!(
            translate_mouse(m),
            vec![
                RawEvent::PointerMove(Vec2::new(3.5, 4.5)),
                RawEvent::PointerDown(Button::Primary)
            ]
        );
    }

    #[test]
    fn synthetic_release() -> Result<()> {
        let q = EventQueue::new();
        let mut s = InputSampler::new();
        let mut ti = TerminalInput::new(q.sender(), false);

        let mut pressed = HashSet::new();
        ti.handle(key(cevent::KeyCode::Up), &mut pressed)?;
        ti.release_stale(pressed)?;
        s.refresh(&q);
        assert_eq!(s.get(&KeyCode::UP), 1);

        // Auto-repeat keeps the key down.
        let mut pressed = HashSet::new();
        ti.handle(key(cevent::KeyCode::Up), &mut pressed)?;
        ti.release_stale(pressed)?;
        s.refresh(&q);
        assert_eq!(s.get(&KeyCode::UP), 2);

        ti.release_stale(HashSet::new())?;
        s.refresh(&q);
        assert_eq!(s.get(&KeyCode::UP), 0);
        Ok(())
    }

    #[test]
    fn interrupt() -> Result<()> {
        let q = EventQueue::new();
        let mut ti = TerminalInput::new(q.sender(), false);
        let e = cevent::Event::Key(cevent::KeyEvent::new(
            cevent::KeyCode::Char('c'),
            cevent::KeyModifiers::CONTROL,
        ));
        ti.handle(e, &mut HashSet::new())?;
        assert!(ti.interrupted());
        assert!(q.drain().is_empty());
        Ok(())
    }

    #[test]
    fn canvas_draws_boxes_and_text() -> Result<()> {
        let mut c = TermCanvas::new(6, 3);
        c.stroke_rect(Rect::from_corners(Vec2::new(0.0, 0.0), Vec2::new(6.0, 3.0)), Color::WHITE)?;
        c.text(Vec2::new(1.0, 1.0), "hi", Color::WHITE)?;
        c.text(Vec2::new(5.0, 1.0), "clipped", Color::WHITE)?;
        assert_eq!(c.lines(), vec!["┌────┐", "│hi  c", "└────┘"]);
        assert_eq!(c.char_at(1, 1), Some('h'));
        assert_eq!(c.char_at(9, 9), None);
        Ok(())
    }
}
