//! Terminal presenter
//!
//! Draws the canvas with half-block cells (each cell shows two vertically
//! stacked pixels: foreground on top, background below) and overlays the
//! text labels. Keyboard input doubles as steering for the synthetic
//! camera's subject.

use std::io::{self, Stdout, Write, stdout};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{self, Color};
use crossterm::{cursor, execute, queue, terminal};

use super::{Canvas, Renderer, Rgb};
use crate::error::GameError;
use crate::platform::{Frame, Subject};

fn term_color(c: Rgb) -> Color {
    Color::Rgb {
        r: c.0,
        g: c.1,
        b: c.2,
    }
}

/// Run `setup`, calling `undo` if it fails. No `Drop` guard exists yet at
/// that point to restore the terminal.
fn undo_on_error<T>(setup: impl FnOnce() -> io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    setup().inspect_err(|_| undo())
}

pub struct TerminalRenderer {
    out: Stdout,
    canvas: Canvas,
    steering: Option<(Subject, i32)>,
}

impl TerminalRenderer {
    /// Take over the terminal (raw mode, alternate screen) until dropped
    pub fn new(width: u32, height: u32) -> Result<Self, GameError> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        undo_on_error(
            || {
                execute!(
                    out,
                    terminal::EnterAlternateScreen,
                    cursor::Hide,
                    terminal::DisableLineWrap,
                )
            },
            || {
                let _ = terminal::disable_raw_mode();
            },
        )?;
        Ok(Self {
            out,
            canvas: Canvas::new(width, height),
            steering: None,
        })
    }

    /// Route left/right keys to `subject`, `step` pixels per press
    pub fn with_steering(mut self, subject: Subject, step: i32) -> Self {
        self.steering = Some((subject, step));
        self
    }

    /// Map a terminal event to a game key. Steering keys are consumed here.
    fn translate(&self, event: Event) -> Option<char> {
        let Event::Key(key) = event else { return None };
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some('q'),
            KeyCode::Esc => Some('q'),
            KeyCode::Left | KeyCode::Char('a') => {
                self.steer(-1);
                None
            }
            KeyCode::Right | KeyCode::Char('d') => {
                self.steer(1);
                None
            }
            KeyCode::Char(c) => Some(c),
            _ => None,
        }
    }

    fn steer(&self, direction: i32) {
        if let Some((subject, step)) = &self.steering {
            subject.nudge(direction * step);
        }
    }

    fn draw_pixels(&mut self, cols: u32, rows: u32) -> io::Result<()> {
        let pixel_rows = rows * 2;
        let mut prev: Option<(Rgb, Rgb)> = None;

        for row in 0..rows {
            queue!(self.out, cursor::MoveTo(0, row as u16))?;
            for col in 0..cols {
                let top = self.canvas.sample(col, row * 2, cols, pixel_rows);
                let bot = self.canvas.sample(col, row * 2 + 1, cols, pixel_rows);

                if prev.is_none_or(|(fg, _)| fg != top) {
                    queue!(self.out, style::SetForegroundColor(term_color(top)))?;
                }
                if prev.is_none_or(|(_, bg)| bg != bot) {
                    queue!(self.out, style::SetBackgroundColor(term_color(bot)))?;
                }
                prev = Some((top, bot));
                queue!(self.out, style::Print('\u{2580}'))?; // ▀
            }
        }
        queue!(self.out, style::ResetColor)
    }

    fn draw_labels(&mut self, cols: u32, rows: u32) -> io::Result<()> {
        let (w, h) = (self.canvas.width().max(1) as i64, self.canvas.height().max(1) as i64);
        for label in self.canvas.labels() {
            // Label y is a baseline; the glyph row sits just above it
            let col = (label.x.max(0) as i64 * cols as i64 / w) as u32;
            let row = ((label.y.max(0) as i64 * rows as i64 / h) as u32).saturating_sub(1);
            if col >= cols || row >= rows {
                continue;
            }
            let room = (cols - col) as usize;
            let text: String = label.text.chars().take(room).collect();
            queue!(
                self.out,
                cursor::MoveTo(col as u16, row as u16),
                style::SetForegroundColor(term_color(label.color)),
                style::SetBackgroundColor(Color::Black),
                style::Print(text),
            )?;
        }
        queue!(self.out, style::ResetColor)
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap,
        );
        let _ = terminal::disable_raw_mode();
    }
}

impl Renderer for TerminalRenderer {
    fn begin(&mut self, frame: &Frame) {
        self.canvas.load_frame(frame);
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
        self.canvas.fill_rect(x, y, w, h, color);
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Rgb) {
        self.canvas.fill_circle(cx, cy, radius, color);
    }

    fn text(&mut self, x: i32, y: i32, text: &str, scale: f32, color: Rgb) {
        self.canvas.text(x, y, text, scale, color);
    }

    fn blend(&mut self, color: Rgb, alpha: f32) {
        self.canvas.blend(color, alpha);
    }

    fn present(&mut self) -> Result<(), GameError> {
        let (cols, rows) = terminal::size()?;
        let (cols, rows) = (cols.max(1) as u32, rows.max(1) as u32);
        self.draw_pixels(cols, rows)?;
        self.draw_labels(cols, rows)?;
        self.out.flush()?;
        Ok(())
    }

    fn poll_key(&mut self) -> Result<Option<char>, GameError> {
        while event::poll(Duration::ZERO)? {
            if let Some(key) = self.translate(event::read()?) {
                return Ok(Some(key));
            }
        }
        Ok(None)
    }

    fn wait_key(&mut self) -> Result<char, GameError> {
        loop {
            if let Some(key) = self.translate(event::read()?) {
                return Ok(key);
            }
        }
    }
}
