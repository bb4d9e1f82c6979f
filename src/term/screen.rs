//! Screen: the crossterm-backed presentation and input adapter.
//!
//! This is the only module that talks to the terminal. The contract it
//! offers the game is narrow: paint a logical pixel, paint a short string,
//! present the frame, and poll for at most one input event. A logical
//! pixel is two terminal columns wide, which roughly squares the glyph
//! aspect ratio, so logical column c lands at terminal column 2c.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{bail, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::term::color::Palette;
use crate::term::fb::{for_each_changed_run, Cell, FrameBuffer, Rgb};
use crate::types::{ColorId, InputEvent};

pub struct Screen {
    stdout: io::Stdout,
    palette: Palette,
    frame: FrameBuffer,
    last: Option<FrameBuffer>,
}

impl Screen {
    /// Create a screen over the given palette.
    ///
    /// Fails before any terminal state is touched when the terminal cannot
    /// represent the palette.
    pub fn new(palette: Palette) -> Result<Self> {
        if crossterm::style::available_color_count() < 256 {
            bail!(
                "terminal reports fewer than 256 colors; \
                 consider setting TERM=xterm-256color"
            );
        }
        let (width, height) = terminal::size().unwrap_or((80, 24));
        Ok(Self {
            stdout: io::stdout(),
            palette,
            frame: FrameBuffer::new(width, height),
            last: None,
        })
    }

    /// Put the terminal into game mode (raw, alternate screen, no cursor).
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Restore the terminal. Safe to call even after a failed frame.
    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Addressable grid: (rows, logical columns).
    pub fn logical_dimensions(&self) -> (u16, u16) {
        (self.frame.height(), self.frame.width() / 2)
    }

    /// Start a new frame: track terminal size and blank the buffer.
    pub fn begin_frame(&mut self) {
        let (width, height) = terminal::size().unwrap_or((80, 24));
        if width != self.frame.width() || height != self.frame.height() {
            self.frame.resize(width, height);
            // Size changed: the previous frame is useless for diffing.
            self.last = None;
        }
        self.frame.clear();
    }

    /// Paint one logical pixel in the palette pair's foreground color.
    pub fn draw_cell(&mut self, row: u16, col: u16, color: ColorId) -> Result<()> {
        let pair = self.palette.pair(color)?;
        let (r, g, b) = pair.fg.to_rgb8();
        let block = Rgb::new(r, g, b);
        let x = col * 2;
        for dx in 0..2 {
            self.frame.set(
                x + dx,
                row,
                Cell {
                    ch: ' ',
                    fg: block,
                    bg: block,
                },
            );
        }
        Ok(())
    }

    /// Paint a short label starting at a logical position.
    pub fn draw_text(&mut self, row: u16, col: u16, color: ColorId, text: &str) -> Result<()> {
        let pair = self.palette.pair(color)?;
        let (fr, fg_, fb_) = pair.fg.to_rgb8();
        let (br, bg_, bb) = pair.bg.to_rgb8();
        let fg = Rgb::new(fr, fg_, fb_);
        let bg = Rgb::new(br, bg_, bb);

        let mut x = col * 2;
        for ch in text.chars() {
            if x >= self.frame.width() {
                break;
            }
            self.frame.set(x, row, Cell { ch, fg, bg });
            x += 1;
        }
        Ok(())
    }

    /// Flush the frame, diffing against the previous one so only changed
    /// runs are written.
    pub fn present(&mut self) -> Result<()> {
        let mut prev = match self.last.take() {
            Some(prev) => {
                self.diff_redraw(&prev)?;
                prev
            }
            None => {
                self.full_redraw()?;
                FrameBuffer::new(self.frame.width(), self.frame.height())
            }
        };

        // The flushed frame becomes the diff base; the old base becomes
        // next frame's scratch buffer (no cloning).
        std::mem::swap(&mut prev, &mut self.frame);
        self.last = Some(prev);
        Ok(())
    }

    fn full_redraw(&mut self) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;

        let mut colors: Option<(Rgb, Rgb)> = None;
        for y in 0..self.frame.height() {
            self.stdout.queue(cursor::MoveTo(0, y))?;
            for x in 0..self.frame.width() {
                let cell = self.frame.get(x, y).unwrap_or_default();
                if colors != Some((cell.fg, cell.bg)) {
                    self.stdout.queue(SetForegroundColor(to_color(cell.fg)))?;
                    self.stdout.queue(SetBackgroundColor(to_color(cell.bg)))?;
                    colors = Some((cell.fg, cell.bg));
                }
                self.stdout.queue(Print(cell.ch))?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn diff_redraw(&mut self, prev: &FrameBuffer) -> Result<()> {
        let next = &self.frame;
        let stdout = &mut self.stdout;

        let mut colors: Option<(Rgb, Rgb)> = None;
        for_each_changed_run(prev, next, |x, y, len| -> Result<()> {
            stdout.queue(cursor::MoveTo(x, y))?;
            for dx in 0..len {
                let cell = next.get(x + dx, y).unwrap_or_default();
                if colors != Some((cell.fg, cell.bg)) {
                    stdout.queue(SetForegroundColor(to_color(cell.fg)))?;
                    stdout.queue(SetBackgroundColor(to_color(cell.bg)))?;
                    colors = Some((cell.fg, cell.bg));
                }
                stdout.queue(Print(cell.ch))?;
            }
            Ok(())
        })?;

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Wait up to `timeout` for input and translate it.
    ///
    /// Non-blocking by contract: returns `None` when nothing actionable is
    /// pending. At most one logical action per call.
    pub fn poll_input(&mut self, timeout: Duration) -> Result<Option<InputEvent>> {
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key)
                    if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                {
                    return Ok(translate_key(key));
                }
                Event::Resize(..) => {
                    self.last = None;
                }
                _ => {}
            }
        }
        Ok(None)
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn translate_key(key: KeyEvent) -> Option<InputEvent> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(InputEvent::Quit);
    }
    match key.code {
        KeyCode::Left => Some(InputEvent::MoveLeft),
        KeyCode::Right => Some(InputEvent::MoveRight),
        KeyCode::Down => Some(InputEvent::SoftDrop),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(InputEvent::RotateCw),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(InputEvent::RotateCcw),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputEvent::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn keys_map_to_the_original_bindings() {
        assert_eq!(
            translate_key(press(KeyCode::Left)),
            Some(InputEvent::MoveLeft)
        );
        assert_eq!(
            translate_key(press(KeyCode::Right)),
            Some(InputEvent::MoveRight)
        );
        assert_eq!(
            translate_key(press(KeyCode::Down)),
            Some(InputEvent::SoftDrop)
        );
        assert_eq!(
            translate_key(press(KeyCode::Char('s'))),
            Some(InputEvent::RotateCw)
        );
        assert_eq!(
            translate_key(press(KeyCode::Char('a'))),
            Some(InputEvent::RotateCcw)
        );
        assert_eq!(translate_key(press(KeyCode::Esc)), Some(InputEvent::Quit));
        assert_eq!(translate_key(press(KeyCode::Up)), None);
    }

    #[test]
    fn ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(translate_key(key), Some(InputEvent::Quit));
    }
}
