//! Flushes frames to a real terminal.
//!
//! Raw mode plus alternate screen on enter, restored on exit. Drawing is a
//! full redraw per frame; the frame is small enough that diffing is not
//! worth the bookkeeping here.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use blockfall_types::Rgb;

use crate::frame::Frame;

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(0, 0))?;

        for y in 0..frame.height() {
            self.stdout.queue(cursor::MoveTo(0, y))?;
            let mut current_fg = None;
            let mut current_bg = None;
            for x in 0..frame.width() {
                let cell = frame.get(x, y).unwrap_or_default();

                let fg = Some(cell.fg);
                if current_fg != fg {
                    self.stdout.queue(SetForegroundColor(to_color(cell.fg)))?;
                    current_fg = fg;
                }
                if current_bg != Some(cell.bg) {
                    match cell.bg {
                        Some(bg) => {
                            self.stdout.queue(SetBackgroundColor(to_color(bg)))?;
                        }
                        None => {
                            self.stdout.queue(SetBackgroundColor(Color::Reset))?;
                        }
                    }
                    current_bg = Some(cell.bg);
                }
                self.stdout.queue(Print(cell.ch))?;
            }
            self.stdout.queue(ResetColor)?;
        }

        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
