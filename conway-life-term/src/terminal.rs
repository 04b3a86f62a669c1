use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use life_grid::{Cell, Clock, Loc, Renderer};
use log::warn;
use std::io::{self, Write};
use std::mem;
use std::thread;
use std::time::Duration;

pub const ALIVE_GLYPH: char = ' ';
pub const DEAD_GLYPH: char = '█';

/// Draws each generation as one glyph per cell, clearing the screen first.
///
/// The first write error is kept and every later write is skipped until
/// [`take_error`](Self::take_error) hands it to the caller.
pub struct TerminalRenderer<W: Write> {
    out: W,
    needs_clear: bool,
    error: Option<io::Error>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            needs_clear: true,
            error: None,
        }
    }

    pub fn take_error(&mut self) -> io::Result<()> {
        match self.error.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    fn write<F>(&mut self, f: F)
    where
        F: FnOnce(&mut W) -> io::Result<()>,
    {
        if self.error.is_some() {
            return;
        }
        if let Err(error) = f(&mut self.out) {
            warn!("terminal write failed: {error}");
            self.error = Some(error);
        }
    }
}

fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Alive => ALIVE_GLYPH,
        Cell::Dead => DEAD_GLYPH,
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw_cell(&mut self, _loc: Loc, cell: Cell) {
        let clear = mem::replace(&mut self.needs_clear, false);
        self.write(|out| {
            if clear {
                queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
            }
            queue!(out, Print(glyph(cell)))
        });
    }

    fn end_row(&mut self, _row: usize) {
        self.write(|out| queue!(out, Print('\n')));
    }

    fn end_generation(&mut self) {
        self.needs_clear = true;
        self.write(|out| out.flush());
    }
}

pub struct SleepClock {
    period: Duration,
}

impl SleepClock {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }
}

impl Clock for SleepClock {
    fn tick(&mut self) {
        thread::sleep(self.period);
    }
}
