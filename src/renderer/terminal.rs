//! crossterm output for composed frames

use std::io::{self, Stdout, Write, stdout};

use crossterm::{cursor, execute, queue, style, terminal};

use super::frame::{Frame, compose};
use crate::sim::Snapshot;

/// Owns the terminal while the game runs (raw mode + alternate screen)
pub struct TerminalRenderer {
    out: Stdout,
    size: (u16, u16),
    active: bool,
}

impl TerminalRenderer {
    pub fn new() -> io::Result<Self> {
        let mut out = stdout();
        terminal::enable_raw_mode()?;
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
            terminal::Clear(terminal::ClearType::All),
        )?;
        let size = terminal::size()?;
        log::info!("Terminal renderer ready ({}x{})", size.0, size.1);
        Ok(Self {
            out,
            size,
            active: true,
        })
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.size = (cols, rows);
    }

    /// Draw one snapshot at the current terminal size
    pub fn render(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        let frame = compose(snapshot, self.size.0, self.size.1);
        self.draw(&frame)
    }

    fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        for (row, line) in frame.lines().iter().enumerate() {
            queue!(self.out, cursor::MoveTo(0, row as u16), style::Print(line))?;
        }
        self.out.flush()
    }

    /// Give the terminal back to the shell
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(
            self.out,
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap,
        )?;
        terminal::disable_raw_mode()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            log::error!("Failed to restore terminal: {}", e);
        }
    }
}
