//! Raw-mode terminal session for the simulated game window.
//!
//! Mouse capture is on for the whole session so clicks on the map can move
//! the overlay's cursor.
use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal while the game window is open.
///
/// [`close`](Self::close) reports teardown errors; dropping the session
/// without closing it (an early `?` return) still restores the terminal.
pub struct TerminalSession {
    tui: Tui,
    active: bool,
}

impl TerminalSession {
    pub fn open() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }

        let tui = Terminal::new(CrosstermBackend::new(stdout))?;
        tracing::debug!("Terminal session opened");
        Ok(Self { tui, active: true })
    }

    pub fn tui(&mut self) -> &mut Tui {
        &mut self.tui
    }

    pub fn close(mut self) -> Result<()> {
        self.leave()
    }

    fn leave(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        execute!(self.tui.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
        disable_raw_mode()?;
        self.tui.show_cursor()?;
        tracing::debug!("Terminal session closed");
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = self.leave() {
            tracing::warn!("Failed to restore terminal: {e}");
        }
    }
}
