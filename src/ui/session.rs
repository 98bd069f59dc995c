//! Terminal ownership for the lifetime of the app
//!
//! [`TerminalSession::enter`] switches the terminal into raw mode on the
//! alternate screen with bracketed paste enabled; dropping the session undoes
//! all of it, including on early returns and panics that unwind.

use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{info, warn};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableBracketedPaste) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        info!("terminal session started");
        Ok(TerminalSession { terminal })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let restored = disable_raw_mode().and_then(|()| {
            execute!(
                self.terminal.backend_mut(),
                DisableBracketedPaste,
                LeaveAlternateScreen
            )
        });
        if let Err(e) = restored.and_then(|()| self.terminal.show_cursor()) {
            warn!("failed to restore terminal: {}", e);
        } else {
            info!("terminal session ended");
        }
    }
}
