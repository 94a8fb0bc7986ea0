//! crossterm backed [`Terminal`] for the interactive binary.

use std::io::{self, Stdout, Write};

use boundcast_core::session::Terminal;
use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode},
};
use tracing::{trace, warn};

/// Keeps the terminal in raw mode for as long as it lives.
///
/// Dropping the guard restores the previous mode, whichever way the scope is left.
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;
        trace!("raw mode enabled");
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        match disable_raw_mode() {
            Ok(()) => trace!("raw mode restored"),
            Err(err) => warn!("failed to restore terminal mode: {err}"),
        }
    }
}

pub struct Console {
    out: Stdout,
}

impl Console {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal for Console {
    fn clear_screen(&mut self) -> io::Result<()> {
        execute!(
            self.out,
            Clear(ClearType::All),
            Clear(ClearType::Purge),
            MoveTo(0, 0)
        )
    }

    fn wait_for_key(&mut self) -> io::Result<()> {
        self.out.flush()?;
        let _guard = RawModeGuard::acquire()?;

        loop {
            let Event::Key(key_event) = event::read()? else {
                continue;
            };
            if key_event.kind != KeyEventKind::Press {
                continue;
            }

            let is_ctrl_c = key_event.code == KeyCode::Char('c')
                && key_event.modifiers.contains(KeyModifiers::CONTROL);
            if is_ctrl_c {
                return Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted by Ctrl+C"));
            }

            trace!(key = ?key_event.code, "key pressed");
            return Ok(());
        }
    }
}
