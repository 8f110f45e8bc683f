//! Raw-mode terminal setup and teardown.

use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use std::io::{self, Write};

/// Puts the terminal into raw mode on the alternate screen for as long as
/// it is alive.
///
/// Dropping the guard restores the terminal, including while unwinding from
/// a panic.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        log::debug!("Terminal in raw mode");
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        log::debug!("Terminal restored");
    }
}

/// Returns the terminal size as (rows, cols).
pub fn size() -> io::Result<(usize, usize)> {
    let (cols, rows) = terminal::size()?;
    Ok((usize::from(rows), usize::from(cols)))
}

/// Writes a complete frame and flushes it.
pub fn write_frame<W: Write>(out: &mut W, frame: &[u8]) -> io::Result<()> {
    out.write_all(frame)?;
    out.flush()
}
