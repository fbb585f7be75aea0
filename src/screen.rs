//! Terminal clearing

use std::io::{self, IsTerminal};
use std::process::Command;

/// Clear the terminal before the agreement is shown
///
/// Best effort: does nothing when stdout is not a terminal, and any failure of
/// the platform clear command is only logged.
pub fn clear_screen() {
    if !io::stdout().is_terminal() {
        log::debug!("stdout is not a terminal, skipping screen clear");
        return;
    }

    let status = if cfg!(windows) {
        Command::new("cmd").args(["/C", "cls"]).status()
    } else {
        Command::new("clear").status()
    };

    match status {
        Ok(s) if s.success() => {},
        Ok(s) => log::debug!("clear command exited with {s}"),
        Err(e) => log::debug!("failed to run clear command: {e}"),
    }
}
