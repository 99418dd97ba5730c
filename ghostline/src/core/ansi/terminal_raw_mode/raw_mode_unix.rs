// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Unix/Linux/macOS implementation of raw mode using rustix's safe termios API.

use super::{RawModeDriver, SavedTermState};
use miette::miette;
use rustix::{fd::{AsFd, BorrowedFd},
             termios::{self, OptionalActions}};
use std::{fs::File, io, sync::Arc};

/// Represents either stdin or `/dev/tty` for terminal operations.
///
/// This enum allows us to handle both cases where stdin is a tty (normal terminal usage)
/// and where stdin is redirected (e.g., piped input), requiring us to use `/dev/tty`.
enum TerminalFd {
    /// Using standard input (when it's a terminal)
    Stdin(io::Stdin),
    /// Using `/dev/tty` (when stdin is redirected)
    DevTty(File),
}

impl AsFd for TerminalFd {
    fn as_fd(&self) -> BorrowedFd<'_> {
        match self {
            TerminalFd::Stdin(stdin) => stdin.as_fd(),
            TerminalFd::DevTty(file) => file.as_fd(),
        }
    }
}

/// Checks if stdin is a tty and uses it if so; otherwise opens `/dev/tty`.
fn get_terminal_fd() -> io::Result<TerminalFd> {
    let stdin = io::stdin();
    if termios::isatty(&stdin) {
        Ok(TerminalFd::Stdin(stdin))
    } else {
        let file = File::options().read(true).write(true).open("/dev/tty")?;
        Ok(TerminalFd::DevTty(file))
    }
}

/// Raw mode via termios. Unlike a process global "original settings" slot, the captured
/// settings travel inside the [`SavedTermState`] that [`crate::RawModeGuard`] owns.
#[derive(Debug, Default, Clone, Copy)]
pub struct TermiosRawMode;

impl RawModeDriver for TermiosRawMode {
    fn enable_raw(&self) -> miette::Result<SavedTermState> {
        let fd = get_terminal_fd()
            .map_err(|e| miette!("failed to get terminal file descriptor: {e}"))?;

        let mut termios = termios::tcgetattr(&fd)
            .map_err(|e| miette!("failed to retrieve terminal attributes: {e}"))?;

        // rustix's Termios doesn't implement Copy, so we need to clone.
        let saved = SavedTermState::Termios(termios.clone());

        // Same as cfmakeraw: no ICANON, no ISIG, no ECHO, VMIN=1, VTIME=0.
        termios.make_raw();

        termios::tcsetattr(&fd, OptionalActions::Now, &termios)
            .map_err(|e| miette!("failed to set terminal attributes: {e}"))?;

        Ok(saved)
    }

    fn restore(&self, saved: SavedTermState) -> miette::Result<()> {
        let SavedTermState::Termios(termios) = saved else {
            return Ok(());
        };

        let fd = get_terminal_fd()
            .map_err(|e| miette!("failed to get terminal file descriptor: {e}"))?;

        termios::tcsetattr(&fd, OptionalActions::Now, &termios)
            .map_err(|e| miette!("failed to set terminal attributes: {e}"))?;

        Ok(())
    }
}

/// The raw mode driver for the current platform.
#[must_use]
pub fn default_raw_mode_driver() -> Arc<dyn RawModeDriver> { Arc::new(TermiosRawMode) }
