// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Raw mode for platforms without termios, delegating to crossterm (which keeps the
//! original console mode itself).

use super::{RawModeDriver, SavedTermState};
use miette::miette;
use std::sync::Arc;

#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermRawMode;

impl RawModeDriver for CrosstermRawMode {
    fn enable_raw(&self) -> miette::Result<SavedTermState> {
        crossterm::terminal::enable_raw_mode()
            .map_err(|e| miette!("failed to enable raw mode: {e}"))?;
        Ok(SavedTermState::Unchanged)
    }

    fn restore(&self, _saved: SavedTermState) -> miette::Result<()> {
        crossterm::terminal::disable_raw_mode()
            .map_err(|e| miette!("failed to disable raw mode: {e}"))
    }
}

/// The raw mode driver for the current platform.
#[must_use]
pub fn default_raw_mode_driver() -> Arc<dyn RawModeDriver> { Arc::new(CrosstermRawMode) }
