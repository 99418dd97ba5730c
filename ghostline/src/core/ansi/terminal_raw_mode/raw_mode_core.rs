// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Platform agnostic raw mode API: the [`RawModeDriver`] seam and the [`RawModeGuard`]
//! RAII wrapper.

use std::{fmt::{self, Debug},
          sync::Arc};

/// Terminal settings captured by [`RawModeDriver::enable_raw`], handed back to
/// [`RawModeDriver::restore`].
#[derive(Clone)]
pub enum SavedTermState {
    /// Original termios settings of the controlling terminal.
    #[cfg(unix)]
    Termios(rustix::termios::Termios),
    /// The driver didn't capture anything (no-op driver, or the platform library keeps
    /// its own copy).
    Unchanged,
}

impl Debug for SavedTermState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(unix)]
            SavedTermState::Termios(_) => f.write_str("SavedTermState::Termios(..)"),
            SavedTermState::Unchanged => f.write_str("SavedTermState::Unchanged"),
        }
    }
}

/// Switches the terminal into raw mode and back.
///
/// This is the seam where a test (or a host that manages the terminal itself) can
/// replace the real OS call. See [`NoopRawMode`] and [`crate::RecordingRawMode`].
pub trait RawModeDriver: Debug + Send + Sync {
    /// Enable raw mode, returning the settings needed to undo it.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal attributes can't be read or written.
    fn enable_raw(&self) -> miette::Result<SavedTermState>;

    /// Restore the settings captured by [`Self::enable_raw`].
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal attributes can't be written.
    fn restore(&self, saved: SavedTermState) -> miette::Result<()>;
}

/// Driver that leaves the terminal alone. Used when input doesn't come from a terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRawMode;

impl RawModeDriver for NoopRawMode {
    fn enable_raw(&self) -> miette::Result<SavedTermState> { Ok(SavedTermState::Unchanged) }

    fn restore(&self, _saved: SavedTermState) -> miette::Result<()> { Ok(()) }
}

/// RAII guard that restores the terminal when dropped.
///
/// Recommended (and, inside this crate, the only) way to use raw mode, since it ensures
/// terminal restoration on every exit path, including panics.
#[derive(Debug)]
pub struct RawModeGuard {
    driver: Arc<dyn RawModeDriver>,
    saved: Option<SavedTermState>,
}

impl RawModeGuard {
    /// Create a new guard and enable raw mode.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode cannot be enabled. Nothing needs restoring in that
    /// case.
    pub fn new(driver: Arc<dyn RawModeDriver>) -> miette::Result<Self> {
        let saved = driver.enable_raw()?;
        tracing::trace!(?saved, "raw mode enabled");
        Ok(Self {
            driver,
            saved: Some(saved),
        })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take()
            && let Err(err) = self.driver.restore(saved)
        {
            // Nothing can be propagated out of drop.
            tracing::warn!(%err, "failed to restore terminal from raw mode");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordingRawMode;

    #[test]
    fn test_guard_restores_on_drop() {
        let driver = RecordingRawMode::default();
        {
            let _guard = RawModeGuard::new(Arc::new(driver.clone())).unwrap();
            assert_eq!(driver.enable_count(), 1);
            assert_eq!(driver.restore_count(), 0);
        }
        assert_eq!(driver.restore_count(), 1);
    }

    #[test]
    fn test_guard_restores_on_panic() {
        let driver = RecordingRawMode::default();
        let driver_clone = driver.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _guard = RawModeGuard::new(Arc::new(driver_clone)).unwrap();
            panic!("boom");
        }));
        assert!(result.is_err());
        assert_eq!(driver.enable_count(), 1);
        assert_eq!(driver.restore_count(), 1);
    }

    #[test]
    fn test_failed_enable_does_not_restore() {
        let driver = RecordingRawMode::failing();
        assert!(RawModeGuard::new(Arc::new(driver.clone())).is_err());
        assert_eq!(driver.restore_count(), 0);
    }
}
