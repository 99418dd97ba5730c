// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{RawModeDriver, SavedTermState};
use std::sync::{Arc,
                atomic::{AtomicBool, AtomicUsize, Ordering}};

/// [`RawModeDriver`] that never touches the terminal and counts how often it was asked
/// to enable and restore. Clones share the counters.
#[derive(Debug, Clone, Default)]
pub struct RecordingRawMode {
    enable_count: Arc<AtomicUsize>,
    restore_count: Arc<AtomicUsize>,
    fail_enable: Arc<AtomicBool>,
}

impl RecordingRawMode {
    /// A driver whose `enable_raw()` always fails.
    #[must_use]
    pub fn failing() -> Self {
        let it = Self::default();
        it.fail_enable.store(true, Ordering::SeqCst);
        it
    }

    #[must_use]
    pub fn enable_count(&self) -> usize { self.enable_count.load(Ordering::SeqCst) }

    #[must_use]
    pub fn restore_count(&self) -> usize { self.restore_count.load(Ordering::SeqCst) }

    /// `true` when every enable has been matched by a restore.
    #[must_use]
    pub fn is_balanced(&self) -> bool { self.enable_count() == self.restore_count() }
}

impl RawModeDriver for RecordingRawMode {
    fn enable_raw(&self) -> miette::Result<SavedTermState> {
        if self.fail_enable.load(Ordering::SeqCst) {
            return Err(miette::miette!("not a terminal"));
        }
        self.enable_count.fetch_add(1, Ordering::SeqCst);
        Ok(SavedTermState::Unchanged)
    }

    fn restore(&self, _saved: SavedTermState) -> miette::Result<()> {
        self.restore_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
