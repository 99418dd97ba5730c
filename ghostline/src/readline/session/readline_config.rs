// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::HISTORY_SIZE_MAX;
use strum_macros::{Display, EnumString};

/// Default prompt for the second and later lines of a multi-line buffer.
pub const DEFAULT_CONTINUATION_PROMPT: &str = "... ";

/// Whether [`readline()`][crate::Session::readline] switches the terminal to raw mode.
/// Parses from and displays as `"terminal"` / `"disabled"`, eg: for an environment
/// variable override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum RawModePolicy {
    /// Raw mode for the duration of each call, when the input is stdin.
    #[default]
    Terminal,
    /// Never touch the terminal settings.
    Disabled,
}

/// Settings for a [`Session`][crate::Session].
///
/// ```
/// use r3bl_ghostline::{RawModePolicy, ReadlineConfig};
///
/// let config = ReadlineConfig::default()
///     .with_continuation_prompt("> ")
///     .with_max_history(50)
///     .with_raw_mode(RawModePolicy::Disabled);
/// assert_eq!(config.max_history, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadlineConfig {
    pub continuation_prompt: String,
    /// Oldest entries are evicted beyond this many.
    pub max_history: usize,
    /// When `false` ghost text is never drawn. Accepting suggestions with `Tab`,
    /// `Right`, and `Ctrl+Right` still works.
    pub show_ghost_text: bool,
    pub raw_mode: RawModePolicy,
}

impl Default for ReadlineConfig {
    fn default() -> Self {
        Self {
            continuation_prompt: DEFAULT_CONTINUATION_PROMPT.to_string(),
            max_history: HISTORY_SIZE_MAX,
            show_ghost_text: true,
            raw_mode: RawModePolicy::default(),
        }
    }
}

impl ReadlineConfig {
    #[must_use]
    pub fn with_continuation_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.continuation_prompt = prompt.into();
        self
    }

    #[must_use]
    pub fn with_max_history(mut self, max_history: usize) -> Self {
        self.max_history = max_history;
        self
    }

    #[must_use]
    pub fn with_show_ghost_text(mut self, show_ghost_text: bool) -> Self {
        self.show_ghost_text = show_ghost_text;
        self
    }

    #[must_use]
    pub fn with_raw_mode(mut self, raw_mode: RawModePolicy) -> Self {
        self.raw_mode = raw_mode;
        self
    }
}
