// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::VecDeque;

/// Default number of entries kept before the oldest ones are evicted.
pub const HISTORY_SIZE_MAX: usize = 1_000;

/// Submitted lines plus an Up / Down navigation cursor.
///
/// Entries are stored newest first. `current_position` is `None` while the user is
/// editing fresh input, and `Some(index)` while they are browsing, where index `0` is
/// the newest entry. The in-progress input is stashed in `saved_input` when browsing
/// starts, and handed back when the user walks past the newest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: VecDeque<String>,
    max_size: usize,
    current_position: Option<usize>,
    saved_input: String,
}

impl Default for History {
    fn default() -> Self { Self::new(HISTORY_SIZE_MAX) }
}

impl History {
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: VecDeque::default(),
            max_size,
            current_position: None,
            saved_input: String::new(),
        }
    }

    /// Record a submitted line. Leading and trailing whitespace is trimmed. Empty lines
    /// and immediate repeats of the newest entry are dropped. Navigation is reset.
    pub fn add(&mut self, line: &str) {
        self.current_position = None;

        let line = line.trim();
        if line.is_empty() || self.entries.front().is_some_and(|it| it == line) {
            return;
        }

        self.entries.push_front(line.to_string());

        while self.entries.len() > self.max_size {
            self.entries.pop_back();
        }
    }

    /// Stop browsing and remember `current` as the text to restore.
    pub fn reset(&mut self, current: &str) {
        self.current_position = None;
        current.clone_into(&mut self.saved_input);
    }

    /// Step one entry back in time. The first step stashes `current`. Returns `None`
    /// when there is no history or the oldest entry is already showing.
    pub fn previous(&mut self, current: &str) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let index = match self.current_position {
            None => {
                current.clone_into(&mut self.saved_input);
                0
            }
            Some(index) if index + 1 < self.entries.len() => index + 1,
            Some(_) => return None,
        };
        self.current_position = Some(index);
        self.entries.get(index).map(String::as_str)
    }

    /// Step one entry forward in time. Walking past the newest entry ends browsing and
    /// returns the stashed input. Returns `None` when not browsing.
    pub fn next(&mut self) -> Option<&str> {
        match self.current_position? {
            0 => {
                self.current_position = None;
                Some(self.saved_input.as_str())
            }
            index => {
                self.current_position = Some(index - 1);
                self.entries.get(index - 1).map(String::as_str)
            }
        }
    }

    #[must_use]
    pub fn is_navigating(&self) -> bool { self.current_position.is_some() }

    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    #[must_use]
    pub fn max_size(&self) -> usize { self.max_size }

    /// Entries, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.entries.iter().rev().map(String::as_str)
    }
}
