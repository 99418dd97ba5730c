// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CursorPlacement, ScoredMatch, SuggestionEngine, cursor_placement,
            rendered_line_count};

/// Buffer, cursor, and repaint bookkeeping for the line being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineState {
    /// Runes of the buffer. `'\n'` separates lines.
    pub(super) line: Vec<char>,
    /// Rune index in `0..=line.len()`.
    pub(super) cursor: usize,
    /// Which entry of the ranked matches is selected (taken modulo their count).
    pub(super) match_index: usize,
    pub(super) prompt: String,
    pub(super) continuation_prompt: String,
    pub(super) show_ghost_text: bool,
    /// Number of lines drawn by the previous repaint.
    pub(super) last_line_count: usize,
    /// Row (relative to the first drawn line) where the previous repaint left the
    /// terminal cursor.
    pub(super) last_cursor_row: usize,
}

impl LineState {
    #[must_use]
    pub fn new(
        prompt: impl Into<String>,
        continuation_prompt: impl Into<String>,
        show_ghost_text: bool,
    ) -> Self {
        Self {
            line: Vec::new(),
            cursor: 0,
            match_index: 0,
            prompt: prompt.into(),
            continuation_prompt: continuation_prompt.into(),
            show_ghost_text,
            last_line_count: 1,
            last_cursor_row: 0,
        }
    }

    /// Start a fresh line with `prompt`. Nothing has been drawn yet.
    pub fn reset(&mut self, prompt: &str) {
        prompt.clone_into(&mut self.prompt);
        self.line.clear();
        self.cursor = 0;
        self.match_index = 0;
        self.last_line_count = 1;
        self.last_cursor_row = 0;
    }

    #[must_use]
    pub fn line(&self) -> &[char] { &self.line }

    #[must_use]
    pub fn line_string(&self) -> String { self.line.iter().collect() }

    #[must_use]
    pub fn cursor(&self) -> usize { self.cursor }

    #[must_use]
    pub fn match_index(&self) -> usize { self.match_index }

    #[must_use]
    pub fn prompt(&self) -> &str { &self.prompt }

    #[must_use]
    pub fn continuation_prompt(&self) -> &str { &self.continuation_prompt }

    pub fn set_continuation_prompt(&mut self, prompt: &str) {
        prompt.clone_into(&mut self.continuation_prompt);
    }

    pub fn set_show_ghost_text(&mut self, show_ghost_text: bool) {
        self.show_ghost_text = show_ghost_text;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.line.is_empty() }

    #[must_use]
    pub fn is_cursor_at_end(&self) -> bool { self.cursor == self.line.len() }

    #[must_use]
    pub fn cursor_placement(&self) -> CursorPlacement {
        cursor_placement(&self.line, self.cursor)
    }

    #[must_use]
    pub fn line_count(&self) -> usize { rendered_line_count(&self.line) }

    pub fn set_cursor(&mut self, pos: usize) { self.cursor = pos.min(self.line.len()); }

    pub fn set_match_index(&mut self, match_index: usize) {
        self.match_index = match_index;
    }

    /// Called after every change to the buffer.
    fn on_edit(&mut self) {
        self.match_index = 0;
        self.cursor = self.cursor.min(self.line.len());
    }

    pub fn insert_char(&mut self, rune: char) {
        self.line.insert(self.cursor, rune);
        self.cursor += 1;
        self.on_edit();
    }

    pub fn insert_str(&mut self, text: &str) {
        let tail = self.line.split_off(self.cursor);
        self.line.extend(text.chars());
        self.cursor = self.line.len();
        self.line.extend(tail);
        self.on_edit();
    }

    pub fn insert_newline(&mut self) { self.insert_char('\n'); }

    /// Returns `false` (and changes nothing) at the start of the buffer.
    pub fn delete_before_cursor(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.line.remove(self.cursor);
        self.on_edit();
        true
    }

    /// Returns `false` (and changes nothing) at the end of the buffer.
    pub fn delete_at_cursor(&mut self) -> bool {
        if self.is_cursor_at_end() {
            return false;
        }
        self.line.remove(self.cursor);
        self.on_edit();
        true
    }

    /// Remove the runes in `start..end`. A cursor inside the range moves to `start`, a
    /// cursor after it shifts left. Out of range bounds are clamped.
    pub fn delete_range(&mut self, start: usize, end: usize) {
        let end = end.min(self.line.len());
        let start = start.min(end);
        if start == end {
            return;
        }
        self.line.drain(start..end);
        if self.cursor >= end {
            self.cursor -= end - start;
        } else if self.cursor > start {
            self.cursor = start;
        }
        self.on_edit();
    }

    /// Swap the whole buffer (eg: for a history entry). The cursor goes to the end.
    pub fn replace_line(&mut self, text: &str) {
        self.line = text.chars().collect();
        self.cursor = self.line.len();
        self.on_edit();
    }

    /// Empty the buffer.
    pub fn clear(&mut self) { self.replace_line(""); }

    /// Index of the first rune of the line containing `pos`.
    #[must_use]
    pub fn find_line_start(&self, pos: usize) -> usize {
        let pos = pos.min(self.line.len());
        self.line[..pos]
            .iter()
            .rposition(|&rune| rune == '\n')
            .map_or(0, |index| index + 1)
    }

    /// Index of the `'\n'` ending the line containing `pos`, or the buffer length.
    #[must_use]
    pub fn find_line_end(&self, pos: usize) -> usize {
        let pos = pos.min(self.line.len());
        self.line[pos..]
            .iter()
            .position(|&rune| rune == '\n')
            .map_or(self.line.len(), |offset| pos + offset)
    }

    /// Skip the non-whitespace run at `pos`, then the whitespace run after it.
    #[must_use]
    pub fn find_next_word_start(&self, pos: usize) -> usize {
        let mut pos = pos.min(self.line.len());
        while pos < self.line.len() && !self.line[pos].is_whitespace() {
            pos += 1;
        }
        while pos < self.line.len() && self.line[pos].is_whitespace() {
            pos += 1;
        }
        pos
    }

    /// Skip the whitespace run before `pos`, then the non-whitespace run before that.
    #[must_use]
    pub fn find_prev_word_start(&self, pos: usize) -> usize {
        let mut pos = pos.min(self.line.len());
        while pos > 0 && self.line[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !self.line[pos - 1].is_whitespace() {
            pos -= 1;
        }
        pos
    }

    /// Start of the span `Ctrl+W` removes: spaces before `pos`, then the word before
    /// them. Never crosses the start of the current line.
    #[must_use]
    pub fn find_space_delimited_word_start(&self, pos: usize) -> usize {
        let line_start = self.find_line_start(pos);
        let mut start = pos.min(self.line.len());
        while start > line_start && self.line[start - 1] == ' ' {
            start -= 1;
        }
        while start > line_start && self.line[start - 1] != ' ' {
            start -= 1;
        }
        start
    }

    #[must_use]
    pub fn get_matches<'a>(&self, suggestions: &'a SuggestionEngine) -> Vec<ScoredMatch<'a>> {
        suggestions.get_matches(&self.line)
    }

    /// Ghost text for the current buffer, empty unless the cursor is at the end.
    #[must_use]
    pub fn find_ghost(&self, suggestions: &SuggestionEngine) -> String {
        suggestions.find_ghost(&self.line, self.cursor, self.match_index)
    }
}
