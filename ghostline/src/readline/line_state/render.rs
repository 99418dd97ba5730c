// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::core::LineState;
use crate::{CRLF, CsiSequence, SuggestionEngine, ok, str_display_width};
use std::io::{self, Write};

fn to_u16(value: usize) -> u16 { u16::try_from(value).unwrap_or(u16::MAX) }

impl LineState {
    /// Prompt for the given buffer row.
    #[must_use]
    pub fn prompt_for_row(&self, row: usize) -> &str {
        if row == 0 {
            &self.prompt
        } else {
            &self.continuation_prompt
        }
    }

    #[must_use]
    pub fn last_line_count(&self) -> usize { self.last_line_count }

    /// Repaint everything and put the terminal cursor where the buffer cursor is.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to or flushing the terminal fails.
    pub fn render_and_flush(
        &mut self,
        term: &mut dyn Write,
        suggestions: &SuggestionEngine,
    ) -> io::Result<()> {
        let ghost = if self.show_ghost_text {
            self.find_ghost(suggestions)
        } else {
            String::new()
        };
        let output = self.paint(&ghost, true);
        term.write_all(output.as_bytes())?;
        term.flush()?;
        ok!()
    }

    /// Repaint without ghost text and move to a fresh line below the buffer. Used when
    /// the line is finished (submitted, interrupted, or end of input).
    ///
    /// # Errors
    ///
    /// Returns an error if writing to or flushing the terminal fails.
    pub fn render_final_and_flush(&mut self, term: &mut dyn Write) -> io::Result<()> {
        let mut output = self.paint("", false);
        output.push_str(CRLF);
        self.last_line_count = 1;
        self.last_cursor_row = 0;
        term.write_all(output.as_bytes())?;
        term.flush()?;
        ok!()
    }

    /// Build the repaint. Starts by going back to the first line drawn last time, so it
    /// is safe to call any number of times in a row.
    fn paint(&mut self, ghost: &str, place_cursor: bool) -> String {
        let mut output = String::from("\r");
        if self.last_cursor_row > 0 {
            output.push_str(&CsiSequence::CursorUp(to_u16(self.last_cursor_row)).to_string());
        }
        output.push_str(&CsiSequence::EraseDisplayToEnd.to_string());

        for (row, text) in self.line.split(|&rune| rune == '\n').enumerate() {
            if row > 0 {
                output.push_str(CRLF);
            }
            output.push_str(self.prompt_for_row(row));
            output.extend(text);
        }

        if !ghost.is_empty() {
            output.push_str(&CsiSequence::Dim.to_string());
            output.push_str(ghost);
            output.push_str(&CsiSequence::ResetAttributes.to_string());
        }

        let line_count = self.line_count();
        if place_cursor {
            let placement = self.cursor_placement();
            let rows_up = line_count - 1 - placement.row;
            if rows_up > 0 {
                output.push_str(&CsiSequence::CursorUp(to_u16(rows_up)).to_string());
            }
            let prompt_width = str_display_width(self.prompt_for_row(placement.row));
            let column = prompt_width + placement.col + 1;
            output.push_str(
                &CsiSequence::CursorHorizontalAbsolute(to_u16(column)).to_string(),
            );
            self.last_cursor_row = placement.row;
        } else {
            self.last_cursor_row = line_count - 1;
        }

        tracing::trace!(
            message = "repaint",
            line_count,
            previous_line_count = self.last_line_count,
            cursor_row = self.last_cursor_row,
            ghost_len = ghost.chars().count(),
        );
        self.last_line_count = line_count;

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{StdoutMock, VirtualTerminal};
    use pretty_assertions::assert_eq;

    fn suggestions(items: &[&str]) -> SuggestionEngine {
        SuggestionEngine::new(items.iter().map(ToString::to_string).collect())
    }

    fn line_state_with(text: &str, cursor: usize) -> LineState {
        let mut line_state = LineState::new("> ", "... ", true);
        line_state.replace_line(text);
        line_state.set_cursor(cursor);
        line_state
    }

    fn render(line_state: &mut LineState, engine: &SuggestionEngine) -> String {
        let mut stdout_mock = StdoutMock::default();
        line_state.render_and_flush(&mut stdout_mock, engine).unwrap();
        stdout_mock.get_copy_of_buffer_as_string()
    }

    #[test]
    fn test_single_line_exact_output() {
        let mut line_state = line_state_with("hel", 3);
        let output = render(&mut line_state, &suggestions(&["hello"]));
        assert_eq!(output, "\r\x1b[J> hel\x1b[2mlo\x1b[0m\x1b[6G");
        assert_eq!(line_state.last_line_count(), 1);
    }

    #[test]
    fn test_no_ghost_when_cursor_not_at_end() {
        let mut line_state = line_state_with("hel", 1);
        let output = render(&mut line_state, &suggestions(&["hello"]));
        assert_eq!(output, "\r\x1b[J> hel\x1b[4G");
    }

    #[test]
    fn test_no_ghost_when_disabled() {
        let mut line_state = line_state_with("hel", 3);
        line_state.set_show_ghost_text(false);
        let output = render(&mut line_state, &suggestions(&["hello"]));
        assert!(!output.contains("\x1b[2m"));
    }

    #[test]
    fn test_multi_line_cursor_placement() {
        let mut line_state = line_state_with("ab\ncd\nef", 4);
        let output = render(&mut line_state, &SuggestionEngine::default());
        assert_eq!(output, "\r\x1b[J> ab\r\n... cd\r\n... ef\x1b[1A\x1b[6G");

        let term = VirtualTerminal::replay(&output);
        assert_eq!(term.lines(), vec!["> ab", "... cd", "... ef"]);
        assert_eq!(term.cursor(), (1, 5));
        assert_eq!(line_state.last_line_count(), 3);
    }

    #[test]
    fn test_wide_runes_and_styled_prompt() {
        let mut line_state = LineState::new("\x1b[1m$\x1b[0m ", "... ", true);
        line_state.replace_line("日本");
        let output = render(&mut line_state, &SuggestionEngine::default());
        // Prompt is 2 columns wide, each rune 2 more.
        assert!(output.ends_with("\x1b[7G"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let engine = suggestions(&["hello"]);
        let mut line_state = line_state_with("one\ntwo\nhel", 5);

        let mut term = VirtualTerminal::default();
        term.feed(&render(&mut line_state, &engine));
        let first = (term.lines(), term.cursor());

        term.feed(&render(&mut line_state, &engine));
        assert_eq!((term.lines(), term.cursor()), first);
    }

    #[test]
    fn test_repaint_after_line_count_changes() {
        let engine = SuggestionEngine::default();
        let mut line_state = line_state_with("one\ntwo\nthree", 1);

        let mut term = VirtualTerminal::default();
        term.feed(&render(&mut line_state, &engine));

        // Drop the last two lines, cursor on the first row.
        line_state.delete_range(3, 13);
        term.feed(&render(&mut line_state, &engine));
        assert_eq!(term.lines(), vec!["> one"]);
        assert_eq!(term.cursor(), (0, 3));

        // Grow again, cursor on the last row.
        line_state.set_cursor(3);
        line_state.insert_str("\nx\ny");
        term.feed(&render(&mut line_state, &engine));
        assert_eq!(term.lines(), vec!["> one", "... x", "... y"]);
        assert_eq!(term.cursor(), (2, 5));
    }

    #[test]
    fn test_render_final_moves_below_buffer() {
        let engine = suggestions(&["hello"]);
        let mut line_state = line_state_with("a\nhel", 1);

        let mut term = VirtualTerminal::default();
        term.feed(&render(&mut line_state, &engine));

        let mut stdout_mock = StdoutMock::default();
        line_state.render_final_and_flush(&mut stdout_mock).unwrap();
        let output = stdout_mock.get_copy_of_buffer_as_string();
        assert!(!output.contains("\x1b[2m"));

        term.feed(&output);
        assert_eq!(term.lines(), vec!["> a", "... hel"]);
        assert_eq!(term.cursor(), (2, 0));
    }
}
