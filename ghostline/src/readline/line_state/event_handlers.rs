// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::core::LineState;
use crate::{Action, History, Key, ReadlineError, SuggestionEngine, offset_for_column};
use std::io::Write;

/// Everything a key handler may consult or update besides the line itself.
#[derive(Debug)]
pub struct EditContext<'a> {
    pub suggestions: &'a SuggestionEngine,
    pub history: &'a mut History,
}

/// Vertical direction for Up / Down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

/// Apply `key` to `line_state`, repaint if anything visible changed, and tell the read
/// loop what to do next.
///
/// # Errors
///
/// Returns [`ReadlineError::IO`] if the repaint could not be written.
pub fn handle_key(
    line_state: &mut LineState,
    key: Key,
    ctx: &mut EditContext<'_>,
    term: &mut dyn Write,
) -> Result<Action, ReadlineError> {
    match key {
        Key::Char(rune) => handle_char(line_state, rune, ctx, term),
        Key::Enter => handle_enter(line_state, term),
        Key::CtrlC => handle_ctrl_c(line_state, term),
        Key::CtrlD => handle_ctrl_d(line_state, term),
        Key::CtrlJ => handle_ctrl_j(line_state, ctx, term),
        Key::CtrlK => handle_ctrl_k(line_state, ctx, term),
        Key::CtrlU => handle_ctrl_u(line_state, ctx, term),
        Key::CtrlW => handle_ctrl_w(line_state, ctx, term),
        #[cfg(feature = "emacs")]
        Key::CtrlA => handle_home(line_state, ctx, term),
        #[cfg(feature = "emacs")]
        Key::CtrlE => handle_end(line_state, ctx, term),
        #[cfg(not(feature = "emacs"))]
        Key::CtrlA | Key::CtrlE => Ok(Action::Continue),
        Key::Home => handle_home(line_state, ctx, term),
        Key::End => handle_end(line_state, ctx, term),
        Key::Tab => handle_tab(line_state, ctx, term),
        Key::Backspace => handle_backspace(line_state, ctx, term),
        Key::Delete => handle_delete(line_state, ctx, term),
        Key::Left => handle_left(line_state, ctx, term),
        Key::Right => handle_right(line_state, ctx, term),
        Key::CtrlLeft => handle_ctrl_left(line_state, ctx, term),
        Key::CtrlRight => handle_ctrl_right(line_state, ctx, term),
        Key::Up => handle_vertical(line_state, Direction::Up, ctx, term),
        Key::Down => handle_vertical(line_state, Direction::Down, ctx, term),
    }
}

fn repaint(
    line_state: &mut LineState,
    ctx: &EditContext<'_>,
    term: &mut dyn Write,
) -> Result<Action, ReadlineError> {
    line_state.render_and_flush(term, ctx.suggestions)?;
    Ok(Action::Continue)
}

fn handle_char(
    line_state: &mut LineState,
    rune: char,
    ctx: &EditContext<'_>,
    term: &mut dyn Write,
) -> Result<Action, ReadlineError> {
    line_state.insert_char(rune);
    repaint(line_state, ctx, term)
}

fn handle_enter(
    line_state: &mut LineState,
    term: &mut dyn Write,
) -> Result<Action, ReadlineError> {
    line_state.render_final_and_flush(term)?;
    Ok(Action::Submit(line_state.line_string()))
}

/// Abandon the line. The typed text stays on screen, the buffer is emptied.
fn handle_ctrl_c(
    line_state: &mut LineState,
    term: &mut dyn Write,
) -> Result<Action, ReadlineError> {
    line_state.render_final_and_flush(term)?;
    line_state.clear();
    Ok(Action::Interrupted)
}

/// End of input only on an empty buffer, otherwise ignored.
fn handle_ctrl_d(
    line_state: &mut LineState,
    term: &mut dyn Write,
) -> Result<Action, ReadlineError> {
    if !line_state.is_empty() {
        return Ok(Action::Continue);
    }
    line_state.render_final_and_flush(term)?;
    Ok(Action::Eof)
}

fn handle_ctrl_j(
    line_state: &mut LineState,
    ctx: &EditContext<'_>,
    term: &mut dyn Write,
) -> Result<Action, ReadlineError> {
    line_state.insert_newline();
    repaint(line_state, ctx, term)
}

/// Kill to the end of the current line.
fn handle_ctrl_k(
    line_state: &mut LineState,
    ctx: &EditContext<'_>,
    term: &mut dyn Write,
) -> Result<Action, ReadlineError> {
    let cursor = line_state.cursor();
    let line_end = line_state.find_line_end(cursor);
    line_state.delete_range(cursor, line_end);
    repaint(line_state, ctx, term)
}

/// Kill to the start of the current line.
fn handle_ctrl_u(
    line_state: &mut LineState,
    ctx: &EditContext<'_>,
    term: &mut dyn Write,
) -> Result<Action, ReadlineError> {
    let cursor = line_state.cursor();
    let line_start = line_state.find_line_start(cursor);
    line_state.delete_range(line_start, cursor);
    repaint(line_state, ctx, term)
}

fn handle_ctrl_w(
    line_state: &mut LineState,
    ctx: &EditContext<'_>,
    term: &mut dyn Write,
) -> Result<Action, ReadlineError> {
    let cursor = line_state.cursor();
    let word_start = line_state.find_space_delimited_word_start(cursor);
    line_state.delete_range(word_start, cursor);
    repaint(line_state, ctx, term)
}

fn handle_home(
    line_state: &mut LineState,
    ctx: &EditContext<'_>,
    term: &mut dyn Write,
) -> Result<Action, ReadlineError> {
    line_state.set_cursor(line_state.find_line_start(line_state.cursor()));
    repaint(line_state, ctx, term)
}

fn handle_end(
    line_state: &mut LineState,
    ctx: &EditContext<'_>,
    term: &mut dyn Write,
) -> Result<Action, ReadlineError> {
    line_state.set_cursor(line_state.find_line_end(line_state.cursor()));
    repaint(line_state, ctx, term)
}

/// Replace the trailing word with the selected match.
fn handle_tab(
    line_state: &mut LineState,
    ctx: &EditContext<'_>,
    term: &mut dyn Write,
) -> Result<Action, ReadlineError> {
    if !line_state.is_cursor_at_end() {
        return Ok(Action::Continue);
    }
    let Some(selected) = ctx
        .suggestions
        .selected_match(line_state.line(), line_state.match_index())
    else {
        return Ok(Action::Continue);
    };

    let len = line_state.line().len();
    let word_len = SuggestionEngine::trailing_word(line_state.line()).len();
    line_state.delete_range(len - word_len, len);
    line_state.insert_str(selected);
    repaint(line_state, ctx, term)
}

fn handle_backspace(
    line_state: &mut LineState,
    ctx: &EditContext<'_>,
    term: &mut dyn Write,
) -> Result<Action, ReadlineError> {
    if !line_state.delete_before_cursor() {
        return Ok(Action::Continue);
    }
    repaint(line_state, ctx, term)
}

fn handle_delete(
    line_state: &mut LineState,
    ctx: &EditContext<'_>,
    term: &mut dyn Write,
) -> Result<Action, ReadlineError> {
    if !line_state.delete_at_cursor() {
        return Ok(Action::Continue);
    }
    repaint(line_state, ctx, term)
}

fn handle_left(
    line_state: &mut LineState,
    ctx: &EditContext<'_>,
    term: &mut dyn Write,
) -> Result<Action, ReadlineError> {
    if line_state.cursor() == 0 {
        return Ok(Action::Continue);
    }
    line_state.set_cursor(line_state.cursor() - 1);
    repaint(line_state, ctx, term)
}

/// At the end of the buffer, accept the whole ghost text. Elsewhere move right.
fn handle_right(
    line_state: &mut LineState,
    ctx: &EditContext<'_>,
    term: &mut dyn Write,
) -> Result<Action, ReadlineError> {
    if !line_state.is_cursor_at_end() {
        line_state.set_cursor(line_state.cursor() + 1);
        return repaint(line_state, ctx, term);
    }
    let ghost = line_state.find_ghost(ctx.suggestions);
    if ghost.is_empty() {
        return Ok(Action::Continue);
    }
    line_state.insert_str(&ghost);
    repaint(line_state, ctx, term)
}

fn handle_ctrl_left(
    line_state: &mut LineState,
    ctx: &EditContext<'_>,
    term: &mut dyn Write,
) -> Result<Action, ReadlineError> {
    line_state.set_cursor(line_state.find_prev_word_start(line_state.cursor()));
    repaint(line_state, ctx, term)
}

/// At the end of the buffer, accept the next word of the ghost text (with the
/// whitespace before it). Elsewhere jump to the start of the next word.
fn handle_ctrl_right(
    line_state: &mut LineState,
    ctx: &EditContext<'_>,
    term: &mut dyn Write,
) -> Result<Action, ReadlineError> {
    if line_state.is_cursor_at_end() {
        let ghost = line_state.find_ghost(ctx.suggestions);
        let accepted = next_ghost_word(&ghost);
        if !accepted.is_empty() {
            line_state.insert_str(&accepted);
        }
    } else {
        line_state.set_cursor(line_state.find_next_word_start(line_state.cursor()));
    }
    repaint(line_state, ctx, term)
}

/// Leading whitespace of `ghost` plus the non-whitespace run after it.
fn next_ghost_word(ghost: &str) -> String {
    let leading = ghost.chars().take_while(|it| it.is_whitespace()).count();
    let word = ghost
        .chars()
        .skip(leading)
        .take_while(|it| !it.is_whitespace())
        .count();
    ghost.chars().take(leading + word).collect()
}

/// Up / Down, in order of precedence:
/// 1. At the end of the buffer with more than one match, select the previous / next
///    match.
/// 2. On the first line (Up) or last line (Down), navigate history.
/// 3. Otherwise move to the same rune column on the adjacent line, clamped to its
///    length.
fn handle_vertical(
    line_state: &mut LineState,
    direction: Direction,
    ctx: &mut EditContext<'_>,
    term: &mut dyn Write,
) -> Result<Action, ReadlineError> {
    let match_count = line_state.get_matches(ctx.suggestions).len();
    if line_state.is_cursor_at_end() && match_count > 1 {
        let current = line_state.match_index() % match_count;
        let next = match direction {
            Direction::Up => (current + match_count - 1) % match_count,
            Direction::Down => (current + 1) % match_count,
        };
        line_state.set_match_index(next);
        return repaint(line_state, ctx, term);
    }

    let row = line_state.cursor_placement().row;
    let last_row = line_state.line_count() - 1;

    match direction {
        Direction::Up if row == 0 => {
            let current = line_state.line_string();
            let Some(entry) = ctx.history.previous(&current) else {
                return Ok(Action::Continue);
            };
            line_state.replace_line(entry);
        }
        Direction::Down if row == last_row => {
            let Some(entry) = ctx.history.next() else {
                return Ok(Action::Continue);
            };
            line_state.replace_line(entry);
        }
        Direction::Up | Direction::Down => {
            let cursor = line_state.cursor();
            let line_start = line_state.find_line_start(cursor);
            let col = line_state.cursor_placement().col;
            let (target_start, target_end) = match direction {
                Direction::Up => {
                    let target_end = line_start - 1;
                    (line_state.find_line_start(target_end), target_end)
                }
                Direction::Down => {
                    let target_start = line_state.find_line_end(cursor) + 1;
                    (target_start, line_state.find_line_end(target_start))
                }
            };
            let target_line = &line_state.line()[target_start..target_end];
            let offset = offset_for_column(target_line, col);
            line_state.set_cursor(target_start + offset);
        }
    }

    repaint(line_state, ctx, term)
}
