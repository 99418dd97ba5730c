// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Display width rules, and the one place that maps a buffer offset to a terminal
//! row / column.
//!
//! | Rune                                   | Columns |
//! |----------------------------------------|---------|
//! | `'\n'`                                 | resets column to 0, advances the row |
//! | wide East Asian rune, emoji            | 2       |
//! | anything else                          | 1       |
//!
//! [`str_display_width`] applies the same rule to externally supplied strings (such as
//! a styled prompt) and additionally treats ANSI escape sequences as zero width.
//!
//! The renderer and any other code that needs to know where the cursor is on screen
//! must go through [`cursor_placement`], and code that needs the reverse mapping must
//! go through [`offset_for_column`]. Don't re-derive either.

use unicode_width::UnicodeWidthChar;

/// Number of terminal columns taken by a single rune: 2 for wide runes, 1 otherwise.
#[must_use]
pub fn rune_display_width(rune: char) -> usize {
    match UnicodeWidthChar::width(rune) {
        Some(2) => 2,
        _ => 1,
    }
}

/// Display width of a string that may contain ANSI escape sequences (e.g. a colored
/// prompt). Escape sequences take no columns; wide runes take 2.
#[must_use]
pub fn str_display_width(text: &str) -> usize {
    let plain = strip_ansi_escapes::strip_str(text);
    plain.chars().map(rune_display_width).sum()
}

/// Where the terminal cursor sits, relative to the first rendered line, and to the end
/// of the prompt on its line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorPlacement {
    /// 0-based line index within the buffer.
    pub row: usize,
    /// 0-based display column, not counting the prompt.
    pub col: usize,
}

/// Walk `buffer` up to `cursor` and compute the cursor's row and display column.
///
/// `cursor` past the end of the buffer is treated as the end of the buffer.
#[must_use]
pub fn cursor_placement(buffer: &[char], cursor: usize) -> CursorPlacement {
    let end = cursor.min(buffer.len());
    buffer[..end]
        .iter()
        .fold(CursorPlacement::default(), |acc, &rune| {
            if rune == '\n' {
                CursorPlacement {
                    row: acc.row + 1,
                    col: 0,
                }
            } else {
                CursorPlacement {
                    row: acc.row,
                    col: acc.col + rune_display_width(rune),
                }
            }
        })
}

/// Inverse of [`cursor_placement`] for a single line: the rune offset in `line` whose
/// display column is the closest one at or before `col`.
///
/// A wide rune that would straddle `col` is not stepped over. `col` past the end of the
/// line gives the line length. `line` must not contain `'\n'`.
#[must_use]
pub fn offset_for_column(line: &[char], col: usize) -> usize {
    let mut width = 0;
    for (offset, &rune) in line.iter().enumerate() {
        width += rune_display_width(rune);
        if width > col {
            return offset;
        }
    }
    line.len()
}

/// Number of lines the buffer occupies when rendered (an empty buffer still takes 1).
#[must_use]
pub fn rendered_line_count(buffer: &[char]) -> usize {
    1 + buffer.iter().filter(|&&rune| rune == '\n').count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn chars(it: &str) -> Vec<char> { it.chars().collect() }

    #[test_case('a', 1; "ascii letter")]
    #[test_case(' ', 1; "space")]
    #[test_case('中', 2; "cjk")]
    #[test_case('😀', 2; "emoji")]
    #[test_case('é', 1; "accented letter")]
    fn test_rune_display_width(rune: char, expected: usize) {
        assert_eq!(rune_display_width(rune), expected);
    }

    #[test_case("> ", 2; "plain")]
    #[test_case("\x1b[1;32m>\x1b[0m ", 2; "styled")]
    #[test_case("\x1b[2m日本\x1b[0m", 4; "styled wide")]
    #[test_case("", 0; "empty")]
    fn test_str_display_width_skips_ansi(text: &str, expected: usize) {
        assert_eq!(str_display_width(text), expected);
    }

    #[test]
    fn test_cursor_placement_single_line() {
        let buffer = chars("hello");
        assert_eq!(cursor_placement(&buffer, 0), CursorPlacement { row: 0, col: 0 });
        assert_eq!(cursor_placement(&buffer, 3), CursorPlacement { row: 0, col: 3 });
        assert_eq!(cursor_placement(&buffer, 5), CursorPlacement { row: 0, col: 5 });
    }

    #[test]
    fn test_cursor_placement_multi_line() {
        let buffer = chars("ab\ncde\nf");
        assert_eq!(cursor_placement(&buffer, 2), CursorPlacement { row: 0, col: 2 });
        assert_eq!(cursor_placement(&buffer, 3), CursorPlacement { row: 1, col: 0 });
        assert_eq!(cursor_placement(&buffer, 5), CursorPlacement { row: 1, col: 2 });
        assert_eq!(cursor_placement(&buffer, 8), CursorPlacement { row: 2, col: 1 });
    }

    #[test]
    fn test_cursor_placement_wide_runes() {
        let buffer = chars("a中😀b");
        assert_eq!(cursor_placement(&buffer, 1), CursorPlacement { row: 0, col: 1 });
        assert_eq!(cursor_placement(&buffer, 2), CursorPlacement { row: 0, col: 3 });
        assert_eq!(cursor_placement(&buffer, 3), CursorPlacement { row: 0, col: 5 });
        assert_eq!(cursor_placement(&buffer, 4), CursorPlacement { row: 0, col: 6 });
    }

    #[test]
    fn test_cursor_placement_clamps_past_end() {
        let buffer = chars("ab");
        assert_eq!(cursor_placement(&buffer, 99), CursorPlacement { row: 0, col: 2 });
    }

    #[test_case("abcdef", 4, 4; "ascii")]
    #[test_case("abc", 10, 3; "past end clamps")]
    #[test_case("", 3, 0; "empty line")]
    #[test_case("日本語", 4, 2; "wide runes on boundary")]
    #[test_case("日本語", 3, 1; "wide rune straddles column")]
    #[test_case("a日b", 3, 2; "mixed")]
    fn test_offset_for_column(line: &str, col: usize, expected: usize) {
        assert_eq!(offset_for_column(&chars(line), col), expected);
    }

    #[test]
    fn test_offset_for_column_inverts_cursor_placement() {
        let line = chars("a中😀b");
        for offset in 0..=line.len() {
            let col = cursor_placement(&line, offset).col;
            assert_eq!(offset_for_column(&line, col), offset);
        }
    }

    #[test]
    fn test_rendered_line_count() {
        assert_eq!(rendered_line_count(&[]), 1);
        assert_eq!(rendered_line_count(&chars("abc")), 1);
        assert_eq!(rendered_line_count(&chars("a\nb\n")), 3);
    }
}
