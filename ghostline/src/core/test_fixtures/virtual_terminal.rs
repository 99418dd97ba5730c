// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::rune_display_width;

/// Marks the second cell of a wide rune.
const WIDE_TAIL: char = '\0';

/// Tiny screen model that understands exactly the output the renderer produces: CR, LF,
/// `CUU`, `ED` (to end), `CHA`, and SGR (ignored). Replaying a [`crate::StdoutMock`]
/// buffer through it shows what the user would see, and where the cursor ended up.
///
/// Rows and columns are 0-based and relative to the row the cursor was on when output
/// started.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VirtualTerminal {
    cells: Vec<Vec<char>>,
    row: usize,
    col: usize,
}

impl VirtualTerminal {
    #[must_use]
    pub fn replay(output: &str) -> Self {
        let mut it = Self::default();
        it.feed(output);
        it
    }

    pub fn feed(&mut self, output: &str) {
        let mut runes = output.chars().peekable();
        while let Some(rune) = runes.next() {
            match rune {
                '\r' => self.col = 0,
                '\n' => self.row += 1,
                '\x1b' => {
                    if runes.next_if_eq(&'[').is_none() {
                        continue;
                    }
                    let mut param = String::new();
                    while let Some(digit) = runes.next_if(|it| it.is_ascii_digit() || *it == ';') {
                        param.push(digit);
                    }
                    let count = param.parse::<usize>().unwrap_or(1);
                    match runes.next() {
                        Some('A') => self.row = self.row.saturating_sub(count),
                        Some('J') => self.erase_to_end(),
                        Some('G') => self.col = count.saturating_sub(1),
                        _ => {}
                    }
                }
                _ => self.put(rune),
            }
        }
    }

    fn row_mut(&mut self) -> &mut Vec<char> {
        if self.cells.len() <= self.row {
            self.cells.resize(self.row + 1, Vec::new());
        }
        &mut self.cells[self.row]
    }

    fn put(&mut self, rune: char) {
        let col = self.col;
        let width = rune_display_width(rune);
        let row = self.row_mut();
        if row.len() < col + width {
            row.resize(col + width, ' ');
        }
        row[col] = rune;
        if width == 2 {
            row[col + 1] = WIDE_TAIL;
        }
        self.col += width;
    }

    fn erase_to_end(&mut self) {
        let col = self.col;
        self.row_mut().truncate(col);
        self.cells.truncate(self.row + 1);
    }

    /// Visible text, one entry per row, trailing blanks removed.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| {
                let text: String = row.iter().filter(|&&it| it != WIDE_TAIL).collect();
                text.trim_end().to_string()
            })
            .collect()
    }

    /// `(row, col)` of the cursor.
    #[must_use]
    pub fn cursor(&self) -> (usize, usize) { (self.row, self.col) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_replay() {
        let term = VirtualTerminal::replay("> ab\r\n... cd\x1b[1A\x1b[4G");
        assert_eq!(term.lines(), vec!["> ab", "... cd"]);
        assert_eq!(term.cursor(), (0, 3));
    }

    #[test]
    fn test_erase_and_wide_runes() {
        let term = VirtualTerminal::replay("> 日本\r\nxx\x1b[1A\r\x1b[J> 日");
        assert_eq!(term.lines(), vec!["> 日"]);
        assert_eq!(term.cursor(), (0, 4));
    }
}
