// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Control Sequence Introducer (CSI) output used by the renderer.
//!
//! CSI sequences follow the pattern `ESC [ parameters final_character`.
//!
//! ## Examples
//! - `ESC[2A` - Move cursor up 2 lines
//! - `ESC[J` - Erase from cursor to end of screen
//! - `ESC[7G` - Move cursor to column 7 (1-based)
//! - `ESC[2m` - Dim

use crate::{CHA_CURSOR_COLUMN, CSI_START, CUU_CURSOR_UP, ED_ERASE_DISPLAY, SGR_DIM,
            SGR_RESET, SGR_SET_GRAPHICS};
use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsiSequence {
    /// Cursor Up (CUU) - ESC [ n A
    CursorUp(u16),
    /// Erase Display (ED) - ESC [ J, from cursor to end of screen.
    EraseDisplayToEnd,
    /// Cursor Horizontal Absolute (CHA) - ESC [ n G, `n` is 1-based.
    CursorHorizontalAbsolute(u16),
    /// Select Graphic Rendition (SGR) dim - ESC [ 2 m
    Dim,
    /// Select Graphic Rendition (SGR) reset - ESC [ 0 m
    ResetAttributes,
}

impl Display for CsiSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(CSI_START)?;
        match self {
            CsiSequence::CursorUp(n) => write!(f, "{n}{CUU_CURSOR_UP}"),
            CsiSequence::EraseDisplayToEnd => write!(f, "{ED_ERASE_DISPLAY}"),
            CsiSequence::CursorHorizontalAbsolute(n) => {
                write!(f, "{n}{CHA_CURSOR_COLUMN}")
            }
            CsiSequence::Dim => write!(f, "{SGR_DIM}{SGR_SET_GRAPHICS}"),
            CsiSequence::ResetAttributes => write!(f, "{SGR_RESET}{SGR_SET_GRAPHICS}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(CsiSequence::CursorUp(3), "\x1b[3A")]
    #[test_case(CsiSequence::EraseDisplayToEnd, "\x1b[J")]
    #[test_case(CsiSequence::CursorHorizontalAbsolute(9), "\x1b[9G")]
    #[test_case(CsiSequence::Dim, "\x1b[2m")]
    #[test_case(CsiSequence::ResetAttributes, "\x1b[0m")]
    fn test_csi_sequence_display(seq: CsiSequence, expected: &str) {
        assert_eq!(seq.to_string(), expected);
    }
}
