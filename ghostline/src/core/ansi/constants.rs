// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Control code and CSI byte constants.
//!
//! # Input: one canonical control code table
//!
//! In raw mode every keystroke arrives as one or more code points. Control keys arrive
//! as C0 control codes (`Ctrl+<letter>` = `letter - 0x60`). Two codes are commonly
//! produced by the *Backspace* key depending on the terminal:
//!
//! | Code   | Meaning                                            |
//! |--------|----------------------------------------------------|
//! | `0x7F` | Backspace (DEL, what almost all terminals send)    |
//! | `0x08` | Alternate backspace (BS, `Ctrl+H`)                 |
//!
//! The *Delete* key never arrives as a single code, only as the CSI sequence `ESC [ 3 ~`.
//!
//! # Output
//!
//! The renderer only needs a small subset of CSI: cursor up (`CUU`), erase display
//! (`ED`), cursor horizontal absolute (`CHA`), and SGR dim / reset.

// ==================== C0 control codes (input) ====================

/// `Ctrl+A`: move to the start of the current line.
pub const CTRL_A: char = '\x01';

/// `Ctrl+C`: interrupt.
pub const CTRL_C: char = '\x03';

/// `Ctrl+D`: end of input (only when the buffer is empty).
pub const CTRL_D: char = '\x04';

/// `Ctrl+E`: move to the end of the current line.
pub const CTRL_E: char = '\x05';

/// `Ctrl+H`: the alternate backspace code sent by some terminals.
pub const ALT_BACKSPACE: char = '\x08';

/// `Tab` (`Ctrl+I`): complete the trailing word.
pub const TAB: char = '\x09';

/// `Ctrl+J` (line feed): insert a newline into the buffer.
pub const CTRL_J: char = '\x0A';

/// `Ctrl+K`: kill to the end of the current line.
pub const CTRL_K: char = '\x0B';

/// `Enter` in raw mode (carriage return).
pub const ENTER: char = '\x0D';

/// `Ctrl+U`: kill to the start of the current line.
pub const CTRL_U: char = '\x15';

/// `Ctrl+W`: kill the previous word.
pub const CTRL_W: char = '\x17';

/// `Escape`: start of an escape sequence.
pub const ESC: char = '\x1B';

/// `Backspace` (DEL).
pub const BACKSPACE: char = '\x7F';

// ==================== CSI input bytes ====================

/// CSI bracket: `[`, the second code of every CSI sequence.
pub const CSI_BRACKET: char = '[';

/// Parameter separator: `;`.
pub const CSI_PARAM_SEPARATOR: char = ';';

/// Terminator for `CSI n ~` keys.
pub const CSI_TILDE_TERMINATOR: char = '~';

/// CSI A: Up arrow final byte.
pub const ARROW_UP_FINAL: char = 'A';

/// CSI B: Down arrow final byte.
pub const ARROW_DOWN_FINAL: char = 'B';

/// CSI C: Right arrow final byte.
pub const ARROW_RIGHT_FINAL: char = 'C';

/// CSI D: Left arrow final byte.
pub const ARROW_LEFT_FINAL: char = 'D';

/// CSI H: Home key final byte.
pub const HOME_FINAL: char = 'H';

/// CSI F: End key final byte.
pub const END_FINAL: char = 'F';

/// First parameter of modified arrows: `CSI 1 ; m X`.
pub const CSI_MODIFIED_ARROW_PARAM: char = '1';

/// Parameter of the Delete key: `CSI 3 ~`.
pub const CSI_DELETE_PARAM: char = '3';

/// Modifier digit for Ctrl in `CSI 1 ; m X` (`m = 1 + 4`).
pub const CSI_CTRL_MODIFIER: char = '5';

// ==================== CSI output ====================

/// Start of every CSI sequence that is written to the terminal.
pub const CSI_START: &str = "\x1b[";

/// CSI n A: Cursor Up (CUU).
pub const CUU_CURSOR_UP: char = 'A';

/// CSI J: Erase Display (ED). With no parameter, erases from cursor to end of screen.
pub const ED_ERASE_DISPLAY: char = 'J';

/// CSI n G: Cursor Horizontal Absolute (CHA). 1-based column.
pub const CHA_CURSOR_COLUMN: char = 'G';

/// CSI m: Select Graphic Rendition (SGR).
pub const SGR_SET_GRAPHICS: char = 'm';

/// SGR parameter: reset all attributes.
pub const SGR_RESET: u16 = 0;

/// SGR parameter: dim / faint.
pub const SGR_DIM: u16 = 2;

/// Carriage return followed by line feed. Raw mode disables the output post processing
/// that would normally turn `\n` into `\r\n`, so the renderer emits both.
pub const CRLF: &str = "\r\n";
