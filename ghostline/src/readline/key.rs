// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turning runes read from the terminal into [`Key`]s.
//!
//! Most keys arrive as a single rune and are looked up in a fixed table by
//! [`classify_rune`]. Arrow, Home / End, Delete, and `Ctrl+Left` / `Ctrl+Right` arrive as
//! CSI sequences starting with `ESC`, which are consumed by [`decode_escape_sequence`]:
//!
//! ```text
//! SeenEscape ──'['──▶ SeenBracket ──A B C D H F──▶ key
//!                          │
//!                          ├──'3'──▶ SeenExtendedDigit('3') ──'~'──▶ Delete
//!                          │
//!                          └──'1'──▶ SeenExtendedDigit('1') ──';'──▶ SeenModifierSeparator
//!                                                                          │
//!                                        key ◀──C D── SeenModifier ◀──'5'──┘
//! ```
//!
//! Any other rune in any state (or a read error) discards the sequence and the reader
//! goes back to normal input.

use std::io;

use strum_macros::Display;

use crate::{ALT_BACKSPACE, ARROW_DOWN_FINAL, ARROW_LEFT_FINAL, ARROW_RIGHT_FINAL,
            ARROW_UP_FINAL, BACKSPACE, CSI_BRACKET, CSI_CTRL_MODIFIER,
            CSI_DELETE_PARAM, CSI_MODIFIED_ARROW_PARAM, CSI_PARAM_SEPARATOR,
            CSI_TILDE_TERMINATOR, CTRL_A, CTRL_C, CTRL_D, CTRL_E, CTRL_J, CTRL_K,
            CTRL_U, CTRL_W, END_FINAL, ENTER, ESC, HOME_FINAL, TAB};

/// Every key the line editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Key {
    /// A printable rune to insert.
    Char(char),
    CtrlA,
    CtrlC,
    CtrlD,
    CtrlE,
    CtrlJ,
    CtrlK,
    CtrlU,
    CtrlW,
    Tab,
    Enter,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    CtrlLeft,
    CtrlRight,
    Home,
    End,
}

/// What the read loop should do after a key has been handled.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Action {
    /// Keep reading.
    Continue,
    /// The user pressed Enter. Carries the whole buffer.
    Submit(String),
    /// The user pressed `Ctrl+C`.
    Interrupted,
    /// The user pressed `Ctrl+D` on an empty buffer.
    Eof,
}

/// Result of looking up a single rune read in the normal (not in a sequence) state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalInput {
    Key(Key),
    /// `ESC`: the caller should hand the following runes to [`decode_escape_sequence`].
    EscapeSequence,
    /// A control code with no binding.
    Ignored,
}

#[must_use]
pub fn classify_rune(rune: char) -> NormalInput {
    let key = match rune {
        CTRL_A => Key::CtrlA,
        CTRL_C => Key::CtrlC,
        CTRL_D => Key::CtrlD,
        CTRL_E => Key::CtrlE,
        CTRL_J => Key::CtrlJ,
        CTRL_K => Key::CtrlK,
        CTRL_U => Key::CtrlU,
        CTRL_W => Key::CtrlW,
        TAB => Key::Tab,
        ENTER => Key::Enter,
        BACKSPACE | ALT_BACKSPACE => Key::Backspace,
        ESC => return NormalInput::EscapeSequence,
        _ if rune.is_control() => return NormalInput::Ignored,
        _ => Key::Char(rune),
    };
    NormalInput::Key(key)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecoderState {
    SeenEscape,
    SeenBracket,
    SeenExtendedDigit(char),
    SeenModifierSeparator,
    SeenModifier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Next(DecoderState),
    Done(Key),
    Discard,
}

fn step(state: DecoderState, rune: char) -> Step {
    use DecoderState::{SeenBracket, SeenEscape, SeenExtendedDigit, SeenModifier,
                       SeenModifierSeparator};

    match (state, rune) {
        (SeenEscape, CSI_BRACKET) => Step::Next(SeenBracket),

        (SeenBracket, ARROW_UP_FINAL) => Step::Done(Key::Up),
        (SeenBracket, ARROW_DOWN_FINAL) => Step::Done(Key::Down),
        (SeenBracket, ARROW_RIGHT_FINAL) => Step::Done(Key::Right),
        (SeenBracket, ARROW_LEFT_FINAL) => Step::Done(Key::Left),
        (SeenBracket, HOME_FINAL) => Step::Done(Key::Home),
        (SeenBracket, END_FINAL) => Step::Done(Key::End),
        (SeenBracket, CSI_MODIFIED_ARROW_PARAM | CSI_DELETE_PARAM) => {
            Step::Next(SeenExtendedDigit(rune))
        }

        (SeenExtendedDigit(CSI_DELETE_PARAM), CSI_TILDE_TERMINATOR) => {
            Step::Done(Key::Delete)
        }
        (SeenExtendedDigit(CSI_MODIFIED_ARROW_PARAM), CSI_PARAM_SEPARATOR) => {
            Step::Next(SeenModifierSeparator)
        }

        (SeenModifierSeparator, CSI_CTRL_MODIFIER) => Step::Next(SeenModifier),

        (SeenModifier, ARROW_RIGHT_FINAL) => Step::Done(Key::CtrlRight),
        (SeenModifier, ARROW_LEFT_FINAL) => Step::Done(Key::CtrlLeft),

        _ => Step::Discard,
    }
}

/// Upper bound on runes swallowed while skipping the tail of an unknown CSI sequence.
const MAX_CSI_TAIL: usize = 16;

/// ECMA-48 parameter (`0x30..=0x3F`) and intermediate (`0x20..=0x2F`) bytes.
fn is_csi_parameter_or_intermediate(rune: char) -> bool { matches!(rune, ' '..='?') }

/// Decode the rest of an escape sequence. Call this right after `ESC` has been read;
/// `read_rune` supplies the following runes. Returns `None` when the sequence is
/// unknown, malformed, or the read fails.
///
/// When an unknown CSI sequence is rejected on a parameter rune (eg: the `2` in
/// `ESC [ 2 ~`), the remainder up to its final byte is skipped too, so that it does not
/// show up as typed text.
pub fn decode_escape_sequence(
    mut read_rune: impl FnMut() -> io::Result<char>,
) -> Option<Key> {
    let mut state = DecoderState::SeenEscape;
    loop {
        let rune = match read_rune() {
            Ok(rune) => rune,
            Err(err) => {
                tracing::warn!(message = "escape sequence cut short", ?state, ?err);
                return None;
            }
        };

        match step(state, rune) {
            Step::Next(next_state) => state = next_state,
            Step::Done(key) => return Some(key),
            Step::Discard => {
                if state != DecoderState::SeenEscape
                    && is_csi_parameter_or_intermediate(rune)
                {
                    skip_csi_tail(&mut read_rune);
                }
                tracing::warn!(message = "discarded escape sequence", ?state, ?rune);
                return None;
            }
        }
    }
}

fn skip_csi_tail(read_rune: &mut impl FnMut() -> io::Result<char>) {
    for _ in 0..MAX_CSI_TAIL {
        match read_rune() {
            Ok(rune) if is_csi_parameter_or_intermediate(rune) => {}
            _ => return,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    /// Feed `input` to the decoder and report the key plus whatever it left unread.
    fn decode(input: &str) -> (Option<Key>, String) {
        let mut runes = input.chars();
        let key = decode_escape_sequence(|| {
            runes
                .next()
                .ok_or_else(|| io::Error::from(io::ErrorKind::UnexpectedEof))
        });
        (key, runes.collect())
    }

    #[test_case('\x01', Key::CtrlA)]
    #[test_case('\x03', Key::CtrlC)]
    #[test_case('\x04', Key::CtrlD)]
    #[test_case('\x05', Key::CtrlE)]
    #[test_case('\x0A', Key::CtrlJ)]
    #[test_case('\x0B', Key::CtrlK)]
    #[test_case('\x15', Key::CtrlU)]
    #[test_case('\x17', Key::CtrlW)]
    #[test_case('\t', Key::Tab)]
    #[test_case('\r', Key::Enter)]
    #[test_case('\x7F', Key::Backspace)]
    #[test_case('\x08', Key::Backspace; "alternate backspace")]
    #[test_case('a', Key::Char('a'); "ascii letter")]
    #[test_case(' ', Key::Char(' '); "space")]
    #[test_case('é', Key::Char('é'); "accented letter")]
    #[test_case('😀', Key::Char('😀'); "emoji")]
    fn test_classify_rune(rune: char, expected: Key) {
        assert_eq!(classify_rune(rune), NormalInput::Key(expected));
    }

    #[test]
    fn test_classify_escape_and_unbound_controls() {
        assert_eq!(classify_rune('\x1b'), NormalInput::EscapeSequence);
        assert_eq!(classify_rune('\x02'), NormalInput::Ignored);
        assert_eq!(classify_rune('\x00'), NormalInput::Ignored);
    }

    #[test_case("[A", Key::Up)]
    #[test_case("[B", Key::Down)]
    #[test_case("[C", Key::Right)]
    #[test_case("[D", Key::Left)]
    #[test_case("[H", Key::Home)]
    #[test_case("[F", Key::End)]
    #[test_case("[3~", Key::Delete)]
    #[test_case("[1;5C", Key::CtrlRight)]
    #[test_case("[1;5D", Key::CtrlLeft)]
    fn test_decode_known_sequences(input: &str, expected: Key) {
        assert_eq!(decode(input), (Some(expected), String::new()));
    }

    #[test_case("x", ""; "alt chord")]
    #[test_case("[Zab", "ab"; "unknown final byte")]
    #[test_case("[3x", ""; "delete without tilde")]
    #[test_case("[1;3Cq", "q"; "alt modifier is not ctrl")]
    #[test_case("[1;5A", ""; "ctrl up")]
    #[test_case("[2~hi", "hi"; "insert key tail is skipped")]
    #[test_case("[15~z", "z"; "function key tail is skipped")]
    fn test_decode_discards(input: &str, left_over: &str) {
        assert_eq!(decode(input), (None, left_over.to_string()));
    }

    #[test]
    fn test_decode_read_error_discards() {
        assert_eq!(decode("[1;"), (None, String::new()));
        assert_eq!(decode(""), (None, String::new()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Key::CtrlRight.to_string(), "CtrlRight");
        assert_eq!(Action::Submit("ls".into()).to_string(), "Submit");
    }
}
