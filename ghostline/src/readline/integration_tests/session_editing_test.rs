// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::fixtures::{DELETE, ENTER, LEFT, UP, harness};
use crate::VirtualTerminal;
use pretty_assertions::assert_eq;

#[test]
fn test_plain_typing() {
    let mut harness = harness(&[], &format!("hello world{ENTER}"));
    assert_eq!(harness.session.readline("> ").unwrap(), "hello world");
}

#[test]
fn test_backspace_both_codes() {
    let mut harness = harness(&[], &format!("abc\x7f\x08d{ENTER}"));
    assert_eq!(harness.session.readline("> ").unwrap(), "ad");
}

#[test]
fn test_delete_key() {
    let mut harness = harness(&[], &format!("abc{LEFT}{LEFT}{DELETE}{ENTER}"));
    assert_eq!(harness.session.readline("> ").unwrap(), "ac");
}

#[test]
fn test_multi_line_with_ctrl_j() {
    let keystrokes = format!("first\nsecond{UP}X{ENTER}");
    let mut harness = harness(&[], &keystrokes);
    assert_eq!(harness.session.readline("> ").unwrap(), "firstX\nsecond");

    let term = VirtualTerminal::replay(&harness.stdout_mock.get_copy_of_buffer_as_string());
    assert_eq!(term.lines(), vec!["> firstX", "... second"]);
    assert_eq!(term.cursor(), (2, 0));
}

#[test]
fn test_continuation_prompt_can_be_changed() {
    let mut harness = harness(&[], &format!("a\nb{ENTER}"));
    harness.session.set_continuation_prompt(": ");
    harness.session.readline("> ").unwrap();
    let term = VirtualTerminal::replay(&harness.stdout_mock.get_copy_of_buffer_as_string());
    assert_eq!(term.lines(), vec!["> a", ": b"]);
}

#[test]
fn test_wide_runes() {
    let mut harness = harness(&[], &format!("日本{LEFT}x{ENTER}"));
    assert_eq!(harness.session.readline("> ").unwrap(), "日x本");
}

#[test]
fn test_malformed_escape_sequences_are_discarded() {
    // Alt+x, an unknown CSI final byte, Insert, F5, and a truncated Ctrl+Up.
    let keystrokes = format!("a\x1bx\x1b[Z\x1b[2~\x1b[15~\x1b[1;5Ab{ENTER}");
    let mut harness = harness(&[], &keystrokes);
    assert_eq!(harness.session.readline("> ").unwrap(), "ab");
}

#[test]
fn test_unbound_control_codes_are_ignored() {
    let mut harness = harness(&[], &format!("a\x02\x0cb{ENTER}"));
    assert_eq!(harness.session.readline("> ").unwrap(), "ab");
}

#[test]
fn test_ctrl_w_ctrl_u_ctrl_k() {
    let keystrokes = format!("git commit -m\x17{ENTER}");
    let mut harness = harness(&[], &keystrokes);
    assert_eq!(harness.session.readline("> ").unwrap(), "git commit ");

    let keystrokes = format!("abc def{LEFT}{LEFT}{LEFT}\x0b{ENTER}");
    let mut harness = super::fixtures::harness(&[], &keystrokes);
    assert_eq!(harness.session.readline("> ").unwrap(), "abc ");

    let keystrokes = format!("abc def{LEFT}{LEFT}{LEFT}\x15{ENTER}");
    let mut harness = super::fixtures::harness(&[], &keystrokes);
    assert_eq!(harness.session.readline("> ").unwrap(), "def");
}
