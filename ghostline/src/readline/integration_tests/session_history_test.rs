// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::fixtures::{DOWN, ENTER, UP, harness};
use crate::{InputDevice, InputDeviceExt, OutputDevice, OutputDeviceExt, ReadlineConfig,
            Session};
use pretty_assertions::assert_eq;

#[test]
fn test_up_recalls_previous_lines() {
    let keystrokes = format!("ls{ENTER}pwd{ENTER}{UP}{UP}{ENTER}");
    let mut harness = harness(&[], &keystrokes);
    for _ in 0..2 {
        let line = harness.session.readline("> ").unwrap();
        harness.session.add_history(&line);
    }
    assert_eq!(harness.session.readline("> ").unwrap(), "ls");
}

#[test]
fn test_history_round_trip_restores_draft() {
    let keystrokes = format!("one{ENTER}two{ENTER}draft{UP}{UP}{DOWN}{DOWN}{ENTER}");
    let mut harness = harness(&[], &keystrokes);
    for _ in 0..2 {
        let line = harness.session.readline("> ").unwrap();
        harness.session.add_history(&line);
    }
    assert_eq!(harness.session.readline("> ").unwrap(), "draft");
}

#[test]
fn test_up_stops_at_oldest_entry() {
    let keystrokes = format!("only{ENTER}{UP}{UP}{UP}{ENTER}");
    let mut harness = harness(&[], &keystrokes);
    let line = harness.session.readline("> ").unwrap();
    harness.session.add_history(&line);
    assert_eq!(harness.session.readline("> ").unwrap(), "only");
}

#[test]
fn test_only_added_lines_are_recorded() {
    let keystrokes = format!("  spaced  {ENTER}{ENTER}spaced{ENTER}");
    let mut harness = harness(&[], &keystrokes);
    for _ in 0..3 {
        let line = harness.session.readline("> ").unwrap();
        harness.session.add_history(&line);
    }
    let entries: Vec<&str> = harness.session.history().iter().collect();
    assert_eq!(entries, vec!["spaced"]);
}

#[test]
fn test_max_history_from_config() {
    let (output_device, _stdout_mock) = OutputDevice::new_mock();
    let mut session = Session::with_config(
        vec![],
        Some(InputDevice::new_mock("")),
        Some(output_device),
        ReadlineConfig::default().with_max_history(2),
    );
    for line in ["a", "b", "c"] {
        session.add_history(line);
    }
    let entries: Vec<&str> = session.history().iter().collect();
    assert_eq!(entries, vec!["b", "c"]);
}
