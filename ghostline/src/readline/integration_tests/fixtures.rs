// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{InputDevice, InputDeviceExt, OutputDevice, OutputDeviceExt, ReadlineConfig,
            RecordingRawMode, Session, StdoutMock};
use std::sync::Arc;

pub const UP: &str = "\x1b[A";
pub const DOWN: &str = "\x1b[B";
pub const RIGHT: &str = "\x1b[C";
pub const LEFT: &str = "\x1b[D";
pub const CTRL_RIGHT: &str = "\x1b[1;5C";
pub const DELETE: &str = "\x1b[3~";
pub const ENTER: &str = "\r";

pub struct Harness {
    pub session: Session,
    pub stdout_mock: StdoutMock,
    pub raw_mode: RecordingRawMode,
}

/// Session reading `keystrokes`, writing to a [`StdoutMock`], with a recording raw mode
/// driver.
pub fn harness(suggestions: &[&str], keystrokes: &str) -> Harness {
    harness_with_input(suggestions, InputDevice::new_mock(keystrokes))
}

pub fn harness_with_input(suggestions: &[&str], input_device: InputDevice) -> Harness {
    let (output_device, stdout_mock) = OutputDevice::new_mock();
    let mut session = Session::with_config(
        suggestions.iter().map(ToString::to_string).collect(),
        Some(input_device),
        Some(output_device),
        ReadlineConfig::default(),
    );
    let raw_mode = RecordingRawMode::default();
    session.set_raw_mode_driver(Arc::new(raw_mode.clone()));
    Harness {
        session,
        stdout_mock,
        raw_mode,
    }
}
