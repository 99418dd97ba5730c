// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{Cursor, Error, ErrorKind, Read, Result};

use super::StdoutMock;
use crate::{InputDevice, OutputDevice};

pub trait InputDeviceExt {
    /// Input that yields `bytes` and then reports end of stream.
    fn new_mock(bytes: impl Into<Vec<u8>>) -> InputDevice;

    /// Input that yields `bytes` and then fails with [`ErrorKind::BrokenPipe`].
    fn new_mock_failing_after(bytes: impl Into<Vec<u8>>) -> InputDevice;
}

impl InputDeviceExt for InputDevice {
    fn new_mock(bytes: impl Into<Vec<u8>>) -> InputDevice {
        InputDevice::new(Cursor::new(bytes.into()))
    }

    fn new_mock_failing_after(bytes: impl Into<Vec<u8>>) -> InputDevice {
        InputDevice::new(FailingReader {
            cursor: Cursor::new(bytes.into()),
        })
    }
}

struct FailingReader {
    cursor: Cursor<Vec<u8>>,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        match self.cursor.read(buf)? {
            0 if !buf.is_empty() => Err(Error::new(ErrorKind::BrokenPipe, "mock input failed")),
            count => Ok(count),
        }
    }
}

pub trait OutputDeviceExt {
    /// Output backed by a [`StdoutMock`]. The returned mock shares its buffer with the
    /// device.
    fn new_mock() -> (OutputDevice, StdoutMock);
}

impl OutputDeviceExt for OutputDevice {
    fn new_mock() -> (OutputDevice, StdoutMock) {
        let stdout_mock = StdoutMock::default();
        (OutputDevice::new(stdout_mock.clone()), stdout_mock)
    }
}
