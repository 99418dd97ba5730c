// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter, Result as FmtResult},
          io::{self, Read, Write}};

/// Where keystrokes come from. Bytes are decoded into runes one at a time by
/// [`InputDevice::read_rune`].
pub struct InputDevice {
    pub resource: Box<dyn Read + Send>,
    is_stdin: bool,
}

impl Debug for InputDevice {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("InputDevice")
            .field("is_stdin", &self.is_stdin)
            .finish_non_exhaustive()
    }
}

impl Default for InputDevice {
    fn default() -> Self { Self::new_stdin() }
}

impl InputDevice {
    #[must_use]
    pub fn new_stdin() -> Self {
        Self {
            resource: Box::new(io::stdin()),
            is_stdin: true,
        }
    }

    /// Any other byte source. The terminal is never switched to raw mode for these.
    pub fn new(resource: impl Read + Send + 'static) -> Self {
        Self {
            resource: Box::new(resource),
            is_stdin: false,
        }
    }

    #[must_use]
    pub fn is_stdin(&self) -> bool { self.is_stdin }

    /// Read one UTF-8 encoded rune. Invalid encodings come back as
    /// [`char::REPLACEMENT_CHARACTER`].
    ///
    /// # Errors
    ///
    /// [`io::ErrorKind::UnexpectedEof`] when the stream ends, or whatever the underlying
    /// reader fails with.
    pub fn read_rune(&mut self) -> io::Result<char> {
        let mut bytes = [0_u8; 4];
        self.resource.read_exact(&mut bytes[..1])?;

        let len = utf8_sequence_len(bytes[0]);
        if len > 1 {
            self.resource.read_exact(&mut bytes[1..len])?;
        }

        Ok(std::str::from_utf8(&bytes[..len])
            .ok()
            .and_then(|it| it.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER))
    }
}

/// Number of bytes in the UTF-8 sequence that starts with `lead`. Stray continuation
/// bytes and invalid leads count as a one byte (invalid) sequence.
fn utf8_sequence_len(lead: u8) -> usize {
    match lead {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

/// Where repaints are written.
pub struct OutputDevice {
    pub resource: Box<dyn Write + Send>,
}

impl Debug for OutputDevice {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("OutputDevice").finish_non_exhaustive()
    }
}

impl Default for OutputDevice {
    fn default() -> Self { Self::new_stdout() }
}

impl OutputDevice {
    #[must_use]
    pub fn new_stdout() -> Self {
        Self {
            resource: Box::new(io::stdout()),
        }
    }

    pub fn new(resource: impl Write + Send + 'static) -> Self {
        Self {
            resource: Box::new(resource),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InputDeviceExt;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("a", 'a'; "ascii")]
    #[test_case("é", 'é'; "two bytes")]
    #[test_case("日", '日'; "three bytes")]
    #[test_case("😀", '😀'; "four bytes")]
    fn test_read_rune(input: &str, expected: char) {
        let mut input_device = InputDevice::new_mock(input);
        assert_eq!(input_device.read_rune().unwrap(), expected);
    }

    #[test]
    fn test_read_rune_sequence_then_eof() {
        let mut input_device = InputDevice::new_mock("a日b");
        assert_eq!(input_device.read_rune().unwrap(), 'a');
        assert_eq!(input_device.read_rune().unwrap(), '日');
        assert_eq!(input_device.read_rune().unwrap(), 'b');
        let err = input_device.read_rune().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_invalid_utf8_is_replacement_char() {
        let mut input_device = InputDevice::new_mock(vec![0x80, b'x']);
        assert_eq!(input_device.read_rune().unwrap(), char::REPLACEMENT_CHARACTER);
        assert_eq!(input_device.read_rune().unwrap(), 'x');
    }

    #[test]
    fn test_mock_is_not_stdin() {
        assert!(!InputDevice::new_mock("").is_stdin());
    }
}
