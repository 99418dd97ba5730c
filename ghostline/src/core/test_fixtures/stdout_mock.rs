// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{Error, Result, Write},
          sync::{Arc, Mutex}};

/// In-memory stand-in for stdout. Clones share the same buffer, so a test can keep one
/// clone and hand the other to the code under test.
#[derive(Clone, Debug, Default)]
pub struct StdoutMock {
    pub buffer: Arc<Mutex<Vec<u8>>>,
}

impl StdoutMock {
    /// # Panics
    ///
    /// Panics if the buffer lock is poisoned.
    #[must_use]
    pub fn get_copy_of_buffer(&self) -> Vec<u8> { self.buffer.lock().unwrap().clone() }

    /// # Panics
    ///
    /// Panics if the buffer lock is poisoned.
    #[must_use]
    pub fn get_copy_of_buffer_as_string(&self) -> String {
        String::from_utf8_lossy(&self.get_copy_of_buffer()).into_owned()
    }

    /// Buffer contents with all ANSI escape sequences removed.
    ///
    /// # Panics
    ///
    /// Panics if the buffer lock is poisoned.
    #[must_use]
    pub fn get_copy_of_buffer_as_string_strip_ansi(&self) -> String {
        strip_ansi_escapes::strip_str(self.get_copy_of_buffer_as_string())
    }

    /// # Panics
    ///
    /// Panics if the buffer lock is poisoned.
    pub fn clear(&self) { self.buffer.lock().unwrap().clear(); }
}

impl Write for StdoutMock {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.buffer
            .lock()
            .map_err(|_| Error::other("stdout mock buffer lock poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}
