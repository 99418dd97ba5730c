// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Test doubles for the terminal: an in-memory stdout, scripted input, a raw mode
//! driver that only counts calls, and a screen model to replay output into. Public so that integration tests and downstream
//! crates can drive a [`crate::Session`] without a real terminal.

// Attach.
pub mod device_fixtures;
pub mod recording_raw_mode;
pub mod stdout_mock;
pub mod virtual_terminal;

// Re-export.
pub use device_fixtures::*;
pub use recording_raw_mode::*;
pub use stdout_mock::*;
pub use virtual_terminal::*;
