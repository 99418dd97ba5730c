// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Support layer for the line editor: ANSI input / output vocabulary, the raw mode
//! driver, display width rules, logging setup, and test fixtures.

// Attach.
pub mod ansi;
pub mod decl_macros;
pub mod log;
pub mod test_fixtures;
pub mod width;

// Re-export.
pub use ansi::*;
pub use log::*;
pub use test_fixtures::*;
pub use width::*;
