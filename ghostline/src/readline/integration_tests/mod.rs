// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Scenario tests that drive a whole [`Session`][crate::Session] with scripted
//! keystrokes over mock devices, and check the returned line, the history, what ended
//! up on screen, and that raw mode was always balanced.
//!
//! **Unit tests** beside each module cover individual handlers and algorithms.

mod fixtures;
mod session_editing_test;
mod session_history_test;
