// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI / VT100 vocabulary shared by the decoder (input) and the renderer (output), and
//! the raw mode driver that puts the terminal into byte-at-a-time mode.

// Attach.
pub mod constants;
pub mod csi_sequence;
pub mod terminal_raw_mode;

// Re-export.
pub use constants::*;
pub use csi_sequence::*;
pub use terminal_raw_mode::*;
