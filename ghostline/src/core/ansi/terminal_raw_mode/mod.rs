// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Raw mode
//!
//! In the default "cooked" mode the terminal driver buffers a whole line, echoes every
//! keystroke, and turns `Ctrl+C` into `SIGINT`. The line editor needs every keystroke the
//! moment it is typed, with no echo, so it switches the terminal into raw mode for the
//! duration of a single [`crate::Session::readline`] call.
//!
//! Raw mode is a process wide OS resource. If it isn't restored the user's shell is left
//! unusable, so it is only ever acquired through [`RawModeGuard`], which restores the
//! saved settings in [`Drop`]. This covers normal returns, `?` early returns, and
//! panics.
//!
//! # Drivers
//!
//! | Driver             | Platform | Mechanism                                        |
//! |--------------------|----------|--------------------------------------------------|
//! | [`TermiosRawMode`] | Unix     | `rustix::termios` on stdin, or `/dev/tty`        |
//! | `CrosstermRawMode` | Others   | `crossterm::terminal::{enable,disable}_raw_mode` |
//! | [`NoopRawMode`]    | Any      | Nothing. Used when input is not a terminal       |
//!
//! ```no_run
//! use r3bl_ghostline::{RawModeGuard, default_raw_mode_driver};
//!
//! fn main() -> miette::Result<()> {
//!     let _guard = RawModeGuard::new(default_raw_mode_driver())?;
//!     // Terminal is in raw mode here.
//!     Ok(())
//! } // Terminal is restored here.
//! ```

// Attach.
mod raw_mode_core;
#[cfg(not(unix))]
mod raw_mode_fallback;
#[cfg(unix)]
mod raw_mode_unix;

// Re-export.
pub use raw_mode_core::*;
#[cfg(not(unix))]
pub use raw_mode_fallback::*;
#[cfg(unix)]
pub use raw_mode_unix::*;
