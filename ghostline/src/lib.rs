// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_ghostline
//!
//! A blocking, embeddable replacement for [`std::io::BufRead::read_line`] aimed at
//! interactive terminal programs. While the user types, the best matching suggestion
//! for the word under the cursor is previewed inline as dimmed "ghost text".
//!
//! Features:
//! - Fuzzy ranked suggestions. Prefix matches always rank ahead of subsequence matches.
//! - Inline ghost text that can be accepted whole (<kbd>Tab</kbd>, <kbd>Right</kbd>) or
//!   one word at a time (<kbd>Ctrl+Right</kbd>).
//! - Multi-line editing (<kbd>Ctrl+J</kbd> inserts a newline) with a continuation
//!   prompt, and width aware cursor placement for wide East Asian runes and emoji.
//! - History navigation with <kbd>Up</kbd> / <kbd>Down</kbd>, which restores the
//!   in-progress input when you walk back past the newest entry.
//! - Emacs style shortcuts: <kbd>Ctrl+A</kbd>, <kbd>Ctrl+E</kbd>, <kbd>Ctrl+K</kbd>,
//!   <kbd>Ctrl+U</kbd>, <kbd>Ctrl+W</kbd>.
//!
//! # Example
//!
//! ```no_run
//! use r3bl_ghostline::{ReadlineError, Session};
//!
//! let mut session = Session::new(vec!["checkout".into(), "commit".into()]);
//! loop {
//!     match session.readline("git> ") {
//!         Ok(line) => {
//!             session.add_history(&line);
//!             println!("you typed: {line}");
//!         }
//!         Err(ReadlineError::Interrupted) => continue,
//!         Err(ReadlineError::Eof) => break,
//!         Err(err) => {
//!             eprintln!("{err}");
//!             break;
//!         }
//!     }
//! }
//! ```
//!
//! # Architecture
//!
//! | Module                      | Responsibility                                    |
//! |-----------------------------|---------------------------------------------------|
//! | [`core::ansi`]              | Control codes, CSI output, raw mode driver        |
//! | [`core::width`]             | Display width and cursor row / column placement   |
//! | [`core::log`]               | Opt-in `tracing` subscriber setup                 |
//! | [`readline::line_state`]    | Buffer, cursor, key dispatch, renderer            |
//! | [`readline::key`]           | Keys, actions, escape sequence decoder            |
//! | [`readline::suggestions`]   | Fuzzy scoring and match ranking                   |
//! | [`readline::readline_history`] | History log and navigation                     |
//! | [`readline::session`]       | The read, dispatch, render loop                   |

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(rust_2018_idioms)]
// Enforce strict error handling in production code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod core;
pub mod readline;

// Re-export.
#[allow(ambiguous_glob_reexports)]
pub use core::*;
#[allow(ambiguous_glob_reexports)]
pub use readline::*;
