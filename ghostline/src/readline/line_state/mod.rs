// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The editable state of one [`readline()`][crate::Session::readline] call.
//!
//! | Module           | Responsibility                                              |
//! |------------------|-------------------------------------------------------------|
//! | `core`           | [`LineState`] struct, primitive edits, line / word lookups  |
//! | `event_handlers` | One handler per [`Key`][crate::Key], returns an [`Action`][crate::Action] |
//! | `render`         | Repaint of prompt, buffer, and ghost text                   |
//!
//! The buffer is a `Vec<char>` and the cursor is a rune index into it, so the cursor
//! always sits on a rune boundary. Every primitive edit clamps the cursor to
//! `0..=line.len()` and resets the suggestion match index.

// Attach.
mod core;
mod event_handlers;
mod render;

// Re-export.
pub use core::*;
pub use event_handlers::*;
