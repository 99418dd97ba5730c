// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Opt-in `tracing` subscriber setup.
//!
//! The crate itself only emits events via the [`tracing`] macros. Nothing is printed
//! unless the host installs a subscriber. Since [`crate::Session::readline`] owns the
//! terminal (in raw mode) while it runs, logging to a file is the usual choice:
//!
//! ```no_run
//! use r3bl_ghostline::{TracingConfig, WriterConfig};
//! use tracing_core::LevelFilter;
//!
//! TracingConfig {
//!     writer_config: WriterConfig::File("/tmp/ghostline.log".into()),
//!     level_filter: LevelFilter::DEBUG,
//! }
//! .install_global()
//! .unwrap();
//! ```

// Attach.
pub mod file_appender;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use file_appender::*;
pub use tracing_config::*;
pub use tracing_init::*;
