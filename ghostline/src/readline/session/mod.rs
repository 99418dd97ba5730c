// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod devices;
pub mod readline_config;
pub mod readline_error;
pub mod readline_session;

// Re-export.
pub use devices::*;
pub use readline_config::*;
pub use readline_error::*;
pub use readline_session::*;
