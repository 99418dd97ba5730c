// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod key;
pub mod line_state;
pub mod readline_history;
pub mod session;
pub mod suggestions;

#[cfg(test)]
mod integration_tests;

// Re-export.
pub use key::*;
pub use line_state::*;
pub use readline_history::*;
pub use session::*;
pub use suggestions::*;
