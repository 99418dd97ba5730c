// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod fuzzy_score;
pub mod suggestion_engine;

// Re-export.
pub use fuzzy_score::*;
pub use suggestion_engine::*;
