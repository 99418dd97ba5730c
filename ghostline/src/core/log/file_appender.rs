// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::miette;
use std::path::PathBuf;
use tracing_appender::rolling::{self, RollingFileAppender};

/// Create a file appender that never rotates, writing to `path_str`.
///
/// Don't wrap the result in `tracing_appender::non_blocking()`. Its worker thread would
/// outlive a short `readline()` and lose the tail of the log.
///
/// # Errors
///
/// Returns an error if the path has no parent directory or no file name.
pub fn try_create_file_appender(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let parent = path.parent().ok_or_else(|| {
        miette!("Can't access parent folder of {}. It might not exist.", path.display())
    })?;

    let file_name = path.file_name().ok_or_else(|| {
        miette!("Can't access file name of {}. It might not exist.", path.display())
    })?;

    Ok(rolling::never(parent, file_name))
}
