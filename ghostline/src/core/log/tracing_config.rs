// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

/// Where log output goes, and how verbose it is.
///
/// Fields:
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level_filter`: [`LevelFilter`] - Most verbose level that is recorded.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// Log sinks. `File` takes the full path of the log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl Default for TracingConfig {
    /// Logging is off unless asked for.
    fn default() -> Self {
        Self {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::OFF,
        }
    }
}

impl TracingConfig {
    /// Log `DEBUG` and above to the given file.
    #[must_use]
    pub fn new_file(path: impl Into<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(path.into()),
            level_filter: LevelFilter::DEBUG,
        }
    }

    /// Log `DEBUG` and above to stderr.
    #[must_use]
    pub fn new_stderr() -> Self {
        Self {
            writer_config: WriterConfig::Display(DisplayPreference::Stderr),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn display_preference(&self) -> Option<DisplayPreference> {
        match &self.writer_config {
            WriterConfig::Display(pref) | WriterConfig::DisplayAndFile(pref, _) => {
                Some(*pref)
            }
            WriterConfig::None | WriterConfig::File(_) => None,
        }
    }

    #[must_use]
    pub fn file_path(&self) -> Option<&str> {
        match &self.writer_config {
            WriterConfig::File(path) | WriterConfig::DisplayAndFile(_, path) => {
                Some(path.as_str())
            }
            WriterConfig::None | WriterConfig::Display(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_off() {
        let config = TracingConfig::default();
        assert_eq!(config.level_filter, LevelFilter::OFF);
        assert_eq!(config.display_preference(), None);
        assert_eq!(config.file_path(), None);
    }

    #[test]
    fn test_display_and_file_accessors() {
        let config = TracingConfig {
            writer_config: WriterConfig::DisplayAndFile(
                DisplayPreference::Stderr,
                "/tmp/x.log".into(),
            ),
            level_filter: LevelFilter::TRACE,
        };
        assert_eq!(config.display_preference(), Some(DisplayPreference::Stderr));
        assert_eq!(config.file_path(), Some("/tmp/x.log"));
    }
}
