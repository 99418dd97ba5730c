// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io;

/// Error returned from [`readline()`][crate::Session::readline].
///
/// [`Interrupted`][Self::Interrupted] and [`Eof`][Self::Eof] are not failures, they are
/// how the user asks to abandon the line or end the input. Use
/// [`is_signal()`][Self::is_signal] to tell them apart from real errors.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ReadlineError {
    /// The user pressed `Ctrl+C`.
    #[error("interrupted")]
    #[diagnostic(code(r3bl_ghostline::interrupted))]
    Interrupted,

    /// The user pressed `Ctrl+D` on an empty line.
    #[error("end of input")]
    #[diagnostic(code(r3bl_ghostline::eof))]
    Eof,

    /// Reading keystrokes or writing the repaint failed. This ends the call.
    #[error(transparent)]
    #[diagnostic(code(r3bl_ghostline::io))]
    IO(#[from] io::Error),

    /// The terminal could not be switched to raw mode. Nothing was read.
    #[error("failed to enable raw mode: {0}")]
    #[diagnostic(
        code(r3bl_ghostline::raw_mode),
        help("Is the input a terminal? Use `RawModePolicy::Disabled` for pipes and files.")
    )]
    RawMode(String),
}

impl ReadlineError {
    /// `true` for the user initiated [`Interrupted`][Self::Interrupted] and
    /// [`Eof`][Self::Eof].
    #[must_use]
    pub fn is_signal(&self) -> bool { matches!(self, Self::Interrupted | Self::Eof) }
}

/// Raw mode driver functions report through [`miette`].
impl From<miette::Report> for ReadlineError {
    fn from(report: miette::Report) -> Self { ReadlineError::RawMode(format!("{report}")) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_signal() {
        assert!(ReadlineError::Interrupted.is_signal());
        assert!(ReadlineError::Eof.is_signal());
        assert!(!ReadlineError::IO(io::Error::other("boom")).is_signal());
        assert!(!ReadlineError::RawMode("no tty".into()).is_signal());
    }

    #[test]
    fn test_from_report() {
        let err = ReadlineError::from(miette::miette!("tcgetattr failed"));
        assert_eq!(err.to_string(), "failed to enable raw mode: tcgetattr failed");
    }
}
