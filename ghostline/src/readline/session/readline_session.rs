// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Action, EditContext, History, InputDevice, LineState, NoopRawMode,
            NormalInput, OutputDevice, RawModeDriver, RawModeGuard, RawModePolicy,
            ReadlineConfig, ReadlineError, SuggestionEngine, classify_rune,
            decode_escape_sequence, default_raw_mode_driver, handle_key};
use std::{io::Write, sync::Arc};

/// A blocking line editor. Create one per input stream and call
/// [`readline()`][Self::readline] in a loop.
///
/// History is kept across calls, but only lines passed to
/// [`add_history()`][Self::add_history] are recorded.
///
/// ```
/// use r3bl_ghostline::{InputDevice, InputDeviceExt, OutputDevice, OutputDeviceExt,
///                      Session};
///
/// // "he", Tab, Enter.
/// let input_device = InputDevice::new_mock("he\t\r");
/// let (output_device, _stdout_mock) = OutputDevice::new_mock();
/// let mut session = Session::with_devices(
///     vec!["hello".into(), "world".into()],
///     Some(input_device),
///     Some(output_device),
/// );
/// assert_eq!(session.readline("> ").unwrap(), "hello");
/// ```
#[derive(Debug)]
pub struct Session {
    input_device: InputDevice,
    output_device: OutputDevice,
    raw_mode_driver: Arc<dyn RawModeDriver>,
    line_state: LineState,
    suggestions: SuggestionEngine,
    history: History,
    config: ReadlineConfig,
}

impl Session {
    /// Read from stdin, write to stdout, default settings.
    #[must_use]
    pub fn new(suggestions: Vec<String>) -> Self {
        Self::with_config(suggestions, None, None, ReadlineConfig::default())
    }

    /// `None` falls back to stdin / stdout.
    #[must_use]
    pub fn with_devices(
        suggestions: Vec<String>,
        input_device: Option<InputDevice>,
        output_device: Option<OutputDevice>,
    ) -> Self {
        Self::with_config(
            suggestions,
            input_device,
            output_device,
            ReadlineConfig::default(),
        )
    }

    /// Raw mode is only used when the policy is [`RawModePolicy::Terminal`] and the
    /// input is stdin.
    #[must_use]
    pub fn with_config(
        suggestions: Vec<String>,
        input_device: Option<InputDevice>,
        output_device: Option<OutputDevice>,
        config: ReadlineConfig,
    ) -> Self {
        let input_device = input_device.unwrap_or_default();
        let output_device = output_device.unwrap_or_default();

        let raw_mode_driver: Arc<dyn RawModeDriver> =
            match (config.raw_mode, input_device.is_stdin()) {
                (RawModePolicy::Terminal, true) => default_raw_mode_driver(),
                _ => Arc::new(NoopRawMode),
            };

        Self {
            input_device,
            output_device,
            raw_mode_driver,
            line_state: LineState::new(
                "",
                config.continuation_prompt.as_str(),
                config.show_ghost_text,
            ),
            suggestions: SuggestionEngine::new(suggestions),
            history: History::new(config.max_history),
            config,
        }
    }

    /// Replace the raw mode driver, eg: with a [`crate::RecordingRawMode`] in tests.
    pub fn set_raw_mode_driver(&mut self, driver: Arc<dyn RawModeDriver>) {
        self.raw_mode_driver = driver;
    }

    #[must_use]
    pub fn config(&self) -> &ReadlineConfig { &self.config }

    /// Record a line for Up / Down navigation in later calls.
    pub fn add_history(&mut self, line: &str) { self.history.add(line); }

    #[must_use]
    pub fn history(&self) -> &History { &self.history }

    /// The buffer as the last [`readline()`][Self::readline] call left it.
    #[must_use]
    pub fn line_state(&self) -> &LineState { &self.line_state }

    /// Replace the candidate list. Takes effect from the next keystroke.
    pub fn set_suggestions(&mut self, suggestions: Vec<String>) {
        self.suggestions.set_suggestions(suggestions);
    }

    pub fn set_continuation_prompt(&mut self, prompt: &str) {
        prompt.clone_into(&mut self.config.continuation_prompt);
        self.line_state.set_continuation_prompt(prompt);
    }

    /// Show `prompt` and edit a line until the user submits it.
    ///
    /// The terminal is in raw mode for the duration of the call and is restored on every
    /// way out, including errors and panics.
    ///
    /// # Errors
    ///
    /// - [`ReadlineError::Interrupted`] on `Ctrl+C`.
    /// - [`ReadlineError::Eof`] on `Ctrl+D` with an empty buffer.
    /// - [`ReadlineError::IO`] if the input ends or fails, or output can't be written.
    /// - [`ReadlineError::RawMode`] if the terminal can't be switched to raw mode.
    pub fn readline(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        self.line_state.reset(prompt);
        self.history.reset("");

        let _guard = RawModeGuard::new(self.raw_mode_driver.clone())?;

        let Self {
            input_device,
            output_device,
            line_state,
            suggestions,
            history,
            ..
        } = self;
        let term: &mut dyn Write = output_device.resource.as_mut();
        let mut ctx = EditContext {
            suggestions,
            history,
        };

        line_state.render_and_flush(term, ctx.suggestions)?;

        loop {
            let rune = input_device.read_rune().inspect_err(|err| {
                tracing::error!(message = "failed to read from input", %err);
            })?;

            let key = match classify_rune(rune) {
                NormalInput::Key(key) => key,
                NormalInput::EscapeSequence => {
                    match decode_escape_sequence(|| input_device.read_rune()) {
                        Some(key) => key,
                        None => continue,
                    }
                }
                NormalInput::Ignored => continue,
            };

            let action = handle_key(line_state, key, &mut ctx, term)?;
            tracing::debug!(message = "key handled", %key, %action);

            match action {
                Action::Continue => {}
                Action::Submit(line) => return Ok(line),
                Action::Interrupted => return Err(ReadlineError::Interrupted),
                Action::Eof => return Err(ReadlineError::Eof),
            }
        }
    }
}
