// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{DisplayPreference, TracingConfig, try_create_file_appender};
use tracing::subscriber::DefaultGuard;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_target(true)
            .with_file(false)
            .with_line_number(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

impl TracingConfig {
    /// Install as the global default subscriber. Can only succeed once per process.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created, or a global subscriber is
    /// already installed.
    pub fn install_global(self) -> miette::Result<()> {
        let layers = self.try_create_layers()?;
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .map_err(|e| miette::miette!("failed to install tracing subscriber: {e}"))
    }

    /// Install for the current thread only, until the returned guard is dropped. Handy in
    /// tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created.
    pub fn install_thread_local(self) -> miette::Result<DefaultGuard> {
        let layers = self.try_create_layers()?;
        Ok(tracing_subscriber::registry().with(layers).set_default())
    }

    /// Returns the layers without installing them.
    ///
    /// The first layer is always the level filter, so that any layers added later by the
    /// caller are filtered too.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created.
    pub fn try_create_layers(
        &self,
    ) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
        let mut layers: Vec<Box<DynLayer<tracing_subscriber::Registry>>> =
            vec![Box::new(self.level_filter)];

        if let Some(layer) = self.try_create_display_layer() {
            layers.push(layer);
        }

        if let Some(layer) = self.try_create_file_layer()? {
            layers.push(layer);
        }

        Ok(layers)
    }

    fn try_create_display_layer<S>(&self) -> Option<Box<DynLayer<S>>>
    where
        S: tracing_core::Subscriber,
        for<'a> S: LookupSpan<'a>,
    {
        let level_filter: LevelFilter = self.level_filter;
        let fmt_layer = create_fmt!();
        match self.display_preference()? {
            DisplayPreference::Stdout => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stdout)
                    .with_filter(level_filter),
            )),
            DisplayPreference::Stderr => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stderr)
                    .with_filter(level_filter),
            )),
        }
    }

    fn try_create_file_layer<S>(&self) -> miette::Result<Option<Box<DynLayer<S>>>>
    where
        S: tracing_core::Subscriber,
        for<'a> S: LookupSpan<'a>,
    {
        let Some(path) = self.file_path() else {
            return Ok(None);
        };
        let file = try_create_file_appender(path)?;
        Ok(Some(Box::new(
            create_fmt!()
                .with_ansi(false)
                .with_writer(file)
                .with_filter(self.level_filter),
        )))
    }
}
