//! Toggles that shape the generated module.

use std::fmt::{self, Display, Formatter};

/// How the generated `init()` reports problems.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum LogBackend {
    /// `eprintln!`, no extra dependency in the generated crate.
    #[default]
    Stderr,

    /// `tracing::warn!` / `tracing::error!` with structured fields.
    Tracing,
}

impl Display for LogBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LogBackend::Stderr => f.write_str("stderr"),
            LogBackend::Tracing => f.write_str("tracing"),
        }
    }
}

/// Options consumed by [`render`](crate::render).
///
/// `Default` yields module `env` with every toggle off, which generates an
/// `init()` that only reads and parses variables, silently falling back to
/// zero values.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderOptions {
    /// Name of the generated `pub mod`.
    pub package_name: String,

    /// Load `.env` from the working directory before reading variables.
    pub dotenv_enabled: bool,

    /// Report a failed `.env` load instead of ignoring it.
    pub dotenv_logging_enabled: bool,

    /// Exit with status 1 after all fields are read if any int/bool failed to parse.
    pub exit_on_parse_error: bool,

    /// Report each int/bool parse failure with the variable name and error.
    pub log_parse_error: bool,

    /// Where reports go.
    pub log_backend: LogBackend,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            package_name: "env".to_string(),
            dotenv_enabled: false,
            dotenv_logging_enabled: false,
            exit_on_parse_error: false,
            log_parse_error: false,
            log_backend: LogBackend::default(),
        }
    }
}

impl RenderOptions {
    /// Whether parse errors must be bound at all.
    pub fn needs_error(&self) -> bool {
        self.exit_on_parse_error || self.log_parse_error
    }
}
