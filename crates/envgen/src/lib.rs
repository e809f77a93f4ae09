//! # envgen
//!
//! Generate typed Rust access to environment variables from a `.env` file.
//!
//! `envgen` reads `KEY=value` pairs, infers `i64`, `bool` or `String` for each
//! value, and writes a Rust module with one `OnceLock` static per key and an
//! `init()` function that fills them from the process environment at startup.
//!
//! ## Quick Start
//!
//! ```text
//! $ cat .env
//! PORT=8080
//! DEBUG=true
//! NAME=svc
//!
//! $ envgen --output src/env.rs --dotenv --exit-on-parse-error --log-parse-error
//! ```
//!
//! The generated file holds a single `pub mod <package_name>` (default `env`),
//! so the package name is the namespace callers see. Pull it in with
//! `include!` to use it as `env::...` directly:
//!
//! ```rust,ignore
//! include!("env.rs");
//!
//! fn main() {
//!     env::init();
//!     println!("listening on {}", env::Port.get().unwrap());
//! }
//! ```
//!
//! Declaring the file as a module (`mod env;`) nests the two names, giving
//! `env::env::init()`; pick a different `--package-name` if that reads badly.
//!
//! ## Pipeline
//!
//! | Stage | Function | Error variant |
//! |-------|----------|---------------|
//! | Config | [`Config::resolve`] | [`Error::ConfigRead`], [`Error::ConfigParse`] |
//! | Read | [`read_env_file`] | [`Error::Read`] |
//! | Generate | [`render_mapping`] | [`Error::Codegen`] |
//! | Write | [`write_output`] | [`Error::Open`], [`Error::Write`], [`Error::Close`] |
//!
//! Output is rendered completely in memory before the output file is opened,
//! so a generation failure never leaves a partial file behind.
//!
//! ## Error Handling
//!
//! All errors are reported through [`Error`], which integrates with
//! [`miette`] for rich terminal diagnostics:
//!
//! ```rust,ignore
//! if let Err(e) = envgen::generate(&config) {
//!     eprintln!("{:?}", miette::Report::from(e));
//! }
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};

pub use envgen_codegen::{
    CodegenError, Field, FieldType, LogBackend, RenderOptions, code_name, derive_fields, render,
};

pub mod cli;
pub mod config;
pub mod diagnostic_codes;
pub mod output;
pub mod source;

pub use cli::Cli;
pub use config::{Config, FileConfig};
pub use output::{Output, write_output};
pub use source::read_env_file;

/// Errors that can occur while generating the environment module.
///
/// Each variant names the stage that failed and carries a diagnostic code
/// from [`diagnostic_codes`].
///
/// | Code | Meaning |
/// |------|---------|
/// | `envgen::config::read` | Config file could not be read |
/// | `envgen::config::parse` | Config file is not valid TOML for envgen |
/// | `envgen::read` | `.env` file could not be read or parsed |
/// | `envgen::codegen` | Keys or options cannot be turned into Rust |
/// | `envgen::open` | Output file could not be created |
/// | `envgen::write` | Output could not be written |
/// | `envgen::close` | Output could not be flushed or synced |
#[derive(Debug, Diagnostic, thiserror::Error)]
pub enum Error {
    /// The config file could not be read.
    #[error("failed to read config file: {}", .path.display())]
    #[diagnostic(
        code(envgen::config::read),
        help("check the path passed to --config and its permissions")
    )]
    ConfigRead {
        /// Path to the config file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid.
    #[error("invalid config file: {}", .path.display())]
    #[diagnostic(code(envgen::config::parse))]
    ConfigParse {
        /// Path to the config file.
        path: PathBuf,
        /// The config file content for display.
        #[source_code]
        src: NamedSource<String>,
        /// Location of the error, if TOML reported one.
        #[label("{message}")]
        span: Option<SourceSpan>,
        /// Description of what went wrong.
        message: String,
        /// Suggestion for how to fix it.
        #[help]
        help: String,
    },

    /// The `.env` file could not be read or parsed.
    #[error("failed to read .env file: {}", .path.display())]
    #[diagnostic(
        code(envgen::read),
        help("ensure the file exists and every line is KEY=value, a comment, or blank")
    )]
    Read {
        /// Path to the `.env` file.
        path: PathBuf,
        /// The underlying dotenvy error.
        #[source]
        source: dotenvy::Error,
    },

    /// The keys or options cannot be turned into a Rust module.
    #[error("failed to generate code")]
    #[diagnostic(code(envgen::codegen))]
    Codegen {
        /// The underlying construction error.
        #[source]
        source: CodegenError,
        /// Suggestion for how to fix it.
        #[help]
        help: String,
    },

    /// The output file could not be created.
    #[error("failed to create output file: {}", .path.display())]
    #[diagnostic(
        code(envgen::open),
        help("ensure the parent directory exists and is writable")
    )]
    Open {
        /// Output path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The generated source could not be written.
    #[error("failed to write output: {}", .path.display())]
    #[diagnostic(code(envgen::write))]
    Write {
        /// Output path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The output could not be flushed or synced to disk.
    #[error("failed to close output file: {}", .path.display())]
    #[diagnostic(code(envgen::close))]
    Close {
        /// Output path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Constructor helpers for ergonomic error creation
// ─────────────────────────────────────────────────────────────────────────────

impl Error {
    /// Wraps a construction error with help text matching its cause.
    pub fn codegen(source: CodegenError) -> Self {
        let help = match &source {
            CodegenError::InvalidIdentifier { .. } => {
                "keys must start with a letter and contain only letters, digits and underscores"
                    .to_string()
            }
            CodegenError::DuplicateCodeName { first, second, .. } => {
                format!("rename `{first}` or `{second}` so they derive different identifiers")
            }
            CodegenError::InvalidPackageName(_) => {
                "use a snake_case module name such as `env`".to_string()
            }
            CodegenError::Template(_) => "this is a bug in envgen, please report it".to_string(),
        };

        Error::Codegen { source, help }
    }

    /// Creates a config parse error from a TOML error, pointing at its span.
    pub fn config_parse(path: impl Into<PathBuf>, content: &str, error: &toml::de::Error) -> Self {
        let path = path.into();
        let span = error
            .span()
            .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

        Error::ConfigParse {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            path,
            span,
            message: error.message().to_string(),
            help: "check for unknown keys, missing quotes, or values of the wrong type".to_string(),
        }
    }
}

/// Derives, checks and renders fields for an already-read mapping.
pub fn render_mapping<S>(
    mapping: &HashMap<String, String, S>,
    options: &RenderOptions,
) -> Result<String, Error> {
    let fields = derive_fields(mapping);

    tracing::debug!(
        fields = fields.len(),
        package = %options.package_name,
        "derived fields"
    );

    for field in &fields {
        tracing::trace!(env = %field.env_name, name = %field.code_name, ty = %field.ty, "field");
    }

    render(&fields, options).map_err(Error::codegen)
}

/// Runs the whole pipeline: read the `.env` file, render, write the output.
pub fn generate(config: &Config) -> Result<(), Error> {
    let mapping = read_env_file(&config.env)?;
    let source = render_mapping(&mapping, &config.render)?;

    write_output(&config.output, &source)?;

    tracing::info!(
        env = %config.env.display(),
        output = %config.output,
        variables = mapping.len(),
        "generated environment module"
    );

    Ok(())
}
