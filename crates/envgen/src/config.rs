//! Resolved generator configuration.
//!
//! # Layering Order
//!
//! Sources are merged in this order (lowest to highest priority):
//!
//! 1. **Built-in defaults** - `.env`, `src/env.rs`, module `env`, toggles off
//! 2. **Config file** - `--config <PATH>`, or `envgen.toml` if it exists
//! 3. **Environment variables** - `ENVGEN_*`
//! 4. **CLI flags**
//!
//! Layers 3 and 4 are merged by clap before [`Config::resolve`] sees them.
//! Toggles are OR-ed across layers: any layer can switch one on.
//!
//! # Config File
//!
//! ```toml
//! env = "config/.env"
//! output = "src/generated/env.rs"
//! package_name = "settings"
//! dotenv = true
//! dotenv_logging = true
//! exit_on_parse_error = true
//! log_parse_error = true
//! log_backend = "tracing"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use envgen_codegen::{LogBackend, RenderOptions};

use crate::Error;
use crate::cli::Cli;
use crate::output::Output;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "envgen.toml";

/// `.env` path used when no layer sets one.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Output path used when no layer sets one.
pub const DEFAULT_OUTPUT: &str = "src/env.rs";

/// Contents of an `envgen.toml` file. Every key is optional.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Path to the `.env` file.
    pub env: Option<PathBuf>,

    /// Output path, `-` for stdout.
    pub output: Option<PathBuf>,

    /// Name of the generated module.
    pub package_name: Option<String>,

    /// Emit `.env` auto-load.
    pub dotenv: bool,

    /// Report a failed auto-load.
    pub dotenv_logging: bool,

    /// Exit on any parse failure.
    pub exit_on_parse_error: bool,

    /// Report each parse failure.
    pub log_parse_error: bool,

    /// Report destination in generated code.
    pub log_backend: Option<LogBackend>,
}

impl FileConfig {
    /// Loads a config file that must exist.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(path, &content)
    }

    /// Loads a config file if it exists.
    pub fn load_optional(path: &Path) -> Result<Option<Self>, Error> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(path, &content).map(Some),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(Error::ConfigRead {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Parses TOML content; `path` is only used for diagnostics.
    pub fn parse(path: &Path, content: &str) -> Result<Self, Error> {
        toml::from_str(content).map_err(|e| Error::config_parse(path, content, &e))
    }
}

/// Everything one generation run needs.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// `.env` file to read.
    pub env: PathBuf,

    /// Destination of the generated module.
    pub output: Output,

    /// Options handed to the renderer.
    pub render: RenderOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            env: PathBuf::from(DEFAULT_ENV_FILE),
            output: Output::File(PathBuf::from(DEFAULT_OUTPUT)),
            render: RenderOptions::default(),
        }
    }
}

impl Config {
    /// Loads the config file named by `cli` (or the default one) and layers
    /// `cli` on top of it.
    pub fn resolve(cli: &Cli) -> Result<Self, Error> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::load_optional(Path::new(DEFAULT_CONFIG_FILE))?.unwrap_or_default(),
        };

        let config = Self::layer(file, cli);

        tracing::debug!(
            env = %config.env.display(),
            output = %config.output,
            package = %config.render.package_name,
            log_backend = %config.render.log_backend,
            "resolved configuration"
        );

        Ok(config)
    }

    /// Merges a config file with CLI/env values; `cli` wins.
    pub fn layer(file: FileConfig, cli: &Cli) -> Self {
        let defaults = Self::default();

        let env = cli.env.clone().or(file.env).unwrap_or(defaults.env);

        let output = cli
            .output
            .clone()
            .or(file.output)
            .map_or(defaults.output, Output::from);

        let render = RenderOptions {
            package_name: cli
                .package_name
                .clone()
                .or(file.package_name)
                .unwrap_or(defaults.render.package_name),
            dotenv_enabled: cli.dotenv || file.dotenv,
            dotenv_logging_enabled: cli.dotenv_logging || file.dotenv_logging,
            exit_on_parse_error: cli.exit_on_parse_error || file.exit_on_parse_error,
            log_parse_error: cli.log_parse_error || file.log_parse_error,
            log_backend: cli
                .log_backend
                .or(file.log_backend)
                .unwrap_or(defaults.render.log_backend),
        };

        Self {
            env,
            output,
            render,
        }
    }
}
