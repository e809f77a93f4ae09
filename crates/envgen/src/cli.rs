//! Command-line arguments.
//!
//! Every option can also come from an `ENVGEN_*` environment variable or the
//! config file; see [`Config::resolve`](crate::Config::resolve) for how the
//! layers combine.

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};

use envgen_codegen::LogBackend;

/// Generate typed Rust statics and an `init()` routine from a `.env` file.
#[derive(Debug, Default, Parser)]
#[command(name = "envgen", version, about, long_about = None)]
pub struct Cli {
    /// Path to the `.env` file to read [default: .env]
    #[arg(long, env = "ENVGEN_ENV", value_name = "PATH")]
    pub env: Option<PathBuf>,

    /// Where to write the generated module, `-` for stdout [default: src/env.rs]
    #[arg(short, long, env = "ENVGEN_OUTPUT", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Name of the generated module [default: env]
    #[arg(long, env = "ENVGEN_PACKAGE_NAME", value_name = "NAME")]
    pub package_name: Option<String>,

    /// Load `.env` at startup of the generated program
    #[arg(long, env = "ENVGEN_DOTENV", value_parser = BoolishValueParser::new())]
    pub dotenv: bool,

    /// Report a failed `.env` load instead of ignoring it
    #[arg(long, env = "ENVGEN_DOTENV_LOGGING", value_parser = BoolishValueParser::new())]
    pub dotenv_logging: bool,

    /// Exit with status 1 if any int/bool variable fails to parse
    #[arg(long, env = "ENVGEN_EXIT_ON_PARSE_ERROR", value_parser = BoolishValueParser::new())]
    pub exit_on_parse_error: bool,

    /// Report each int/bool variable that fails to parse
    #[arg(long, env = "ENVGEN_LOG_PARSE_ERROR", value_parser = BoolishValueParser::new())]
    pub log_parse_error: bool,

    /// How the generated code reports problems [default: stderr]
    #[arg(long, value_enum, env = "ENVGEN_LOG_BACKEND")]
    pub log_backend: Option<LogBackend>,

    /// TOML config file [default: envgen.toml, if present]
    #[arg(long, env = "ENVGEN_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn test_command_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_all_flags() {
        let cli = Cli::try_parse_from([
            "envgen",
            "--env",
            "config/.env",
            "-o",
            "-",
            "--package-name",
            "settings",
            "--dotenv",
            "--dotenv-logging",
            "--exit-on-parse-error",
            "--log-parse-error",
            "--log-backend",
            "tracing",
            "-vv",
        ])
        .expect("should parse");

        assert_eq!(cli.env, Some(PathBuf::from("config/.env")));
        assert_eq!(cli.output, Some(PathBuf::from("-")));
        assert_eq!(cli.package_name.as_deref(), Some("settings"));
        assert!(cli.dotenv && cli.dotenv_logging);
        assert!(cli.exit_on_parse_error && cli.log_parse_error);
        assert_eq!(cli.log_backend, Some(LogBackend::Tracing));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_backend_display_is_accepted_value() {
        for backend in [LogBackend::Stderr, LogBackend::Tracing] {
            let name = backend.to_string();
            let cli = Cli::try_parse_from(["envgen", "--log-backend", name.as_str()])
                .expect("should parse");

            assert_eq!(cli.log_backend, Some(backend));
        }
    }

    #[test]
    fn test_rejects_unknown_backend() {
        assert!(Cli::try_parse_from(["envgen", "--log-backend", "syslog"]).is_err());
    }
}
