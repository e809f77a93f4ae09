//! Example: Rendering a module without touching the filesystem
//!
//! Builds the key/value mapping in memory, renders it with `tracing`
//! reporting and exit-on-error, and prints the result.
//!
//! Run with:
//!   `cargo run --example render_stdout`
//!
//! Or with a different module name:
//!   `ENVGEN_PACKAGE_NAME=settings cargo run --example render_stdout`

use std::collections::HashMap;

use envgen::{LogBackend, Output, RenderOptions, write_output};

fn main() -> miette::Result<()> {
    let mapping: HashMap<String, String> = [
        ("DATABASE_URL", "postgres://localhost/app"),
        ("HTTP_PORT", "8080"),
        ("FEATURE_X_ENABLED", "false"),
        ("WORKER_COUNT", "4"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let options = RenderOptions {
        package_name: std::env::var("ENVGEN_PACKAGE_NAME").unwrap_or_else(|_| "env".to_string()),
        dotenv_enabled: true,
        exit_on_parse_error: true,
        log_parse_error: true,
        log_backend: LogBackend::Tracing,
        ..RenderOptions::default()
    };

    let source = envgen::render_mapping(&mapping, &options)?;
    write_output(&Output::Stdout, &source)?;

    Ok(())
}
