//! Centralized registry of diagnostic error codes used throughout envgen.
//!
//! These constants document all error codes used in `#[diagnostic(code(...))]`
//! attributes. The derive requires literal paths, so this module is the single
//! place to look them up and to match on them programmatically.
//!
//! # Example
//!
//! ```rust,ignore
//! use miette::Diagnostic;
//! use envgen::diagnostic_codes;
//!
//! if let Err(error) = envgen::generate(&config) {
//!     let code = error.code().map(|c| c.to_string());
//!     if code.as_deref() == Some(diagnostic_codes::CODEGEN) {
//!         eprintln!("fix the keys in your .env file");
//!     }
//! }
//! ```

/// Config file could not be read.
pub const CONFIG_READ: &str = "envgen::config::read";

/// Config file is not valid.
pub const CONFIG_PARSE: &str = "envgen::config::parse";

/// `.env` file could not be read or parsed.
pub const READ: &str = "envgen::read";

/// Keys or options cannot be turned into Rust.
pub const CODEGEN: &str = "envgen::codegen";

/// Output file could not be created.
pub const OPEN: &str = "envgen::open";

/// Output could not be written.
pub const WRITE: &str = "envgen::write";

/// Output could not be flushed or synced.
pub const CLOSE: &str = "envgen::close";
