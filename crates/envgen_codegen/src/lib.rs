//! # envgen_codegen
//!
//! Type inference and source generation behind `envgen`.
//!
//! Given the entries of a `.env` file, this crate decides a type for every
//! value and renders a Rust module that declares one static per entry plus an
//! `init()` function that fills them from the process environment.
//!
//! The crate does no I/O: the caller reads the `.env` file and writes the
//! result.
//!
//! ## Module Structure
//!
//! - `field` - Identifier derivation, type inference, ordering, checks
//! - `options` - Toggles consumed by the renderer
//! - `expand` - Syntax-tree assembly and pretty-printing
//! - `error` - Construction errors
//!
//! ## Example
//!
//! ```
//! use std::collections::HashMap;
//!
//! use envgen_codegen::{FieldType, RenderOptions, derive_fields, render};
//!
//! let mapping = HashMap::from([
//!     ("PORT".to_string(), "8080".to_string()),
//!     ("DEBUG".to_string(), "true".to_string()),
//!     ("NAME".to_string(), "svc".to_string()),
//! ]);
//!
//! let fields = derive_fields(&mapping);
//! assert_eq!(fields[0].code_name, "Debug");
//! assert_eq!(fields[2].ty, FieldType::Int);
//!
//! let source = render(&fields, &RenderOptions::default()).unwrap();
//! assert!(source.contains("pub mod env"));
//! ```

mod error;
mod expand;
mod field;
mod options;

pub use error::CodegenError;
pub use expand::{Expander, HEADER, render};
pub use field::{
    Field, FieldType, check_fields, code_name, derive_fields, is_bool, is_int, parse_bool,
};
pub use options::{LogBackend, RenderOptions};
