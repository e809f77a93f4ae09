//! Errors raised while building the generated module.

/// A field set or option value that cannot be turned into valid Rust.
///
/// None of these depend on the *values* in the `.env` file; they come from
/// the keys and the configured package name, or from a bug in the renderer.
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    /// A key derives an identifier that is not valid Rust.
    #[error("environment key `{env_name}` derives `{code_name}`, which is not a valid Rust identifier")]
    InvalidIdentifier {
        /// Key as written in the `.env` file.
        env_name: String,
        /// Identifier derived from the key.
        code_name: String,
    },

    /// Two keys derive the same identifier.
    #[error("environment keys `{first}` and `{second}` both derive the identifier `{code_name}`")]
    DuplicateCodeName {
        /// Shared identifier.
        code_name: String,
        /// First key in sort order.
        first: String,
        /// Second key in sort order.
        second: String,
    },

    /// The configured package name is not a valid module name.
    #[error("package name `{0}` is not a valid Rust module name")]
    InvalidPackageName(String),

    /// The assembled token tree is not a valid Rust file.
    #[error("generated code failed to parse")]
    Template(#[source] syn::Error),
}
