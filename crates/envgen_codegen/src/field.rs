//! Field derivation from raw `.env` entries.
//!
//! Each `KEY=value` pair becomes a [`Field`]: the key is kept verbatim for the
//! runtime lookup, a PascalCase identifier is derived from it, and a type is
//! inferred from the value seen at generation time.
//!
//! # Inference Order
//!
//! | Step | Accepts | Type |
//! |------|---------|------|
//! | 1 | `i64` literal (`-42`, `+7`, `8080`) | [`FieldType::Int`] |
//! | 2 | `true`/`false`/`t`/`f`/`1`/`0`, any case | [`FieldType::Bool`] |
//! | 3 | anything else, including `""` | [`FieldType::String`] |
//!
//! `"1"` and `"0"` satisfy both grammars; the integer check runs first.

use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

use proc_macro2::TokenStream as QuoteStream;
use quote::quote;

use crate::error::CodegenError;

/// The closed set of types a field can be inferred as.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FieldType {
    /// Stored verbatim.
    String,

    /// Signed 64-bit integer.
    Int,

    /// Boolean, parsed with the generated `parse_bool` helper.
    Bool,
}

impl FieldType {
    /// Infers the type of a raw value. First match wins, `String` always matches.
    pub fn infer(value: &str) -> Self {
        if is_int(value) {
            FieldType::Int
        } else if is_bool(value) {
            FieldType::Bool
        } else {
            FieldType::String
        }
    }

    /// Short name used in generated log messages.
    pub fn name(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "int",
            FieldType::Bool => "bool",
        }
    }

    /// The Rust type the generated static is declared with.
    pub(crate) fn rust_type(self) -> QuoteStream {
        match self {
            FieldType::String => quote! { ::std::string::String },
            FieldType::Int => quote! { i64 },
            FieldType::Bool => quote! { bool },
        }
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether `value` is accepted by `<i64 as FromStr>::from_str`.
pub fn is_int(value: &str) -> bool {
    value.parse::<i64>().is_ok()
}

/// Whether `value` is one of the boolean tokens the generated code accepts.
pub fn is_bool(value: &str) -> bool {
    parse_bool(value).is_some()
}

/// The boolean grammar shared by inference and the generated `parse_bool`.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Some(true),
        "0" | "f" | "false" => Some(false),
        _ => None,
    }
}

/// Derives an identifier from an environment key.
///
/// The key is split on `_`, each segment is title-cased (first character
/// upper-cased, the rest lower-cased) and the segments are joined. Empty
/// segments disappear, so `A__B` and `_A_B` both yield `AB`.
///
/// ```
/// use envgen_codegen::code_name;
///
/// assert_eq!(code_name("DATABASE_URL"), "DatabaseUrl");
/// assert_eq!(code_name("A_B_C"), "ABC");
/// assert_eq!(code_name("PORT"), "Port");
/// ```
pub fn code_name(env_key: &str) -> String {
    env_key.split('_').map(title_case).collect()
}

fn title_case(segment: &str) -> String {
    let mut chars = segment.chars();

    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// One typed entry of the generated module.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Field {
    /// Environment variable read at runtime, exactly as written in the `.env` file.
    pub env_name: String,

    /// Identifier of the generated static.
    pub code_name: String,

    /// Type inferred from the generation-time value.
    pub ty: FieldType,
}

impl Field {
    /// Builds a field from one `.env` entry.
    pub fn new(env_name: impl Into<String>, value: &str) -> Self {
        let env_name = env_name.into();

        Self {
            code_name: code_name(&env_name),
            ty: FieldType::infer(value),
            env_name,
        }
    }
}

/// Turns a key/value mapping into fields sorted by `code_name`.
///
/// The map's iteration order is irrelevant: fields are sorted byte-wise by
/// `code_name`, with `env_name` breaking ties, so equal inputs always produce
/// the same sequence.
pub fn derive_fields<S>(mapping: &HashMap<String, String, S>) -> Vec<Field> {
    let mut fields: Vec<Field> = mapping
        .iter()
        .map(|(key, value)| Field::new(key.as_str(), value))
        .collect();

    fields.sort_by(|a, b| {
        a.code_name
            .cmp(&b.code_name)
            .then_with(|| a.env_name.cmp(&b.env_name))
    });

    fields
}

/// Checks that every field can be emitted.
///
/// Identifiers must be valid, non-keyword Rust identifiers, and no two keys
/// may derive the same identifier. Works on fields in any order; `first` in
/// a [`CodegenError::DuplicateCodeName`] is the earlier of the two in `fields`.
pub fn check_fields(fields: &[Field]) -> Result<(), CodegenError> {
    let mut seen: HashMap<&str, &str> = HashMap::with_capacity(fields.len());

    for field in fields {
        if syn::parse_str::<syn::Ident>(&field.code_name).is_err() {
            return Err(CodegenError::InvalidIdentifier {
                env_name: field.env_name.clone(),
                code_name: field.code_name.clone(),
            });
        }

        if let Some(first) = seen.insert(&field.code_name, &field.env_name) {
            return Err(CodegenError::DuplicateCodeName {
                code_name: field.code_name.clone(),
                first: first.to_string(),
                second: field.env_name.clone(),
            });
        }
    }

    Ok(())
}
