//! Assembly of the generated module.
//!
//! The module is built as a token tree from small `quote!` fragments, one
//! per concern, then parsed into a [`syn::File`] and pretty-printed. Each
//! fragment is selected from [`RenderOptions`] once, so every combination of
//! toggles goes through the same, fully-formed building blocks.
//!
//! # Generated Code Pattern
//!
//! ```rust,ignore
//! pub mod env {
//!     #![allow(non_upper_case_globals, dead_code)]
//!
//!     pub static Debug: ::std::sync::OnceLock<bool> = ::std::sync::OnceLock::new();
//!     pub static Port: ::std::sync::OnceLock<i64> = ::std::sync::OnceLock::new();
//!
//!     pub fn init() {
//!         // auto-load   (dotenv.rs)
//!         // has_error   (assign.rs)
//!         // assignments (assign.rs)
//!         // exit check  (assign.rs)
//!     }
//!
//!     fn parse_bool(raw: &str) -> Result<bool, String> { /* helpers.rs */ }
//! }
//! ```

mod assign;
mod dotenv;
mod helpers;
mod report;

use proc_macro2::TokenStream as QuoteStream;
use quote::quote;
use syn::Ident;

use crate::error::CodegenError;
use crate::field::{Field, FieldType, check_fields};
use crate::options::RenderOptions;

use self::assign::{generate_assignments, generate_error_flag, generate_exit_check};
use self::dotenv::generate_dotenv_load;
use self::helpers::generate_parse_bool;

/// First line of every generated file.
pub const HEADER: &str = "// @generated by envgen. Do not edit by hand.\n\n";

/// Renders `fields` into a complete Rust source file.
///
/// Fields are emitted in the order given; pass the output of
/// [`derive_fields`](crate::derive_fields) for deterministic results.
///
/// # Errors
///
/// - [`CodegenError::InvalidPackageName`] if `options.package_name` is not an identifier
/// - [`CodegenError::InvalidIdentifier`] / [`CodegenError::DuplicateCodeName`] from [`check_fields`]
/// - [`CodegenError::Template`] if the assembled tokens are not a valid file
pub fn render(fields: &[Field], options: &RenderOptions) -> Result<String, CodegenError> {
    check_fields(fields)?;

    let file = Expander::new(fields, options).expand()?;

    Ok(format!("{HEADER}{}", prettyplease::unparse(&file)))
}

/// Builds the syntax tree for one render.
pub struct Expander<'a> {
    fields: &'a [Field],
    options: &'a RenderOptions,
}

impl<'a> Expander<'a> {
    /// Creates an expander over already-checked fields.
    pub fn new(fields: &'a [Field], options: &'a RenderOptions) -> Self {
        Self { fields, options }
    }

    /// Produces the generated file as a syntax tree.
    pub fn expand(&self) -> Result<syn::File, CodegenError> {
        let tokens = self.expand_tokens()?;

        syn::parse2::<syn::File>(tokens).map_err(CodegenError::Template)
    }

    fn expand_tokens(&self) -> Result<QuoteStream, CodegenError> {
        let package = syn::parse_str::<Ident>(&self.options.package_name)
            .map_err(|_| CodegenError::InvalidPackageName(self.options.package_name.clone()))?;

        let statics = self
            .fields
            .iter()
            .map(generate_static)
            .collect::<Result<Vec<_>, _>>()?;

        let dotenv_load = generate_dotenv_load(self.options);
        let error_flag = generate_error_flag(self.fields, self.options);
        let assignments = generate_assignments(self.fields, self.options)?;
        let exit_check = generate_exit_check(self.fields, self.options);

        let parse_bool = if self.fields.iter().any(|f| f.ty == FieldType::Bool) {
            generate_parse_bool()
        } else {
            quote! {}
        };

        Ok(quote! {
            /// Typed values of the process environment, filled by [`init`].
            pub mod #package {
                #![allow(non_upper_case_globals, dead_code)]

                #(#statics)*

                /// Reads every variable into its static. Call once at startup.
                pub fn init() {
                    #dotenv_load

                    #error_flag

                    #(#assignments)*

                    #exit_check
                }

                #parse_bool
            }
        })
    }
}

/// Parses a checked `code_name` into an identifier.
pub(crate) fn field_ident(field: &Field) -> Result<Ident, CodegenError> {
    syn::parse_str::<Ident>(&field.code_name).map_err(|_| CodegenError::InvalidIdentifier {
        env_name: field.env_name.clone(),
        code_name: field.code_name.clone(),
    })
}

fn generate_static(field: &Field) -> Result<QuoteStream, CodegenError> {
    let name = field_ident(field)?;
    let ty = field.ty.rust_type();
    let doc = format!(" `{}` as {}.", field.env_name, field.ty);

    Ok(quote! {
        #[doc = #doc]
        pub static #name: ::std::sync::OnceLock<#ty> = ::std::sync::OnceLock::new();
    })
}
