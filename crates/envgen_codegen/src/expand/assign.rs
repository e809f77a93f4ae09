//! Per-field assignments and the parse-error policy.
//!
//! The policy is decided once from [`RenderOptions`] and applied to every
//! `int`/`bool` field alike:
//!
//! | `exit_on_parse_error` | `log_parse_error` | On parse failure |
//! |---|---|---|
//! | false | false | zero value, error dropped via `unwrap_or_default()` |
//! | true | false | zero value, `has_error = true` |
//! | false | true | zero value, report |
//! | true | true | zero value, `has_error = true`, report |
//!
//! `has_error` only ever goes from `false` to `true`; the exit check runs
//! after the last field.

use proc_macro2::TokenStream as QuoteStream;
use quote::quote;

use crate::error::CodegenError;
use crate::field::{Field, FieldType};
use crate::options::RenderOptions;

use super::field_ident;
use super::report::generate_parse_report;

fn tracks_errors(fields: &[Field], options: &RenderOptions) -> bool {
    options.exit_on_parse_error && fields.iter().any(|f| f.ty != FieldType::String)
}

/// Declares the has-error flag when a parse failure can set it.
pub fn generate_error_flag(fields: &[Field], options: &RenderOptions) -> QuoteStream {
    if tracks_errors(fields, options) {
        quote! { let mut has_error = false; }
    } else {
        quote! {}
    }
}

/// Exits with status 1 if any field failed to parse.
pub fn generate_exit_check(fields: &[Field], options: &RenderOptions) -> QuoteStream {
    if tracks_errors(fields, options) {
        quote! {
            if has_error {
                ::std::process::exit(1);
            }
        }
    } else {
        quote! {}
    }
}

/// One statement per field, in field order.
pub fn generate_assignments(
    fields: &[Field],
    options: &RenderOptions,
) -> Result<Vec<QuoteStream>, CodegenError> {
    fields
        .iter()
        .map(|field| generate_assignment(field, options))
        .collect()
}

fn generate_assignment(field: &Field, options: &RenderOptions) -> Result<QuoteStream, CodegenError> {
    let name = field_ident(field)?;
    let env_name = field.env_name.as_str();
    let raw = quote! { ::std::env::var(#env_name).unwrap_or_default() };

    let parsed = match field.ty {
        FieldType::String => {
            return Ok(quote! {
                let _ = #name.set(#raw);
            });
        }
        FieldType::Int => quote! { #raw.parse::<i64>() },
        FieldType::Bool => quote! { parse_bool(&#raw) },
    };

    if !options.needs_error() {
        return Ok(quote! {
            let _ = #name.set(#parsed.unwrap_or_default());
        });
    }

    let flag = if options.exit_on_parse_error {
        quote! { has_error = true; }
    } else {
        quote! {}
    };

    let (binding, report) = if options.log_parse_error {
        (
            quote! { err },
            generate_parse_report(options.log_backend, env_name, field.ty),
        )
    } else {
        (quote! { _ }, quote! {})
    };

    Ok(quote! {
        let _ = #name.set(match #parsed {
            ::std::result::Result::Ok(value) => value,
            ::std::result::Result::Err(#binding) => {
                #flag
                #report
                ::std::default::Default::default()
            }
        });
    })
}
