//! Log statements emitted into `init()`, per [`LogBackend`].
//!
//! Environment names only ever appear as arguments, never inside a format
//! string, so a key containing `{` cannot break the generated macro call.

use proc_macro2::TokenStream as QuoteStream;
use quote::quote;

use crate::field::FieldType;
use crate::options::LogBackend;

/// Report for a failed `.env` load. Expects `err` in scope.
pub fn generate_dotenv_report(backend: LogBackend) -> QuoteStream {
    match backend {
        LogBackend::Stderr => quote! {
            ::std::eprintln!("could not load .env file: {}", err);
        },
        LogBackend::Tracing => quote! {
            ::tracing::warn!(error = %err, "could not load .env file");
        },
    }
}

/// Report for a variable that failed to parse. Expects `err` in scope.
pub fn generate_parse_report(backend: LogBackend, env_name: &str, ty: FieldType) -> QuoteStream {
    match backend {
        LogBackend::Stderr => {
            let message = format!("could not parse variable {{}} as {ty} from the environment: {{}}");

            quote! {
                ::std::eprintln!(#message, #env_name, err);
            }
        }
        LogBackend::Tracing => {
            let message = format!("could not parse variable as {ty} from the environment");

            quote! {
                ::tracing::error!(var = #env_name, error = %err, #message);
            }
        }
    }
}
