//! `.env` auto-load at the top of `init()`.

use proc_macro2::TokenStream as QuoteStream;
use quote::quote;

use crate::options::RenderOptions;

use super::report::generate_dotenv_report;

/// Generates the `.env` load, if enabled.
///
/// | `dotenv_enabled` | `dotenv_logging_enabled` | Output |
/// |---|---|---|
/// | false | any | nothing |
/// | true | false | `let _ = ::dotenvy::dotenv();` |
/// | true | true | `if let Err(err) = ::dotenvy::dotenv() { <report> }` |
///
/// A failed load never stops `init()`.
pub fn generate_dotenv_load(options: &RenderOptions) -> QuoteStream {
    if !options.dotenv_enabled {
        return quote! {};
    }

    if options.dotenv_logging_enabled {
        let report = generate_dotenv_report(options.log_backend);

        quote! {
            if let ::std::result::Result::Err(err) = ::dotenvy::dotenv() {
                #report
            }
        }
    } else {
        quote! {
            let _ = ::dotenvy::dotenv();
        }
    }
}
