//! Private helpers emitted next to `init()`.

use proc_macro2::TokenStream as QuoteStream;
use quote::quote;

/// The runtime side of [`crate::field::parse_bool`].
///
/// Accepts exactly what inference classifies as a boolean, so a value seen
/// as `bool` at generation time always parses at startup.
pub fn generate_parse_bool() -> QuoteStream {
    quote! {
        fn parse_bool(raw: &str) -> ::std::result::Result<bool, ::std::string::String> {
            match raw.to_ascii_lowercase().as_str() {
                "1" | "t" | "true" => ::std::result::Result::Ok(true),
                "0" | "f" | "false" => ::std::result::Result::Ok(false),
                _ => ::std::result::Result::Err(::std::format!("invalid boolean {:?}", raw)),
            }
        }
    }
}
