//! Benchmarks for field derivation and rendering.
//!
//! Run with: `cargo bench --package envgen_codegen`

use std::collections::HashMap;

use divan::{Bencher, black_box};
use envgen_codegen::{RenderOptions, derive_fields, render};

fn main() {
    divan::main();
}

fn mapping(len: usize) -> HashMap<String, String> {
    (0..len)
        .map(|i| {
            let value = match i % 3 {
                0 => i.to_string(),
                1 => "true".to_string(),
                _ => format!("value-{i}"),
            };
            (format!("VAR_{i}_NAME"), value)
        })
        .collect()
}

#[divan::bench(args = [8, 64, 512])]
fn derive(bencher: Bencher, len: usize) {
    let mapping = mapping(len);

    bencher.bench(|| derive_fields(black_box(&mapping)));
}

#[divan::bench(args = [8, 64, 512])]
fn derive_and_render(bencher: Bencher, len: usize) {
    let mapping = mapping(len);
    let options = RenderOptions {
        dotenv_enabled: true,
        dotenv_logging_enabled: true,
        exit_on_parse_error: true,
        log_parse_error: true,
        ..RenderOptions::default()
    };

    bencher.bench(|| render(&derive_fields(black_box(&mapping)), &options));
}
