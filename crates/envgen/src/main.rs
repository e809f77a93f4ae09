use clap::Parser;
use tracing_subscriber::EnvFilter;

use envgen::{Cli, Config};

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = Config::resolve(&cli)?;
    envgen::generate(&config)?;

    Ok(())
}

/// `RUST_LOG` wins over `-v` when set.
fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "envgen=warn",
        1 => "envgen=info",
        2 => "envgen=debug",
        _ => "envgen=trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
