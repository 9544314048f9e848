//! The `gradec` command-line driver.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use gradec::cli::Cli;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs a `tracing` subscriber, but only if `RUST_LOG` is set.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

/// Parses the command line and runs the requested subcommand.
fn main() -> anyhow::Result<()> {
    better_panic::install();
    init_tracing();

    let cli: Cli = argh::from_env();
    cli.handle()
}
