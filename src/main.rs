use anyhow::Result;
use clap::Parser;
use stackcalc::cli::{Cli, init_logging};

fn main() -> Result<()> {
    init_logging();
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Starting stackcalc");
    Cli::parse().run()
}
