use anyhow::Result;
use clap::Parser;

use esprint_cli::args::CliArgs;
use esprint_cli::{driver, tracing_config};

fn main() -> Result<()> {
    // Only installs a subscriber when ESPRINT_LOG or RUST_LOG is set.
    tracing_config::init_tracing();

    let args = CliArgs::parse();
    driver::run(&args)
}
