use anyhow::Result;
use clap::Parser;

use placement_core::cli::{self, Cli};
use placement_core::logging::TracingConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    TracingConfig {
        log_level: log_level.to_string(),
        json: false,
    }
    .init()?;

    cli::run(cli)
}
