use anyhow::Result;
use autointerface_cli::{Cli, logging};
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.command.load_config()?;

    logging::init_tracing(&config.logging)?;

    cli.command.execute(config)
}
