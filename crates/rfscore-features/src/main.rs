//! Entrypoint for CLI
use clap::Parser;
mod batch;
mod cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()?;
    Ok(())
}
