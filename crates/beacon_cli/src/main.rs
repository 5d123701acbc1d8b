//! CLI entry point for beacon.

mod cli;
mod commands;

use clap::Parser;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    commands::handle(cli).await
}
