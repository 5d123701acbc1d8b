//! Command dispatch.

pub mod demo;
pub mod glyphs;

use anyhow::Result;

use crate::cli::{Cli, Command};

pub async fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Demo { appearance, fast } => {
            demo::handle(appearance.into(), fast, cli.verbose).await
        }
        Command::Glyphs => glyphs::handle(cli.verbose),
    }
}
