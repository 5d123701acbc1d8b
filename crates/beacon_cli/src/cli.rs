//! CLI argument definitions using clap derive macros.

use beacon_tui::theme::Appearance;
use clap::{Parser, Subcommand, ValueEnum};

/// Live tool-activity indicators for terminal coding agents
#[derive(Parser)]
#[command(name = "beacon", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Theme appearance flag.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum AppearanceArg {
    #[default]
    Dark,
    Light,
}

impl From<AppearanceArg> for Appearance {
    fn from(arg: AppearanceArg) -> Self {
        match arg {
            AppearanceArg::Dark => Appearance::Dark,
            AppearanceArg::Light => Appearance::Light,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the indicator feed with a scripted tool sequence
    Demo {
        /// Theme appearance
        #[arg(long, value_enum, default_value_t = AppearanceArg::Dark)]
        appearance: AppearanceArg,
        /// Play the sequence with short delays
        #[arg(long)]
        fast: bool,
    },
    /// Print the icon, category-color, and status tables
    Glyphs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn demo_flags_parse() {
        let cli = Cli::parse_from(["beacon", "demo", "--appearance", "light", "--fast"]);
        match cli.command {
            Command::Demo { appearance, fast } => {
                assert!(matches!(appearance, AppearanceArg::Light));
                assert!(fast);
            }
            _ => panic!("expected demo command"),
        }
    }
}
