use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use battle_arena::{ConsolePrompt, Game, GameConfig};

/// Turn-based arena: pick a class, shop, and fight the roster in order.
#[derive(Debug, Parser)]
#[command(name = "battle-arena", version, about)]
struct Cli {
    /// Save file used by the Save and Load menu entries
    #[arg(long, value_name = "PATH")]
    save_file: Option<PathBuf>,

    /// Gold a new character starts with
    #[arg(long, value_name = "N")]
    gold: Option<u32>,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the menus on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let defaults = GameConfig::default();
    let config = GameConfig {
        save_path: cli.save_file.unwrap_or(defaults.save_path),
        starting_gold: cli.gold.unwrap_or(defaults.starting_gold),
        roster: defaults.roster,
    };

    let mut game = Game::new(config, ConsolePrompt::stdio());
    game.run()
}
