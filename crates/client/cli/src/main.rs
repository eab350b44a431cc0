//! Command-line harness for the banqi rules engine.
mod config;
mod logging;
mod render;
mod selfplay;

use anyhow::Result;
use banqi_core::{DealSource, init_game};
use clap::{Parser, Subcommand};

use config::HarnessConfig;

/// Deal, inspect and self-play Stacked Banqi games
#[derive(Parser)]
#[command(name = "banqi")]
#[command(about = "Stacked Banqi rules engine harness", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the dealt board for a seed
    Show {
        /// Deal seed
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },

    /// Play random games and report how they ended
    Selfplay {
        /// Seed of the first game; later games use consecutive seeds
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Number of games to play
        #[arg(long, default_value_t = 10)]
        games: u32,

        /// Overrides BANQI_MAX_TURNS
        #[arg(long)]
        max_turns: Option<u32>,
    },
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = HarnessConfig::from_env();
    let _guard = logging::setup_logging(&config)?;

    match cli.command {
        Command::Show { seed } => {
            let state = init_game(DealSource::Seeded(seed), config.rules);
            print!("{}", render::render_board(&state));
        }
        Command::Selfplay {
            seed,
            games,
            max_turns,
        } => {
            let max_turns = max_turns.unwrap_or(config.max_turns);
            tracing::info!(seed, games, max_turns, "starting self-play");
            let summary = selfplay::run(seed, games, max_turns, config.rules)?;
            println!("{summary}");
        }
    }

    Ok(())
}
