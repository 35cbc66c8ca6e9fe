//! mouse-control: move the system cursor to typed coordinates, one credit per move

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mouse_control::config::Settings;

mod commands;

#[derive(Parser)]
#[command(name = "mouse-control")]
#[command(about = "Move the mouse cursor to typed coordinates", long_about = None)]
#[command(version)]
struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Move the cursor once, spending one credit
    Move {
        /// Target X coordinate
        #[arg(allow_hyphen_values = true)]
        x: String,

        /// Target Y coordinate
        #[arg(allow_hyphen_values = true)]
        y: String,

        /// Starting credits (defaults to the configured balance)
        #[arg(long)]
        credits: Option<u32>,
    },

    /// Print the live cursor position
    Position {
        /// Sampling interval in milliseconds
        #[arg(long)]
        interval_ms: Option<u64>,

        /// Stop after this many samples
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Start an interactive session
    Run {
        /// Starting credits (defaults to the configured balance)
        #[arg(long)]
        credits: Option<u32>,

        /// Print every position change
        #[arg(long)]
        live: bool,
    },

    /// Show the effective settings
    Config,
}

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_millis()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Move { x, y, credits } => {
            commands::move_cursor::execute(&settings, &x, &y, credits)?;
        }

        Commands::Position { interval_ms, count } => {
            let options = commands::position::PositionOptions { interval_ms, count };
            commands::position::execute(&settings, options)?;
        }

        Commands::Run { credits, live } => {
            let options = commands::run::RunOptions { credits, live };
            commands::run::execute(&settings, options)?;
        }

        Commands::Config => {
            commands::show_config::execute(&settings, cli.config.as_deref())?;
        }
    }

    Ok(())
}
