//! Gridiron CLI
//!
//! Simulates one game and prints the summary as JSON.

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use gridiron_core::CallerKind;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "gridiron")]
#[command(about = "Simulate dice-driven American football games", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Simulate one game
    Simulate {
        /// Seed for the dice and the heuristic callers
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Home play caller: heuristic, run, short-pass or long-pass
        #[arg(long, default_value = "heuristic")]
        home: CallerKind,

        /// Away play caller: heuristic, run, short-pass or long-pass
        #[arg(long, default_value = "heuristic")]
        away: CallerKind,

        #[arg(long)]
        home_name: Option<String>,

        #[arg(long)]
        away_name: Option<String>,

        /// Rules file (JSON); missing fields keep their defaults
        #[arg(long)]
        config: Option<PathBuf>,

        /// Include every play in the summary
        #[arg(long, default_value = "false")]
        play_by_play: bool,

        /// Pretty-print the JSON
        #[arg(long, default_value = "false")]
        pretty: bool,

        /// Write the summary here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print the default rules as JSON
    Config,
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            seed,
            home,
            away,
            home_name,
            away_name,
            config,
            play_by_play,
            pretty,
            out,
        } => {
            let config = config
                .as_deref()
                .map(gridiron_cli::load_config)
                .transpose()?;
            let options = gridiron_cli::SimulateOptions {
                seed,
                home,
                away,
                home_name,
                away_name,
                config,
                play_by_play,
            };

            tracing::info!(seed, ?home, ?away, "starting simulation");
            let summary = gridiron_cli::run_simulation(&options)?;

            match out {
                Some(path) => {
                    gridiron_cli::write_summary(&summary, &path, pretty)?;
                    tracing::info!(path = %path.display(), "summary written");
                }
                None => println!("{}", gridiron_cli::to_json(&summary, pretty)?),
            }
        }

        Commands::Config => {
            let config = gridiron_core::GameConfig::default();
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("gridiron CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
