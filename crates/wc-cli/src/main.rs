//! CLI frontend for the Wild Current text adventure.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wc_fiction::config::DEFAULT_SAVE_PATH;

#[derive(Parser)]
#[command(
    name = "wild-current",
    about = "Wild Current: chase legendary treasure across a pirate archipelago",
    version,
    propagate_version = true
)]
struct Cli {
    /// Print engine diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive game on stdin/stdout
    Play {
        /// RNG seed for reproducible rolls
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Save file used by SAVE and LOAD
        #[arg(long, default_value = DEFAULT_SAVE_PATH)]
        save: PathBuf,

        /// JSON catalog to play instead of the built-in content
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Room id to start in (default: the catalog's start room)
        #[arg(long)]
        start: Option<String>,
    },

    /// Print the shortest route between two rooms
    Route {
        /// Starting room (id or name)
        from: String,

        /// Destination room (id or name)
        to: String,

        /// JSON catalog to search instead of the built-in content
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Validate a catalog and summarize its contents
    Check {
        /// JSON catalog to check instead of the built-in content
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// List rooms with their islands and exits
    Rooms {
        /// JSON catalog to list instead of the built-in content
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            seed,
            save,
            catalog,
            start,
        } => commands::play::run(catalog.as_deref(), seed, save, start),
        Commands::Route { from, to, catalog } => commands::route::run(catalog.as_deref(), &from, &to),
        Commands::Check { catalog } => commands::check::run(catalog.as_deref()),
        Commands::Rooms { catalog } => commands::rooms::run(catalog.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
