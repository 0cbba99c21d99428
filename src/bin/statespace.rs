//! statespace CLI - Run the search algorithms on small built-in problems
//!
//! - `deepen`: iterative deepening or bounded depth-first search on a chain
//! - `play`: alpha-beta move choice for Tic-Tac-Toe positions
//! - `sample`: a random path through a three-state Markov chain

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "statespace")]
#[command(version, about = "Problem-independent state-space search", long_about = None)]
struct Cli {
    /// Log search progress at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Depth-bounded search over a chain of states
    Deepen(statespace::cli::commands::deepen::DeepenArgs),

    /// Choose a Tic-Tac-Toe move with alpha-beta search
    Play(statespace::cli::commands::play::PlayArgs),

    /// Sample a path through a Markov chain
    Sample(statespace::cli::commands::sample::SampleArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("statespace=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("statespace=info"))
    };
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    match cli.command {
        Commands::Deepen(args) => statespace::cli::commands::deepen::execute(args),
        Commands::Play(args) => statespace::cli::commands::play::execute(args),
        Commands::Sample(args) => statespace::cli::commands::sample::execute(args),
    }
}
