//! oxo CLI - Tic-Tac-Toe adversarial search toolkit
//!
//! This CLI provides a unified interface for:
//! - Demonstrating best-move selection with both search strategies
//! - Analyzing per-move values for arbitrary positions
//! - Comparing minimax and alpha-beta by measured wall-clock cost

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Tic-Tac-Toe minimax and alpha-beta search toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the best move from the empty board using each strategy
    Demo,

    /// Analyze per-move search values for a position
    Analyze(oxo::cli::commands::analyze::AnalyzeArgs),

    /// Compare minimax and alpha-beta wall-clock cost
    Compare(oxo::cli::commands::compare::CompareArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => oxo::cli::commands::demo::execute(),
        Commands::Analyze(args) => oxo::cli::commands::analyze::execute(args),
        Commands::Compare(args) => oxo::cli::commands::compare::execute(args),
    }
}
