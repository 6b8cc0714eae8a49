//! Timing harness comparing minimax and alpha-beta wall-clock cost

use std::{fs, path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use super::Strategy;
use crate::{
    board::Board,
    cli::output,
    search::{self, SearchStats},
};

#[derive(Args)]
pub struct CompareArgs {
    /// Number of repetitions per strategy
    #[arg(long, default_value_t = 5)]
    pub runs: u32,

    /// Write the comparison report as JSON to this path
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Measurements for a single strategy
#[derive(Serialize)]
struct StrategyReport {
    strategy: &'static str,
    total_secs: f64,
    average_secs: f64,
    nodes_per_run: u64,
}

/// Machine-readable comparison output
#[derive(Serialize)]
struct ComparisonReport {
    runs: u32,
    minimax: StrategyReport,
    alphabeta: StrategyReport,
}

/// Time best-move selection from a fresh empty board, `runs` times.
///
/// Each run gets its own board instance so the measurements stay
/// independent of one another.
fn time_strategy(strategy: Strategy, runs: u32) -> StrategyReport {
    let mut total = 0.0;
    let mut stats = SearchStats::default();

    for _ in 0..runs {
        let mut board = Board::new();
        stats = SearchStats::default();
        let start = Instant::now();
        search::get_best_move_with_stats(&mut board, strategy.uses_pruning(), &mut stats);
        total += start.elapsed().as_secs_f64();
    }

    StrategyReport {
        strategy: strategy.as_str(),
        total_secs: total,
        average_secs: total / f64::from(runs),
        nodes_per_run: stats.nodes,
    }
}

/// Run the comparison and report average elapsed time per strategy
pub fn execute(args: CompareArgs) -> Result<()> {
    let runs = args.runs.max(1);

    let spinner = output::create_spinner("Timing strategies from the empty board...");
    let minimax = time_strategy(Strategy::Minimax, runs);
    let alphabeta = time_strategy(Strategy::Alphabeta, runs);
    spinner.finish_and_clear();

    output::print_section(&format!("Performance Comparison (avg over {runs} runs)"));
    for report in [&minimax, &alphabeta] {
        output::print_kv(
            report.strategy,
            &format!(
                "{:.6} s ({} nodes per run)",
                report.average_secs, report.nodes_per_run
            ),
        );
    }

    if let Some(path) = &args.export {
        let report = ComparisonReport {
            runs,
            minimax,
            alphabeta,
        };
        let json = serde_json::to_string_pretty(&report)
            .context("failed to serialize comparison report")?;
        fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
        println!("\nComparison report exported to: {}", path.display());
    }

    Ok(())
}
