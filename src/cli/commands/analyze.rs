//! Position analysis: per-move search values for a given board

use anyhow::{Context, Result};
use clap::Args;

use super::Strategy;
use crate::{
    board::{Board, Player},
    cli::output,
    search,
};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Board as 9 cells in row-major order ('.' empty), e.g. "XO..X...."
    #[arg(long)]
    pub state: String,

    /// Evaluation strategy
    #[arg(long, value_enum, default_value_t = Strategy::Alphabeta)]
    pub strategy: Strategy,
}

/// Show the value of every available AI move in the given position
pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let mut board = Board::from_string(&args.state)
        .with_context(|| format!("failed to parse board state '{}'", args.state))?;

    output::print_section("Position");
    println!("{board}");

    if board.is_terminal() {
        println!("(state is terminal)");
        return Ok(());
    }

    println!("Move values for the AI ({}):", args.strategy.as_str());
    for pos in board.available_moves() {
        let applied = board.apply_move(pos, Player::Ai);
        debug_assert!(applied, "available_moves returned an occupied cell");
        let value = if args.strategy.uses_pruning() {
            search::alphabeta(&mut board, 0, i32::MIN, i32::MAX, false)
        } else {
            search::minimax(&mut board, 0, false)
        };
        board.undo_move(pos);
        println!(
            "  - position {} (row {}, col {}): value {}",
            pos,
            pos / 3,
            pos % 3,
            value
        );
    }

    if let Some(best) = search::get_best_move(&mut board, args.strategy.uses_pruning()) {
        println!(
            "\nBest move: position {} (value {})",
            best.position, best.value
        );
    }

    Ok(())
}
