//! Demo driver: one best-move request per strategy from the empty board

use anyhow::Result;

use super::Strategy;
use crate::{board::Board, cli::output, search};

/// Print the starting position and the move each strategy selects
pub fn execute() -> Result<()> {
    let mut board = Board::new();

    output::print_section("Initial Board");
    println!("{board}");

    for strategy in [Strategy::Minimax, Strategy::Alphabeta] {
        output::print_section(&format!("AI's best move using {}", strategy.as_str()));
        match search::get_best_move(&mut board, strategy.uses_pruning()) {
            Some(result) => {
                output::print_kv("Position", &result.position.to_string());
                output::print_kv(
                    "Row/Col",
                    &format!("{}, {}", result.position / 3, result.position % 3),
                );
                output::print_kv("Value", &result.value.to_string());
            }
            None => println!("No moves available"),
        }
    }

    Ok(())
}
