//! CLI command implementations

pub mod analyze;
pub mod compare;
pub mod demo;

use std::fmt;

use clap::ValueEnum;

/// Search strategy selection shared by the commands
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Strategy {
    /// Exhaustive minimax without pruning
    Minimax,
    /// Minimax with alpha-beta pruning
    Alphabeta,
}

impl Strategy {
    pub fn uses_pruning(self) -> bool {
        matches!(self, Strategy::Alphabeta)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Minimax => "Minimax",
            Strategy::Alphabeta => "Alpha-Beta",
        }
    }
}

impl fmt::Display for Strategy {
    /// Clap value token for the variant; `default_value_t` parses this
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Strategy::Minimax => "minimax",
            Strategy::Alphabeta => "alphabeta",
        };
        write!(f, "{token}")
    }
}
