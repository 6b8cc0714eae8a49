//! Tic-Tac-Toe adversarial search
//!
//! This crate provides:
//! - A mutable 3x3 board model with move application, undo, and
//!   terminal-condition detection
//! - Exhaustive minimax evaluation of the game tree
//! - An alpha-beta pruning variant that selects identical moves while
//!   visiting fewer nodes
//! - A CLI for demos, position analysis, and timing the two strategies
//!   against each other

pub mod board;
pub mod cli;
pub mod error;
pub mod search;

pub use board::{Board, Cell, Player};
pub use error::{Error, Result};
pub use search::{alphabeta, get_best_move, minimax, SearchResult, SearchStats};
