//! Minimax and alpha-beta game-tree search over [`Board`]
//!
//! Both procedures evaluate the full game tree with the same value
//! convention and return identical results; alpha-beta skips subtrees
//! proven incapable of changing the chosen value and therefore visits
//! fewer nodes. The [`SearchStats`] counter makes that difference
//! observable without timing.

use serde::Serialize;

use crate::board::{Board, Player};

/// Base score of a decided game, before the depth adjustment
const WIN_SCORE: i32 = 10;

/// Best move found for the AI, paired with its minimax value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Cell index 0-8
    pub position: usize,
    pub value: i32,
}

/// Count of recursive evaluation calls made during a search
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub nodes: u64,
}

/// Score a terminal board, or `None` when play continues.
///
/// An AI win at depth `d` scores `WIN_SCORE - d`, a human win scores
/// `d - WIN_SCORE`, a draw scores 0. The depth adjustment biases the
/// search toward faster wins and slower losses among otherwise equal
/// lines; it is a correctness-relevant tie-break, not cosmetic.
fn leaf_value(board: &Board, depth: i32) -> Option<i32> {
    if board.is_winner(Player::Ai) {
        Some(WIN_SCORE - depth)
    } else if board.is_winner(Player::Human) {
        Some(depth - WIN_SCORE)
    } else if board.is_draw() {
        Some(0)
    } else {
        None
    }
}

/// Exhaustive minimax evaluation of the position.
///
/// `maximizing` selects whose turn it is: the AI maximizes, the human
/// minimizes. Every reachable node at every depth is visited. The board
/// is mutated during recursion but restored before returning.
pub fn minimax(board: &mut Board, depth: i32, maximizing: bool) -> i32 {
    let mut stats = SearchStats::default();
    minimax_with_stats(board, depth, maximizing, &mut stats)
}

/// Minimax evaluation that also counts recursive calls
pub fn minimax_with_stats(
    board: &mut Board,
    depth: i32,
    maximizing: bool,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;

    // Terminal check before move generation: a decided board has no
    // legal continuation for the losing side.
    if let Some(value) = leaf_value(board, depth) {
        return value;
    }

    if maximizing {
        let mut best = i32::MIN;
        for pos in board.available_moves() {
            let applied = board.apply_move(pos, Player::Ai);
            debug_assert!(applied, "available_moves returned an occupied cell");
            let value = minimax_with_stats(board, depth + 1, false, stats);
            board.undo_move(pos);
            best = best.max(value);
        }
        best
    } else {
        let mut best = i32::MAX;
        for pos in board.available_moves() {
            let applied = board.apply_move(pos, Player::Human);
            debug_assert!(applied, "available_moves returned an occupied cell");
            let value = minimax_with_stats(board, depth + 1, true, stats);
            board.undo_move(pos);
            best = best.min(value);
        }
        best
    }
}

/// Minimax evaluation with alpha-beta pruning.
///
/// Identical value convention and results as [`minimax`]; remaining
/// siblings are skipped as soon as `beta <= alpha`. Top-level calls
/// pass `alpha = i32::MIN, beta = i32::MAX`.
pub fn alphabeta(board: &mut Board, depth: i32, alpha: i32, beta: i32, maximizing: bool) -> i32 {
    let mut stats = SearchStats::default();
    alphabeta_with_stats(board, depth, alpha, beta, maximizing, &mut stats)
}

/// Alpha-beta evaluation that also counts recursive calls
pub fn alphabeta_with_stats(
    board: &mut Board,
    depth: i32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;

    if let Some(value) = leaf_value(board, depth) {
        return value;
    }

    if maximizing {
        let mut max_eval = i32::MIN;
        for pos in board.available_moves() {
            let applied = board.apply_move(pos, Player::Ai);
            debug_assert!(applied, "available_moves returned an occupied cell");
            let value = alphabeta_with_stats(board, depth + 1, alpha, beta, false, stats);
            // Undo before the prune check so an early break cannot
            // leave the exploratory move on the board.
            board.undo_move(pos);
            max_eval = max_eval.max(value);
            alpha = alpha.max(value);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for pos in board.available_moves() {
            let applied = board.apply_move(pos, Player::Human);
            debug_assert!(applied, "available_moves returned an occupied cell");
            let value = alphabeta_with_stats(board, depth + 1, alpha, beta, true, stats);
            board.undo_move(pos);
            min_eval = min_eval.min(value);
            beta = beta.min(value);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

/// Select the best move for the AI.
///
/// Returns `None` when no empty cell remains; callers should check
/// [`Board::is_terminal`] when interpreting that sentinel. Otherwise
/// iterates the available moves in ascending index order, evaluates the
/// subtree behind each with the chosen procedure (human to move next,
/// depth 0 for this top-level ply), and keeps the first move with a
/// strictly greater score than anything seen before. The AI's own
/// first-level moves are always explored exhaustively; `use_pruning`
/// only affects the inner evaluation of each candidate's subtree.
pub fn get_best_move(board: &mut Board, use_pruning: bool) -> Option<SearchResult> {
    let mut stats = SearchStats::default();
    get_best_move_with_stats(board, use_pruning, &mut stats)
}

/// Best-move selection that also counts recursive evaluation calls
pub fn get_best_move_with_stats(
    board: &mut Board,
    use_pruning: bool,
    stats: &mut SearchStats,
) -> Option<SearchResult> {
    let mut best: Option<SearchResult> = None;

    for pos in board.available_moves() {
        let applied = board.apply_move(pos, Player::Ai);
        debug_assert!(applied, "available_moves returned an occupied cell");
        let value = if use_pruning {
            alphabeta_with_stats(board, 0, i32::MIN, i32::MAX, false, stats)
        } else {
            minimax_with_stats(board, 0, false, stats)
        };
        board.undo_move(pos);

        match best {
            Some(current) if value <= current.value => {}
            _ => best = Some(SearchResult { position: pos, value }),
        }
    }

    best
}
