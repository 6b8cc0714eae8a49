//! Test suite for the adversarial search engine
//! Validates strategy agreement, move selection, and board invariants

use oxo::board::{Board, Player};
use oxo::search::{
    alphabeta, get_best_move, get_best_move_with_stats, minimax, minimax_with_stats, SearchStats,
};

mod strategy_agreement {
    use super::*;

    /// Walk every board reachable from empty by legal alternating play
    /// and assert that both procedures agree on the position value.
    fn assert_agreement_below(board: &mut Board, to_move: Player, checked: &mut usize) {
        let maximizing = to_move == Player::Ai;
        let plain = minimax(board, 0, maximizing);
        let pruned = alphabeta(board, 0, i32::MIN, i32::MAX, maximizing);
        assert_eq!(
            plain, pruned,
            "strategies disagree ({plain} vs {pruned}) on\n{board}"
        );
        *checked += 1;

        if board.is_terminal() {
            return;
        }
        for pos in board.available_moves() {
            assert!(board.apply_move(pos, to_move));
            assert_agreement_below(board, to_move.opponent(), checked);
            board.undo_move(pos);
        }
    }

    #[test]
    fn minimax_and_alphabeta_agree_on_all_reachable_positions() {
        let mut board = Board::new();
        let mut checked = 0;
        assert_agreement_below(&mut board, Player::Ai, &mut checked);

        // Sanity: the walk actually covered the game tree
        assert!(checked > 100_000, "only {checked} positions checked");
        assert_eq!(board, Board::new(), "walk must restore the board");
    }
}

mod move_selection {
    use super::*;

    #[test]
    fn empty_board_move_is_deterministic() {
        // All nine openings draw under perfect play; ascending-index
        // iteration with a strict improvement keeps index 0.
        for use_pruning in [false, true] {
            let mut board = Board::new();
            let result = get_best_move(&mut board, use_pruning).unwrap();
            assert_eq!(result.position, 0, "tie-break must pick the lowest index");
            assert_eq!(result.value, 0);
        }
    }

    #[test]
    fn takes_immediate_win() {
        // X X .        AI completes the top row at position 2.
        // O O .
        // . . .
        let mut board = Board::from_string("XX.OO....").unwrap();
        assert_eq!(minimax(&mut board, 0, true), 9, "win one ply down scores 9");

        for use_pruning in [false, true] {
            let result = get_best_move(&mut board, use_pruning).unwrap();
            assert_eq!(result.position, 2);
            assert_eq!(result.value, 10, "child of the root is evaluated at depth 0");
        }
    }

    #[test]
    fn blocks_immediate_human_win() {
        // O O .        The human threatens position 2; every non-block
        // . X .        loses, so the AI must play 2.
        // . . X
        let mut board = Board::from_string("OO..X...X").unwrap();

        for use_pruning in [false, true] {
            let result = get_best_move(&mut board, use_pruning).unwrap();
            assert_eq!(result.position, 2, "AI must block the human's top row");
            assert!(result.value > 0, "blocking here actually wins for the AI");
        }

        // Every alternative move loses outright
        for pos in board.available_moves() {
            if pos == 2 {
                continue;
            }
            assert!(board.apply_move(pos, Player::Ai));
            let value = minimax(&mut board, 0, false);
            board.undo_move(pos);
            assert!(value < 0, "move {pos} should lose, got value {value}");
        }
    }

    #[test]
    fn full_board_returns_no_move() {
        let mut board = Board::from_string("XOXXOOOXX").unwrap();
        assert!(board.is_terminal());
        assert_eq!(get_best_move(&mut board, false), None);
        assert_eq!(get_best_move(&mut board, true), None);
    }

    #[test]
    fn search_leaves_caller_board_untouched() {
        let mut board = Board::from_string("X...O....").unwrap();
        let snapshot = board;
        get_best_move(&mut board, false);
        get_best_move(&mut board, true);
        minimax(&mut board, 0, false);
        alphabeta(&mut board, 0, i32::MIN, i32::MAX, false);
        assert_eq!(board, snapshot);
    }
}

mod pruning {
    use super::*;

    #[test]
    fn alphabeta_never_visits_more_nodes() {
        // A handful of non-trivial mid-game positions plus the empty board
        let positions = [
            ".........",
            "X........",
            "X...O....",
            "XO..X....",
            "XOX.O...X",
        ];

        for s in positions {
            let mut board = Board::from_string(s).unwrap();

            let mut plain = SearchStats::default();
            get_best_move_with_stats(&mut board, false, &mut plain);

            let mut pruned = SearchStats::default();
            get_best_move_with_stats(&mut board, true, &mut pruned);

            assert!(
                pruned.nodes <= plain.nodes,
                "pruning visited more nodes on '{s}': {} vs {}",
                pruned.nodes,
                plain.nodes
            );
        }
    }

    #[test]
    fn alphabeta_prunes_strictly_on_empty_board() {
        let mut board = Board::new();

        let mut plain = SearchStats::default();
        minimax_with_stats(&mut board, 0, true, &mut plain);

        let mut board = Board::new();
        let mut pruned = SearchStats::default();
        oxo::search::alphabeta_with_stats(
            &mut board,
            0,
            i32::MIN,
            i32::MAX,
            true,
            &mut pruned,
        );

        assert!(
            pruned.nodes < plain.nodes,
            "expected a strict cut from the full tree: {} vs {}",
            pruned.nodes,
            plain.nodes
        );
    }
}

mod board_rules {
    use super::*;
    use oxo::board::Cell;

    #[test]
    fn apply_on_occupied_cell_fails_and_preserves_state() {
        let mut board = Board::new();
        assert!(board.apply_move(4, Player::Ai));
        let before = board;
        assert!(!board.apply_move(4, Player::Human));
        assert_eq!(board, before);
    }

    #[test]
    fn apply_undo_sequences_restore_bit_identical_state() {
        let mut board = Board::from_string("X.O.X....").unwrap();
        let snapshot = board;

        for pos in board.available_moves() {
            assert!(board.apply_move(pos, Player::Human));
            board.undo_move(pos);
        }
        assert_eq!(board, snapshot);
    }

    #[test]
    fn draw_requires_full_board_without_winner() {
        // X O X
        // X O O
        // O X X
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert_eq!(board.occupied_count(), 9);
        assert!(!board.is_winner(Player::Ai));
        assert!(!board.is_winner(Player::Human));
        assert!(board.is_draw());

        // A won full board is not a draw
        let won = Board::from_string("XXXOOXOXO").unwrap();
        assert!(won.is_winner(Player::Ai));
        assert!(!won.is_draw());

        // An unfinished board is not a draw
        let open = Board::from_string("XOX......").unwrap();
        assert!(!open.is_draw());
        assert_eq!(open.get(1), Cell::O);
    }
}
