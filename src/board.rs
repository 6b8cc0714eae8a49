//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
///
/// The AI marks X and maximizes the search value; the human marks O and
/// minimizes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Human,
    Ai,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::Human => Player::Ai,
            Player::Ai => Player::Human,
        }
    }

    /// Convert player to the cell mark it places
    pub fn mark(self) -> Cell {
        match self {
            Player::Human => Cell::O,
            Player::Ai => Cell::X,
        }
    }
}

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Mutable 3x3 board state
///
/// Cells are indexed 0-8 in row-major order (row = index / 3,
/// col = index % 3). The board is owned by the caller driving a game;
/// the search engine mutates it transiently through
/// [`apply_move`]/[`undo_move`] pairs and restores it before every
/// search call returns, so no mutation is observable afterwards.
///
/// This type implements `Copy` for efficiency since it's only 9 bytes.
///
/// [`apply_move`]: Board::apply_move
/// [`undo_move`]: Board::undo_move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Reset all cells to empty, starting a fresh game
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Create a board from a string representation.
    ///
    /// The string should contain 9 cell characters after whitespace is
    /// filtered out: '.' for empty, 'X'/'x', and 'O'/'o'/'0'.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Fewer than 9 non-whitespace characters are present
    /// - Any character is not a valid cell representation
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Count the number of occupied cells on the board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Get all empty positions in ascending index order
    ///
    /// The ascending order is the tie-break rule for move selection: the
    /// first move reaching the best score wins, so iteration order must
    /// stay deterministic.
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Place the player's mark at `pos` if the cell is currently empty.
    ///
    /// Returns `true` on success. Returns `false` and leaves the board
    /// unchanged when `pos` is out of range or the cell is occupied;
    /// this boolean is the only failure mode of the board model.
    pub fn apply_move(&mut self, pos: usize, player: Player) -> bool {
        if pos >= 9 || self.cells[pos] != Cell::Empty {
            return false;
        }
        self.cells[pos] = player.mark();
        true
    }

    /// Reset the cell at `pos` to empty, reverting an earlier apply.
    ///
    /// The search engine calls this after every exploratory apply, on
    /// all control-flow paths including early pruning breaks, so the
    /// board is always restored to its pre-search state.
    pub fn undo_move(&mut self, pos: usize) {
        self.cells[pos] = Cell::Empty;
    }

    /// Check if a player has won by having three in a row
    pub fn is_winner(&self, player: Player) -> bool {
        let target = player.mark();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| self.cells[idx] == target))
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.is_winner(Player::Ai) {
            Some(Player::Ai)
        } else if self.is_winner(Player::Human) {
            Some(Player::Human)
        } else {
            None
        }
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        !self.cells.contains(&Cell::Empty) && self.winner().is_none()
    }

    /// Check if the game is over (win for either player or a draw)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || !self.cells.contains(&Cell::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let base = row * 3;
            writeln!(
                f,
                "{}|{}|{}",
                self.cells[base].to_char(),
                self.cells[base + 1].to_char(),
                self.cells[base + 2].to_char()
            )?;
            if row < 2 {
                writeln!(f, "-----")?;
            }
        }
        Ok(())
    }
}
