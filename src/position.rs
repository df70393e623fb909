//! Game positions: board, turn, move count, and cached winner

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player};

/// A 0-indexed board coordinate.
///
/// Moves are enumerated in row-major order (row 0 left to right, then row 1,
/// then row 2), which is the visible tie-break contract: when two moves
/// score equally, the first one in row-major order wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// Flat board index (row-major)
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Coordinate from a flat board index
    pub fn from_index(idx: usize) -> Self {
        Coord {
            row: idx / 3,
            col: idx % 3,
        }
    }

    /// Check the coordinate lies on the 3x3 board
    pub fn in_bounds(self) -> bool {
        self.row < 3 && self.col < 3
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The unit the search engine operates over: a board plus whose turn it is,
/// the accumulated move count, and the winner computed at construction.
///
/// Positions are persistent: [`apply`] returns a new value and the original
/// is never mutated, so no restore-on-exit discipline is needed anywhere in
/// the search.
///
/// Invariants: `moves` equals the number of occupied cells; `winner` is
/// `Some` only when a complete line exists on `board`; `to_move` alternates
/// with each applied move.
///
/// [`apply`]: Position::apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub board: Board,
    pub to_move: Player,
    pub winner: Option<Player>,
    pub moves: u8,
}

impl Position {
    /// Create the starting position: empty board, X to move
    pub fn new() -> Self {
        Self::with_first_player(Player::X)
    }

    /// Create an empty-board position with a specified first mover
    pub fn with_first_player(first: Player) -> Self {
        Position {
            board: Board::new(),
            to_move: first,
            winner: None,
            moves: 0,
        }
    }

    /// Build a position from an existing board, recomputing the cached
    /// winner and move count.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        Position {
            board,
            to_move,
            winner: board.winner(),
            moves: board.occupied_count() as u8,
        }
    }

    /// All legal moves in row-major order; empty when the game is over
    pub fn legal_moves(&self) -> Vec<Coord> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..9)
            .filter(|&idx| self.board.is_empty_at(idx))
            .map(Coord::from_index)
            .collect()
    }

    /// Apply a move for the player to move, returning the successor position.
    ///
    /// Places the piece, recomputes the winner, increments the move count,
    /// and flips the turn.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMove`] for coordinates outside the board and
    /// [`Error::OccupiedCell`] for non-empty targets. The search engine never
    /// triggers either since it only iterates moves from [`legal_moves`];
    /// callers applying external input must expect both.
    ///
    /// [`Error::InvalidMove`]: crate::Error::InvalidMove
    /// [`Error::OccupiedCell`]: crate::Error::OccupiedCell
    /// [`legal_moves`]: Position::legal_moves
    #[must_use = "apply returns a new position; the original is unchanged"]
    pub fn apply(&self, coord: Coord) -> Result<Position, crate::Error> {
        if !coord.in_bounds() {
            return Err(crate::Error::InvalidMove {
                row: coord.row,
                col: coord.col,
            });
        }
        if !self.board.is_empty_at(coord.index()) {
            return Err(crate::Error::OccupiedCell {
                row: coord.row,
                col: coord.col,
            });
        }

        let board = self.board.place(coord.index(), self.to_move.cell());
        Ok(Position {
            board,
            to_move: self.to_move.opponent(),
            winner: board.winner(),
            moves: self.moves + 1,
        })
    }

    /// Check if the game is over: someone won or all 9 cells are filled
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some() || self.moves == 9
    }

    /// Check if the position is a completed draw
    pub fn is_draw(&self) -> bool {
        self.moves == 9 && self.winner.is_none()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}
