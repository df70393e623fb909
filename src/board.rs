//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lines;

/// A cell on the tic-tac-toe board
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

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game.
///
/// X is the first mover in a standard game and the side the search engine
/// treats as "player one" when scoring from a fixed perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A 3x3 grid of cells.
///
/// This type implements `Copy` since it's only 9 bytes; board operations
/// return new values instead of mutating in place, so the search never
/// observes a board in a mid-mutation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Get cell at flat index (0-8)
    pub fn get(&self, idx: usize) -> Cell {
        self.cells[idx]
    }

    /// Check if a flat index is empty
    pub fn is_empty_at(&self, idx: usize) -> bool {
        self.cells[idx] == Cell::Empty
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Count the number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Place a piece at a flat index, returning a new board.
    ///
    /// The caller is responsible for the index being empty; this is the
    /// raw placement primitive used by [`Position::apply`].
    ///
    /// [`Position::apply`]: crate::position::Position::apply
    #[must_use = "place returns a new board; the original is unchanged"]
    pub fn place(&self, idx: usize, piece: Cell) -> Board {
        let mut next = *self;
        next.cells[idx] = piece;
        next
    }

    /// Find the player occupying any complete row, column, or diagonal.
    ///
    /// Recomputed from the current cells on every call; never cached here.
    pub fn winner(&self) -> Option<Player> {
        lines::winner_on(&self.cells)
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        lines::has_won(&self.cells, player)
    }

    /// Create a board from a 9-character string representation.
    ///
    /// Cells are row-major; `.` or space is empty, `X`/`O` are pieces.
    /// Whitespace between rows is filtered out, so multi-line fixtures work.
    ///
    /// # Errors
    ///
    /// Returns error if the string does not contain exactly 9 cell
    /// characters or any character is not a valid cell.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| *c != '\n' && *c != '\t').collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoard {
                input: s.to_string(),
                reason: format!("expected 9 cells, got {}", chars.len()),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidBoard {
                input: s.to_string(),
                reason: format!("invalid cell character '{c}' at index {i}"),
            })?;
        }

        Ok(Board { cells })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
