//! High-level game management for the interactive turn loop

use serde::{Deserialize, Serialize};

use crate::{
    board::Player,
    position::{Coord, Position},
};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub coord: Coord,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A complete game with history.
///
/// The turn loop exclusively owns the authoritative position across turns;
/// search calls only ever see copies of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    current: Position,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the standard starting position
    pub fn new() -> Self {
        Self::from_position(Position::new())
    }

    /// Create a game starting from an arbitrary position
    pub fn from_position(initial: Position) -> Self {
        let outcome = Self::outcome_of(&initial);
        Game {
            current: initial,
            moves: Vec::new(),
            outcome,
        }
    }

    /// Get the current authoritative position
    pub fn current(&self) -> &Position {
        &self.current
    }

    /// Play a move for the player whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] if the outcome is already decided, or the
    /// underlying move-application error for out-of-range/occupied targets.
    ///
    /// [`Error::GameOver`]: crate::Error::GameOver
    pub fn play(&mut self, coord: Coord) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let player = self.current.to_move;
        let next = self.current.apply(coord)?;

        self.moves.push(Move { coord, player });
        self.outcome = Self::outcome_of(&next);
        self.current = next;

        Ok(())
    }

    fn outcome_of(position: &Position) -> Option<GameOutcome> {
        if !position.is_terminal() {
            return None;
        }
        Some(match position.winner {
            Some(winner) => GameOutcome::Win(winner),
            None => GameOutcome::Draw,
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
