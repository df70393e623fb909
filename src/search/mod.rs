//! Game-tree search: exhaustive minimax and alpha-beta pruned minimax
//!
//! Both strategies walk the same tree with the same terminal rules and the
//! same node-count instrumentation; alpha-beta additionally skips siblings
//! that provably cannot change the outcome. For every reachable position
//! they return the same optimal score, and alpha-beta never visits more
//! nodes than minimax.

mod alphabeta;
mod minimax;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    board::Player,
    position::{Coord, Position},
};

/// Remaining plies needed to exhaust the tree from any reachable position.
///
/// A 3x3 game lasts at most 9 moves, so searching 9 plies from any position
/// always reaches terminality before the depth budget runs out.
pub const FULL_DEPTH: u8 = 9;

/// Terminal score for a win by the maximizing player.
///
/// Scoring convention: +1 for a maximizer win, -1 for a loss, 0 for a draw
/// or a non-terminal depth cutoff. Scores are never depth-discounted, so
/// magnitude carries no quicker-win preference.
pub const WIN_SCORE: i32 = 1;

/// Score a position from the fixed perspective of the maximizing player
pub fn evaluate(position: &Position, maximizer: Player) -> i32 {
    match position.winner {
        Some(winner) if winner == maximizer => WIN_SCORE,
        Some(_) => -WIN_SCORE,
        None => 0,
    }
}

/// Which tree walker to use for a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    Minimax,
    AlphaBeta,
}

impl Strategy {
    /// Search a position to the given remaining depth.
    ///
    /// Scores from the fixed perspective of `maximizer`; whether a node
    /// maximizes or minimizes follows from whose turn it is. The returned
    /// node count includes this root invocation (always at least 1).
    pub fn search(self, position: &Position, depth: u8, maximizer: Player) -> SearchOutcome {
        let mut nodes = 0;
        let score = match self {
            Strategy::Minimax => minimax::minimax(position, depth, maximizer, &mut nodes),
            Strategy::AlphaBeta => alphabeta::alphabeta(
                position,
                depth,
                i32::MIN,
                i32::MAX,
                maximizer,
                &mut nodes,
            ),
        };
        SearchOutcome { score, nodes }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Minimax => write!(f, "minimax"),
            Strategy::AlphaBeta => write!(f, "alpha-beta"),
        }
    }
}

impl FromStr for Strategy {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" => Ok(Strategy::Minimax),
            "alpha-beta" | "alphabeta" | "alpha_beta" => Ok(Strategy::AlphaBeta),
            _ => Err(crate::Error::ParseStrategy {
                input: s.to_string(),
            }),
        }
    }
}

/// Score and node count returned by a single search call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub score: i32,
    pub nodes: u64,
}

/// A move selected at the decision root, with search diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// The chosen move
    pub coord: Coord,
    /// Score of the chosen move from the acting player's perspective
    pub score: i32,
    /// Total nodes expanded across all root children
    pub nodes: u64,
}

/// Select the best move for the player to move.
///
/// Applies each legal move in row-major order, searches the resulting
/// position with the given strategy and `depth - 1` remaining plies, and
/// keeps the move whose score is strictly greater than the best seen so
/// far. Ties keep the earliest move found, so row-major order is the
/// tie-break priority. Node counts accumulate across all root children.
///
/// # Errors
///
/// Returns [`Error::NoLegalMove`] if the position is terminal or full.
/// The surrounding game loop is responsible for never calling this after
/// the game has ended.
///
/// [`Error::NoLegalMove`]: crate::Error::NoLegalMove
pub fn decide_move(
    position: &Position,
    strategy: Strategy,
    depth: u8,
) -> Result<Decision, crate::Error> {
    let moves = position.legal_moves();
    if moves.is_empty() {
        return Err(crate::Error::NoLegalMove);
    }

    let maximizer = position.to_move;
    let mut best_coord = None;
    let mut best_score = i32::MIN;
    let mut nodes = 0;

    for coord in moves {
        let child = position.apply(coord)?;
        let outcome = strategy.search(&child, depth.saturating_sub(1), maximizer);
        nodes += outcome.nodes;

        if outcome.score > best_score {
            best_score = outcome.score;
            best_coord = Some(coord);
        }
    }

    let coord = best_coord.ok_or(crate::Error::NoLegalMove)?;
    Ok(Decision {
        coord,
        score: best_score,
        nodes,
    })
}
