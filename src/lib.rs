//! Exhaustive game-tree search for 3x3 tic-tac-toe
//!
//! This crate provides:
//! - A complete board and position model with winner/terminal rules
//! - Two interchangeable search strategies: exhaustive minimax and
//!   alpha-beta pruned minimax, with node-count instrumentation
//! - A decision wrapper selecting optimal moves with row-major tie-breaking
//! - Game history tracking for the interactive turn loop

pub mod board;
pub mod cli;
pub mod error;
pub mod game;
pub mod lines;
pub mod position;
pub mod search;

pub use board::{Board, Cell, Player};
pub use error::{Error, Result};
pub use game::{Game, GameOutcome, Move};
pub use position::{Coord, Position};
pub use search::{Decision, FULL_DEPTH, SearchOutcome, Strategy, WIN_SCORE, decide_move, evaluate};
