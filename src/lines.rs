//! Winning line analysis for the 3x3 board

use crate::board::{Cell, Player};

/// Winning line indices on the 3x3 board.
///
/// The scan order (rows, then columns, then diagonals) is fixed so that
/// winner detection is deterministic. A valid reachable position has at
/// most one true winner, so the order never changes the answer.
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

/// Find the player occupying a complete line, if any.
///
/// Scans `WINNING_LINES` in order and returns the owner of the first line
/// whose three cells are equal and non-empty.
pub fn winner_on(cells: &[Cell; 9]) -> Option<Player> {
    for line in &WINNING_LINES {
        let first = cells[line[0]];
        if first != Cell::Empty && line.iter().all(|&idx| cells[idx] == first) {
            return first.to_player();
        }
    }
    None
}

/// Check if a player has three in a row
pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
    let target = player.cell();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == target))
}
