//! Exhaustive minimax: visits every child at every level

use crate::{board::Player, position::Position};

use super::evaluate;

/// Recursively score a position with no pruning.
///
/// Every invocation increments `*nodes` by one, the root call included, so
/// the counter threads sequentially through the whole walk. Recursion stops
/// when the depth budget is exhausted or the position is terminal; otherwise
/// the node takes the max (maximizer to move) or min (opponent to move) over
/// children generated in row-major order.
pub(super) fn minimax(position: &Position, depth: u8, maximizer: Player, nodes: &mut u64) -> i32 {
    *nodes += 1;

    if depth == 0 || position.is_terminal() {
        return evaluate(position, maximizer);
    }

    let maximizing = position.to_move == maximizer;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for coord in position.legal_moves() {
        let child = position
            .apply(coord)
            .expect("legal move generation should not fail");
        let score = minimax(&child, depth - 1, maximizer, nodes);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        board::Board,
        search::{FULL_DEPTH, WIN_SCORE},
    };

    fn position(s: &str, to_move: Player) -> Position {
        Position::from_board(Board::from_string(s).unwrap(), to_move)
    }

    #[test]
    fn test_scores_forced_win_for_maximizer() {
        // X X .
        // O O .
        // . . .
        // X to move wins immediately at (0, 2).
        let pos = position("XX.OO....", Player::X);
        let mut nodes = 0;
        let score = minimax(&pos, FULL_DEPTH, Player::X, &mut nodes);

        assert_eq!(score, WIN_SCORE);
        assert!(nodes >= 1);
    }

    #[test]
    fn test_scores_forced_loss_for_maximizer() {
        // O to move wins immediately; scored from X's perspective.
        let pos = position("OO.X.....", Player::O);
        let mut nodes = 0;
        let score = minimax(&pos, FULL_DEPTH, Player::X, &mut nodes);

        assert_eq!(score, -WIN_SCORE);
    }

    #[test]
    fn test_perfect_play_from_empty_board_is_a_draw() {
        let mut nodes = 0;
        let score = minimax(&Position::new(), FULL_DEPTH, Player::X, &mut nodes);

        assert_eq!(score, 0);
        // Root + every expanded node; the full tree without pruning
        // expands well over half a million invocations.
        assert!(nodes > 500_000);
    }

    #[test]
    fn test_node_count_accumulates_across_children() {
        // One empty cell left: root node plus exactly one child.
        let pos = position("XOXXXO.XO", Player::O);
        let mut nodes = 0;
        minimax(&pos, FULL_DEPTH, Player::X, &mut nodes);
        assert_eq!(nodes, 2);
    }

    #[test]
    fn test_depth_budget_cuts_recursion() {
        let pos = Position::new();
        let mut shallow = 0;
        minimax(&pos, 1, Player::X, &mut shallow);
        // Root plus its 9 children, nothing deeper.
        assert_eq!(shallow, 10);
    }
}
