//! Alpha-beta pruned minimax

use crate::{board::Player, position::Position};

use super::evaluate;

/// Recursively score a position, pruning siblings that cannot matter.
///
/// Node counting and base cases match [`minimax`] exactly. `alpha` is the
/// best score the maximizer can already guarantee and `beta` the best the
/// minimizer can; both flow only through these parameters, never across
/// sibling subtrees. Once `beta <= alpha` at a node the remaining children
/// are cut off: they are never generated, visited, or counted, which is why
/// the node count here is always at most the minimax count for the same
/// search and strictly less whenever a cutoff fires. The returned score is
/// identical to minimax for every reachable position.
///
/// [`minimax`]: super::minimax::minimax
pub(super) fn alphabeta(
    position: &Position,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizer: Player,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 || position.is_terminal() {
        return evaluate(position, maximizer);
    }

    if position.to_move == maximizer {
        let mut best = i32::MIN;
        for coord in position.legal_moves() {
            let child = position
                .apply(coord)
                .expect("legal move generation should not fail");
            let score = alphabeta(&child, depth - 1, alpha, beta, maximizer, nodes);
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for coord in position.legal_moves() {
            let child = position
                .apply(coord)
                .expect("legal move generation should not fail");
            let score = alphabeta(&child, depth - 1, alpha, beta, maximizer, nodes);
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
