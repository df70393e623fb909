//! Test suite for the search engine
//! Validates strategy equivalence, pruning monotonicity, determinism, and
//! optimality of full-depth play

use noughts::{
    Board, Coord, FULL_DEPTH, Player, Position, Strategy, WIN_SCORE, decide_move,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn position(s: &str, to_move: Player) -> Position {
    Position::from_board(Board::from_string(s).unwrap(), to_move)
}

/// Play a uniformly random legal move
fn random_move(position: &Position, rng: &mut StdRng) -> Coord {
    let moves = position.legal_moves();
    moves[rng.random_range(0..moves.len())]
}

mod equivalence {
    use super::*;

    #[test]
    fn identical_scores_from_the_empty_board_at_every_depth() {
        let root = Position::new();
        for depth in 0..=4 {
            let mm = Strategy::Minimax.search(&root, depth, Player::X);
            let ab = Strategy::AlphaBeta.search(&root, depth, Player::X);
            assert_eq!(mm.score, ab.score, "depth {depth}");
            assert!(ab.nodes <= mm.nodes, "depth {depth}");
        }
    }

    #[test]
    fn identical_scores_across_randomly_reached_positions() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let mut state = Position::new();
            while !state.is_terminal() {
                state = state.apply(random_move(&state, &mut rng)).unwrap();
                // Full searches are cheap once a few moves have been made.
                if state.moves < 3 {
                    continue;
                }
                for maximizer in [Player::X, Player::O] {
                    let mm = Strategy::Minimax.search(&state, FULL_DEPTH, maximizer);
                    let ab = Strategy::AlphaBeta.search(&state, FULL_DEPTH, maximizer);
                    assert_eq!(mm.score, ab.score, "diverged at:\n{}", state.board);
                    assert!(ab.nodes <= mm.nodes, "pruning expanded more at:\n{}", state.board);
                }
            }
        }
    }

    #[test]
    fn identical_decisions_on_the_spec_scenarios() {
        let scenarios = [
            ("XX.OO....", Player::X, Coord::new(0, 2)), // immediate win
            ("OO.X.....", Player::X, Coord::new(0, 2)), // must block
        ];

        for (board, to_move, expected) in scenarios {
            let pos = position(board, to_move);
            let mm = decide_move(&pos, Strategy::Minimax, FULL_DEPTH).unwrap();
            let ab = decide_move(&pos, Strategy::AlphaBeta, FULL_DEPTH).unwrap();

            assert_eq!(mm.coord, expected, "minimax on {board}");
            assert_eq!(ab.coord, expected, "alpha-beta on {board}");
            assert_eq!(mm.score, ab.score, "{board}");
        }
    }
}

mod pruning {
    use super::*;

    #[test]
    fn alpha_beta_expands_strictly_fewer_nodes_on_the_full_tree() {
        let root = Position::new();
        let mm = Strategy::Minimax.search(&root, FULL_DEPTH, Player::X);
        let ab = Strategy::AlphaBeta.search(&root, FULL_DEPTH, Player::X);

        assert_eq!(mm.score, 0, "perfect play from the empty board draws");
        assert_eq!(mm.score, ab.score);
        assert!(
            ab.nodes < mm.nodes,
            "expected cutoffs on the full tree: alpha-beta {} vs minimax {}",
            ab.nodes,
            mm.nodes
        );
    }

    #[test]
    fn node_counts_are_deterministic() {
        let pos = position("X...O....", Player::X);
        let first = Strategy::AlphaBeta.search(&pos, FULL_DEPTH, Player::X);
        for _ in 0..3 {
            let again = Strategy::AlphaBeta.search(&pos, FULL_DEPTH, Player::X);
            assert_eq!(first, again);
        }
    }
}

mod determinism {
    use super::*;

    #[test]
    fn repeated_decisions_are_identical() {
        let pos = position("X...O....", Player::X);

        for strategy in [Strategy::Minimax, Strategy::AlphaBeta] {
            let first = decide_move(&pos, strategy, FULL_DEPTH).unwrap();
            for _ in 0..3 {
                let again = decide_move(&pos, strategy, FULL_DEPTH).unwrap();
                assert_eq!(first.coord, again.coord, "{strategy}");
                assert_eq!(first.score, again.score, "{strategy}");
                assert_eq!(first.nodes, again.nodes, "{strategy}");
            }
        }
    }

    #[test]
    fn ties_resolve_to_the_first_row_major_move() {
        // Every opening move draws under perfect play, so (0, 0) must win
        // the tie for both strategies.
        for strategy in [Strategy::Minimax, Strategy::AlphaBeta] {
            let decision = decide_move(&Position::new(), strategy, FULL_DEPTH).unwrap();
            assert_eq!(decision.coord, Coord::new(0, 0), "{strategy}");
            assert_eq!(decision.score, 0, "{strategy}");
        }
    }
}

mod optimality {
    use super::*;

    /// Play one game with the engine on `engine_side` and a seeded random
    /// opponent on the other; return the winner, if any.
    fn engine_vs_random(engine_side: Player, rng: &mut StdRng) -> Option<Player> {
        let mut state = Position::new();
        while !state.is_terminal() {
            let coord = if state.to_move == engine_side {
                decide_move(&state, Strategy::AlphaBeta, FULL_DEPTH)
                    .unwrap()
                    .coord
            } else {
                random_move(&state, rng)
            };
            state = state.apply(coord).unwrap();
        }
        state.winner
    }

    #[test]
    fn full_depth_engine_never_loses_to_a_random_opponent() {
        let mut rng = StdRng::seed_from_u64(42);

        for engine_side in [Player::X, Player::O] {
            for game in 0..40 {
                let winner = engine_vs_random(engine_side, &mut rng);
                assert_ne!(
                    winner,
                    Some(engine_side.opponent()),
                    "engine lost as {engine_side} in game {game}"
                );
            }
        }
    }

    #[test]
    fn perfect_play_against_itself_is_a_draw() {
        for strategy in [Strategy::Minimax, Strategy::AlphaBeta] {
            let mut state = Position::new();
            while !state.is_terminal() {
                let decision = decide_move(&state, strategy, FULL_DEPTH).unwrap();
                state = state.apply(decision.coord).unwrap();
            }
            assert_eq!(state.winner, None, "{strategy} self-play did not draw");
            assert_eq!(state.moves, 9, "{strategy}");
        }
    }

    #[test]
    fn winning_move_scores_the_maximal_value() {
        let pos = position("XX.OO....", Player::X);
        let decision = decide_move(&pos, Strategy::Minimax, FULL_DEPTH).unwrap();
        assert_eq!(decision.score, WIN_SCORE);
    }

    #[test]
    fn drawn_full_board_search_scores_zero() {
        let drawn = position("XOXXXOOXO", Player::X);
        for strategy in [Strategy::Minimax, Strategy::AlphaBeta] {
            let outcome = strategy.search(&drawn, FULL_DEPTH, Player::X);
            assert_eq!(outcome.score, 0, "{strategy}");
            assert_eq!(outcome.nodes, 1, "{strategy}");
        }
    }
}
