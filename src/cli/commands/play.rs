//! Interactive human-vs-engine game loop
//!
//! The loop owns the authoritative game state, parses and validates console
//! input, and renders everything the engine returns (move, score, node
//! count, elapsed time). Invalid input is rejected and re-prompted here;
//! it never reaches the engine.

use std::{
    io::{BufRead, Write},
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Args;

use crate::{
    board::Player,
    cli::output::{board_with_coords, format_number},
    game::{Game, GameOutcome},
    position::{Coord, Position},
    search::{FULL_DEPTH, Strategy, decide_move},
};

/// Arguments for the play command
#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Search strategy for the engine
    #[arg(long, default_value = "alpha-beta")]
    pub strategy: Strategy,

    /// Remaining-depth budget for the search (9 exhausts the tree)
    #[arg(long, default_value_t = FULL_DEPTH)]
    pub depth: u8,

    /// Let the engine move first (engine plays X)
    #[arg(long)]
    pub engine_first: bool,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    run(&args, &mut input, &mut output)
}

/// Run the turn loop over arbitrary input/output streams (testable).
pub fn run(args: &PlayArgs, input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
    let engine = if args.engine_first {
        Player::X
    } else {
        Player::O
    };
    let mut game = Game::from_position(Position::new());

    writeln!(
        output,
        "You are {}, the engine is {engine} ({}, depth {}).",
        engine.opponent(),
        args.strategy,
        args.depth
    )?;

    while game.outcome.is_none() {
        writeln!(output, "\n{}", board_with_coords(&game.current().board))?;

        if game.current().to_move == engine {
            engine_turn(&mut game, args, engine, output)?;
        } else if !human_turn(&mut game, input, output)? {
            writeln!(output, "No more input; aborting game.")?;
            return Ok(());
        }
    }

    writeln!(output, "\n{}", board_with_coords(&game.current().board))?;
    match game.outcome {
        Some(GameOutcome::Win(player)) => writeln!(output, "Game over. Winner: {player}")?,
        Some(GameOutcome::Draw) => writeln!(output, "Game over. Draw.")?,
        None => unreachable!("loop exits only on a decided outcome"),
    }

    Ok(())
}

fn engine_turn(
    game: &mut Game,
    args: &PlayArgs,
    engine: Player,
    output: &mut impl Write,
) -> Result<()> {
    let started = Instant::now();
    let decision = decide_move(game.current(), args.strategy, args.depth)
        .context("engine asked to move in a finished game")?;
    let elapsed = started.elapsed();

    game.play(decision.coord)
        .context("engine produced an unplayable move")?;

    writeln!(output, "{engine} ({}) plays {}", args.strategy, decision.coord)?;
    writeln!(
        output,
        "  nodes expanded: {}, time: {:.3}s",
        format_number(decision.nodes),
        elapsed.as_secs_f64()
    )?;
    Ok(())
}

/// Prompt until a legal move is played. Returns false on end of input.
fn human_turn(game: &mut Game, input: &mut impl BufRead, output: &mut impl Write) -> Result<bool> {
    loop {
        write!(output, "{} to move. Enter row and col (0-2): ", game.current().to_move)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }

        let coord = match parse_coord(&line) {
            Some(coord) => coord,
            None => {
                writeln!(
                    output,
                    "Invalid input! Enter two numbers between 0 and 2 separated by a space."
                )?;
                continue;
            }
        };

        match game.play(coord) {
            Ok(()) => return Ok(true),
            Err(err) => writeln!(output, "Invalid move! {err}. Try again.")?,
        }
    }
}

/// Parse a "row col" pair from a line of console input
fn parse_coord(line: &str) -> Option<Coord> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Coord::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("1 2"), Some(Coord::new(1, 2)));
        assert_eq!(parse_coord("  0   0  "), Some(Coord::new(0, 0)));
        assert_eq!(parse_coord("1"), None);
        assert_eq!(parse_coord("1 2 3"), None);
        assert_eq!(parse_coord("a b"), None);
        assert_eq!(parse_coord(""), None);
    }

    #[test]
    fn test_reprompts_on_bad_input_then_accepts() {
        let args = PlayArgs {
            strategy: Strategy::AlphaBeta,
            depth: FULL_DEPTH,
            engine_first: false,
        };
        // Malformed, out-of-range, occupied (after engine reply it may not
        // be, so just feed a legal game): human plays corners, engine
        // responds optimally, game reaches a decided outcome or input ends.
        let script = "bad input\n5 5\n0 0\n0 1\n2 0\n1 2\n2 2\n2 1\n";
        let mut input = script.as_bytes();
        let mut output = Vec::new();

        run(&args, &mut input, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("Invalid input!"));
        assert!(text.contains("Invalid move!"));
    }

    #[test]
    fn test_engine_never_loses_scripted_game() {
        let args = PlayArgs {
            strategy: Strategy::Minimax,
            depth: FULL_DEPTH,
            engine_first: true,
        };
        // Enough human replies for any game; extra lines are ignored once
        // the game ends.
        let script = "0 0\n0 1\n0 2\n1 0\n1 1\n1 2\n2 0\n2 1\n2 2\n";
        let mut input = script.as_bytes();
        let mut output = Vec::new();

        run(&args, &mut input, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("Game over."));
        assert!(!text.contains("Winner: O"), "engine played X and lost:\n{text}");
    }
}
