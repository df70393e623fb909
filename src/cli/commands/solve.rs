//! Compare both search strategies from a position
//!
//! Runs minimax and alpha-beta on the same position and reports the chosen
//! move, score, node count, and elapsed time per strategy. Equal scores and
//! a node count that never exceeds minimax's are the expected picture.

use std::time::Instant;

use anyhow::{Result, bail};
use clap::Args;
use serde::Serialize;

use crate::{
    board::{Board, Cell, Player},
    cli::output::{format_number, print_kv, print_section},
    position::{Coord, Position},
    search::{FULL_DEPTH, Strategy, decide_move},
};

/// Arguments for the solve command
#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Board as 9 row-major characters ('.', 'X', 'O'); defaults to empty
    #[arg(long)]
    pub board: Option<String>,

    /// Remaining-depth budget for the search (9 exhausts the tree)
    #[arg(long, default_value_t = FULL_DEPTH)]
    pub depth: u8,

    /// Emit the report as JSON instead of formatted text
    #[arg(long)]
    pub json: bool,
}

/// Per-strategy slice of the report
#[derive(Debug, Serialize)]
pub struct StrategyReport {
    pub strategy: String,
    pub best_move: Coord,
    pub score: i32,
    pub nodes: u64,
    pub elapsed_secs: f64,
}

/// Full two-strategy comparison report
#[derive(Debug, Serialize)]
pub struct SolveReport {
    pub board: String,
    pub to_move: Player,
    pub depth: u8,
    pub minimax: StrategyReport,
    pub alpha_beta: StrategyReport,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let position = match &args.board {
        Some(s) => position_from_fixture(s)?,
        None => Position::new(),
    };

    if position.is_terminal() {
        bail!("position is already terminal; nothing to solve");
    }

    let report = SolveReport {
        board: format!("{}", position.board).replace('\n', "/"),
        to_move: position.to_move,
        depth: args.depth,
        minimax: run_strategy(&position, Strategy::Minimax, args.depth)?,
        alpha_beta: run_strategy(&position, Strategy::AlphaBeta, args.depth)?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn run_strategy(position: &Position, strategy: Strategy, depth: u8) -> Result<StrategyReport> {
    let started = Instant::now();
    let decision = decide_move(position, strategy, depth)?;
    let elapsed = started.elapsed();

    Ok(StrategyReport {
        strategy: strategy.to_string(),
        best_move: decision.coord,
        score: decision.score,
        nodes: decision.nodes,
        elapsed_secs: elapsed.as_secs_f64(),
    })
}

/// Build a position from a board fixture string, inferring whose turn it is
/// from the piece counts (equal counts: X to move; X one ahead: O to move).
fn position_from_fixture(s: &str) -> Result<Position> {
    let board = Board::from_string(s)?;
    let x_count = (0..9).filter(|&i| board.get(i) == Cell::X).count();
    let o_count = (0..9).filter(|&i| board.get(i) == Cell::O).count();

    let to_move = if x_count == o_count {
        Player::X
    } else if x_count == o_count + 1 {
        Player::O
    } else {
        bail!("unreachable piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)");
    };

    Ok(Position::from_board(board, to_move))
}

fn print_report(report: &SolveReport) {
    print_section("Strategy comparison");
    print_kv("Board", &report.board);
    print_kv("To move", &report.to_move.to_string());
    print_kv("Depth", &report.depth.to_string());

    for slice in [&report.minimax, &report.alpha_beta] {
        println!("\n{}", slice.strategy);
        print_kv("Best move", &slice.best_move.to_string());
        print_kv("Score", &slice.score.to_string());
        print_kv("Nodes expanded", &format_number(slice.nodes));
        print_kv("Time", &format!("{:.4}s", slice.elapsed_secs));
    }

    let saved = report
        .minimax
        .nodes
        .saturating_sub(report.alpha_beta.nodes);
    println!();
    print_kv("Nodes pruned away", &format_number(saved));
}
