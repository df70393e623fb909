//! noughts CLI - optimal tic-tac-toe play via exhaustive game-tree search
//!
//! This CLI provides:
//! - An interactive game against the engine with either search strategy
//! - A strategy comparison reporting score, nodes expanded, and timing

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Optimal tic-tac-toe via minimax and alpha-beta search", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the engine
    Play(noughts::cli::commands::play::PlayArgs),

    /// Run both strategies from a position and compare them
    Solve(noughts::cli::commands::solve::SolveArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
        Commands::Solve(args) => noughts::cli::commands::solve::execute(args),
    }
}
