//! Quoridor CLI - play, replay and inspect Quoridor positions.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Quoridor - a move legality and state-transition engine
#[derive(Parser, Debug)]
#[command(name = "quoridor")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the starting position comes from.
#[derive(Args, Debug, Clone)]
struct PositionArgs {
    /// Number of players: 2 or 4
    #[arg(short, long, default_value = "2", value_parser = cli::parse_player_count)]
    players: quoridor::PlayerCount,

    /// JSON board setup to start from (overrides --players)
    #[arg(long)]
    setup: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play interactively, one move per line on stdin
    Play {
        #[command(flatten)]
        position: PositionArgs,
    },

    /// Apply a script of moves and print the final position
    Check {
        /// Move script: one move per line, '#' starts a comment
        #[arg(required = true)]
        script: PathBuf,

        #[command(flatten)]
        position: PositionArgs,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// List every legal move for the player to move
    Legal {
        #[command(flatten)]
        position: PositionArgs,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },
}

fn main() -> ExitCode {
    let args = Cli::parse();

    // Logs go to stderr so stdout stays clean for game output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match args.command {
        Commands::Play { position } => {
            cli::load_board(position.players, position.setup.as_deref())
                .and_then(cli::play::execute)
        }

        Commands::Check {
            script,
            position,
            format,
        } => cli::load_board(position.players, position.setup.as_deref())
            .and_then(|board| cli::check::execute(board, &script, format)),

        Commands::Legal { position, format } => {
            cli::load_board(position.players, position.setup.as_deref())
                .and_then(|board| cli::legal::execute(&board, format))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
