//! CLI command implementations for Quoridor.

pub(crate) mod check;
pub(crate) mod legal;
pub(crate) mod play;

mod output;

use clap::ValueEnum;
use quoridor::{Board, BoardSetup, PlayerCount, SetupError};
use std::error::Error;
use std::fmt;
use std::path::Path;

/// Output format for the `check` and `legal` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<SetupError> for CliError {
    fn from(e: SetupError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(e.to_string())
    }
}

/// Parse the `--players` flag.
pub(crate) fn parse_player_count(value: &str) -> Result<PlayerCount, String> {
    let count: u8 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    PlayerCount::try_from(count)
}

/// Build the starting board from a setup file, or the opening position.
///
/// # Errors
///
/// Returns an error if the setup cannot be read or describes an invalid
/// position.
pub(crate) fn load_board(players: PlayerCount, setup: Option<&Path>) -> Result<Board, CliError> {
    match setup {
        Some(path) => {
            let setup = BoardSetup::load(path).map_err(|e| {
                CliError::new(format!("Failed to load {}: {e}", path.display()))
            })?;
            Ok(setup.build()?)
        }
        None => Ok(Board::new(players)),
    }
}
