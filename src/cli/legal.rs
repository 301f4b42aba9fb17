//! Legal move listing command implementation.

use super::output::JsonLegalMoves;
use super::{CliError, OutputFormat};
use quoridor::{Board, Move};

/// Execute the legal command.
///
/// # Errors
///
/// Returns an error if JSON output cannot be produced.
pub(crate) fn execute(board: &Board, format: OutputFormat) -> Result<(), CliError> {
    let moves = board.legal_moves();

    match format {
        OutputFormat::Text => print!("{}", format_listing(board, &moves)),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&JsonLegalMoves::new(board, &moves))?);
        }
    }

    Ok(())
}

fn format_listing(board: &Board, moves: &[Move]) -> String {
    if let Some(winner) = board.winner() {
        return format!("Game over: player {winner} has won\n");
    }

    let (pawn, barrier): (Vec<_>, Vec<_>) =
        moves.iter().partition(|mv| matches!(mv, Move::Pawn(_)));
    format!(
        "Player {} to move\n  Pawn moves ({}): {}\n  Barriers ({}): {}\n",
        board.active_player(),
        pawn.len(),
        join(&pawn),
        barrier.len(),
        join(&barrier),
    )
}

fn join(moves: &[&Move]) -> String {
    moves
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
