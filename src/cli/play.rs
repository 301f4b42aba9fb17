//! Interactive play command implementation.

use super::CliError;
use quoridor::{Board, MoveOutcome};
use std::io::{self, BufRead, Write};

/// Execute the play command on stdin and stdout.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub(crate) fn execute(mut board: Board) -> Result<(), CliError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut board, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Prompt for moves until someone wins or the input ends.
fn run_session<R: BufRead, W: Write>(board: &mut Board, input: R, mut output: W) -> io::Result<()> {
    let mut lines = input.lines();

    while board.winner().is_none() {
        writeln!(output, "Turn {}:", u64::from(board.turn()) + 1)?;
        writeln!(output, "The current game status:")?;
        write!(output, "{board}")?;
        write!(output, "Enter a move player {}: ", board.active_player())?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(output)?;
            return Ok(());
        };

        match board.submit_move(&line) {
            Ok(MoveOutcome::Accepted { player, .. }) => {
                writeln!(output, "Move succeeded")?;
                if let Some(mover) = board.player(player) {
                    writeln!(output, "{mover}")?;
                }
                writeln!(output)?;
            }
            Ok(MoveOutcome::Rejected(reason)) => writeln!(output, "ILLEGAL MOVE: {reason}")?,
            Err(e) => writeln!(output, "MALFORMED MOVE: {e}")?,
        }
    }

    if let Some(winner) = board.winner() {
        writeln!(output, "Player {winner} has won the game!!!")?;
    }
    Ok(())
}
