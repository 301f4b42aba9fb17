//! Move script command implementation.

use super::output::{JsonCheckReport, JsonRejection, format_text};
use super::{CliError, OutputFormat};
use quoridor::{Board, Move, MoveOutcome};
use std::fs;
use std::path::Path;

/// Execute the check command.
///
/// # Errors
///
/// Returns an error if the script cannot be read or contains a malformed
/// move. Illegal moves are reported and skipped.
pub(crate) fn execute(
    mut board: Board,
    script: &Path,
    format: OutputFormat,
) -> Result<(), CliError> {
    let text = fs::read_to_string(script)
        .map_err(|e| CliError::new(format!("Failed to read {}: {e}", script.display())))?;

    let report = replay_script(&mut board, &text)?;

    match format {
        OutputFormat::Text => {
            for rejection in &report.rejected {
                println!(
                    "line {}: ILLEGAL MOVE {} by player {}: {}",
                    rejection.line, rejection.mv, rejection.player, rejection.reason
                );
            }
            if !report.rejected.is_empty() {
                println!();
            }
            print!("{}", format_text(&board));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

/// Apply every move in the script, in order.
///
/// Blank lines and everything after a `#` are ignored.
fn replay_script(board: &mut Board, text: &str) -> Result<JsonCheckReport, CliError> {
    let mut accepted = 0;
    let mut rejected = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        let player = board.active_player();
        let mv = line
            .parse::<Move>()
            .map_err(|e| CliError::new(format!("line {}: {e}", index + 1)))?;
        match board.apply(mv) {
            MoveOutcome::Accepted { .. } => accepted += 1,
            MoveOutcome::Rejected(reason) => rejected.push(JsonRejection {
                line: index + 1,
                player,
                mv,
                reason,
            }),
        }
    }

    Ok(JsonCheckReport {
        accepted,
        rejected,
        board: board.snapshot(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quoridor::{Coord, IllegalMove, PlayerCount};

    #[test]
    fn test_replay_script() {
        let mut board = Board::new(PlayerCount::Two);
        let script = "# opening\ne8\n\ne2 # step down\ne6\nd7h\n";
        let report = replay_script(&mut board, script).unwrap();

        assert_eq!(report.accepted, 3);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].line, 5);
        assert_eq!(report.rejected[0].player, 1);
        assert_eq!(report.rejected[0].reason, IllegalMove::NoAdjacentPawn);
        assert_eq!(report.board.turn, 3);
        assert_eq!(report.board.barriers.len(), 1);
        assert_eq!(board.player(2).unwrap().position, Coord::new(4, 1));
    }

    #[test]
    fn test_malformed_line_fails() {
        let mut board = Board::new(PlayerCount::Two);
        let err = replay_script(&mut board, "e8\ne2\nbogus\ne7\n").unwrap_err();
        assert_eq!(err.to_string(), "line 3: move must be 2 or 3 characters, got 5");
        assert_eq!(board.turn(), 2);
    }

    #[test]
    fn test_execute_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moves.txt");
        fs::write(&path, "e8\ne2\n").unwrap();

        let board = Board::new(PlayerCount::Two);
        assert!(execute(board.clone(), &path, OutputFormat::Json).is_ok());

        let err = execute(board, &dir.path().join("missing.txt"), OutputFormat::Text).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }
}
