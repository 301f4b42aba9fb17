//! Output formatting utilities for CLI.

use quoridor::game::{BOARD_SIZE, BarrierView};
use quoridor::{Board, BoardSnapshot, Coord, IllegalMove, Move};
use serde::Serialize;

/// A move refused while replaying a script.
#[derive(Debug, Clone, Copy, Serialize)]
pub(super) struct JsonRejection {
    /// 1-based script line.
    pub(super) line: usize,
    /// Player who tried the move.
    pub(super) player: u8,
    /// The refused move in notation.
    #[serde(serialize_with = "serialize_display")]
    pub(super) mv: Move,
    /// Why it was refused.
    pub(super) reason: IllegalMove,
}

/// JSON-serializable result of a `check` run.
#[derive(Debug, Serialize)]
pub(super) struct JsonCheckReport {
    /// Number of moves executed.
    pub(super) accepted: usize,
    /// Moves refused along the way.
    pub(super) rejected: Vec<JsonRejection>,
    /// Final position.
    pub(super) board: BoardSnapshot,
}

/// JSON-serializable list of legal moves.
#[derive(Debug, Serialize)]
pub(super) struct JsonLegalMoves {
    /// Player to move.
    pub(super) player: u8,
    /// Legal moves in notation.
    pub(super) moves: Vec<String>,
}

impl JsonLegalMoves {
    /// Create from a board and its legal moves.
    pub(super) fn new(board: &Board, moves: &[Move]) -> Self {
        Self {
            player: board.active_player(),
            moves: moves.iter().map(ToString::to_string).collect(),
        }
    }
}

fn serialize_display<S: serde::Serializer>(mv: &Move, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(mv)
}

/// Draw the board as text.
///
/// Row `1` is at the top. Pawns show as their player number, `|` marks a
/// barrier between two cells of a row and `-` a barrier between two rows.
pub(super) fn render_ascii(board: &Board) -> String {
    let barriers = board.barriers();
    let mut output = String::from("   ");
    for col in 0..BOARD_SIZE {
        output.push(char::from(b'a' + col));
        output.push(' ');
    }
    output.push('\n');

    for row in 0..BOARD_SIZE {
        output.push_str(&format!("{:>2} ", row + 1));
        for col in 0..BOARD_SIZE {
            let cell = Coord::new(col, row);
            match board.grid().occupant(cell) {
                Some(id) => output.push(char::from(b'0' + id)),
                None => output.push('.'),
            }
            let east = Coord::new(col + 1, row);
            if col + 1 < BOARD_SIZE && barriers.blocks_movement(cell, east) {
                output.push('|');
            } else {
                output.push(' ');
            }
        }
        output.push('\n');

        if row + 1 < BOARD_SIZE {
            let mut separator = String::from("   ");
            for col in 0..BOARD_SIZE {
                let cell = Coord::new(col, row);
                let south = Coord::new(col, row + 1);
                separator.push(if barriers.blocks_movement(cell, south) {
                    '-'
                } else {
                    ' '
                });
                separator.push(' ');
            }
            output.push_str(separator.trim_end());
            output.push('\n');
        }
    }

    output
}

/// Format the position as human-readable text.
pub(super) fn format_text(board: &Board) -> String {
    let mut output = String::new();

    output.push_str(&format!("Turn {}\n", u64::from(board.turn()) + 1));
    output.push_str(&render_ascii(board));
    output.push('\n');
    output.push_str(&board.to_string());

    output.push_str("Distance to goal:\n");
    for player in board.players() {
        let distance = board
            .distance_to_goal(player.id)
            .map_or_else(|| String::from("unreachable"), |steps| steps.to_string());
        output.push_str(&format!("  Player {}: {distance}\n", player.id));
    }

    let status = match board.winner() {
        Some(winner) => format!("Player {winner} has won the game!!!\n"),
        None => format!("Player {} to move\n", board.active_player()),
    };
    output.push_str(&status);

    output
}
