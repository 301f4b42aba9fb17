#![no_main]

//! Full game fuzzer.
//!
//! Drives a board with arbitrary moves, on-board or not:
//! 1. Check legality
//! 2. Apply the move
//! 3. Verify a refused move changed nothing
//! 4. Verify invariants
//!
//! This catches disagreements between the legality rules and execution.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use quoridor::game::check_invariants;
use quoridor::{Barrier, Board, Coord, Move, MoveOutcome, Orientation, PlayerCount};

/// A fuzzer-generated move.
#[derive(Arbitrary, Debug, Clone, Copy)]
enum FuzzMove {
    /// Move the pawn.
    Pawn { col: u8, row: u8 },
    /// Place a barrier.
    Barrier { col: u8, row: u8, vertical: bool },
}

impl FuzzMove {
    fn to_move(self) -> Move {
        match self {
            FuzzMove::Pawn { col, row } => Move::Pawn(Coord::new(col % 10, row % 10)),
            FuzzMove::Barrier { col, row, vertical } => {
                let orientation = if vertical {
                    Orientation::Vertical
                } else {
                    Orientation::Horizontal
                };
                Move::Barrier(Barrier::new(Coord::new(col % 10, row % 10), orientation))
            }
        }
    }
}

/// Structured input for game fuzzing.
#[derive(Arbitrary, Debug)]
struct GameInput {
    /// Four players instead of two.
    four_players: bool,
    /// Moves to attempt, in order.
    moves: Vec<FuzzMove>,
}

fuzz_target!(|input: GameInput| {
    let count = if input.four_players {
        PlayerCount::Four
    } else {
        PlayerCount::Two
    };
    let mut board = Board::new(count);

    for fuzz_move in input.moves.iter().take(200) {
        let mv = fuzz_move.to_move();
        let legal = board.is_legal(mv);
        let before = board.clone();

        match board.apply(mv) {
            MoveOutcome::Accepted { .. } => assert!(legal, "accepted illegal move {mv}"),
            MoveOutcome::Rejected(reason) => {
                assert!(!legal, "rejected legal move {mv}: {reason}");
                assert_eq!(board, before, "rejected {mv} changed the board");
            }
        }

        let violations = check_invariants(&board);
        assert!(violations.is_empty(), "after {mv}: {violations:?}");
    }
});
