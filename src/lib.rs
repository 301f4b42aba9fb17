// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Quoridor: a legality and state-transition engine.
//!
//! The engine accepts move text from the active player, decides whether the
//! move is legal under the Quoridor rules and, if so, applies it:
//! - Pawn steps and jumps, straight and diagonal
//! - Barrier placement with overlap and goal-reachability vetoes
//! - Two- and four-player games with per-player wall budgets
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Collaborators (CLI, UI, bots)     │
//! ├─────────────────────────────────────┤
//! │   Notation: text -> Move            │
//! ├─────────────────────────────────────┤
//! │   Board: legality + execution       │
//! ├─────────────────────────────────────┤
//! │   Grid · Barriers · Reachability    │
//! └─────────────────────────────────────┘
//! ```
//!
//! ```
//! use quoridor::{Board, PlayerCount};
//!
//! let mut board = Board::new(PlayerCount::Two);
//! assert!(board.submit_move("e8").unwrap().is_accepted());
//! assert_eq!(board.active_player(), 2);
//! ```

pub mod error;
pub mod game;
pub mod notation;

pub use error::{BarrierError, ParseMoveError, SetupError};

// Re-export key game types at crate root for convenience
pub use game::{
    Barrier, Board, BoardSetup, BoardSnapshot, Coord, IllegalMove, MoveOutcome, Orientation,
    Player, PlayerCount, PlayerId,
};
pub use notation::{Move, parse_move};
