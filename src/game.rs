//! Game layer for Quoridor.
//!
//! Implements the rules on a fixed 9×9 board:
//! - Grid of cells and pawn occupancy
//! - Barriers and the movement predicates derived from them
//! - Goal reachability search
//! - Players with goal lines and wall budgets
//! - Board state machine deciding and executing moves

mod barrier;
mod board;
mod grid;
pub mod invariants;
mod player;
pub mod reachability;
mod setup;

pub use barrier::{Barrier, BarrierOverlay, BarrierSet, BarrierView, Orientation};
pub use board::{Board, BoardSnapshot, IllegalMove, MoveOutcome, OccupiedCell, PlayerSnapshot};
pub use grid::{BOARD_SIZE, CELL_COUNT, Cell, Coord, Direction, Grid, LAST_INDEX};
pub use invariants::{InvariantViolation, check_invariants};
pub use player::{
    GoalLine, Player, PlayerCount, PlayerId, WALLS_FOUR_PLAYER, WALLS_TWO_PLAYER,
};
pub use setup::{BoardSetup, PawnSetup};
