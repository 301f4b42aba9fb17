//! Board invariants - sanity checks that detect bugs.
//!
//! Legal play can never break these. A violation means the legality rules or
//! the move execution are wrong, not that a player did something illegal.

use std::fmt;

use crate::game::{BarrierView, Board};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all board invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(board: &Board) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let mut violation = |message: String| violations.push(InvariantViolation { message });

    // Occupancy and positions agree both ways
    for player in board.players() {
        if !player.position.in_bounds() {
            violation(format!("Player {} is off the board at {:?}", player.id, player.position));
            continue;
        }
        let occupant = board.grid().occupant(player.position);
        if occupant != Some(player.id) {
            violation(format!(
                "Player {} stands on {} but the cell holds {:?}",
                player.id, player.position, occupant
            ));
        }
    }
    for (cell, id) in board.grid().occupied() {
        match board.player(id) {
            Some(player) if player.position == cell => {}
            Some(player) => violation(format!(
                "Cell {cell} holds player {id} who stands on {}",
                player.position
            )),
            None => violation(format!("Cell {cell} holds unknown player {id}")),
        }
    }

    // Barrier geometry
    let barriers = board.barriers();
    for barrier in barriers.iter() {
        if !barrier.fits_on_board() {
            violation(format!("Barrier {barrier:?} extends off the board"));
        }
        if barriers.would_intersect(barrier.designator, barrier.orientation) {
            violation(format!("Barrier {barrier} overlaps a parallel barrier"));
        }
    }

    // Nobody is ever cut off
    for player in board.players() {
        if player.position.in_bounds() && !player.can_reach_goal_on(barriers) {
            violation(format!("Player {} cannot reach their goal", player.id));
        }
    }

    // Wall accounting
    let allowance = board.player_count().walls_per_player();
    let mut walls_left = 0usize;
    for player in board.players() {
        if player.walls > allowance {
            violation(format!(
                "Player {} holds {} walls > allowance {allowance}",
                player.id, player.walls
            ));
        }
        walls_left += usize::from(player.walls);
    }
    let total = usize::from(allowance) * board.players().len();
    if walls_left + barriers.len() > total {
        violation(format!(
            "{} barriers placed with {walls_left} walls left exceeds {total} walls in play",
            barriers.len()
        ));
    }

    // Winner matches the pawns
    let expected = board.players().iter().find(|p| p.has_won()).map(|p| p.id);
    if board.winner() != expected {
        violation(format!(
            "Winner is {:?} but pawns say {expected:?}",
            board.winner()
        ));
    }

    violations
}

/// Assert all board invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(board: &Board) {
    let violations = check_invariants(board);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Board invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_board: &Board) {}
