//! Error types for move parsing, barrier bookkeeping and board setup.

use thiserror::Error;

use crate::game::{Barrier, Coord, PlayerId};

/// Move text that cannot be parsed into a well-formed move.
///
/// These never reach the legality checks and never touch the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseMoveError {
    /// The move is not 2 or 3 characters long once whitespace is removed.
    #[error("move must be 2 or 3 characters, got {0}")]
    Length(usize),
    /// The first character is not a column letter `a..=i`.
    #[error("column '{0}' is not one of a-i")]
    Column(char),
    /// The second character is not a row digit `1..=9`.
    #[error("row '{0}' is not one of 1-9")]
    Row(char),
    /// The third character is not `v` or `h`.
    #[error("barrier orientation '{0}' must be 'v' or 'h'")]
    Orientation(char),
}

/// Precondition violations when inserting into a barrier set directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BarrierError {
    /// The designator cell already designates a barrier.
    #[error("{0} already designates a barrier")]
    AlreadyDesignated(Coord),
    /// The designator lies in the last row, the last column, or off the board.
    #[error("{0} cannot designate a barrier")]
    OffBoard(Coord),
}

/// A described position that breaks a board invariant.
#[derive(Debug, Error)]
pub enum SetupError {
    /// A pawn references a player that does not exist in this game.
    #[error("player {0} is not part of this game")]
    UnknownPlayer(PlayerId),
    /// A pawn is placed off the board.
    #[error("pawn for player {player} is off the board at {coord}")]
    OutOfBounds {
        /// Player whose pawn is misplaced.
        player: PlayerId,
        /// Offending coordinate.
        coord: Coord,
    },
    /// Two pawns share a cell.
    #[error("more than one pawn on {0}")]
    SharedCell(Coord),
    /// A wall budget above the starting allowance.
    #[error("player {player} cannot hold {walls} walls")]
    TooManyWalls {
        /// Player with the invalid budget.
        player: PlayerId,
        /// Requested budget.
        walls: u8,
    },
    /// A barrier that cannot be inserted.
    #[error(transparent)]
    Barrier(#[from] BarrierError),
    /// A barrier crossing or overlapping an earlier one.
    #[error("barrier {0} overlaps an existing barrier")]
    Intersects(Barrier),
    /// More barriers on the board than the wall budgets leave room for.
    #[error("{barriers} barriers placed with {walls_left} walls left exceeds the walls in play")]
    TooManyBarriers {
        /// Barriers on the board.
        barriers: usize,
        /// Walls the players still hold.
        walls_left: usize,
    },
    /// The barriers leave a player with no route to their goal.
    #[error("player {0} cannot reach their goal")]
    GoalUnreachable(PlayerId),
    /// The setup could not be read.
    #[error("failed to read setup: {0}")]
    Io(#[from] std::io::Error),
    /// The setup is not valid JSON for a board position.
    #[error("invalid setup: {0}")]
    Json(#[from] serde_json::Error),
}
