//! Move notation.
//!
//! Moves are written as a cell, optionally followed by a barrier orientation:
//!
//! - `e8`: move the pawn to column `e`, row `8`
//! - `d4h`: place a horizontal barrier designated by cell `d4`
//!
//! Columns `a..=i` map to `0..=8` and rows `1..=9` to `0..=8`. Parsing is
//! case-insensitive and ignores all whitespace.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseMoveError;
use crate::game::{BOARD_SIZE, Barrier, Coord, Orientation};

/// A well-formed move. Whether it is legal is up to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    /// Move the active player's pawn to a cell.
    Pawn(Coord),
    /// Spend a wall on a barrier.
    Barrier(Barrier),
}

impl Move {
    /// The cell named by the move: the pawn target or the barrier designator.
    #[must_use]
    pub const fn cell(self) -> Coord {
        match self {
            Move::Pawn(target) => target,
            Move::Barrier(barrier) => barrier.designator,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Pawn(target) => write!(f, "{target}"),
            Move::Barrier(barrier) => write!(f, "{barrier}"),
        }
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_move(s)
    }
}

/// Parse move text.
///
/// # Errors
///
/// Returns an error if the text is not 2 or 3 characters after removing
/// whitespace, names a cell off the board, or has an orientation other than
/// `v` or `h`.
pub fn parse_move(text: &str) -> Result<Move, ParseMoveError> {
    let chars: Vec<char> = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    let (col, row, orientation) = match chars.as_slice() {
        [col, row] => (*col, *row, None),
        [col, row, orientation] => (*col, *row, Some(*orientation)),
        other => return Err(ParseMoveError::Length(other.len())),
    };

    let col_index = parse_index(col, 'a').ok_or(ParseMoveError::Column(col))?;
    let row_index = parse_index(row, '1').ok_or(ParseMoveError::Row(row))?;
    let cell = Coord::new(col_index, row_index);

    match orientation {
        None => Ok(Move::Pawn(cell)),
        Some(c) => {
            let orientation = Orientation::from_char(c).ok_or(ParseMoveError::Orientation(c))?;
            Ok(Move::Barrier(Barrier::new(cell, orientation)))
        }
    }
}

/// Offset of `c` from `first`, if it names one of the board's nine lines.
fn parse_index(c: char, first: char) -> Option<u8> {
    let offset = u32::from(c).checked_sub(u32::from(first))?;
    u8::try_from(offset).ok().filter(|&index| index < BOARD_SIZE)
}
