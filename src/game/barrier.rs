//! Barrier bookkeeping and the movement predicates built on it.
//!
//! A barrier is identified by its designator cell, the cell immediately
//! north-west of the barrier's midpoint, and an orientation. It spans two
//! segments:
//!
//! ```text
//!   vertical at D          horizontal at D
//!
//!   D | E                  D   E
//!     |                   -------
//!   S | SE                 S   SE
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BarrierError;
use crate::game::{CELL_COUNT, Coord, Direction, LAST_INDEX};

/// Orientation of a barrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Blocks east-west movement.
    Vertical,
    /// Blocks north-south movement.
    Horizontal,
}

impl Orientation {
    /// Both orientations.
    pub const ALL: [Orientation; 2] = [Orientation::Vertical, Orientation::Horizontal];

    /// Notation character: `v` or `h`.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Orientation::Vertical => 'v',
            Orientation::Horizontal => 'h',
        }
    }

    /// Parse a notation character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'v' => Some(Orientation::Vertical),
            'h' => Some(Orientation::Horizontal),
            _ => None,
        }
    }

    /// The orientation that blocks a step in `direction`.
    #[must_use]
    pub const fn blocking(direction: Direction) -> Self {
        if direction.is_vertical() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A barrier placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Barrier {
    /// Cell north-west of the barrier's midpoint.
    pub designator: Coord,
    /// Which way the barrier runs.
    pub orientation: Orientation,
}

impl Barrier {
    /// Create a new barrier.
    #[must_use]
    pub const fn new(designator: Coord, orientation: Orientation) -> Self {
        Self {
            designator,
            orientation,
        }
    }

    /// Check if the designator leaves room for both segments on the board.
    #[must_use]
    pub const fn fits_on_board(&self) -> bool {
        self.designator.col < LAST_INDEX && self.designator.row < LAST_INDEX
    }
}

impl fmt::Display for Barrier {
    /// Formats the barrier in move notation, e.g. `d8h`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.designator, self.orientation)
    }
}

/// Read access to a set of barriers.
///
/// Implemented by the live [`BarrierSet`] and by [`BarrierOverlay`], so the
/// reachability search can run against a hypothetical placement without
/// copying the board.
pub trait BarrierView {
    /// Orientation of the barrier designated by `cell`, if any.
    fn orientation_at(&self, cell: Coord) -> Option<Orientation>;

    /// Check if `cell` already designates a barrier.
    fn is_designated(&self, cell: Coord) -> bool {
        self.orientation_at(cell).is_some()
    }

    /// Check if a barrier at `cell` would overlap a parallel neighbor.
    ///
    /// A vertical candidate collides with a vertical barrier designated directly
    /// north or south of it; a horizontal candidate with a horizontal barrier
    /// directly east or west. Crossing at the same midpoint is caught by
    /// [`BarrierView::is_designated`].
    fn would_intersect(&self, cell: Coord, orientation: Orientation) -> bool {
        let (first, second) = match orientation {
            Orientation::Vertical => (Direction::North, Direction::South),
            Orientation::Horizontal => (Direction::East, Direction::West),
        };
        [cell.neighbor(first), cell.neighbor(second)]
            .into_iter()
            .flatten()
            .any(|other| self.orientation_at(other) == Some(orientation))
    }

    /// Check if a barrier lies on the segment between two adjacent cells.
    ///
    /// Non-adjacent cells are never blocked.
    fn blocks_movement(&self, from: Coord, to: Coord) -> bool {
        let Some(direction) = Direction::between(from, to) else {
            return false;
        };
        // The two designators whose barriers can cover this segment.
        let (first, second) = match direction {
            Direction::North | Direction::East => {
                (to.neighbor(Direction::West), from.neighbor(Direction::North))
            }
            Direction::South | Direction::West => {
                (from.neighbor(Direction::West), to.neighbor(Direction::North))
            }
        };
        let blocking = Orientation::blocking(direction);
        [first, second]
            .into_iter()
            .flatten()
            .any(|designator| self.orientation_at(designator) == Some(blocking))
    }
}

/// Every barrier placed so far, keyed by designator cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarrierSet {
    slots: [Option<Orientation>; CELL_COUNT],
    count: u8,
}

impl Default for BarrierSet {
    fn default() -> Self {
        Self::new()
    }
}

impl BarrierSet {
    /// Create an empty barrier set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [None; CELL_COUNT],
            count: 0,
        }
    }

    /// Number of barriers placed.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count as usize
    }

    /// Check if no barrier has been placed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Insert a barrier.
    ///
    /// Only the designator bookkeeping is checked here; intersection and
    /// reachability are the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns an error if the designator cannot hold a barrier or already
    /// designates one.
    pub fn place(&mut self, barrier: Barrier) -> Result<(), BarrierError> {
        if !barrier.fits_on_board() {
            return Err(BarrierError::OffBoard(barrier.designator));
        }
        let slot = &mut self.slots[barrier.designator.index()];
        if slot.is_some() {
            return Err(BarrierError::AlreadyDesignated(barrier.designator));
        }
        *slot = Some(barrier.orientation);
        self.count += 1;
        Ok(())
    }

    /// Iterate over placed barriers in row-major designator order.
    pub fn iter(&self) -> impl Iterator<Item = Barrier> + '_ {
        self.slots.iter().enumerate().filter_map(|(idx, slot)| {
            slot.map(|orientation| Barrier::new(Coord::from_index(idx), orientation))
        })
    }

    /// View of this set with one extra, uncommitted barrier.
    #[must_use]
    pub const fn with_candidate(&self, candidate: Barrier) -> BarrierOverlay<'_> {
        BarrierOverlay {
            base: self,
            candidate,
        }
    }
}

impl BarrierView for BarrierSet {
    fn orientation_at(&self, cell: Coord) -> Option<Orientation> {
        if cell.in_bounds() {
            self.slots[cell.index()]
        } else {
            None
        }
    }
}

/// A live barrier set plus one hypothetical barrier.
#[derive(Debug, Clone, Copy)]
pub struct BarrierOverlay<'a> {
    base: &'a BarrierSet,
    candidate: Barrier,
}

impl BarrierOverlay<'_> {
    /// The hypothetical barrier.
    #[must_use]
    pub const fn candidate(&self) -> Barrier {
        self.candidate
    }
}

impl BarrierView for BarrierOverlay<'_> {
    fn orientation_at(&self, cell: Coord) -> Option<Orientation> {
        if cell == self.candidate.designator {
            Some(self.candidate.orientation)
        } else {
            self.base.orientation_at(cell)
        }
    }
}
