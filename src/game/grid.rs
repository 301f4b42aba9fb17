//! Coordinates, directions and the occupancy grid.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::PlayerId;

/// Number of cells along each edge of the board.
pub const BOARD_SIZE: u8 = 9;

/// Highest column or row index on the board.
pub const LAST_INDEX: u8 = BOARD_SIZE - 1;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

/// A cell position on the board.
///
/// Row 0 is the top edge (player 2's starting row); column 0 is the left edge.
/// In move notation columns are the letters `a..=i` and rows the digits `1..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Column, `0..BOARD_SIZE`.
    pub col: u8,
    /// Row, `0..BOARD_SIZE`.
    pub row: u8,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// Create a coordinate, returning `None` if it lies off the board.
    #[must_use]
    pub const fn checked(col: u8, row: u8) -> Option<Self> {
        let coord = Self::new(col, row);
        if coord.in_bounds() { Some(coord) } else { None }
    }

    /// Check if this coordinate lies on the board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.col < BOARD_SIZE && self.row < BOARD_SIZE
    }

    /// Row-major index of this cell. Only meaningful for in-bounds coordinates.
    #[must_use]
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// Inverse of [`Coord::index`].
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn from_index(index: usize) -> Self {
        let size = BOARD_SIZE as usize;
        Self::new((index % size) as u8, (index / size) as u8)
    }

    /// Iterate over every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..CELL_COUNT).map(Self::from_index)
    }

    /// The neighboring cell in the given direction, or `None` past the board edge.
    #[must_use]
    pub fn neighbor(self, direction: Direction) -> Option<Coord> {
        if !self.in_bounds() {
            return None;
        }
        match direction {
            Direction::North => self.row.checked_sub(1).map(|row| Coord::new(self.col, row)),
            Direction::East => Coord::checked(self.col + 1, self.row),
            Direction::South => Coord::checked(self.col, self.row + 1),
            Direction::West => self.col.checked_sub(1).map(|col| Coord::new(col, self.row)),
        }
    }

    /// The four orthogonal neighbors: `[north, east, south, west]`.
    ///
    /// Entries are `None` at the board edges.
    #[must_use]
    pub fn neighbors(self) -> [Option<Coord>; 4] {
        Direction::ALL.map(|direction| self.neighbor(direction))
    }

    /// Iterate over the neighbors that exist.
    pub fn adjacent(self) -> impl Iterator<Item = Coord> {
        self.neighbors().into_iter().flatten()
    }

    /// Manhattan distance between two cells.
    #[must_use]
    pub const fn manhattan_distance(self, other: Coord) -> u8 {
        self.col.abs_diff(other.col) + self.row.abs_diff(other.row)
    }

    /// Check if two cells share an edge.
    #[must_use]
    pub const fn is_adjacent(self, other: Coord) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl fmt::Display for Coord {
    /// Formats the cell in move notation, e.g. `e9` for `(4, 8)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.in_bounds() {
            write!(f, "{}{}", char::from(b'a' + self.col), char::from(b'1' + self.row))
        } else {
            write!(f, "({}, {})", self.col, self.row)
        }
    }
}

/// One of the four orthogonal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0.
    North,
    /// Towards the last column.
    East,
    /// Towards the last row.
    South,
    /// Towards column 0.
    West,
}

impl Direction {
    /// All directions, in neighbor-array order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Direction of `to` as seen from `from`, if the two cells are adjacent.
    #[must_use]
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        if !from.is_adjacent(to) {
            return None;
        }
        Direction::ALL
            .into_iter()
            .find(|&direction| from.neighbor(direction) == Some(to))
    }

    /// Check if moving this way changes the row.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }
}

/// A single grid position and whatever currently stands on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    /// Player whose pawn occupies this cell.
    pub occupant: Option<PlayerId>,
}

impl Cell {
    /// Check if a pawn stands on this cell.
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }
}

/// The fixed 9×9 grid of cells.
///
/// Cells are stored in row-major order and addressed only by coordinate;
/// adjacency is derived from coordinates and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: vec![Cell::default(); CELL_COUNT],
        }
    }

    /// Get the cell at the given coordinate.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        if coord.in_bounds() {
            self.cells.get(coord.index())
        } else {
            None
        }
    }

    /// Player standing on the given cell, if any.
    #[must_use]
    pub fn occupant(&self, coord: Coord) -> Option<PlayerId> {
        self.get(coord).and_then(|cell| cell.occupant)
    }

    /// Check if the given cell is occupied. Off-board cells are never occupied.
    #[must_use]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.occupant(coord).is_some()
    }

    /// Put a player's pawn on a cell.
    ///
    /// Returns `false` if the coordinate is out of bounds.
    pub(crate) fn occupy(&mut self, coord: Coord, player: PlayerId) -> bool {
        self.set_occupant(coord, Some(player))
    }

    /// Clear a cell.
    pub(crate) fn vacate(&mut self, coord: Coord) -> bool {
        self.set_occupant(coord, None)
    }

    fn set_occupant(&mut self, coord: Coord, occupant: Option<PlayerId>) -> bool {
        if !coord.in_bounds() {
            return false;
        }
        match self.cells.get_mut(coord.index()) {
            Some(cell) => {
                cell.occupant = occupant;
                true
            }
            None => false,
        }
    }

    /// Iterate over all coordinates and cells.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| (Coord::from_index(idx), cell))
    }

    /// Iterate over occupied cells and their occupants.
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, PlayerId)> + '_ {
        self.iter()
            .filter_map(|(coord, cell)| cell.occupant.map(|player| (coord, player)))
    }
}
