//! Player state management.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::{
    BOARD_SIZE, Barrier, BarrierSet, BarrierView, Coord, LAST_INDEX, Orientation, reachability,
};

/// Unique identifier for a player, `1..=4`.
pub type PlayerId = u8;

/// Wall allowance per player in a two-player game.
pub const WALLS_TWO_PLAYER: u8 = 10;

/// Wall allowance per player in a four-player game.
pub const WALLS_FOUR_PLAYER: u8 = 5;

/// Supported player counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PlayerCount {
    /// Players 1 and 2, facing each other across the rows.
    #[default]
    Two,
    /// Players 1 to 4, one per edge.
    Four,
}

impl PlayerCount {
    /// Number of players.
    #[must_use]
    pub const fn get(self) -> u8 {
        match self {
            PlayerCount::Two => 2,
            PlayerCount::Four => 4,
        }
    }

    /// Starting wall allowance for each player.
    #[must_use]
    pub const fn walls_per_player(self) -> u8 {
        match self {
            PlayerCount::Two => WALLS_TWO_PLAYER,
            PlayerCount::Four => WALLS_FOUR_PLAYER,
        }
    }

    /// Identifiers of every player in the game, in turn order.
    pub fn ids(self) -> impl Iterator<Item = PlayerId> {
        1..=self.get()
    }
}

impl TryFrom<u8> for PlayerCount {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(PlayerCount::Two),
            4 => Ok(PlayerCount::Four),
            other => Err(format!("games are played by 2 or 4 players, not {other}")),
        }
    }
}

impl From<PlayerCount> for u8 {
    fn from(count: PlayerCount) -> Self {
        count.get()
    }
}

/// The edge a player is racing towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalLine {
    /// Every cell of the given row.
    Row(u8),
    /// Every cell of the given column.
    Column(u8),
}

impl GoalLine {
    /// Check if a cell belongs to the goal set.
    #[must_use]
    pub const fn contains(self, coord: Coord) -> bool {
        match self {
            GoalLine::Row(row) => coord.row == row,
            GoalLine::Column(col) => coord.col == col,
        }
    }

    /// Every cell in the goal set.
    #[must_use]
    pub fn cells(self) -> [Coord; BOARD_SIZE as usize] {
        let mut cells = [Coord::new(0, 0); BOARD_SIZE as usize];
        for (i, cell) in (0..BOARD_SIZE).zip(cells.iter_mut()) {
            *cell = match self {
                GoalLine::Row(row) => Coord::new(i, row),
                GoalLine::Column(col) => Coord::new(col, i),
            };
        }
        cells
    }
}

/// State for a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique identifier for this player.
    pub id: PlayerId,
    /// Cell the player's pawn stands on.
    pub position: Coord,
    /// Barriers the player may still place.
    pub walls: u8,
    /// Cells that win the game for this player.
    pub goal: GoalLine,
}

impl Player {
    /// Create a player at an arbitrary position.
    #[must_use]
    pub const fn new(id: PlayerId, position: Coord, walls: u8, goal: GoalLine) -> Self {
        Self {
            id,
            position,
            walls,
            goal,
        }
    }

    /// Create a player at their starting cell with the full wall allowance.
    ///
    /// Returns `None` if `id` is not a seat in a game of `count` players.
    #[must_use]
    pub const fn starting(id: PlayerId, count: PlayerCount) -> Option<Self> {
        if id == 0 || id > count.get() {
            return None;
        }
        let middle = BOARD_SIZE / 2;
        let (position, goal) = match id {
            1 => (Coord::new(middle, LAST_INDEX), GoalLine::Row(0)),
            2 => (Coord::new(middle, 0), GoalLine::Row(LAST_INDEX)),
            3 => (Coord::new(0, middle), GoalLine::Column(LAST_INDEX)),
            _ => (Coord::new(LAST_INDEX, middle), GoalLine::Column(0)),
        };
        Some(Self::new(id, position, count.walls_per_player(), goal))
    }

    /// Check if the player stands in their goal set.
    #[must_use]
    pub const fn has_won(&self) -> bool {
        self.goal.contains(self.position)
    }

    /// Check if the player could still reach their goal after a barrier is
    /// added at `designator`.
    ///
    /// The live set is left untouched; the candidate is only overlaid for the
    /// duration of the search.
    #[must_use]
    pub fn can_reach_goal(
        &self,
        barriers: &BarrierSet,
        designator: Coord,
        orientation: Orientation,
    ) -> bool {
        let overlay = barriers.with_candidate(Barrier::new(designator, orientation));
        self.can_reach_goal_on(&overlay)
    }

    /// Check if the player has a route to their goal through the given barriers.
    #[must_use]
    pub fn can_reach_goal_on<V: BarrierView + ?Sized>(&self, barriers: &V) -> bool {
        reachability::can_reach(barriers, self.position, &self.goal.cells())
    }

    /// Use up one wall.
    ///
    /// Returns `false`, leaving the budget at zero, if none were left.
    pub fn spend_wall(&mut self) -> bool {
        match self.walls.checked_sub(1) {
            Some(walls) => {
                self.walls = walls;
                true
            }
            None => false,
        }
    }

    /// Move the pawn.
    ///
    /// Occupancy is the board's business; this only updates the record.
    pub(crate) fn move_to(&mut self, position: Coord) {
        self.position = position;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player {}: at {}, {} walls remaining",
            self.id, self.position, self.walls
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_positions() {
        let p1 = Player::starting(1, PlayerCount::Two).unwrap();
        assert_eq!(p1.position, Coord::new(4, 8));
        assert_eq!(p1.walls, 10);
        assert_eq!(p1.goal, GoalLine::Row(0));

        let p2 = Player::starting(2, PlayerCount::Two).unwrap();
        assert_eq!(p2.position, Coord::new(4, 0));
        assert_eq!(p2.goal, GoalLine::Row(8));

        let p3 = Player::starting(3, PlayerCount::Four).unwrap();
        assert_eq!(p3.position, Coord::new(0, 4));
        assert_eq!(p3.walls, 5);
        assert_eq!(p3.goal, GoalLine::Column(8));

        let p4 = Player::starting(4, PlayerCount::Four).unwrap();
        assert_eq!(p4.position, Coord::new(8, 4));
        assert_eq!(p4.goal, GoalLine::Column(0));
    }

    #[test]
    fn test_invalid_seats() {
        assert!(Player::starting(0, PlayerCount::Four).is_none());
        assert!(Player::starting(3, PlayerCount::Two).is_none());
        assert!(Player::starting(5, PlayerCount::Four).is_none());
    }

    #[test]
    fn test_player_count_conversions() {
        assert_eq!(PlayerCount::try_from(2), Ok(PlayerCount::Two));
        assert_eq!(PlayerCount::try_from(4), Ok(PlayerCount::Four));
        assert!(PlayerCount::try_from(3).is_err());
        assert_eq!(PlayerCount::Four.ids().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_goal_cells() {
        let row = GoalLine::Row(0).cells();
        assert_eq!(row[0], Coord::new(0, 0));
        assert_eq!(row[8], Coord::new(8, 0));
        assert!(row.iter().all(|c| GoalLine::Row(0).contains(*c)));

        let col = GoalLine::Column(8).cells();
        assert_eq!(col[3], Coord::new(8, 3));
        assert!(!GoalLine::Column(8).contains(Coord::new(7, 3)));
    }

    #[test]
    fn test_has_won() {
        let mut player = Player::starting(1, PlayerCount::Two).unwrap();
        assert!(!player.has_won());

        player.move_to(Coord::new(2, 0));
        assert!(player.has_won());
    }

    #[test]
    fn test_spend_wall() {
        let mut player = Player::new(1, Coord::new(4, 8), 1, GoalLine::Row(0));
        assert!(player.spend_wall());
        assert_eq!(player.walls, 0);
        assert!(!player.spend_wall());
        assert_eq!(player.walls, 0);
    }

    #[test]
    fn test_can_reach_goal_open_board() {
        let barriers = BarrierSet::new();
        let p1 = Player::starting(1, PlayerCount::Two).unwrap();
        let p2 = Player::starting(2, PlayerCount::Two).unwrap();

        for orientation in Orientation::ALL {
            assert!(p1.can_reach_goal(&barriers, Coord::new(3, 7), orientation));
            assert!(p2.can_reach_goal(&barriers, Coord::new(3, 7), orientation));
        }
    }

    #[test]
    fn test_can_reach_goal_detects_trap() {
        let mut barriers = BarrierSet::new();
        barriers
            .place(Barrier::new(Coord::new(3, 7), Orientation::Vertical))
            .unwrap();
        let p1 = Player::starting(1, PlayerCount::Two).unwrap();
        let p2 = Player::starting(2, PlayerCount::Two).unwrap();
        assert!(p1.can_reach_goal(&barriers, Coord::new(4, 7), Orientation::Horizontal));

        barriers
            .place(Barrier::new(Coord::new(4, 7), Orientation::Horizontal))
            .unwrap();

        // Closing the east side boxes player 1 into (4,8)-(5,8)
        assert!(!p1.can_reach_goal(&barriers, Coord::new(5, 7), Orientation::Vertical));
        assert!(p2.can_reach_goal(&barriers, Coord::new(5, 7), Orientation::Vertical));
        // The live set never saw the candidate
        assert!(!barriers.is_designated(Coord::new(5, 7)));
    }
}
