//! Board state and the move legality state machine.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::error::ParseMoveError;
use crate::game::{
    Barrier, BarrierSet, BarrierView, Coord, Direction, GoalLine, Grid, LAST_INDEX, Orientation,
    Player, PlayerCount, PlayerId, invariants, reachability,
};
use crate::notation::{Move, parse_move};

/// Why a well-formed move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "reason", content = "player")]
pub enum IllegalMove {
    /// A player has already won.
    GameOver,
    /// The pawn target is off the board.
    OutOfBounds,
    /// The pawn target is more than two steps away.
    TooFar,
    /// The pawn target holds a pawn, possibly the mover's own.
    Occupied,
    /// A barrier lies between the pawn and an adjacent target.
    Blocked,
    /// A two-step move with no pawn next to the mover to jump.
    NoAdjacentPawn,
    /// A two-step move that does not land next to a neighboring pawn.
    NotAJumpTarget,
    /// A straight jump crossing a barrier.
    JumpBlocked,
    /// A diagonal jump where the straight jump is available or the side step
    /// is walled off.
    DiagonalJumpNotAllowed,
    /// The mover has no walls left.
    NoWallsLeft,
    /// The designator lies in the last row or column.
    OffBoardDesignator,
    /// The designator already holds a barrier.
    AlreadyDesignated,
    /// The barrier would overlap a parallel barrier.
    Intersects,
    /// The barrier would cut the given player off from their goal.
    TrapsPlayer(PlayerId),
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::GameOver => write!(f, "the game is over"),
            IllegalMove::OutOfBounds => write!(f, "target is off the board"),
            IllegalMove::TooFar => write!(f, "target is more than two steps away"),
            IllegalMove::Occupied => write!(f, "target is occupied"),
            IllegalMove::Blocked => write!(f, "a wall is in the way"),
            IllegalMove::NoAdjacentPawn => write!(f, "no adjacent pawn to jump"),
            IllegalMove::NotAJumpTarget => write!(f, "target is not next to an adjacent pawn"),
            IllegalMove::JumpBlocked => write!(f, "a wall blocks the jump"),
            IllegalMove::DiagonalJumpNotAllowed => {
                write!(f, "diagonal jump needs the straight jump to be impossible")
            }
            IllegalMove::NoWallsLeft => write!(f, "no walls left"),
            IllegalMove::OffBoardDesignator => write!(f, "wall would extend off the board"),
            IllegalMove::AlreadyDesignated => write!(f, "a wall is already centered there"),
            IllegalMove::Intersects => write!(f, "wall would overlap another wall"),
            IllegalMove::TrapsPlayer(id) => write!(f, "wall would trap player {id}"),
        }
    }
}

/// Result of submitting a well-formed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveOutcome {
    /// The move was executed.
    Accepted {
        /// Player who moved.
        player: PlayerId,
        /// The executed move.
        mv: Move,
        /// Winner, if this move ended the game.
        winner: Option<PlayerId>,
    },
    /// The move was refused and the board is unchanged.
    Rejected(IllegalMove),
}

impl MoveOutcome {
    /// Check if the move was executed.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }

    /// Why the move was refused, if it was.
    #[must_use]
    pub const fn reason(&self) -> Option<IllegalMove> {
        match self {
            MoveOutcome::Accepted { .. } => None,
            MoveOutcome::Rejected(reason) => Some(*reason),
        }
    }
}

/// A Quoridor board: pawns, barriers, wall budgets and the turn counter.
///
/// Every state change goes through [`Board::apply`] or [`Board::submit_move`],
/// which refuse illegal moves without touching anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    players: Vec<Player>,
    barriers: BarrierSet,
    count: PlayerCount,
    turn: u32,
    winner: Option<PlayerId>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(PlayerCount::default())
    }
}

impl Board {
    /// Create a board with every player on their starting cell.
    #[must_use]
    pub fn new(count: PlayerCount) -> Self {
        let players = count
            .ids()
            .filter_map(|id| Player::starting(id, count))
            .collect();
        Self::from_parts(count, players, BarrierSet::new(), 0)
    }

    /// Assemble a board from already-validated parts.
    ///
    /// `players` must be ordered by id starting at 1.
    pub(crate) fn from_parts(
        count: PlayerCount,
        players: Vec<Player>,
        barriers: BarrierSet,
        turn: u32,
    ) -> Self {
        let mut grid = Grid::new();
        for player in &players {
            grid.occupy(player.position, player.id);
        }
        let winner = players.iter().find(|p| p.has_won()).map(|p| p.id);
        Self {
            grid,
            players,
            barriers,
            count,
            turn,
            winner,
        }
    }

    /// Number of players seated.
    #[must_use]
    pub const fn player_count(&self) -> PlayerCount {
        self.count
    }

    /// All players, ordered by id.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Get a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(usize::from(id).checked_sub(1)?)
    }

    /// Number of moves executed so far.
    #[must_use]
    pub const fn turn(&self) -> u32 {
        self.turn
    }

    /// The player whose move it is.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn active_player(&self) -> PlayerId {
        (self.turn % u32::from(self.count.get())) as PlayerId + 1
    }

    /// Placed barriers.
    #[must_use]
    pub const fn barriers(&self) -> &BarrierSet {
        &self.barriers
    }

    /// Pawn occupancy.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The player whose pawn stands on `coord`.
    #[must_use]
    pub fn player_at(&self, coord: Coord) -> Option<&Player> {
        self.grid.occupant(coord).and_then(|id| self.player(id))
    }

    /// Players whose pawns are orthogonally adjacent to `coord`.
    ///
    /// Barriers are ignored; this is pure occupancy.
    pub fn adjacent_players(&self, coord: Coord) -> impl Iterator<Item = &Player> + '_ {
        coord.adjacent().filter_map(|cell| self.player_at(cell))
    }

    /// The player who reached their goal, if any.
    #[must_use]
    pub const fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Check if the game has ended.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Barrier-respecting steps from a player to their goal.
    #[must_use]
    pub fn distance_to_goal(&self, id: PlayerId) -> Option<u8> {
        let player = self.player(id)?;
        reachability::shortest_path_len(&self.barriers, player.position, &player.goal.cells())
    }

    /// Parse and apply a move for the active player.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is malformed. Illegal moves are not
    /// errors; they come back as [`MoveOutcome::Rejected`].
    pub fn submit_move(&mut self, text: &str) -> Result<MoveOutcome, ParseMoveError> {
        let mv = parse_move(text).inspect_err(|err| {
            debug!(player = self.active_player(), text, %err, "malformed move");
        })?;
        Ok(self.apply(mv))
    }

    /// Apply a move for the active player if it is legal.
    pub fn apply(&mut self, mv: Move) -> MoveOutcome {
        let player = self.active_player();
        match self.check_move(mv) {
            Ok(()) => {
                self.execute(mv);
                debug!(player, %mv, turn = self.turn, "move accepted");
                MoveOutcome::Accepted {
                    player,
                    mv,
                    winner: self.winner,
                }
            }
            Err(reason) => {
                debug!(player, %mv, %reason, "move rejected");
                MoveOutcome::Rejected(reason)
            }
        }
    }

    /// Check if a move is legal for the active player.
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.check_move(mv).is_ok()
    }

    /// Evaluate the legality rules for the active player.
    ///
    /// # Errors
    ///
    /// Returns the first rule the move breaks.
    pub fn check_move(&self, mv: Move) -> Result<(), IllegalMove> {
        if self.winner.is_some() {
            return Err(IllegalMove::GameOver);
        }
        let Some(mover) = self.player(self.active_player()) else {
            return Err(IllegalMove::GameOver);
        };
        match mv {
            Move::Pawn(target) => self.check_pawn(mover.position, target),
            Move::Barrier(barrier) => self.check_barrier(mover.walls, barrier),
        }
    }

    fn check_pawn(&self, from: Coord, target: Coord) -> Result<(), IllegalMove> {
        if !target.in_bounds() {
            return Err(IllegalMove::OutOfBounds);
        }
        let distance = from.manhattan_distance(target);
        if distance > 2 {
            return Err(IllegalMove::TooFar);
        }
        if self.grid.is_occupied(target) {
            return Err(IllegalMove::Occupied);
        }
        if distance == 1 {
            return if self.barriers.blocks_movement(from, target) {
                Err(IllegalMove::Blocked)
            } else {
                Ok(())
            };
        }
        self.check_jump(from, target)
    }

    fn check_jump(&self, from: Coord, target: Coord) -> Result<(), IllegalMove> {
        let neighbors: Vec<Coord> = self.adjacent_players(from).map(|p| p.position).collect();
        if neighbors.is_empty() {
            return Err(IllegalMove::NoAdjacentPawn);
        }
        if !neighbors.iter().any(|q| q.is_adjacent(target)) {
            return Err(IllegalMove::NotAJumpTarget);
        }

        if from.col == target.col || from.row == target.row {
            let mid = Coord::new(
                from.col.midpoint(target.col),
                from.row.midpoint(target.row),
            );
            return if self.barriers.blocks_movement(from, mid)
                || self.barriers.blocks_movement(mid, target)
            {
                Err(IllegalMove::JumpBlocked)
            } else {
                Ok(())
            };
        }

        // Sidestep around a pawn whose straight jump is unavailable. The leg
        // from the mover to that pawn is not checked for barriers.
        let allowed = neighbors
            .iter()
            .filter(|q| q.is_adjacent(target))
            .any(|&q| {
                self.straight_jump_prevented(from, q) && !self.barriers.blocks_movement(q, target)
            });
        if allowed {
            Ok(())
        } else {
            Err(IllegalMove::DiagonalJumpNotAllowed)
        }
    }

    /// Check if jumping straight over the pawn on `over` is impossible: the
    /// landing cell is off the board, occupied, or behind a barrier.
    fn straight_jump_prevented(&self, from: Coord, over: Coord) -> bool {
        let Some(direction) = Direction::between(from, over) else {
            return false;
        };
        match over.neighbor(direction) {
            None => true,
            Some(beyond) => {
                self.grid.is_occupied(beyond) || self.barriers.blocks_movement(over, beyond)
            }
        }
    }

    fn check_barrier(&self, walls: u8, barrier: Barrier) -> Result<(), IllegalMove> {
        if walls == 0 {
            return Err(IllegalMove::NoWallsLeft);
        }
        if !barrier.fits_on_board() {
            return Err(IllegalMove::OffBoardDesignator);
        }
        let Barrier {
            designator,
            orientation,
        } = barrier;
        if self.barriers.is_designated(designator) {
            return Err(IllegalMove::AlreadyDesignated);
        }
        if self.barriers.would_intersect(designator, orientation) {
            return Err(IllegalMove::Intersects);
        }
        for player in &self.players {
            let reachable = player.can_reach_goal(&self.barriers, designator, orientation);
            trace!(player = player.id, %barrier, reachable, "goal reachability");
            if !reachable {
                return Err(IllegalMove::TrapsPlayer(player.id));
            }
        }
        Ok(())
    }

    /// Commit a move already known to be legal.
    fn execute(&mut self, mv: Move) {
        let index = usize::from(self.active_player() - 1);
        match mv {
            Move::Pawn(target) => {
                let from = self.players[index].position;
                self.grid.vacate(from);
                self.grid.occupy(target, self.players[index].id);
                self.players[index].move_to(target);
            }
            Move::Barrier(barrier) => {
                let placed = self.barriers.place(barrier);
                debug_assert!(placed.is_ok(), "legal barrier {barrier} failed to place");
                self.players[index].spend_wall();
            }
        }

        // 2^32 is a multiple of every player count
        self.turn = self.turn.wrapping_add(1);
        self.winner = self.players.iter().find(|p| p.has_won()).map(|p| p.id);
        if let Some(winner) = self.winner {
            info!(winner, turn = self.turn, "player has won the game");
        }

        invariants::assert_invariants(self);
    }

    /// Every legal move for the active player.
    ///
    /// Pawn moves come first in row-major target order, then barriers in
    /// row-major designator order, vertical before horizontal.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let Some(mover) = self.player(self.active_player()) else {
            return Vec::new();
        };
        let from = mover.position;
        let pawn_moves = Coord::all()
            .filter(move |cell| cell.manhattan_distance(from) <= 2)
            .map(Move::Pawn);
        let barrier_moves = (0..LAST_INDEX).flat_map(|row| {
            (0..LAST_INDEX).flat_map(move |col| {
                Orientation::ALL
                    .into_iter()
                    .map(move |o| Move::Barrier(Barrier::new(Coord::new(col, row), o)))
            })
        });
        pawn_moves
            .chain(barrier_moves)
            .filter(|&mv| self.is_legal(mv))
            .collect()
    }

    /// Serializable view of the position.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            turn: self.turn,
            active_player: self.active_player(),
            winner: self.winner,
            players: self
                .players
                .iter()
                .map(|p| PlayerSnapshot {
                    id: p.id,
                    position: p.position,
                    walls: p.walls,
                    goal: p.goal,
                    distance_to_goal: self.distance_to_goal(p.id),
                })
                .collect(),
            occupied: self
                .grid
                .occupied()
                .map(|(cell, player)| OccupiedCell { cell, player })
                .collect(),
            barriers: self.barriers.iter().collect(),
        }
    }
}

impl fmt::Display for Board {
    /// Status block: player positions with walls remaining, then placed walls.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Player Positions and Remaining Walls:")?;
        for player in &self.players {
            writeln!(f, "{player}")?;
        }
        writeln!(f, "Current Walls:")?;
        for barrier in self.barriers.iter() {
            writeln!(f, "{} {}", barrier.designator, barrier.orientation)?;
        }
        Ok(())
    }
}

/// Serializable board state for collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Moves executed so far.
    pub turn: u32,
    /// Player to move.
    pub active_player: PlayerId,
    /// Winner, once the game is over.
    pub winner: Option<PlayerId>,
    /// Per-player state, ordered by id.
    pub players: Vec<PlayerSnapshot>,
    /// Occupied cells in row-major order.
    pub occupied: Vec<OccupiedCell>,
    /// Placed barriers in row-major designator order.
    pub barriers: Vec<Barrier>,
}

/// One player's entry in a [`BoardSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Player id.
    pub id: PlayerId,
    /// Pawn cell.
    pub position: Coord,
    /// Walls remaining.
    pub walls: u8,
    /// Goal edge.
    pub goal: GoalLine,
    /// Shortest barrier-respecting distance to the goal.
    pub distance_to_goal: Option<u8>,
}

/// One occupied cell in a [`BoardSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupiedCell {
    /// The cell.
    pub cell: Coord,
    /// Player standing on it.
    pub player: PlayerId,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(count: PlayerCount, positions: &[(u8, u8)], barriers: &[Barrier]) -> Board {
        let mut set = BarrierSet::new();
        for barrier in barriers {
            set.place(*barrier).unwrap();
        }
        let players = positions
            .iter()
            .zip(1..)
            .map(|(&(col, row), id)| {
                let start = Player::starting(id, count).unwrap();
                Player::new(id, Coord::new(col, row), start.walls, start.goal)
            })
            .collect();
        Board::from_parts(count, players, set, 0)
    }

    fn h(col: u8, row: u8) -> Barrier {
        Barrier::new(Coord::new(col, row), Orientation::Horizontal)
    }

    fn v(col: u8, row: u8) -> Barrier {
        Barrier::new(Coord::new(col, row), Orientation::Vertical)
    }

    fn reason(board: &mut Board, text: &str) -> Option<IllegalMove> {
        board.submit_move(text).unwrap().reason()
    }

    #[test]
    fn test_new_board() {
        let board = Board::new(PlayerCount::Two);
        assert_eq!(board.turn(), 0);
        assert_eq!(board.active_player(), 1);
        assert_eq!(board.player_at(Coord::new(4, 8)).unwrap().id, 1);
        assert_eq!(board.player_at(Coord::new(4, 0)).unwrap().id, 2);
        assert!(board.barriers().is_empty());
        assert_eq!(board.winner(), None);

        let board = Board::new(PlayerCount::Four);
        assert_eq!(board.players().len(), 4);
        assert!(board.players().iter().all(|p| p.walls == 5));
    }

    #[test]
    fn test_own_cell_is_illegal_and_step_forward_is_legal() {
        let mut board = Board::new(PlayerCount::Two);
        assert_eq!(reason(&mut board, "e9"), Some(IllegalMove::Occupied));
        assert_eq!(board.turn(), 0);

        let outcome = board.submit_move("e8").unwrap();
        assert!(outcome.is_accepted());
        assert_eq!(board.player(1).unwrap().position, Coord::new(4, 7));
        assert!(!board.grid().is_occupied(Coord::new(4, 8)));
        assert_eq!(board.turn(), 1);
        assert_eq!(board.active_player(), 2);
    }

    #[test]
    fn test_pawn_moves_on_open_board() {
        let board = Board::new(PlayerCount::Two);
        assert!(board.is_legal("d9".parse().unwrap()));
        assert!(board.is_legal("f9".parse().unwrap()));
        assert_eq!(board.check_move("e7".parse().unwrap()), Err(IllegalMove::NoAdjacentPawn));
        assert_eq!(board.check_move("e6".parse().unwrap()), Err(IllegalMove::TooFar));
        assert_eq!(board.check_move("a1".parse().unwrap()), Err(IllegalMove::TooFar));
        // Diagonal step is distance 2 with nobody to jump
        assert_eq!(board.check_move("d8".parse().unwrap()), Err(IllegalMove::NoAdjacentPawn));
    }

    #[test]
    fn test_jumps_in_four_player_cluster() {
        // Active player 1 at (2,3) with pawns at (3,3) and (2,4)
        let board = board_with(PlayerCount::Four, &[(2, 3), (3, 3), (2, 4), (8, 8)], &[]);
        assert_eq!(board.active_player(), 1);

        // Straight over (3,3)
        assert!(board.is_legal(Move::Pawn(Coord::new(4, 3))));
        // Diagonal while the straight jump over (3,3) is open
        assert_eq!(
            board.check_move(Move::Pawn(Coord::new(3, 2))),
            Err(IllegalMove::DiagonalJumpNotAllowed)
        );
        // Straight over (2,4)
        assert!(board.is_legal(Move::Pawn(Coord::new(2, 5))));
        // "a4" is (0,3): two steps west with nobody in between
        assert_eq!(
            board.check_move("a4".parse().unwrap()),
            Err(IllegalMove::NotAJumpTarget)
        );
        // (3,4) is next to both neighbors but both straight jumps are open
        assert_eq!(
            board.check_move(Move::Pawn(Coord::new(3, 4))),
            Err(IllegalMove::DiagonalJumpNotAllowed)
        );
    }

    #[test]
    fn test_reference_jump_cases() {
        // Player 1 at (2,3), player 2 at (3,3)
        let board = board_with(PlayerCount::Two, &[(2, 3), (3, 3)], &[]);
        assert!(board.is_legal("e4".parse().unwrap()));
        assert_eq!(
            board.check_move("d3".parse().unwrap()),
            Err(IllegalMove::DiagonalJumpNotAllowed)
        );
        assert_eq!(
            board.check_move("a4".parse().unwrap()),
            Err(IllegalMove::NotAJumpTarget)
        );
        assert!(board.is_legal("c3".parse().unwrap()));
        assert!(board.is_legal("c5".parse().unwrap()));
    }

    #[test]
    fn test_straight_jump_blocked_by_barrier() {
        let board = board_with(PlayerCount::Two, &[(4, 5), (4, 4)], &[h(4, 3)]);
        // Barrier under row 3 at columns 4-5 blocks landing on (4,3)
        assert_eq!(
            board.check_move(Move::Pawn(Coord::new(4, 3))),
            Err(IllegalMove::JumpBlocked)
        );

        let board = board_with(PlayerCount::Two, &[(4, 5), (4, 4)], &[h(4, 4)]);
        // Barrier between the mover and the jumped pawn
        assert_eq!(
            board.check_move(Move::Pawn(Coord::new(4, 3))),
            Err(IllegalMove::JumpBlocked)
        );
    }

    #[test]
    fn test_diagonal_jump_when_straight_is_walled() {
        let board = board_with(PlayerCount::Two, &[(4, 5), (4, 4)], &[h(3, 3)]);
        assert_eq!(
            board.check_move(Move::Pawn(Coord::new(4, 3))),
            Err(IllegalMove::JumpBlocked)
        );
        assert!(board.is_legal(Move::Pawn(Coord::new(3, 4))));
        assert!(board.is_legal(Move::Pawn(Coord::new(5, 4))));
    }

    #[test]
    fn test_diagonal_jump_at_board_edge() {
        // Player 2 against the top edge: nothing beyond
        let board = board_with(PlayerCount::Two, &[(4, 1), (4, 0)], &[]);
        assert!(board.is_legal(Move::Pawn(Coord::new(3, 0))));
        assert!(board.is_legal(Move::Pawn(Coord::new(5, 0))));
    }

    #[test]
    fn test_diagonal_jump_when_beyond_is_occupied() {
        let board = board_with(
            PlayerCount::Four,
            &[(4, 6), (4, 5), (4, 4), (8, 8)],
            &[],
        );
        assert!(board.is_legal(Move::Pawn(Coord::new(3, 5))));
        assert!(board.is_legal(Move::Pawn(Coord::new(5, 5))));
    }

    #[test]
    fn test_diagonal_jump_side_step_walled() {
        // Straight jump walled, and the east side step from (4,4) to (5,4) too
        let board = board_with(PlayerCount::Two, &[(4, 5), (4, 4)], &[h(3, 3), v(4, 3)]);
        assert_eq!(
            board.check_move(Move::Pawn(Coord::new(5, 4))),
            Err(IllegalMove::DiagonalJumpNotAllowed)
        );
        assert!(board.is_legal(Move::Pawn(Coord::new(3, 4))));
    }

    #[test]
    fn test_diagonal_jump_ignores_barrier_before_jumped_pawn() {
        // Barrier between mover (4,5) and the pawn at (4,4). The straight jump is
        // prevented by the top barrier, and the leg to the jumped pawn is not
        // re-checked, so the diagonal is allowed.
        let board = board_with(PlayerCount::Two, &[(4, 5), (4, 4)], &[h(3, 3), h(4, 4)]);
        assert!(board.is_legal(Move::Pawn(Coord::new(3, 4))));
    }

    #[test]
    fn test_barrier_blocks_step() {
        // Horizontal barrier at (3,7) spans columns 3-4 above row 8
        let mut board = board_with(PlayerCount::Two, &[(4, 8), (4, 0)], &[h(3, 7)]);
        assert_eq!(reason(&mut board, "e8"), Some(IllegalMove::Blocked));
        assert!(board.is_legal("f9".parse().unwrap()));
        assert!(board.is_legal("d9".parse().unwrap()));
    }

    #[test]
    fn test_place_barrier() {
        let mut board = Board::new(PlayerCount::Two);
        let outcome = board.submit_move("d8h").unwrap();
        assert!(outcome.is_accepted());
        assert_eq!(board.player(1).unwrap().walls, 9);
        assert_eq!(board.barriers().orientation_at(Coord::new(3, 7)), Some(Orientation::Horizontal));
        assert_eq!(board.active_player(), 2);
    }

    #[test]
    fn test_barrier_rules() {
        let mut board = Board::new(PlayerCount::Two);
        assert!(board.submit_move("b5v").unwrap().is_accepted());

        // Player 2 now
        assert_eq!(reason(&mut board, "b5h"), Some(IllegalMove::AlreadyDesignated));
        assert_eq!(reason(&mut board, "b4v"), Some(IllegalMove::Intersects));
        assert_eq!(reason(&mut board, "b6v"), Some(IllegalMove::Intersects));
        assert_eq!(reason(&mut board, "i5h"), Some(IllegalMove::OffBoardDesignator));
        assert_eq!(reason(&mut board, "b9v"), Some(IllegalMove::OffBoardDesignator));
        assert!(board.submit_move("b7v").unwrap().is_accepted());
        assert!(board.submit_move("c5h").unwrap().is_accepted());
        assert!(board.submit_move("a4h").unwrap().is_accepted());
    }

    #[test]
    fn test_no_walls_left() {
        let players = vec![
            Player::new(1, Coord::new(4, 8), 0, GoalLine::Row(0)),
            Player::new(2, Coord::new(4, 0), 10, GoalLine::Row(8)),
        ];
        let mut board = Board::from_parts(PlayerCount::Two, players, BarrierSet::new(), 0);
        assert_eq!(reason(&mut board, "a1h"), Some(IllegalMove::NoWallsLeft));
        // Budget is checked before the designator
        assert_eq!(reason(&mut board, "i9h"), Some(IllegalMove::NoWallsLeft));
    }

    #[test]
    fn test_barrier_that_traps_is_rejected() {
        let mut board = Board::new(PlayerCount::Two);
        assert!(board.submit_move("d8v").unwrap().is_accepted());
        assert!(board.submit_move("e2").unwrap().is_accepted());
        assert!(board.submit_move("e8h").unwrap().is_accepted());
        assert!(board.submit_move("e3").unwrap().is_accepted());

        let before = board.clone();
        assert_eq!(reason(&mut board, "f8v"), Some(IllegalMove::TrapsPlayer(1)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_barrier_that_traps_opponent_is_rejected() {
        // Player 2 boxed into (4,0)-(5,0) once f1v closes the east side
        let mut board = board_with(PlayerCount::Two, &[(4, 8), (4, 0)], &[v(3, 0), h(4, 0)]);
        let before = board.clone();
        assert_eq!(reason(&mut board, "f1v"), Some(IllegalMove::TrapsPlayer(2)));
        assert_eq!(board, before);
        assert!(board.is_legal("f2v".parse().unwrap()));
    }

    #[test]
    fn test_barrier_that_traps_third_player_is_rejected() {
        // Player 3 boxed into (0,4)-(0,5) once a6h closes the south side
        let mut board = board_with(
            PlayerCount::Four,
            &[(4, 8), (4, 0), (0, 4), (8, 4)],
            &[h(0, 3), v(0, 4)],
        );
        assert_eq!(board.active_player(), 1);
        assert_eq!(reason(&mut board, "a6h"), Some(IllegalMove::TrapsPlayer(3)));
        assert!(board.barriers().iter().all(|b| b.designator != Coord::new(0, 5)));
    }

    #[test]
    fn test_rejections_leave_board_unchanged() {
        let mut board = Board::new(PlayerCount::Two);
        let before = board.clone();
        assert!(board.submit_move("zz").is_err());
        assert!(board.submit_move("e9x").is_err());
        assert!(!board.submit_move("e5").unwrap().is_accepted());
        assert!(!board.submit_move("i9h").unwrap().is_accepted());
        assert_eq!(board, before);
    }

    #[test]
    fn test_win_ends_game() {
        let mut board = board_with(PlayerCount::Two, &[(0, 1), (8, 0)], &[]);
        let outcome = board.submit_move("a1").unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Accepted {
                player: 1,
                mv: Move::Pawn(Coord::new(0, 0)),
                winner: Some(1),
            }
        );
        assert!(board.is_game_over());
        assert_eq!(board.turn(), 1);

        let before = board.clone();
        assert_eq!(reason(&mut board, "i2"), Some(IllegalMove::GameOver));
        assert_eq!(board, before);
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn test_active_player_rotates() {
        let mut board = Board::new(PlayerCount::Four);
        let order: Vec<_> = ["e8", "e2", "b5", "h5", "e7"]
            .iter()
            .map(|text| {
                let mover = board.active_player();
                assert!(board.submit_move(text).unwrap().is_accepted());
                mover
            })
            .collect();
        assert_eq!(order, vec![1, 2, 3, 4, 1]);
    }

    #[test]
    fn test_adjacent_players() {
        let board = board_with(PlayerCount::Four, &[(2, 3), (3, 3), (2, 4), (8, 8)], &[]);
        let mut ids: Vec<_> = board.adjacent_players(Coord::new(2, 3)).map(|p| p.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(board.adjacent_players(Coord::new(6, 6)).count(), 0);
    }

    #[test]
    fn test_legal_moves_opening() {
        let board = Board::new(PlayerCount::Two);
        let moves = board.legal_moves();
        let pawn: Vec<_> = moves
            .iter()
            .filter_map(|mv| match mv {
                Move::Pawn(c) => Some(*c),
                Move::Barrier(_) => None,
            })
            .collect();
        assert_eq!(pawn, vec![Coord::new(4, 7), Coord::new(3, 8), Coord::new(5, 8)]);
        // Every one of the 128 barriers fits on an empty board
        assert_eq!(moves.len() - pawn.len(), 128);
    }

    #[test]
    fn test_distance_to_goal() {
        let board = board_with(PlayerCount::Two, &[(4, 8), (4, 0)], &[h(3, 7)]);
        assert_eq!(board.distance_to_goal(1), Some(9));
        // Column 4 is walled at the last step, so player 2 detours as well
        assert_eq!(board.distance_to_goal(2), Some(9));
        assert_eq!(board.distance_to_goal(3), None);
    }

    #[test]
    fn test_snapshot() {
        let mut board = Board::new(PlayerCount::Two);
        board.submit_move("d8h").unwrap();
        let snapshot = board.snapshot();
        assert_eq!(snapshot.turn, 1);
        assert_eq!(snapshot.active_player, 2);
        assert_eq!(snapshot.barriers, vec![h(3, 7)]);
        assert_eq!(snapshot.players[0].walls, 9);
        assert_eq!(snapshot.players[0].distance_to_goal, Some(9));
        assert_eq!(
            snapshot.occupied,
            vec![
                OccupiedCell { cell: Coord::new(4, 0), player: 2 },
                OccupiedCell { cell: Coord::new(4, 8), player: 1 },
            ]
        );
    }

    #[test]
    fn test_status_text() {
        let mut board = Board::new(PlayerCount::Two);
        board.submit_move("d8h").unwrap();
        let status = board.to_string();
        assert!(status.starts_with("Player Positions and Remaining Walls:\n"));
        assert!(status.contains("Player 1: at e9, 9 walls remaining\n"));
        assert!(status.contains("Player 2: at e1, 10 walls remaining\n"));
        assert!(status.ends_with("Current Walls:\nd8 h\n"));
    }
}
