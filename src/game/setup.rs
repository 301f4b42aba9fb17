//! Arbitrary board positions.
//!
//! A [`BoardSetup`] describes a position as data: who plays, where the pawns
//! stand, which barriers are down. [`BoardSetup::build`] validates it into a
//! [`Board`]. Setups are usually read from JSON:
//!
//! ```json
//! {
//!   "players": 2,
//!   "pawns": [{ "player": 1, "position": { "col": 4, "row": 6 }, "walls": 8 }],
//!   "barriers": [{ "designator": { "col": 3, "row": 7 }, "orientation": "horizontal" }],
//!   "turn": 2
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SetupError;
use crate::game::{Barrier, BarrierSet, BarrierView, Board, Coord, Player, PlayerCount, PlayerId};

/// Placement for one pawn. Pawns left out stay on their starting cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PawnSetup {
    /// Player who owns the pawn.
    pub player: PlayerId,
    /// Cell the pawn stands on.
    pub position: Coord,
    /// Walls remaining. Defaults to the full allowance less this player's
    /// share of the barriers already down.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub walls: Option<u8>,
}

/// A described board position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSetup {
    /// Number of players.
    pub players: PlayerCount,
    /// Pawn placements, overriding the starting cells.
    pub pawns: Vec<PawnSetup>,
    /// Barriers already on the board, placed in order.
    pub barriers: Vec<Barrier>,
    /// Moves already played; decides who is to move.
    pub turn: u32,
}

impl BoardSetup {
    /// Start from the opening position for `players`.
    #[must_use]
    pub fn new(players: PlayerCount) -> Self {
        Self {
            players,
            ..Self::default()
        }
    }

    /// Put a player's pawn on a cell.
    #[must_use]
    pub fn pawn(mut self, player: PlayerId, position: Coord) -> Self {
        self.pawns.push(PawnSetup {
            player,
            position,
            walls: None,
        });
        self
    }

    /// Put a player's pawn on a cell with a given number of walls left.
    #[must_use]
    pub fn pawn_with_walls(mut self, player: PlayerId, position: Coord, walls: u8) -> Self {
        self.pawns.push(PawnSetup {
            player,
            position,
            walls: Some(walls),
        });
        self
    }

    /// Add a barrier.
    #[must_use]
    pub fn barrier(mut self, barrier: Barrier) -> Self {
        self.barriers.push(barrier);
        self
    }

    /// Set the number of moves already played.
    #[must_use]
    pub const fn turn(mut self, turn: u32) -> Self {
        self.turn = turn;
        self
    }

    /// Parse a setup from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a setup.
    pub fn from_json(json: &str) -> Result<Self, SetupError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a setup from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, SetupError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Validate the setup and build the board.
    ///
    /// # Errors
    ///
    /// Returns an error if a pawn is off the board, shares a cell, belongs to
    /// a player not in the game or holds too many walls; if a barrier is
    /// misplaced or overlaps another; if any player is cut off from their
    /// goal; or if the wall budgets leave no room for the barriers listed.
    pub fn build(&self) -> Result<Board, SetupError> {
        let count = self.players;
        let mut players: Vec<Player> = count
            .ids()
            .filter_map(|id| Player::starting(id, count))
            .collect();
        let mut defaulted = vec![true; players.len()];

        for pawn in &self.pawns {
            let player = usize::from(pawn.player)
                .checked_sub(1)
                .and_then(|index| players.get_mut(index))
                .ok_or(SetupError::UnknownPlayer(pawn.player))?;
            if !pawn.position.in_bounds() {
                return Err(SetupError::OutOfBounds {
                    player: pawn.player,
                    coord: pawn.position,
                });
            }
            if let Some(walls) = pawn.walls {
                if walls > count.walls_per_player() {
                    return Err(SetupError::TooManyWalls {
                        player: pawn.player,
                        walls,
                    });
                }
                player.walls = walls;
                defaulted[usize::from(pawn.player) - 1] = false;
            }
            player.position = pawn.position;
        }

        for (i, player) in players.iter().enumerate() {
            if players[..i].iter().any(|other| other.position == player.position) {
                return Err(SetupError::SharedCell(player.position));
            }
        }

        let mut barriers = BarrierSet::new();
        for barrier in &self.barriers {
            if barrier.fits_on_board()
                && barriers.would_intersect(barrier.designator, barrier.orientation)
            {
                return Err(SetupError::Intersects(*barrier));
            }
            barriers.place(*barrier)?;
        }

        if let Some(trapped) = players.iter().find(|p| !p.can_reach_goal_on(&barriers)) {
            return Err(SetupError::GoalUnreachable(trapped.id));
        }

        charge_barriers(&mut players, &defaulted, barriers.len());
        let walls_left: usize = players.iter().map(|p| usize::from(p.walls)).sum();
        let total = usize::from(count.walls_per_player()) * players.len();
        if walls_left + barriers.len() > total {
            return Err(SetupError::TooManyBarriers {
                barriers: barriers.len(),
                walls_left,
            });
        }

        Ok(Board::from_parts(count, players, barriers, self.turn))
    }
}

/// Take one wall per barrier from the players on default budgets, in turn
/// order, as if they had placed them.
fn charge_barriers(players: &mut [Player], defaulted: &[bool], mut barriers: usize) {
    while barriers > 0 {
        let mut charged = false;
        for (player, _) in players.iter_mut().zip(defaulted).filter(|(_, d)| **d) {
            if barriers > 0 && player.spend_wall() {
                barriers -= 1;
                charged = true;
            }
        }
        if !charged {
            break;
        }
    }
}
