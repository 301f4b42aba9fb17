//! Goal reachability search.
//!
//! A* over the grid from a start cell to the nearest of a set of goal cells.
//! Occupancy is ignored: pawns can always move out of the way, barriers can't.
//!
//! Every neighbor is pushed onto the frontier, blocked ones with an infinite
//! cost, so once only infinite entries remain the search can stop and report
//! the goal unreachable. Blocked edges never relax a finite cost.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::game::{BarrierView, CELL_COUNT, Coord};

/// Cost of crossing a blocked segment.
const INF: u16 = u16::MAX;

/// Check if any goal cell can be reached from `start`.
#[must_use]
pub fn can_reach<V: BarrierView + ?Sized>(barriers: &V, start: Coord, goals: &[Coord]) -> bool {
    shortest_path_len(barriers, start, goals).is_some()
}

/// Number of steps on the shortest barrier-respecting path from `start` to
/// any goal cell, or `None` if every goal is cut off.
#[must_use]
pub fn shortest_path_len<V: BarrierView + ?Sized>(
    barriers: &V,
    start: Coord,
    goals: &[Coord],
) -> Option<u8> {
    if !start.in_bounds() || goals.is_empty() {
        return None;
    }

    let mut cost = [INF; CELL_COUNT];
    let mut priority = [INF; CELL_COUNT];
    let mut open = [false; CELL_COUNT];
    let mut closed = [false; CELL_COUNT];
    let mut frontier = BinaryHeap::new();

    cost[start.index()] = 0;
    priority[start.index()] = heuristic(start, goals);
    open[start.index()] = true;
    frontier.push(Reverse((priority[start.index()], start.index())));

    while let Some(Reverse((entry_priority, idx))) = frontier.pop() {
        // Stale entry from before a cheaper path was found
        if closed[idx] || entry_priority != priority[idx] {
            continue;
        }

        // Everything left is behind a barrier
        if entry_priority == INF {
            return None;
        }

        let current = Coord::from_index(idx);
        if goals.contains(&current) {
            return u8::try_from(cost[idx]).ok();
        }

        closed[idx] = true;

        for neighbor in current.adjacent() {
            let n = neighbor.index();
            if closed[n] {
                continue;
            }

            let tentative = if barriers.blocks_movement(current, neighbor) {
                INF
            } else {
                cost[idx] + 1
            };

            if !open[n] {
                open[n] = true;
            } else if tentative >= cost[n] {
                continue;
            }

            cost[n] = tentative;
            priority[n] = if tentative == INF {
                INF
            } else {
                tentative + heuristic(neighbor, goals)
            };
            frontier.push(Reverse((priority[n], n)));
        }
    }

    None
}

/// Manhattan distance to the nearest goal cell.
fn heuristic(cell: Coord, goals: &[Coord]) -> u16 {
    goals
        .iter()
        .map(|goal| u16::from(cell.manhattan_distance(*goal)))
        .min()
        .unwrap_or(INF)
}
