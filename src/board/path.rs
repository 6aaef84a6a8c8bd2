//! Path finding over empty cells.
//!
//! Balls travel orthogonally (no diagonals) through empty cells only.
//! Reachability is a breadth-first search bounded by the board, so the
//! worst case visits every cell once.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use super::grid::Board;
use crate::core::Position;

impl Board {
    /// Check whether a ball at `from` can travel to `to`.
    ///
    /// Returns false immediately if `to` is occupied or off the board. The
    /// cell at `from` is the search start and never blocks itself.
    #[must_use]
    pub fn has_path(&self, from: Position, to: Position) -> bool {
        if !self.contains(to) || self.is_occupied(to) {
            return false;
        }
        if from == to {
            return true;
        }

        let mut visited = FxHashSet::default();
        let mut queue = VecDeque::new();
        visited.insert(from);
        queue.push_back(from);

        while let Some(current) = queue.pop_front() {
            for next in current.neighbors(self.width(), self.height()) {
                if next == to {
                    return true;
                }
                if !self.is_occupied(next) && visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        false
    }

    /// Every empty cell reachable from `from`.
    ///
    /// `from` itself is not included. Renderers use this to hint legal
    /// targets for the selected ball.
    #[must_use]
    pub fn reachable_from(&self, from: Position) -> FxHashSet<Position> {
        let mut reachable = FxHashSet::default();
        if !self.contains(from) {
            return reachable;
        }

        let mut queue = VecDeque::new();
        queue.push_back(from);

        while let Some(current) = queue.pop_front() {
            for next in current.neighbors(self.width(), self.height()) {
                if next != from && !self.is_occupied(next) && reachable.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        reachable
    }
}
