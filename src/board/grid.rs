//! Board occupancy.
//!
//! The board is a sparse map from [`Position`] to [`Ball`]; absent keys are
//! empty cells. Every key is inside `[0, height) x [0, width)` and map
//! semantics guarantee one ball per cell.

use rustc_hash::FxHashMap;

use crate::core::{Ball, Position};

/// Grid of balls.
///
/// `Clone` is a deep copy: mutating the clone never affects the original.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: FxHashMap<Position, Ball>,
}

impl Board {
    /// Create an empty board.
    ///
    /// Width and height are expected to be at least 2 (validated settings).
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        debug_assert!(width >= 2 && height >= 2, "board must be at least 2x2");
        Self {
            width,
            height,
            cells: FxHashMap::default(),
        }
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Check whether a position lies on this board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.in_bounds(self.width, self.height)
    }

    /// Ball at a position, if any.
    #[must_use]
    pub fn ball_at(&self, pos: Position) -> Option<Ball> {
        self.cells.get(&pos).copied()
    }

    /// Check whether a cell holds a ball.
    #[must_use]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.cells.contains_key(&pos)
    }

    /// Put a ball at a position, replacing any occupant.
    ///
    /// Positions off the board are ignored.
    pub fn place(&mut self, ball: Ball, pos: Position) {
        if self.contains(pos) {
            self.cells.insert(pos, ball);
        }
    }

    /// Clear every given position. Already-empty cells are skipped.
    pub fn remove_all<'a, I>(&mut self, positions: I)
    where
        I: IntoIterator<Item = &'a Position>,
    {
        for pos in positions {
            self.cells.remove(pos);
        }
    }

    /// Relocate the ball at `from` to `to`.
    ///
    /// No-op when `from` is empty. Any ball already at `to` is replaced;
    /// the engine only moves onto empty cells.
    pub fn move_ball(&mut self, from: Position, to: Position) {
        if !self.contains(to) {
            return;
        }
        if let Some(ball) = self.cells.remove(&from) {
            self.cells.insert(to, ball);
        }
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.len()
    }

    /// True when every cell holds a ball.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.len() >= self.cell_count()
    }

    /// True when no cell holds a ball.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Empty cells in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<Position> {
        let mut empty = Vec::with_capacity(self.cell_count().saturating_sub(self.cells.len()));
        for row in 0..self.height {
            for col in 0..self.width {
                let pos = Position::new(row, col);
                if !self.cells.contains_key(&pos) {
                    empty.push(pos);
                }
            }
        }
        empty
    }

    /// Occupied cells in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Ball)> + '_ {
        self.cells.iter().map(|(pos, ball)| (*pos, *ball))
    }
}
