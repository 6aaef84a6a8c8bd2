//! Grid coordinates.
//!
//! A `Position` is a `(row, col)` pair, 0-indexed from the top-left cell.
//! Positions carry no board dimensions; bounds are checked by the
//! operations that step between cells (see [`Position::offset`]).
//!
//! ```
//! use free_lines::core::Position;
//!
//! let p = Position::new(2, 3);
//! assert_eq!(p.offset(-1, 1, 9, 9), Some(Position::new(1, 4)));
//! assert_eq!(Position::new(0, 0).offset(-1, 0, 9, 9), None);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A cell coordinate on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Row index (0 = top).
    pub row: usize,
    /// Column index (0 = left).
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check whether this position lies inside a `width` x `height` grid.
    #[must_use]
    pub const fn in_bounds(self, width: usize, height: usize) -> bool {
        self.row < height && self.col < width
    }

    /// Step by `(d_row, d_col)`, staying inside a `width` x `height` grid.
    ///
    /// Returns `None` if the step leaves the grid.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize, width: usize, height: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        let next = Self::new(row, col);
        next.in_bounds(width, height).then_some(next)
    }

    /// Orthogonal neighbours (up, down, left, right) inside the grid.
    ///
    /// SmallVec keeps the at-most-four neighbours off the heap.
    #[must_use]
    pub fn neighbors(self, width: usize, height: usize) -> SmallVec<[Position; 4]> {
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(|(dr, dc)| self.offset(dr, dc, width, height))
            .collect()
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds() {
        assert!(Position::new(0, 0).in_bounds(9, 9));
        assert!(Position::new(8, 8).in_bounds(9, 9));
        assert!(!Position::new(9, 0).in_bounds(9, 9));
        // Width bounds columns, height bounds rows.
        assert!(Position::new(2, 6).in_bounds(7, 3));
        assert!(!Position::new(3, 2).in_bounds(7, 3));
    }

    #[test]
    fn test_offset_clamps_to_grid() {
        let p = Position::new(0, 8);
        assert_eq!(p.offset(1, 0, 9, 9), Some(Position::new(1, 8)));
        assert_eq!(p.offset(0, 1, 9, 9), None);
        assert_eq!(p.offset(-1, 0, 9, 9), None);
        assert_eq!(p.offset(1, -1, 9, 9), Some(Position::new(1, 7)));
    }

    #[test]
    fn test_neighbors_corner_and_center() {
        let corner = Position::new(0, 0).neighbors(9, 9);
        assert_eq!(corner.len(), 2);
        assert!(corner.contains(&Position::new(1, 0)));
        assert!(corner.contains(&Position::new(0, 1)));

        let center = Position::new(4, 4).neighbors(9, 9);
        assert_eq!(center.len(), 4);
        // No diagonals.
        assert!(!center.contains(&Position::new(5, 5)));
    }

    #[test]
    fn test_display_and_from_tuple() {
        let p: Position = (3, 7).into();
        assert_eq!(p, Position::new(3, 7));
        assert_eq!(format!("{}", p), "(3, 7)");
    }
}
