//! Line detection.
//!
//! A line is a maximal run of same-colored balls along one of four axes.
//! Detection is local: only runs through a given position are examined,
//! so a turn checks the cells it changed instead of rescanning the board.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::grid::Board;
use crate::core::Position;

/// The four line axes, as `(d_row, d_col)` steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Vertical,
        Axis::Horizontal,
        Axis::Diagonal,
        Axis::AntiDiagonal,
    ];

    /// Step along this axis in the forward direction.
    #[must_use]
    pub const fn step(self) -> (isize, isize) {
        match self {
            Axis::Vertical => (1, 0),
            Axis::Horizontal => (0, 1),
            Axis::Diagonal => (1, 1),
            Axis::AntiDiagonal => (1, -1),
        }
    }
}

impl Board {
    /// The maximal same-color run through `pos` along one axis.
    ///
    /// Includes `pos` itself; empty when `pos` is empty.
    #[must_use]
    pub fn run_through(&self, pos: Position, axis: Axis) -> SmallVec<[Position; 9]> {
        let mut run = SmallVec::new();
        let Some(ball) = self.ball_at(pos) else {
            return run;
        };
        run.push(pos);

        let (dr, dc) = axis.step();
        for (sr, sc) in [(dr, dc), (-dr, -dc)] {
            let mut cursor = pos;
            while let Some(next) = cursor.offset(sr, sc, self.width(), self.height()) {
                if self.ball_at(next) != Some(ball) {
                    break;
                }
                run.push(next);
                cursor = next;
            }
        }

        run
    }

    /// Every position on a qualifying line through `pos`.
    ///
    /// Each axis is checked independently; runs of at least `line_size`
    /// are unioned (so `pos` appears once even if it completes two lines).
    #[must_use]
    pub fn lines_through(&self, pos: Position, line_size: usize) -> FxHashSet<Position> {
        let mut lines = FxHashSet::default();
        for axis in Axis::ALL {
            let run = self.run_through(pos, axis);
            if !run.is_empty() && run.len() >= line_size {
                lines.extend(run);
            }
        }
        lines
    }

    /// Union of [`lines_through`](Self::lines_through) over several positions.
    #[must_use]
    pub fn lines_through_all<'a, I>(&self, positions: I, line_size: usize) -> FxHashSet<Position>
    where
        I: IntoIterator<Item = &'a Position>,
    {
        let mut lines = FxHashSet::default();
        for pos in positions {
            lines.extend(self.lines_through(*pos, line_size));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Ball, Color};

    fn place_all(board: &mut Board, color: Color, cells: &[(usize, usize)]) {
        for &(r, c) in cells {
            board.place(Ball::new(color), Position::new(r, c));
        }
    }

    #[test]
    fn test_horizontal_line_of_five() {
        let mut board = Board::new(9, 9);
        place_all(&mut board, Color::Red, &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]);

        let lines = board.lines_through(Position::new(0, 2), 5);
        assert_eq!(lines.len(), 5);
        for c in 0..5 {
            assert!(lines.contains(&Position::new(0, c)));
        }

        assert!(board.lines_through(Position::new(0, 2), 6).is_empty());
    }

    #[test]
    fn test_color_breaks_run() {
        let mut board = Board::new(9, 9);
        place_all(&mut board, Color::Red, &[(3, 0), (3, 1), (3, 3), (3, 4)]);
        place_all(&mut board, Color::Blue, &[(3, 2)]);

        assert!(board.lines_through(Position::new(3, 1), 4).is_empty());
        assert_eq!(board.run_through(Position::new(3, 1), Axis::Horizontal).len(), 2);
    }

    #[test]
    fn test_vertical_and_diagonals() {
        let mut board = Board::new(9, 9);
        place_all(&mut board, Color::Green, &[(0, 4), (1, 4), (2, 4), (3, 4)]);
        assert_eq!(board.lines_through(Position::new(3, 4), 4).len(), 4);

        let mut board = Board::new(9, 9);
        place_all(&mut board, Color::Blue, &[(2, 2), (3, 3), (4, 4), (5, 5)]);
        assert_eq!(board.lines_through(Position::new(4, 4), 4).len(), 4);

        let mut board = Board::new(9, 9);
        place_all(&mut board, Color::Yellow, &[(0, 8), (1, 7), (2, 6), (3, 5)]);
        assert_eq!(board.lines_through(Position::new(0, 8), 4).len(), 4);
    }

    #[test]
    fn test_crossing_lines_are_unioned() {
        // A plus shape: row 4 and column 4 each have five reds, sharing (4, 4).
        let mut board = Board::new(9, 9);
        for i in 2..7 {
            place_all(&mut board, Color::Red, &[(4, i), (i, 4)]);
        }

        let lines = board.lines_through(Position::new(4, 4), 5);
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn test_longer_run_is_cleared_whole() {
        let mut board = Board::new(9, 9);
        place_all(&mut board, Color::Purple, &[(8, 0), (8, 1), (8, 2), (8, 3), (8, 4), (8, 5)]);
        assert_eq!(board.lines_through(Position::new(8, 0), 5).len(), 6);
    }

    #[test]
    fn test_empty_position_has_no_lines() {
        let board = Board::new(9, 9);
        assert!(board.lines_through(Position::new(4, 4), 2).is_empty());
        assert!(board.run_through(Position::new(4, 4), Axis::Vertical).is_empty());
    }

    #[test]
    fn test_lines_through_all_dedupes() {
        let mut board = Board::new(9, 9);
        place_all(&mut board, Color::Orange, &[(1, 1), (1, 2), (1, 3)]);

        let lines = board.lines_through_all(&[Position::new(1, 1), Position::new(1, 3)], 3);
        assert_eq!(lines.len(), 3);
    }
}
