//! Serializable board snapshot.

use serde::{Deserialize, Serialize};

use super::grid::Board;
use crate::core::{Ball, Position};

/// Plain-data form of a [`Board`], used in history and save files.
///
/// Cells are stored in row-major order so equal boards serialize to equal
/// bytes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardData {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(Position, Ball)>,
}

impl BoardData {
    /// An empty board of the given size.
    #[must_use]
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: Vec::new(),
        }
    }
}

impl Board {
    /// Snapshot this board.
    #[must_use]
    pub fn to_data(&self) -> BoardData {
        let mut cells: Vec<_> = self.iter().collect();
        cells.sort_unstable_by_key(|(pos, _)| *pos);
        BoardData {
            width: self.width(),
            height: self.height(),
            cells,
        }
    }

    /// Rebuild a board from a snapshot.
    ///
    /// Cells outside the snapshot's bounds are dropped; later duplicates of
    /// a position win.
    #[must_use]
    pub fn from_data(data: &BoardData) -> Self {
        let mut board = Board::new(data.width, data.height);
        for (pos, ball) in &data.cells {
            board.place(*ball, *pos);
        }
        board
    }
}

impl From<&Board> for BoardData {
    fn from(board: &Board) -> Self {
        board.to_data()
    }
}

impl From<&BoardData> for Board {
    fn from(data: &BoardData) -> Self {
        Board::from_data(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    #[test]
    fn test_roundtrip_preserves_occupancy() {
        let mut board = Board::new(7, 5);
        board.place(Ball::new(Color::Red), Position::new(0, 6));
        board.place(Ball::new(Color::Blue), Position::new(4, 0));
        board.place(Ball::new(Color::Cyan), Position::new(2, 3));

        let data = board.to_data();
        assert_eq!(data.width, 7);
        assert_eq!(data.height, 5);

        let rebuilt = Board::from_data(&data);
        assert_eq!(rebuilt, board);
    }

    #[test]
    fn test_cells_are_row_major() {
        let mut board = Board::new(3, 3);
        board.place(Ball::new(Color::Red), Position::new(2, 0));
        board.place(Ball::new(Color::Red), Position::new(0, 2));
        board.place(Ball::new(Color::Red), Position::new(0, 1));

        let positions: Vec<_> = board.to_data().cells.iter().map(|(p, _)| *p).collect();
        assert_eq!(
            positions,
            vec![Position::new(0, 1), Position::new(0, 2), Position::new(2, 0)]
        );
    }

    #[test]
    fn test_out_of_bounds_cells_are_dropped() {
        let data = BoardData {
            width: 2,
            height: 2,
            cells: vec![
                (Position::new(0, 0), Ball::new(Color::Red)),
                (Position::new(5, 5), Ball::new(Color::Red)),
            ],
        };
        let board = Board::from_data(&data);
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_empty_data() {
        let board = Board::from_data(&BoardData::empty(4, 3));
        assert!(board.is_empty());
        assert_eq!(board.width(), 4);
        assert_eq!(board.height(), 3);
    }
}
