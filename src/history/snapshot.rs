//! Immutable game snapshots.

use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardData};

/// Everything needed to restore a point in a game: board, score, and
/// elapsed time. Snapshots are never modified once taken.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub board: BoardData,
    pub score: u32,
    /// Seconds of play.
    pub elapsed_time: u64,
}

impl GameState {
    /// Snapshot a board with its score and time.
    #[must_use]
    pub fn capture(board: &Board, score: u32, elapsed_time: u64) -> Self {
        Self {
            board: board.to_data(),
            score,
            elapsed_time,
        }
    }

    /// Rebuild the live board for this snapshot.
    #[must_use]
    pub fn board(&self) -> Board {
        Board::from_data(&self.board)
    }
}

/// Persisted form of a [`History`](super::History): the snapshot list and
/// the cursor into it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub history: Vec<GameState>,
    pub cursor: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Ball, Color, Position};

    #[test]
    fn test_capture_and_restore() {
        let mut board = Board::new(9, 9);
        board.place(Ball::new(Color::Red), Position::new(4, 4));

        let state = GameState::capture(&board, 12, 30);
        assert_eq!(state.score, 12);
        assert_eq!(state.elapsed_time, 30);
        assert_eq!(state.board(), board);
    }

    #[test]
    fn test_snapshot_independent_of_board() {
        let mut board = Board::new(3, 3);
        let state = GameState::capture(&board, 0, 0);

        board.place(Ball::new(Color::Blue), Position::new(0, 0));
        assert!(state.board().is_empty());
    }

    #[test]
    fn test_state_serde() {
        let mut board = Board::new(4, 4);
        board.place(Ball::new(Color::Orange), Position::new(1, 2));
        let state = GameState::capture(&board, 8, 65);

        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
