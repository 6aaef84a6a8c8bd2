//! Undo/redo history over immutable snapshots.
//!
//! ## Model
//!
//! An ordered list of [`GameState`] plus a cursor pointing at the active
//! snapshot. Committing while the cursor is behind the tail drops every
//! later snapshot first (the redo branch), then appends.
//!
//! ```
//! use free_lines::board::Board;
//! use free_lines::history::{GameState, History};
//!
//! let board = Board::new(9, 9);
//! let mut history = History::new();
//! history.commit(GameState::capture(&board, 0, 0));
//! history.commit(GameState::capture(&board, 10, 5));
//!
//! assert_eq!(history.undo().map(|s| s.score), Some(0));
//! assert!(history.can_redo());
//! ```
//!
//! The list is an `im::Vector`, so cloning a whole history (for example
//! to hand it to a store) is O(1).

pub mod snapshot;

pub use snapshot::{GameState, SavedGame};

use im::Vector;

/// Snapshot list with a cursor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    states: Vector<GameState>,
    cursor: usize,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a history from persisted parts.
    ///
    /// A cursor past the end is clamped to the last snapshot.
    #[must_use]
    pub fn from_parts(states: impl IntoIterator<Item = GameState>, cursor: usize) -> Self {
        let states: Vector<GameState> = states.into_iter().collect();
        let cursor = cursor.min(states.len().saturating_sub(1));
        Self { states, cursor }
    }

    /// Append a snapshot, discarding any redo branch first.
    pub fn commit(&mut self, state: GameState) {
        if !self.states.is_empty() && self.cursor + 1 < self.states.len() {
            self.states.truncate(self.cursor + 1);
        }
        self.states.push_back(state);
        self.cursor = self.states.len() - 1;
    }

    /// Step back one snapshot. Returns the new active snapshot.
    pub fn undo(&mut self) -> Option<&GameState> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.states.get(self.cursor)
    }

    /// Step forward one snapshot. Returns the new active snapshot.
    pub fn redo(&mut self) -> Option<&GameState> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.states.get(self.cursor)
    }

    /// True when there is an earlier snapshot.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// True when there is a later snapshot.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.states.len()
    }

    /// The active snapshot.
    #[must_use]
    pub fn current(&self) -> Option<&GameState> {
        self.states.get(self.cursor)
    }

    /// Index of the active snapshot.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Drop every snapshot.
    pub fn clear(&mut self) {
        self.states.clear();
        self.cursor = 0;
    }

    /// Iterate snapshots from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &GameState> + '_ {
        self.states.iter()
    }

    /// Persisted form of this history.
    #[must_use]
    pub fn to_saved(&self) -> SavedGame {
        SavedGame {
            history: self.states.iter().cloned().collect(),
            cursor: self.cursor,
        }
    }
}

impl From<&SavedGame> for History {
    fn from(saved: &SavedGame) -> Self {
        History::from_parts(saved.history.iter().cloned(), saved.cursor)
    }
}
