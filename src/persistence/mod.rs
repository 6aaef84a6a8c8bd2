//! Persistence: saved games, high scores, and settings.
//!
//! ## Stores
//!
//! - [`MemoryStore`]: in-process, for tests and hosts without storage
//! - [`FileStore`]: one file per key in a directory, JSON or bincode
//!
//! ## Recovery
//!
//! Reads never fail. Missing or malformed data loads as "nothing saved",
//! an empty leaderboard, or default settings, and is logged at `warn`.
//! Writes return [`StoreError`] and callers decide whether to care; the
//! game session logs and carries on, since in-memory state is
//! authoritative.

pub mod high_score;
pub mod memory;
pub mod file;

pub use high_score::{insert_ranked, rank, HighScore};
pub use memory::MemoryStore;
pub use file::{FileStore, StoreFormat};

use crate::core::Settings;
use crate::error::StoreError;
use crate::history::SavedGame;

/// Storage for everything that outlives a process.
pub trait GameStore {
    /// Persist the current game's history and cursor.
    fn save_game(&mut self, game: &SavedGame) -> Result<(), StoreError>;

    /// Load the saved game, if one exists and decodes.
    fn load_game(&self) -> Option<SavedGame>;

    /// True when a saved game is present.
    fn has_saved_game(&self) -> bool;

    /// Forget the saved game.
    fn clear_saved_game(&mut self) -> Result<(), StoreError>;

    /// Add a score to the leaderboard.
    fn add_high_score(&mut self, score: HighScore) -> Result<(), StoreError>;

    /// The leaderboard, highest score first.
    fn load_high_scores(&self) -> Vec<HighScore>;

    /// Persist settings.
    fn save_settings(&mut self, settings: &Settings) -> Result<(), StoreError>;

    /// Stored settings, or defaults when none are stored.
    fn load_settings(&self) -> Settings;
}
