//! In-memory store.

use super::high_score::{insert_ranked, HighScore};
use super::GameStore;
use crate::core::Settings;
use crate::error::StoreError;
use crate::history::SavedGame;

/// Store that keeps everything in memory. Writes never fail.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    game: Option<SavedGame>,
    high_scores: Vec<HighScore>,
    settings: Option<Settings>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given settings stored.
    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings: Some(settings),
            ..Self::default()
        }
    }
}

impl GameStore for MemoryStore {
    fn save_game(&mut self, game: &SavedGame) -> Result<(), StoreError> {
        self.game = Some(game.clone());
        Ok(())
    }

    fn load_game(&self) -> Option<SavedGame> {
        self.game.clone()
    }

    fn has_saved_game(&self) -> bool {
        self.game.is_some()
    }

    fn clear_saved_game(&mut self) -> Result<(), StoreError> {
        self.game = None;
        Ok(())
    }

    fn add_high_score(&mut self, score: HighScore) -> Result<(), StoreError> {
        insert_ranked(&mut self.high_scores, score);
        Ok(())
    }

    fn load_high_scores(&self) -> Vec<HighScore> {
        self.high_scores.clone()
    }

    fn save_settings(&mut self, settings: &Settings) -> Result<(), StoreError> {
        self.settings = Some(settings.clone());
        Ok(())
    }

    fn load_settings(&self) -> Settings {
        self.settings.clone().unwrap_or_default()
    }
}
