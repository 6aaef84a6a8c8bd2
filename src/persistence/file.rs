//! Directory-backed store.
//!
//! Each key lives in its own file inside the store directory:
//!
//! | Key         | JSON file          | Binary file       |
//! |-------------|--------------------|-------------------|
//! | saved game  | `saved_game.json`  | `saved_game.bin`  |
//! | high scores | `high_scores.json` | `high_scores.bin` |
//! | settings    | `settings.json`    | `settings.bin`    |
//!
//! Writes go to a temporary file that is then renamed over the target, so
//! a crash mid-write leaves the previous file intact.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::high_score::{insert_ranked, rank, HighScore};
use super::GameStore;
use crate::core::Settings;
use crate::error::StoreError;
use crate::history::SavedGame;

const SAVED_GAME: &str = "saved_game";
const HIGH_SCORES: &str = "high_scores";
const SETTINGS: &str = "settings";

/// Encoding used for store files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StoreFormat {
    /// Human-readable JSON (`serde_json`).
    #[default]
    Json,
    /// Compact binary (`bincode`).
    Binary,
}

impl StoreFormat {
    fn extension(self) -> &'static str {
        match self {
            StoreFormat::Json => "json",
            StoreFormat::Binary => "bin",
        }
    }

    fn encode<T: Serialize>(self, value: &T) -> Result<Vec<u8>, StoreError> {
        Ok(match self {
            StoreFormat::Json => serde_json::to_vec_pretty(value)?,
            StoreFormat::Binary => bincode::serialize(value)?,
        })
    }

    fn decode<T: DeserializeOwned>(self, bytes: &[u8]) -> Result<T, StoreError> {
        Ok(match self {
            StoreFormat::Json => serde_json::from_slice(bytes)?,
            StoreFormat::Binary => bincode::deserialize(bytes)?,
        })
    }
}

/// Store keeping one file per key in a directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
    format: StoreFormat,
}

impl FileStore {
    /// Open (creating if needed) a JSON store in `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        Self::open_with_format(dir, StoreFormat::Json)
    }

    /// Open (creating if needed) a store in `dir` with the given encoding.
    pub fn open_with_format(dir: impl Into<PathBuf>, format: StoreFormat) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir, format })
    }

    /// The store directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn format(&self) -> StoreFormat {
        self.format
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", key, self.format.extension()))
    }

    fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let bytes = self.format.encode(value)?;
        let path = self.path(key);
        let tmp_path = self.dir.join(format!(".tmp_{}.{}", key, self.format.extension()));
        {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(&bytes)?;
            file.flush()?;
        }
        fs::rename(&tmp_path, &path)?;
        debug!(path = %path.display(), bytes = bytes.len(), "stored");
        Ok(())
    }

    /// Read and decode a key. Missing files are `None`; unreadable or
    /// malformed files are logged and also `None`.
    fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.path(key);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
            Err(err) => {
                warn!(path = %path.display(), %err, "failed to read store file");
                return None;
            }
        };
        match self.format.decode(&bytes) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(path = %path.display(), %err, "discarding malformed store file");
                None
            }
        }
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path(key)) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}

impl GameStore for FileStore {
    fn save_game(&mut self, game: &SavedGame) -> Result<(), StoreError> {
        self.write(SAVED_GAME, game)
    }

    fn load_game(&self) -> Option<SavedGame> {
        self.read(SAVED_GAME)
    }

    fn has_saved_game(&self) -> bool {
        self.path(SAVED_GAME).is_file()
    }

    fn clear_saved_game(&mut self) -> Result<(), StoreError> {
        self.remove(SAVED_GAME)
    }

    fn add_high_score(&mut self, score: HighScore) -> Result<(), StoreError> {
        let mut scores = self.load_high_scores();
        insert_ranked(&mut scores, score);
        self.write(HIGH_SCORES, &scores)
    }

    fn load_high_scores(&self) -> Vec<HighScore> {
        let mut scores: Vec<HighScore> = self.read(HIGH_SCORES).unwrap_or_default();
        // Files written by other tools may not be ordered.
        rank(&mut scores);
        scores
    }

    fn save_settings(&mut self, settings: &Settings) -> Result<(), StoreError> {
        self.write(SETTINGS, settings)
    }

    fn load_settings(&self) -> Settings {
        self.read(SETTINGS).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::core::{Ball, Color, Position};
    use crate::history::GameState;

    fn sample_game() -> SavedGame {
        let mut board = Board::new(9, 9);
        board.place(Ball::new(Color::Blue), Position::new(3, 3));
        let first = GameState::capture(&board, 0, 0);
        board.place(Ball::new(Color::Red), Position::new(5, 1));
        let second = GameState::capture(&board, 6, 42);
        SavedGame {
            history: vec![first, second],
            cursor: 1,
        }
    }

    #[test]
    fn test_json_game_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        assert!(!store.has_saved_game());
        store.save_game(&sample_game()).unwrap();
        assert!(store.has_saved_game());
        assert!(dir.path().join("saved_game.json").is_file());
        assert_eq!(store.load_game(), Some(sample_game()));

        store.clear_saved_game().unwrap();
        assert!(!store.has_saved_game());
        assert!(store.load_game().is_none());
        // Clearing twice is fine.
        store.clear_saved_game().unwrap();
    }

    #[test]
    fn test_binary_game_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open_with_format(dir.path(), StoreFormat::Binary).unwrap();

        store.save_game(&sample_game()).unwrap();
        assert!(dir.path().join("saved_game.bin").is_file());
        assert_eq!(store.load_game(), Some(sample_game()));
    }

    #[test]
    fn test_corrupt_high_scores_load_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("high_scores.json"), b"{not json").unwrap();

        let mut store = FileStore::open(dir.path()).unwrap();
        assert!(store.load_high_scores().is_empty());

        // Adding a score replaces the corrupt file.
        store.add_high_score(HighScore::new("ada", 12, 61)).unwrap();
        assert_eq!(store.load_high_scores(), vec![HighScore::new("ada", 12, 61)]);
    }

    #[test]
    fn test_unsorted_file_is_ranked() {
        let dir = tempfile::tempdir().unwrap();
        let unsorted = vec![HighScore::new("a", 1, 0), HighScore::new("b", 30, 0)];
        fs::write(
            dir.path().join("high_scores.json"),
            serde_json::to_vec(&unsorted).unwrap(),
        )
        .unwrap();

        let store = FileStore::open(dir.path()).unwrap();
        let names: Vec<_> = store
            .load_high_scores()
            .into_iter()
            .map(|s| s.player_name)
            .collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_settings_roundtrip_and_default() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.load_settings(), Settings::default());

        let custom = Settings::default().with_line_size(4).with_language("ru");
        store.save_settings(&custom).unwrap();
        assert_eq!(store.load_settings(), custom);
    }

    #[test]
    fn test_open_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileStore::open(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(store.dir(), nested.as_path());
        assert_eq!(store.format(), StoreFormat::Json);
    }
}
