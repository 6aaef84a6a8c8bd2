//! Error types.
//!
//! Gameplay itself never fails: rejected clicks are reported through
//! [`ClickOutcome`](crate::engine::ClickOutcome). Errors only arise at the
//! edges, when validating settings and when talking to storage.

use thiserror::Error;

/// A settings value outside the range the engine supports.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// Board width below 2.
    #[error("board width must be at least 2, got {0}")]
    Width(usize),

    /// Board height below 2.
    #[error("board height must be at least 2, got {0}")]
    Height(usize),

    /// Color count below 2 or above the palette size.
    #[error("color count must be between 2 and {max}, got {got}")]
    ColorCount { got: usize, max: usize },

    /// Line size below 2.
    #[error("line size must be at least 2, got {0}")]
    LineSize(usize),

    /// Spawn count of zero.
    #[error("spawn count must be at least 1")]
    SpawnCount,
}

/// Failure while reading or writing persisted data.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON codec failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary codec failed: {0}")]
    Binary(#[from] bincode::Error),
}
