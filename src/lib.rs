//! # free-lines
//!
//! A "Lines" puzzle engine: move a ball along a path of empty cells to line
//! up five (or `line_size`) of a color, which clears them for points. Moves
//! that clear nothing spawn new balls; a full board ends the game, an
//! empty one wins it.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not shared state**: every accepted move commits an
//!    immutable [`GameState`]; undo and redo swap whole snapshots.
//!
//! 2. **Local line checks**: only the cells a turn changed are searched
//!    for lines, never the whole board.
//!
//! 3. **Injected randomness**: spawning goes through [`RandomSource`], so a
//!    seed (or a scripted sequence) reproduces a game exactly.
//!
//! ## Modules
//!
//! - `core`: positions, colors, balls, settings, RNG
//! - `board`: occupancy, path finding, line detection, snapshots
//! - `rules`: spawning and scoring
//! - `history`: undo/redo over snapshots
//! - `engine`: turn state machine, render boundary, sessions
//! - `persistence`: saved games, high scores, settings storage
//! - `timer`: elapsed-time clock and ticker
//!
//! ## Example
//!
//! ```
//! use free_lines::{ClickOutcome, GameEngine, GameRng, Settings};
//!
//! let mut engine = GameEngine::new(Settings::default(), GameRng::new(7));
//! assert_eq!(engine.board().occupied_count(), 3);
//!
//! // Select a ball, then send it to any reachable empty cell.
//! let (from, _) = engine.board().iter().next().unwrap();
//! let to = *engine.board().reachable_from(from).iter().next().unwrap();
//!
//! assert_eq!(engine.handle_cell_click(from), ClickOutcome::Selected(from));
//! assert!(matches!(engine.handle_cell_click(to), ClickOutcome::Moved(_)));
//! assert!(engine.can_undo());
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod history;
pub mod engine;
pub mod persistence;
pub mod timer;
pub mod error;

// Re-export commonly used types
pub use crate::core::{Ball, Color, GameRng, Position, RandomSource, SequenceRng, Settings};

pub use crate::board::{Axis, Board, BoardData};

pub use crate::rules::{score_for, spawn};

pub use crate::history::{GameState, History, SavedGame};

pub use crate::engine::{
    ClickOutcome, GameEngine, GameObserver, GameSession, GameView,
    StartMode, TurnPhase, TurnReport, TurnResult,
};

pub use crate::persistence::{FileStore, GameStore, HighScore, MemoryStore, StoreFormat};

pub use crate::timer::{ElapsedClock, Ticker};

pub use crate::error::{SettingsError, StoreError};
