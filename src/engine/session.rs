//! A game engine wired to storage and a real-time clock.
//!
//! `GameSession` is what a front end holds for one game screen: it loads
//! settings and any saved game from a [`GameStore`], runs the engine with a
//! background ticker, and writes the history back after every state
//! change. Storage failures are logged and otherwise ignored; the engine's
//! in-memory state stays authoritative.

use tracing::{info, warn};

use super::game::GameEngine;
use super::phase::ClickOutcome;
use super::view::{GameObserver, GameView};
use crate::core::{GameRng, Position, RandomSource, Settings};
use crate::error::StoreError;
use crate::persistence::{GameStore, HighScore};

/// How to start a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartMode {
    /// Discard any saved game and start fresh.
    New,
    /// Continue the saved game if there is one, else start fresh.
    Resume,
}

/// Engine + store + ticker.
pub struct GameSession<S: GameStore, R: RandomSource = GameRng> {
    engine: GameEngine<R>,
    store: S,
}

impl<S: GameStore, R: RandomSource> GameSession<S, R> {
    /// Load settings from `store` and start or resume a game.
    ///
    /// The elapsed clock runs in real time; see
    /// [`with_real_time`](Self::with_real_time).
    ///
    /// Stored settings that fail [`Settings::validate`] are replaced by the
    /// defaults.
    pub fn start(mut store: S, rng: R, mode: StartMode) -> Self {
        let settings = load_valid_settings(&store);

        let saved = match mode {
            StartMode::New => {
                log_store_error("clear saved game", store.clear_saved_game());
                None
            }
            StartMode::Resume => store.load_game(),
        };

        let mut engine = match saved {
            Some(saved) => GameEngine::resume(settings, rng, &saved),
            None => GameEngine::new(settings, rng),
        };
        engine.set_real_time(true);

        let mut session = Self { engine, store };
        session.persist();
        session
    }

    /// Choose between a background ticker (the default) and host-driven
    /// [`GameEngine::tick`] calls.
    #[must_use]
    pub fn with_real_time(mut self, enabled: bool) -> Self {
        self.engine.set_real_time(enabled);
        self
    }

    // === Commands ===

    /// Forward a click; a completed move is saved.
    pub fn click(&mut self, pos: Position) -> ClickOutcome {
        let outcome = self.engine.handle_cell_click(pos);
        if let ClickOutcome::Moved(_) = outcome {
            self.persist();
        }
        outcome
    }

    pub fn undo(&mut self) -> bool {
        let moved = self.engine.undo();
        if moved {
            self.persist();
        }
        moved
    }

    pub fn redo(&mut self) -> bool {
        let moved = self.engine.redo();
        if moved {
            self.persist();
        }
        moved
    }

    pub fn new_game(&mut self) {
        self.engine.new_game();
        self.persist();
    }

    /// Record the current score and time under `player_name`.
    pub fn save_high_score(&mut self, player_name: &str) -> Result<(), StoreError> {
        let entry = HighScore::new(player_name, self.engine.score(), self.engine.elapsed_time());
        info!(player = player_name, score = entry.score, time = entry.time, "high score saved");
        self.store.add_high_score(entry)
    }

    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.engine.subscribe(observer);
    }

    // === Accessors ===

    #[must_use]
    pub fn view(&self) -> GameView<'_> {
        self.engine.view()
    }

    #[must_use]
    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut GameEngine<R> {
        &mut self.engine
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Leaderboard from the store.
    #[must_use]
    pub fn high_scores(&self) -> Vec<HighScore> {
        self.store.load_high_scores()
    }

    /// Tear down, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Save the running game, or clear the save once the game is over.
    fn persist(&mut self) {
        if self.engine.is_over() {
            log_store_error("clear saved game", self.store.clear_saved_game());
        } else {
            let saved = self.engine.saved_game();
            log_store_error("save game", self.store.save_game(&saved));
        }
    }
}

fn load_valid_settings<S: GameStore>(store: &S) -> Settings {
    let settings = store.load_settings();
    match settings.validate() {
        Ok(()) => settings,
        Err(err) => {
            warn!(%err, ?settings, "stored settings out of range, using defaults");
            Settings::default()
        }
    }
}

fn log_store_error(action: &str, result: Result<(), StoreError>) {
    if let Err(err) = result {
        warn!(%err, "failed to {}", action);
    }
}
