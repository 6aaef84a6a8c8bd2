//! The turn state machine.
//!
//! ## Turn Flow
//!
//! ```text
//! click occupied ──► Selected(pos) ──click occupied──► Selected(other)
//!                         │
//!                         ├─ click empty, unreachable ──► (selection kept)
//!                         │
//!                         └─ click empty, reachable ──► move
//!                                                        │
//!                        line through destination? ──yes─┴─► clear + score
//!                                   │ no
//!                                   └──► spawn, clear lines through spawns
//!                                                        │
//!                              empty board ► Won   full board ► Lost
//!                                                        │
//!                                               commit snapshot
//! ```
//!
//! Every click is handled synchronously through `&mut self`, so a turn is
//! one atomic unit and no caller ever sees a half-resolved board.

use tracing::{debug, info};

use super::phase::{ClickOutcome, TurnPhase, TurnReport, TurnResult};
use super::view::{GameObserver, GameView};
use crate::board::Board;
use crate::core::{GameRng, Position, RandomSource, Settings};
use crate::history::{GameState, History, SavedGame};
use crate::rules::{score_for, spawn};
use crate::timer::{ElapsedClock, Ticker};

/// Lines game engine.
///
/// Owns the live board, the undo history and the random source. Generic
/// over [`RandomSource`] so tests can script spawns.
///
/// ## Elapsed Time
///
/// The engine keeps an [`ElapsedClock`]. By default the host advances it
/// with [`tick`](Self::tick); with [`set_real_time`](Self::set_real_time)
/// a background [`Ticker`] advances it once per second instead. Either
/// way the clock only runs while the game is in progress.
pub struct GameEngine<R: RandomSource = GameRng> {
    settings: Settings,
    rng: R,
    board: Board,
    score: u32,
    phase: TurnPhase,
    history: History,
    clock: ElapsedClock,
    clock_running: bool,
    real_time: bool,
    ticker: Option<Ticker>,
    observers: Vec<Box<dyn GameObserver>>,
}

impl<R: RandomSource> GameEngine<R> {
    /// Create an engine and start a new game.
    ///
    /// `settings` must pass [`Settings::validate`].
    pub fn new(settings: Settings, rng: R) -> Self {
        let mut engine = Self::blank(settings, rng);
        engine.new_game();
        engine
    }

    /// Create an engine positioned at a saved game.
    ///
    /// An empty saved history falls back to a new game.
    pub fn resume(settings: Settings, rng: R, saved: &SavedGame) -> Self {
        let mut engine = Self::blank(settings, rng);
        let history = History::from(saved);
        match history.current().cloned() {
            Some(state) => {
                engine.history = history;
                engine.restore(&state);
                debug!(
                    snapshots = engine.history.len(),
                    cursor = engine.history.cursor(),
                    "resumed saved game"
                );
                engine.notify();
            }
            None => engine.new_game(),
        }
        engine
    }

    fn blank(settings: Settings, rng: R) -> Self {
        debug_assert!(settings.validate().is_ok(), "invalid settings: {:?}", settings);
        let board = Board::new(settings.board_width, settings.board_height);
        Self {
            settings,
            rng,
            board,
            score: 0,
            phase: TurnPhase::Idle,
            history: History::new(),
            clock: ElapsedClock::new(),
            clock_running: false,
            real_time: false,
            ticker: None,
            observers: Vec::new(),
        }
    }

    // === Commands ===

    /// Start over: fresh board with the initial spawn, score and time at
    /// zero, history reset to the opening snapshot.
    pub fn new_game(&mut self) {
        self.stop_clock();

        self.board = Board::new(self.settings.board_width, self.settings.board_height);
        spawn(
            &mut self.board,
            self.settings.spawn_count,
            self.settings.color_count,
            &mut self.rng,
        );
        self.score = 0;
        self.phase = TurnPhase::Idle;
        self.clock.set(0);
        self.history.clear();

        debug!(
            width = self.board.width(),
            height = self.board.height(),
            balls = self.board.occupied_count(),
            "new game"
        );

        // The opening spawn can fill a small board.
        if self.evaluate_end() == TurnResult::Continue {
            self.start_clock();
        }
        self.commit();
        self.notify();
    }

    /// Handle a click on a cell.
    pub fn handle_cell_click(&mut self, pos: Position) -> ClickOutcome {
        if self.phase.is_terminal() || !self.board.contains(pos) {
            return ClickOutcome::Ignored;
        }

        let outcome = match self.phase.selected() {
            None if self.board.is_occupied(pos) => {
                self.phase = TurnPhase::Selected(pos);
                ClickOutcome::Selected(pos)
            }
            None => ClickOutcome::Ignored,
            Some(_) if self.board.is_occupied(pos) => {
                self.phase = TurnPhase::Selected(pos);
                ClickOutcome::Selected(pos)
            }
            Some(from) if self.board.has_path(from, pos) => {
                ClickOutcome::Moved(self.play_move(from, pos))
            }
            Some(_) => ClickOutcome::NoPath,
        };

        if matches!(outcome, ClickOutcome::Selected(_) | ClickOutcome::Moved(_)) {
            self.notify();
        }
        outcome
    }

    /// Step back one snapshot. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo().cloned() {
            Some(state) => {
                self.restore(&state);
                self.notify();
                true
            }
            None => false,
        }
    }

    /// Step forward one snapshot. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo().cloned() {
            Some(state) => {
                self.restore(&state);
                self.notify();
                true
            }
            None => false,
        }
    }

    /// Advance the elapsed clock by one second.
    ///
    /// Ignored while the game is over or while a real-time ticker drives
    /// the clock.
    pub fn tick(&mut self) {
        if self.clock_running && self.ticker.is_none() {
            self.clock.tick();
        }
    }

    /// Switch between host-driven ticks and a background ticker.
    pub fn set_real_time(&mut self, enabled: bool) {
        if self.real_time == enabled {
            return;
        }
        self.real_time = enabled;
        if self.clock_running {
            self.stop_clock();
            self.start_clock();
        }
    }

    /// Register an observer for state changes.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    // === Queries ===

    /// Current picture of the game.
    #[must_use]
    pub fn view(&self) -> GameView<'_> {
        GameView {
            board: &self.board,
            selected: self.phase.selected(),
            score: self.score,
            elapsed_time: self.clock.get(),
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
            won: self.phase == TurnPhase::Won,
            lost: self.phase == TurnPhase::Lost,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn selected(&self) -> Option<Position> {
        self.phase.selected()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Elapsed play time in seconds.
    #[must_use]
    pub fn elapsed_time(&self) -> u64 {
        self.clock.get()
    }

    /// Handle to the elapsed clock.
    #[must_use]
    pub fn clock(&self) -> &ElapsedClock {
        &self.clock
    }

    /// True while the elapsed clock is counting.
    #[must_use]
    pub fn is_clock_running(&self) -> bool {
        self.clock_running
    }

    /// True once the game has been won or lost.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Snapshot of the live state (board, score, elapsed time).
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        GameState::capture(&self.board, self.score, self.clock.get())
    }

    /// Persisted form of the history.
    #[must_use]
    pub fn saved_game(&self) -> SavedGame {
        self.history.to_saved()
    }

    // === Turn resolution ===

    fn play_move(&mut self, from: Position, to: Position) -> TurnReport {
        let line_size = self.settings.line_size;

        self.board.move_ball(from, to);
        self.phase = TurnPhase::Idle;

        let mut spawned = Vec::new();
        let mut cleared = self.board.lines_through(to, line_size);
        if cleared.is_empty() {
            // No line: the board grows, and the new balls may complete lines.
            spawned = spawn(
                &mut self.board,
                self.settings.spawn_count,
                self.settings.color_count,
                &mut self.rng,
            );
            cleared = self.board.lines_through_all(&spawned, line_size);
        }

        self.board.remove_all(&cleared);
        let points = score_for(cleared.len());
        self.score = self.score.saturating_add(points);

        let result = self.evaluate_end();
        if result != TurnResult::Continue {
            // A finished game has nothing to undo into.
            self.history.clear();
        }
        self.commit();

        let mut cleared: Vec<_> = cleared.into_iter().collect();
        cleared.sort_unstable();

        debug!(
            %from,
            %to,
            cleared = cleared.len(),
            spawned = spawned.len(),
            points,
            score = self.score,
            "turn resolved"
        );

        TurnReport {
            from,
            to,
            cleared,
            spawned,
            points,
            result,
        }
    }

    fn evaluate_end(&mut self) -> TurnResult {
        let result = if self.board.is_empty() {
            TurnResult::Won
        } else if self.board.is_full() {
            TurnResult::Lost
        } else {
            return TurnResult::Continue;
        };

        self.phase = match result {
            TurnResult::Won => TurnPhase::Won,
            _ => TurnPhase::Lost,
        };
        self.stop_clock();
        info!(
            ?result,
            score = self.score,
            elapsed = self.clock.get(),
            "game over"
        );
        result
    }

    // === Helpers ===

    fn commit(&mut self) {
        self.history.commit(self.snapshot());
    }

    /// Make `state` the live state. The phase follows the restored board.
    fn restore(&mut self, state: &GameState) {
        self.board = state.board();
        self.score = state.score;
        self.clock.set(state.elapsed_time);

        self.phase = if self.board.is_empty() {
            TurnPhase::Won
        } else if self.board.is_full() {
            TurnPhase::Lost
        } else {
            TurnPhase::Idle
        };

        if self.phase.is_terminal() {
            self.stop_clock();
        } else if !self.clock_running {
            self.start_clock();
        }
    }

    fn start_clock(&mut self) {
        self.clock_running = true;
        if self.real_time {
            self.ticker = Some(Ticker::start(self.clock.clone()));
        }
    }

    fn stop_clock(&mut self) {
        self.clock_running = false;
        if let Some(mut ticker) = self.ticker.take() {
            ticker.stop();
        }
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let view = GameView {
            board: &self.board,
            selected: self.phase.selected(),
            score: self.score,
            elapsed_time: self.clock.get(),
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
            won: self.phase == TurnPhase::Won,
            lost: self.phase == TurnPhase::Lost,
        };
        for observer in &mut self.observers {
            observer.on_state_change(&view);
        }
    }
}

impl<R: RandomSource> std::fmt::Debug for GameEngine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("settings", &self.settings)
            .field("board", &self.board)
            .field("score", &self.score)
            .field("phase", &self.phase)
            .field("snapshots", &self.history.len())
            .field("elapsed_time", &self.clock.get())
            .finish_non_exhaustive()
    }
}
