//! Render boundary.
//!
//! After every state change the engine builds a [`GameView`] and hands it
//! to each subscribed [`GameObserver`]. Views borrow the live board, so
//! observers copy out whatever they need to keep.

use rustc_hash::FxHashSet;

use crate::board::Board;
use crate::core::Position;

/// Read-only picture of the game for renderers.
#[derive(Clone, Copy, Debug)]
pub struct GameView<'a> {
    pub board: &'a Board,
    pub selected: Option<Position>,
    pub score: u32,
    pub elapsed_time: u64,
    pub can_undo: bool,
    pub can_redo: bool,
    pub won: bool,
    pub lost: bool,
}

impl GameView<'_> {
    /// True once the game has been won or lost.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.won || self.lost
    }

    /// Cells the selected ball could move to.
    #[must_use]
    pub fn reachable(&self) -> FxHashSet<Position> {
        self.selected
            .map(|from| self.board.reachable_from(from))
            .unwrap_or_default()
    }
}

/// Receives a view after each state change.
pub trait GameObserver {
    fn on_state_change(&mut self, view: &GameView<'_>);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameView<'_>),
{
    fn on_state_change(&mut self, view: &GameView<'_>) {
        self(view)
    }
}
