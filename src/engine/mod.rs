//! Game orchestration.
//!
//! - `game`: [`GameEngine`], the turn state machine over board + history
//! - `phase`: turn phases and the results of clicks and turns
//! - `view`: [`GameView`] and [`GameObserver`], the render boundary
//! - `session`: [`GameSession`], an engine wired to a store and a ticker

pub mod game;
pub mod phase;
pub mod view;
pub mod session;

pub use game::GameEngine;
pub use phase::{ClickOutcome, TurnPhase, TurnReport, TurnResult};
pub use view::{GameObserver, GameView};
pub use session::{GameSession, StartMode};
