//! Game rules that sit between the board and the engine.
//!
//! - `spawner`: random ball placement on empty cells
//! - `scoring`: points for cleared balls
//!
//! Both are free functions with no state of their own; the engine owns
//! the board and the random source and passes them in.

pub mod spawner;
pub mod scoring;

pub use spawner::spawn;
pub use scoring::{score_for, POINTS_PER_BALL};
