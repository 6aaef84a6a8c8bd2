//! Core value types: positions, colors, balls, settings, randomness.
//!
//! Everything here is small, `Copy` where possible, and serializable.
//! Higher layers (board, rules, engine) build on these types.

pub mod position;
pub mod color;
pub mod rng;
pub mod config;

pub use position::Position;
pub use color::{Ball, Color};
pub use rng::{GameRng, RandomSource, SequenceRng};
pub use config::Settings;
