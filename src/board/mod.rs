//! The game board: occupancy, reachability, and line detection.
//!
//! - `grid`: the [`Board`] type and its mutations
//! - `path`: breadth-first reachability over empty cells
//! - `lines`: same-color run detection along four axes
//! - `data`: [`BoardData`], the serializable snapshot form

pub mod grid;
pub mod path;
pub mod lines;
pub mod data;

pub use grid::Board;
pub use lines::Axis;
pub use data::BoardData;
