//! Ball colors and the fixed palette.
//!
//! Games are configured with a `color_count`; the active colors are always
//! the first `color_count` entries of [`Color::PALETTE`].

use serde::{Deserialize, Serialize};

/// A ball color from the fixed palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Orange,
    Cyan,
    Pink,
}

impl Color {
    /// Every color, in palette order.
    pub const PALETTE: [Color; 8] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Purple,
        Color::Orange,
        Color::Cyan,
        Color::Pink,
    ];

    /// The first `count` palette entries, saturating at the palette size.
    #[must_use]
    pub fn palette(count: usize) -> &'static [Color] {
        &Self::PALETTE[..count.min(Self::PALETTE.len())]
    }

    /// Position of this color in the palette.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display color as a `#RRGGBB` string, for renderers.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Color::Red => "#F44336",
            Color::Green => "#4CAF50",
            Color::Blue => "#2196F3",
            Color::Yellow => "#FFEB3B",
            Color::Purple => "#9C27B0",
            Color::Orange => "#FF9800",
            Color::Cyan => "#00BCD4",
            Color::Pink => "#E91E63",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A ball on the board. Balls are values: moving or recoloring means
/// placing a new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ball {
    pub color: Color,
}

impl Ball {
    /// Create a ball of the given color.
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self { color }
    }
}

impl From<Color> for Ball {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}
