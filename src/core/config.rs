//! Game settings.
//!
//! Settings are supplied once per game. The engine assumes they have
//! passed [`Settings::validate`]; invalid values are rejected at the
//! settings-edit boundary, not during play.

use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::error::SettingsError;

/// Game settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// UI language code. Carried for the presentation layer; the engine
    /// never reads it.
    pub language: String,

    /// Number of columns.
    pub board_width: usize,

    /// Number of rows.
    pub board_height: usize,

    /// How many palette colors are in play (prefix of `Color::PALETTE`).
    pub color_count: usize,

    /// Minimum run length that scores and clears.
    pub line_size: usize,

    /// Balls added per turn without a line, and at game start.
    pub spawn_count: usize,

    /// Renderer hint: stretch cells to fill non-square viewports.
    pub unproportional_stretch: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            board_width: 9,
            board_height: 9,
            color_count: 6,
            line_size: 5,
            spawn_count: 3,
            unproportional_stretch: false,
        }
    }
}

impl Settings {
    /// Set board dimensions.
    #[must_use]
    pub fn with_board_size(mut self, width: usize, height: usize) -> Self {
        self.board_width = width;
        self.board_height = height;
        self
    }

    /// Set the number of colors in play.
    #[must_use]
    pub fn with_color_count(mut self, count: usize) -> Self {
        self.color_count = count;
        self
    }

    /// Set the minimum scoring line length.
    #[must_use]
    pub fn with_line_size(mut self, size: usize) -> Self {
        self.line_size = size;
        self
    }

    /// Set the number of balls spawned per turn.
    #[must_use]
    pub fn with_spawn_count(mut self, count: usize) -> Self {
        self.spawn_count = count;
        self
    }

    /// Set the UI language code.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.board_width * self.board_height
    }

    /// Check every numeric setting against the supported range.
    ///
    /// Width, height, color count and line size must be at least 2; spawn
    /// count at least 1; color count at most the palette size.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.board_width < 2 {
            return Err(SettingsError::Width(self.board_width));
        }
        if self.board_height < 2 {
            return Err(SettingsError::Height(self.board_height));
        }
        let max = Color::PALETTE.len();
        if self.color_count < 2 || self.color_count > max {
            return Err(SettingsError::ColorCount {
                got: self.color_count,
                max,
            });
        }
        if self.line_size < 2 {
            return Err(SettingsError::LineSize(self.line_size));
        }
        if self.spawn_count < 1 {
            return Err(SettingsError::SpawnCount);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.language, "en");
        assert_eq!(
            (s.board_width, s.board_height, s.color_count, s.line_size, s.spawn_count),
            (9, 9, 6, 5, 3)
        );
        assert!(!s.unproportional_stretch);
        assert_eq!(s.validate(), Ok(()));
    }

    #[test]
    fn test_builder() {
        let s = Settings::default()
            .with_board_size(7, 5)
            .with_color_count(4)
            .with_line_size(4)
            .with_spawn_count(2)
            .with_language("de");

        assert_eq!(s.board_width, 7);
        assert_eq!(s.board_height, 5);
        assert_eq!(s.cell_count(), 35);
        assert_eq!(s.color_count, 4);
        assert_eq!(s.line_size, 4);
        assert_eq!(s.spawn_count, 2);
        assert_eq!(s.language, "de");
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let base = Settings::default();

        assert_eq!(
            base.clone().with_board_size(1, 9).validate(),
            Err(SettingsError::Width(1))
        );
        assert_eq!(
            base.clone().with_board_size(9, 0).validate(),
            Err(SettingsError::Height(0))
        );
        assert_eq!(
            base.clone().with_color_count(1).validate(),
            Err(SettingsError::ColorCount { got: 1, max: 8 })
        );
        assert_eq!(
            base.clone().with_color_count(9).validate(),
            Err(SettingsError::ColorCount { got: 9, max: 8 })
        );
        assert_eq!(
            base.clone().with_line_size(1).validate(),
            Err(SettingsError::LineSize(1))
        );
        assert_eq!(
            base.with_spawn_count(0).validate(),
            Err(SettingsError::SpawnCount)
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s: Settings = serde_json::from_str(r#"{"board_width": 12}"#).unwrap();
        assert_eq!(s.board_width, 12);
        assert_eq!(s.board_height, 9);
        assert_eq!(s.line_size, 5);
    }
}
