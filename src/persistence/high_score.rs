//! Leaderboard entries.

use serde::{Deserialize, Serialize};

/// A finished game on the leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HighScore {
    pub player_name: String,
    pub score: u32,
    /// Play time in seconds.
    pub time: u64,
}

impl HighScore {
    #[must_use]
    pub fn new(player_name: impl Into<String>, score: u32, time: u64) -> Self {
        Self {
            player_name: player_name.into(),
            score,
            time,
        }
    }

    /// Play time as `MM:SS`. Minutes are not wrapped at an hour.
    #[must_use]
    pub fn formatted_time(&self) -> String {
        format!("{:02}:{:02}", self.time / 60, self.time % 60)
    }
}

/// Insert a score, keeping the list sorted by score, highest first.
///
/// Ties keep insertion order, so an earlier equal score stays ahead.
pub fn insert_ranked(scores: &mut Vec<HighScore>, entry: HighScore) {
    let at = scores.partition_point(|s| s.score >= entry.score);
    scores.insert(at, entry);
}

/// Sort a leaderboard by score, highest first (stable).
pub fn rank(scores: &mut [HighScore]) {
    scores.sort_by(|a, b| b.score.cmp(&a.score));
}
