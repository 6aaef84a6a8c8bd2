//! Score calculation.

/// Points awarded per removed ball.
pub const POINTS_PER_BALL: u32 = 2;

/// Score for clearing `removed` balls.
#[must_use]
pub fn score_for(removed: usize) -> u32 {
    u32::try_from(removed)
        .unwrap_or(u32::MAX)
        .saturating_mul(POINTS_PER_BALL)
}
