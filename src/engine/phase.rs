//! Turn phases and click/turn results.

use crate::core::Position;

/// Where the engine is in the turn cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TurnPhase {
    /// No ball selected.
    #[default]
    Idle,
    /// A ball is selected and waiting for a destination.
    Selected(Position),
    /// The board was cleared. Clicks are ignored until a new game.
    Won,
    /// The board filled up. Clicks are ignored until a new game.
    Lost,
}

impl TurnPhase {
    /// True for `Won` and `Lost`.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, TurnPhase::Won | TurnPhase::Lost)
    }

    /// The selected ball, if any.
    #[must_use]
    pub fn selected(self) -> Option<Position> {
        match self {
            TurnPhase::Selected(pos) => Some(pos),
            _ => None,
        }
    }
}

/// How a turn left the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnResult {
    Continue,
    Won,
    Lost,
}

/// What a completed move did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub from: Position,
    pub to: Position,
    /// Balls removed this turn, in row-major order.
    pub cleared: Vec<Position>,
    /// Balls spawned this turn (empty when the move itself made a line).
    pub spawned: Vec<Position>,
    /// Points gained this turn.
    pub points: u32,
    pub result: TurnResult,
}

/// Response to a cell click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing happened: game over, empty cell with no selection, or a
    /// position off the board.
    Ignored,
    /// A ball is now selected (fresh selection or re-target).
    Selected(Position),
    /// Empty destination that the selected ball cannot reach. The
    /// selection is kept.
    NoPath,
    /// The selected ball moved and the turn resolved.
    Moved(TurnReport),
}

impl ClickOutcome {
    /// The turn report for a successful move.
    #[must_use]
    pub fn report(&self) -> Option<&TurnReport> {
        match self {
            ClickOutcome::Moved(report) => Some(report),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_helpers() {
        assert!(!TurnPhase::Idle.is_terminal());
        assert!(TurnPhase::Won.is_terminal());
        assert!(TurnPhase::Lost.is_terminal());

        let pos = Position::new(1, 2);
        assert_eq!(TurnPhase::Selected(pos).selected(), Some(pos));
        assert_eq!(TurnPhase::Idle.selected(), None);
        assert_eq!(TurnPhase::default(), TurnPhase::Idle);
    }

    #[test]
    fn test_outcome_report() {
        assert!(ClickOutcome::Ignored.report().is_none());
        let report = TurnReport {
            from: Position::new(0, 0),
            to: Position::new(0, 1),
            cleared: Vec::new(),
            spawned: Vec::new(),
            points: 0,
            result: TurnResult::Continue,
        };
        let outcome = ClickOutcome::Moved(report.clone());
        assert_eq!(outcome.report(), Some(&report));
    }
}
