//! History shape invariant: start snapshot present, current position in range.

use super::super::{Board, GameHistory};
use super::Invariant;

/// Invariant: the history starts with the empty board and the current
/// position points at one of its snapshots.
pub struct HistoryNonEmptyInvariant;

impl Invariant<GameHistory> for HistoryNonEmptyInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.snapshots().first() == Some(&Board::new()) && history.current() < history.len()
    }

    fn description() -> &'static str {
        "History starts with the empty board and the current position is in range"
    }
}
