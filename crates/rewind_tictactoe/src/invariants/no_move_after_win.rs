//! Terminal win invariant: nothing follows a winning snapshot.

use super::super::GameHistory;
use super::super::rules::check_winner;
use super::Invariant;

/// Invariant: only the last snapshot of a history may contain a winning line.
pub struct NoMoveAfterWinInvariant;

impl Invariant<GameHistory> for NoMoveAfterWinInvariant {
    fn holds(history: &GameHistory) -> bool {
        let snapshots = history.snapshots();
        let Some((_, earlier)) = snapshots.split_last() else {
            return true;
        };
        earlier.iter().all(|board| check_winner(board).is_none())
    }

    fn description() -> &'static str {
        "No snapshot follows one with a winning line"
    }
}
