//! Alternating marks invariant: each snapshot adds one mark for the right player.

use super::super::{Board, GameHistory, Player, Position, Square};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: snapshot `i` differs from snapshot `i - 1` in exactly one
/// square, which was empty and now holds the mark of the player to move at
/// position `i - 1`.
pub struct AlternatingMarksInvariant;

fn is_single_move(prev: &Board, next: &Board, mover: Player) -> bool {
    let mut changed = Position::iter().filter(|pos| prev.get(*pos) != next.get(*pos));

    match (changed.next(), changed.next()) {
        (Some(pos), None) => {
            prev.get(pos) == Square::Empty && next.get(pos) == Square::Occupied(mover)
        }
        _ => false,
    }
}

impl Invariant<GameHistory> for AlternatingMarksInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| is_single_move(&pair[0], &pair[1], Player::at_position(i)))
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark for the player whose turn it was"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_played_history_holds() {
        let mut history = GameHistory::new();
        for i in [4, 0, 8] {
            history.apply_index(i);
        }
        assert!(AlternatingMarksInvariant::holds(&history));
    }

    #[test]
    fn test_wrong_player_violates() {
        let start = Board::new();
        let bad = start.with_move(Position::Center, Player::O);
        let history = GameHistory::from_parts(vec![start, bad], 1);
        assert!(!AlternatingMarksInvariant::holds(&history));
    }

    #[test]
    fn test_double_move_violates() {
        let start = Board::new();
        let bad = start
            .with_move(Position::Center, Player::X)
            .with_move(Position::TopLeft, Player::X);
        let history = GameHistory::from_parts(vec![start, bad], 1);
        assert!(!AlternatingMarksInvariant::holds(&history));
    }

    #[test]
    fn test_repeated_snapshot_violates() {
        let history = GameHistory::from_parts(vec![Board::new(), Board::new()], 1);
        assert!(!AlternatingMarksInvariant::holds(&history));
    }
}
