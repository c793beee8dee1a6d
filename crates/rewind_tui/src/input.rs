//! Keyboard mapping for the game screen.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;
use tracing::instrument;

/// A user intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the application.
    Quit,
    /// Mark a square directly (number keys 1-9).
    Place(Position),
    /// Activate whatever is under the cursor or selection.
    Activate,
    /// Arrow key navigation.
    Navigate(KeyCode),
    /// Switch focus between the board and the move list.
    SwitchFocus,
    /// Flip the move list order.
    ToggleOrder,
    /// Start over with an empty board.
    NewGame,
}

/// Maps a key to an action, if it has one.
#[instrument]
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            Position::from_index(index).map(Action::Place)
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::Navigate(key))
        }
        KeyCode::Tab | KeyCode::BackTab => Some(Action::SwitchFocus),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::ToggleOrder),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Action::NewGame),
        _ => None,
    }
}

/// Moves the board cursor one square in the arrow's direction.
///
/// The cursor stops at the edges of the board.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_keys_place_marks() {
        assert_eq!(
            action_for(KeyCode::Char('1')),
            Some(Action::Place(Position::TopLeft))
        );
        assert_eq!(
            action_for(KeyCode::Char('9')),
            Some(Action::Place(Position::BottomRight))
        );
        assert_eq!(action_for(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(action_for(KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(action_for(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(action_for(KeyCode::Enter), Some(Action::Activate));
        assert_eq!(action_for(KeyCode::Tab), Some(Action::SwitchFocus));
        assert_eq!(action_for(KeyCode::Char('s')), Some(Action::ToggleOrder));
        assert_eq!(action_for(KeyCode::Char('n')), Some(Action::NewGame));
        assert_eq!(
            action_for(KeyCode::Left),
            Some(Action::Navigate(KeyCode::Left))
        );
        assert_eq!(action_for(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Enter), Position::Center);
    }
}
