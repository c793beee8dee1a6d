//! Application state and event handling.

use crossterm::event::KeyCode;
use rewind_tictactoe::{DisplayOrder, GameHistory, MoveEntry, MoveOutcome, Position};
use tracing::{debug, info, instrument, warn};

use crate::input::{self, Action};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the move list selection.
    History,
}

impl Focus {
    /// Returns the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameHistory,
    cursor: Position,
    focus: Focus,
    /// Row of the move list under the selection, in display order.
    selected: usize,
    feedback: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application with the given move list order.
    #[instrument]
    pub fn new(order: DisplayOrder) -> Self {
        Self {
            game: GameHistory::with_order(order),
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
            feedback: None,
            should_quit: false,
        }
    }

    /// Gets the game history.
    pub fn game(&self) -> &GameHistory {
        &self.game
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Gets the selected move list row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Message explaining why the last input was ignored.
    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(action) = input::action_for(key) {
            self.dispatch(action);
        }
    }

    /// Applies a decoded action to the game.
    #[instrument(skip(self), fields(focus = ?self.focus, current = self.game.current()))]
    pub fn dispatch(&mut self, action: Action) {
        debug!(?action, "Dispatching action");
        self.feedback = None;

        match action {
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Action::Place(position) => self.place(position),
            Action::Activate => match self.focus {
                Focus::Board => self.place(self.cursor),
                Focus::History => self.jump_to_selected(),
            },
            Action::Navigate(key) => match self.focus {
                Focus::Board => self.cursor = input::move_cursor(self.cursor, key),
                Focus::History => self.move_selection(key),
            },
            Action::SwitchFocus => {
                self.focus = self.focus.toggle();
                self.select_current();
            }
            Action::ToggleOrder => {
                if self.game.can_toggle_order() {
                    self.game.toggle_order();
                    self.selected = self.game.len() - 1 - self.selected;
                } else {
                    debug!("Order toggle disabled on a fresh game");
                }
            }
            Action::NewGame => {
                self.game.reset();
                self.selected = 0;
                self.focus = Focus::Board;
            }
        }
    }

    fn place(&mut self, position: Position) {
        self.cursor = position;
        match self.game.apply_move(position) {
            MoveOutcome::Played { .. } => self.select_current(),
            ignored => self.feedback = Some(ignored.to_string()),
        }
    }

    fn jump_to_selected(&mut self) {
        let Some(entry) = self.game.moves().into_iter().nth(self.selected) else {
            return;
        };
        if entry.is_current {
            return;
        }
        if let Err(e) = self.game.jump_to(entry.position) {
            warn!(error = %e, "Jump failed");
            self.feedback = Some(e.to_string());
        }
    }

    fn move_selection(&mut self, key: KeyCode) {
        let last = self.game.len() - 1;
        self.selected = match key {
            KeyCode::Up => self.selected.saturating_sub(1),
            KeyCode::Down => (self.selected + 1).min(last),
            _ => self.selected,
        };
    }

    /// Points the selection at the current move list entry.
    fn select_current(&mut self) {
        self.selected = self
            .game
            .moves()
            .iter()
            .position(|entry: &MoveEntry| entry.is_current)
            .unwrap_or(0);
    }
}
