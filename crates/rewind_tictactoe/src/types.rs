//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the player to move at a given history position.
    ///
    /// Even positions belong to X, odd positions to O.
    pub fn at_position(position: usize) -> Self {
        if position % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// Row/column label of the move that produced a board, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("({row}, {col})")]
pub struct MoveLabel {
    /// Row of the move (1-3).
    pub row: u8,
    /// Column of the move (1-3).
    pub col: u8,
}

impl From<Position> for MoveLabel {
    fn from(position: Position) -> Self {
        Self {
            row: position.row() + 1,
            col: position.col() + 1,
        }
    }
}

/// 3x3 tic-tac-toe board snapshot.
///
/// Boards are values: a move produces a new board through [`Board::with_move`]
/// and leaves the source board untouched, so snapshots kept in a history stay
/// independent of each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
    /// Label of the move that produced this board.
    last_move: Option<MoveLabel>,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the label of the move that produced this board.
    pub fn last_move(&self) -> Option<MoveLabel> {
        self.last_move
    }

    /// Builds the board that results from `player` marking `pos`.
    ///
    /// The square is overwritten unconditionally; callers check occupancy.
    #[instrument(skip(self))]
    pub fn with_move(&self, pos: Position, player: Player) -> Self {
        let mut next = self.clone();
        next.set(pos, Square::Occupied(player));
        next.last_move = Some(MoveLabel::from(pos));
        next
    }
}
