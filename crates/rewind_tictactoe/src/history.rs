//! Game state manager: the snapshot history, the current position and the
//! move list display order.

use super::invariants::{InvariantSet, InvariantViolation, TicTacToeInvariants};
use super::position::Position;
use super::rules::{self, Evaluation};
use super::types::{Board, Player};
use super::view::{self, DisplayOrder, GameStatus, MoveEntry};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Snapshots in a history whose board is full: the start board plus 9 moves.
pub const MAX_SNAPSHOTS: usize = 10;

/// What happened to a requested move.
///
/// Ignored moves are UI guards, not errors: the history is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum MoveOutcome {
    /// The move was recorded.
    #[display("{player} played {position}")]
    Played {
        /// Player who moved.
        player: Player,
        /// Square that was marked.
        position: Position,
    },
    /// The square is already occupied in the current snapshot.
    #[display("Square {_0} is already occupied")]
    CellOccupied(Position),
    /// The current snapshot already has a winner.
    #[display("Game is already over")]
    GameOver,
    /// The cell index is outside 0-8.
    #[display("Cell {_0} is off the board")]
    OutOfBounds(usize),
}

impl MoveOutcome {
    /// Returns true if the move was recorded.
    pub fn is_played(&self) -> bool {
        matches!(self, MoveOutcome::Played { .. })
    }
}

/// Error returned by [`GameHistory::jump_to`] and when loading a history.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// Requested position is past the end of the history.
    #[display("Position {requested} out of range (history has {len} snapshots)")]
    PositionOutOfRange {
        /// Position that was requested.
        requested: usize,
        /// Number of snapshots in the history.
        len: usize,
    },
    /// Loaded snapshots break one or more history invariants.
    #[display("Invalid history: {reason}")]
    Invalid {
        /// Descriptions of the violated invariants.
        reason: String,
    },
}

impl From<Vec<InvariantViolation>> for HistoryError {
    fn from(violations: Vec<InvariantViolation>) -> Self {
        let reason = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        HistoryError::Invalid { reason }
    }
}

/// Unchecked wire form of a [`GameHistory`].
#[derive(Deserialize)]
struct HistoryParts {
    snapshots: Vec<Board>,
    current: usize,
    #[serde(default)]
    order: DisplayOrder,
}

impl TryFrom<HistoryParts> for GameHistory {
    type Error = HistoryError;

    fn try_from(parts: HistoryParts) -> Result<Self, Self::Error> {
        let history = Self {
            snapshots: parts.snapshots,
            current: parts.current,
            order: parts.order,
        };
        TicTacToeInvariants::check_all(&history)?;
        Ok(history)
    }
}

/// Sequence of board snapshots with a movable current position.
///
/// Snapshot 0 is the empty board. Playing from a rewound position discards
/// every snapshot after it before appending the new one.
///
/// Deserialized histories are checked against [`TicTacToeInvariants`] and
/// rejected if any invariant fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HistoryParts")]
pub struct GameHistory {
    snapshots: Vec<Board>,
    current: usize,
    order: DisplayOrder,
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl GameHistory {
    /// Creates a history holding only the start snapshot.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(DisplayOrder::default())
    }

    /// Creates a fresh history with the given move list order.
    #[instrument]
    pub fn with_order(order: DisplayOrder) -> Self {
        Self {
            snapshots: vec![Board::new()],
            current: 0,
            order,
        }
    }

    /// Builds a history from raw parts without any checks.
    #[cfg(test)]
    pub(crate) fn from_parts(snapshots: Vec<Board>, current: usize) -> Self {
        Self {
            snapshots,
            current,
            order: DisplayOrder::default(),
        }
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Number of snapshots, including the start board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the start snapshot is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the snapshot being displayed.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Move list display order.
    pub fn order(&self) -> DisplayOrder {
        self.order
    }

    /// Snapshot at the current position.
    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.current]
    }

    /// Player whose turn it is at the current position.
    pub fn next_player(&self) -> Player {
        Player::at_position(self.current)
    }

    /// Returns true if X moves next.
    pub fn x_is_next(&self) -> bool {
        self.next_player() == Player::X
    }

    /// Win detector result for the current snapshot.
    pub fn evaluation(&self) -> Evaluation {
        rules::evaluate(self.current_board())
    }

    /// Status of the current snapshot.
    ///
    /// A history holding [`MAX_SNAPSHOTS`] snapshots without a winner at the
    /// current position is a draw, also while browsing earlier snapshots.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn status(&self) -> GameStatus {
        let status = if let Some(winner) = self.evaluation().winner {
            GameStatus::Won(winner)
        } else if self.snapshots.len() == MAX_SNAPSHOTS {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: self.next_player(),
            }
        };
        debug!(%status, "Derived status");
        status
    }

    /// Returns true if the current snapshot has a winner or the history is full.
    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// Whether the order toggle should be offered to the user.
    pub fn can_toggle_order(&self) -> bool {
        self.snapshots.len() > 1
    }

    /// Move list entries in display order.
    #[instrument(skip(self), fields(len = self.snapshots.len(), order = %self.order))]
    pub fn moves(&self) -> Vec<MoveEntry> {
        let len = self.snapshots.len();
        let mut entries: Vec<MoveEntry> = self
            .snapshots
            .iter()
            .enumerate()
            .map(|(position, board)| MoveEntry {
                position,
                description: view::describe_move(position, self.current, len, board.last_move()),
                is_current: position == self.current,
            })
            .collect();

        if self.order == DisplayOrder::Descending {
            entries.reverse();
        }
        entries
    }

    /// Marks `position` for the player to move.
    ///
    /// Occupied squares and finished games are ignored. Otherwise all snapshots
    /// after the current one are discarded and the new board is appended.
    #[instrument(skip(self), fields(current = self.current, len = self.snapshots.len()))]
    pub fn apply_move(&mut self, position: Position) -> MoveOutcome {
        let board = self.current_board();

        if !board.is_empty(position) {
            debug!(%position, "Ignoring move on occupied square");
            return MoveOutcome::CellOccupied(position);
        }
        if rules::check_winner(board).is_some() {
            debug!(%position, "Ignoring move after a win");
            return MoveOutcome::GameOver;
        }

        let player = self.next_player();
        let next = board.with_move(position, player);

        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(next);
        self.current = self.snapshots.len() - 1;

        info!(%player, %position, current = self.current, "Move played");
        debug_assert!(TicTacToeInvariants::check_all(self).is_ok());

        MoveOutcome::Played { player, position }
    }

    /// Index form of [`GameHistory::apply_move`].
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, index: usize) -> MoveOutcome {
        match Position::from_index(index) {
            Some(position) => self.apply_move(position),
            None => {
                debug!(index, "Ignoring move off the board");
                MoveOutcome::OutOfBounds(index)
            }
        }
    }

    /// Moves the current position without touching the snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::PositionOutOfRange`] if `position` is not a
    /// valid snapshot index; the current position is left unchanged.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, position: usize) -> Result<(), HistoryError> {
        if position >= self.snapshots.len() {
            let err = HistoryError::PositionOutOfRange {
                requested: position,
                len: self.snapshots.len(),
            };
            warn!(error = %err, "Rejected jump");
            return Err(err);
        }

        self.current = position;
        info!(current = self.current, "Jumped to snapshot");
        Ok(())
    }

    /// Flips the move list order.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggle();
        info!(order = %self.order, "Toggled move order");
    }

    /// Starts a new game, keeping the display order.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.snapshots = vec![Board::new()];
        self.current = 0;
        info!("Game reset");
    }
}
