//! Derived, display-ready values for a view renderer.
//!
//! Nothing here is stored by [`GameHistory`](crate::GameHistory); every value
//! is computed from the history on each read.

use super::types::{MoveLabel, Player};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Order in which the move list is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
pub enum DisplayOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl DisplayOrder {
    /// Returns the opposite order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Game status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("Next player: {next}")]
    InProgress {
        /// Player to move.
        next: Player,
    },
    /// Game ended in a win.
    #[display("Winner: {_0}")]
    Won(Player),
    /// Game ended in a draw.
    #[display("It's a draw")]
    Draw,
}

impl GameStatus {
    /// Returns true if no further moves can be played.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History position this entry jumps to.
    pub position: usize,
    /// Text shown for the entry.
    pub description: String,
    /// The current entry is shown as plain text rather than an activator.
    pub is_current: bool,
}

/// Builds the description for the move list entry at `position`.
///
/// `label` is the move label recorded on that snapshot, `len` the number of
/// snapshots in the history.
#[instrument]
pub fn describe_move(
    position: usize,
    current: usize,
    len: usize,
    label: Option<MoveLabel>,
) -> String {
    let is_current = position == current;
    if position == 0 {
        return if len == 1 {
            "Starting the game".to_string()
        } else if is_current {
            "You are at the start".to_string()
        } else {
            "Go to game start".to_string()
        };
    }

    let prefix = if is_current {
        "You are at move"
    } else {
        "Go to move"
    };
    match label {
        Some(label) => format!("{prefix} #{position} > {label}"),
        None => format!("{prefix} #{position}"),
    }
}
