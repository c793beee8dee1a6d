//! Tic-tac-toe with a rewindable move history.
//!
//! This crate holds the pure game logic behind a tic-tac-toe front-end:
//!
//! - **Rules**: the win detector ([`evaluate`]) and draw helpers
//! - **History**: [`GameHistory`] owns the board snapshots, the current
//!   position and the move list order, and exposes the three user operations
//!   ([`GameHistory::apply_move`], [`GameHistory::jump_to`],
//!   [`GameHistory::toggle_order`])
//! - **View**: display-ready values derived from the history
//!   ([`GameStatus`], [`MoveEntry`])
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameHistory, GameStatus, Player};
//!
//! let mut game = GameHistory::new();
//! for cell in [0, 4, 1, 3, 2] {
//!     game.apply_index(cell);
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//! assert_eq!(game.status().to_string(), "Winner: X");
//!
//! game.jump_to(2).unwrap();
//! assert_eq!(game.status().to_string(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod history;
mod position;
mod types;
mod view;

pub mod invariants;
pub mod rules;

pub use history::{GameHistory, HistoryError, MAX_SNAPSHOTS, MoveOutcome};
pub use position::Position;
pub use rules::{Evaluation, check_winner, evaluate, is_draw, is_full};
pub use types::{Board, MoveLabel, Player, Square};
pub use view::{DisplayOrder, GameStatus, MoveEntry, describe_move};
