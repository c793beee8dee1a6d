//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Rules are separated from board
//! storage so the history manager and the renderer can both consult them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Evaluation, LINES, check_winner, evaluate};
