//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). The engine composes
//! them; invariants reuse them to cross-check engine state.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, check_winner, winning_line};
