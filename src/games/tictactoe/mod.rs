//! Tic-tac-toe: board types, rules, and the game engine.

mod action;
mod engine;
mod position;
mod types;
mod view;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveOutcome, RejectReason};
pub use engine::GameEngine;
pub use position::{Position, PositionError};
pub use types::{Board, GameStatus, Player, Square, StatusMessage};
pub use view::{RecordingView, View, ViewCommand};

/// Alias for clarity when talking about the symbol placed in a cell.
pub type Mark = Player;
