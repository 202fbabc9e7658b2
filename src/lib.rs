//! Tic-tac-toe game engine with a terminal grid front-end.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns board, turn and status, and turns move
//!   and reset requests into render commands.
//! - **View**: [`View`] is the narrow interface the engine draws through.
//!   [`RecordingView`] captures commands; `()` discards them.
//! - **TUI**: [`run_tui`] drives the engine from a ratatui grid.
//!
//! # Example
//!
//! ```
//! use tictactoe_grid::{GameEngine, MoveOutcome, Player, RecordingView};
//!
//! let mut engine = GameEngine::new();
//! let mut view = RecordingView::new();
//!
//! assert_eq!(engine.apply_move(4, &mut view), MoveOutcome::Continued(Player::O));
//! assert_eq!(engine.status_message(), "Player O's Turn");
//! assert!(!engine.apply_move(4, &mut view).is_accepted());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, TuiConfig};

// Crate-level exports - Terminal front-end
pub use tui::{App, TerminalView, run_tui};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, GameEngine, GameStatus, Mark, Move, MoveOutcome, Player, Position, PositionError,
    RecordingView, RejectReason, Square, StatusMessage, View, ViewCommand, invariants, rules,
};
