//! Terminal-side view state.

use crate::games::tictactoe::{Player, Position, View};
use tracing::{instrument, trace};

/// What the terminal grid currently shows.
///
/// Holds only what the engine told it to draw: marks per cell and the
/// status line. The UI renders from here, never from the engine's board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminalView {
    cells: [Option<Player>; 9],
    status: String,
}

impl TerminalView {
    /// Creates a blank grid with no status text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark displayed at the position, if any.
    pub fn cell(&self, position: Position) -> Option<Player> {
        self.cells[position.to_index()]
    }

    /// Current status line.
    pub fn status(&self) -> &str {
        &self.status
    }
}

impl View for TerminalView {
    #[instrument(skip(self))]
    fn render_mark(&mut self, position: Position, player: Player) {
        self.cells[position.to_index()] = Some(player);
    }

    #[instrument(skip(self))]
    fn set_status_text(&mut self, message: &str) {
        message.clone_into(&mut self.status);
    }

    #[instrument(skip(self))]
    fn clear_board(&mut self) {
        trace!("Clearing displayed marks");
        self.cells = [None; 9];
    }
}
