//! Render commands the engine sends to its view.
//!
//! The engine never touches a rendering surface. Anything that can show a
//! mark, a status line and an empty grid implements [`View`].

use super::{Player, Position};
use tracing::instrument;

/// Receiver for engine render commands.
pub trait View {
    /// Places a player's mark at a board position.
    fn render_mark(&mut self, position: Position, player: Player);

    /// Replaces the status line.
    fn set_status_text(&mut self, message: &str);

    /// Erases every mark from the grid.
    fn clear_board(&mut self);
}

/// Headless view: drops every command.
impl View for () {
    fn render_mark(&mut self, _position: Position, _player: Player) {}

    fn set_status_text(&mut self, _message: &str) {}

    fn clear_board(&mut self) {}
}

impl<V: View + ?Sized> View for &mut V {
    fn render_mark(&mut self, position: Position, player: Player) {
        (**self).render_mark(position, player);
    }

    fn set_status_text(&mut self, message: &str) {
        (**self).set_status_text(message);
    }

    fn clear_board(&mut self) {
        (**self).clear_board();
    }
}

/// A single render command as emitted by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    /// `render_mark(position, player)`.
    RenderMark(Position, Player),
    /// `set_status_text(message)`.
    SetStatusText(String),
    /// `clear_board()`.
    ClearBoard,
}

/// View that records every command in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    commands: Vec<ViewCommand>,
}

impl RecordingView {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands received so far.
    pub fn commands(&self) -> &[ViewCommand] {
        &self.commands
    }

    /// Drains the recorded commands.
    pub fn take(&mut self) -> Vec<ViewCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Most recent status text, if any was set.
    pub fn last_status(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|cmd| match cmd {
            ViewCommand::SetStatusText(message) => Some(message.as_str()),
            _ => None,
        })
    }
}

impl View for RecordingView {
    #[instrument(skip(self))]
    fn render_mark(&mut self, position: Position, player: Player) {
        self.commands.push(ViewCommand::RenderMark(position, player));
    }

    #[instrument(skip(self))]
    fn set_status_text(&mut self, message: &str) {
        self.commands
            .push(ViewCommand::SetStatusText(message.to_string()));
    }

    #[instrument(skip(self))]
    fn clear_board(&mut self) {
        self.commands.push(ViewCommand::ClearBoard);
    }
}
