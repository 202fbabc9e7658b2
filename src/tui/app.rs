//! Application state and key handling.

use super::input::move_cursor;
use super::view::TerminalView;
use crate::config::TuiConfig;
use crate::games::tictactoe::{GameEngine, MoveOutcome, Position, View};
use crossterm::event::KeyCode;
use tracing::{debug, info, instrument};

/// Main application state: the engine plus the grid it draws into.
#[derive(Debug, Clone)]
pub struct App {
    engine: GameEngine,
    view: TerminalView,
    cursor: Position,
    title: String,
    show_cell_numbers: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument(skip(config))]
    pub fn new(config: &TuiConfig) -> Self {
        let engine = GameEngine::new();
        let mut view = TerminalView::new();
        view.set_status_text(engine.status_message());

        Self {
            engine,
            view,
            cursor: Position::Center,
            title: config.title().clone(),
            show_cell_numbers: *config.show_cell_numbers(),
            should_quit: false,
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the grid state.
    pub fn view(&self) -> &TerminalView {
        &self.view
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether empty cells show their shortcut number.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Forwards a cell selection to the engine.
    pub fn select_cell(&mut self, index: usize) -> MoveOutcome {
        let outcome = self.engine.apply_move(index, &mut self.view);
        debug!(index, ?outcome, "Cell selected");
        outcome
    }

    /// Forwards a reset request to the engine.
    pub fn request_reset(&mut self) {
        self.engine.reset(&mut self.view);
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.request_reset(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(position) = Position::from_index(index) {
                    self.cursor = position;
                }
                self.select_cell(index);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.select_cell(self.cursor.to_index());
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameStatus, Player};

    fn app() -> App {
        App::new(&TuiConfig::default())
    }

    #[test]
    fn test_initial_status_shown() {
        let app = app();
        assert_eq!(app.view().status(), "Player X's Turn");
        assert_eq!(app.cursor(), Position::Center);
    }

    #[test]
    fn test_digit_keys_place_marks() {
        let mut app = app();
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('5'));

        assert_eq!(app.view().cell(Position::TopLeft), Some(Player::X));
        assert_eq!(app.view().cell(Position::Center), Some(Player::O));
        assert_eq!(app.view().status(), "Player X's Turn");
    }

    #[test]
    fn test_cursor_and_enter_place_mark() {
        let mut app = app();
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.view().cell(Position::TopLeft), Some(Player::X));
    }

    #[test]
    fn test_reset_key_clears_grid() {
        let mut app = app();
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert_eq!(app.engine().status(), GameStatus::Won(Player::X));
        assert_eq!(app.view().status(), "Player X Wins!");

        app.handle_key(KeyCode::Char('r'));

        assert!(Position::ALL.iter().all(|p| app.view().cell(*p).is_none()));
        assert_eq!(app.view().status(), "Player X's Turn");
        assert_eq!(app.engine().status(), GameStatus::InProgress);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit());
    }
}
