//! Game engine for tic-tac-toe.
//!
//! [`GameEngine`] owns the whole game state and is the only thing that
//! mutates it. Move and reset requests come in from a view; render commands
//! go back out through the [`View`] passed to each call.
//!
//! Invalid requests are ignored, never raised: an out-of-range index, an
//! occupied square, or any move after the game ended leaves the state and
//! the view untouched and comes back as [`MoveOutcome::Rejected`].

use super::action::{Move, MoveOutcome, RejectReason};
use super::invariants::{EngineInvariants, InvariantSet};
use super::rules;
use super::view::View;
use super::{Board, GameStatus, Player, Position, Square, StatusMessage};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(super) board: Board,
    pub(super) current_player: Player,
    pub(super) status: GameStatus,
    pub(super) history: Vec<Move>,
    status_message: String,
}

impl GameEngine {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
            status_message: StatusMessage::Turn(Player::X).to_string(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next accepted move places.
    ///
    /// After a win this is still the winner; the turn never passes on a
    /// terminal move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the moves accepted since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the message produced by the last transition.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns the line that won the game, if it has been won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        match self.status {
            GameStatus::Won(_) => rules::winning_line(&self.board),
            _ => None,
        }
    }

    /// Returns the positions a move would be accepted at.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status.is_terminal() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Applies a move at the board index (0-8) for the current player.
    #[instrument(skip(self, view), fields(player = %self.current_player))]
    pub fn apply_move<V: View + ?Sized>(&mut self, index: usize, view: &mut V) -> MoveOutcome {
        match Position::from_index(index) {
            Some(position) => self.apply_position(position, view),
            None => Self::reject(RejectReason::OutOfBounds(index)),
        }
    }

    /// Applies a move at the position for the current player.
    #[instrument(skip(self, view), fields(player = %self.current_player))]
    pub fn apply_position<V: View + ?Sized>(
        &mut self,
        position: Position,
        view: &mut V,
    ) -> MoveOutcome {
        if self.status.is_terminal() {
            return Self::reject(RejectReason::GameOver);
        }
        if !self.board.is_empty(position) {
            return Self::reject(RejectReason::Occupied(position));
        }

        let player = self.current_player;
        self.board.set(position, Square::Occupied(player));
        self.history.push(Move::new(player, position));
        view.render_mark(position, player);

        let outcome = self.evaluate();
        view.set_status_text(&self.status_message);

        debug_assert!(
            EngineInvariants::check_all(&*self).is_ok(),
            "engine invariants violated after {:?}: {:?}",
            position,
            EngineInvariants::check_all(&*self)
        );

        outcome
    }

    /// Restores the initial state and clears the view.
    #[instrument(skip(self, view), fields(moves = self.history.len()))]
    pub fn reset<V: View + ?Sized>(&mut self, view: &mut V) {
        *self = Self::new();
        view.clear_board();
        view.set_status_text(&self.status_message);
        info!("Game reset");
    }

    /// Win check, then draw check, then pass the turn.
    fn evaluate(&mut self) -> MoveOutcome {
        let mover = self.current_player;

        let outcome = if rules::check_winner(&self.board).is_some() {
            self.status = GameStatus::Won(mover);
            info!(winner = %mover, board = %self.board, "Game won");
            MoveOutcome::Won(mover)
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Drawn;
            info!(board = %self.board, "Game drawn");
            MoveOutcome::Drawn
        } else {
            self.current_player = mover.opponent();
            MoveOutcome::Continued(self.current_player)
        };

        self.status_message = StatusMessage::for_state(self.status, self.current_player).to_string();
        outcome
    }

    fn reject(reason: RejectReason) -> MoveOutcome {
        debug!(%reason, "Move ignored");
        MoveOutcome::Rejected(reason)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::super::view::{RecordingView, ViewCommand};
    use super::*;

    fn play(engine: &mut GameEngine, moves: &[usize]) -> Vec<MoveOutcome> {
        moves.iter().map(|&i| engine.apply_move(i, &mut ())).collect()
    }

    #[test]
    fn test_accepted_move_emits_mark_then_status() {
        let mut engine = GameEngine::new();
        let mut view = RecordingView::new();

        let outcome = engine.apply_move(4, &mut view);

        assert_eq!(outcome, MoveOutcome::Continued(Player::O));
        assert_eq!(
            view.commands(),
            &[
                ViewCommand::RenderMark(Position::Center, Player::X),
                ViewCommand::SetStatusText("Player O's Turn".to_string()),
            ]
        );
    }

    #[test]
    fn test_rejected_move_emits_nothing() {
        let mut engine = GameEngine::new();
        engine.apply_move(4, &mut ());
        let mut view = RecordingView::new();

        let outcome = engine.apply_move(4, &mut view);

        assert_eq!(
            outcome,
            MoveOutcome::Rejected(RejectReason::Occupied(Position::Center))
        );
        assert!(view.commands().is_empty());
    }

    #[test]
    fn test_win_keeps_winner_as_current_player() {
        let mut engine = GameEngine::new();
        let outcomes = play(&mut engine, &[0, 3, 1, 4, 2]);

        assert_eq!(outcomes.last(), Some(&MoveOutcome::Won(Player::X)));
        assert_eq!(engine.current_player(), Player::X);
        assert_eq!(
            engine.winning_line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
        assert!(engine.valid_moves().is_empty());
    }

    #[test]
    fn test_o_can_win() {
        let mut engine = GameEngine::new();
        let outcomes = play(&mut engine, &[0, 2, 1, 4, 8, 6]);

        assert_eq!(outcomes.last(), Some(&MoveOutcome::Won(Player::O)));
        assert_eq!(engine.status_message(), "Player O Wins!");
    }

    #[test]
    fn test_reset_clears_then_sets_status() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[0, 1]);
        let mut view = RecordingView::new();

        engine.reset(&mut view);

        assert_eq!(
            view.commands(),
            &[
                ViewCommand::ClearBoard,
                ViewCommand::SetStatusText("Player X's Turn".to_string()),
            ]
        );
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_history_records_marks() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[4, 0]);
        assert_eq!(
            engine.history(),
            &[
                Move::new(Player::X, Position::Center),
                Move::new(Player::O, Position::TopLeft),
            ]
        );
    }
}
