//! Status consistency invariant: the recorded status matches the board.

use super::super::engine::GameEngine;
use super::super::{GameStatus, rules};
use super::Invariant;

/// Invariant: Status agrees with the rules applied to the board.
///
/// A line on the board means the game is won by the mover; a full board
/// with no line means a draw; anything else is still in progress.
pub struct StatusConsistentInvariant;

impl Invariant<GameEngine> for StatusConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        let expected = match rules::check_winner(board) {
            Some(winner) => GameStatus::Won(winner),
            None if rules::is_full(board) => GameStatus::Drawn,
            None => GameStatus::InProgress,
        };
        engine.status() == expected
    }

    fn description() -> &'static str {
        "Game status matches win and draw rules"
    }
}
