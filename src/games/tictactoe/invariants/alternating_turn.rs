//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::engine::GameEngine;
use super::super::{GameStatus, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... with X first. While the game is
/// in progress the player to move follows from history parity; once it has
/// ended, the player to move is whoever made the last move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        let alternates = history.iter().enumerate().all(|(i, mov)| {
            let expected = if i % 2 == 0 { Player::X } else { Player::O };
            mov.player == expected && engine.board().get(mov.position).player() == Some(expected)
        });
        if !alternates {
            return false;
        }

        match (engine.status(), history.last()) {
            (GameStatus::InProgress, _) => {
                let expected_next = if history.len() % 2 == 0 {
                    Player::X
                } else {
                    Player::O
                };
                engine.current_player() == expected_next
            }
            (_, Some(last)) => engine.current_player() == last.player,
            (_, None) => false,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
