//! Move records and move outcomes.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move request left the game untouched.
///
/// These are not errors: the engine ignores the request and reports why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RejectReason {
    /// The index does not name a board cell.
    #[display("Index {_0} is outside the board")]
    OutOfBounds(usize),

    /// The game has been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    Occupied(Position),
}

/// Result of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Ignored; no state changed and no view command was emitted.
    Rejected(RejectReason),
    /// Accepted; the game goes on with this player to move.
    Continued(Player),
    /// Accepted; the mover completed a line.
    Won(Player),
    /// Accepted; the board is full with no line.
    Drawn,
}

impl MoveOutcome {
    /// Returns true if the move was applied.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MoveOutcome::Rejected(_))
    }

    /// Returns true if the move ended the game.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveOutcome::Won(_) | MoveOutcome::Drawn)
    }
}
