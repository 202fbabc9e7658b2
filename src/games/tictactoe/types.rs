//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the player holding this square, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (pos, square) in self.squares.iter().enumerate() {
            match square {
                Square::Empty => write!(f, "{}", pos + 1)?,
                Square::Occupied(player) => write!(f, "{}", player)?,
            }
            if pos % 3 < 2 {
                write!(f, "|")?;
            } else if pos < 8 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended with a full board and no winner.
    Drawn,
}

impl GameStatus {
    /// Returns true once the game has been won or drawn.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Status line text shown to the players.
///
/// The rendered strings are part of the view contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum StatusMessage {
    /// Next player to move.
    #[display("Player {_0}'s Turn")]
    Turn(Player),
    /// Game won by the player.
    #[display("Player {_0} Wins!")]
    Win(Player),
    /// Board filled with no winner.
    #[display("Game Draw!")]
    Draw,
}

impl StatusMessage {
    /// Picks the message for a status and the player to move.
    pub fn for_state(status: GameStatus, to_move: Player) -> Self {
        match status {
            GameStatus::InProgress => StatusMessage::Turn(to_move),
            GameStatus::Won(winner) => StatusMessage::Win(winner),
            GameStatus::Drawn => StatusMessage::Draw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_literals() {
        assert_eq!(StatusMessage::Turn(Player::X).to_string(), "Player X's Turn");
        assert_eq!(StatusMessage::Turn(Player::O).to_string(), "Player O's Turn");
        assert_eq!(StatusMessage::Win(Player::X).to_string(), "Player X Wins!");
        assert_eq!(StatusMessage::Win(Player::O).to_string(), "Player O Wins!");
        assert_eq!(StatusMessage::Draw.to_string(), "Game Draw!");
    }

    #[test]
    fn test_board_display() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::Center, Square::Occupied(Player::O));
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent().opponent(), Player::O);
    }
}
