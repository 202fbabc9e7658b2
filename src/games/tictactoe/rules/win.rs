//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// Every line that wins the game.
///
/// Evaluated in this order: rows top to bottom, columns left to right,
/// then the two diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line, in [`WINNING_LINES`] order, held entirely by one player.
#[instrument]
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    WINNING_LINES.into_iter().find(|&[a, b, c]| {
        let sq = board.get(a);
        sq != Square::Empty && sq == board.get(b) && sq == board.get(c)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|[a, _, _]| board.get(a).player())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(board: &mut Board, player: Player, positions: &[Position]) {
        for pos in positions {
            board.set(*pos, Square::Occupied(player));
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in WINNING_LINES {
            let mut board = Board::new();
            mark(&mut board, Player::O, &line);
            assert_eq!(check_winner(&board), Some(Player::O), "line {:?}", line);
            assert_eq!(winning_line(&board), Some(line));
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = Board::new();
        mark(&mut board, Player::X, &[Position::TopLeft, Position::TopCenter]);
        mark(&mut board, Player::O, &[Position::TopRight]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_row_reported_before_column() {
        // X fills the top row and the left column; the row is declared first.
        let mut board = Board::new();
        mark(
            &mut board,
            Player::X,
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
        );
        assert_eq!(winning_line(&board), Some(WINNING_LINES[0]));
    }

    #[test]
    fn test_column_reported_before_diagonal() {
        let mut board = Board::new();
        mark(
            &mut board,
            Player::X,
            &[
                Position::TopLeft,
                Position::MiddleLeft,
                Position::BottomLeft,
                Position::Center,
                Position::BottomRight,
            ],
        );
        assert_eq!(winning_line(&board), Some(WINNING_LINES[3]));
    }
}
