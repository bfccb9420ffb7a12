//! Win detection.

use crate::Board;
use tracing::instrument;

/// Every line that wins when uniformly filled, as 0-based row-major indices.
///
/// Rows and columns exist for any shape. The two diagonals are only
/// produced for square boards.
pub fn lines(height: usize, width: usize) -> Vec<Vec<usize>> {
    let mut lines = Vec::with_capacity(height + width + 2);

    for row in 0..height {
        lines.push((0..width).map(|col| row * width + col).collect());
    }
    for col in 0..width {
        lines.push((0..height).map(|row| row * width + col).collect());
    }

    if height == width && height > 0 {
        let n = width;
        lines.push((0..n).map(|i| i * n + i).collect());
        lines.push((0..n).map(|i| i * n + (n - 1 - i)).collect());
    }

    lines
}

/// Returns the token filling a complete line, if any.
#[instrument(skip(board), fields(height = board.height(), width = board.width()))]
pub fn winning_token(board: &Board) -> Option<&str> {
    let slots = board.slots();

    lines(board.height(), board.width())
        .into_iter()
        .find_map(|line| {
            let first = &slots[*line.first()?];
            if first.is_empty() {
                return None;
            }
            line.iter()
                .all(|&i| slots[i].token() == first.token())
                .then(|| first.token())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    fn board_with(moves: &[usize]) -> Board {
        let x = Player::new("X", "X");
        let mut board = Board::new(3, 3);
        for m in moves {
            assert!(board.write_turn(&x, &m.to_string()));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winning_token(&Board::new(3, 3)), None);
    }

    #[test]
    fn test_winner_every_line() {
        let all = [
            [1, 2, 3],
            [4, 5, 6],
            [7, 8, 9],
            [1, 4, 7],
            [2, 5, 8],
            [3, 6, 9],
            [1, 5, 9],
            [3, 5, 7],
        ];
        for line in all {
            assert_eq!(winning_token(&board_with(&line)), Some("X"), "line {line:?}");
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(winning_token(&board_with(&[1, 2])), None);
        assert_eq!(winning_token(&board_with(&[1, 5, 6])), None);
    }

    #[test]
    fn test_line_count_square() {
        assert_eq!(lines(3, 3).len(), 8);
        assert_eq!(lines(4, 4).len(), 10);
    }

    #[test]
    fn test_non_square_has_no_diagonals() {
        let lines = lines(2, 3);
        assert_eq!(lines.len(), 5);
        assert!(lines.contains(&vec![0, 1, 2]));
        assert!(lines.contains(&vec![2, 5]));
    }

    #[test]
    fn test_anti_diagonal_on_four_by_four() {
        let o = Player::new("O", "O");
        let mut board = Board::new(4, 4);
        for m in ["4", "7", "10"] {
            assert!(board.write_turn(&o, m));
        }
        assert_eq!(winning_token(&board), None);
        assert!(board.write_turn(&o, "13"));
        assert_eq!(winning_token(&board), Some("O"));
    }
}
