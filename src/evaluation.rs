//! Static evaluation of a position from one side's point of view

use crate::board::{windows, Board, Piece};
use crate::search::Score;
use crate::{CENTER_COLUMN, ROWS, WINDOW_LENGTH};

/// Bonus for each own piece in the center column
pub const CENTER_BONUS: Score = 3;

/// Scores a single window of cells for `piece`
///
/// Own lines are rewarded by length (four: 100, open three: 5, open two: 2),
/// and an open three of the opponent costs 4 on top of that.
pub fn evaluate_window(window: &[Piece; WINDOW_LENGTH], piece: Piece) -> Score {
    let opponent = piece.opponent();
    let own = window.iter().filter(|&&cell| cell == piece).count();
    let theirs = window.iter().filter(|&&cell| cell == opponent).count();
    let empty = window.iter().filter(|cell| cell.is_empty()).count();

    let mut score = match (own, empty) {
        (4, _) => 100,
        (3, 1) => 5,
        (2, 2) => 2,
        _ => 0,
    };

    if theirs == 3 && empty == 1 {
        score -= 4;
    }

    score
}

/// Leaf value of `board` for `piece`: center column bonus plus every window
pub fn score_position(board: &Board, piece: Piece) -> Score {
    let center_count = (0..ROWS)
        .filter(|&row| board.get(row, CENTER_COLUMN) == piece)
        .count() as Score;

    let windows_score: Score = windows()
        .iter()
        .map(|window| evaluate_window(&board.window(window), piece))
        .sum();

    center_count * CENTER_BONUS + windows_score
}
