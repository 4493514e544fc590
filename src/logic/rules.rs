use crate::logic::board::{Board, Marker};

/// The 8 winning combinations, scanned in this fixed order: rows
/// top-to-bottom, columns left-to-right, then the two diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the marker occupying the first fully-matched line, if any.
/// Well-formed alternating play admits at most one winner; this is not
/// enforced defensively.
#[must_use]
pub fn winner(board: &Board) -> Option<Marker> {
    for &[a, b, c] in &WINNING_LINES {
        if let Some(marker) = board.get(a) {
            if board.get(b) == Some(marker) && board.get(c) == Some(marker) {
                return Some(marker);
            }
        }
    }
    None
}

/// Re-runs the same fixed-order scan and returns the first complete
/// line's indices, for highlighting. `None` when there is no winner.
#[must_use]
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    WINNING_LINES.iter().copied().find(|&[a, b, c]| {
        board.get(a).is_some() && board.get(a) == board.get(b) && board.get(b) == board.get(c)
    })
}
