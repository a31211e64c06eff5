//! Win condition checking
//!
//! Under Renju rules Black wins only with exactly five in a row; six or more
//! is an overline and is caught by the forbidden-move check first. White, and
//! both colors under freestyle rules, win with five or more.

use super::line::{scan_all, LineScan};
use super::pattern::{Pattern, PatternMatch};
use crate::board::{Board, BoardView, Pos, Stone};
use crate::config::RuleSet;

/// Whether a run of `length` wins for `stone`
#[inline]
pub fn is_winning_length(length: usize, stone: Stone, ruleset: RuleSet) -> bool {
    match (ruleset, stone) {
        (RuleSet::Renju, Stone::Black) => length == 5,
        _ => length >= 5,
    }
}

fn five_match(scan: LineScan) -> PatternMatch {
    PatternMatch::new(Pattern::Five, scan.axis, scan.stones.into_iter().collect())
}

/// Winning line through `pos`, if `stone` standing there completes one.
///
/// When several axes win at once the first in
/// [`Axis::ALL`](super::line::Axis::ALL) order is returned.
pub fn five_at(
    view: &BoardView<'_>,
    pos: Pos,
    stone: Stone,
    ruleset: RuleSet,
) -> Option<PatternMatch> {
    scan_all(view, pos, stone)
        .into_iter()
        .find(|scan| is_winning_length(scan.length, stone, ruleset))
        .map(five_match)
}

/// Fast five check at a specific position of the committed board.
///
/// `pos` counts as `stone` whether or not it has been placed yet.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, stone: Stone, ruleset: RuleSet) -> bool {
    five_at(&board.view(), pos, stone, ruleset).is_some()
}

/// Find a winning line for `stone` anywhere on the committed board
pub fn find_five_positions(board: &Board, stone: Stone, ruleset: RuleSet) -> Option<PatternMatch> {
    let view = board.view();
    board
        .stones(stone)
        .iter_ones()
        .find_map(|pos| five_at(&view, pos, stone, ruleset))
}

/// Check for a winner on the committed board
pub fn check_winner(board: &Board, ruleset: RuleSet) -> Option<Stone> {
    [Stone::Black, Stone::White]
        .into_iter()
        .find(|&stone| find_five_positions(board, stone, ruleset).is_some())
}

/// Every winning line through `pos`, for highlighting double wins
pub fn fives_at(
    view: &BoardView<'_>,
    pos: Pos,
    stone: Stone,
    ruleset: RuleSet,
) -> Vec<PatternMatch> {
    scan_all(view, pos, stone)
        .into_iter()
        .filter(|scan| is_winning_length(scan.length, stone, ruleset))
        .map(five_match)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::line::Axis;

    fn line(board: &mut Board, stone: Stone, cells: impl IntoIterator<Item = (u8, u8)>) {
        for (r, c) in cells {
            board.place(Pos::new(r, c), stone).unwrap();
        }
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new();
        line(&mut board, Stone::Black, (0..5).map(|i| (9, i)));
        assert!(has_five_at_pos(&board, Pos::new(9, 2), Stone::Black, RuleSet::Renju));
        assert_eq!(check_winner(&board, RuleSet::Renju), Some(Stone::Black));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new();
        line(&mut board, Stone::White, (0..5).map(|i| (i, 9)));
        assert_eq!(check_winner(&board, RuleSet::Renju), Some(Stone::White));
    }

    #[test]
    fn test_diagonal_sw_five() {
        let mut board = Board::new();
        // Diagonal from (4, 8) to (8, 4)
        line(&mut board, Stone::White, (0..5).map(|i| (4 + i, 8 - i)));
        let five = find_five_positions(&board, Stone::White, RuleSet::Renju).unwrap();
        assert_eq!(five.axis, Axis::AntiDiagonal);
        assert_eq!(five.points.len(), 5);
    }

    #[test]
    fn test_five_at_corner() {
        let mut board = Board::new();
        line(&mut board, Stone::Black, (0..5).map(|i| (10 + i, 10 + i)));
        assert_eq!(check_winner(&board, RuleSet::Renju), Some(Stone::Black));
    }

    #[test]
    fn test_black_six_not_a_win() {
        let mut board = Board::new();
        line(&mut board, Stone::Black, (0..6).map(|i| (9, i)));
        assert!(!has_five_at_pos(&board, Pos::new(9, 0), Stone::Black, RuleSet::Renju));
        assert_eq!(check_winner(&board, RuleSet::Renju), None);
        // Freestyle accepts it
        assert_eq!(check_winner(&board, RuleSet::Freestyle), Some(Stone::Black));
    }

    #[test]
    fn test_white_six_wins() {
        let mut board = Board::new();
        line(&mut board, Stone::White, (0..6).map(|i| (9, i)));
        assert_eq!(check_winner(&board, RuleSet::Renju), Some(Stone::White));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = Board::new();
        line(&mut board, Stone::Black, (0..4).map(|i| (9, i)));
        assert!(!has_five_at_pos(&board, Pos::new(9, 3), Stone::Black, RuleSet::Renju));
        assert_eq!(check_winner(&board, RuleSet::Renju), None);
    }

    #[test]
    fn test_hypothetical_five() {
        let mut board = Board::new();
        line(&mut board, Stone::Black, [(7, 3), (7, 4), (7, 6), (7, 7)]);
        let pos = Pos::new(7, 5);
        let view = board.with_hypothetical(pos, Stone::Black).unwrap();
        let five = five_at(&view, pos, Stone::Black, RuleSet::Renju).unwrap();
        assert_eq!(five.pattern, Pattern::Five);
        assert!(five.points.contains(&pos));
        // The committed board is untouched
        assert_eq!(check_winner(&board, RuleSet::Renju), None);
    }

    #[test]
    fn test_two_winning_axes() {
        let mut board = Board::new();
        line(&mut board, Stone::White, [(7, 3), (7, 4), (7, 5), (7, 6)]);
        line(&mut board, Stone::White, [(3, 7), (4, 7), (5, 7), (6, 7)]);
        let pos = Pos::new(7, 7);
        let view = board.with_hypothetical(pos, Stone::White).unwrap();
        let axes: Vec<Axis> = fives_at(&view, pos, Stone::White, RuleSet::Renju)
            .into_iter()
            .map(|five| five.axis)
            .collect();
        assert_eq!(axes, vec![Axis::Horizontal, Axis::Vertical]);
    }

    #[test]
    fn test_empty_not_five() {
        let board = Board::new();
        assert_eq!(check_winner(&board, RuleSet::Renju), None);
        assert!(find_five_positions(&board, Stone::Black, RuleSet::Freestyle).is_none());
    }
}
