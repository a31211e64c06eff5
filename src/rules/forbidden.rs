//! Forbidden moves for Black
//!
//! Black may not make an overline, a double-four or a double-three. Checks run
//! in that order and the first hit decides the reason. A five formed by a
//! forbidden move does not count; the win is only looked at afterwards.
//!
//! White has no forbidden moves.

use serde::{Deserialize, Serialize};

use super::line::scan_all;
use super::pattern::{all_fours, all_open_threes, classify_run, Pattern, PatternMatch};
use crate::board::{Board, BoardView, Pos, Stone};
use crate::error::Result;

/// Why a Black move is forbidden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Foul {
    Overline,
    DoubleFour,
    DoubleThree,
}

/// A forbidden move and the patterns that make it so
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForbiddenMove {
    pub foul: Foul,
    pub patterns: Vec<PatternMatch>,
}

/// Check a Black stone standing on `pos` in `view`.
///
/// `depth` bounds the recursive legality check of three extensions; see
/// [`super::pattern::open_threes`].
pub fn find_foul(view: &BoardView<'_>, pos: Pos, depth: u8) -> Option<ForbiddenMove> {
    let runs: Vec<PatternMatch> = scan_all(view, pos, Stone::Black)
        .iter()
        .filter_map(|scan| classify_run(scan, Stone::Black))
        .collect();

    let overlines: Vec<PatternMatch> = runs
        .iter()
        .filter(|m| m.pattern == Pattern::Overline)
        .cloned()
        .collect();
    if !overlines.is_empty() {
        return Some(ForbiddenMove {
            foul: Foul::Overline,
            patterns: overlines,
        });
    }

    let fours = all_fours(view, pos, Stone::Black);
    if fours.len() >= 2 {
        return Some(ForbiddenMove {
            foul: Foul::DoubleFour,
            patterns: fours,
        });
    }

    let threes = all_open_threes(view, pos, Stone::Black, depth);
    if threes.len() >= 2 {
        return Some(ForbiddenMove {
            foul: Foul::DoubleThree,
            patterns: threes,
        });
    }

    None
}

/// Check whether Black may play `pos` on the committed board.
///
/// Fails with `OutOfBounds` or `AlreadyOccupied`; a legal move is `Ok(None)`.
pub fn forbidden_move(board: &Board, pos: Pos, depth: u8) -> Result<Option<ForbiddenMove>> {
    let view = board.with_hypothetical(pos, Stone::Black)?;
    Ok(find_foul(&view, pos, depth))
}

/// Check if a move is valid under Renju rules
///
/// A move is valid if:
/// 1. The position is on the board and empty
/// 2. For Black, it is not forbidden
pub fn is_valid_move(board: &Board, pos: Pos, stone: Stone, depth: u8) -> bool {
    match stone {
        Stone::White => board.is_empty(pos),
        Stone::Black => matches!(forbidden_move(board, pos, depth), Ok(None)),
    }
}
