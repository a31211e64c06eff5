//! Shape classification on a single axis
//!
//! Patterns are identified by their point-set. Probing the same physical four
//! from both of its completion cells, or the same three from both of its
//! extension cells, yields one pattern, not two.
//!
//! Every function here expects `view` to already hold `stone` at `pos`.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::forbidden::find_foul;
use super::line::{scan_line, Axis, LineScan};
use crate::board::{BoardView, Pos, Stone};

/// A five containing the candidate ends at most this far from it
const FIVE_REACH: i32 = 4;
/// A straight four containing the candidate ends at most this far from it
const FOUR_REACH: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pattern {
    /// Three stones one move away from a straight four
    OpenThree,
    /// Four stones one move away from a five
    OpenFour,
    Five,
    /// Six or more in a row
    Overline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternMatch {
    pub pattern: Pattern,
    pub axis: Axis,
    pub points: BTreeSet<Pos>,
}

impl PatternMatch {
    pub fn new(pattern: Pattern, axis: Axis, points: BTreeSet<Pos>) -> Self {
        Self {
            pattern,
            axis,
            points,
        }
    }
}

/// Whether a contiguous run of `length` is a five for `stone`.
///
/// Black needs exactly five; White wins with any longer line too.
#[inline]
pub fn makes_five(stone: Stone, length: usize) -> bool {
    match stone {
        Stone::Black => length == 5,
        Stone::White => length >= 5,
    }
}

/// Classify a contiguous run as a five or an overline.
///
/// Shorter runs are not decided by their length alone; see [`fours`] and
/// [`open_threes`].
pub fn classify_run(scan: &LineScan, stone: Stone) -> Option<PatternMatch> {
    let pattern = match (stone, scan.length) {
        (Stone::Black, n) if n >= 6 => Pattern::Overline,
        (_, n) if makes_five(stone, n) => Pattern::Five,
        _ => return None,
    };
    Some(PatternMatch::new(
        pattern,
        scan.axis,
        scan.stones.iter().copied().collect(),
    ))
}

/// A four through the candidate and the cell that completes it
#[derive(Debug)]
struct Completion {
    four: BTreeSet<Pos>,
    at: Pos,
}

fn four_completions(view: &BoardView<'_>, pos: Pos, stone: Stone, axis: Axis) -> Vec<Completion> {
    let mut completions = Vec::new();
    for steps in -FIVE_REACH..=FIVE_REACH {
        if steps == 0 {
            continue;
        }
        let Some(at) = axis.step(pos, steps) else {
            continue;
        };
        // Occupied cells cannot complete anything
        let Ok(probe) = view.with(at, stone) else {
            continue;
        };
        let scan = scan_line(&probe, at, stone, axis);
        if makes_five(stone, scan.length) && scan.stones.contains(&pos) {
            let four = scan.stones.into_iter().filter(|&p| p != at).collect();
            completions.push(Completion { four, at });
        }
    }
    completions
}

fn push_unique(found: &mut Vec<PatternMatch>, candidate: PatternMatch) {
    if !found.iter().any(|m| m.points == candidate.points) {
        found.push(candidate);
    }
}

/// Fours through `pos` on one axis.
///
/// A four is any four stones including `pos` that a single further stone
/// turns into a five. `.BBBB.` is one four; `B.BBB.B` with `pos` in the
/// middle is two.
pub fn fours(view: &BoardView<'_>, pos: Pos, stone: Stone, axis: Axis) -> Vec<PatternMatch> {
    let mut found = Vec::new();
    for completion in four_completions(view, pos, stone, axis) {
        push_unique(
            &mut found,
            PatternMatch::new(Pattern::OpenFour, axis, completion.four),
        );
    }
    found
}

/// Fours through `pos` that can be completed at two different cells
pub fn straight_fours(
    view: &BoardView<'_>,
    pos: Pos,
    stone: Stone,
    axis: Axis,
) -> Vec<BTreeSet<Pos>> {
    let completions = four_completions(view, pos, stone, axis);
    let mut straight: Vec<BTreeSet<Pos>> = Vec::new();
    for (i, c) in completions.iter().enumerate() {
        let twice = completions[i + 1..]
            .iter()
            .any(|other| other.four == c.four && other.at != c.at);
        if twice && !straight.contains(&c.four) {
            straight.push(c.four.clone());
        }
    }
    straight
}

/// Open threes through `pos` on one axis.
///
/// A three is three stones including `pos` that one more stone on the axis
/// turns into a straight four. This covers both `.BBB.` shapes and split
/// shapes such as `.BB.B.`.
///
/// For Black the extending move must itself be legal, checked `depth` levels
/// deep. At depth 0 the extension is assumed legal.
pub fn open_threes(
    view: &BoardView<'_>,
    pos: Pos,
    stone: Stone,
    axis: Axis,
    depth: u8,
) -> Vec<PatternMatch> {
    let mut found = Vec::new();
    for steps in -FOUR_REACH..=FOUR_REACH {
        if steps == 0 {
            continue;
        }
        let Some(ext) = axis.step(pos, steps) else {
            continue;
        };
        let Ok(extended) = view.with(ext, stone) else {
            continue;
        };

        let mut extension_checked = false;
        for four in straight_fours(&extended, ext, stone, axis) {
            if !four.contains(&pos) {
                continue;
            }
            if !extension_checked {
                if stone == Stone::Black && depth > 0 {
                    if let Some(foul) = find_foul(&extended, ext, depth - 1) {
                        log::trace!("extension {} of three at {} is {:?}", ext, pos, foul.foul);
                        break;
                    }
                }
                extension_checked = true;
            }
            let three = four.into_iter().filter(|&p| p != ext).collect();
            push_unique(&mut found, PatternMatch::new(Pattern::OpenThree, axis, three));
        }
    }
    found
}

/// Fours through `pos` on all axes
pub fn all_fours(view: &BoardView<'_>, pos: Pos, stone: Stone) -> Vec<PatternMatch> {
    Axis::ALL
        .into_iter()
        .flat_map(|axis| fours(view, pos, stone, axis))
        .collect()
}

/// Open threes through `pos` on all axes
pub fn all_open_threes(
    view: &BoardView<'_>,
    pos: Pos,
    stone: Stone,
    depth: u8,
) -> Vec<PatternMatch> {
    Axis::ALL
        .into_iter()
        .flat_map(|axis| open_threes(view, pos, stone, axis, depth))
        .collect()
}
