//! Line scan through a single intersection
//!
//! Every classification in the rules engine starts here: walk both ways from
//! a point along one axis while the cells hold the scanned color, then look at
//! the first cell past each end.

use serde::{Deserialize, Serialize};

use crate::board::{BoardView, Cell, Pos, Stone};

/// The four undirected lines through a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
    /// Down-right
    Diagonal,
    /// Down-left
    AntiDiagonal,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::Diagonal,
        Axis::AntiDiagonal,
    ];

    /// Step (dr, dc) towards the "right" end of the axis
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::Diagonal => (1, 1),
            Axis::AntiDiagonal => (1, -1),
        }
    }

    /// Position `steps` cells from `pos` along the axis (negative = left)
    #[inline]
    pub fn step(self, pos: Pos, steps: i32) -> Option<Pos> {
        let (dr, dc) = self.delta();
        pos.offset(dr, dc, steps)
    }
}

/// Cell immediately past the end of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Boundary {
    /// Empty and on the board
    Open,
    /// A stone of either color, or the board edge
    Blocked,
}

/// Result of scanning one axis through a point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineScan {
    pub axis: Axis,
    /// Contiguous stones including the scanned point, always >= 1
    pub length: usize,
    pub left: Boundary,
    pub right: Boundary,
    /// Stones of the run from left to right
    pub stones: Vec<Pos>,
}

impl LineScan {
    #[inline]
    pub fn open_ends(&self) -> u8 {
        (self.left == Boundary::Open) as u8 + (self.right == Boundary::Open) as u8
    }

    #[inline]
    pub fn is_overline(&self) -> bool {
        self.length >= 6
    }
}

/// Walk from `pos` in one direction, collecting matching stones.
fn walk(
    view: &BoardView<'_>,
    pos: Pos,
    stone: Stone,
    axis: Axis,
    dir: i32,
) -> (Vec<Pos>, Boundary) {
    let mut run = Vec::new();
    let mut steps = dir;
    loop {
        let Some(next) = axis.step(pos, steps) else {
            return (run, Boundary::Blocked);
        };
        match view.get(next) {
            Cell::Occupied(s) if s == stone => run.push(next),
            Cell::Empty => return (run, Boundary::Open),
            Cell::Occupied(_) => return (run, Boundary::Blocked),
        }
        steps += dir;
    }
}

/// Scan the run of `stone` through `pos` along `axis`.
///
/// `pos` itself counts as `stone` whatever the view holds there, so the
/// scan works on both a committed board and a hypothetical view.
pub fn scan_line(view: &BoardView<'_>, pos: Pos, stone: Stone, axis: Axis) -> LineScan {
    let (mut left_run, left) = walk(view, pos, stone, axis, -1);
    let (right_run, right) = walk(view, pos, stone, axis, 1);

    left_run.reverse();
    left_run.push(pos);
    left_run.extend(right_run);

    let scan = LineScan {
        axis,
        length: left_run.len(),
        left,
        right,
        stones: left_run,
    };
    log::trace!(
        "scan {:?} {} {:?}: length {} ends {:?}/{:?}",
        stone,
        pos,
        axis,
        scan.length,
        scan.left,
        scan.right
    );
    scan
}

/// Scan all four axes through `pos`
pub fn scan_all(view: &BoardView<'_>, pos: Pos, stone: Stone) -> [LineScan; 4] {
    Axis::ALL.map(|axis| scan_line(view, pos, stone, axis))
}
