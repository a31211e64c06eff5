//! Committed board state

use std::fmt;
use std::str::FromStr;

use super::bitboard::Bitboard;
use super::view::BoardView;
use super::{Cell, Pos, Stone, BOARD_SIZE};
use crate::error::{Result, RuleError};

/// Game board
///
/// Only the game-state layer commits stones (via [`Board::place`]). Legality
/// testing goes through [`Board::with_hypothetical`], which never touches the
/// committed grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get cell at an in-bounds position
    #[inline]
    pub(crate) fn get(&self, pos: Pos) -> Cell {
        if self.black.get(pos) {
            Cell::Occupied(Stone::Black)
        } else if self.white.get(pos) {
            Cell::Occupied(Stone::White)
        } else {
            Cell::Empty
        }
    }

    /// Get cell at position, failing for points off the board
    pub fn cell_at(&self, pos: Pos) -> Result<Cell> {
        if !pos.in_bounds() {
            return Err(RuleError::OutOfBounds {
                row: pos.row as i32,
                col: pos.col as i32,
            });
        }
        Ok(self.get(pos))
    }

    /// Check if position is on the board and empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        pos.in_bounds() && self.get(pos).is_empty()
    }

    /// Commit a stone
    pub fn place(&mut self, pos: Pos, stone: Stone) -> Result<()> {
        if !self.cell_at(pos)?.is_empty() {
            return Err(RuleError::AlreadyOccupied(pos));
        }
        self.stones_mut(stone).set(pos);
        Ok(())
    }

    /// Read-only view of the committed board with no extra stones
    #[inline]
    pub fn view(&self) -> BoardView<'_> {
        BoardView::new(self)
    }

    /// View of the board with `stone` treated as standing on `pos`
    pub fn with_hypothetical(&self, pos: Pos, stone: Stone) -> Result<BoardView<'_>> {
        self.view().with(pos, stone)
    }

    #[inline]
    pub fn stones(&self, stone: Stone) -> &Bitboard {
        match stone {
            Stone::Black => &self.black,
            Stone::White => &self.white,
        }
    }

    #[inline]
    fn stones_mut(&mut self, stone: Stone) -> &mut Bitboard {
        match stone {
            Stone::Black => &mut self.black,
            Stone::White => &mut self.white,
        }
    }

    /// Total stones on board, which equals moves played
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == BOARD_SIZE * BOARD_SIZE
    }

    /// Empty intersections in row-major order
    pub fn empty_points(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..BOARD_SIZE * BOARD_SIZE)
            .map(Pos::from_index)
            .filter(move |&pos| self.get(pos).is_empty())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE as u8 {
            let line: String = (0..BOARD_SIZE as u8)
                .map(|col| self.get(Pos::new(row, col)).symbol())
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Parse 15 rows of `.`, `B` and `W`.
///
/// Whitespace inside a row is ignored so boards can be written spaced out.
/// Blank lines are skipped.
impl FromStr for Board {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self> {
        let mut board = Board::new();
        let mut row = 0usize;

        for (line_no, line) in s.lines().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.is_empty() {
                continue;
            }
            let parse_err = |reason: String| RuleError::Parse {
                line: line_no + 1,
                reason,
            };
            if row >= BOARD_SIZE {
                return Err(parse_err(format!("more than {BOARD_SIZE} rows")));
            }
            if cells.len() != BOARD_SIZE {
                return Err(parse_err(format!(
                    "expected {BOARD_SIZE} cells, found {}",
                    cells.len()
                )));
            }
            for (col, symbol) in cells.into_iter().enumerate() {
                let pos = Pos::new(row as u8, col as u8);
                match symbol {
                    '.' => {}
                    'B' => board.black.set(pos),
                    'W' => board.white.set(pos),
                    other => return Err(parse_err(format!("unexpected symbol '{other}'"))),
                }
            }
            row += 1;
        }

        if row != BOARD_SIZE {
            return Err(RuleError::Parse {
                line: s.lines().count(),
                reason: format!("expected {BOARD_SIZE} rows, found {row}"),
            });
        }
        Ok(board)
    }
}
