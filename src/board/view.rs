//! Hypothetical board projection
//!
//! A [`BoardView`] borrows the committed [`Board`] and layers extra stones on
//! top of it in two small bitboards. Stacking another stone copies 64 bytes,
//! never the board.

use super::bitboard::Bitboard;
use super::board::Board;
use super::{Cell, Pos, Stone};
use crate::error::{Result, RuleError};

#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    base: &'a Board,
    black: Bitboard,
    white: Bitboard,
}

impl<'a> BoardView<'a> {
    pub(crate) fn new(base: &'a Board) -> Self {
        Self {
            base,
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Get cell at an in-bounds position
    #[inline]
    pub(crate) fn get(&self, pos: Pos) -> Cell {
        if self.black.get(pos) {
            Cell::Occupied(Stone::Black)
        } else if self.white.get(pos) {
            Cell::Occupied(Stone::White)
        } else {
            self.base.get(pos)
        }
    }

    /// Get cell at position, failing for points off the board
    pub fn cell_at(&self, pos: Pos) -> Result<Cell> {
        self.base.cell_at(pos)?;
        Ok(self.get(pos))
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        pos.in_bounds() && self.get(pos).is_empty()
    }

    /// Same view with one more stone on top
    pub fn with(&self, pos: Pos, stone: Stone) -> Result<BoardView<'a>> {
        if !self.cell_at(pos)?.is_empty() {
            return Err(RuleError::AlreadyOccupied(pos));
        }
        let mut next = *self;
        match stone {
            Stone::Black => next.black.set(pos),
            Stone::White => next.white.set(pos),
        }
        Ok(next)
    }

    /// Stones that exist only in this view
    pub fn hypothetical_stones(&self) -> impl Iterator<Item = (Pos, Stone)> {
        let black = self.black.iter_ones().map(|pos| (pos, Stone::Black));
        let white = self.white.iter_ones().map(|pos| (pos, Stone::White));
        black.chain(white)
    }
}
