//! Bitboard set of board intersections

use super::{Pos, TOTAL_CELLS};

/// Words needed to cover the board (4 * 64 = 256 >= 225)
const WORDS: usize = TOTAL_CELLS.div_ceil(64);

/// One bit per intersection, row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: [u64; WORDS],
}

#[inline]
fn locate(pos: Pos) -> (usize, u64) {
    let idx = pos.to_index();
    (idx / 64, 1u64 << (idx % 64))
}

impl Bitboard {
    pub const fn new() -> Self {
        Self { bits: [0; WORDS] }
    }

    #[inline]
    pub(crate) fn set(&mut self, pos: Pos) {
        let (word, mask) = locate(pos);
        self.bits[word] |= mask;
    }

    #[inline]
    pub(crate) fn get(&self, pos: Pos) -> bool {
        let (word, mask) = locate(pos);
        self.bits[word] & mask != 0
    }

    /// Popcount
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|w| w.count_ones()).sum()
    }

    /// Iterate over set positions in row-major order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter {
            bits: self.bits,
            word: 0,
        }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: [u64; WORDS],
    word: usize,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        while self.word < WORDS {
            let current = self.bits[self.word];
            if current == 0 {
                self.word += 1;
                continue;
            }
            // Pop the lowest set bit
            self.bits[self.word] = current & (current - 1);
            let idx = self.word * 64 + current.trailing_zeros() as usize;
            // Padding bits past the last cell are never set
            return (idx < TOTAL_CELLS).then(|| Pos::from_index(idx));
        }
        None
    }
}
