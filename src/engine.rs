//! Move evaluation entry point
//!
//! [`RuleEngine::evaluate`] takes a committed board and a proposed stone and
//! answers two questions in order:
//!
//! 1. **Legality**: occupied cells are rejected; under Renju rules a Black
//!    move is checked for overline, double-four and double-three.
//! 2. **Win**: only a legal move is checked for a five.
//!
//! The board is never mutated. All probing happens on a [`BoardView`]
//! overlay, so concurrent evaluations against one shared board are safe as
//! long as nobody commits a move meanwhile.
//!
//! # Example
//!
//! ```
//! use renju::{Board, Pos, RuleEngine, Stone, Verdict};
//!
//! let mut board = Board::new();
//! for col in [6, 8] {
//!     board.place(Pos::new(7, col), Stone::Black).unwrap();
//! }
//! for row in [6, 8] {
//!     board.place(Pos::new(row, 7), Stone::Black).unwrap();
//! }
//!
//! let engine = RuleEngine::default();
//! let eval = engine.evaluate(&board, Pos::new(7, 7), Stone::Black).unwrap();
//! assert_eq!(eval.verdict, Verdict::IllegalDoubleThree);
//! assert_eq!(eval.highlight_points().len(), 5);
//! ```
//!
//! [`BoardView`]: crate::board::BoardView

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Pos, Stone};
use crate::config::{RuleConfig, RuleSet};
use crate::error::Result;
use crate::rules::{find_foul, fives_at, Foul, PatternMatch};

/// Outcome of evaluating one proposed move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The move may be committed; `win` says whether it ends the game
    Legal { win: bool },
    IllegalOverline,
    IllegalDoubleThree,
    IllegalDoubleFour,
    /// The intersection already holds a stone
    IllegalOccupied,
}

impl Verdict {
    #[inline]
    pub fn is_legal(self) -> bool {
        matches!(self, Verdict::Legal { .. })
    }

    #[inline]
    pub fn is_win(self) -> bool {
        matches!(self, Verdict::Legal { win: true })
    }
}

impl From<Foul> for Verdict {
    fn from(foul: Foul) -> Self {
        match foul {
            Foul::Overline => Verdict::IllegalOverline,
            Foul::DoubleFour => Verdict::IllegalDoubleFour,
            Foul::DoubleThree => Verdict::IllegalDoubleThree,
        }
    }
}

/// Verdict together with the move and the patterns that decided it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub pos: Pos,
    pub stone: Stone,
    pub verdict: Verdict,
    /// Winning lines for a win, offending patterns for a forbidden move,
    /// empty otherwise
    pub patterns: Vec<PatternMatch>,
}

impl Evaluation {
    #[inline]
    fn plain(pos: Pos, stone: Stone, verdict: Verdict) -> Self {
        Self {
            pos,
            stone,
            verdict,
            patterns: Vec::new(),
        }
    }

    /// Union of the decisive patterns' points
    pub fn highlight_points(&self) -> BTreeSet<Pos> {
        self.patterns
            .iter()
            .flat_map(|m| m.points.iter().copied())
            .collect()
    }
}

/// Rules engine
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    config: RuleConfig,
}

impl RuleEngine {
    /// Create an engine with validated settings
    pub fn new(config: RuleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Evaluate `stone` played at `pos`.
    ///
    /// Fails only for a point off the board. Occupied cells and forbidden
    /// moves come back as verdicts.
    pub fn evaluate(&self, board: &Board, pos: Pos, stone: Stone) -> Result<Evaluation> {
        if !board.cell_at(pos)?.is_empty() {
            log::debug!("{:?} at {} rejected: occupied", stone, pos);
            return Ok(Evaluation::plain(pos, stone, Verdict::IllegalOccupied));
        }
        let view = board.with_hypothetical(pos, stone)?;

        if self.config.ruleset == RuleSet::Renju && stone == Stone::Black {
            if let Some(forbidden) = find_foul(&view, pos, self.config.three_depth) {
                log::debug!("Black at {} forbidden: {:?}", pos, forbidden.foul);
                return Ok(Evaluation {
                    pos,
                    stone,
                    verdict: forbidden.foul.into(),
                    patterns: forbidden.patterns,
                });
            }
        }

        let fives = fives_at(&view, pos, stone, self.config.ruleset);
        let win = !fives.is_empty();
        if win {
            log::debug!("{:?} at {} wins", stone, pos);
        }
        Ok(Evaluation {
            pos,
            stone,
            verdict: Verdict::Legal { win },
            patterns: fives,
        })
    }
}

/// Evaluate a move under default Renju rules
pub fn evaluate_move(board: &Board, pos: Pos, stone: Stone) -> Result<Evaluation> {
    RuleEngine::default().evaluate(board, pos, stone)
}

/// Points to highlight for an evaluated move
pub fn highlight_points(evaluation: &Evaluation) -> BTreeSet<Pos> {
    evaluation.highlight_points()
}
