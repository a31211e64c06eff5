//! Renju rules engine
//!
//! Decides whether a proposed stone placement on a 15x15 board is legal and
//! whether it wins:
//! - White wins with five or more in a row and has no forbidden moves
//! - Black wins with exactly five in a row
//! - Black may not play an overline (six or more), a double-four or a
//!   double-three
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards and hypothetical views
//! - [`rules`]: Line scanning, pattern classification, forbidden moves, wins
//! - [`engine`]: Verdicts for proposed moves
//! - [`config`]: Rule set selection and tuning
//!
//! Opening rules, move history, rendering and AI play belong to the caller.
//!
//! # Quick Start
//!
//! ```
//! use renju::{evaluate_move, Board, Pos, Stone, Verdict};
//!
//! let mut board = Board::new();
//! for col in 3..7 {
//!     board.place(Pos::new(7, col), Stone::Black).unwrap();
//! }
//!
//! let eval = evaluate_move(&board, Pos::new(7, 7), Stone::Black).unwrap();
//! assert_eq!(eval.verdict, Verdict::Legal { win: true });
//!
//! // Only a legal move is committed
//! if eval.verdict.is_legal() {
//!     board.place(eval.pos, eval.stone).unwrap();
//! }
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod rules;

// Re-export commonly used types for convenience
pub use board::{Board, BoardView, Cell, Pos, Stone, BOARD_SIZE};
pub use config::{RuleConfig, RuleSet};
pub use engine::{evaluate_move, highlight_points, Evaluation, RuleEngine, Verdict};
pub use error::{Result, RuleError};
pub use rules::{Pattern, PatternMatch};
