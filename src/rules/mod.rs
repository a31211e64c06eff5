//! Game rules for Renju
//!
//! This module implements the rule set including:
//! - Line scanning through a candidate point
//! - Shape classification (five, overline, four, open three)
//! - Forbidden moves for Black (overline, double-four, double-three)
//! - Win conditions (exact five for Black, five or more for White)

pub mod forbidden;
pub mod line;
pub mod pattern;
pub mod win;

// Re-exports for convenient access
pub use forbidden::{find_foul, forbidden_move, is_valid_move, Foul, ForbiddenMove};
pub use line::{scan_all, scan_line, Axis, Boundary, LineScan};
pub use pattern::{
    all_fours, all_open_threes, classify_run, fours, open_threes, straight_fours, Pattern,
    PatternMatch,
};
pub use win::{check_winner, find_five_positions, five_at, fives_at, has_five_at_pos};
