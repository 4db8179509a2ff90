//! Game rules for Gomoku
//!
//! This module implements the rule set for Gomoku including:
//! - Line scanning through a cell (run length, open ends)
//! - Win condition (five or more in a row)
//! - Forbidden moves for the first player (overline, double-three, double-four)

pub mod forbidden;
pub mod line;
pub mod win;

// Re-exports for convenient access
pub use forbidden::{forbidden_kind, is_forbidden_move, Forbidden};
pub use line::{scan_all, scan_direction, DirInfo, DIRECTIONS};
pub use win::{check_win, last_move_winner, winning_line};
