//! Forbidden moves for the first player
//!
//! When the restriction is enabled, Black may not play a move that creates:
//! - an overline (six or more in a row),
//! - two or more live threes at once (`_OOO_` in two directions),
//! - two or more fours at once (four in a row with at least one open end).
//!
//! White is never restricted.

use crate::board::{Board, Pos, Stone};

use super::line::scan_all;

/// Why a move is forbidden
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Forbidden {
    Overline,
    DoubleThree,
    DoubleFour,
}

/// Classify a hypothetical Black move; `None` when it is allowed.
pub fn forbidden_kind(board: &Board, pos: Pos, stone: Stone) -> Option<Forbidden> {
    if stone != Stone::Black {
        return None;
    }

    let mut threes = 0;
    let mut fours = 0;
    for info in scan_all(board, pos, stone) {
        if info.run_length > 5 {
            return Some(Forbidden::Overline);
        }
        if info.run_length == 3 && info.is_live() {
            threes += 1;
        }
        if info.run_length == 4 && info.open_ends() >= 1 {
            fours += 1;
        }
    }

    if threes >= 2 {
        Some(Forbidden::DoubleThree)
    } else if fours >= 2 {
        Some(Forbidden::DoubleFour)
    } else {
        None
    }
}

/// Check if move is forbidden for `stone`
#[inline]
pub fn is_forbidden_move(board: &Board, pos: Pos, stone: Stone) -> bool {
    forbidden_kind(board, pos, stone).is_some()
}
