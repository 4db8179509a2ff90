//! Line scanning through a single cell
//!
//! Every pattern decision in the engine (scoring, threats, win and forbidden
//! checks) starts from a `DirInfo`: the run of one color through an anchor
//! cell along one of the four canonical directions.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Vertical
    (0, 1),  // Horizontal
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Run length and open ends of one line through an anchor cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirInfo {
    /// Contiguous stones including the anchor, always >= 1
    pub run_length: u8,
    /// Cell beyond the run against the direction is on the board and empty
    pub open_start: bool,
    /// Cell beyond the run along the direction is on the board and empty
    pub open_end: bool,
}

impl DirInfo {
    #[inline]
    pub fn open_ends(self) -> u8 {
        u8::from(self.open_start) + u8::from(self.open_end)
    }

    #[inline]
    pub fn is_live(self) -> bool {
        self.open_start && self.open_end
    }
}

/// Scan the run of `side` through `pos` along `(dr, dc)` and its opposite.
///
/// The anchor counts as a `side` stone whatever it currently holds, so this
/// reads the board as if `side` had just played at `pos`. The board is never
/// written.
pub fn scan_direction(board: &Board, pos: Pos, (dr, dc): (i32, i32), side: Stone) -> DirInfo {
    let (forward, open_end) = walk(board, pos, dr, dc, side);
    let (backward, open_start) = walk(board, pos, -dr, -dc, side);

    DirInfo {
        run_length: (1 + forward + backward) as u8,
        open_start,
        open_end,
    }
}

/// Count `side` stones stepping away from `pos`, then report whether the
/// first non-matching cell is an empty cell on the board.
#[inline]
fn walk(board: &Board, pos: Pos, dr: i32, dc: i32, side: Stone) -> (u32, bool) {
    let mut count = 0u32;
    let mut step = 1;
    loop {
        let (r, c) = pos.offset(dr, dc, step);
        match board.get_at(r, c) {
            Some(stone) if stone == side => {
                count += 1;
                step += 1;
            }
            Some(Stone::Empty) => return (count, true),
            _ => return (count, false),
        }
    }
}

/// Scan all four directions through `pos`
#[inline]
pub fn scan_all(board: &Board, pos: Pos, side: Stone) -> [DirInfo; 4] {
    DIRECTIONS.map(|dir| scan_direction(board, pos, dir, side))
}
