//! Win condition checking
//!
//! Five or more stones in a row win; overlines count unless the forbidden-move
//! rule is enforced by the caller before the stone is played.

use crate::board::{Board, Pos, Stone};

use super::line::{scan_direction, DIRECTIONS};

/// Check whether `side` owns a run of five or more through `pos`.
///
/// `pos` is treated as holding a `side` stone, so this works both on the cell
/// that was just played and on a cell that is only being considered.
#[inline]
pub fn check_win(board: &Board, pos: Pos, side: Stone) -> bool {
    DIRECTIONS
        .iter()
        .any(|&dir| scan_direction(board, pos, dir, side).run_length >= 5)
}

/// Winner of the game so far, judged from the last move
pub fn last_move_winner(board: &Board) -> Option<Stone> {
    let last = board.last_move()?;
    check_win(board, last.pos, last.stone).then_some(last.stone)
}

/// The five (or longer) cells of the winning line through `pos`, if any
pub fn winning_line(board: &Board, pos: Pos, side: Stone) -> Option<Vec<Pos>> {
    for &(dr, dc) in &DIRECTIONS {
        if scan_direction(board, pos, (dr, dc), side).run_length < 5 {
            continue;
        }
        let mut start = 0;
        loop {
            let (r, c) = pos.offset(dr, dc, start - 1);
            if board.get_at(r, c) != Some(side) {
                break;
            }
            start -= 1;
        }
        let mut line = vec![];
        let mut step = start;
        loop {
            let (r, c) = pos.offset(dr, dc, step);
            match board.pos_at(r, c) {
                Some(p) if p == pos || board.get(p) == side => line.push(p),
                _ => break,
            }
            step += 1;
        }
        return Some(line);
    }
    None
}
