//! Heuristic scoring of a single placement
//!
//! The engine never scores a whole board. Every number it compares comes from
//! "how good would a stone of this color be on this cell": the strongest line
//! through the cell dominates, the other three lines support it, and cells
//! near the center get a small bonus.

use crate::board::{Board, Pos, Stone};
use crate::rules::scan_all;

use super::patterns::{PatternScore, StepScore};

/// Score a hypothetical `side` stone at `pos`.
///
/// Returns `PatternScore::FIVE` as soon as any direction completes five.
/// Otherwise `10 * max + sum` over the four directions plus
/// `50 * (size - manhattan(pos, center))`. The board is only read.
#[must_use]
pub fn evaluate_position(board: &Board, pos: Pos, side: Stone) -> i32 {
    let mut max_score = 0;
    let mut sum_score = 0;

    for info in scan_all(board, pos, side) {
        let Some(line_score) = PatternScore::of_line(info) else {
            return PatternScore::FIVE;
        };
        max_score = max_score.max(line_score);
        sum_score += line_score;
    }

    max_score * PatternScore::DOMINANT_WEIGHT
        + sum_score
        + position_bonus(board, pos, PatternScore::POSITION_FACTOR)
}

/// Attack value of `pos` for `mover` plus the weighted value of denying it to
/// the opponent.
#[must_use]
pub fn evaluate_move(board: &Board, pos: Pos, mover: Stone, defense_coefficient: f64) -> i32 {
    let attack = evaluate_position(board, pos, mover);
    let defense = evaluate_position(board, pos, mover.opponent());
    attack + (f64::from(defense) * defense_coefficient) as i32
}

/// Grade of a stone already on the board, on the post-game scale
#[must_use]
pub fn step_score(board: &Board, pos: Pos, side: Stone) -> i32 {
    let lines: i32 = scan_all(board, pos, side)
        .into_iter()
        .map(StepScore::of_line)
        .sum();
    lines + position_bonus(board, pos, StepScore::POSITION_FACTOR)
}

#[inline]
fn position_bonus(board: &Board, pos: Pos, factor: i32) -> i32 {
    factor * (board.size() as i32 - pos.manhattan(board.center()))
}
