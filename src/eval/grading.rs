//! Post-game grading of a finished (or abandoned) game
//!
//! Replays the move log to grade each move against the position it was played
//! into, and totals a per-side score from the final position.

use crate::board::{Board, Move, Stone};
use crate::rules::last_move_winner;

use super::heuristic::{evaluate_position, step_score};
use super::patterns::StepScore;

/// Grade of one historical move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveGrade {
    pub mv: Move,
    /// `evaluate_position` of the move on the board just before it was played
    pub grade: i32,
}

/// Result of grading a whole game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    pub grades: Vec<MoveGrade>,
    pub black_total: i32,
    pub white_total: i32,
    pub winner: Option<Stone>,
}

impl GameReport {
    pub fn total(&self, stone: Stone) -> i32 {
        match stone {
            Stone::Black => self.black_total,
            Stone::White => self.white_total,
            Stone::Empty => 0,
        }
    }

    /// Side with the higher total; `None` on a tie
    pub fn best_side(&self) -> Option<Stone> {
        match self.black_total.cmp(&self.white_total) {
            std::cmp::Ordering::Greater => Some(Stone::Black),
            std::cmp::Ordering::Less => Some(Stone::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Grade every move in the board's history.
///
/// Side totals weigh later moves more, `1 + i / n * 0.5` for move `i` of `n`,
/// and the winner of the last move gets `StepScore::WIN_BONUS`.
pub fn grade_game(board: &Board) -> GameReport {
    let history = board.history();
    let n = history.len();

    let mut replay = Board::with_size(board.size()).unwrap_or_default();
    let mut grades = Vec::with_capacity(n);
    let mut black_total = 0;
    let mut white_total = 0;

    for (i, mv) in history.iter().enumerate() {
        grades.push(MoveGrade {
            mv: *mv,
            grade: evaluate_position(&replay, mv.pos, mv.stone),
        });
        replay.place_stone(mv.pos, mv.stone);

        let weight = 1.0 + i as f64 / n as f64 * StepScore::TIME_WEIGHT;
        let weighted = (f64::from(step_score(board, mv.pos, mv.stone)) * weight) as i32;
        match mv.stone {
            Stone::Black => black_total += weighted,
            Stone::White => white_total += weighted,
            Stone::Empty => {}
        }
    }

    let winner = last_move_winner(board);
    match winner {
        Some(Stone::Black) => black_total += StepScore::WIN_BONUS,
        Some(Stone::White) => white_total += StepScore::WIN_BONUS,
        _ => {}
    }

    GameReport {
        grades,
        black_total,
        white_total,
        winner,
    }
}
