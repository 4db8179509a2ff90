//! Candidate move generation and ordering
//!
//! Every node of the search and every tactical rule of the engine looks at the
//! same sorted list: empty cells near the action, scored by attack plus
//! weighted defense plus a threat bonus.

use std::cmp::Reverse;

use crate::board::{Board, Pos, Stone};
use crate::config::EngineConfig;
use crate::eval::evaluate_move;
use crate::rules::is_forbidden_move;

use super::threat::detect_threat;

/// An empty cell with its ordering score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub pos: Pos,
    pub score: i32,
}

/// Score and sort the playable cells for `side`.
///
/// Once more than `config.sparse_threshold` moves have been played, cells with
/// no stone within `config.nearby_radius` are ignored. Best first; ties go to
/// the cell closer to the center, then to the earlier cell in row-major order.
#[must_use]
pub fn generate_candidates(board: &Board, side: Stone, config: &EngineConfig) -> Vec<ScoredMove> {
    let sparse = board.stone_count() > config.sparse_threshold;
    let check_forbidden = config.forbidden_moves && side == Stone::Black;
    let defense = config.defense_coefficient();
    let center = board.center();

    let mut moves: Vec<ScoredMove> = board
        .positions()
        .filter(|&pos| board.is_empty(pos))
        .filter(|&pos| !sparse || board.has_neighbor(pos, config.nearby_radius))
        .filter(|&pos| !check_forbidden || !is_forbidden_move(board, pos, side))
        .map(|pos| ScoredMove {
            pos,
            score: evaluate_move(board, pos, side, defense) + detect_threat(board, pos, side).bonus(),
        })
        .collect();

    moves.sort_by_key(|m| (Reverse(m.score), m.pos.manhattan(center), m.pos));
    moves
}
