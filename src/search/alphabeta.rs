//! Depth-bounded minimax with alpha-beta pruning
//!
//! The searcher plays for one fixed side. Scores are always from that side's
//! point of view, so maximizing and minimizing plies alternate instead of the
//! negamax sign flip.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Stone};
//! use gomoku::config::EngineConfig;
//! use gomoku::search::Searcher;
//!
//! let board = Board::new();
//! let mut searcher = Searcher::new(EngineConfig::default(), Stone::Black);
//!
//! let result = searcher.search(&board, 2);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: {best_move}");
//! }
//! ```

use tracing::trace;

use crate::board::{Board, Pos, Stone};
use crate::config::EngineConfig;
use crate::eval::{evaluate_position, PatternScore};
use crate::rules::check_win;

use super::candidates::generate_candidates;

/// Score of a completed five, before the depth bonus
pub const WIN: i32 = PatternScore::FIVE;

/// Window bound. Leaf values can exceed `WIN`, so this sits well above both.
const INF: i32 = i32::MAX / 2;

/// Outcome of a root search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` when there was nothing to search
    pub best_move: Option<Pos>,
    /// Score of the best move from the searching side's point of view
    pub score: i32,
    /// Depth searched, in plies
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
}

/// Alpha-beta search engine for one side.
///
/// Searches mutate a working board with `place_stone`/`undo_move` pairs and
/// leave it exactly as they found it.
#[derive(Debug, Clone)]
pub struct Searcher {
    config: EngineConfig,
    side: Stone,
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new(config: EngineConfig, side: Stone) -> Self {
        Self {
            config,
            side,
            nodes: 0,
        }
    }

    #[inline]
    pub fn side(&self) -> Stone {
        self.side
    }

    /// Nodes visited since the last `search` started
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Pick the best move for this searcher's side, looking `depth` plies ahead.
    ///
    /// Each root candidate is played and scored by a minimizing search one ply
    /// shallower. Candidates are tried best-ranked first and a later one only
    /// replaces the current best on a strictly higher score.
    #[must_use]
    pub fn search(&mut self, board: &Board, depth: u8) -> SearchResult {
        self.nodes = 0;
        let depth = depth.max(1);
        let mut work_board = board.clone();

        let moves = self.candidates(&work_board, self.side, depth);
        let mut best_move = None;
        let mut best_score = -INF;
        let mut alpha = -INF;

        for mv in moves {
            work_board.place_stone(mv.pos, self.side);
            let score = self.alpha_beta(
                &mut work_board,
                mv.pos,
                self.side.opponent(),
                depth - 1,
                alpha,
                INF,
                false,
            );
            work_board.undo_move();
            trace!(pos = %mv.pos, order_score = mv.score, score, "root candidate");

            if score > best_score {
                best_score = score;
                best_move = Some(mv.pos);
            }
            alpha = alpha.max(best_score);
        }

        SearchResult {
            best_move,
            score: if best_move.is_some() { best_score } else { 0 },
            depth,
            nodes: self.nodes,
        }
    }

    /// Minimax value of the position reached by playing `last`, with `to_move`
    /// next and `depth` plies left.
    ///
    /// A five through `last` scores `WIN + depth` for this searcher's side and
    /// `-WIN - depth` for the other, so quicker wins and slower losses score
    /// better. Leaves use the single-cell heuristic at `last`.
    #[allow(clippy::too_many_arguments)]
    pub fn alpha_beta(
        &mut self,
        board: &mut Board,
        last: Pos,
        to_move: Stone,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;

        let placer = board.get(last);
        if placer != Stone::Empty && check_win(board, last, placer) {
            let score = WIN + i32::from(depth);
            return if placer == self.side { score } else { -score };
        }

        if depth == 0 || board.is_full() {
            return self.leaf_value(board, last);
        }

        let moves = self.candidates(board, to_move, depth);
        if moves.is_empty() {
            return self.leaf_value(board, last);
        }

        let mut best = if maximizing { -INF } else { INF };
        for mv in moves {
            board.place_stone(mv.pos, to_move);
            let score = self.alpha_beta(
                board,
                mv.pos,
                to_move.opponent(),
                depth - 1,
                alpha,
                beta,
                !maximizing,
            );
            board.undo_move();

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                break;
            }
        }
        best
    }

    /// Ordered candidates for a node with `depth` plies left, capped if configured
    fn candidates(&self, board: &Board, side: Stone, depth: u8) -> Vec<super::ScoredMove> {
        let mut moves = generate_candidates(board, side, &self.config);
        if let Some(limit) = self.config.branching_limit(depth) {
            moves.truncate(limit);
        }
        moves
    }

    #[inline]
    fn leaf_value(&self, board: &Board, last: Pos) -> i32 {
        evaluate_position(board, last, self.side) - evaluate_position(board, last, self.side.opponent())
    }
}
