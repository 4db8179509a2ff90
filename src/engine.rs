//! Main AI Engine integrating all search components
//!
//! This module provides the engine that picks a move for a given position.
//! Forced tactical replies are found by cheap threat lookups over the ranked
//! candidates; the full search only runs in quiet positions. The priority is:
//!
//! 1. **Opening**: empty board, play the center
//! 2. **Immediate win**: a candidate that completes five
//! 3. **Deny four**: a candidate that would give the opponent a four or better
//! 4. **Deny three**: a candidate that would give the opponent a live three
//! 5. **Make four**: a candidate that gives us a four or better
//! 6. **Make three**: a candidate that gives us a live three
//! 7. **Alpha-Beta**: search at the configured depth (or take the top candidate)
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Stone, Pos};
//!
//! let engine = AIEngine::new();
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let result = engine.decide_move(&board, Stone::White);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Pos, Stone};
use crate::config::{Difficulty, EngineConfig};
use crate::search::{
    detect_threat, generate_candidates, ScoredMove, SearchResult, Searcher, ThreatLevel,
};

/// Which step of the decision produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Center of an empty board
    Opening,
    /// Completes five
    ImmediateWin,
    /// Takes a cell that would give the opponent a four or a five
    DenyFour,
    /// Takes a cell that would give the opponent a live three
    DenyThree,
    /// Makes our own four
    MakeFour,
    /// Makes our own live three
    MakeThree,
    /// Alpha-beta search result
    AlphaBeta,
    /// Top-ranked candidate, search disabled
    TopCandidate,
    /// Row-major scan for an empty cell
    Fallback,
}

/// Result of a move decision with search statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Chosen move, `None` only on a full board
    pub best_move: Option<Pos>,
    /// Candidate score for tactical moves, search score otherwise
    pub score: i32,
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Search nodes visited, zero for tactical moves
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn tactical(pos: Pos, score: i32, search_type: SearchType, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score,
            search_type,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn from_alphabeta(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            time_ms,
            nodes: result.nodes,
        }
    }

    #[inline]
    fn fallback(pos: Option<Pos>, time_ms: u64) -> Self {
        Self {
            best_move: pos,
            score: 0,
            search_type: SearchType::Fallback,
            time_ms,
            nodes: 0,
        }
    }
}

/// Everything a tactical rule may look at
pub struct RuleContext<'a> {
    pub board: &'a Board,
    /// Side the engine is choosing a move for
    pub color: Stone,
    /// Ranked candidates for `color`
    pub candidates: &'a [ScoredMove],
}

impl RuleContext<'_> {
    /// First ranked candidate whose threat for `side` satisfies `pred`
    fn first_threat(&self, side: Stone, pred: impl Fn(ThreatLevel) -> bool) -> Option<Pos> {
        self.candidates
            .iter()
            .map(|m| m.pos)
            .find(|&pos| pred(detect_threat(self.board, pos, side)))
    }
}

/// A pure rule: `Some(pos)` when it applies to the position
pub type TacticalRule = fn(&RuleContext<'_>) -> Option<Pos>;

/// Tactical rules in priority order; the first one that applies wins
pub const TACTICAL_RULES: [(SearchType, TacticalRule); 6] = [
    (SearchType::Opening, opening),
    (SearchType::ImmediateWin, immediate_win),
    (SearchType::DenyFour, deny_four),
    (SearchType::DenyThree, deny_three),
    (SearchType::MakeFour, make_four),
    (SearchType::MakeThree, make_three),
];

fn opening(ctx: &RuleContext<'_>) -> Option<Pos> {
    ctx.board.is_board_empty().then(|| ctx.board.center())
}

fn immediate_win(ctx: &RuleContext<'_>) -> Option<Pos> {
    ctx.first_threat(ctx.color, |t| t == ThreatLevel::Win)
}

fn deny_four(ctx: &RuleContext<'_>) -> Option<Pos> {
    ctx.first_threat(ctx.color.opponent(), |t| t >= ThreatLevel::Four)
}

fn deny_three(ctx: &RuleContext<'_>) -> Option<Pos> {
    ctx.first_threat(ctx.color.opponent(), |t| t == ThreatLevel::Three)
}

fn make_four(ctx: &RuleContext<'_>) -> Option<Pos> {
    ctx.first_threat(ctx.color, |t| t >= ThreatLevel::Four)
}

fn make_three(ctx: &RuleContext<'_>) -> Option<Pos> {
    ctx.first_threat(ctx.color, |t| t == ThreatLevel::Three)
}

/// Main AI Engine for Gomoku.
///
/// The engine owns only its configuration. Every decision searches a private
/// copy of the caller's board, so one engine can serve many games.
///
/// # Example
///
/// ```
/// use gomoku::{AIEngine, Board, Difficulty, EngineConfig, Stone};
///
/// let config = EngineConfig::with_difficulty(Difficulty::new(2).unwrap());
/// let engine = AIEngine::with_config(config);
///
/// let board = Board::new();
/// assert_eq!(engine.get_move(&board, Stone::Black), Some(board.center()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AIEngine {
    config: EngineConfig,
}

impl AIEngine {
    /// Create an engine with the default configuration (difficulty 3)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
    }

    /// Get the best move for `color`, or `None` on a full board.
    #[must_use]
    pub fn get_move(&self, board: &Board, color: Stone) -> Option<Pos> {
        self.decide_move(board, color).best_move
    }

    /// Decide a move for `color` and report how it was found.
    ///
    /// The caller's board is never modified.
    #[must_use]
    pub fn decide_move(&self, board: &Board, color: Stone) -> MoveResult {
        let start = Instant::now();
        let candidates = generate_candidates(board, color, &self.config);
        let ctx = RuleContext {
            board,
            color,
            candidates: &candidates,
        };

        for (search_type, rule) in TACTICAL_RULES {
            if let Some(pos) = rule(&ctx) {
                let score = candidate_score(&candidates, pos);
                debug!(?search_type, %pos, score, "tactical rule fired");
                return MoveResult::tactical(pos, score, search_type, elapsed_ms(start));
            }
        }

        if let Some(top) = candidates.first() {
            if !self.config.use_search {
                debug!(pos = %top.pos, score = top.score, "top candidate");
                return MoveResult::tactical(
                    top.pos,
                    top.score,
                    SearchType::TopCandidate,
                    elapsed_ms(start),
                );
            }

            let mut searcher = Searcher::new(self.config.clone(), color);
            let result = searcher.search(board, self.config.depth());
            if result.best_move.is_some() {
                let result = MoveResult::from_alphabeta(result, elapsed_ms(start));
                debug!(
                    pos = ?result.best_move,
                    score = result.score,
                    nodes = result.nodes,
                    time_ms = result.time_ms,
                    "search complete"
                );
                return result;
            }
        }

        let pos = board.first_empty();
        debug!(?pos, "no candidates, row-major fallback");
        MoveResult::fallback(pos, elapsed_ms(start))
    }
}

#[inline]
fn candidate_score(candidates: &[ScoredMove], pos: Pos) -> i32 {
    candidates
        .iter()
        .find(|m| m.pos == pos)
        .map_or(0, |m| m.score)
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
