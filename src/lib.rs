//! Gomoku AI Engine
//!
//! A five-in-a-row decision engine for square boards from 5x5 to 25x25:
//! - Five or more in a row wins
//! - Black moves first
//! - Optional forbidden moves for Black (overline, double-three, double-four)
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with an ordered move log
//! - [`rules`]: Line scanning, win detection and forbidden moves
//! - [`eval`]: Placement scoring and post-game grading
//! - [`search`]: Threat classification, candidate ordering and alpha-beta
//! - [`engine`]: Main AI engine integrating all components
//! - [`config`]: Difficulty and engine parameters
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Board, Stone, Pos};
//!
//! let mut board = Board::new();
//! let engine = AIEngine::new();
//!
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! // AI responds as White
//! if let Some(pos) = engine.get_move(&board, Stone::White) {
//!     board.place_stone(pos, Stone::White);
//!     println!("AI plays at {pos}");
//! }
//! ```
//!
//! # Decision Priority
//!
//! 1. Center of an empty board
//! 2. Immediate winning move
//! 3. Deny the opponent a four, then a live three
//! 4. Make our own four, then a live three
//! 5. Alpha-beta search over the ranked candidates
//!
//! Scanning, evaluation and threat detection only read the board and treat
//! the cell being scored as holding the hypothetical stone. The search plays
//! and undoes moves on a private copy.

pub mod board;
pub mod config;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError, Move, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use config::{ConfigError, Difficulty, EngineConfig};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use eval::{evaluate_position, grade_game};
pub use rules::check_win;
