//! Evaluation module for Gomoku positions
//!
//! This module provides pattern recognition and scoring for placements.
//! The evaluation considers:
//! - Line patterns (ones, twos, threes, fours, fives) and their open ends
//! - Defensive weighting of the opponent's value on the same cell
//! - Positional bonuses (center control)
//! - Post-game grading of played moves

pub mod grading;
pub mod heuristic;
pub mod patterns;

pub use grading::{grade_game, GameReport, MoveGrade};
pub use heuristic::{evaluate_move, evaluate_position, step_score};
pub use patterns::{PatternScore, StepScore};
