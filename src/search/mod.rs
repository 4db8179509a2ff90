//! Search module for Gomoku AI
//!
//! Contains:
//! - Threat classification of a single placement
//! - Candidate generation and ordering
//! - Depth-bounded alpha-beta search

pub mod alphabeta;
pub mod candidates;
pub mod threat;

pub use alphabeta::{SearchResult, Searcher, WIN};
pub use candidates::{generate_candidates, ScoredMove};
pub use threat::{detect_threat, ThreatLevel};
