//! Engine configuration
//!
//! Difficulty drives both the search depth and the defense coefficient; the
//! remaining knobs bound the candidate list. Everything can be loaded from
//! JSON, with missing keys falling back to the defaults.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Difficulty level, 1 (weakest) to 5 (strongest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: u8) -> Result<Self, ConfigError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(ConfigError::InvalidDifficulty(level))
        }
    }

    #[inline]
    pub fn level(self) -> u8 {
        self.0
    }

    /// Search depth in plies
    #[inline]
    pub fn depth(self) -> u8 {
        self.0
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = ConfigError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> u8 {
        d.0
    }
}

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
    Json(serde_json::Error),
    InvalidDifficulty(u8),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Json(e) => write!(f, "invalid engine config: {e}"),
            ConfigError::InvalidDifficulty(level) => write!(
                f,
                "difficulty {level} is outside {}..={}",
                Difficulty::MIN,
                Difficulty::MAX
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub difficulty: Difficulty,

    // Defense coefficient = defense_base + (difficulty - 1) * defense_step
    pub defense_base: f64,
    pub defense_step: f64,

    // Candidate generation
    /// Past this many moves, cells with no stone nearby are skipped
    pub sparse_threshold: usize,
    /// Chebyshev radius that counts as "nearby"
    pub nearby_radius: i32,
    /// Candidates kept per node when fewer than 3 plies remain
    pub shallow_branching: usize,
    /// Candidates kept per node at 3 or more remaining plies
    pub deep_branching: usize,
    /// `false` removes the per-node cap entirely
    pub cap_candidates: bool,

    /// Run alpha-beta in quiet positions instead of taking the top candidate
    pub use_search: bool,
    /// Skip cells that are forbidden for Black
    pub forbidden_moves: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            defense_base: 1.2,
            defense_step: 0.1,
            sparse_threshold: 10,
            nearby_radius: 2,
            shallow_branching: 25,
            deep_branching: 15,
            cap_candidates: true,
            use_search: true,
            forbidden_moves: false,
        }
    }
}

impl EngineConfig {
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }

    /// Parse a JSON config. Missing keys take their default values.
    pub fn load_from_json(json_str: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json_str)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.difficulty.depth()
    }

    /// Weight of the opponent's value on a cell in `evaluate_move`
    #[inline]
    pub fn defense_coefficient(&self) -> f64 {
        self.defense_base + f64::from(self.difficulty.level() - 1) * self.defense_step
    }

    /// Candidate cap for a node with `depth` plies remaining
    #[inline]
    pub fn branching_limit(&self, depth: u8) -> Option<usize> {
        if !self.cap_candidates {
            return None;
        }
        Some(if depth >= 3 {
            self.deep_branching
        } else {
            self.shallow_branching
        })
    }
}
