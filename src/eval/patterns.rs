//! Pattern scores for Gomoku evaluation
//!
//! Two tables live here: `PatternScore`, which drives move decisions, and
//! `StepScore`, the gentler scale used to grade finished games.

use crate::rules::DirInfo;

/// Pattern scores for evaluation of a hypothetical placement
pub struct PatternScore;

impl PatternScore {
    /// Five in a row - immediate win, returned without any other term
    pub const FIVE: i32 = 1_000_000;

    /// Live four: _OOOO_
    pub const LIVE_FOUR: i32 = 100_000;
    /// Rush four: XOOOO_ or _OOOOX
    pub const RUSH_FOUR: i32 = 10_000;
    /// Dead four: XOOOOX
    pub const DEAD_FOUR: i32 = 500;

    /// Live three: _OOO_
    pub const LIVE_THREE: i32 = 5_000;
    /// Sleep three: one side blocked
    pub const SLEEP_THREE: i32 = 1_000;
    pub const DEAD_THREE: i32 = 50;

    pub const LIVE_TWO: i32 = 500;
    pub const SLEEP_TWO: i32 = 100;
    pub const DEAD_TWO: i32 = 10;

    pub const LIVE_ONE: i32 = 50;
    pub const HALF_ONE: i32 = 10;
    pub const DEAD_ONE: i32 = 1;

    /// Weight of the strongest direction relative to the plain sum
    pub const DOMINANT_WEIGHT: i32 = 10;
    /// Bonus per step closer to the center
    pub const POSITION_FACTOR: i32 = 50;

    /// Score of one direction, or `None` when the run already makes five
    #[inline]
    pub fn of_line(info: DirInfo) -> Option<i32> {
        if info.run_length >= 5 {
            return None;
        }
        Some(tier(
            info,
            [Self::LIVE_FOUR, Self::RUSH_FOUR, Self::DEAD_FOUR],
            [Self::LIVE_THREE, Self::SLEEP_THREE, Self::DEAD_THREE],
            [Self::LIVE_TWO, Self::SLEEP_TWO, Self::DEAD_TWO],
            [Self::LIVE_ONE, Self::HALF_ONE, Self::DEAD_ONE],
        ))
    }
}

/// Step scores used by post-game grading
pub struct StepScore;

impl StepScore {
    /// An exact five adds nothing; the win bonus rewards it instead
    pub const FIVE: i32 = 0;
    pub const LIVE_FOUR: i32 = 2_000;
    pub const RUSH_FOUR: i32 = 1_000;
    pub const DEAD_FOUR: i32 = 300;
    pub const LIVE_THREE: i32 = 500;
    pub const SLEEP_THREE: i32 = 200;
    pub const DEAD_THREE: i32 = 80;
    pub const LIVE_TWO: i32 = 100;
    pub const SLEEP_TWO: i32 = 40;
    pub const DEAD_TWO: i32 = 15;
    pub const LIVE_ONE: i32 = 15;
    pub const HALF_ONE: i32 = 8;
    pub const DEAD_ONE: i32 = 2;

    pub const POSITION_FACTOR: i32 = 10;
    /// Extra points for the side whose last move won
    pub const WIN_BONUS: i32 = 2_000;
    /// Late moves weigh up to `1 + TIME_WEIGHT` times the first move
    pub const TIME_WEIGHT: f64 = 0.5;

    #[inline]
    pub fn of_line(info: DirInfo) -> i32 {
        if info.run_length >= 5 {
            return Self::FIVE;
        }
        tier(
            info,
            [Self::LIVE_FOUR, Self::RUSH_FOUR, Self::DEAD_FOUR],
            [Self::LIVE_THREE, Self::SLEEP_THREE, Self::DEAD_THREE],
            [Self::LIVE_TWO, Self::SLEEP_TWO, Self::DEAD_TWO],
            [Self::LIVE_ONE, Self::HALF_ONE, Self::DEAD_ONE],
        )
    }
}

/// Pick `[live, half, dead]` from the row matching the run length
#[inline]
fn tier(info: DirInfo, four: [i32; 3], three: [i32; 3], two: [i32; 3], one: [i32; 3]) -> i32 {
    let row = match info.run_length {
        4 => four,
        3 => three,
        2 => two,
        _ => one,
    };
    match info.open_ends() {
        2 => row[0],
        1 => row[1],
        _ => row[2],
    }
}
