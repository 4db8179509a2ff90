//! Threat classification of a single placement
//!
//! A coarse, ordered urgency scale used by the tactical rules of the engine
//! and by candidate ordering. Live and rush fours share one tier here even
//! though the evaluator scores them far apart: both force an immediate reply.

use crate::board::{Board, Pos, Stone};
use crate::rules::{scan_all, DirInfo};

/// Urgency of a placement, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ThreatLevel {
    None,
    /// Two or more in a row, any openness
    Potential,
    /// Two or more directions at Three or above
    Double,
    /// Live three: _OOO_
    Three,
    /// Four with at least one open end
    Four,
    /// Five or more
    Win,
}

impl ThreatLevel {
    /// Ordering bonus added to a candidate's score
    #[inline]
    pub fn bonus(self) -> i32 {
        match self {
            ThreatLevel::None => 0,
            ThreatLevel::Potential => 500,
            ThreatLevel::Double => 1_000,
            ThreatLevel::Three => 2_000,
            ThreatLevel::Four => 5_000,
            ThreatLevel::Win => 10_000,
        }
    }

    /// Threat formed by a single line
    #[inline]
    pub fn of_line(info: DirInfo) -> ThreatLevel {
        match info.run_length {
            n if n >= 5 => ThreatLevel::Win,
            4 if info.open_ends() >= 1 => ThreatLevel::Four,
            3 if info.is_live() => ThreatLevel::Three,
            n if n >= 2 => ThreatLevel::Potential,
            _ => ThreatLevel::None,
        }
    }
}

/// Classify a hypothetical `side` stone at `pos`.
///
/// Two or more directions at Three-or-above collapse to `Double`; a completed
/// five stays `Win`. The board is only read.
#[must_use]
pub fn detect_threat(board: &Board, pos: Pos, side: Stone) -> ThreatLevel {
    let mut max_threat = ThreatLevel::None;
    let mut strong_lines = 0;

    for info in scan_all(board, pos, side) {
        let threat = ThreatLevel::of_line(info);
        max_threat = max_threat.max(threat);
        if threat >= ThreatLevel::Three {
            strong_lines += 1;
        }
    }

    if strong_lines >= 2 && max_threat != ThreatLevel::Win {
        ThreatLevel::Double
    } else {
        max_threat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_all(board: &mut Board, cells: &[(u8, u8)], stone: Stone) {
        for &(r, c) in cells {
            board.place_stone(Pos::new(r, c), stone);
        }
    }

    #[test]
    fn test_threat_ordering() {
        assert!(ThreatLevel::None < ThreatLevel::Potential);
        assert!(ThreatLevel::Potential < ThreatLevel::Double);
        assert!(ThreatLevel::Double < ThreatLevel::Three);
        assert!(ThreatLevel::Three < ThreatLevel::Four);
        assert!(ThreatLevel::Four < ThreatLevel::Win);
    }

    #[test]
    fn test_bonus_strictly_increasing() {
        let levels = [
            ThreatLevel::None,
            ThreatLevel::Potential,
            ThreatLevel::Double,
            ThreatLevel::Three,
            ThreatLevel::Four,
            ThreatLevel::Win,
        ];
        for pair in levels.windows(2) {
            assert!(pair[0].bonus() < pair[1].bonus());
        }
    }

    #[test]
    fn test_isolated_stone_is_none() {
        let board = Board::new();
        assert_eq!(detect_threat(&board, Pos::new(7, 7), Stone::Black), ThreatLevel::None);
    }

    #[test]
    fn test_two_is_potential() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        assert_eq!(
            detect_threat(&board, Pos::new(7, 8), Stone::Black),
            ThreatLevel::Potential
        );
    }

    #[test]
    fn test_live_three() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 6), (7, 7)], Stone::Black);
        assert_eq!(detect_threat(&board, Pos::new(7, 8), Stone::Black), ThreatLevel::Three);
    }

    #[test]
    fn test_closed_three_is_only_potential() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 6), (7, 7)], Stone::Black);
        board.place_stone(Pos::new(7, 5), Stone::White);
        assert_eq!(
            detect_threat(&board, Pos::new(7, 8), Stone::Black),
            ThreatLevel::Potential
        );
    }

    #[test]
    fn test_rush_and_live_four_share_tier() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 5), (7, 6), (7, 7)], Stone::Black);
        assert_eq!(detect_threat(&board, Pos::new(7, 8), Stone::Black), ThreatLevel::Four);

        board.place_stone(Pos::new(7, 4), Stone::White);
        assert_eq!(detect_threat(&board, Pos::new(7, 8), Stone::Black), ThreatLevel::Four);
    }

    #[test]
    fn test_dead_four_is_potential() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 5), (7, 6), (7, 7)], Stone::Black);
        board.place_stone(Pos::new(7, 4), Stone::White);
        board.place_stone(Pos::new(7, 9), Stone::White);
        assert_eq!(
            detect_threat(&board, Pos::new(7, 8), Stone::Black),
            ThreatLevel::Potential
        );
    }

    #[test]
    fn test_five_is_win() {
        let mut board = Board::new();
        place_all(&mut board, &[(3, 3), (4, 4), (5, 5), (6, 6)], Stone::White);
        assert_eq!(detect_threat(&board, Pos::new(7, 7), Stone::White), ThreatLevel::Win);
        assert_eq!(detect_threat(&board, Pos::new(2, 2), Stone::White), ThreatLevel::Win);
    }

    #[test]
    fn test_double_three_escalates() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 5), (7, 6), (5, 7), (6, 7)], Stone::Black);
        assert_eq!(
            detect_threat(&board, Pos::new(7, 7), Stone::Black),
            ThreatLevel::Double
        );
    }

    #[test]
    fn test_four_plus_three_escalates() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 4), (7, 5), (7, 6), (5, 7), (6, 7)], Stone::Black);
        assert_eq!(
            detect_threat(&board, Pos::new(7, 7), Stone::Black),
            ThreatLevel::Double
        );
    }

    #[test]
    fn test_win_with_three_stays_win() {
        let mut board = Board::new();
        place_all(
            &mut board,
            &[(7, 3), (7, 4), (7, 5), (7, 6), (5, 7), (6, 7)],
            Stone::Black,
        );
        assert_eq!(detect_threat(&board, Pos::new(7, 7), Stone::Black), ThreatLevel::Win);
    }

    #[test]
    fn test_board_is_untouched() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 6), (7, 7)], Stone::Black);
        let before = board.clone();
        let _ = detect_threat(&board, Pos::new(7, 8), Stone::White);
        assert_eq!(board, before);
    }
}
