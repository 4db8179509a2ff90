//! Engine-wide properties checked through the public API

use gomoku::eval::evaluate_move;
use gomoku::search::{detect_threat, generate_candidates, Searcher, ThreatLevel};
use gomoku::{check_win, evaluate_position, AIEngine, Board, EngineConfig, Pos, Stone};

const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

fn midgame() -> Board {
    let mut board = Board::new();
    let moves = [
        (7, 7),
        (8, 8),
        (6, 6),
        (8, 6),
        (7, 5),
        (7, 8),
        (5, 7),
        (9, 7),
        (6, 8),
    ];
    let mut color = Stone::Black;
    for (r, c) in moves {
        board.place_stone(Pos::new(r, c), color);
        color = color.opponent();
    }
    board
}

fn empties(board: &Board) -> Vec<Pos> {
    board.positions().filter(|&p| board.is_empty(p)).collect()
}

/// Cells `start + k * dir` for `k` in `0..len`
fn line(start: (i32, i32), dir: (i32, i32), len: i32) -> Vec<Pos> {
    (0..len)
        .map(|k| Pos::new((start.0 + dir.0 * k) as u8, (start.1 + dir.1 * k) as u8))
        .collect()
}

#[test]
fn evaluation_restores_board() {
    let board = midgame();
    let before = board.clone();
    for pos in empties(&board) {
        for side in [Stone::Black, Stone::White] {
            let _ = evaluate_position(&board, pos, side);
            let _ = evaluate_move(&board, pos, side, 1.4);
            let _ = detect_threat(&board, pos, side);
        }
    }
    assert_eq!(board, before);
}

#[test]
fn search_restores_board() {
    let mut board = midgame();
    let before = board.clone();
    let last = board.last_move().unwrap().pos;

    let mut searcher = Searcher::new(EngineConfig::default(), Stone::White);
    let _ = searcher.alpha_beta(&mut board, last, Stone::White, 2, i32::MIN / 2, i32::MAX / 2, true);
    assert_eq!(board, before);
    assert_eq!(board.history(), before.history());

    let _ = AIEngine::new().decide_move(&board, Stone::White);
    assert_eq!(board, before);
}

#[test]
fn evaluation_is_color_symmetric() {
    let board = midgame();
    let swapped = board.swapped();
    for pos in empties(&board) {
        assert_eq!(
            evaluate_position(&board, pos, Stone::Black),
            evaluate_position(&swapped, pos, Stone::White),
            "at {pos}"
        );
        assert_eq!(
            detect_threat(&board, pos, Stone::White),
            detect_threat(&swapped, pos, Stone::Black),
            "at {pos}"
        );
    }
}

#[test]
fn candidates_are_color_symmetric() {
    let board = midgame();
    let config = EngineConfig::default();
    let black = generate_candidates(&board, Stone::Black, &config);
    let white = generate_candidates(&board.swapped(), Stone::White, &config);
    assert_eq!(black, white);
}

#[test]
fn five_in_any_orientation_wins() {
    for dir in DIRECTIONS {
        let start = if dir.1 < 0 { (3, 10) } else { (3, 3) };
        let cells = line(start, dir, 5);

        // complete the line at each of its cells in turn
        for completing in 0..cells.len() {
            let mut board = Board::new();
            for (i, &pos) in cells.iter().enumerate() {
                if i != completing {
                    board.place_stone(pos, Stone::Black);
                }
            }
            let last = cells[completing];
            assert!(!check_win(&board, last, Stone::White));

            board.place_stone(last, Stone::Black);
            assert!(check_win(&board, last, Stone::Black), "{dir:?} at {last}");
        }
    }
}

#[test]
fn four_does_not_win() {
    for dir in DIRECTIONS {
        let start = if dir.1 < 0 { (3, 10) } else { (3, 3) };
        let mut board = Board::new();
        for pos in line(start, dir, 4) {
            board.place_stone(pos, Stone::White);
        }
        let last = board.last_move().unwrap().pos;
        assert!(!check_win(&board, last, Stone::White), "{dir:?}");
    }
}

#[test]
fn open_three_reports_at_least_three() {
    for dir in DIRECTIONS {
        let start = if dir.1 < 0 { (5, 9) } else { (5, 5) };
        let cells = line(start, dir, 3);
        for completing in 0..3 {
            let mut board = Board::new();
            for (i, &pos) in cells.iter().enumerate() {
                if i != completing {
                    board.place_stone(pos, Stone::Black);
                }
            }
            let threat = detect_threat(&board, cells[completing], Stone::Black);
            assert!(threat >= ThreatLevel::Three, "{dir:?}: {threat:?}");
        }
    }
}

#[test]
fn completing_five_reports_win() {
    for dir in DIRECTIONS {
        let start = if dir.1 < 0 { (2, 12) } else { (2, 2) };
        let cells = line(start, dir, 6);
        // overlines count too
        for len in [5, 6] {
            let mut board = Board::new();
            for &pos in &cells[..len - 1] {
                board.place_stone(pos, Stone::White);
            }
            let threat = detect_threat(&board, cells[len - 1], Stone::White);
            assert_eq!(threat, ThreatLevel::Win, "{dir:?}, run {len}");
        }
    }
}

#[test]
fn engine_blocks_open_three() {
    let engine = AIEngine::new();
    for dir in DIRECTIONS {
        let start = if dir.1 < 0 { (6, 8) } else { (6, 6) };
        let mut board = Board::new();
        for pos in line(start, dir, 3) {
            board.place_stone(pos, Stone::White);
        }
        let ends = line((start.0 - dir.0, start.1 - dir.1), dir, 5);
        let expected = [ends[0], ends[4]];

        let pos = engine.get_move(&board, Stone::Black).unwrap();
        assert!(expected.contains(&pos), "{dir:?}: played {pos}");
    }
}

#[test]
fn engine_completes_rush_four() {
    let engine = AIEngine::new();
    let mut board = Board::new();
    for c in 0..4 {
        board.place_stone(Pos::new(4, c), Stone::Black);
    }
    board.place_stone(Pos::new(10, 10), Stone::White);
    board.place_stone(Pos::new(11, 11), Stone::White);
    board.place_stone(Pos::new(12, 12), Stone::White);

    assert_eq!(engine.get_move(&board, Stone::Black), Some(Pos::new(4, 4)));

    // same with the open end on the other side
    let mut board = Board::new();
    for c in 11..15 {
        board.place_stone(Pos::new(2, c), Stone::White);
    }
    board.place_stone(Pos::new(2, 9), Stone::Black);
    assert_eq!(engine.get_move(&board, Stone::White), Some(Pos::new(2, 10)));
}

#[test]
fn decisions_are_deterministic() {
    let board = midgame();
    let engine = AIEngine::new();
    let first = engine.decide_move(&board, Stone::White);
    for _ in 0..3 {
        let again = engine.decide_move(&board, Stone::White);
        assert_eq!(again.best_move, first.best_move);
        assert_eq!(again.search_type, first.search_type);
        assert_eq!(again.score, first.score);
    }
}

#[test]
fn small_board_game_finishes() {
    let engine = AIEngine::with_config(EngineConfig::load_from_json(r#"{ "difficulty": 2 }"#).unwrap());
    let mut board = Board::with_size(7).unwrap();
    let mut color = Stone::Black;

    while !board.is_full() {
        let pos = engine.get_move(&board, color).unwrap();
        assert!(board.is_empty(pos));
        board.place_stone(pos, color);
        if check_win(&board, pos, color) {
            break;
        }
        color = color.opponent();
    }
    assert!(board.stone_count() >= 9);
}
