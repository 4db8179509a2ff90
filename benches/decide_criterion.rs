use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use gomoku::search::generate_candidates;
use gomoku::{AIEngine, Board, Difficulty, EngineConfig, Pos, Stone};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    /// Moves in play order, Black first
    moves: &'static [(u8, u8)],
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "opening_reply",
        moves: &[(7, 7)],
    },
    BenchCase {
        name: "midgame",
        moves: &[
            (7, 7),
            (8, 8),
            (6, 6),
            (8, 6),
            (7, 5),
            (7, 8),
            (5, 7),
            (9, 7),
        ],
    },
    BenchCase {
        name: "crowded",
        moves: &[
            (7, 7),
            (7, 8),
            (8, 7),
            (6, 7),
            (8, 8),
            (9, 9),
            (6, 9),
            (8, 6),
            (5, 10),
            (4, 11),
            (9, 5),
            (10, 4),
        ],
    },
];

fn build(case: &BenchCase) -> (Board, Stone) {
    let mut board = Board::new();
    let mut color = Stone::Black;
    for &(r, c) in case.moves {
        board.place_stone(Pos::new(r, c), color);
        color = color.opponent();
    }
    (board, color)
}

fn bench_candidates(c: &mut Criterion) {
    let mut group = c.benchmark_group("candidates");
    let config = EngineConfig::default();

    for case in CASES {
        let (board, color) = build(case);
        group.bench_with_input(BenchmarkId::from_parameter(case.name), &board, |b, board| {
            b.iter(|| black_box(generate_candidates(black_box(board), color, &config)));
        });
    }

    group.finish();
}

fn bench_decide(c: &mut Criterion) {
    let mut group = c.benchmark_group("decide");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    for level in 1..=3 {
        let Ok(difficulty) = Difficulty::new(level) else {
            continue;
        };
        let engine = AIEngine::with_config(EngineConfig::with_difficulty(difficulty));

        for case in CASES {
            let (board, color) = build(case);

            // every benchmarked position must reach a decision
            assert!(engine.get_move(&board, color).is_some(), "no move for {}", case.name);

            let bench_name = format!("{}_d{}", case.name, level);
            group.bench_with_input(BenchmarkId::from_parameter(bench_name), &board, |b, board| {
                b.iter(|| black_box(engine.decide_move(black_box(board), color)));
            });
        }
    }

    group.finish();
}

criterion_group!(decide_benches, bench_candidates, bench_decide);
criterion_main!(decide_benches);
