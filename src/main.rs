//! Gomoku AI Engine CLI
//!
//! A command-line interface for exercising the Gomoku AI engine: engine
//! self-play, a single decision for a given position, and a fixed set of
//! tactical scenarios. Set `RUST_LOG=gomoku=debug` to see which rule fired.

use std::path::PathBuf;

use anyhow::{bail, Context};
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gomoku::rules::winning_line;
use gomoku::{check_win, grade_game, AIEngine, Board, Difficulty, EngineConfig, Pos, Stone};

#[derive(StructOpt)]
#[structopt(name = "gomoku", about = "Gomoku AI engine")]
struct Options {
    /// Engine config as JSON; missing keys take their defaults
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,
    /// Difficulty 1-5, overrides the config file
    #[structopt(short, long)]
    difficulty: Option<u8>,
    #[structopt(subcommand)]
    command: Command,
}

#[derive(StructOpt)]
enum Command {
    /// Let the engine play both sides and grade the game
    SelfPlay {
        #[structopt(short, long, default_value = "15")]
        size: usize,
        /// Stop after this many moves
        #[structopt(long)]
        max_moves: Option<usize>,
    },
    /// Decide one move for a position given as one-based `row,col` moves, Black first
    Decide {
        #[structopt(short, long, default_value = "15")]
        size: usize,
        moves: Vec<String>,
    },
    /// Run the built-in tactical scenarios
    Scenarios,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = Options::from_args();
    let engine = AIEngine::with_config(load_config(&options)?);

    match options.command {
        Command::SelfPlay { size, max_moves } => self_play(&engine, size, max_moves),
        Command::Decide { size, moves } => decide(&engine, size, &moves),
        Command::Scenarios => {
            run_scenarios(&engine);
            Ok(())
        }
    }
}

fn load_config(options: &Options) -> anyhow::Result<EngineConfig> {
    let mut config = match &options.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            EngineConfig::load_from_json(&json)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => EngineConfig::default(),
    };
    if let Some(level) = options.difficulty {
        config.difficulty = Difficulty::new(level)?;
    }
    Ok(config)
}

fn self_play(engine: &AIEngine, size: usize, max_moves: Option<usize>) -> anyhow::Result<()> {
    let mut board = Board::with_size(size)?;
    let limit = max_moves.unwrap_or(size * size);
    let mut color = Stone::Black;
    let mut winner = None;

    info!(size, difficulty = engine.config().difficulty.level(), "self-play started");

    while board.stone_count() < limit {
        let result = engine.decide_move(&board, color);
        let Some(pos) = result.best_move else {
            break;
        };
        board.place_stone(pos, color);
        println!(
            "{:>3}. {:?} {pos}  {:?}  score {}  {}ms",
            board.stone_count(),
            color,
            result.search_type,
            result.score,
            result.time_ms
        );

        if check_win(&board, pos, color) {
            winner = Some((color, pos));
            break;
        }
        color = color.opponent();
    }

    println!("\n{board}");
    match winner {
        Some((stone, pos)) => {
            let cells: Vec<String> = winning_line(&board, pos, stone)
                .unwrap_or_default()
                .iter()
                .map(Pos::to_string)
                .collect();
            println!("Winner: {stone:?} with {}", cells.join(" "));
        }
        None => println!("No winner after {} moves", board.stone_count()),
    }

    let report = grade_game(&board);
    println!("Black total: {}", report.black_total);
    println!("White total: {}", report.white_total);
    if let Some(best) = report.grades.iter().max_by_key(|g| g.grade) {
        println!("Strongest move: {:?} {} ({})", best.mv.stone, best.mv.pos, best.grade);
    }
    Ok(())
}

fn decide(engine: &AIEngine, size: usize, moves: &[String]) -> anyhow::Result<()> {
    let mut board = Board::with_size(size)?;
    let mut color = Stone::Black;
    for text in moves {
        let (row, col) = parse_move(text)?;
        board
            .try_place(row - 1, col - 1, color)
            .with_context(|| format!("playing {text}"))?;
        color = color.opponent();
    }

    let result = engine.decide_move(&board, color);
    println!("{board}");
    match result.best_move {
        Some(pos) => println!(
            "{color:?} plays {pos}  ({:?}, score {}, {} nodes, {}ms)",
            result.search_type, result.score, result.nodes, result.time_ms
        ),
        None => println!("No move: board is full"),
    }
    Ok(())
}

fn parse_move(text: &str) -> anyhow::Result<(i32, i32)> {
    let Some((row, col)) = text.split_once(',') else {
        bail!("expected row,col but got {text:?}");
    };
    let row = row.trim().parse().with_context(|| format!("bad row in {text:?}"))?;
    let col = col.trim().parse().with_context(|| format!("bad column in {text:?}"))?;
    Ok((row, col))
}

fn run_scenarios(engine: &AIEngine) {
    println!("===========================================");
    println!("       Gomoku AI Engine v{}", env!("CARGO_PKG_VERSION"));
    println!("===========================================\n");

    println!("--- Test 1: Empty Board ---");
    let board = Board::new();
    check(engine, &board, Stone::Black, &[board.center()]);

    println!("\n--- Test 2: Find Winning Move ---");
    let mut board = Board::new();
    for i in 0..4 {
        board.place_stone(Pos::new(9, i), Stone::Black);
    }
    check(engine, &board, Stone::Black, &[Pos::new(9, 4)]);

    println!("\n--- Test 3: Block Opponent Four ---");
    let mut board = Board::new();
    for i in 0..4 {
        board.place_stone(Pos::new(9, i), Stone::White);
    }
    board.place_stone(Pos::new(10, 5), Stone::Black);
    check(engine, &board, Stone::Black, &[Pos::new(9, 4)]);

    println!("\n--- Test 4: Block Open Three ---");
    let mut board = Board::new();
    for c in 6..9 {
        board.place_stone(Pos::new(7, c), Stone::White);
    }
    check(engine, &board, Stone::Black, &[Pos::new(7, 5), Pos::new(7, 9)]);

    println!("\n--- Test 5: Opening Response ---");
    let mut board = Board::new();
    board.place_stone(board.center(), Stone::Black);
    let result = engine.decide_move(&board, Stone::White);
    report(&result);
    match result.best_move {
        Some(m) if m.manhattan(board.center()) <= 4 => println!("  Result: PASS - Near center"),
        Some(_) => println!("  Result: QUESTIONABLE - Far from center"),
        None => println!("  Result: FAIL - No move found"),
    }

    println!("\n--- Test 6: Performance ---");
    performance(engine);

    println!("\n===========================================");
    println!("          All Tests Completed!");
    println!("===========================================");
}

fn check(engine: &AIEngine, board: &Board, color: Stone, expected: &[Pos]) {
    let result = engine.decide_move(board, color);
    report(&result);
    match result.best_move {
        Some(m) if expected.contains(&m) => println!("  Result: PASS"),
        Some(_) => println!("  Result: FAIL - Wrong move"),
        None => println!("  Result: FAIL - No move found"),
    }
}

fn report(result: &gomoku::MoveResult) {
    if let Some(m) = result.best_move {
        println!("  Plays: {m}");
    }
    println!("  Search type: {:?}", result.search_type);
    println!("  Time: {}ms, nodes: {}", result.time_ms, result.nodes);
}

fn performance(engine: &AIEngine) {
    let mut board = Board::new();
    let moves = [
        (7, 7, Stone::Black),
        (8, 8, Stone::White),
        (6, 6, Stone::Black),
        (8, 6, Stone::White),
        (7, 5, Stone::Black),
        (7, 8, Stone::White),
        (5, 7, Stone::Black),
        (9, 7, Stone::White),
    ];
    for (r, c, stone) in moves {
        board.place_stone(Pos::new(r, c), stone);
    }
    println!("  Position: Mid-game with {} stones", board.stone_count());

    let iterations = 5u64;
    let mut total_time = 0;
    let mut total_nodes = 0;
    for i in 0..iterations {
        let result = engine.decide_move(&board, Stone::Black);
        total_time += result.time_ms;
        total_nodes += result.nodes;
        if i == 0 {
            report(&result);
        }
    }

    println!("  Average time: {}ms", total_time / iterations);
    println!("  Average nodes: {}", total_nodes / iterations);
}
