//! Board representation for Gomoku

pub mod board;


use std::fmt;

// Re-exports
pub use board::Board;

/// Smallest supported board side
pub const MIN_BOARD_SIZE: usize = 5;
/// Largest supported board side
pub const MAX_BOARD_SIZE: usize = 25;
/// Board side used when none is configured
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// Stone colors. Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Stone::Black => 'x',
            Stone::White => 'o',
            Stone::Empty => '.',
        }
    }
}

/// Position on the board.
///
/// Ordering is row-major, which is also the fallback scan order of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < MAX_BOARD_SIZE && (col as usize) < MAX_BOARD_SIZE);
        Self { row, col }
    }

    /// Manhattan distance to another position
    #[inline]
    pub fn manhattan(self, other: Pos) -> i32 {
        (i32::from(self.row) - i32::from(other.row)).abs()
            + (i32::from(self.col) - i32::from(other.col)).abs()
    }

    /// Position shifted by `steps` cells along `(dr, dc)`, without bounds checks.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, steps: i32) -> (i32, i32) {
        (
            i32::from(self.row) + dr * steps,
            i32::from(self.col) + dc * steps,
        )
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // one-based, the way players read coordinates
        write!(f, "({}, {})", self.row + 1, self.col + 1)
    }
}

/// One entry of the move log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub stone: Stone,
    pub pos: Pos,
}

/// Errors raised by board mutations that callers may get wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Board side outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`
    InvalidSize(usize),
    /// Coordinates outside the grid
    OutOfBounds { row: i32, col: i32 },
    /// Target cell already holds a stone
    Occupied(Pos),
    /// Undo requested more steps than the log holds
    NotEnoughMoves { requested: usize, available: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidSize(size) => write!(
                f,
                "board size {size} is outside {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}"
            ),
            BoardError::OutOfBounds { row, col } => {
                write!(f, "cell ({row}, {col}) is off the board")
            }
            BoardError::Occupied(pos) => write!(f, "cell {pos} is already occupied"),
            BoardError::NotEnoughMoves {
                requested,
                available,
            } => write!(
                f,
                "cannot undo {requested} moves, only {available} played"
            ),
        }
    }
}

impl std::error::Error for BoardError {}
