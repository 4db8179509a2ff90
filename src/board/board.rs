//! Board structure with an ordered move log

use std::fmt;

use super::{BoardError, Move, Pos, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Square game board.
///
/// The number of occupied cells always equals `history().len()`: stones only
/// enter through `place_stone`/`try_place` and leave through `undo_move`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
    /// Move log, last entry is the most recent move
    history: Vec<Move>,
}

impl Board {
    /// Create an empty board of the default size (15x15)
    pub fn new() -> Self {
        Self::empty(DEFAULT_BOARD_SIZE)
    }

    /// Create an empty board with the given side length
    pub fn with_size(size: usize) -> Result<Self, BoardError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Self::empty(size))
    }

    fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
            history: Vec::with_capacity(size * size),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Center cell; on even sizes this is the lower-right of the four middle cells
    #[inline]
    pub fn center(&self) -> Pos {
        let c = (self.size / 2) as u8;
        Pos::new(c, c)
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.row as usize * self.size + pos.col as usize
    }

    /// Check signed coordinates against the grid
    #[inline]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        let size = self.size as i32;
        row >= 0 && row < size && col >= 0 && col < size
    }

    /// Convert signed coordinates to a position if they are on the grid
    #[inline]
    pub fn pos_at(&self, row: i32, col: i32) -> Option<Pos> {
        if self.contains(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[self.index(pos)]
    }

    /// Stone at signed coordinates, `None` when off the board
    #[inline]
    pub fn get_at(&self, row: i32, col: i32) -> Option<Stone> {
        self.pos_at(row, col).map(|pos| self.get(pos))
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone and log the move.
    ///
    /// The caller guarantees the cell is on the board and empty; use
    /// `try_place` for unvalidated input.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(self.is_empty(pos), "place_stone on occupied cell {pos}");
        debug_assert!(stone != Stone::Empty);
        let idx = self.index(pos);
        self.cells[idx] = stone;
        self.history.push(Move { stone, pos });
    }

    /// Validated placement for moves coming from outside the engine
    pub fn try_place(&mut self, row: i32, col: i32, stone: Stone) -> Result<Pos, BoardError> {
        let pos = self
            .pos_at(row, col)
            .ok_or(BoardError::OutOfBounds { row, col })?;
        if !self.is_empty(pos) {
            return Err(BoardError::Occupied(pos));
        }
        self.place_stone(pos, stone);
        Ok(pos)
    }

    /// Take back the most recent move
    #[inline]
    pub fn undo_move(&mut self) -> Option<Move> {
        let last = self.history.pop()?;
        let idx = self.index(last.pos);
        self.cells[idx] = Stone::Empty;
        Some(last)
    }

    /// Take back the last `count` moves, or nothing if fewer were played
    pub fn undo_moves(&mut self, count: usize) -> Result<(), BoardError> {
        if count > self.history.len() {
            return Err(BoardError::NotEnoughMoves {
                requested: count,
                available: self.history.len(),
            });
        }
        for _ in 0..count {
            self.undo_move();
        }
        Ok(())
    }

    /// Moves played so far, oldest first
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.history.len()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.history.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.history.len() == self.cells.len()
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let size = self.size as u8;
        (0..size).flat_map(move |r| (0..size).map(move |c| Pos::new(r, c)))
    }

    /// First empty cell in row-major order
    pub fn first_empty(&self) -> Option<Pos> {
        self.positions().find(|&pos| self.is_empty(pos))
    }

    /// Check whether any stone lies within Chebyshev distance `radius` of `pos`
    pub fn has_neighbor(&self, pos: Pos, radius: i32) -> bool {
        for dr in -radius..=radius {
            for dc in -radius..=radius {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let (r, c) = pos.offset(dr, dc, 1);
                if matches!(self.get_at(r, c), Some(s) if s != Stone::Empty) {
                    return true;
                }
            }
        }
        false
    }

    /// Copy of the board with every Black stone turned White and vice versa
    pub fn swapped(&self) -> Board {
        Board {
            size: self.size,
            cells: self.cells.iter().map(|s| s.opponent()).collect(),
            history: self
                .history
                .iter()
                .map(|m| Move {
                    stone: m.stone.opponent(),
                    pos: m.pos,
                })
                .collect(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.size {
            write!(f, "{:>3}", c + 1)?;
        }
        writeln!(f)?;
        for r in 0..self.size {
            write!(f, "{:>3}", r + 1)?;
            for c in 0..self.size {
                write!(f, "{:>3}", self.get(Pos::new(r as u8, c as u8)).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
