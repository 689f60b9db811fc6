//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is either empty or holds the
//! display category of the piece that locked there.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)
//!
//! Storage never holds an "out of range" value: bounds live in the query
//! functions, and anything outside the grid reads as occupied. That makes the
//! walls and the floor fall out of [`Board::can_place`] for free.

use arrayvec::ArrayVec;

use crate::pieces::Piece;
use crate::types::{Cell, Point, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// Row indices removed by a single compaction pass.
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if !Self::is_inside(x, y) {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    /// Board coordinate of a local block for a piece at `origin`.
    ///
    /// `None` when the sum does not fit the coordinate type, which can only
    /// mean it is far outside the grid.
    #[inline(always)]
    fn translate(origin: Point, block: Point) -> Option<(i8, i8)> {
        Some((
            origin.x.checked_add(block.x)?,
            origin.y.checked_add(block.y)?,
        ))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// True iff (x, y) lies on the grid.
    pub fn is_inside(x: i8, y: i8) -> bool {
        x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// True iff (x, y) is on the grid and holds no block.
    ///
    /// Out-of-bounds positions are never empty.
    pub fn is_empty_at(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Cell::Empty))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(cell) if !cell.is_empty())
    }

    /// True iff every cell of `piece` at `origin` is inside the grid and empty.
    ///
    /// This is the only collision test in the engine: spawning, moving and
    /// rotating all go through it.
    pub fn can_place(&self, piece: &Piece, origin: Point) -> bool {
        piece.blocks().iter().all(|&block| {
            Self::translate(origin, block).is_some_and(|(x, y)| self.is_empty_at(x, y))
        })
    }

    /// Write the piece's display category into its cells.
    ///
    /// Cells that fall outside the grid are skipped.
    pub fn place(&mut self, piece: &Piece, origin: Point) {
        let cell = piece.cell();
        for block in piece.blocks() {
            if let Some((x, y)) = Self::translate(origin, block) {
                self.set(x, y, cell);
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        self.row(y).iter().all(|cell| !cell.is_empty())
    }

    /// Cells of row `y`, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not a valid row index.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * WIDTH;
        &self.cells[start..start + WIDTH]
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    ///
    /// Uses a two-pointer pass from the bottom: surviving rows slide down over
    /// removed ones in their original order, and the rows freed at the top are
    /// reset to empty.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let mut write_y = HEIGHT;

        // Scan from bottom to top
        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    // copy_within handles overlapping ranges
                    let src_start = read_y * WIDTH;
                    let dst_start = write_y * WIDTH;
                    self.cells
                        .copy_within(src_start..src_start + WIDTH, dst_start);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_y * WIDTH].fill(Cell::Empty);

        cleared_rows
    }

    /// Remove every full row, compact the grid and return how many went.
    pub fn clear_full_lines(&mut self) -> usize {
        self.clear_full_rows().len()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Grid as nested rows (`[y][x]`).
    pub fn cells_2d(&self) -> [[Cell; WIDTH]; HEIGHT] {
        let mut out = [[Cell::Empty; WIDTH]; HEIGHT];
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(self.row(y));
        }
        out
    }

    /// Write the grid into a snapshot buffer as cell codes.
    pub fn write_u8_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (y, row) in out.iter_mut().enumerate() {
            for (x, code) in row.iter_mut().enumerate() {
                *code = self.cells[y * WIDTH + x].code();
            }
        }
    }

    /// Build a board from nested rows (`[y][x]`).
    pub fn from_cells_2d(rows: &[[Cell; WIDTH]; HEIGHT]) -> Self {
        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            board.cells[y * WIDTH..(y + 1) * WIDTH].copy_from_slice(row);
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
