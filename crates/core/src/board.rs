//! Board module - the 10x20 grid, collision, merging and line clearing
//!
//! Cells live in a flat row-major array, so a board is `Copy` and the pure
//! `merge_board` / `clear_lines` functions are just an in-place pass over a
//! copy. Coordinates: x 0..9 left to right, y 0..19 top to bottom. Piece cells
//! with y < 0 are above the visible grid: they never collide with content and
//! are dropped when merged.

use arrayvec::ArrayVec;

use crate::pieces::Piece;
use crate::types::{Block, Cell, Position, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by one clear, bottom to top
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
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

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Whether a single piece cell at (x, y) would collide.
    ///
    /// Walls and floor always collide; above the grid never collides.
    pub fn blocks(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return true;
        }
        y >= 0 && self.is_occupied(x, y)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Cells of row `y`
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * BOARD_WIDTH as usize;
        &self.cells[start..start + BOARD_WIDTH as usize]
    }

    /// Whether `piece` placed at `pos` overlaps walls, floor or locked cells
    pub fn collides(&self, piece: &Piece, pos: Position) -> bool {
        piece
            .shape
            .cells()
            .any(|(dx, dy)| self.blocks(pos.x + dx, pos.y + dy))
    }

    /// Write the piece's cells into the board.
    ///
    /// Cells outside the grid are skipped. Returns true if any cell was above
    /// row 0 (the piece was locked while still partially off-screen).
    pub fn merge_piece(&mut self, piece: &Piece, pos: Position) -> bool {
        let block = Block {
            kind: piece.kind,
            color: piece.color,
        };
        let mut above_top = false;
        for (dx, dy) in piece.shape.cells() {
            let (x, y) = (pos.x + dx, pos.y + dy);
            if y < 0 {
                above_top = true;
            }
            self.set(x, y, Some(block));
        }
        above_top
    }

    /// Clear all full rows and return the row indices that were cleared (bottom to top)
    ///
    /// Two-pointer compaction: surviving rows slide down over the removed ones
    /// and the freed rows at the top are emptied, so the row count never changes.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        self.cells[..write_y * width].fill(None);
        cleared_rows
    }

    /// Lowest row `piece` can reach by falling straight down from `pos`
    pub fn drop_position(&self, piece: &Piece, pos: Position) -> Position {
        let mut landed = pos;
        while !self.collides(piece, landed.shifted(0, 1)) {
            landed = landed.shifted(0, 1);
        }
        landed
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy out as a row-major 2D grid
    pub fn to_grid(&self) -> [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize] {
        let mut grid = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        for (y, row) in grid.iter_mut().enumerate() {
            row.copy_from_slice(self.row(y));
        }
        grid
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// True if `piece` at `pos` is out of bounds horizontally, below the floor,
/// or overlaps an occupied cell on a visible row.
pub fn check_collision(board: &Board, piece: &Piece, pos: Position) -> bool {
    board.collides(piece, pos)
}

/// New board with `piece` written at `pos`; out-of-range cells are ignored.
pub fn merge_board(board: &Board, piece: &Piece, pos: Position) -> Board {
    let mut merged = *board;
    merged.merge_piece(piece, pos);
    merged
}

/// New board with every complete row removed and empty rows padded on top,
/// plus the number of rows removed.
pub fn clear_lines(board: &Board) -> (Board, usize) {
    let mut cleared = *board;
    let rows = cleared.clear_full_rows();
    (cleared, rows.len())
}
