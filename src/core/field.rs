//! Field grid - the settled, non-falling cells.
//!
//! A fixed 10x20 grid of color identifiers where 0 means empty. Uses a flat
//! array for cache locality and zero-allocation. Coordinates are (row, col)
//! with row 0 at the top. Cells are written by `commit` and cleared only by
//! row compaction.

use crate::core::piece::Piece;
use crate::types::{ColorId, FIELD_HEIGHT, FIELD_WIDTH};

const FIELD_SIZE: usize = FIELD_WIDTH * FIELD_HEIGHT;

/// The playing field: 10 columns x 20 rows, flat row-major storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    cells: [ColorId; FIELD_SIZE],
}

impl Field {
    /// Create a new empty field.
    pub fn new() -> Self {
        Self {
            cells: [0; FIELD_SIZE],
        }
    }

    pub fn width(&self) -> usize {
        FIELD_WIDTH
    }

    pub fn height(&self) -> usize {
        FIELD_HEIGHT
    }

    #[inline(always)]
    fn index(row: i16, col: i16) -> Option<usize> {
        if row < 0 || row >= FIELD_HEIGHT as i16 || col < 0 || col >= FIELD_WIDTH as i16 {
            return None;
        }
        Some((row as usize) * FIELD_WIDTH + (col as usize))
    }

    /// Cell color at (row, col), or `None` when out of bounds.
    pub fn get(&self, row: i16, col: i16) -> Option<ColorId> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set a cell. Returns false when out of bounds.
    pub fn set(&mut self, row: i16, col: i16, color: ColorId) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = color;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty: the only position a falling cell may occupy.
    pub fn is_empty_at(&self, row: i16, col: i16) -> bool {
        matches!(self.get(row, col), Some(0))
    }

    /// A row is full iff every cell is non-zero.
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= FIELD_HEIGHT {
            return false;
        }
        let start = row * FIELD_WIDTH;
        self.cells[start..start + FIELD_WIDTH]
            .iter()
            .all(|&c| c != 0)
    }

    /// Permanently write a piece's occupied cells in its color.
    ///
    /// Pure write: the caller has already validated that every target cell
    /// is in bounds and empty.
    pub fn commit(&mut self, piece: &Piece) {
        let color = piece.color();
        for (row, col) in piece.occupied_cells() {
            self.set(row, col, color);
        }
    }

    /// Remove every full row and shift the rows above it down.
    ///
    /// Scans bottom to top. After a row is cleared, the same index is
    /// re-examined because new content has just slid into it; this is what
    /// makes multi-line clears detectable in a single pass. Returns the
    /// number of rows cleared by this call.
    pub fn compact_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut row = FIELD_HEIGHT;
        while row > 0 {
            let r = row - 1;
            if self.is_row_full(r) {
                cleared += 1;
                // Shift rows [0, r) down by one; the copy ranges overlap,
                // copy_within handles that.
                self.cells.copy_within(0..r * FIELD_WIDTH, FIELD_WIDTH);
                self.cells[..FIELD_WIDTH].fill(0);
                // Do not decrement: row r now holds what was row r - 1.
            } else {
                row -= 1;
            }
        }
        cleared
    }

    /// Flat view of all cells, row-major (for rendering).
    pub fn cells(&self) -> &[ColorId] {
        &self.cells
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}
