//! Piece state machine - the falling tetromino.
//!
//! A piece is a kind, an orientation index into the shape catalog, and an
//! anchor (the occupancy grid's top-left corner in field coordinates). All
//! mutation goes through validated transitions: `attempt_move` and
//! `attempt_rotate` either commit the whole candidate or leave the piece
//! untouched and report false. The piece never owns the field; it borrows
//! it read-only for validation.

use arrayvec::ArrayVec;

use crate::core::field::Field;
use crate::core::shapes::CELLS_PER_PIECE;
use crate::types::{ColorId, PieceKind, Rotation, FIELD_WIDTH};

/// Field coordinates of a piece's occupied cells.
pub type PieceCells = ArrayVec<(i16, i16), CELLS_PER_PIECE>;

/// The active falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    orientation: usize,
    row: i16,
    col: i16,
}

impl Piece {
    /// Create a piece at its spawn position: orientation 0, top row,
    /// horizontally centered on the field.
    pub fn spawn(kind: PieceKind) -> Self {
        let grid = kind.orientations()[0];
        let col = (FIELD_WIDTH / 2 - grid[0].len() / 2) as i16;
        Self {
            kind,
            orientation: 0,
            row: 0,
            col,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn orientation(&self) -> usize {
        self.orientation
    }

    /// Anchor position (top-left of the occupancy grid), field coordinates.
    pub fn position(&self) -> (i16, i16) {
        (self.row, self.col)
    }

    pub fn color(&self) -> ColorId {
        self.kind.color()
    }

    /// Field coordinates of the filled cells for the current state.
    pub fn occupied_cells(&self) -> PieceCells {
        Self::cells_at(self.kind, self.orientation, self.row, self.col)
    }

    /// Field coordinates of the filled cells for an arbitrary candidate
    /// orientation and anchor. Used for validation before any commit.
    pub fn cells_at(kind: PieceKind, orientation: usize, row: i16, col: i16) -> PieceCells {
        let mut cells = PieceCells::new();
        let grid = kind.orientations()[orientation];
        for (r, grid_row) in grid.iter().enumerate() {
            for (c, &filled) in grid_row.iter().enumerate() {
                if filled != 0 {
                    cells.push((row + r as i16, col + c as i16));
                }
            }
        }
        cells
    }

    /// Collision rule, shared by move and rotate: every occupied cell of
    /// the candidate must be inside the field and land on an empty cell.
    /// One bad cell rejects the whole candidate.
    fn position_is_valid(
        kind: PieceKind,
        orientation: usize,
        row: i16,
        col: i16,
        field: &Field,
    ) -> bool {
        Self::cells_at(kind, orientation, row, col)
            .iter()
            .all(|&(r, c)| field.is_empty_at(r, c))
    }

    /// Try to translate the piece by (d_col, d_row) cells.
    ///
    /// Commits the new anchor and returns true when the candidate is valid;
    /// otherwise leaves the piece unchanged and returns false. A (0, 0)
    /// move doubles as the spawn probe.
    pub fn attempt_move(&mut self, d_col: i16, d_row: i16, field: &Field) -> bool {
        let row = self.row + d_row;
        let col = self.col + d_col;
        if Self::position_is_valid(self.kind, self.orientation, row, col, field) {
            self.row = row;
            self.col = col;
            return true;
        }
        false
    }

    /// Try to rotate in place (no wall kicks): the next orientation is
    /// validated against the same anchor and committed only if it fits.
    pub fn attempt_rotate(&mut self, direction: Rotation, field: &Field) -> bool {
        let count = self.kind.orientation_count();
        let next = match direction {
            Rotation::Clockwise => (self.orientation + 1) % count,
            Rotation::CounterClockwise => (self.orientation + count - 1) % count,
        };
        if Self::position_is_valid(self.kind, next, self.row, self.col, field) {
            self.orientation = next;
            return true;
        }
        false
    }
}
