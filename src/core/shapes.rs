//! Shape catalog - static orientation grids for the seven piece kinds.
//!
//! Each kind is an ordered list of occupancy grids (row-major, 1 = filled)
//! plus one palette color. The grids are the piece's rotation states; the
//! anchor convention throughout the crate is the grid's top-left corner in
//! field coordinates. Built once at compile time, never mutated.

use crate::types::{ColorId, PieceKind};

/// One rotation state of a piece: a rectangular occupancy grid.
pub type OrientationGrid = &'static [&'static [u8]];

/// Number of filled cells in every orientation of every kind.
pub const CELLS_PER_PIECE: usize = 4;

const I_SHAPES: &[OrientationGrid] = &[
    &[&[1, 1, 1, 1]], //
    &[&[1], &[1], &[1], &[1]],
];

const T_SHAPES: &[OrientationGrid] = &[
    &[&[1, 1, 1], &[0, 1, 0]],
    &[&[0, 1], &[1, 1], &[0, 1]],
    &[&[0, 1, 0], &[1, 1, 1]],
    &[&[1, 0], &[1, 1], &[1, 0]],
];

const L_SHAPES: &[OrientationGrid] = &[
    &[&[1, 1, 1], &[1, 0, 0]],
    &[&[1, 1], &[0, 1], &[0, 1]],
    &[&[0, 0, 1], &[1, 1, 1]],
    &[&[1, 0], &[1, 0], &[1, 1]],
];

const J_SHAPES: &[OrientationGrid] = &[
    &[&[1, 1, 1], &[0, 0, 1]],
    &[&[0, 1], &[0, 1], &[1, 1]],
    &[&[1, 0, 0], &[1, 1, 1]],
    &[&[1, 1], &[1, 0], &[1, 0]],
];

const O_SHAPES: &[OrientationGrid] = &[&[&[1, 1], &[1, 1]]];

const S_SHAPES: &[OrientationGrid] = &[
    &[&[0, 1, 1], &[1, 1, 0]],
    &[&[1, 0], &[1, 1], &[0, 1]],
];

const Z_SHAPES: &[OrientationGrid] = &[
    &[&[1, 1, 0], &[0, 1, 1]],
    &[&[0, 1], &[1, 1], &[1, 0]],
];

impl PieceKind {
    /// The ordered rotation states of this kind.
    pub fn orientations(self) -> &'static [OrientationGrid] {
        match self {
            PieceKind::I => I_SHAPES,
            PieceKind::T => T_SHAPES,
            PieceKind::L => L_SHAPES,
            PieceKind::J => J_SHAPES,
            PieceKind::O => O_SHAPES,
            PieceKind::S => S_SHAPES,
            PieceKind::Z => Z_SHAPES,
        }
    }

    /// Bounds-checked access to one rotation state.
    pub fn orientation(self, index: usize) -> Option<OrientationGrid> {
        self.orientations().get(index).copied()
    }

    pub fn orientation_count(self) -> usize {
        self.orientations().len()
    }

    /// Settled-cell color identifier for this kind (palette index).
    pub fn color(self) -> ColorId {
        match self {
            PieceKind::I => 2,
            PieceKind::T => 3,
            PieceKind::L => 4,
            PieceKind::J => 5,
            PieceKind::O => 6,
            PieceKind::S => 7,
            PieceKind::Z => 8,
        }
    }
}
