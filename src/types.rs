//! Core types shared across the application.
//! This module contains pure data types with no external dependencies.

/// Playing field dimensions (cells).
pub const FIELD_WIDTH: usize = 10;
pub const FIELD_HEIGHT: usize = 20;

/// Gravity timing is measured in frames at a fixed frame rate.
pub const FRAMES_PER_SECOND: u32 = 60;

/// Frame-loop pacing for the terminal runner (milliseconds per frame).
pub const FRAME_MS: u32 = 16;

/// Frames per downward gravity step, indexed by level (NES-style curve).
/// Levels past the end of the table clamp to the last entry.
pub const LEVEL_SPEEDS: [u32; 30] = [
    48, 43, 38, 33, 28, 23, 18, 13, 8, 6, //
    5, 5, 5, 4, 4, 4, 3, 3, 3, 2, //
    2, 2, 2, 2, 2, 2, 2, 2, 2, 1,
];

/// Gravity interval (in frames) for a level, clamped for high levels.
pub fn tick_interval_frames(level: u32) -> u32 {
    let idx = (level as usize).min(LEVEL_SPEEDS.len() - 1);
    LEVEL_SPEEDS[idx]
}

/// Index into the adapter's color palette. 0 is reserved for empty/background.
pub type ColorId = u8;

/// Palette slot used for the field border.
pub const BORDER_COLOR: ColorId = 1;

/// Tetromino piece kinds, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    T,
    L,
    J,
    O,
    S,
    Z,
}

impl PieceKind {
    /// All seven kinds, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
    ];
}

/// Rotation direction for a piece rotation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

/// One interpreted input action. The adapter delivers at most one per poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MoveLeft,
    MoveRight,
    SoftDrop,
    RotateCw,
    RotateCcw,
    Quit,
}

/// Outcome of a session tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    GameOver,
}
