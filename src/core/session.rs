//! Game session - owns the field, the falling piece, and all counters.
//!
//! One `tick` per rendered frame: apply at most one input action, then let
//! gravity advance the piece when enough wall-clock time has accumulated
//! (measured in frames at a fixed frame rate against the level's interval).
//! A blocked descent commits the piece, compacts full rows, advances the
//! level and speed, and promotes the queued next piece; a blocked spawn
//! ends the session.

use crate::core::field::Field;
use crate::core::piece::Piece;
use crate::core::rng::PiecePicker;
use crate::types::{
    tick_interval_frames, InputEvent, Rotation, SessionStatus, FRAMES_PER_SECOND,
};

/// Complete game state for one play session.
#[derive(Debug, Clone)]
pub struct GameSession {
    field: Field,
    current: Piece,
    next: Piece,
    picker: PiecePicker,
    total_lines: u32,
    lines_at_once: u32,
    level: u32,
    tick_interval_frames: u32,
    gravity_timer_ms: u32,
    over: bool,
}

impl GameSession {
    /// Start a session with an empty field and two pieces drawn from the
    /// given seed.
    pub fn new(seed: u32) -> Self {
        let mut picker = PiecePicker::new(seed);
        let current = Piece::spawn(picker.next());
        let next = Piece::spawn(picker.next());
        Self {
            field: Field::new(),
            current,
            next,
            picker,
            total_lines: 0,
            lines_at_once: 0,
            level: 0,
            tick_interval_frames: tick_interval_frames(0),
            gravity_timer_ms: 0,
            over: false,
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    /// The queued piece, shown as a preview.
    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn total_lines(&self) -> u32 {
        self.total_lines
    }

    /// Rows cleared by this tick's lock, zero on all other ticks.
    pub fn lines_at_once(&self) -> u32 {
        self.lines_at_once
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current gravity interval in frames.
    pub fn tick_interval(&self) -> u32 {
        self.tick_interval_frames
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    fn status(&self) -> SessionStatus {
        if self.over {
            SessionStatus::GameOver
        } else {
            SessionStatus::Running
        }
    }

    /// Advance the simulation by one frame.
    ///
    /// `elapsed_ms` is the wall-clock time since the previous tick;
    /// `input` is at most one interpreted action for this frame.
    pub fn tick(&mut self, elapsed_ms: u32, input: Option<InputEvent>) -> SessionStatus {
        if self.over {
            return SessionStatus::GameOver;
        }

        // Valid only for the tick in which a clear happened.
        self.lines_at_once = 0;

        if let Some(event) = input {
            self.apply_input(event);
            if self.over {
                return SessionStatus::GameOver;
            }
        }

        // Gravity fires once the accumulated time, in frames, reaches the
        // level's interval: elapsed_s * FPS >= interval.
        self.gravity_timer_ms += elapsed_ms;
        let due = u64::from(self.gravity_timer_ms) * u64::from(FRAMES_PER_SECOND)
            >= u64::from(self.tick_interval_frames) * 1000;
        if due {
            self.gravity_timer_ms = 0;
            if !self.current.attempt_move(0, 1, &self.field) {
                self.lock_current();
            }
        }

        self.status()
    }

    /// Apply one input action to the current piece. Rejected moves and
    /// rotations are silent no-ops; a soft drop that cannot descend locks
    /// the piece, exactly like a blocked gravity step.
    fn apply_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::MoveLeft => {
                self.current.attempt_move(-1, 0, &self.field);
            }
            InputEvent::MoveRight => {
                self.current.attempt_move(1, 0, &self.field);
            }
            InputEvent::SoftDrop => {
                if !self.current.attempt_move(0, 1, &self.field) {
                    self.lock_current();
                }
            }
            InputEvent::RotateCw => {
                self.current.attempt_rotate(Rotation::Clockwise, &self.field);
            }
            InputEvent::RotateCcw => {
                self.current
                    .attempt_rotate(Rotation::CounterClockwise, &self.field);
            }
            // Quit is handled by the frame loop, not the simulation.
            InputEvent::Quit => {}
        }
    }

    /// Commit the resting piece, clear lines, advance level/speed, and
    /// bring in the next piece. A blocked spawn ends the session without
    /// touching the field further.
    fn lock_current(&mut self) {
        self.field.commit(&self.current);

        let cleared = self.field.compact_full_rows();
        self.lines_at_once = cleared;
        self.total_lines += cleared;

        let previous_level = self.level;
        self.level = self.total_lines / 10;
        if self.level != previous_level {
            self.tick_interval_frames = tick_interval_frames(self.level);
        }

        self.current = Piece::spawn(self.next.kind());
        self.next = Piece::spawn(self.picker.next());

        // Zero-move probe: the fresh piece must fit at its spawn position.
        if !self.current.attempt_move(0, 0, &self.field) {
            self.over = true;
        }
    }

    #[cfg(test)]
    pub(crate) fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    #[cfg(test)]
    pub(crate) fn set_current(&mut self, kind: crate::types::PieceKind) {
        self.current = Piece::spawn(kind);
    }

    #[cfg(test)]
    pub(crate) fn force_lock(&mut self) {
        self.lock_current();
    }
}
