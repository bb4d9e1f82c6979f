//! termtris - a falling-block puzzle game for the terminal.
//!
//! The crate splits into a pure simulation core and a thin terminal
//! adapter. `core` owns the shape catalog, the falling piece, the settled
//! grid, the randomizer, and the session state machine; it is fully
//! deterministic and testable without a terminal. `term` renders a session
//! with crossterm and translates key presses into game actions.

pub mod core;
pub mod term;
pub mod types;
