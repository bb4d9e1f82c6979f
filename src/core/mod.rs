//! Core module - pure game logic with no external dependencies.
//!
//! Everything here is deterministic and I/O-free: the shape catalog, the
//! falling-piece state machine, the settled-cell grid, the randomizer, and
//! the session that ties them together.

pub mod field;
pub mod piece;
pub mod rng;
pub mod session;
pub mod shapes;

pub use field::Field;
pub use piece::Piece;
pub use rng::{PiecePicker, SimpleRng};
pub use session::GameSession;
