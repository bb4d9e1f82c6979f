//! Terminal adapter - everything that touches the real terminal.
//!
//! `color` defines the validated palette, `fb` the diffable framebuffer,
//! `screen` the crossterm-backed surface and input source, and `view` the
//! layout that paints a session onto it.

pub mod color;
pub mod fb;
pub mod screen;
pub mod view;

pub use color::{Color, ColorPair, Palette};
pub use screen::Screen;
