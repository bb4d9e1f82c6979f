//! Validated RGB colors and the indexed palette.
//!
//! The core speaks abstract color identifiers; this module owns the mapping
//! to concrete colors. Palette misuse splits into two failure classes: a
//! bad color definition is a configuration error caught at startup, while
//! an out-of-range color id in a draw call is a logic bug and fails the
//! frame fatally.

use anyhow::{bail, Result};

use crate::types::ColorId;

/// An RGB color with each component in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    red: f32,
    green: f32,
    blue: f32,
}

impl Color {
    /// Build a color, rejecting components outside [0, 1].
    pub fn new(red: f32, green: f32, blue: f32) -> Result<Self> {
        for component in [red, green, blue] {
            if !(0.0..=1.0).contains(&component) {
                bail!(
                    "invalid color component {}: must be between 0 and 1",
                    component
                );
            }
        }
        Ok(Self { red, green, blue })
    }

    pub fn red(&self) -> f32 {
        self.red
    }

    pub fn green(&self) -> f32 {
        self.green
    }

    pub fn blue(&self) -> f32 {
        self.blue
    }

    /// 8-bit-per-channel form used by the renderer.
    pub(crate) fn to_rgb8(self) -> (u8, u8, u8) {
        (
            (self.red * 255.0).round() as u8,
            (self.green * 255.0).round() as u8,
            (self.blue * 255.0).round() as u8,
        )
    }
}

/// One palette entry: foreground and background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPair {
    pub fg: Color,
    pub bg: Color,
}

/// The ordered palette the adapter draws from. Index 0 is the default
/// text/background pair; indexes above it are game-defined.
#[derive(Debug, Clone)]
pub struct Palette {
    pairs: Vec<ColorPair>,
}

impl Palette {
    pub fn new(pairs: Vec<ColorPair>) -> Self {
        Self { pairs }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Look up a pair by color id. An out-of-range id is a programming
    /// error in the caller, reported as a hard failure.
    pub fn pair(&self, id: ColorId) -> Result<ColorPair> {
        match self.pairs.get(id as usize) {
            Some(pair) => Ok(*pair),
            None => bail!(
                "invalid color index {} (palette has {} pairs)",
                id,
                self.pairs.len()
            ),
        }
    }

    /// The game's palette: default text, border, and one pair per piece
    /// kind, in the order the core's color identifiers expect.
    pub fn standard() -> Result<Self> {
        let black = Color::new(0.0, 0.0, 0.0)?;
        let white = Color::new(0.9, 0.9, 0.9)?;
        let pair = |fg: Color, bg: Color| ColorPair { fg, bg };

        Ok(Self::new(vec![
            // 0: empty cells / default text.
            pair(white, black),
            // 1: border.
            pair(Color::new(0.7, 0.7, 0.75)?, black),
            // 2..=8: piece kinds I, T, L, J, O, S, Z.
            pair(Color::new(0.3, 0.85, 0.85)?, black),
            pair(Color::new(0.8, 0.45, 0.85)?, black),
            pair(Color::new(1.0, 0.65, 0.0)?, black),
            pair(Color::new(0.3, 0.45, 0.85)?, black),
            pair(Color::new(0.95, 0.85, 0.3)?, black),
            pair(Color::new(0.4, 0.85, 0.45)?, black),
            pair(Color::new(0.85, 0.3, 0.3)?, black),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn color_components_are_validated() {
        assert!(Color::new(0.0, 0.5, 1.0).is_ok());
        assert!(Color::new(-0.1, 0.5, 0.5).is_err());
        assert!(Color::new(0.5, 1.1, 0.5).is_err());
        assert!(Color::new(0.5, 0.5, 2.0).is_err());
    }

    #[test]
    fn rgb8_conversion_scales_to_255() {
        let color = Color::new(0.0, 0.5, 1.0).unwrap();
        assert_eq!(color.to_rgb8(), (0, 128, 255));
    }

    #[test]
    fn out_of_range_color_index_is_an_error() {
        let palette = Palette::standard().unwrap();
        assert!(palette.pair(0).is_ok());
        assert!(palette.pair((palette.len() - 1) as ColorId).is_ok());
        assert!(palette.pair(palette.len() as ColorId).is_err());
    }

    #[test]
    fn standard_palette_covers_every_piece_color() {
        let palette = Palette::standard().unwrap();
        // Border + default + one pair per kind.
        assert_eq!(palette.len(), PieceKind::ALL.len() + 2);
        for kind in PieceKind::ALL {
            assert!(palette.pair(kind.color()).is_ok());
        }
    }
}
