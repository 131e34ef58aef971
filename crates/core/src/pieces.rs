//! Pieces module - tetromino values, level palettes and spawning
//!
//! A piece is its kind, its current occupancy matrix and the color it was drawn
//! with. Colors come from three level bands; the same kind gets darker tones as
//! the game speeds up.

use crate::rng::PieceSource;
use crate::shape::Shape;
use crate::types::{PieceKind, Position, Rgb, BOARD_WIDTH};

/// Per-kind colors, one row per level band (levels 1-5, 6-10, 11+).
///
/// Column order follows `PieceKind::ALL`: I, O, T, S, Z, J, L.
pub const PALETTES: [[Rgb; 7]; 3] = [
    [
        Rgb::new(80, 227, 230),
        Rgb::new(240, 220, 80),
        Rgb::new(200, 120, 220),
        Rgb::new(100, 220, 120),
        Rgb::new(230, 80, 80),
        Rgb::new(80, 120, 230),
        Rgb::new(255, 165, 0),
    ],
    [
        Rgb::new(40, 170, 175),
        Rgb::new(190, 165, 40),
        Rgb::new(150, 75, 170),
        Rgb::new(60, 165, 80),
        Rgb::new(175, 45, 45),
        Rgb::new(45, 80, 175),
        Rgb::new(200, 115, 0),
    ],
    [
        Rgb::new(20, 110, 115),
        Rgb::new(130, 110, 20),
        Rgb::new(95, 40, 110),
        Rgb::new(30, 105, 45),
        Rgb::new(115, 20, 20),
        Rgb::new(20, 45, 115),
        Rgb::new(135, 75, 0),
    ],
];

/// Palette band for a level (0 for 1-5, 1 for 6-10, 2 for 11+)
pub fn palette_band(level: u32) -> usize {
    match level {
        0..=5 => 0,
        6..=10 => 1,
        _ => 2,
    }
}

/// Color of a piece kind at a given level
pub fn piece_color(kind: PieceKind, level: u32) -> Rgb {
    PALETTES[palette_band(level)][kind.index()]
}

/// A tetromino: kind, current shape matrix and draw color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Rgb,
}

impl Piece {
    /// Piece in spawn orientation, colored for `level`
    pub fn new(kind: PieceKind, level: u32) -> Self {
        Self {
            kind,
            shape: Shape::spawn(kind),
            color: piece_color(kind, level),
        }
    }

    /// Same piece with its shape turned back to spawn orientation
    pub fn respawned(&self) -> Self {
        Self {
            shape: Shape::spawn(self.kind),
            ..*self
        }
    }

    /// Same piece rotated 90° clockwise
    pub fn rotated_cw(&self) -> Self {
        Self {
            shape: self.shape.rotate_cw(),
            ..*self
        }
    }

    /// Same piece rotated 90° counter-clockwise
    pub fn rotated_ccw(&self) -> Self {
        Self {
            shape: self.shape.rotate_ccw(),
            ..*self
        }
    }

    /// Where this piece enters the board.
    ///
    /// Horizontally centered; the lowest occupied row sits on grid row 0 and
    /// anything above it is off-screen.
    pub fn spawn_position(&self) -> Position {
        let x = (BOARD_WIDTH as i8 - self.shape.width() as i8) / 2;
        let y = -(self.shape.bottom_row().unwrap_or(0) as i8);
        Position::new(x, y)
    }
}

/// Draw a random piece colored for `level`
pub fn random_piece(level: u32, source: &mut PieceSource) -> Piece {
    Piece::new(source.next_kind(), level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Randomizer;

    #[test]
    fn test_palette_bands() {
        assert_eq!(palette_band(1), 0);
        assert_eq!(palette_band(5), 0);
        assert_eq!(palette_band(6), 1);
        assert_eq!(palette_band(10), 1);
        assert_eq!(palette_band(11), 2);
        assert_eq!(palette_band(40), 2);
    }

    #[test]
    fn test_colors_darken_with_level() {
        for kind in PieceKind::ALL {
            let sum = |c: Rgb| c.r as u32 + c.g as u32 + c.b as u32;
            let low = sum(piece_color(kind, 1));
            let mid = sum(piece_color(kind, 6));
            let high = sum(piece_color(kind, 11));
            assert!(low > mid && mid > high, "{:?}", kind);
        }
    }

    #[test]
    fn test_spawn_positions() {
        assert_eq!(Piece::new(PieceKind::I, 1).spawn_position(), Position::new(3, -1));
        assert_eq!(Piece::new(PieceKind::O, 1).spawn_position(), Position::new(4, -1));
        assert_eq!(Piece::new(PieceKind::T, 1).spawn_position(), Position::new(3, -1));
    }

    #[test]
    fn test_respawned_resets_rotation() {
        let piece = Piece::new(PieceKind::L, 3);
        let turned = piece.rotated_cw().rotated_cw();
        assert_ne!(turned.shape, piece.shape);
        assert_eq!(turned.respawned(), piece);
    }

    #[test]
    fn test_random_piece_uses_level_palette() {
        let mut source = PieceSource::new(5, Randomizer::Uniform);
        let piece = random_piece(12, &mut source);
        assert_eq!(piece.color, PALETTES[2][piece.kind.index()]);
        assert_eq!(piece.shape, Shape::spawn(piece.kind));
    }
}
