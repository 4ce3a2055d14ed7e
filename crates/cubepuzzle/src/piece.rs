use std::fmt;

use cubemath::{Orientation, Vector};

/// Color ID of one face of the cube.
pub type Color = u8;
/// Colors of a piece, in the order +X, -X, +Y, -Y, +Z, -Z.
pub type Colors = [Color; 6];

/// Colors assigned to every piece at construction.
///
/// Colors are not permuted when a piece rotates; the orientation carries that
/// information instead.
pub const SOLVED_COLORS: Colors = [1, 2, 3, 4, 5, 6];

/// Kind of piece, determined by how many outer faces it touches.
#[derive(
    strum::Display, strum::EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum PieceType {
    /// Piece at the geometric center of an odd cube. It is only moved by
    /// whole-cube rotations.
    Core,
    /// Piece on one face.
    Center,
    /// Piece on two faces.
    Edge,
    /// Piece on three faces.
    Corner,
}

impl PieceType {
    /// Returns whether this is a center piece, including the core.
    pub fn is_center(self) -> bool {
        matches!(self, PieceType::Center | PieceType::Core)
    }
}

/// Single physical piece of the puzzle.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    /// Kind of piece. Never changes.
    pub ty: PieceType,
    /// Colors of the piece. Never changes.
    pub colors: Colors,
    /// Current center of the piece.
    pub position: Vector,
    /// Cumulative rotation since the solved state.
    pub orientation: Orientation,
}

impl Piece {
    /// Constructs a piece in its solved orientation.
    pub fn new(ty: PieceType, position: Vector) -> Self {
        Self {
            ty,
            colors: SOLVED_COLORS,
            position,
            orientation: Orientation::identity(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} piece at {} with {}",
            self.ty, self.position, self.orientation,
        )
    }
}
