use cubemath::Float;
use serde::{Deserialize, Serialize};

use crate::{Cube, Piece};

/// Snapshot of every piece of a cube, in piece order.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct CubeState {
    /// Position and orientation of each piece.
    pub pieces: Vec<PieceState>,
}

/// Snapshot of one piece.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq)]
pub struct PieceState {
    /// Center of the piece as `[x, y, z]`.
    pub position: [Float; 3],
    /// Orientation of the piece as a quaternion `[x, y, z, w]`.
    pub orientation: [Float; 4],
}

impl From<&Piece> for PieceState {
    fn from(piece: &Piece) -> Self {
        Self {
            position: piece.position.to_array(),
            orientation: piece.orientation.to_xyzw(),
        }
    }
}

impl From<&Cube> for CubeState {
    fn from(cube: &Cube) -> Self {
        Self {
            pieces: cube.pieces().iter().map(PieceState::from).collect(),
        }
    }
}

impl Cube {
    /// Returns a snapshot of the cube for serialization.
    pub fn state(&self) -> CubeState {
        CubeState::from(self)
    }
}
