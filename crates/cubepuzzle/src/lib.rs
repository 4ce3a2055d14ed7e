//! N-layer twisty cube model and rotation engine.
//!
//! A [`Cube`] is a collection of [`Piece`]s positioned on a lattice centered
//! at the origin, with one unit between adjacent layers. Moves rotate the
//! pieces in a set of layers around a principal axis.

mod cube;
mod error;
mod generate;
mod lattice;
mod layers;
mod piece;
mod state;

pub use cubemath;
pub use cubepuzzle_notation as notation;

pub use cube::Cube;
pub use error::CubeError;
pub use lattice::Lattice;
pub use layers::LayerMask;
pub use piece::{Color, Colors, Piece, PieceType, SOLVED_COLORS};
pub use state::{CubeState, PieceState};
