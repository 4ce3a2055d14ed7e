use cubepuzzle_notation::{ParseMoveError, ParseSequenceError, TurnKind};
use thiserror::Error;

/// Error produced when constructing or turning a cube.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    /// Cube size is outside the supported range
    #[error("{size}x{size}x{size} cube is not supported")]
    UnsupportedSize {
        /// Requested number of layers.
        size: u16,
    },
    /// Move token could not be parsed
    #[error("invalid move {token:?}: {source}")]
    InvalidMove {
        /// Offending move token.
        token: String,
        /// Underlying parse error.
        source: ParseMoveError,
    },
    /// Move is valid notation but has no layers to turn on this cube
    #[error("{kind} turns are not available on a {size}x{size}x{size} cube")]
    UnavailableTurn {
        /// Kind of turn requested.
        kind: TurnKind,
        /// Number of layers on the cube.
        size: u16,
    },
    /// Move sequence could not be parsed
    #[error(transparent)]
    InvalidSequence(#[from] ParseSequenceError),
}
