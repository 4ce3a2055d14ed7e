//! Move notation parser and serializer for N-layer cube puzzles.
//!
//! A move token is one family letter optionally followed by one modifier:
//!
//! - Face turns: `R`, `U`, `F`, `L`, `D`, `B`
//! - Slice turns: `M`, `E`, `S`
//! - Whole-cube rotations: `x`, `y`, `z`
//! - Double-layer turns: `r`, `u`, `f`, `l`, `d`, `b`
//!
//! The modifier is empty for a clockwise quarter turn, `'` for a
//! counterclockwise quarter turn, or `2` for a half turn.

mod errors;
mod family;
mod moves;

pub use errors::{ParseMoveError, ParseSequenceError};
pub use family::{FAMILIES, Family, TurnKind};
pub use moves::{Modifier, Move, parse_sequence};
