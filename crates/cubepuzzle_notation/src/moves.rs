use std::f64::consts::FRAC_PI_2;
use std::fmt;
use std::str::FromStr;

use cubemath::{Axis, Float, Sign, Vector};

use crate::{Family, ParseMoveError, ParseSequenceError, TurnKind};

/// Direction and distance of a move.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// Clockwise quarter turn (no suffix).
    #[default]
    Clockwise,
    /// Counterclockwise quarter turn (`'`).
    Prime,
    /// Half turn (`2`).
    Double,
}

impl Modifier {
    /// Returns the number of counterclockwise quarter turns.
    pub const fn multiplier(self) -> i32 {
        match self {
            Modifier::Clockwise => -1,
            Modifier::Prime => 1,
            Modifier::Double => 2,
        }
    }

    /// Returns the suffix used in notation.
    pub const fn suffix(self) -> &'static str {
        match self {
            Modifier::Clockwise => "",
            Modifier::Prime => "'",
            Modifier::Double => "2",
        }
    }

    /// Returns the modifier that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Modifier::Clockwise => Modifier::Prime,
            Modifier::Prime => Modifier::Clockwise,
            Modifier::Double => Modifier::Double,
        }
    }

    fn from_suffix(c: char) -> Option<Self> {
        match c {
            '\'' => Some(Modifier::Prime),
            '2' => Some(Modifier::Double),
            _ => None,
        }
    }
}

/// Single move, such as `R`, `M'`, or `y2`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// Family of the move, which determines the axis and layers.
    pub family: Family,
    /// Direction and distance.
    pub modifier: Modifier,
}

impl Move {
    /// Constructs a move.
    pub const fn new(family: Family, modifier: Modifier) -> Self {
        Self { family, modifier }
    }

    /// Returns the axis around which the move turns.
    pub fn axis(self) -> Axis {
        self.family.axis
    }
    /// Returns the side of the axis that the move turns from.
    pub fn sign(self) -> Sign {
        self.family.sign
    }
    /// Returns which layers the move turns.
    pub fn kind(self) -> TurnKind {
        self.family.kind
    }
    /// Returns the number of counterclockwise quarter turns.
    pub fn multiplier(self) -> i32 {
        self.modifier.multiplier()
    }
    /// Returns the signed rotation angle in radians around
    /// [`Family::axis_vector()`].
    pub fn angle(self) -> Float {
        self.multiplier() as Float * FRAC_PI_2
    }
    /// Returns the unit vector pointing toward the turned side of the puzzle.
    pub fn axis_vector(self) -> Vector {
        self.family.axis_vector()
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            family: self.family,
            modifier: self.modifier.inverse(),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.family.symbol, self.modifier.suffix())
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let symbol = chars.next().ok_or(ParseMoveError::Empty)?;
        let suffix = chars.next();
        if chars.next().is_some() {
            return Err(ParseMoveError::TooLong);
        }

        let family = Family::from_symbol(symbol).ok_or(ParseMoveError::UnknownFamily(symbol))?;
        let modifier = match suffix {
            None => Modifier::Clockwise,
            Some(c) => Modifier::from_suffix(c).ok_or(ParseMoveError::BadModifier(c))?,
        };
        Ok(Self { family, modifier })
    }
}

/// Parses a whitespace-separated sequence of moves.
///
/// Either every move parses or the first error is returned.
pub fn parse_sequence(s: &str) -> Result<Vec<Move>, ParseSequenceError> {
    s.split_whitespace()
        .enumerate()
        .map(|(index, token)| {
            token.parse().map_err(|source| ParseSequenceError {
                index,
                token: token.to_owned(),
                source,
            })
        })
        .collect()
}
