//! Move families and the table that maps family letters to axes.

use cubemath::{Axis, Sign, Vector};

/// Which layers along an axis a move turns.
#[derive(
    strum::Display, strum::EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[strum(serialize_all = "lowercase")]
pub enum TurnKind {
    /// Outer layer on the side of the axis.
    Face,
    /// Outer two layers on the side of the axis.
    Double,
    /// Middle layer (or the two middle layers on an even cube).
    Slice,
    /// Every layer; reorients the whole puzzle.
    Whole,
}

/// Move family, such as `R` or `M`, bound to a signed axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Family {
    /// Letter used in notation.
    pub symbol: char,
    /// Axis around which the family turns.
    pub axis: Axis,
    /// Side of the axis that the family turns from. Clockwise is judged
    /// looking from this side toward the center.
    pub sign: Sign,
    /// Which layers are turned.
    pub kind: TurnKind,
}

impl Family {
    const fn new(symbol: char, axis: Axis, sign: Sign, kind: TurnKind) -> Self {
        Self {
            symbol,
            axis,
            sign,
            kind,
        }
    }

    /// Looks up a family by its letter.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        FAMILIES.iter().find(|f| f.symbol == symbol).copied()
    }

    /// Returns the unit vector pointing from the center toward the side of the
    /// puzzle that this family turns.
    pub fn axis_vector(self) -> Vector {
        Vector::signed_unit(self.axis, self.sign)
    }
}

/// Every move family, in lookup order.
///
/// `L`, `D`, and `B` use the same axis as `R`, `U`, and `F` with the opposite
/// sign. Slices follow the conventional face: `M` turns like `L`, `E` like
/// `D`, and `S` like `F`.
pub const FAMILIES: &[Family] = {
    use Axis::*;
    use Sign::*;
    use TurnKind::*;

    &[
        Family::new('R', X, Pos, Face),
        Family::new('U', Y, Pos, Face),
        Family::new('F', Z, Pos, Face),
        Family::new('L', X, Neg, Face),
        Family::new('D', Y, Neg, Face),
        Family::new('B', Z, Neg, Face),
        Family::new('M', X, Neg, Slice),
        Family::new('E', Y, Neg, Slice),
        Family::new('S', Z, Pos, Slice),
        Family::new('x', X, Pos, Whole),
        Family::new('y', Y, Pos, Whole),
        Family::new('z', Z, Pos, Whole),
        Family::new('r', X, Pos, Double),
        Family::new('u', Y, Pos, Double),
        Family::new('f', Z, Pos, Double),
        Family::new('l', X, Neg, Double),
        Family::new('d', Y, Neg, Double),
        Family::new('b', Z, Neg, Double),
    ]
};
