use std::fmt;

use cubemath::Sign;
use cubepuzzle_notation::TurnKind;

/// Set of layers along one axis, indexed by depth from the turning face.
///
/// Bit 0 is the outermost layer on the side being turned, bit 1 the layer
/// beneath it, and so on.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LayerMask(pub u64);

impl LayerMask {
    /// Maximum number of layers that a mask can represent.
    pub const MAX_LAYERS: u16 = u64::BITS as u16;

    /// Returns the mask containing every layer of a cube with `size` layers.
    pub fn all_layers(size: u16) -> Self {
        match size {
            Self::MAX_LAYERS.. => Self(u64::MAX),
            _ => Self((1 << size) - 1),
        }
    }
    /// Returns the mask containing the middle layer of an odd cube, or the two
    /// middle layers of an even cube. Returns `None` if the cube has fewer
    /// than 3 layers.
    pub fn slice_layers(size: u16) -> Option<Self> {
        (size >= 3).then(|| match size % 2 {
            1 => Self(1 << (size / 2)),
            _ => Self(0b11 << (size / 2 - 1)),
        })
    }

    /// Returns the mask of layers turned by a kind of turn on a cube with
    /// `size` layers. Returns `None` if the turn is not possible on this cube.
    pub fn for_turn(kind: TurnKind, size: u16) -> Option<Self> {
        let all = Self::all_layers(size);
        match kind {
            TurnKind::Face => Some(Self(0b1 & all.0)),
            TurnKind::Double => Some(Self(0b11 & all.0)),
            TurnKind::Slice => Self::slice_layers(size),
            TurnKind::Whole => Some(all),
        }
    }

    /// Returns the depth of a layer from the turning face, given its rank
    /// from the negative side of the axis.
    pub fn depth_from_rank(rank: u16, size: u16, sign: Sign) -> u16 {
        match sign {
            Sign::Pos => size.saturating_sub(rank + 1),
            Sign::Neg => rank,
        }
    }

    /// Returns whether the mask contains the layer at `depth`.
    pub fn contains(self, depth: u16) -> bool {
        depth < Self::MAX_LAYERS && self.0 & (1 << depth) != 0
    }
    /// Returns the number of layers in the mask.
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }
}

impl fmt::Display for LayerMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for depth in (0..Self::MAX_LAYERS).filter(|&d| self.contains(d)) {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{}", depth + 1)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_layers() {
        assert_eq!(LayerMask::slice_layers(2), None);
        assert_eq!(LayerMask::slice_layers(3), Some(LayerMask(0b010)));
        assert_eq!(LayerMask::slice_layers(4), Some(LayerMask(0b0110)));
        assert_eq!(LayerMask::slice_layers(5), Some(LayerMask(0b00100)));
        assert_eq!(LayerMask::slice_layers(6), Some(LayerMask(0b001100)));
    }

    #[test]
    fn test_turn_masks() {
        assert_eq!(LayerMask::for_turn(TurnKind::Face, 5), Some(LayerMask(0b1)));
        assert_eq!(LayerMask::for_turn(TurnKind::Double, 5), Some(LayerMask(0b11)));
        assert_eq!(LayerMask::for_turn(TurnKind::Whole, 5), Some(LayerMask(0b11111)));
        assert_eq!(LayerMask::for_turn(TurnKind::Slice, 2), None);
        assert_eq!(LayerMask::all_layers(64), LayerMask(u64::MAX));
    }

    #[test]
    fn test_depth_from_rank() {
        assert_eq!(LayerMask::depth_from_rank(4, 5, Sign::Pos), 0);
        assert_eq!(LayerMask::depth_from_rank(0, 5, Sign::Pos), 4);
        assert_eq!(LayerMask::depth_from_rank(0, 5, Sign::Neg), 0);
        assert_eq!(LayerMask::depth_from_rank(3, 5, Sign::Neg), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(LayerMask(0b1011).to_string(), "{1, 2, 4}");
        assert_eq!(LayerMask::default().to_string(), "{}");
        assert_eq!(LayerMask::slice_layers(4).map(LayerMask::count), Some(2));
    }
}
