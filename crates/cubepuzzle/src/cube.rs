use cubemath::{Axis, Orientation, Sign};
use cubepuzzle_notation::{Move, TurnKind, parse_sequence};

use crate::generate::generate_pieces;
use crate::{CubeError, Lattice, LayerMask, Piece, PieceType};

/// N-layer cube puzzle.
///
/// Pieces sit on a lattice centered at the origin with one unit between
/// adjacent layers. Every accepted move rotates a set of layers in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    size: u16,
    lattice: Lattice,
    pieces: Vec<Piece>,
}

impl Cube {
    /// Smallest supported number of layers.
    pub const MIN_SIZE: u16 = 2;
    /// Largest supported number of layers.
    pub const MAX_SIZE: u16 = LayerMask::MAX_LAYERS;

    /// Constructs a solved cube with `size` layers along each axis.
    pub fn new(size: u16) -> Result<Self, CubeError> {
        if !(Self::MIN_SIZE..=Self::MAX_SIZE).contains(&size) {
            return Err(CubeError::UnsupportedSize { size });
        }
        let lattice = Lattice::new(size);
        let pieces = generate_pieces(&lattice);
        log::debug!("constructed {size}x{size}x{size} cube with {} pieces", pieces.len());
        Ok(Self {
            size,
            lattice,
            pieces,
        })
    }

    /// Returns the number of layers along each axis.
    pub fn size(&self) -> u16 {
        self.size
    }
    /// Returns the coordinate lattice of the cube.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }
    /// Returns every piece, ordered core, centers, corners, edges.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }
    /// Returns the total number of pieces.
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }
    /// Returns the corner pieces.
    pub fn corners(&self) -> impl Iterator<Item = &Piece> {
        self.pieces_of_type(PieceType::Corner)
    }
    /// Returns the edge pieces.
    pub fn edges(&self) -> impl Iterator<Item = &Piece> {
        self.pieces_of_type(PieceType::Edge)
    }
    /// Returns the center pieces, not including the core.
    pub fn centers(&self) -> impl Iterator<Item = &Piece> {
        self.pieces_of_type(PieceType::Center)
    }
    /// Returns the core piece, which only exists on odd cubes.
    pub fn core(&self) -> Option<&Piece> {
        self.pieces_of_type(PieceType::Core).next()
    }
    fn pieces_of_type(&self, ty: PieceType) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(move |p| p.ty == ty)
    }

    /// Returns the cube to its solved state.
    pub fn reset(&mut self) {
        log::debug!("resetting {0}x{0}x{0} cube", self.size);
        self.pieces = generate_pieces(&self.lattice);
    }

    /// Applies a move token, such as `R'` or `M2`. Returns whether the move
    /// was applied; rejected moves leave the cube unchanged.
    pub fn rotate(&mut self, token: &str) -> bool {
        self.try_rotate(token).is_ok()
    }
    /// Applies a move token and returns the parsed move.
    pub fn try_rotate(&mut self, token: &str) -> Result<Move, CubeError> {
        let result = token
            .parse::<Move>()
            .map_err(|source| CubeError::InvalidMove {
                token: token.to_owned(),
                source,
            })
            .and_then(|mv| self.apply_move(&mv).map(|()| mv));
        if let Err(e) = &result {
            log::warn!("rejected move: {e}");
        }
        result
    }

    /// Applies a parsed move.
    pub fn apply_move(&mut self, mv: &Move) -> Result<(), CubeError> {
        self.apply_turn(mv.axis(), mv.sign(), mv.multiplier(), mv.kind())
    }

    /// Applies a whitespace-separated sequence of moves and returns how many
    /// were applied.
    ///
    /// The whole sequence is checked before any move is applied, so on error
    /// the cube is unchanged.
    pub fn apply_sequence(&mut self, sequence: &str) -> Result<usize, CubeError> {
        let moves = parse_sequence(sequence)?;
        for mv in &moves {
            self.layer_mask(mv.kind())?;
        }
        for mv in &moves {
            self.apply_move(mv)?;
        }
        Ok(moves.len())
    }

    /// Rotates the layers selected by `kind` on the `sign` side of `axis` by
    /// `multiplier` counterclockwise quarter turns, looking from that side.
    pub fn apply_turn(
        &mut self,
        axis: Axis,
        sign: Sign,
        multiplier: i32,
        kind: TurnKind,
    ) -> Result<(), CubeError> {
        let selected = self.pieces_in_layer(axis, sign, kind)?;
        let rotation = Orientation::from_principal_quarter_turns(axis, sign, multiplier);

        for i in selected {
            let piece = &mut self.pieces[i];
            let rotated = rotation.rotate_vector(piece.position);
            match self.lattice.snap(rotated) {
                Some(position) => piece.position = position,
                None => {
                    log::error!("{piece} left the lattice; rotated position is {rotated}");
                    piece.position = rotated;
                }
            }
            piece.orientation = rotation * piece.orientation;
        }

        log::trace!("turned {kind} layers on {sign}{axis} by {multiplier} quarter turns");
        Ok(())
    }

    /// Returns the layers that a kind of turn selects on this cube.
    pub fn layer_mask(&self, kind: TurnKind) -> Result<LayerMask, CubeError> {
        LayerMask::for_turn(kind, self.size).ok_or(CubeError::UnavailableTurn {
            kind,
            size: self.size,
        })
    }

    /// Returns the depth of `piece` from the `sign` side of `axis`, or `None`
    /// if the piece is not on the lattice.
    pub fn layer_depth(&self, piece: &Piece, axis: Axis, sign: Sign) -> Option<u16> {
        let rank = self.lattice.rank(piece.position[axis])?;
        Some(LayerMask::depth_from_rank(rank, self.size, sign))
    }

    /// Returns the indices of the pieces that a turn would move, without
    /// moving them.
    pub fn pieces_in_layer(
        &self,
        axis: Axis,
        sign: Sign,
        kind: TurnKind,
    ) -> Result<Vec<usize>, CubeError> {
        let mask = self.layer_mask(kind)?;
        Ok(self
            .pieces
            .iter()
            .enumerate()
            .filter(|(_, piece)| match piece.ty {
                PieceType::Core => kind == TurnKind::Whole,
                _ => self
                    .layer_depth(piece, axis, sign)
                    .is_some_and(|depth| mask.contains(depth)),
            })
            .map(|(i, _)| i)
            .collect())
    }
}
