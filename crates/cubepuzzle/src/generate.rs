//! Procedural piece layout for a cube of any size.

use cubemath::{Float, Vector};
use itertools::{Itertools, iproduct};

use crate::{Lattice, Piece, PieceType};

/// Generates the solved piece set for a lattice.
///
/// Pieces are ordered core, centers, corners, edges. The core is only present
/// when the cube has an odd number of layers.
pub(crate) fn generate_pieces(lattice: &Lattice) -> Vec<Piece> {
    let dist = lattice.dist();
    let ends = [-dist, dist];
    let offsets = lattice.inner_values();

    let core = (lattice.size() % 2 == 1).then(|| Piece::new(PieceType::Core, Vector::ZERO));

    // Second offset varies slowest.
    let face_grid = iproduct!(offsets, offsets)
        .map(|(&b, &a)| (a, b))
        .collect_vec();
    let centers = ends.into_iter().flat_map(|c| {
        let on_x = face_grid.iter().map(move |&(a, b)| [c, a, b]);
        let on_y = face_grid.iter().map(move |&(a, b)| [a, c, b]);
        let on_z = face_grid.iter().map(move |&(a, b)| [a, b, c]);
        on_x.chain(on_y).chain(on_z)
    });

    let corners = iproduct!(ends, ends, ends).map(|(x, y, z)| [x, y, z]);

    let edges = iproduct!(ends, ends).flat_map(|(c1, c2)| {
        let along_x = offsets.iter().map(move |&o| [o, c1, c2]);
        let along_y = offsets.iter().map(move |&o| [c1, o, c2]);
        let along_z = offsets.iter().map(move |&o| [c1, c2, o]);
        along_x.chain(along_y).chain(along_z)
    });

    let typed = |ty: PieceType| move |p: [Float; 3]| Piece::new(ty, Vector::from(p));

    core.into_iter()
        .chain(centers.map(typed(PieceType::Center)))
        .chain(corners.map(typed(PieceType::Corner)))
        .chain(edges.map(typed(PieceType::Edge)))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn positions(size: u16, ty: PieceType) -> Vec<[Float; 3]> {
        generate_pieces(&Lattice::new(size))
            .into_iter()
            .filter(|p| p.ty == ty)
            .map(|p| p.position.to_array())
            .collect()
    }

    #[test]
    fn test_piece_order() {
        let types = generate_pieces(&Lattice::new(3))
            .into_iter()
            .map(|p| p.ty)
            .dedup()
            .collect_vec();
        assert_eq!(
            types,
            [
                PieceType::Core,
                PieceType::Center,
                PieceType::Corner,
                PieceType::Edge,
            ],
        );
    }

    #[test]
    fn test_size_2_layout() {
        let pieces = generate_pieces(&Lattice::new(2));
        assert_eq!(pieces.len(), 8);
        assert!(pieces.iter().all(|p| p.ty == PieceType::Corner));
        assert_eq!(pieces[0].position, Vector::new(-0.5, -0.5, -0.5));
        assert_eq!(pieces[7].position, Vector::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_size_3_positions() {
        assert_eq!(
            positions(3, PieceType::Center),
            [
                [-1.0, 0.0, 0.0],
                [0.0, -1.0, 0.0],
                [0.0, 0.0, -1.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 1.0],
            ],
        );
        assert_eq!(
            positions(3, PieceType::Edge)[..3],
            [[0.0, -1.0, -1.0], [-1.0, 0.0, -1.0], [-1.0, -1.0, 0.0]],
        );
    }

    #[test]
    fn test_size_4_center_grid() {
        let centers = positions(4, PieceType::Center);
        assert_eq!(
            centers[..4],
            [
                [-1.5, -0.5, -0.5],
                [-1.5, 0.5, -0.5],
                [-1.5, -0.5, 0.5],
                [-1.5, 0.5, 0.5],
            ],
        );
    }

    #[test]
    fn test_positions_distinct() {
        for size in 2..=6 {
            let pieces = generate_pieces(&Lattice::new(size));
            let unique = pieces
                .iter()
                .map(|p| p.position.to_array().map(Float::to_bits))
                .unique()
                .count();
            assert_eq!(unique, pieces.len(), "duplicate piece on size {size}");
        }
    }
}
