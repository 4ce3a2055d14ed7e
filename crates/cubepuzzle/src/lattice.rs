use cubemath::{Float, Vector, approx_eq, to_approx_integer};

/// Sorted distinct coordinate values that a piece center may take along any
/// axis of a cube.
///
/// For a cube with `size` layers these are `-dist, -dist + 1, ..., dist`
/// where `dist = (size - 1) / 2`. The index of a value in this list is its
/// *layer rank*, counted from the negative side of the axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    values: Vec<Float>,
}

impl Lattice {
    /// Constructs the lattice for a cube with `size` layers.
    pub fn new(size: u16) -> Self {
        let dist = Self::dist_for_size(size);
        let values = (0..size).map(|i| i as Float - dist).collect();
        Self { values }
    }

    fn dist_for_size(size: u16) -> Float {
        (size as Float - 1.0) / 2.0
    }

    /// Returns the number of layers along each axis.
    pub fn size(&self) -> u16 {
        self.values.len() as u16
    }
    /// Returns the distance from the origin to the outermost layer.
    pub fn dist(&self) -> Float {
        Self::dist_for_size(self.size())
    }
    /// Returns all coordinate values, from most negative to most positive.
    pub fn values(&self) -> &[Float] {
        &self.values
    }
    /// Returns the coordinate values strictly between the two outer layers.
    pub fn inner_values(&self) -> &[Float] {
        match self.values.len() {
            0..=2 => &[],
            n => &self.values[1..n - 1],
        }
    }

    /// Returns the layer rank of a coordinate, or `None` if the coordinate is
    /// not approximately on the lattice.
    pub fn rank(&self, coordinate: Float) -> Option<u16> {
        let i = to_approx_integer(coordinate + self.dist())?;
        let i = usize::try_from(i).ok()?;
        let value = self.values.get(i)?;
        approx_eq(value, &coordinate).then_some(i as u16)
    }
    /// Returns the coordinate value at a layer rank.
    pub fn value(&self, rank: u16) -> Option<Float> {
        self.values.get(rank as usize).copied()
    }

    /// Returns the nearest lattice point to `v`, or `None` if any component
    /// is not approximately on the lattice.
    pub fn snap(&self, v: Vector) -> Option<Vector> {
        let [x, y, z] = v
            .to_array()
            .map(|coordinate| self.rank(coordinate).and_then(|rank| self.value(rank)));
        Some(Vector::new(x?, y?, z?))
    }
    /// Returns whether every component of `v` is exactly a lattice value.
    pub fn contains_exactly(&self, v: Vector) -> bool {
        v.iter().all(|coordinate| self.values.contains(&coordinate))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_lattice_values() {
        assert_eq!(Lattice::new(2).values(), &[-0.5, 0.5]);
        assert_eq!(Lattice::new(3).values(), &[-1.0, 0.0, 1.0]);
        assert_eq!(Lattice::new(4).inner_values(), &[-0.5, 0.5]);
        assert_eq!(Lattice::new(5).inner_values(), &[-1.0, 0.0, 1.0]);
        assert_eq!(Lattice::new(2).inner_values(), &[] as &[Float]);
        assert_eq!(Lattice::new(5).dist(), 2.0);
    }

    #[test]
    fn test_lattice_rank() {
        let lattice = Lattice::new(4);
        assert_eq!(lattice.rank(-1.5), Some(0));
        assert_eq!(lattice.rank(0.5 + 1e-12), Some(2));
        assert_eq!(lattice.rank(1.5), Some(3));
        assert_eq!(lattice.rank(2.5), None);
        assert_eq!(lattice.rank(0.0), None);
        assert_eq!(lattice.rank(-0.3), None);
    }

    #[test]
    fn test_lattice_snap() {
        let lattice = Lattice::new(3);
        let noisy = Vector::new(1.0 - 1e-15, 2e-16, -1.0);
        let snapped = lattice.snap(noisy).unwrap();
        assert_eq!(snapped, Vector::new(1.0, 0.0, -1.0));
        assert!(lattice.contains_exactly(snapped));
        assert!(!lattice.contains_exactly(noisy));
        assert_eq!(lattice.snap(Vector::new(0.5, 0.0, 0.0)), None);
    }
}
