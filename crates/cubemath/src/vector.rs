//! 3D vector math.

use std::fmt;
use std::ops::{Index, IndexMut, Mul, Neg};

use approx::AbsDiffEq;
use cgmath::Vector3;

use crate::{Axis, EPSILON, Float, Sign};

/// 3D vector, used both as a position in space and as an axis direction.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector {
    /// X component.
    pub x: Float,
    /// Y component.
    pub y: Float,
    /// Z component.
    pub z: Float,
}

impl Vector {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Constructs a vector from its components.
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }
    /// Returns a unit vector along an axis.
    pub fn unit(axis: Axis) -> Self {
        Self::signed_unit(axis, Sign::Pos)
    }
    /// Returns a unit vector along an axis, pointing in the direction of
    /// `sign`.
    pub fn signed_unit(axis: Axis, sign: Sign) -> Self {
        let mut ret = Self::ZERO;
        ret[axis] = sign.float();
        ret
    }

    /// Returns the dot product of this vector with another.
    pub fn dot(self, rhs: Self) -> Float {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }
    /// Returns the magnitude of the vector.
    pub fn mag(self) -> Float {
        self.dot(self).sqrt()
    }
    /// Returns a scaled copy of the vector.
    #[must_use]
    pub fn scale(self, scalar: Float) -> Self {
        self * scalar
    }
    /// Returns the componentwise average of two vectors.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        (self + other) * 0.5
    }

    /// Returns an iterator over the components of the vector.
    pub fn iter(self) -> std::array::IntoIter<Float, 3> {
        self.to_array().into_iter()
    }
    /// Returns the components of the vector as an array.
    pub const fn to_array(self) -> [Float; 3] {
        [self.x, self.y, self.z]
    }
    /// Returns a copy of the vector with each component transformed by `f`.
    #[must_use]
    pub fn map(self, mut f: impl FnMut(Float) -> Float) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }
}

impl_componentwise_ops! {
    impl Add for Vector { fn add() }
    impl Sub for Vector { fn sub() }
}
impl_componentwise_assign_ops! {
    impl AddAssign for Vector { fn add_assign() => + }
    impl SubAssign for Vector { fn sub_assign() => - }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        self.map(|x| -x)
    }
}

impl Mul<Float> for Vector {
    type Output = Vector;

    fn mul(self, rhs: Float) -> Self::Output {
        self.map(|x| x * rhs)
    }
}

impl Index<Axis> for Vector {
    type Output = Float;

    fn index(&self, axis: Axis) -> &Self::Output {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}
impl IndexMut<Axis> for Vector {
    fn index_mut(&mut self, axis: Axis) -> &mut Self::Output {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

impl From<[Float; 3]> for Vector {
    fn from([x, y, z]: [Float; 3]) -> Self {
        Self::new(x, y, z)
    }
}
impl From<Vector> for [Float; 3] {
    fn from(v: Vector) -> Self {
        v.to_array()
    }
}
impl From<Vector3<Float>> for Vector {
    fn from(v: Vector3<Float>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
impl From<Vector> for Vector3<Float> {
    fn from(v: Vector) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl IntoIterator for Vector {
    type Item = Float;
    type IntoIter = std::array::IntoIter<Float, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        std::iter::zip(self.iter(), other.iter()).all(|(l, r)| l.abs_diff_eq(&r, epsilon))
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}, {}>", self.x, self.y, self.z)
    }
}
