//! Unit quaternion rotations.

use std::f64::consts::FRAC_PI_2;
use std::fmt;
use std::ops::Mul;

use approx::AbsDiffEq;
use cgmath::{InnerSpace, One, Quaternion, Rad, Rotation, Rotation3, Vector3};

use crate::{Axis, EPSILON, Float, Sign, Vector, approx_eq};

/// Unit-norm rotation, stored as a quaternion.
///
/// `q` and `-q` describe the same rotation, so comparisons via
/// [`AbsDiffEq`] treat them as equal.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Orientation(Quaternion<Float>);

impl Default for Orientation {
    fn default() -> Self {
        Self::identity()
    }
}

impl Orientation {
    /// Returns the identity rotation.
    pub fn identity() -> Self {
        Self(Quaternion::one())
    }

    /// Constructs a rotation by `angle` radians around `axis` using the
    /// right-hand rule. Returns `None` if `axis` is zero.
    pub fn from_axis_angle(axis: Vector, angle: Float) -> Option<Self> {
        let axis = Vector3::from(axis);
        let mag = axis.magnitude();
        (mag.is_finite() && mag > EPSILON)
            .then(|| Self(Quaternion::from_axis_angle(axis / mag, Rad(angle))))
    }
    /// Constructs a rotation by `multiplier` quarter turns around `axis`.
    /// Returns `None` if `axis` is zero.
    pub fn from_quarter_turns(axis: Vector, multiplier: i32) -> Option<Self> {
        Self::from_axis_angle(axis, multiplier as Float * FRAC_PI_2)
    }
    /// Constructs a rotation by `multiplier` quarter turns around a signed
    /// principal axis.
    pub fn from_principal_quarter_turns(axis: Axis, sign: Sign, multiplier: i32) -> Self {
        let axis = Vector3::from(Vector::signed_unit(axis, sign));
        let angle = Rad(multiplier as Float * FRAC_PI_2);
        Self(Quaternion::from_axis_angle(axis, angle))
    }

    /// Returns the rotation `self` applied after `first`, renormalized to
    /// unit length.
    #[must_use]
    pub fn then_after(self, first: Self) -> Self {
        Self((self.0 * first.0).normalize())
    }
    /// Returns the inverse rotation.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self(self.0.conjugate())
    }

    /// Rotates a vector.
    pub fn rotate_vector(self, v: Vector) -> Vector {
        self.0.rotate_vector(v.into()).into()
    }

    /// Returns the norm of the quaternion, which should always be
    /// approximately 1.
    pub fn norm(self) -> Float {
        self.0.magnitude()
    }
    /// Returns whether the quaternion has unit norm.
    pub fn is_unit(self) -> bool {
        approx_eq(&self.norm(), &1.0)
    }
    /// Returns whether this is approximately the identity rotation.
    pub fn is_identity(self) -> bool {
        self.abs_diff_eq(&Self::identity(), EPSILON)
    }

    /// Returns the components of the quaternion in `[x, y, z, w]` order.
    pub fn to_xyzw(self) -> [Float; 4] {
        let Quaternion { s, v } = self.0;
        [v.x, v.y, v.z, s]
    }
    /// Returns the underlying quaternion.
    pub fn quaternion(self) -> Quaternion<Float> {
        self.0
    }
}

impl Mul for Orientation {
    type Output = Orientation;

    fn mul(self, rhs: Orientation) -> Self::Output {
        self.then_after(rhs)
    }
}

impl AbsDiffEq for Orientation {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon) || self.0.abs_diff_eq(&-other.0, epsilon)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Quaternion { s, v } = self.0;
        write!(f, "quaternion({s}, {}, {}, {})", v.x, v.y, v.z)
    }
}
