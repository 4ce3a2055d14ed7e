//! Three-dimensional vector and quaternion rotation primitives for cube
//! puzzles.

pub use {approx, cgmath};

/// Floating-point type used for geometry.
pub type Float = f64;

/// Small floating-point value used for comparisons.
pub const EPSILON: Float = 0.000001;

/// Asserts that both arguments are approximately equal.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::EPSILON)
    };
}

#[macro_use]
mod impl_macros;

pub mod approx_cmp;
mod axis;
mod orientation;
mod vector;

/// Structs, traits, and constants.
pub mod prelude {
    pub use approx::AbsDiffEq;

    pub use crate::approx_cmp::*;
    pub use crate::axis::{Axis, Sign};
    pub use crate::orientation::Orientation;
    pub use crate::vector::Vector;
    pub use crate::{EPSILON, Float};
}
pub use prelude::*;
