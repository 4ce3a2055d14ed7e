//! Approximate comparison functions that automatically use [`EPSILON`].

pub use approx::AbsDiffEq;

use crate::{EPSILON, Float};

/// Compares two values, but considers them equal if they are separated by less
/// than `EPSILON`.
///
/// Handles infinity specially.
pub fn approx_eq<T: AbsDiffEq<Epsilon = Float> + PartialEq>(a: &T, b: &T) -> bool {
    // use native float equality to handle infinities
    a == b || approx::abs_diff_eq!(a, b, epsilon = EPSILON)
}

/// Returns whether one number is greater than another by at least `EPSILON`.
pub fn approx_gt(a: Float, b: Float) -> bool {
    a > b && !approx_eq(&a, &b)
}
/// Returns whether one number is less than another or within `EPSILON` of it.
pub fn approx_lt_eq(a: Float, b: Float) -> bool {
    a < b || approx_eq(&a, &b)
}

/// Returns `f` as an integer if it is within `EPSILON` of one.
pub fn to_approx_integer(f: Float) -> Option<i64> {
    let rounded = f.round();
    approx_eq(&f, &rounded).then_some(rounded as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_integer() {
        assert_eq!(to_approx_integer(2.0000000001), Some(2));
        assert_eq!(to_approx_integer(-0.9999999999), Some(-1));
        assert_eq!(to_approx_integer(-0.0), Some(0));
        assert_eq!(to_approx_integer(0.5), None);
    }

    #[test]
    fn test_approx_thresholds() {
        assert!(approx_gt(1.0, 0.5));
        assert!(!approx_gt(0.5 + EPSILON / 10.0, 0.5));
        assert!(approx_lt_eq(0.5 + EPSILON / 10.0, 0.5));
        assert!(!approx_lt_eq(1.0, 0.5));
    }
}
