use crate::{CosmoError, CosmoResult};

/// Floating point type used throughout system
pub type Real = f64;

/// Machine epsilon for `Real`.
pub const EPSILON: Real = Real::EPSILON;

/// Pass `v` through, or name it in a [`CosmoError::NonFinite`].
pub fn ensure_finite(v: Real, what: &'static str) -> CosmoResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CosmoError::NonFinite { what, value: v })
    }
}

/// Returns exactly `0.0` when `v` is within machine epsilon of zero.
#[inline]
pub fn snap_to_zero(v: Real) -> Real {
    if v.abs() <= EPSILON { 0.0 } else { v }
}

#[inline]
pub fn sqr(v: Real) -> Real {
    v * v
}

#[inline]
pub fn cube(v: Real) -> Real {
    v * v * v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_names_the_quantity() {
        assert_eq!(ensure_finite(0.3, "Omega matter"), Ok(0.3));
        assert_eq!(
            ensure_finite(Real::INFINITY, "redshift"),
            Err(CosmoError::NonFinite {
                what: "redshift",
                value: Real::INFINITY
            })
        );
        assert!(ensure_finite(Real::NAN, "Hubble constant").is_err());
    }

    #[test]
    fn snap_to_zero_only_inside_epsilon() {
        assert_eq!(snap_to_zero(1.0 - 0.3 - 0.7), 0.0);
        assert_eq!(snap_to_zero(-EPSILON), 0.0);
        assert_eq!(snap_to_zero(1e-10), 1e-10);
        assert_eq!(snap_to_zero(-0.1), -0.1);
    }

    #[test]
    fn powers() {
        assert_eq!(sqr(3.0), 9.0);
        assert_eq!(cube(-2.0), -8.0);
    }
}
