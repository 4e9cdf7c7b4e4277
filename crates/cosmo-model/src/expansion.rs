//! Expansion rate E(z) and the integrals built on it.

use crate::params::CosmologyParameters;
use cosmo_core::units::constants::KM_PER_MPC;
use cosmo_core::{EPSILON, Real, cube, sqr};
use cosmo_quad::integrate;

impl CosmologyParameters {
    /// Dimensionless expansion rate `E(z) = H(z) / H0`.
    #[inline]
    pub fn expansion_rate(&self, z: Real) -> Real {
        let a_inv = 1.0 + z;
        (self.omega_m() * cube(a_inv) + self.omega_k() * sqr(a_inv) + self.omega_l()).sqrt()
    }
}

/// `∫₀^z dz'/E(z')`, the comoving distance in units of the Hubble distance.
pub fn comoving_integral(params: &CosmologyParameters, z: Real) -> Real {
    integrate(|zp| 1.0 / params.expansion_rate(zp), 0.0, z)
}

/// `∫₀^z dz'/[(1+z')E(z')]`, the lookback time in units of the Hubble time.
pub fn lookback_integral(params: &CosmologyParameters, z: Real) -> Real {
    integrate(|zp| lookback_integrand(params, zp), 0.0, z)
}

#[inline]
fn lookback_integrand(params: &CosmologyParameters, z: Real) -> Real {
    1.0 / (1.0 + z) / params.expansion_rate(z)
}

/// Age integrand after substituting `z = x / (1 - x)`, which maps `[0, ∞)` onto `[0, 1)`.
#[inline]
fn age_integrand(params: &CosmologyParameters, x: Real) -> Real {
    let z = x / (1.0 - x);
    lookback_integrand(params, z) / sqr(1.0 - x)
}

/// Converts a dimensionless time integral to seconds: `(1/H0) · KM_PER_MPC`.
#[inline]
pub fn hubble_time_s(params: &CosmologyParameters, integral: Real) -> Real {
    integral / params.h0() * KM_PER_MPC
}

/// Lookback time to `z` in seconds.
pub fn lookback_time_s(params: &CosmologyParameters, z: Real) -> Real {
    hubble_time_s(params, lookback_integral(params, z))
}

/// Age of the universe at z = 0 in seconds.
///
/// The upper bound stays one epsilon inside x = 1.
pub fn age_of_universe_s(params: &CosmologyParameters) -> Real {
    let integral = integrate(|x| age_integrand(params, x), 0.0, 1.0 - EPSILON);
    hubble_time_s(params, integral)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmo_core::units::constants::SECONDS_PER_TROPICAL_YEAR;

    fn gyr(seconds: Real) -> Real {
        seconds / SECONDS_PER_TROPICAL_YEAR / 1e9
    }

    #[test]
    fn expansion_rate_is_one_today() {
        for (om, ol) in [(0.3, 0.7), (1.0, 0.0), (0.3, 0.0), (0.3, 0.8)] {
            let p = CosmologyParameters::new(70.0, om, ol).unwrap();
            assert!((p.expansion_rate(0.0) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn matter_only_expansion_rate() {
        let p = CosmologyParameters::new(70.0, 1.0, 0.0).unwrap();
        for z in [0.5, 1.0, 3.0] {
            let expected = (1.0_f64 + z).powf(1.5);
            assert!((p.expansion_rate(z) - expected).abs() < 1e-12 * expected);
        }
    }

    #[test]
    fn matter_only_age_is_two_thirds_hubble_time() {
        let p = CosmologyParameters::new(70.0, 1.0, 0.0).unwrap();
        let exact = 2.0 / 3.0 / 70.0 * KM_PER_MPC;
        assert!(((age_of_universe_s(&p) - exact) / exact).abs() < 1e-6);
    }

    #[test]
    fn planck_age_is_about_13_8_gyr() {
        let p = CosmologyParameters::default();
        let age = gyr(age_of_universe_s(&p));
        assert!((age - 13.8).abs() / 13.8 < 0.02, "age = {age}");
    }

    #[test]
    fn lookback_is_zero_at_zero_redshift() {
        let p = CosmologyParameters::new(70.0, 0.3, 0.7).unwrap();
        assert_eq!(lookback_time_s(&p, 0.0), 0.0);
    }

    #[test]
    fn lookback_is_below_age() {
        let p = CosmologyParameters::new(70.0, 0.3, 0.7).unwrap();
        let age = age_of_universe_s(&p);
        for z in [0.1, 1.0, 10.0, 1000.0] {
            assert!(lookback_time_s(&p, z) < age);
        }
    }
}
