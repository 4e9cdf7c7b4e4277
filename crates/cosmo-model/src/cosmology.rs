//! Parameters plus a current redshift, kept consistent on every change.

use crate::distances::Distances;
use crate::error::{ModelError, ModelResult};
use crate::params::{CosmologyParameters, ParameterSet};
use cosmo_core::{Real, Time, ensure_finite, s};
use tracing::debug;

/// A cosmology evaluated at one source redshift.
///
/// Two transitions exist: [`Cosmology::set_parameters`] and
/// [`Cosmology::set_redshift`]. Both rebuild `distances` from scratch.
#[derive(Debug, Clone, PartialEq)]
pub struct Cosmology {
    params: CosmologyParameters,
    distances: Distances,
}

impl Default for Cosmology {
    fn default() -> Self {
        Self::new(CosmologyParameters::default())
    }
}

impl Cosmology {
    /// Start at z = 0.
    pub fn new(params: CosmologyParameters) -> Self {
        let distances = Distances::compute(&params, 0.0);
        Self { params, distances }
    }

    pub fn from_parameters(h0: Real, omega_m: Real, omega_l: Real) -> ModelResult<Self> {
        Ok(Self::new(CosmologyParameters::new(h0, omega_m, omega_l)?))
    }

    /// Replace the parameters, keeping the current redshift.
    pub fn set_parameters(&mut self, h0: Real, omega_m: Real, omega_l: Real) -> ModelResult<()> {
        let params = CosmologyParameters::new(h0, omega_m, omega_l)?;
        self.replace_parameters(params);
        Ok(())
    }

    pub fn replace_parameters(&mut self, params: CosmologyParameters) {
        debug!(
            h0 = params.h0(),
            omega_m = params.omega_m(),
            omega_l = params.omega_l(),
            omega_k = params.omega_k(),
            z = self.distances.z,
            "cosmology parameters updated"
        );
        self.params = params;
        self.distances = Distances::compute(&self.params, self.distances.z);
    }

    /// Move the source to redshift `z >= 0`.
    pub fn set_redshift(&mut self, z: Real) -> ModelResult<()> {
        let z = ensure_finite(z, "redshift")?;
        if z < 0.0 {
            return Err(ModelError::NegativeRedshift { value: z });
        }
        self.distances = Distances::compute(&self.params, z);
        debug!(z, d_c = self.distances.d_c, "redshift updated");
        Ok(())
    }

    pub fn params(&self) -> &CosmologyParameters {
        &self.params
    }

    pub fn parameter_set(&self) -> ParameterSet {
        self.params.set()
    }

    pub fn distances(&self) -> &Distances {
        &self.distances
    }

    pub fn z(&self) -> Real {
        self.distances.z
    }

    /// Luminosity distance (Mpc).
    pub fn d_l(&self) -> Real {
        self.distances.d_l
    }

    /// Angular-diameter distance (Mpc).
    pub fn d_a(&self) -> Real {
        self.distances.d_a
    }

    /// Comoving line-of-sight distance (Mpc).
    pub fn d_c(&self) -> Real {
        self.distances.d_c
    }

    /// Comoving transverse distance (Mpc).
    pub fn d_m(&self) -> Real {
        self.distances.d_m
    }

    /// Comoving volume out to z (Gpc³).
    pub fn v_c(&self) -> Real {
        self.distances.v_c
    }

    /// kpc per arcsecond at the source.
    pub fn scale(&self) -> Real {
        self.distances.scale
    }

    /// Critical density at the source (g/cm³).
    pub fn rho_crit(&self) -> Real {
        self.distances.rho_crit
    }

    /// Lookback time to the source (seconds).
    pub fn lookback_s(&self) -> Real {
        self.distances.t_l
    }

    /// Current age of the universe (seconds).
    pub fn age_s(&self) -> Real {
        self.params.age_s()
    }

    /// Age of the universe when the light left the source (seconds).
    pub fn age_at_z_s(&self) -> Real {
        self.params.age_s() - self.distances.t_l
    }

    pub fn age_at_z(&self) -> Time {
        s(self.age_at_z_s())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    /// Equal to within 1e-9 relative, or 1e-12 absolute near zero.
    fn close(a: f64, b: f64) -> bool {
        let diff = (a - b).abs();
        diff <= 1e-12 || diff <= 1e-9 * a.abs().max(b.abs())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn flat_models_have_equal_radial_and_transverse(
            h0 in 40.0_f64..100.0,
            omega_m in 0.05_f64..1.0,
            z in 0.01_f64..5.0,
        ) {
            let mut c = Cosmology::from_parameters(h0, omega_m, 1.0 - omega_m).unwrap();
            c.set_redshift(z).unwrap();
            prop_assert_eq!(c.d_m(), c.d_c());
            let sphere = 4.0 / 3.0 * PI * c.d_c().powi(3) / 1e9;
            prop_assert!(close(c.v_c(), sphere));
        }

        #[test]
        fn angular_and_luminosity_distances_follow_transverse(
            omega_m in 0.05_f64..1.5,
            omega_l in 0.0_f64..1.0,
            z in 0.01_f64..3.0,
        ) {
            let mut c = Cosmology::from_parameters(70.0, omega_m, omega_l).unwrap();
            c.set_redshift(z).unwrap();
            prop_assume!(c.d_m().is_finite());
            prop_assert!(close(c.d_a(), c.d_m() / (1.0 + z)));
            prop_assert!(close(c.d_l(), c.d_m() * (1.0 + z)));
        }

        #[test]
        fn zero_redshift_zeroes_everything_but_density(
            h0 in 40.0_f64..100.0,
            omega_m in 0.05_f64..2.0,
            omega_l in -0.5_f64..1.0,
        ) {
            let mut c = Cosmology::from_parameters(h0, omega_m, omega_l).unwrap();
            c.set_redshift(0.0).unwrap();
            let d = c.distances();
            for v in [d.d_a, d.d_l, d.d_c, d.d_m, d.v_c, d.t_l, d.scale] {
                prop_assert_eq!(v, 0.0);
            }
            prop_assert!(d.rho_crit.is_finite());
        }

        #[test]
        fn comoving_distance_increases_with_redshift(
            omega_m in 0.1_f64..1.0,
            z in 0.01_f64..5.0,
            dz in 0.01_f64..1.0,
        ) {
            let mut c = Cosmology::from_parameters(70.0, omega_m, 1.0 - omega_m).unwrap();
            c.set_redshift(z).unwrap();
            let near = c.d_c();
            c.set_redshift(z + dz).unwrap();
            prop_assert!(c.d_c() > near);
        }

        #[test]
        fn curvature_obeys_friedmann_constraint(
            omega_m in 0.05_f64..2.0,
            omega_l in -1.0_f64..1.0,
        ) {
            let c = Cosmology::from_parameters(70.0, omega_m, omega_l).unwrap();
            let expected = 1.0 - omega_m - omega_l;
            let ok = c.params().omega_k();
            if expected.abs() <= f64::EPSILON {
                prop_assert_eq!(ok, 0.0);
            } else {
                prop_assert_eq!(ok, expected);
            }
        }
    }
}
