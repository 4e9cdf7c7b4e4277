//! Redshift-dependent distance, volume, time and density quantities.
//!
//! `Distances::compute` is a pure function of (parameters, z): nothing is
//! carried over between redshifts.

use crate::expansion::{comoving_integral, lookback_time_s};
use crate::params::CosmologyParameters;
use cosmo_core::units::constants::{
    ARCSEC_SCALE_DIVISOR, GRAVITATIONAL_CONSTANT_CGS, KM_PER_MPC,
};
use cosmo_core::{Density, Length, Real, Time, cube, g_per_cm3, mpc, s, sqr};
use serde::Serialize;
use std::f64::consts::PI;

/// Below this |Ωk·(dM/dH)²| the curved volume formula is replaced by its series.
const VOLUME_SERIES_THRESHOLD: Real = 1e-4;

/// Everything that depends on the source redshift.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Distances {
    /// Source redshift
    pub z: Real,
    /// Comoving radial (line-of-sight) distance, Mpc
    pub d_c: Real,
    /// Comoving transverse distance, Mpc
    pub d_m: Real,
    /// Angular-diameter distance, Mpc
    pub d_a: Real,
    /// Luminosity distance, Mpc
    pub d_l: Real,
    /// Comoving volume out to z, Gpc³
    pub v_c: Real,
    /// Lookback time to z, seconds
    pub t_l: Real,
    /// Angular scale, kpc per arcsecond
    pub scale: Real,
    /// Critical density at z, g/cm³
    pub rho_crit: Real,
}

impl Distances {
    /// Recompute every quantity for `z >= 0` from scratch.
    pub fn compute(params: &CosmologyParameters, z: Real) -> Self {
        let rho_crit = critical_density(params, z);

        if z == 0.0 {
            return Self {
                z,
                rho_crit,
                ..Self::default()
            };
        }

        let d_c = params.d_h() * comoving_integral(params, z);
        let d_m = transverse_comoving_distance(params, d_c);
        let d_a = d_m / (1.0 + z);

        Self {
            z,
            d_c,
            d_m,
            d_a,
            d_l: d_m * (1.0 + z),
            v_c: comoving_volume_mpc3(params, d_m) / 1e9,
            t_l: lookback_time_s(params, z),
            scale: d_a / ARCSEC_SCALE_DIVISOR * PI,
            rho_crit,
        }
    }

    pub fn comoving_distance(&self) -> Length {
        mpc(self.d_c)
    }

    pub fn transverse_comoving_distance(&self) -> Length {
        mpc(self.d_m)
    }

    pub fn angular_diameter_distance(&self) -> Length {
        mpc(self.d_a)
    }

    pub fn luminosity_distance(&self) -> Length {
        mpc(self.d_l)
    }

    pub fn lookback_time(&self) -> Time {
        s(self.t_l)
    }

    pub fn critical_density(&self) -> Density {
        g_per_cm3(self.rho_crit)
    }

    /// Arcseconds subtended by 1 kpc; infinite at z = 0.
    pub fn inverse_scale(&self) -> Real {
        1.0 / self.scale
    }
}

/// dM from dC according to the sign of the curvature.
pub fn transverse_comoving_distance(params: &CosmologyParameters, d_c: Real) -> Real {
    let ok = params.omega_k();
    let d_h = params.d_h();
    if ok > 0.0 {
        let sqrt_k = ok.sqrt();
        d_h / sqrt_k * (sqrt_k * d_c / d_h).sinh()
    } else if ok < 0.0 {
        let sqrt_k = ok.abs().sqrt();
        d_h / sqrt_k * (sqrt_k * d_c / d_h).sin()
    } else {
        d_c
    }
}

/// Comoving volume inside dM, in Mpc³.
///
/// For small |Ωk·x²| the closed form cancels catastrophically, so the
/// expansion `4/3·π·dM³·(1 − 3/10·Ωk·x² + 9/56·(Ωk·x²)²)` is used instead.
pub fn comoving_volume_mpc3(params: &CosmologyParameters, d_m: Real) -> Real {
    let ok = params.omega_k();
    let flat = 4.0 / 3.0 * PI * cube(d_m);
    if ok == 0.0 {
        return flat;
    }

    let d_h = params.d_h();
    let x = d_m / d_h;
    let kx2 = ok * sqr(x);
    if kx2.abs() < VOLUME_SERIES_THRESHOLD {
        return flat * (1.0 - 0.3 * kx2 + 9.0 / 56.0 * sqr(kx2));
    }

    let sqrt_k = ok.abs().sqrt();
    let angle = if ok > 0.0 {
        (sqrt_k * x).asinh()
    } else {
        (sqrt_k * x).asin()
    };
    2.0 * PI * cube(d_h) / ok * (x * (1.0 + kx2).sqrt() - angle / sqrt_k)
}

/// Critical density at `z` in g/cm³.
pub fn critical_density(params: &CosmologyParameters, z: Real) -> Real {
    let h0_per_s = params.h0() / KM_PER_MPC;
    3.0 / (8.0 * PI) * sqr(h0_per_s) / GRAVITATIONAL_CONSTANT_CGS
        * (params.omega_l() + cube(1.0 + z) * params.omega_m())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(om: Real, ol: Real) -> CosmologyParameters {
        CosmologyParameters::new(70.0, om, ol).unwrap()
    }

    fn rel(a: Real, b: Real) -> Real {
        ((a - b) / b).abs()
    }

    #[test]
    fn zero_redshift_is_all_zero_but_density() {
        let d = Distances::compute(&params(0.3, 0.7), 0.0);
        assert_eq!(d.d_c, 0.0);
        assert_eq!(d.d_m, 0.0);
        assert_eq!(d.d_a, 0.0);
        assert_eq!(d.d_l, 0.0);
        assert_eq!(d.v_c, 0.0);
        assert_eq!(d.t_l, 0.0);
        assert_eq!(d.scale, 0.0);
        assert!(d.rho_crit.is_finite() && d.rho_crit > 0.0);
    }

    #[test]
    fn flat_lcdm_at_unit_redshift() {
        let d = Distances::compute(&params(0.3, 0.7), 1.0);
        assert!(rel(d.d_c, 3303.828_805_888) < 1e-6, "dC = {}", d.d_c);
        assert!(rel(d.d_a, 1651.914_402_944) < 1e-6);
        assert!(rel(d.d_l, 6607.657_611_777) < 1e-6);
        assert_eq!(d.d_m, d.d_c);
        assert!(rel(d.scale, 8.008_707_026) < 1e-6);
        assert!(rel(d.rho_crit, 2.853_932_115e-29) < 1e-6);
    }

    #[test]
    fn open_universe_transverse_exceeds_radial() {
        let d = Distances::compute(&params(0.3, 0.0), 1.0);
        assert!(rel(d.d_c, 2795.156_020_763) < 1e-6);
        assert!(rel(d.d_m, 2936.147_220_517) < 1e-6);
        assert!(d.d_m > d.d_c);
    }

    #[test]
    fn closed_universe_transverse_below_radial() {
        let d = Distances::compute(&params(0.3, 0.8), 2.0);
        assert!(rel(d.d_c, 5382.722_560_758) < 1e-6);
        assert!(rel(d.d_m, 5242.124_730_274) < 1e-6);
        assert!(d.d_m < d.d_c);
    }

    #[test]
    fn flat_volume_is_sphere() {
        let p = params(0.3, 0.7);
        let d = Distances::compute(&p, 1.0);
        let sphere = 4.0 / 3.0 * PI * cube(d.d_c) / 1e9;
        assert!(rel(d.v_c, sphere) < 1e-12);
    }

    #[test]
    fn open_volume_is_below_sphere_of_same_radius() {
        let p = params(0.3, 0.0);
        let d = Distances::compute(&p, 1.0);
        assert!(d.v_c < 4.0 / 3.0 * PI * cube(d.d_m) / 1e9);
    }

    #[test]
    fn closed_volume_exceeds_sphere_of_same_radius() {
        let p = params(0.3, 0.8);
        let d = Distances::compute(&p, 2.0);
        assert!(d.v_c > 4.0 / 3.0 * PI * cube(d.d_m) / 1e9);
    }

    #[test]
    fn volume_series_matches_closed_form_at_threshold() {
        // Pick dM so that Ωk·x² sits just on either side of the switch.
        for ok_sign in [1.0, -1.0] {
            let p = params(0.3, 0.7 - ok_sign * 0.01);
            let x_on_switch = (VOLUME_SERIES_THRESHOLD / p.omega_k().abs()).sqrt();
            let below = comoving_volume_mpc3(&p, 0.999 * x_on_switch * p.d_h());
            let above = comoving_volume_mpc3(&p, 1.001 * x_on_switch * p.d_h());
            let flat_below = 4.0 / 3.0 * PI * cube(0.999 * x_on_switch * p.d_h());
            let flat_above = 4.0 / 3.0 * PI * cube(1.001 * x_on_switch * p.d_h());
            // Both branches give the same correction factor across the switch
            assert!((below / flat_below - above / flat_above).abs() < 1e-6);
        }
    }

    #[test]
    fn nearly_flat_volume_is_continuous() {
        let flat = Distances::compute(&params(0.3, 0.7), 1.0);
        let open = Distances::compute(&params(0.3, 0.7 - 1e-9), 1.0);
        let closed = Distances::compute(&params(0.3, 0.7 + 1e-9), 1.0);
        assert!(rel(open.v_c, flat.v_c) < 1e-7);
        assert!(rel(closed.v_c, flat.v_c) < 1e-7);
    }

    #[test]
    fn critical_density_scales_with_matter_term() {
        let p = params(1.0, 0.0);
        let today = critical_density(&p, 0.0);
        let z1 = critical_density(&p, 1.0);
        assert!(rel(z1, 8.0 * today) < 1e-12);
    }

    #[test]
    fn typed_accessors_agree_with_raw_fields() {
        use cosmo_core::units::in_mpc;
        let d = Distances::compute(&params(0.3, 0.7), 0.5);
        assert!(rel(in_mpc(d.luminosity_distance()), d.d_l) < 1e-12);
        assert!(rel(in_mpc(d.angular_diameter_distance()), d.d_a) < 1e-12);
        assert!((d.inverse_scale() * d.scale - 1.0).abs() < 1e-12);
    }
}
