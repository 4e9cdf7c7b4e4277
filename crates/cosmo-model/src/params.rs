//! Cosmological parameter set and the quantities derived from it alone.

use crate::error::{ModelError, ModelResult};
use crate::expansion;
use cosmo_core::units::constants::SPEED_OF_LIGHT_KM_S;
use cosmo_core::{Real, Time, ensure_finite, s, snap_to_zero};
use serde::{Deserialize, Serialize};

/// Planck 2013 + WMAP polarization (Planck Collaboration 2013, XVI, Table 2).
pub const PLANCK_2013: ParameterSet = ParameterSet {
    h0: 67.04,
    omega_m: 0.3183,
    omega_l: 0.6817,
};

/// The raw (H0, Ωm, ΩΛ) triple as entered or stored in a config file.
///
/// Missing fields deserialize to the Planck 2013 values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    /// Hubble constant in km/s/Mpc
    pub h0: Real,
    /// Matter density parameter
    pub omega_m: Real,
    /// Dark-energy density parameter
    pub omega_l: Real,
}

impl Default for ParameterSet {
    fn default() -> Self {
        PLANCK_2013
    }
}

/// Validated parameters plus everything that depends on them but not on z.
///
/// Curvature is never set directly: `omega_k` is always `1 - Ωm - ΩΛ`,
/// snapped to exactly zero inside machine epsilon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CosmologyParameters {
    h0: Real,
    omega_m: Real,
    omega_l: Real,
    omega_k: Real,
    q0: Real,
    d_h: Real,
    age_s: Real,
}

impl CosmologyParameters {
    /// Validate the triple and derive Ωk, q0, the Hubble distance and the age.
    pub fn new(h0: Real, omega_m: Real, omega_l: Real) -> ModelResult<Self> {
        let h0 = ensure_finite(h0, "Hubble constant")?;
        let omega_m = ensure_finite(omega_m, "Omega matter")?;
        let omega_l = ensure_finite(omega_l, "Omega lambda")?;

        if h0 <= 0.0 {
            return Err(ModelError::InvalidHubble { value: h0 });
        }
        if omega_m < 0.0 {
            return Err(ModelError::NegativeMatterDensity { value: omega_m });
        }

        Ok(Self::derive(h0, omega_m, omega_l))
    }

    fn derive(h0: Real, omega_m: Real, omega_l: Real) -> Self {
        let mut params = Self {
            h0,
            omega_m,
            omega_l,
            omega_k: snap_to_zero(1.0 - omega_m - omega_l),
            q0: 0.5 * omega_m - omega_l,
            d_h: SPEED_OF_LIGHT_KM_S / h0,
            age_s: 0.0,
        };
        params.age_s = expansion::age_of_universe_s(&params);
        params
    }

    pub fn from_set(set: ParameterSet) -> ModelResult<Self> {
        Self::new(set.h0, set.omega_m, set.omega_l)
    }

    /// Hubble constant (km/s/Mpc).
    pub fn h0(&self) -> Real {
        self.h0
    }

    pub fn omega_m(&self) -> Real {
        self.omega_m
    }

    pub fn omega_l(&self) -> Real {
        self.omega_l
    }

    /// Curvature density, `1 - Ωm - ΩΛ`.
    pub fn omega_k(&self) -> Real {
        self.omega_k
    }

    /// Deceleration parameter.
    pub fn q0(&self) -> Real {
        self.q0
    }

    /// Hubble distance c/H0 (Mpc).
    pub fn d_h(&self) -> Real {
        self.d_h
    }

    /// Age of the universe at z = 0 (seconds).
    pub fn age_s(&self) -> Real {
        self.age_s
    }

    pub fn age(&self) -> Time {
        s(self.age_s)
    }

    pub fn is_flat(&self) -> bool {
        self.omega_k == 0.0
    }

    /// The raw triple, for display and serialization.
    pub fn set(&self) -> ParameterSet {
        ParameterSet {
            h0: self.h0,
            omega_m: self.omega_m,
            omega_l: self.omega_l,
        }
    }
}

impl Default for CosmologyParameters {
    fn default() -> Self {
        Self::derive(PLANCK_2013.h0, PLANCK_2013.omega_m, PLANCK_2013.omega_l)
    }
}

impl TryFrom<ParameterSet> for CosmologyParameters {
    type Error = ModelError;

    fn try_from(set: ParameterSet) -> ModelResult<Self> {
        Self::from_set(set)
    }
}
