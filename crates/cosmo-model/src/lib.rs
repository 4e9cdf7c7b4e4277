//! cosmo-model: FLRW distance measures for a (H0, Ωm, ΩΛ) cosmology.
//!
//! Provides:
//! - `CosmologyParameters`: validated parameter set with derived Ωk, q0, dH and age
//! - `Distances`: every redshift-dependent quantity, computed by a pure function
//! - `Cosmology`: parameters + redshift, recomputed in full on every change
//!
//! # Example
//!
//! ```
//! use cosmo_model::Cosmology;
//!
//! let mut cosmo = Cosmology::from_parameters(70.0, 0.3, 0.7).unwrap();
//! cosmo.set_redshift(1.0).unwrap();
//! assert!((cosmo.d_c() - 3303.83).abs() < 0.1);
//! ```

pub mod cosmology;
pub mod distances;
pub mod error;
pub mod expansion;
pub mod params;

pub use cosmology::Cosmology;
pub use distances::Distances;
pub use error::{ModelError, ModelResult};
pub use params::{CosmologyParameters, PLANCK_2013, ParameterSet};
