//! cosmo-quad: one-dimensional definite integration for the cosmology model.
//!
//! The integrator knows nothing about cosmology: callers hand it any
//! `Fn(f64) -> f64` and an ordered interval.

pub mod romberg;

pub use romberg::{MAX_ROWS, RombergConfig, RombergResult, integrate, romberg};
