//! cosmo-core: shared foundation for the cosmology calculator.
//!
//! Contains:
//! - units (uom SI types, astronomical constructors, physical constants)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CosmoError, CosmoResult};
pub use numeric::*;
pub use units::*;
