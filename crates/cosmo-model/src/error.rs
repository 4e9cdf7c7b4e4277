//! Cosmology model errors.

use cosmo_core::CosmoError;
use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Rejected inputs. The numeric paths themselves never fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("The Hubble constant must be > 0 (got {value})")]
    InvalidHubble { value: f64 },

    #[error("Omega matter must be >= 0 (got {value})")]
    NegativeMatterDensity { value: f64 },

    #[error("The redshift must be >= 0 (got {value})")]
    NegativeRedshift { value: f64 },

    #[error(transparent)]
    Core(#[from] CosmoError),
}
