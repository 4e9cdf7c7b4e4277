//! Cosmological parameter files and override layering.
//!
//! Precedence, lowest first: Planck 2013 defaults, parameter file,
//! explicit overrides (command-line flags).

use std::path::Path;

use cosmo_model::ParameterSet;
use tracing::debug;

use crate::error::{AppError, AppResult};

/// Values given explicitly on top of a base parameter set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParameterOverrides {
    pub h0: Option<f64>,
    pub omega_m: Option<f64>,
    pub omega_l: Option<f64>,
}

impl ParameterOverrides {
    pub fn apply(self, base: ParameterSet) -> ParameterSet {
        ParameterSet {
            h0: self.h0.unwrap_or(base.h0),
            omega_m: self.omega_m.unwrap_or(base.omega_m),
            omega_l: self.omega_l.unwrap_or(base.omega_l),
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Load a parameter set from YAML, or JSON when the extension is `.json`.
pub fn load_parameters(path: &Path) -> AppResult<ParameterSet> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let set: ParameterSet = if is_json(path) {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };
    debug!(path = %path.display(), ?set, "loaded cosmological parameters");
    Ok(set)
}

/// Save a parameter set as YAML, or JSON when the extension is `.json`.
pub fn save_parameters(path: &Path, set: &ParameterSet) -> AppResult<()> {
    let content = if is_json(path) {
        serde_json::to_string_pretty(set)?
    } else {
        serde_yaml::to_string(set)?
    };

    std::fs::write(path, content).map_err(|e| AppError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Defaults, then the optional file, then the overrides.
pub fn resolve_parameters(
    config: Option<&Path>,
    overrides: ParameterOverrides,
) -> AppResult<ParameterSet> {
    let base = match config {
        Some(path) => load_parameters(path)?,
        None => ParameterSet::default(),
    };
    Ok(overrides.apply(base))
}
