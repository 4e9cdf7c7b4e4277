//! Shared application service layer for the cosmology calculator.
//!
//! Everything around the numerical model that a front end needs: input
//! validation, parameter files, interactive prompts, report formatting and
//! batch processing of redshift files.

pub mod batch;
pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod prompt;
pub mod report;
pub mod table;

// Re-export key types for convenience
pub use batch::{BatchFormat, DEFAULT_BATCH_OUTFILE, run_batch, run_batch_file};
pub use config::{ParameterOverrides, load_parameters, resolve_parameters, save_parameters};
pub use error::{AppError, AppResult};
pub use input::{is_numeric, parse_number};
pub use prompt::Prompter;
pub use table::{DEFAULT_TABLE_OUTFILE, TableInput, parse_table_input, run_table_file, write_table};
