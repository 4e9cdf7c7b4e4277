//! Distance tables from a self-describing input file.
//!
//! Input is whitespace-separated: `H0 OmegaM OmegaL`, then a count `N`,
//! then `N` redshifts. Output is CSV with dA, dL, dC and dM per redshift.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use cosmo_model::{Cosmology, CosmologyParameters, ParameterSet};
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::input::parse_number;
use crate::report::{csv_header, csv_row};

/// Output file used when none is given.
pub const DEFAULT_TABLE_OUTFILE: &str = "results.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct TableInput {
    pub params: ParameterSet,
    pub redshifts: Vec<f64>,
}

fn next_number<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> AppResult<f64> {
    let token = tokens
        .next()
        .ok_or_else(|| AppError::Table(format!("missing {what}")))?;
    parse_number(token).map_err(|_| AppError::Table(format!("invalid {what}: '{token}'")))
}

pub fn parse_table_input(text: &str) -> AppResult<TableInput> {
    let mut tokens = text.split_whitespace();

    let params = ParameterSet {
        h0: next_number(&mut tokens, "Hubble constant")?,
        omega_m: next_number(&mut tokens, "Omega matter")?,
        omega_l: next_number(&mut tokens, "Omega lambda")?,
    };

    let count_token = tokens
        .next()
        .ok_or_else(|| AppError::Table("missing redshift count".to_string()))?;
    let count: usize = count_token
        .parse()
        .map_err(|_| AppError::Table(format!("invalid redshift count: '{count_token}'")))?;

    let mut redshifts = Vec::with_capacity(count);
    for i in 0..count {
        let z = next_number(&mut tokens, &format!("redshift {} of {count}", i + 1))?;
        if z < 0.0 {
            return Err(AppError::Table(format!("negative redshift: {z}")));
        }
        redshifts.push(z);
    }

    Ok(TableInput { params, redshifts })
}

/// Write the CSV table for `input`. Returns the number of rows.
pub fn write_table<W: Write>(input: &TableInput, mut output: W) -> AppResult<usize> {
    let mut cosmo = Cosmology::new(CosmologyParameters::from_set(input.params)?);

    output.write_all(csv_header().as_bytes())?;
    for &z in &input.redshifts {
        cosmo.set_redshift(z)?;
        output.write_all(csv_row(&cosmo).as_bytes())?;
        debug!(z, "table row written");
    }
    output.flush()?;
    Ok(input.redshifts.len())
}

pub fn run_table_file(input_path: &Path, output_path: &Path) -> AppResult<usize> {
    let text = std::fs::read_to_string(input_path).map_err(|e| AppError::FileRead {
        path: input_path.to_path_buf(),
        source: e,
    })?;
    let input = parse_table_input(&text)?;

    let output = File::create(output_path).map_err(|e| AppError::FileWrite {
        path: output_path.to_path_buf(),
        source: e,
    })?;
    info!(
        redshifts = input.redshifts.len(),
        output = %output_path.display(),
        "writing distance table"
    );
    write_table(&input, BufWriter::new(output))
}
