//! Batch mode: one redshift per input line, one result row per redshift.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use cosmo_model::Cosmology;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::input::parse_number;
use crate::report::{json_row, short_header, short_row};

/// Output file used when none is given.
pub const DEFAULT_BATCH_OUTFILE: &str = "cosmic.out";

/// Layout of batch output rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchFormat {
    /// `#` header lines, then tab-separated columns
    #[default]
    Tsv,
    /// One JSON object per line, no header
    JsonLines,
}

/// Evaluate every redshift in `input` against `cosmo` and write rows to `output`.
///
/// Blank lines are skipped. The first non-numeric or non-positive redshift
/// stops processing with [`AppError::BatchLine`]; rows already written stay.
/// Returns the number of rows written.
pub fn run_batch<R: BufRead, W: Write>(
    cosmo: &mut Cosmology,
    input: R,
    mut output: W,
    format: BatchFormat,
) -> AppResult<usize> {
    if format == BatchFormat::Tsv {
        output.write_all(short_header(cosmo.params()).as_bytes())?;
    }

    let mut rows = 0;
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        let z = parse_number(text).map_err(|_| AppError::BatchLine {
            line: line_no,
            message: format!("non-numeric redshift '{text}'"),
        })?;
        if z <= 0.0 {
            return Err(AppError::BatchLine {
                line: line_no,
                message: format!("redshift must be > 0 (got {text})"),
            });
        }

        cosmo.set_redshift(z)?;
        let row = match format {
            BatchFormat::Tsv => short_row(cosmo),
            BatchFormat::JsonLines => json_row(cosmo)?,
        };
        output.write_all(row.as_bytes())?;
        rows += 1;
    }

    output.flush()?;
    Ok(rows)
}

/// [`run_batch`] between two files.
pub fn run_batch_file(
    cosmo: &mut Cosmology,
    input_path: &Path,
    output_path: &Path,
    format: BatchFormat,
) -> AppResult<usize> {
    let input = File::open(input_path).map_err(|e| AppError::FileRead {
        path: input_path.to_path_buf(),
        source: e,
    })?;
    let output = File::create(output_path).map_err(|e| AppError::FileWrite {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    info!(
        input = %input_path.display(),
        output = %output_path.display(),
        ?format,
        "running batch"
    );
    let rows = run_batch(
        cosmo,
        BufReader::new(input),
        BufWriter::new(output),
        format,
    )?;
    info!(rows, "batch complete");
    Ok(rows)
}
