//! Interactive prompting for parameters and redshifts.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use cosmo_model::{Cosmology, ParameterSet};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::format::fmt_g;
use crate::input::parse_number;
use crate::report::{html_report, long_report};

/// Line-oriented dialogue over any reader and pair of writers.
///
/// Answers go to `out`, complaints about bad input go to `err`.
pub struct Prompter<R, W, E> {
    input: R,
    out: W,
    err: E,
    eof: bool,
    // Whitespace-separated redshifts left over from the last line read
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write, E: Write> Prompter<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Self {
            input,
            out,
            err,
            eof: false,
            pending: VecDeque::new(),
        }
    }

    pub fn into_parts(self) -> (R, W, E) {
        (self.input, self.out, self.err)
    }

    /// Next line without its terminator, or `None` once input is exhausted.
    fn read_line(&mut self) -> AppResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.eof = true;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Next whitespace-separated token, reading further lines as needed.
    fn read_token(&mut self) -> AppResult<Option<String>> {
        while self.pending.is_empty() {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// Ask for one value; an empty answer (or end of input) keeps `default`.
    pub fn param(&mut self, description: &str, default: f64) -> AppResult<f64> {
        loop {
            write!(self.out, "{description} ({}): ", fmt_g(default, 6))?;
            self.out.flush()?;

            let Some(answer) = self.read_line()? else {
                return Ok(default);
            };
            if answer.is_empty() {
                return Ok(default);
            }
            match parse_number(&answer) {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.err, "  Not a valid number")?,
            }
        }
    }

    /// Ask for H0, Ωm and ΩΛ, re-asking until H0 > 0 and Ωm >= 0.
    pub fn cosmology(&mut self, current: ParameterSet) -> AppResult<ParameterSet> {
        let h0 = self.param_until(
            "Hubble constant",
            current.h0,
            |v| v > 0.0,
            "  The Hubble constant must be > 0",
        )?;
        let omega_m = self.param_until(
            "Omega matter",
            current.omega_m,
            |v| v >= 0.0,
            "  Omega matter must be >= 0",
        )?;
        let omega_l = self.param("Omega lambda", current.omega_l)?;

        let set = ParameterSet {
            h0,
            omega_m,
            omega_l,
        };
        debug!(?set, "parameters entered interactively");
        Ok(set)
    }

    fn param_until(
        &mut self,
        description: &str,
        default: f64,
        accept: impl Fn(f64) -> bool,
        complaint: &str,
    ) -> AppResult<f64> {
        loop {
            let value = self.param(description, default)?;
            if accept(value) {
                return Ok(value);
            }
            writeln!(self.err, "{complaint}")?;
            if self.eof {
                return Err(AppError::InvalidInput(format!(
                    "{description}: {}",
                    complaint.trim()
                )));
            }
        }
    }

    /// Prompt for redshifts until end of input, printing a report for each.
    ///
    /// Returns the number of redshifts evaluated.
    pub fn redshift_loop(&mut self, cosmo: &mut Cosmology, html: bool) -> AppResult<usize> {
        let mut evaluated = 0;
        loop {
            write!(self.out, "redshift (ctrl-D to quit): ")?;
            self.out.flush()?;

            let Some(answer) = self.read_token()? else {
                break;
            };
            let z = match parse_number(&answer) {
                Ok(z) => z,
                Err(_) => {
                    writeln!(self.err, "Redshift must be numeric")?;
                    continue;
                }
            };
            if z < 0.0 {
                writeln!(self.err, "  The redshift must be a number > 0.")?;
                // The rest of the offending line is dropped
                self.pending.clear();
                continue;
            }
            if let Err(e) = cosmo.set_redshift(z) {
                writeln!(self.err, "  {e}")?;
                continue;
            }

            let report = if html {
                html_report(cosmo)
            } else {
                long_report(cosmo)
            };
            write!(self.out, "\n{report}\n")?;
            evaluated += 1;
        }
        writeln!(self.out)?;
        Ok(evaluated)
    }
}
