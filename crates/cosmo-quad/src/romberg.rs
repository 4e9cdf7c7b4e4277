//! Romberg quadrature (Richardson-extrapolated trapezoidal rule).

use cosmo_core::Real;
use tracing::warn;

/// Hard ceiling on table rows: row `i` has `2^i` panels, counted in a `u64`.
pub const MAX_ROWS: usize = 64;

/// Romberg integrator configuration.
#[derive(Clone, Copy, Debug)]
pub struct RombergConfig {
    /// Maximum number of table rows (row 0 is the single-panel trapezoid).
    /// Clamped to `1..=MAX_ROWS`.
    pub max_rows: usize,
    /// Absolute tolerance between successive diagonal estimates
    pub abs_tol: Real,
}

impl Default for RombergConfig {
    fn default() -> Self {
        Self {
            max_rows: 25,
            abs_tol: 1e-8,
        }
    }
}

impl RombergConfig {
    /// Rows actually built: `max_rows` clamped to `1..=MAX_ROWS`.
    pub fn row_limit(&self) -> usize {
        self.max_rows.clamp(1, MAX_ROWS)
    }
}

/// Romberg integration result.
#[derive(Clone, Copy, Debug)]
pub struct RombergResult {
    /// Most refined estimate of the integral
    pub value: Real,
    /// Difference between the last two diagonal estimates
    pub estimate_error: Real,
    /// Number of table rows built
    pub rows: usize,
    /// Converged flag
    pub converged: bool,
}

/// Integrate `f` over `[a, b]` with the default configuration.
///
/// Non-convergence is not an error: the best available estimate is returned.
/// Use [`romberg`] when the achieved error matters.
pub fn integrate<F>(f: F, a: Real, b: Real) -> Real
where
    F: Fn(Real) -> Real,
{
    romberg(f, a, b, &RombergConfig::default()).value
}

/// Romberg integration of `f` over `[a, b]`, with `a <= b`.
///
/// Row `i` of the table halves the panel width of row `i - 1` and only
/// evaluates `f` at the new midpoints, so every abscissa is visited once.
pub fn romberg<F>(f: F, a: Real, b: Real, config: &RombergConfig) -> RombergResult
where
    F: Fn(Real) -> Real,
{
    let max_rows = config.row_limit();
    let mut h = b - a;
    let mut panels: u64 = 1;

    let mut prev: Vec<Real> = Vec::with_capacity(max_rows);
    let mut curr: Vec<Real> = Vec::with_capacity(max_rows);
    prev.push(0.5 * h * (f(a) + f(b)));

    let mut delta = Real::INFINITY;

    for i in 1..max_rows {
        h *= 0.5;
        panels *= 2;
        let midpoint_sum: Real = (1..panels)
            .step_by(2)
            .map(|k| f(a + k as Real * h))
            .sum();

        curr.clear();
        curr.push(0.5 * prev[0] + h * midpoint_sum);

        let mut factor = 1.0;
        for j in 1..=i {
            factor *= 4.0;
            let refined = curr[j - 1] + (curr[j - 1] - prev[j - 1]) / (factor - 1.0);
            curr.push(refined);
        }

        delta = (curr[i] - prev[i - 1]).abs();
        if !curr[i].is_finite() {
            warn!(a, b, row = i, "Romberg estimate is not finite; stopping refinement");
            return RombergResult {
                value: curr[i],
                estimate_error: delta,
                rows: i + 1,
                converged: false,
            };
        }
        if delta < config.abs_tol {
            return RombergResult {
                value: curr[i],
                estimate_error: delta,
                rows: i + 1,
                converged: true,
            };
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    warn!(
        a,
        b,
        rows = max_rows,
        estimate_error = delta,
        "Romberg integration did not reach tolerance; returning best estimate"
    );

    RombergResult {
        value: prev[prev.len() - 1],
        estimate_error: delta,
        rows: max_rows,
        converged: false,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn cubics_are_integrated_exactly(
            c in prop::array::uniform4(-10.0_f64..10.0_f64),
            a in -5.0_f64..5.0_f64,
            width in 0.0_f64..5.0_f64,
        ) {
            let b = a + width;
            let poly = |x: f64| c[0] + c[1] * x + c[2] * x * x + c[3] * x * x * x;
            let antiderivative = |x: f64| {
                c[0] * x + c[1] * x * x / 2.0 + c[2] * x.powi(3) / 3.0 + c[3] * x.powi(4) / 4.0
            };
            let exact = antiderivative(b) - antiderivative(a);
            let result = romberg(poly, a, b, &RombergConfig::default());
            prop_assert!(result.converged);
            prop_assert!((result.value - exact).abs() < 1e-7 * (1.0 + exact.abs()));
        }
    }
}
