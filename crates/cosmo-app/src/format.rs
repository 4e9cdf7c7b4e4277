//! Number rendering in the classic `printf` styles used by the reports.

/// `%.<precision>g`: shortest of fixed or scientific with `precision`
/// significant digits, trailing zeros removed.
pub fn fmt_g(value: f64, precision: usize) -> String {
    if let Some(special) = non_finite(value) {
        return special;
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let precision = precision.max(1);
    let (mantissa, exponent) = split_scientific(value, precision - 1);
    if exponent < -4 || exponent >= precision as i32 {
        format!("{}{}", strip_trailing_zeros(&mantissa), exponent_suffix(exponent))
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        strip_trailing_zeros(&format!("{value:.decimals$}"))
    }
}

/// `%.<precision>e` with a signed, at least two-digit exponent.
pub fn fmt_sci(value: f64, precision: usize) -> String {
    if let Some(special) = non_finite(value) {
        return special;
    }
    let (mantissa, exponent) = split_scientific(value, precision);
    format!("{mantissa}{}", exponent_suffix(exponent))
}

/// `%.<precision>f`.
pub fn fmt_fixed(value: f64, precision: usize) -> String {
    if let Some(special) = non_finite(value) {
        return special;
    }
    format!("{value:.precision$}")
}

fn non_finite(value: f64) -> Option<String> {
    if value.is_nan() {
        Some("nan".to_string())
    } else if value.is_infinite() {
        Some(if value > 0.0 { "inf" } else { "-inf" }.to_string())
    } else {
        None
    }
}

fn split_scientific(value: f64, decimals: usize) -> (String, i32) {
    let rendered = format!("{value:.decimals$e}");
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => (mantissa.to_string(), exponent.parse().unwrap_or(0)),
        None => (rendered, 0),
    }
}

fn exponent_suffix(exponent: i32) -> String {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("e{sign}{:02}", exponent.abs())
}

fn strip_trailing_zeros(text: &str) -> String {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_format_matches_printf() {
        assert_eq!(fmt_g(3303.8288058882517, 6), "3303.83");
        assert_eq!(fmt_g(70.0, 6), "70");
        assert_eq!(fmt_g(0.3183, 6), "0.3183");
        assert_eq!(fmt_g(-0.55, 6), "-0.55");
        assert_eq!(fmt_g(1.0, 6), "1");
        assert_eq!(fmt_g(0.0, 6), "0");
        assert_eq!(fmt_g(15726.37419082291, 6), "15726.4");
        assert_eq!(fmt_g(1234567.0, 6), "1.23457e+06");
        assert_eq!(fmt_g(0.0000123, 6), "1.23e-05");
        assert_eq!(fmt_g(0.0001, 6), "0.0001");
    }

    #[test]
    fn scientific_format_matches_printf() {
        assert_eq!(fmt_sci(2.853932115247215e-29, 4), "2.8539e-29");
        assert_eq!(fmt_sci(123456.0, 2), "1.23e+05");
    }

    #[test]
    fn fixed_format() {
        assert_eq!(fmt_fixed(8.00870702569203, 6), "8.008707");
        assert_eq!(fmt_fixed(0.0, 6), "0.000000");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(fmt_g(f64::INFINITY, 6), "inf");
        assert_eq!(fmt_g(f64::NEG_INFINITY, 6), "-inf");
        assert_eq!(fmt_sci(f64::NAN, 4), "nan");
    }
}
