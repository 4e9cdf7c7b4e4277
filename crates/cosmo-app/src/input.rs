//! Numeric text validation shared by flags, prompts and batch files.

use crate::error::{AppError, AppResult};

/// True when `text` only holds digits, at most one decimal point and at
/// most one minus sign, which must lead.
///
/// The empty string passes; [`parse_number`] is what rejects it.
pub fn is_numeric(text: &str) -> bool {
    if text.chars().any(|c| !matches!(c, '-' | '.' | '0'..='9')) {
        return false;
    }
    if text.char_indices().any(|(i, c)| c == '-' && i > 0) {
        return false;
    }
    text.matches('.').count() <= 1
}

/// Validate with [`is_numeric`] and parse. Surrounding whitespace is ignored.
pub fn parse_number(text: &str) -> AppResult<f64> {
    let trimmed = text.trim();
    if !is_numeric(trimmed) {
        return Err(AppError::InvalidInput(format!("not a valid number: '{trimmed}'")));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| AppError::InvalidInput(format!("not a valid number: '{trimmed}'")))
}
