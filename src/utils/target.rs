use log::debug;

use crate::utils::errors::UtilsError;

/// Parse a target value from user text, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns an error for empty input, text that is not a number, and for
/// infinities or NaN.
pub fn parse_target(text: &str) -> Result<f64, UtilsError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(UtilsError::EmptyInput);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| UtilsError::InvalidTarget(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(UtilsError::NonFiniteTarget(trimmed.to_string()));
    }

    debug!("Parsed target '{}' as {}", trimmed, value);
    Ok(value)
}
