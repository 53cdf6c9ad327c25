use log::{debug, warn};

use crate::generator::constants::DIGITS_PER_BLOCK;
use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the string is empty, contains any non-ASCII-digit
/// characters, or does not hold exactly one block's worth of digits.
pub fn validate_digit_string(digit_string: &str) -> Result<(), UtilsError> {
    debug!("Validating digit string: '{}'", digit_string);

    if digit_string.is_empty() {
        warn!("Digit string is empty");
        return Err(UtilsError::EmptyInput);
    }

    if !digit_string.chars().all(|c| c.is_ascii_digit()) {
        warn!(
            "Digit string contains non-digit characters: '{}'",
            digit_string
        );
        return Err(UtilsError::InvalidDigitString(digit_string.to_string()));
    }

    if digit_string.len() != DIGITS_PER_BLOCK {
        warn!(
            "Digit string '{}' has {} digits, expected {}",
            digit_string,
            digit_string.len(),
            DIGITS_PER_BLOCK
        );
        return Err(UtilsError::WrongDigitCount {
            expected: DIGITS_PER_BLOCK,
            found: digit_string.len(),
        });
    }

    debug!("Digit string validation successful");
    Ok(())
}
