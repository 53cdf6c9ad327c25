use thiserror::Error;

/// Errors from validating user-supplied text
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Input cannot be empty")]
    EmptyInput,
    #[error("Target is not a number: {0}")]
    InvalidTarget(String),
    #[error("Target must be finite: {0}")]
    NonFiniteTarget(String),
    #[error("Digit string must contain only digits: {0}")]
    InvalidDigitString(String),
    #[error("Digit string must have exactly {expected} digits, found {found}")]
    WrongDigitCount { expected: usize, found: usize },
}
