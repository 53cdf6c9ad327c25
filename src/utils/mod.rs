//! Input validation helpers

mod errors;
mod target;
mod validation;

pub use errors::UtilsError;
pub use target::parse_target;
pub use validation::validate_digit_string;
