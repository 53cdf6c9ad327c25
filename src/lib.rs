//! Blockexpr - A library for finding arithmetic expressions built from repeated digit blocks
//!
//! Every expression is assembled from blocks: the digits 9, 1, 7 and 8 in that order,
//! joined by three binary operators. Blocks are combined with further binary operators,
//! single unary functions and small integer powers until a value within tolerance of the
//! target is found.

pub mod cache;
pub mod expression;
pub mod fraction;
pub mod generator;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use cache::{CacheError, load_or_generate};
pub use expression::{Node, Value};
pub use fraction::Fraction;
pub use generator::{BaseSet, BlockGenerator, Digits};
pub use solver::{ExpressionSolver, SearchConfig, Solution, SolverError, Strategy};
pub use utils::{UtilsError, parse_target, validate_digit_string};

/// Find an expression over the default digit block that evaluates to the target value
///
/// This is a convenience function that generates the base set in memory, without
/// touching any cache file, and runs a search with the default configuration.
///
/// # Arguments
///
/// * `target` - The target value to match
///
/// # Returns
///
/// * `Ok(Some(Solution))` - If a matching expression is found
/// * `Ok(None)` - If no expression is found within the block limit
/// * `Err(SolverError)` - If the target is not finite
///
/// # Errors
///
/// This function will return an error if the target is infinite or NaN.
///
/// # Examples
///
/// ```
/// use blockexpr::find_expression;
///
/// // 9+1+7+8 is a single block
/// match find_expression(25.0) {
///     Ok(Some(solution)) => println!("Found: {}", solution),
///     Ok(None) => println!("No solution found"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_expression(target: f64) -> Result<Option<Solution>, SolverError> {
    let base = BlockGenerator::default().generate();
    ExpressionSolver::with_defaults(&base).solve(target)
}

/// Like [`find_expression`], with a custom four-digit block such as `"1234"`.
///
/// # Errors
///
/// Returns an error if `digits` is not exactly four ASCII digits or the target
/// is not finite.
pub fn find_expression_with_digits(
    digits: &str,
    target: f64,
) -> Result<Option<Solution>, SolverError> {
    let digits: Digits = digits.parse()?;
    let base = BlockGenerator::new(digits).generate();
    ExpressionSolver::with_defaults(&base).solve(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_expression_one_block() {
        let result = find_expression(25.0);
        assert!(matches!(&result, Ok(Some(s)) if s.text() == "9+1+7+8"));
    }

    #[test]
    fn test_find_expression_with_digits() {
        let result = find_expression_with_digits("1234", 10.0);
        assert!(matches!(&result, Ok(Some(s)) if s.text() == "1+2+3+4" && s.blocks == 1));

        assert!(matches!(
            find_expression_with_digits("12a4", 10.0),
            Err(SolverError::UtilsError(_))
        ));
        assert!(matches!(
            find_expression_with_digits("123", 10.0),
            Err(SolverError::UtilsError(UtilsError::WrongDigitCount { .. }))
        ));
    }

    #[test]
    fn test_find_expression_rejects_nan() {
        assert!(find_expression(f64::NAN).is_err());
    }
}
