use crate::solver::constants::{
    BIG_THRESHOLD, DEFAULT_EXPONENTS, DEFAULT_MAX_BLOCKS, MAX_PER_LEVEL, TOLERANCE,
};
use crate::solver::errors::SolverError;

/// Tuning knobs for one search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Highest block count explored
    pub max_blocks: usize,
    /// Nodes kept per level after trimming
    pub max_per_level: usize,
    /// Largest accepted distance between a value and the target
    pub tolerance: f64,
    /// Above this magnitude heavy unary functions are off and splitting is allowed
    pub big_threshold: f64,
    /// Whether sqrt, exp and ln are applied at all
    pub heavy_unary: bool,
    /// Integer powers applied by the expander
    pub exponents: Vec<i32>,
    /// Whether the integer/fraction split fallback runs
    pub split: bool,
}

impl SearchConfig {
    pub fn with_max_blocks(mut self, max_blocks: usize) -> Self {
        self.max_blocks = max_blocks;
        self
    }

    /// # Errors
    ///
    /// Returns [`SolverError::InvalidConfig`] for a zero block or level cap,
    /// or a tolerance or threshold that is not a positive finite number.
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.max_blocks == 0 {
            return Err(SolverError::InvalidConfig(
                "max_blocks must be at least 1".to_string(),
            ));
        }
        if self.max_per_level == 0 {
            return Err(SolverError::InvalidConfig(
                "max_per_level must be at least 1".to_string(),
            ));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(SolverError::InvalidConfig(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if !(self.big_threshold.is_finite() && self.big_threshold >= 0.0) {
            return Err(SolverError::InvalidConfig(format!(
                "big_threshold must be non-negative, got {}",
                self.big_threshold
            )));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_blocks: DEFAULT_MAX_BLOCKS,
            max_per_level: MAX_PER_LEVEL,
            tolerance: TOLERANCE,
            big_threshold: BIG_THRESHOLD,
            heavy_unary: true,
            exponents: DEFAULT_EXPONENTS.to_vec(),
            split: true,
        }
    }
}
