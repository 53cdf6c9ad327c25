use thiserror::Error;

use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid search configuration: {0}")]
    InvalidConfig(String),
    #[error("Target must be finite, got {0}")]
    NonFiniteTarget(f64),
    #[error("Input error: {0}")]
    UtilsError(#[from] UtilsError),
}
