mod config;
pub mod constants;
mod core;
mod errors;
mod expand;
mod solution;
mod split;

pub use config::SearchConfig;
pub use core::ExpressionSolver;
pub use errors::SolverError;
pub use expand::Expander;
pub use solution::{Solution, Strategy};
pub use split::decompose;
