//! Single-block expression generation

mod base_set;
pub mod constants;
mod core;
mod digits;
mod shape;

pub use base_set::BaseSet;
pub use core::BlockGenerator;
pub use digits::Digits;
pub use shape::{Shape, operator_triples};

#[cfg(test)]
mod tests;
