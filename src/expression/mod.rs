//! Expression nodes: value, rendering and provenance

mod node;
mod ops;
mod render;

pub use node::{DEDUP_GRID, DedupKey, Node, Precedence, Value};
pub use ops::{BinaryOp, UnaryFn};
pub use render::{combine_binary, combine_power, combine_unary};

#[cfg(test)]
pub(crate) mod parser;
