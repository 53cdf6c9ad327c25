use std::fmt;

use crate::expression::Node;

/// How a solution was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Direct,
    /// Integer and fractional parts solved separately and summed
    Split {
        integer_blocks: usize,
        fraction_blocks: usize,
    },
}

/// A matching expression and the number of blocks it uses
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub expression: Node,
    pub blocks: usize,
    pub strategy: Strategy,
}

impl Solution {
    pub fn new(expression: Node, blocks: usize, strategy: Strategy) -> Self {
        Self {
            expression,
            blocks,
            strategy,
        }
    }

    pub fn text(&self) -> &str {
        self.expression.text()
    }

    pub fn value(&self) -> f64 {
        self.expression.to_f64()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}
