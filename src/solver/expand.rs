use std::collections::HashSet;

use log::trace;

use crate::expression::{DedupKey, Node, UnaryFn};

/// Applies unary functions and integer powers to freshly combined nodes
#[derive(Debug, Clone)]
pub struct Expander<'a> {
    exponents: &'a [i32],
    heavy_unary: bool,
}

impl<'a> Expander<'a> {
    pub fn new(exponents: &'a [i32], heavy_unary: bool) -> Self {
        Self {
            exponents,
            heavy_unary,
        }
    }

    pub fn heavy_unary(&self) -> bool {
        self.heavy_unary
    }

    /// Push every new expansion of `node` onto `out`, registering its key.
    ///
    /// Nodes that already came out of a unary or power step are left alone.
    pub fn expand(&self, node: &Node, seen: &mut HashSet<DedupKey>, out: &mut Vec<Node>) {
        if node.is_from_unary() {
            return;
        }

        if self.heavy_unary {
            for func in UnaryFn::ALL {
                if let Some(candidate) = Node::unary(func, node) {
                    Self::accept(candidate, seen, out);
                }
            }
        }

        for &exponent in self.exponents {
            if let Some(candidate) = Node::power(node, exponent) {
                Self::accept(candidate, seen, out);
            }
        }
    }

    fn accept(candidate: Node, seen: &mut HashSet<DedupKey>, out: &mut Vec<Node>) {
        if seen.insert(candidate.key()) {
            out.push(candidate);
        } else {
            trace!("Expansion {} duplicates a known value", candidate);
        }
    }
}
