use std::collections::HashSet;

use log::{debug, info};
use rayon::prelude::*;

use crate::generator::base_set::BaseSet;
use crate::generator::digits::Digits;
use crate::generator::shape::{Shape, operator_triples};

/// Enumerates every single-block expression over a digit sequence
pub struct BlockGenerator {
    digits: Digits,
}

impl BlockGenerator {
    pub fn new(digits: Digits) -> Self {
        Self { digits }
    }

    pub fn digits(&self) -> Digits {
        self.digits
    }

    /// Build the base set: every operator triple under every shape, exact
    /// values only, first occurrence of each value kept.
    pub fn generate(&self) -> BaseSet {
        let leaves = self.digits.literals();
        let leaves = &leaves;

        // collect keeps sequential order, so the result is deterministic
        let candidates: Vec<_> = operator_triples()
            .into_par_iter()
            .flat_map_iter(|ops| Shape::ALL.into_iter().map(move |shape| shape.build(leaves, ops)))
            .collect();
        let total = candidates.len();

        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        for node in candidates.into_iter().flatten() {
            if seen.insert(node.key()) {
                entries.push(node);
            } else {
                debug!("Skipping duplicate block value: {}", node);
            }
        }

        info!(
            "Generated {} distinct block values from {} candidates for digits {}",
            entries.len(),
            total,
            self.digits
        );
        BaseSet::from_nodes(entries)
    }
}

impl Default for BlockGenerator {
    fn default() -> Self {
        Self::new(Digits::default())
    }
}
