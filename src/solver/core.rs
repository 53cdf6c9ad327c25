use std::collections::HashSet;

use log::{debug, info};
use rayon::prelude::*;

use crate::expression::{BinaryOp, DedupKey, Node};
use crate::generator::BaseSet;
use crate::solver::config::SearchConfig;
use crate::solver::errors::SolverError;
use crate::solver::expand::Expander;
use crate::solver::solution::{Solution, Strategy};
use crate::solver::split;

/// Main solver for finding block expressions that match a target value
pub struct ExpressionSolver<'a> {
    base: &'a BaseSet,
    config: SearchConfig,
}

impl<'a> ExpressionSolver<'a> {
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(base: &'a BaseSet, config: SearchConfig) -> Result<Self, SolverError> {
        config.validate()?;
        Ok(Self { base, config })
    }

    pub fn with_defaults(base: &'a BaseSet) -> Self {
        Self {
            base,
            config: SearchConfig::default(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find an expression whose value lies within tolerance of `target`.
    ///
    /// Searches block counts in increasing order and falls back to the
    /// integer/fraction split for large non-integer targets.
    ///
    /// # Errors
    ///
    /// Returns an error if `target` is infinite or NaN.
    pub fn solve(&self, target: f64) -> Result<Option<Solution>, SolverError> {
        if !target.is_finite() {
            return Err(SolverError::NonFiniteTarget(target));
        }

        info!(
            "Searching for {} with up to {} blocks over {} base values",
            target,
            self.config.max_blocks,
            self.base.len()
        );

        if let Some(found) = self.search_levels(target) {
            info!("Found match with {} blocks: {}", found.blocks, found);
            return Ok(Some(found));
        }

        if self.should_split(target) {
            let found = split::decompose(target, self.config.max_blocks, |part, blocks| {
                self.sub_search(part, blocks)
            });
            if let Some(found) = found {
                info!("Found split match with {} blocks: {}", found.blocks, found);
                return Ok(Some(found));
            }
        }

        info!("No match found");
        Ok(None)
    }

    fn should_split(&self, target: f64) -> bool {
        self.config.split && target.abs() > self.config.big_threshold && target.fract() != 0.0
    }

    /// Search on a fresh engine with its own budget and heavy unary off
    fn sub_search(&self, target: f64, max_blocks: usize) -> Option<Solution> {
        let sub = ExpressionSolver {
            base: self.base,
            config: SearchConfig {
                max_blocks,
                heavy_unary: false,
                split: false,
                ..self.config.clone()
            },
        };
        sub.search_levels(target)
    }

    fn search_levels(&self, target: f64) -> Option<Solution> {
        LevelSearch::new(self.base, &self.config, target).run()
    }
}

/// State of one breadth-first search over block counts
pub(crate) struct LevelSearch<'a> {
    base: &'a BaseSet,
    config: &'a SearchConfig,
    target: f64,
    expander: Expander<'a>,
    seen: HashSet<DedupKey>,
    levels: Vec<Vec<Node>>,
}

impl<'a> LevelSearch<'a> {
    pub(crate) fn new(base: &'a BaseSet, config: &'a SearchConfig, target: f64) -> Self {
        let heavy_unary = config.heavy_unary && target.abs() <= config.big_threshold;
        if config.heavy_unary && !heavy_unary {
            debug!("Target {} is large, heavy unary functions disabled", target);
        }
        Self {
            base,
            config,
            target,
            expander: Expander::new(&config.exponents, heavy_unary),
            seen: HashSet::new(),
            levels: Vec::with_capacity(config.max_blocks),
        }
    }

    /// Levels built so far; index 0 holds one-block nodes
    #[cfg(test)]
    pub(crate) fn levels(&self) -> &[Vec<Node>] {
        &self.levels
    }

    pub(crate) fn run(&mut self) -> Option<Solution> {
        if let Some(found) = self.seed() {
            return Some(found);
        }

        for blocks in 2..=self.config.max_blocks {
            if let Some(found) = self.grow(blocks) {
                return Some(found);
            }
            self.trim_last();

            let size = self.levels.last().map_or(0, Vec::len);
            debug!("Level {} holds {} nodes", blocks, size);
            if size == 0 {
                debug!("Level {} is empty, stopping early", blocks);
                break;
            }
        }
        None
    }

    fn is_match(&self, node: &Node) -> bool {
        (node.to_f64() - self.target).abs() < self.config.tolerance
    }

    fn found(&self, node: Node, blocks: usize) -> Option<Solution> {
        debug!("Match {} = {} at {} blocks", node, node.to_f64(), blocks);
        Some(Solution::new(node, blocks, Strategy::Direct))
    }

    /// Level 1: the base set plus its expansions, grown as a frontier
    fn seed(&mut self) -> Option<Solution> {
        let mut level = Vec::with_capacity(self.base.len());
        for node in self.base {
            if !self.seen.insert(node.key()) {
                continue;
            }
            if self.is_match(node) {
                return self.found(node.clone(), 1);
            }
            level.push(node.clone());
        }

        let mut produced = Vec::new();
        let mut cursor = 0;
        while let Some(current) = level.get(cursor).cloned() {
            self.expander.expand(&current, &mut self.seen, &mut produced);
            for node in produced.drain(..) {
                if self.is_match(&node) {
                    return self.found(node, 1);
                }
                level.push(node);
            }
            cursor += 1;
        }

        debug!("Level 1 holds {} nodes", level.len());
        self.levels.push(level);
        None
    }

    /// Level `blocks`: every previous-level node combined with every base entry
    fn grow(&mut self, blocks: usize) -> Option<Solution> {
        let mut next = Vec::new();
        let mut produced = Vec::new();
        let previous = self.levels.last().map(Vec::as_slice).unwrap_or_default();

        for left in previous {
            for right in self.base {
                for op in BinaryOp::ALL {
                    let Some(node) = Node::binary(left, op, right) else {
                        continue;
                    };
                    if !self.seen.insert(node.key()) {
                        continue;
                    }
                    if self.is_match(&node) {
                        return self.found(node, blocks);
                    }

                    self.expander.expand(&node, &mut self.seen, &mut produced);
                    next.push(node);
                    for extra in produced.drain(..) {
                        if self.is_match(&extra) {
                            return self.found(extra, blocks);
                        }
                        next.push(extra);
                    }
                }
            }
        }

        self.levels.push(next);
        None
    }

    /// Keep only the nodes closest to the target once a level overflows.
    ///
    /// The sort is stable, so equally close nodes keep discovery order
    /// except that exact values go before approximations.
    fn trim_last(&mut self) {
        let cap = self.config.max_per_level;
        let target = self.target;
        if let Some(level) = self.levels.last_mut()
            && level.len() > cap
        {
            info!("Trimming level from {} to {} nodes", level.len(), cap);
            level.par_sort_by(|a, b| {
                let da = (a.to_f64() - target).abs();
                let db = (b.to_f64() - target).abs();
                da.total_cmp(&db)
                    .then_with(|| b.value().is_exact().cmp(&a.value().is_exact()))
            });
            level.truncate(cap);
        }
    }
}
