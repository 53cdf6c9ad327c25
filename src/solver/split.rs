use log::{debug, info};

use crate::expression::{BinaryOp, Node, Precedence};
use crate::solver::solution::{Solution, Strategy};

/// Solve `target` as `integer part + fractional part`.
///
/// `search(value, max_blocks)` runs an independent sub-search. The integer
/// part gets the full budget; the fraction gets whatever the integer part
/// left over. Returns `None` when the target has no fractional part or either
/// half cannot be found.
pub fn decompose<F>(target: f64, max_blocks: usize, mut search: F) -> Option<Solution>
where
    F: FnMut(f64, usize) -> Option<Solution>,
{
    let integer = target.trunc();
    let fraction = target - integer;
    if fraction == 0.0 {
        return None;
    }

    info!(
        "Splitting {} into integer part {} and fraction {}",
        target, integer, fraction
    );

    let Some(whole) = search(integer, max_blocks) else {
        debug!("No expression for integer part {}", integer);
        return None;
    };
    if whole.blocks >= max_blocks {
        debug!(
            "Integer part {} used all {} blocks, nothing left for the fraction",
            integer, max_blocks
        );
        return None;
    }

    let Some(part) = search(fraction, max_blocks - whole.blocks) else {
        debug!(
            "No expression for fraction {} within {} blocks",
            fraction,
            max_blocks - whole.blocks
        );
        return None;
    };

    let expression = grouped_sum(&whole.expression, &part.expression)?;
    Some(Solution::new(
        expression,
        whole.blocks + part.blocks,
        Strategy::Split {
            integer_blocks: whole.blocks,
            fraction_blocks: part.blocks,
        },
    ))
}

/// `(whole)+(part)`, each half kept in its own parentheses
fn grouped_sum(whole: &Node, part: &Node) -> Option<Node> {
    let sum = Node::binary(whole, BinaryOp::Add, part)?;
    Some(Node::from_parts(
        format!("({})+({})", whole, part),
        Precedence::Additive,
        false,
        sum.value().clone(),
    ))
}
