//! Minimal-parenthesization text synthesis
//!
//! Children are rendered once and reused as text fragments, so combining
//! never re-walks a tree.

use crate::expression::node::{Node, Precedence};
use crate::expression::ops::{BinaryOp, UnaryFn};

fn push_operand(out: &mut String, operand: &Node, need_parens: bool) {
    if need_parens {
        out.push('(');
        out.push_str(operand.text());
        out.push(')');
    } else {
        out.push_str(operand.text());
    }
}

/// Render `left op right`, returning the text and its precedence.
pub fn combine_binary(left: &Node, op: BinaryOp, right: &Node) -> (String, Precedence) {
    let prec = op.precedence();
    let need_l = !left.is_atomic() && left.precedence() < prec;
    let need_r = !right.is_atomic()
        && (right.precedence() < prec
            || (right.precedence() == prec && op.is_right_sensitive()));

    let mut text = String::with_capacity(left.text().len() + right.text().len() + 5);
    push_operand(&mut text, left, need_l);
    text.push(op.symbol());
    push_operand(&mut text, right, need_r);
    (text, prec)
}

/// Render `func(child)`; the argument is always parenthesized.
pub fn combine_unary(func: UnaryFn, child: &Node) -> (String, Precedence) {
    (format!("{}({})", func.name(), child.text()), Precedence::Atomic)
}

/// Render `base^exponent`.
///
/// `^` is right-associative, so a base that is itself a power also needs
/// parentheses. Negative exponents are written `^(-k)`.
pub fn combine_power(base: &Node, exponent: i32) -> (String, Precedence) {
    let need = !base.is_atomic() && base.precedence() <= Precedence::Power;
    let mut text = String::with_capacity(base.text().len() + 8);
    push_operand(&mut text, base, need);
    if exponent < 0 {
        text.push_str(&format!("^({})", exponent));
    } else {
        text.push_str(&format!("^{}", exponent));
    }
    (text, Precedence::Power)
}
