use std::fmt;

use crate::expression::node::Precedence;
use crate::fraction::Fraction;

/// The four binary operators available between blocks and digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 4] = [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div];

    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
        }
    }

    pub fn precedence(self) -> Precedence {
        match self {
            BinaryOp::Add | BinaryOp::Sub => Precedence::Additive,
            BinaryOp::Mul | BinaryOp::Div => Precedence::Multiplicative,
        }
    }

    /// Whether `a op (b op' c)` differs from `a op b op' c` at equal precedence
    pub fn is_right_sensitive(self) -> bool {
        matches!(self, BinaryOp::Sub | BinaryOp::Div)
    }

    pub fn apply_exact(self, left: &Fraction, right: &Fraction) -> Option<Fraction> {
        match self {
            BinaryOp::Add => left.add(right),
            BinaryOp::Sub => left.sub(right),
            BinaryOp::Mul => left.mul(right),
            BinaryOp::Div => left.div(right),
        }
    }

    pub fn apply_f64(self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOp::Add => left + right,
            BinaryOp::Sub => left - right,
            BinaryOp::Mul => left * right,
            BinaryOp::Div => left / right,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Unary functions applied to the float value of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryFn {
    Sqrt,
    Exp,
    Ln,
}

impl UnaryFn {
    pub const ALL: [UnaryFn; 3] = [UnaryFn::Sqrt, UnaryFn::Exp, UnaryFn::Ln];

    pub fn name(self) -> &'static str {
        match self {
            UnaryFn::Sqrt => "sqrt",
            UnaryFn::Exp => "exp",
            UnaryFn::Ln => "ln",
        }
    }

    /// Evaluate, or `None` outside the function's real domain.
    pub fn apply(self, value: f64) -> Option<f64> {
        match self {
            UnaryFn::Sqrt if value < 0.0 => None,
            UnaryFn::Sqrt => Some(value.sqrt()),
            UnaryFn::Exp => Some(value.exp()),
            UnaryFn::Ln if value <= 0.0 => None,
            UnaryFn::Ln => Some(value.ln()),
        }
    }
}

impl fmt::Display for UnaryFn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
