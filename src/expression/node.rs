use std::fmt;

use log::trace;

use crate::expression::ops::{BinaryOp, UnaryFn};
use crate::expression::render::{combine_binary, combine_power, combine_unary};
use crate::fraction::Fraction;

/// Grid used to merge float-only values that differ by rounding noise
pub const DEDUP_GRID: f64 = 1e-3;

/// Binding strength of a node's outermost operation, used only for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Additive = 1,
    Multiplicative = 2,
    Power = 3,
    Atomic = 4,
}

impl Precedence {
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            1 => Some(Precedence::Additive),
            2 => Some(Precedence::Multiplicative),
            3 => Some(Precedence::Power),
            4 => Some(Precedence::Atomic),
            _ => None,
        }
    }
}

/// Numeric value of a node: exact while every step stayed rational
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Exact(Fraction),
    Approx(f64),
}

impl Value {
    pub fn to_f64(&self) -> f64 {
        match self {
            Value::Exact(f) => f.to_f64(),
            Value::Approx(v) => *v,
        }
    }

    pub fn as_fraction(&self) -> Option<&Fraction> {
        match self {
            Value::Exact(f) => Some(f),
            Value::Approx(_) => None,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, Value::Exact(_))
    }

    pub fn key(&self) -> DedupKey {
        match self {
            Value::Exact(f) => DedupKey::Exact(f.clone()),
            // adding +0.0 folds -0.0 into 0.0 so both share a key
            Value::Approx(v) => DedupKey::Approx(((v / DEDUP_GRID).round() + 0.0).to_bits()),
        }
    }
}

/// Identity of a value for deduplication
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DedupKey {
    Exact(Fraction),
    /// Bit pattern of the value rounded to [`DEDUP_GRID`] steps
    Approx(u64),
}

/// One expression in the search, with its rendering and value
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    text: String,
    precedence: Precedence,
    atomic: bool,
    value: Value,
    from_unary: bool,
}

impl Node {
    /// A bare digit literal
    pub fn literal(digit: u8) -> Self {
        Self {
            text: digit.to_string(),
            precedence: Precedence::Atomic,
            atomic: true,
            value: Value::Exact(Fraction::from_integer(i64::from(digit)).unwrap_or_else(Fraction::zero)),
            from_unary: false,
        }
    }

    /// Rebuild a node from stored parts (cache records)
    pub fn from_parts(text: String, precedence: Precedence, atomic: bool, value: Value) -> Self {
        Self {
            text,
            precedence,
            atomic,
            value,
            from_unary: false,
        }
    }

    /// Combine two nodes, staying exact when both sides are exact.
    ///
    /// When exact arithmetic fails the float result is used instead; a zero
    /// divisor then produces a non-finite float and the node is rejected.
    pub fn binary(left: &Node, op: BinaryOp, right: &Node) -> Option<Node> {
        let exact = match (&left.value, &right.value) {
            (Value::Exact(a), Value::Exact(b)) => op.apply_exact(a, b),
            _ => None,
        };
        let value = match exact {
            Some(f) => Value::Exact(f),
            None => Value::Approx(op.apply_f64(left.value.to_f64(), right.value.to_f64())),
        };
        Self::binary_with(left, op, right, value)
    }

    /// Combine two nodes in exact arithmetic only; any failure aborts.
    pub fn binary_exact(left: &Node, op: BinaryOp, right: &Node) -> Option<Node> {
        let value = op.apply_exact(left.value.as_fraction()?, right.value.as_fraction()?)?;
        Self::binary_with(left, op, right, Value::Exact(value))
    }

    fn binary_with(left: &Node, op: BinaryOp, right: &Node, value: Value) -> Option<Node> {
        let (text, precedence) = combine_binary(left, op, right);
        Self::finite(Self {
            text,
            precedence,
            atomic: false,
            value,
            from_unary: false,
        })
    }

    /// Apply a unary function to the float value of `child`.
    pub fn unary(func: UnaryFn, child: &Node) -> Option<Node> {
        let value = func.apply(child.value.to_f64())?;
        let (text, precedence) = combine_unary(func, child);
        Self::finite(Self {
            text,
            precedence,
            atomic: false,
            value: Value::Approx(value),
            from_unary: true,
        })
    }

    /// Raise `base` to an integer power, exactly when possible.
    pub fn power(base: &Node, exponent: i32) -> Option<Node> {
        let value = match base.value.as_fraction().and_then(|f| f.pow(exponent)) {
            Some(f) => Value::Exact(f),
            None => Value::Approx(base.value.to_f64().powi(exponent)),
        };
        let (text, precedence) = combine_power(base, exponent);
        Self::finite(Self {
            text,
            precedence,
            atomic: false,
            value,
            from_unary: true,
        })
    }

    fn finite(node: Node) -> Option<Node> {
        if node.value.to_f64().is_finite() {
            Some(node)
        } else {
            trace!("Rejecting non-finite node {}", node.text);
            None
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn precedence(&self) -> Precedence {
        self.precedence
    }

    pub fn is_atomic(&self) -> bool {
        self.atomic
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn to_f64(&self) -> f64 {
        self.value.to_f64()
    }

    pub fn is_from_unary(&self) -> bool {
        self.from_unary
    }

    pub fn key(&self) -> DedupKey {
        self.value.key()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text)
    }
}
