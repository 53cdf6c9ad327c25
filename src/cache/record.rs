use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::cache::errors::CacheError;
use crate::expression::{Node, Precedence, Value};
use crate::fraction::Fraction;

/// Only the version field, read before the full file is trusted
#[derive(Debug, Deserialize)]
pub(crate) struct VersionProbe {
    pub version: u32,
}

/// On-disk layout of the base set
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CacheFile {
    pub version: u32,
    pub digits: String,
    pub entries: Vec<CacheRecord>,
}

/// One base-set entry; numerator and denominator are kept as text so any
/// size survives the trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct CacheRecord {
    pub numerator: String,
    pub denominator: String,
    pub text: String,
    pub precedence: u8,
    pub atomic: bool,
}

impl CacheRecord {
    /// Base-set nodes are always exact; anything else is not cacheable.
    pub fn from_node(node: &Node) -> Option<Self> {
        let value = node.value().as_fraction()?;
        Some(Self {
            numerator: value.numer().to_string(),
            denominator: value.denom().to_string(),
            text: node.text().to_string(),
            precedence: node.precedence().rank(),
            atomic: node.is_atomic(),
        })
    }

    pub fn into_node(self, index: usize) -> Result<Node, CacheError> {
        let malformed = |reason: String| CacheError::Malformed { index, reason };

        let numerator: BigInt = self
            .numerator
            .parse()
            .map_err(|_| malformed(format!("bad numerator '{}'", self.numerator)))?;
        let denominator: BigInt = self
            .denominator
            .parse()
            .map_err(|_| malformed(format!("bad denominator '{}'", self.denominator)))?;
        let value = Fraction::reduce(numerator, denominator).ok_or_else(|| {
            malformed(format!(
                "{}/{} is not a bounded fraction",
                self.numerator, self.denominator
            ))
        })?;
        let precedence = Precedence::from_rank(self.precedence)
            .ok_or_else(|| malformed(format!("unknown precedence {}", self.precedence)))?;
        if self.text.is_empty() {
            return Err(malformed("empty expression text".to_string()));
        }

        Ok(Node::from_parts(
            self.text,
            precedence,
            self.atomic,
            Value::Exact(value),
        ))
    }
}
