use std::fmt;
use std::str::FromStr;

use crate::expression::Node;
use crate::generator::constants::DEFAULT_DIGITS;
use crate::utils::{UtilsError, validate_digit_string};

/// The fixed, ordered digit sequence that makes up one block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digits([u8; 4]);

impl Digits {
    pub fn new(digits: [u8; 4]) -> Result<Self, UtilsError> {
        if let Some(&bad) = digits.iter().find(|&&d| d > 9) {
            return Err(UtilsError::InvalidDigitString(bad.to_string()));
        }
        Ok(Self(digits))
    }

    pub fn as_array(&self) -> [u8; 4] {
        self.0
    }

    /// One literal node per digit, in order
    pub fn literals(&self) -> [Node; 4] {
        self.0.map(Node::literal)
    }
}

impl Default for Digits {
    fn default() -> Self {
        Self(DEFAULT_DIGITS)
    }
}

impl FromStr for Digits {
    type Err = UtilsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_digit_string(s)?;
        let mut digits = [0u8; 4];
        for (slot, byte) in digits.iter_mut().zip(s.bytes()) {
            *slot = byte - b'0';
        }
        Ok(Self(digits))
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for d in self.0 {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}
