//! Order number value type
//!
//! An order number is the current time in milliseconds followed by one random
//! decimal digit, cut into groups of 4, 6 and the remaining digits:
//! `1537-676673-4438`.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Width of the `order_num` column
pub const ORDER_NUMBER_MAX_LEN: usize = 16;

/// Millisecond timestamps are zero-padded to this many digits
const MILLIS_WIDTH: usize = 13;

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{4}-\d{6}-\d+$").unwrap())
}

/// A formatted order number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Build an order number from a millisecond timestamp and a random digit.
    ///
    /// Only the last decimal digit of `digit` is used. Negative timestamps
    /// are clamped to zero.
    pub fn from_parts(millis: i64, digit: u8) -> Self {
        let digits = format!("{:0width$}{}", millis.max(0), digit % 10, width = MILLIS_WIDTH);
        let (head, rest) = digits.split_at(4);
        let (middle, tail) = rest.split_at(6);
        Self(format!("{}-{}-{}", head, middle, tail))
    }

    /// Parse a stored or user-supplied order number
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        if value.len() > ORDER_NUMBER_MAX_LEN || !pattern().is_match(value) {
            return Err(DomainError::Validation(format!(
                "Invalid order number: {}",
                value
            )));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for OrderNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
