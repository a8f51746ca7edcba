//! Product domain entity
//!
//! A named, priced item belonging to exactly one shop.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::name::validate_name;
use super::shop::ShopId;
use crate::error::DomainError;

/// Decimal places kept for monetary values
pub const VALUE_SCALE: u32 = 2;

/// Largest value a `DECIMAL(9, 2)` column can hold (9_999_999.99)
pub const MAX_VALUE: Decimal = Decimal::from_parts(999_999_999, 0, 0, false, 2);

/// Unique identifier for a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub i32);

impl From<i32> for ProductId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A priced item sold by a shop
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub shop_id: ShopId,
    pub name: String,
    pub value: Decimal,
    pub added_at: DateTime<Utc>,
}

impl Product {
    /// Validate a prospective product name
    pub fn check_name(name: &str) -> Result<(), DomainError> {
        validate_name("Product name", name)
    }

    /// Validate and normalize the value given at creation time.
    ///
    /// Zero is allowed here: a freshly created product is worth nothing until priced.
    pub fn initial_value(value: Decimal) -> Result<Decimal, DomainError> {
        if value < Decimal::ZERO {
            return Err(DomainError::Validation(format!(
                "Product value must not be negative, got {}",
                value
            )));
        }
        normalize_value(value)
    }

    /// Validate and normalize a replacement value. Must be strictly positive.
    pub fn check_value(value: Decimal) -> Result<Decimal, DomainError> {
        let value = normalize_value(value)?;
        if value <= Decimal::ZERO {
            return Err(DomainError::Validation(format!(
                "Product value must be strictly positive, got {}",
                value
            )));
        }
        Ok(value)
    }
}

/// Round to cents and enforce the column's upper bound
fn normalize_value(value: Decimal) -> Result<Decimal, DomainError> {
    let rounded = value.round_dp_with_strategy(VALUE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    if rounded > MAX_VALUE {
        return Err(DomainError::Validation(format!(
            "Product value must not exceed {}, got {}",
            MAX_VALUE, value
        )));
    }
    Ok(rounded)
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: ${:.2}", self.name, self.value)
    }
}

/// Data needed to create a new product
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub shop_id: ShopId,
    pub name: String,
    pub value: Decimal,
}
