//! Line item domain entity
//!
//! A quantity of one product. Line items are linked to orders through a
//! many-to-many relation, so a single line item may appear on several orders.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::product::ProductId;
use crate::error::DomainError;

/// Unique identifier for a line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineItemId(pub i32);

impl From<i32> for LineItemId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for LineItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A line item as read from storage.
///
/// `product_name` and `unit_value` are the product's current values, joined
/// at read time. The total is never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub id: LineItemId,
    pub product_id: ProductId,
    pub product_name: String,
    pub unit_value: Decimal,
    pub quantity: i32,
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Quantity times the product's value
    pub fn total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_value
    }

    /// Validate the quantity of a new line item. Must be strictly positive.
    pub fn check_quantity(quantity: i32) -> Result<(), DomainError> {
        if quantity <= 0 {
            return Err(DomainError::Validation(format!(
                "Quantity must be strictly positive, got {}",
                quantity
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for LineItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: ${:.2} ({}*${:.2})",
            self.product_name,
            self.total(),
            self.quantity,
            self.unit_value
        )
    }
}

/// What a requested quantity change does to a line item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityAction {
    /// Store the new quantity
    Set(i32),
    /// Delete the line item
    Remove,
}

impl QuantityAction {
    /// Positive quantities are stored, zero deletes, negative is rejected.
    pub fn from_requested(quantity: i32) -> Result<Self, DomainError> {
        match quantity {
            q if q > 0 => Ok(QuantityAction::Set(q)),
            0 => Ok(QuantityAction::Remove),
            q => Err(DomainError::Validation(format!(
                "Cannot have a negative quantity, got {}",
                q
            ))),
        }
    }
}

/// Outcome of changing a line item's quantity
#[derive(Debug, Clone, PartialEq)]
pub enum QuantityChange {
    Updated(LineItem),
    Removed(LineItemId),
}

/// Data needed to create a new line item
#[derive(Debug, Clone)]
pub struct NewLineItem {
    pub product_id: ProductId,
    pub quantity: i32,
}
