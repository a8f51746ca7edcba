//! Order domain entity
//!
//! A shop's purchase record aggregating line items.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line_item::LineItem;
use super::order_number::OrderNumber;
use super::shop::ShopId;

/// Unique identifier for an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub i32);

impl From<i32> for OrderId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An order together with the line items linked to it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub shop_id: ShopId,
    pub number: OrderNumber,
    pub added_at: DateTime<Utc>,
    pub items: Vec<LineItem>,
}

impl Order {
    /// Sum of the line item totals
    pub fn total(&self) -> Decimal {
        self.items.iter().map(LineItem::total).sum()
    }

    /// Whether the line item is already linked to this order
    pub fn contains(&self, item: &LineItem) -> bool {
        self.items.iter().any(|i| i.id == item.id)
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: ${:.2}", self.number, self.total())
    }
}

/// Data needed to create a new order
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub shop_id: ShopId,
    pub number: OrderNumber,
}
