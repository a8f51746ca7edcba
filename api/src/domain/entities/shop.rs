//! Shop domain entity
//!
//! A named seller that owns products and orders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::name::validate_name;
use crate::error::DomainError;

/// Unique identifier for a shop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShopId(pub i32);

impl From<i32> for ShopId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ShopId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A shop owning zero or more products and orders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shop {
    pub id: ShopId,
    pub name: String,
    pub added_at: DateTime<Utc>,
}

impl Shop {
    /// Validate a prospective shop name
    pub fn check_name(name: &str) -> Result<(), DomainError> {
        validate_name("Shop name", name)
    }
}

impl std::fmt::Display for Shop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Data needed to create a new shop
#[derive(Debug, Clone)]
pub struct NewShop {
    pub name: String,
}
