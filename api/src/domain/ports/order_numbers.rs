//! Order number generation port

use crate::domain::entities::OrderNumber;

/// Source of order numbers for newly created orders.
///
/// Numbers are not guaranteed to be unique; callers do not retry on collision.
pub trait OrderNumberGenerator: Send + Sync {
    fn next_number(&self) -> OrderNumber;
}
