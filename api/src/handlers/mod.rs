//! HTTP handlers
//!
//! Axum request handlers for the read-only API endpoints.
//! Money is rendered as a string with two decimal places.

pub mod line_items;
pub mod orders;
pub mod products;
pub mod shops;

pub use line_items::get_line_item;
pub use orders::{get_order, list_orders};
pub use products::{get_product, list_products};
pub use shops::{get_shop, list_shops};

use rust_decimal::Decimal;

/// Render a money amount as `"11.00"`
pub(crate) fn money(value: Decimal) -> String {
    format!("{:.2}", value)
}
