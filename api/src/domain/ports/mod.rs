//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod order_numbers;
pub mod repositories;

pub use order_numbers::OrderNumberGenerator;
pub use repositories::{LineItemRepository, OrderRepository, ProductRepository, ShopRepository};
