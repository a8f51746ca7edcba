//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod order_number;
pub mod postgres;

pub use order_number::ClockOrderNumberGenerator;
pub use postgres::{
    create_schema, PostgresLineItemRepository, PostgresOrderRepository, PostgresProductRepository,
    PostgresShopRepository,
};
