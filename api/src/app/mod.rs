//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services validate input against the domain rules, then coordinate the ports.

pub mod catalog_service;
pub mod order_service;
pub mod shop_service;

pub use catalog_service::CatalogService;
pub use order_service::OrderService;
pub use shop_service::ShopService;
