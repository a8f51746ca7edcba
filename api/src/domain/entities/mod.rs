//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod line_item;
pub mod name;
pub mod order;
pub mod order_number;
pub mod product;
pub mod shop;

pub use line_item::{LineItem, LineItemId, NewLineItem, QuantityAction, QuantityChange};
pub use order::{NewOrder, Order, OrderId};
pub use order_number::OrderNumber;
pub use product::{NewProduct, Product, ProductId};
pub use shop::{NewShop, Shop, ShopId};
