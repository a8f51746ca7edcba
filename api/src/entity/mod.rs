//! SeaORM entities
//!
//! Table definitions, relations and cascade rules for the shop schema.
//! Every foreign key cascades on delete: removing a shop removes its products
//! and orders, removing a product removes its line items, and removing an
//! order or line item removes the rows linking them.

pub mod line_items;
pub mod order_line_items;
pub mod orders;
pub mod products;
pub mod shops;
