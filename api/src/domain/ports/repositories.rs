//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//!
//! Lookups return `Ok(None)` for missing rows. Mutations of a missing row
//! return `DomainError::NotFound`.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::entities::{
    LineItem, LineItemId, NewLineItem, NewOrder, NewProduct, NewShop, Order, OrderId,
    OrderNumber, Product, ProductId, Shop, ShopId,
};
use crate::error::DomainError;

/// Repository for Shop entities
#[async_trait]
pub trait ShopRepository: Send + Sync {
    /// Find a shop by ID
    async fn find_by_id(&self, id: &ShopId) -> Result<Option<Shop>, DomainError>;

    /// Find a shop by its unique name
    async fn find_by_name(&self, name: &str) -> Result<Option<Shop>, DomainError>;

    /// All shops, newest first
    async fn list(&self) -> Result<Vec<Shop>, DomainError>;

    /// Create a new shop
    async fn create(&self, shop: &NewShop) -> Result<Shop, DomainError>;

    /// Change a shop's name
    async fn rename(&self, id: &ShopId, name: &str) -> Result<Shop, DomainError>;

    /// Delete a shop along with its products, orders and their line items
    async fn delete(&self, id: &ShopId) -> Result<(), DomainError>;
}

/// Repository for Product entities
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find a product by ID
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError>;

    /// Find a product by its globally unique name
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError>;

    /// Find a product by name within one shop
    async fn find_in_shop(
        &self,
        shop_id: &ShopId,
        name: &str,
    ) -> Result<Option<Product>, DomainError>;

    /// Products of a shop, newest first
    async fn find_by_shop(&self, shop_id: &ShopId) -> Result<Vec<Product>, DomainError>;

    /// Create a new product
    async fn create(&self, product: &NewProduct) -> Result<Product, DomainError>;

    /// Change a product's name
    async fn rename(&self, id: &ProductId, name: &str) -> Result<Product, DomainError>;

    /// Change a product's value
    async fn update_value(&self, id: &ProductId, value: Decimal) -> Result<Product, DomainError>;

    /// Reassign a product to another shop
    async fn move_to_shop(
        &self,
        id: &ProductId,
        shop_id: &ShopId,
    ) -> Result<Product, DomainError>;

    /// Delete a product along with the line items referencing it
    async fn delete(&self, id: &ProductId) -> Result<(), DomainError>;
}

/// Repository for LineItem entities
#[async_trait]
pub trait LineItemRepository: Send + Sync {
    /// Find a line item by ID
    async fn find_by_id(&self, id: &LineItemId) -> Result<Option<LineItem>, DomainError>;

    /// Line items linked to an order, oldest first
    async fn find_by_order(&self, order_id: &OrderId) -> Result<Vec<LineItem>, DomainError>;

    /// Change a line item's quantity
    async fn update_quantity(
        &self,
        id: &LineItemId,
        quantity: i32,
    ) -> Result<LineItem, DomainError>;

    /// Delete a line item and unlink it from every order
    async fn delete(&self, id: &LineItemId) -> Result<(), DomainError>;
}

/// Repository for Order entities
///
/// Orders are always returned with their line items loaded.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Find an order by ID
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError>;

    /// Find an order by number within one shop
    async fn find_by_number(
        &self,
        shop_id: &ShopId,
        number: &OrderNumber,
    ) -> Result<Option<Order>, DomainError>;

    /// Orders of a shop, newest first
    async fn find_by_shop(&self, shop_id: &ShopId) -> Result<Vec<Order>, DomainError>;

    /// Create a new, empty order
    async fn create(&self, order: &NewOrder) -> Result<Order, DomainError>;

    /// Reassign an order to another shop
    async fn move_to_shop(&self, id: &OrderId, shop_id: &ShopId) -> Result<Order, DomainError>;

    /// Create a line item and link it to the order in one transaction
    async fn create_item(
        &self,
        id: &OrderId,
        item: &NewLineItem,
    ) -> Result<LineItem, DomainError>;

    /// Link an existing line item to the order. Linking twice is a no-op.
    async fn link_item(&self, id: &OrderId, item_id: &LineItemId) -> Result<(), DomainError>;
}
