//! Order service
//!
//! Places orders, fills them with line items, and adjusts quantities.
//!
//! Line items are shared: one item can be linked into several orders, and
//! changing its quantity is visible through each of them. Setting the
//! quantity to zero deletes the item and unlinks it everywhere.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::entities::{
    LineItem, LineItemId, NewLineItem, NewOrder, Order, OrderId, OrderNumber, QuantityAction,
    QuantityChange, ShopId,
};
use crate::domain::ports::{
    LineItemRepository, OrderNumberGenerator, OrderRepository, ProductRepository,
};
use crate::error::AppError;

/// Service for managing orders and their line items
pub struct OrderService<OR, LR, PR, G>
where
    OR: OrderRepository,
    LR: LineItemRepository,
    PR: ProductRepository,
    G: OrderNumberGenerator,
{
    orders: Arc<OR>,
    line_items: Arc<LR>,
    products: Arc<PR>,
    numbers: Arc<G>,
}

impl<OR, LR, PR, G> OrderService<OR, LR, PR, G>
where
    OR: OrderRepository,
    LR: LineItemRepository,
    PR: ProductRepository,
    G: OrderNumberGenerator,
{
    pub fn new(orders: Arc<OR>, line_items: Arc<LR>, products: Arc<PR>, numbers: Arc<G>) -> Self {
        Self {
            orders,
            line_items,
            products,
            numbers,
        }
    }

    /// Open an empty order in a shop with a freshly generated number
    pub async fn create_order(&self, shop_id: &ShopId) -> Result<Order, AppError> {
        let number = self.numbers.next_number();

        let order = self
            .orders
            .create(&NewOrder {
                shop_id: *shop_id,
                number,
            })
            .await?;

        tracing::info!(
            shop_id = %shop_id,
            order_id = %order.id,
            number = %order.number,
            "Created order"
        );
        Ok(order)
    }

    pub async fn get_order(&self, id: &OrderId) -> Result<Option<Order>, AppError> {
        Ok(self.orders.find_by_id(id).await?)
    }

    /// Find an order by number within one shop
    pub async fn find_order(
        &self,
        shop_id: &ShopId,
        number: &OrderNumber,
    ) -> Result<Option<Order>, AppError> {
        Ok(self.orders.find_by_number(shop_id, number).await?)
    }

    /// Orders of a shop, newest first. An unknown shop has none.
    pub async fn list_orders(&self, shop_id: &ShopId) -> Result<Vec<Order>, AppError> {
        Ok(self.orders.find_by_shop(shop_id).await?)
    }

    /// Move an existing order into `shop_id`
    pub async fn add_order(&self, shop_id: &ShopId, order_id: &OrderId) -> Result<Order, AppError> {
        let order = self.orders.move_to_shop(order_id, shop_id).await?;
        tracing::debug!(shop_id = %shop_id, order_id = %order_id, "Moved order");
        Ok(order)
    }

    /// Add a new line item for the product called `product_name`
    pub async fn create_item(
        &self,
        order_id: &OrderId,
        product_name: &str,
        quantity: i32,
    ) -> Result<LineItem, AppError> {
        LineItem::check_quantity(quantity).inspect_err(
            |e| tracing::warn!(order_id = %order_id, error = %e, "Line item rejected"),
        )?;

        let product = self
            .products
            .find_by_name(product_name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Product '{}' not found", product_name)))?;

        let item = self
            .orders
            .create_item(
                order_id,
                &NewLineItem {
                    product_id: product.id,
                    quantity,
                },
            )
            .await?;

        tracing::info!(
            order_id = %order_id,
            line_item_id = %item.id,
            product_id = %product.id,
            quantity,
            "Created line item"
        );
        Ok(item)
    }

    /// Link an existing line item into another order. Linking twice is a no-op.
    pub async fn add_item(
        &self,
        order_id: &OrderId,
        line_item_id: &LineItemId,
    ) -> Result<(), AppError> {
        let order = self
            .orders
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", order_id)))?;
        let item = self
            .line_items
            .find_by_id(line_item_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Line item {} not found", line_item_id)))?;

        if order.contains(&item) {
            tracing::debug!(order_id = %order_id, line_item_id = %line_item_id, "Already linked");
            return Ok(());
        }

        self.orders.link_item(order_id, line_item_id).await?;
        tracing::debug!(order_id = %order_id, line_item_id = %line_item_id, "Linked line item");
        Ok(())
    }

    pub async fn get_line_item(&self, id: &LineItemId) -> Result<Option<LineItem>, AppError> {
        Ok(self.line_items.find_by_id(id).await?)
    }

    /// Line items of an order, oldest first
    pub async fn list_items(&self, order_id: &OrderId) -> Result<Vec<LineItem>, AppError> {
        if self.orders.find_by_id(order_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Order {} not found", order_id)));
        }
        Ok(self.line_items.find_by_order(order_id).await?)
    }

    /// Set a line item's quantity. Zero deletes the item; negative is rejected.
    pub async fn change_quantity(
        &self,
        id: &LineItemId,
        quantity: i32,
    ) -> Result<QuantityChange, AppError> {
        let action = QuantityAction::from_requested(quantity).inspect_err(
            |e| tracing::warn!(line_item_id = %id, error = %e, "Quantity change rejected"),
        )?;

        match action {
            QuantityAction::Set(quantity) => {
                let item = self.line_items.update_quantity(id, quantity).await?;
                tracing::info!(line_item_id = %id, quantity, "Changed quantity");
                Ok(QuantityChange::Updated(item))
            }
            QuantityAction::Remove => {
                self.line_items.delete(id).await?;
                tracing::info!(line_item_id = %id, "Removed line item");
                Ok(QuantityChange::Removed(*id))
            }
        }
    }

    /// Sum of quantity times current product value over the order's items
    pub async fn order_total(&self, order_id: &OrderId) -> Result<Decimal, AppError> {
        let order = self
            .orders
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", order_id)))?;
        Ok(order.total())
    }
}
