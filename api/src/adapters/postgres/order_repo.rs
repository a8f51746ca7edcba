//! PostgreSQL adapter for OrderRepository

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use super::line_item_repo::{load_items, to_line_item};
use super::update_error;
use crate::domain::entities::{
    LineItem, LineItemId, NewLineItem, NewOrder, Order, OrderId, OrderNumber, ShopId,
};
use crate::domain::ports::OrderRepository;
use crate::entity::{line_items, order_line_items, orders, products};
use crate::error::DomainError;

/// PostgreSQL implementation of OrderRepository
pub struct PostgresOrderRepository {
    db: Arc<DatabaseConnection>,
}

impl PostgresOrderRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Attach line items to a batch of order rows, preserving row order
    async fn with_items(&self, models: Vec<orders::Model>) -> Result<Vec<Order>, DomainError> {
        let ids: Vec<i32> = models.iter().map(|m| m.id).collect();
        let mut items = load_items(&*self.db, &ids).await?;

        models
            .into_iter()
            .map(|m| {
                let order_items = items.remove(&m.id).unwrap_or_default();
                to_order(m, order_items)
            })
            .collect()
    }

    async fn find_one(&self, model: Option<orders::Model>) -> Result<Option<Order>, DomainError> {
        match model {
            Some(model) => Ok(self.with_items(vec![model]).await?.pop()),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        let result = orders::Entity::find_by_id(id.0).one(&*self.db).await?;

        self.find_one(result).await
    }

    async fn find_by_number(
        &self,
        shop_id: &ShopId,
        number: &OrderNumber,
    ) -> Result<Option<Order>, DomainError> {
        let result = orders::Entity::find()
            .filter(orders::Column::ShopId.eq(shop_id.0))
            .filter(orders::Column::OrderNum.eq(number.as_str()))
            .one(&*self.db)
            .await?;

        self.find_one(result).await
    }

    async fn find_by_shop(&self, shop_id: &ShopId) -> Result<Vec<Order>, DomainError> {
        let results = orders::Entity::find()
            .filter(orders::Column::ShopId.eq(shop_id.0))
            .order_by_desc(orders::Column::AddedAt)
            .order_by_desc(orders::Column::Id)
            .all(&*self.db)
            .await?;

        self.with_items(results).await
    }

    async fn create(&self, order: &NewOrder) -> Result<Order, DomainError> {
        let model = orders::ActiveModel {
            id: NotSet,
            shop_id: Set(order.shop_id.0),
            order_num: Set(order.number.as_str().to_string()),
            added_at: Set(Utc::now().fixed_offset()),
        };

        let result = model.insert(&*self.db).await?;

        to_order(result, Vec::new())
    }

    async fn move_to_shop(&self, id: &OrderId, shop_id: &ShopId) -> Result<Order, DomainError> {
        let result = orders::ActiveModel {
            id: Set(id.0),
            shop_id: Set(shop_id.0),
            ..Default::default()
        }
        .update(&*self.db)
        .await
        .map_err(|e| update_error(e, format!("Order {}", id)))?;

        self.with_items(vec![result])
            .await?
            .pop()
            .ok_or_else(|| DomainError::NotFound(format!("Order {} not found", id)))
    }

    async fn create_item(
        &self,
        id: &OrderId,
        item: &NewLineItem,
    ) -> Result<LineItem, DomainError> {
        let txn = self.db.begin().await?;

        if orders::Entity::find_by_id(id.0).one(&txn).await?.is_none() {
            return Err(DomainError::NotFound(format!("Order {} not found", id)));
        }
        let product = products::Entity::find_by_id(item.product_id.0)
            .one(&txn)
            .await?
            .ok_or_else(|| {
                DomainError::NotFound(format!("Product {} not found", item.product_id))
            })?;

        let created = line_items::ActiveModel {
            id: NotSet,
            product_id: Set(item.product_id.0),
            quantity: Set(item.quantity),
            added_at: Set(Utc::now().fixed_offset()),
        }
        .insert(&txn)
        .await?;

        order_line_items::ActiveModel {
            order_id: Set(id.0),
            line_item_id: Set(created.id),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        to_line_item(created, Some(product))
    }

    async fn link_item(&self, id: &OrderId, item_id: &LineItemId) -> Result<(), DomainError> {
        let existing = order_line_items::Entity::find_by_id((id.0, item_id.0))
            .one(&*self.db)
            .await?;
        if existing.is_some() {
            return Ok(());
        }

        order_line_items::ActiveModel {
            order_id: Set(id.0),
            line_item_id: Set(item_id.0),
        }
        .insert(&*self.db)
        .await?;

        Ok(())
    }
}

/// Convert SeaORM model plus loaded items to domain entity
fn to_order(model: orders::Model, items: Vec<LineItem>) -> Result<Order, DomainError> {
    let number: OrderNumber = model.order_num.parse().map_err(|_| {
        DomainError::Internal(format!(
            "Order {} has a malformed number: {}",
            model.id, model.order_num
        ))
    })?;

    Ok(Order {
        id: OrderId(model.id),
        shop_id: ShopId(model.shop_id),
        number,
        added_at: model.added_at.with_timezone(&Utc),
        items,
    })
}
