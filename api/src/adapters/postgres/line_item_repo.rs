//! PostgreSQL adapter for LineItemRepository

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    Set,
};

use super::update_error;
use crate::domain::entities::{LineItem, LineItemId, OrderId, ProductId};
use crate::domain::ports::LineItemRepository;
use crate::entity::{line_items, order_line_items, products};
use crate::error::DomainError;

/// PostgreSQL implementation of LineItemRepository
pub struct PostgresLineItemRepository {
    db: Arc<DatabaseConnection>,
}

impl PostgresLineItemRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LineItemRepository for PostgresLineItemRepository {
    async fn find_by_id(&self, id: &LineItemId) -> Result<Option<LineItem>, DomainError> {
        let result = line_items::Entity::find_by_id(id.0)
            .find_also_related(products::Entity)
            .one(&*self.db)
            .await?;

        result
            .map(|(item, product)| to_line_item(item, product))
            .transpose()
    }

    async fn find_by_order(&self, order_id: &OrderId) -> Result<Vec<LineItem>, DomainError> {
        let mut by_order = load_items(&*self.db, &[order_id.0]).await?;

        Ok(by_order.remove(&order_id.0).unwrap_or_default())
    }

    async fn update_quantity(
        &self,
        id: &LineItemId,
        quantity: i32,
    ) -> Result<LineItem, DomainError> {
        line_items::ActiveModel {
            id: Set(id.0),
            quantity: Set(quantity),
            ..Default::default()
        }
        .update(&*self.db)
        .await
        .map_err(|e| update_error(e, format!("Line item {}", id)))?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Line item {} not found", id)))
    }

    async fn delete(&self, id: &LineItemId) -> Result<(), DomainError> {
        let result = line_items::Entity::delete_by_id(id.0).exec(&*self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!("Line item {} not found", id)));
        }
        Ok(())
    }
}

/// Load the line items of several orders, keyed by order id.
///
/// Orders without line items have no entry. Items within an order are
/// sorted oldest first.
pub(super) async fn load_items<C: ConnectionTrait>(
    db: &C,
    order_ids: &[i32],
) -> Result<HashMap<i32, Vec<LineItem>>, DomainError> {
    let mut by_order: HashMap<i32, Vec<LineItem>> = HashMap::new();
    if order_ids.is_empty() {
        return Ok(by_order);
    }

    let links = order_line_items::Entity::find()
        .filter(order_line_items::Column::OrderId.is_in(order_ids.iter().copied()))
        .all(db)
        .await?;
    if links.is_empty() {
        return Ok(by_order);
    }

    let item_ids: BTreeSet<i32> = links.iter().map(|l| l.line_item_id).collect();
    let rows = line_items::Entity::find()
        .filter(line_items::Column::Id.is_in(item_ids))
        .find_also_related(products::Entity)
        .all(db)
        .await?;

    let mut items: HashMap<i32, LineItem> = HashMap::with_capacity(rows.len());
    for (item, product) in rows {
        let item = to_line_item(item, product)?;
        items.insert(item.id.0, item);
    }

    for link in links {
        if let Some(item) = items.get(&link.line_item_id) {
            by_order
                .entry(link.order_id)
                .or_default()
                .push(item.clone());
        }
    }
    for list in by_order.values_mut() {
        list.sort_by(|a, b| a.added_at.cmp(&b.added_at).then(a.id.cmp(&b.id)));
    }

    Ok(by_order)
}

/// Combine a line item row with its product row
pub(super) fn to_line_item(
    item: line_items::Model,
    product: Option<products::Model>,
) -> Result<LineItem, DomainError> {
    let product = product.ok_or_else(|| {
        DomainError::Internal(format!(
            "Line item {} references missing product {}",
            item.id, item.product_id
        ))
    })?;

    Ok(LineItem {
        id: LineItemId(item.id),
        product_id: ProductId(item.product_id),
        product_name: product.name,
        unit_value: product.value,
        quantity: item.quantity,
        added_at: item.added_at.with_timezone(&Utc),
    })
}
