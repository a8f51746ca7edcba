//! PostgreSQL adapter for ProductRepository

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use super::update_error;
use crate::domain::entities::{NewProduct, Product, ProductId, ShopId};
use crate::domain::ports::ProductRepository;
use crate::entity::products;
use crate::error::DomainError;

/// PostgreSQL implementation of ProductRepository
pub struct PostgresProductRepository {
    db: Arc<DatabaseConnection>,
}

impl PostgresProductRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn update(
        &self,
        id: &ProductId,
        model: products::ActiveModel,
    ) -> Result<Product, DomainError> {
        let result = model
            .update(&*self.db)
            .await
            .map_err(|e| update_error(e, format!("Product {}", id)))?;

        Ok(result.into())
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        let result = products::Entity::find_by_id(id.0).one(&*self.db).await?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError> {
        let result = products::Entity::find()
            .filter(products::Column::Name.eq(name))
            .one(&*self.db)
            .await?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_in_shop(
        &self,
        shop_id: &ShopId,
        name: &str,
    ) -> Result<Option<Product>, DomainError> {
        let result = products::Entity::find()
            .filter(products::Column::ShopId.eq(shop_id.0))
            .filter(products::Column::Name.eq(name))
            .one(&*self.db)
            .await?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_shop(&self, shop_id: &ShopId) -> Result<Vec<Product>, DomainError> {
        let results = products::Entity::find()
            .filter(products::Column::ShopId.eq(shop_id.0))
            .order_by_desc(products::Column::AddedAt)
            .order_by_desc(products::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, product: &NewProduct) -> Result<Product, DomainError> {
        let model = products::ActiveModel {
            id: NotSet,
            shop_id: Set(product.shop_id.0),
            name: Set(product.name.clone()),
            value: Set(product.value),
            added_at: Set(Utc::now().fixed_offset()),
        };

        let result = model.insert(&*self.db).await?;

        Ok(result.into())
    }

    async fn rename(&self, id: &ProductId, name: &str) -> Result<Product, DomainError> {
        self.update(
            id,
            products::ActiveModel {
                id: Set(id.0),
                name: Set(name.to_string()),
                ..Default::default()
            },
        )
        .await
    }

    async fn update_value(&self, id: &ProductId, value: Decimal) -> Result<Product, DomainError> {
        self.update(
            id,
            products::ActiveModel {
                id: Set(id.0),
                value: Set(value),
                ..Default::default()
            },
        )
        .await
    }

    async fn move_to_shop(
        &self,
        id: &ProductId,
        shop_id: &ShopId,
    ) -> Result<Product, DomainError> {
        self.update(
            id,
            products::ActiveModel {
                id: Set(id.0),
                shop_id: Set(shop_id.0),
                ..Default::default()
            },
        )
        .await
    }

    async fn delete(&self, id: &ProductId) -> Result<(), DomainError> {
        let result = products::Entity::delete_by_id(id.0).exec(&*self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!("Product {} not found", id)));
        }
        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Product {
            id: ProductId(model.id),
            shop_id: ShopId(model.shop_id),
            name: model.name,
            value: model.value,
            added_at: model.added_at.with_timezone(&Utc),
        }
    }
}
