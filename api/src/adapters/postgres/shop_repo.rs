//! PostgreSQL adapter for ShopRepository

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use super::update_error;
use crate::domain::entities::{NewShop, Shop, ShopId};
use crate::domain::ports::ShopRepository;
use crate::entity::shops;
use crate::error::DomainError;

/// PostgreSQL implementation of ShopRepository
pub struct PostgresShopRepository {
    db: Arc<DatabaseConnection>,
}

impl PostgresShopRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ShopRepository for PostgresShopRepository {
    async fn find_by_id(&self, id: &ShopId) -> Result<Option<Shop>, DomainError> {
        let result = shops::Entity::find_by_id(id.0).one(&*self.db).await?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Shop>, DomainError> {
        let result = shops::Entity::find()
            .filter(shops::Column::Name.eq(name))
            .one(&*self.db)
            .await?;

        Ok(result.map(|m| m.into()))
    }

    async fn list(&self) -> Result<Vec<Shop>, DomainError> {
        let results = shops::Entity::find()
            .order_by_desc(shops::Column::AddedAt)
            .order_by_desc(shops::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, shop: &NewShop) -> Result<Shop, DomainError> {
        let model = shops::ActiveModel {
            id: NotSet,
            name: Set(shop.name.clone()),
            added_at: Set(Utc::now().fixed_offset()),
        };

        let result = model.insert(&*self.db).await?;

        Ok(result.into())
    }

    async fn rename(&self, id: &ShopId, name: &str) -> Result<Shop, DomainError> {
        let result = shops::ActiveModel {
            id: Set(id.0),
            name: Set(name.to_string()),
            ..Default::default()
        }
        .update(&*self.db)
        .await
        .map_err(|e| update_error(e, format!("Shop {}", id)))?;

        Ok(result.into())
    }

    async fn delete(&self, id: &ShopId) -> Result<(), DomainError> {
        let result = shops::Entity::delete_by_id(id.0).exec(&*self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!("Shop {} not found", id)));
        }
        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<shops::Model> for Shop {
    fn from(model: shops::Model) -> Self {
        Shop {
            id: ShopId(model.id),
            name: model.name,
            added_at: model.added_at.with_timezone(&Utc),
        }
    }
}
