//! Shop service
//!
//! Creates, renames, lists, and deletes shops. Deleting a shop removes its
//! products, orders, and their line items.

use std::sync::Arc;

use crate::domain::entities::{NewShop, Shop, ShopId};
use crate::domain::ports::ShopRepository;
use crate::error::{AppError, DomainError};

/// Service for managing shops
pub struct ShopService<SR>
where
    SR: ShopRepository,
{
    shops: Arc<SR>,
}

impl<SR> ShopService<SR>
where
    SR: ShopRepository,
{
    pub fn new(shops: Arc<SR>) -> Self {
        Self { shops }
    }

    /// Create a shop with a unique name
    pub async fn create_shop(&self, name: &str) -> Result<Shop, AppError> {
        Shop::check_name(name)
            .inspect_err(|e| tracing::warn!(error = %e, "Shop rejected"))?;

        if self.shops.find_by_name(name).await?.is_some() {
            return Err(AppError::Domain(DomainError::AlreadyExists(format!(
                "Shop with name '{}' already exists",
                name
            ))));
        }

        let shop = self
            .shops
            .create(&NewShop {
                name: name.to_string(),
            })
            .await?;

        tracing::info!(shop_id = %shop.id, name = %shop.name, "Created shop");
        Ok(shop)
    }

    /// Find a shop by its exact name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Shop>, AppError> {
        Ok(self.shops.find_by_name(name).await?)
    }

    pub async fn get_shop(&self, id: &ShopId) -> Result<Option<Shop>, AppError> {
        Ok(self.shops.find_by_id(id).await?)
    }

    /// All shops, newest first
    pub async fn list_shops(&self) -> Result<Vec<Shop>, AppError> {
        Ok(self.shops.list().await?)
    }

    /// Rename a shop, leaving it untouched if the new name is invalid
    pub async fn rename_shop(&self, id: &ShopId, new_name: &str) -> Result<Shop, AppError> {
        Shop::check_name(new_name).inspect_err(
            |e| tracing::warn!(shop_id = %id, error = %e, "Shop rename rejected"),
        )?;

        if let Some(existing) = self.shops.find_by_name(new_name).await? {
            if existing.id == *id {
                return Ok(existing);
            }
            return Err(AppError::Domain(DomainError::AlreadyExists(format!(
                "Shop with name '{}' already exists",
                new_name
            ))));
        }

        let shop = self.shops.rename(id, new_name).await?;
        tracing::info!(shop_id = %id, name = %shop.name, "Renamed shop");
        Ok(shop)
    }

    /// Delete a shop and everything it owns
    pub async fn delete_shop(&self, id: &ShopId) -> Result<(), AppError> {
        self.shops.delete(id).await?;
        tracing::info!(shop_id = %id, "Deleted shop");
        Ok(())
    }
}
