//! Catalog service
//!
//! Manages the products a shop sells: naming, pricing, and moving products
//! between shops. Product names are unique across all shops.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::entities::{NewProduct, Product, ProductId, ShopId};
use crate::domain::ports::{ProductRepository, ShopRepository};
use crate::error::{AppError, DomainError};

/// Service for managing products
pub struct CatalogService<PR, SR>
where
    PR: ProductRepository,
    SR: ShopRepository,
{
    products: Arc<PR>,
    shops: Arc<SR>,
}

impl<PR, SR> CatalogService<PR, SR>
where
    PR: ProductRepository,
    SR: ShopRepository,
{
    pub fn new(products: Arc<PR>, shops: Arc<SR>) -> Self {
        Self { products, shops }
    }

    /// Create an unpriced product (value 0.00)
    pub async fn create_product(&self, shop_id: &ShopId, name: &str) -> Result<Product, AppError> {
        self.create_product_with_value(shop_id, name, Decimal::ZERO)
            .await
    }

    /// Create a product with a starting value, rounded to cents
    pub async fn create_product_with_value(
        &self,
        shop_id: &ShopId,
        name: &str,
        value: Decimal,
    ) -> Result<Product, AppError> {
        let value = Product::check_name(name)
            .and_then(|_| Product::initial_value(value))
            .inspect_err(
                |e| tracing::warn!(shop_id = %shop_id, error = %e, "Product rejected"),
            )?;

        self.ensure_shop(shop_id).await?;
        self.ensure_name_free(name).await?;

        let product = self
            .products
            .create(&NewProduct {
                shop_id: *shop_id,
                name: name.to_string(),
                value,
            })
            .await?;

        tracing::info!(
            shop_id = %shop_id,
            product_id = %product.id,
            value = %product.value,
            "Created product"
        );
        Ok(product)
    }

    pub async fn get_product(&self, id: &ProductId) -> Result<Option<Product>, AppError> {
        Ok(self.products.find_by_id(id).await?)
    }

    /// Find a product by name within one shop
    pub async fn find_product(
        &self,
        shop_id: &ShopId,
        name: &str,
    ) -> Result<Option<Product>, AppError> {
        Ok(self.products.find_in_shop(shop_id, name).await?)
    }

    /// Products of a shop, newest first. An unknown shop has none.
    pub async fn list_products(&self, shop_id: &ShopId) -> Result<Vec<Product>, AppError> {
        Ok(self.products.find_by_shop(shop_id).await?)
    }

    /// Rename a product, leaving it untouched if the new name is invalid
    pub async fn rename_product(
        &self,
        id: &ProductId,
        new_name: &str,
    ) -> Result<Product, AppError> {
        Product::check_name(new_name).inspect_err(
            |e| tracing::warn!(product_id = %id, error = %e, "Product rename rejected"),
        )?;

        if let Some(existing) = self.products.find_by_name(new_name).await? {
            if existing.id == *id {
                return Ok(existing);
            }
            return Err(name_taken(new_name));
        }

        let product = self.products.rename(id, new_name).await?;
        tracing::info!(product_id = %id, name = %product.name, "Renamed product");
        Ok(product)
    }

    /// Reprice a product. The new value must be strictly positive.
    pub async fn change_value(
        &self,
        id: &ProductId,
        new_value: Decimal,
    ) -> Result<Product, AppError> {
        let value = Product::check_value(new_value).inspect_err(
            |e| tracing::warn!(product_id = %id, error = %e, "Product value change rejected"),
        )?;

        let product = self.products.update_value(id, value).await?;
        tracing::info!(product_id = %id, value = %product.value, "Changed product value");
        Ok(product)
    }

    /// Move an existing product into `shop_id`
    pub async fn add_product(
        &self,
        shop_id: &ShopId,
        product_id: &ProductId,
    ) -> Result<Product, AppError> {
        self.ensure_shop(shop_id).await?;

        let product = self.products.move_to_shop(product_id, shop_id).await?;
        tracing::debug!(shop_id = %shop_id, product_id = %product_id, "Moved product");
        Ok(product)
    }

    /// Delete a product along with every line item that references it
    pub async fn delete_product(&self, id: &ProductId) -> Result<(), AppError> {
        self.products.delete(id).await?;
        tracing::info!(product_id = %id, "Deleted product");
        Ok(())
    }

    async fn ensure_shop(&self, shop_id: &ShopId) -> Result<(), AppError> {
        match self.shops.find_by_id(shop_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!("Shop {} not found", shop_id))),
        }
    }

    async fn ensure_name_free(&self, name: &str) -> Result<(), AppError> {
        match self.products.find_by_name(name).await? {
            Some(_) => Err(name_taken(name)),
            None => Ok(()),
        }
    }
}

fn name_taken(name: &str) -> AppError {
    AppError::Domain(DomainError::AlreadyExists(format!(
        "Product with name '{}' already exists",
        name
    )))
}
