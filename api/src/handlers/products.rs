//! Product handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use super::money;
use super::shops::require_shop;
use crate::domain::entities::{Product, ProductId, ShopId};
use crate::error::AppError;
use crate::AppState;

/// A product as returned by the API
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i32,
    pub shop_id: i32,
    pub name: String,
    pub value: String,
    pub added_at: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.0,
            shop_id: product.shop_id.0,
            name: product.name,
            value: money(product.value),
            added_at: product.added_at.to_rfc3339(),
        }
    }
}

/// GET /shops/:shop_id/products
///
/// List a shop's products, newest first.
pub async fn list_products(
    State(state): State<AppState>,
    Path(shop_id): Path<i32>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let shop = require_shop(&state, shop_id).await?;
    let products = state.catalog_service.list_products(&shop.id).await?;

    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// GET /shops/:shop_id/products/:product_id
pub async fn get_product(
    State(state): State<AppState>,
    Path((shop_id, product_id)): Path<(i32, i32)>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state
        .catalog_service
        .get_product(&ProductId(product_id))
        .await?
        .filter(|p| p.shop_id == ShopId(shop_id))
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Product {} not found in shop {}",
                product_id, shop_id
            ))
        })?;

    Ok(Json(product.into()))
}
