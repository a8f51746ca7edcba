//! Shop handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::domain::entities::{Shop, ShopId};
use crate::error::AppError;
use crate::AppState;

/// A shop as returned by the API
#[derive(Debug, Serialize)]
pub struct ShopResponse {
    pub id: i32,
    pub name: String,
    pub added_at: String,
}

impl From<Shop> for ShopResponse {
    fn from(shop: Shop) -> Self {
        Self {
            id: shop.id.0,
            name: shop.name,
            added_at: shop.added_at.to_rfc3339(),
        }
    }
}

/// GET /shops
///
/// List all shops, newest first.
pub async fn list_shops(
    State(state): State<AppState>,
) -> Result<Json<Vec<ShopResponse>>, AppError> {
    let shops = state.shop_service.list_shops().await?;

    Ok(Json(shops.into_iter().map(ShopResponse::from).collect()))
}

/// GET /shops/:shop_id
pub async fn get_shop(
    State(state): State<AppState>,
    Path(shop_id): Path<i32>,
) -> Result<Json<ShopResponse>, AppError> {
    let shop = require_shop(&state, shop_id).await?;

    Ok(Json(shop.into()))
}

/// Fetch the shop named in the path or answer 404
pub(crate) async fn require_shop(state: &AppState, shop_id: i32) -> Result<Shop, AppError> {
    state
        .shop_service
        .get_shop(&ShopId(shop_id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Shop {} not found", shop_id)))
}
