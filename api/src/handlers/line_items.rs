//! Line item handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use super::money;
use crate::domain::entities::{LineItem, LineItemId, ShopId};
use crate::error::AppError;
use crate::AppState;

/// A line item with its computed total
#[derive(Debug, Serialize)]
pub struct LineItemResponse {
    pub id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub unit_value: String,
    pub quantity: i32,
    pub total: String,
    pub added_at: String,
}

impl From<LineItem> for LineItemResponse {
    fn from(item: LineItem) -> Self {
        Self {
            id: item.id.0,
            product_id: item.product_id.0,
            total: money(item.total()),
            product_name: item.product_name,
            unit_value: money(item.unit_value),
            quantity: item.quantity,
            added_at: item.added_at.to_rfc3339(),
        }
    }
}

/// GET /shops/:shop_id/line-items/:line_item_id
///
/// A line item is visible under the shop that sells its product.
pub async fn get_line_item(
    State(state): State<AppState>,
    Path((shop_id, line_item_id)): Path<(i32, i32)>,
) -> Result<Json<LineItemResponse>, AppError> {
    let not_found = || {
        AppError::NotFound(format!(
            "Line item {} not found in shop {}",
            line_item_id, shop_id
        ))
    };

    let item = state
        .order_service
        .get_line_item(&LineItemId(line_item_id))
        .await?
        .ok_or_else(not_found)?;

    let product = state
        .catalog_service
        .get_product(&item.product_id)
        .await?
        .ok_or_else(not_found)?;
    if product.shop_id != ShopId(shop_id) {
        return Err(not_found());
    }

    Ok(Json(item.into()))
}
