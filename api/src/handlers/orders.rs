//! Order handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use super::line_items::LineItemResponse;
use super::money;
use super::shops::require_shop;
use crate::domain::entities::{Order, OrderId, ShopId};
use crate::error::AppError;
use crate::AppState;

/// An order in a listing
#[derive(Debug, Serialize)]
pub struct OrderSummary {
    pub id: i32,
    pub shop_id: i32,
    pub number: String,
    pub item_count: usize,
    pub total: String,
    pub added_at: String,
}

impl From<Order> for OrderSummary {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.0,
            shop_id: order.shop_id.0,
            total: money(order.total()),
            item_count: order.items.len(),
            number: order.number.to_string(),
            added_at: order.added_at.to_rfc3339(),
        }
    }
}

/// An order with its line items
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: i32,
    pub shop_id: i32,
    pub number: String,
    pub total: String,
    pub items: Vec<LineItemResponse>,
    pub added_at: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.0,
            shop_id: order.shop_id.0,
            total: money(order.total()),
            number: order.number.to_string(),
            added_at: order.added_at.to_rfc3339(),
            items: order.items.into_iter().map(LineItemResponse::from).collect(),
        }
    }
}

/// GET /shops/:shop_id/orders
///
/// List a shop's orders, newest first.
pub async fn list_orders(
    State(state): State<AppState>,
    Path(shop_id): Path<i32>,
) -> Result<Json<Vec<OrderSummary>>, AppError> {
    let shop = require_shop(&state, shop_id).await?;
    let orders = state.order_service.list_orders(&shop.id).await?;

    Ok(Json(orders.into_iter().map(OrderSummary::from).collect()))
}

/// GET /shops/:shop_id/orders/:order_id
pub async fn get_order(
    State(state): State<AppState>,
    Path((shop_id, order_id)): Path<(i32, i32)>,
) -> Result<Json<OrderResponse>, AppError> {
    let order = state
        .order_service
        .get_order(&OrderId(order_id))
        .await?
        .filter(|o| o.shop_id == ShopId(shop_id))
        .ok_or_else(|| {
            AppError::NotFound(format!("Order {} not found in shop {}", order_id, shop_id))
        })?;

    Ok(Json(order.into()))
}
