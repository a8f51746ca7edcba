//! Test fixtures
//!
//! Factory functions for creating test entities with sensible defaults.

use chrono::Utc;
use rust_decimal::Decimal;

use crate::domain::entities::{
    LineItem, LineItemId, Order, OrderId, OrderNumber, Product, ProductId, Shop, ShopId,
};

/// Money from a whole number of cents
pub fn cents(amount: i64) -> Decimal {
    Decimal::new(amount, 2)
}

/// Create a test shop with default values
pub fn test_shop() -> Shop {
    test_shop_with_name(1, "Corner Shop")
}

/// Create a test shop with a specific id and name
pub fn test_shop_with_name(id: i32, name: &str) -> Shop {
    Shop {
        id: ShopId(id),
        name: name.to_string(),
        added_at: Utc::now(),
    }
}

/// Create a test product belonging to `shop_id`
pub fn test_product(id: i32, shop_id: i32, name: &str, value: Decimal) -> Product {
    Product {
        id: ProductId(id),
        shop_id: ShopId(shop_id),
        name: name.to_string(),
        value,
        added_at: Utc::now(),
    }
}

/// Create a test line item for `product`
pub fn test_line_item(id: i32, product: &Product, quantity: i32) -> LineItem {
    LineItem {
        id: LineItemId(id),
        product_id: product.id,
        product_name: product.name.clone(),
        unit_value: product.value,
        quantity,
        added_at: Utc::now(),
    }
}

/// Create a test order holding `items`
pub fn test_order(id: i32, shop_id: i32, items: Vec<LineItem>) -> Order {
    Order {
        id: OrderId(id),
        shop_id: ShopId(shop_id),
        number: test_order_number(),
        added_at: Utc::now(),
        items,
    }
}

/// A fixed, well-formed order number
pub fn test_order_number() -> OrderNumber {
    OrderNumber::from_parts(1_537_676_673_443, 8)
}
