//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::sync::{Arc, Mutex, RwLock};

use crate::domain::entities::{
    LineItem, LineItemId, NewLineItem, NewOrder, NewProduct, NewShop, Order, OrderId,
    OrderNumber, Product, ProductId, Shop, ShopId,
};
use crate::domain::ports::{
    LineItemRepository, OrderNumberGenerator, OrderRepository, ProductRepository, ShopRepository,
};
use crate::error::DomainError;

// ============================================================================
// Shared in-memory tables
// ============================================================================

#[derive(Debug, Clone)]
struct LineItemRow {
    id: i32,
    product_id: i32,
    quantity: i32,
    added_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct OrderRow {
    id: i32,
    shop_id: i32,
    number: OrderNumber,
    added_at: DateTime<Utc>,
}

#[derive(Default)]
struct Tables {
    next_id: i32,
    shops: BTreeMap<i32, Shop>,
    products: BTreeMap<i32, Product>,
    line_items: BTreeMap<i32, LineItemRow>,
    orders: BTreeMap<i32, OrderRow>,
    /// (order_id, line_item_id)
    links: BTreeSet<(i32, i32)>,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn line_item(&self, row: &LineItemRow) -> Option<LineItem> {
        let product = self.products.get(&row.product_id)?;
        Some(LineItem {
            id: LineItemId(row.id),
            product_id: ProductId(row.product_id),
            product_name: product.name.clone(),
            unit_value: product.value,
            quantity: row.quantity,
            added_at: row.added_at,
        })
    }

    fn items_for(&self, order_id: i32) -> Vec<LineItem> {
        let mut items: Vec<LineItem> = self
            .links
            .iter()
            .filter(|(o, _)| *o == order_id)
            .filter_map(|(_, i)| self.line_items.get(i))
            .filter_map(|row| self.line_item(row))
            .collect();
        items.sort_by(|a, b| a.added_at.cmp(&b.added_at).then(a.id.cmp(&b.id)));
        items
    }

    fn order(&self, row: &OrderRow) -> Order {
        Order {
            id: OrderId(row.id),
            shop_id: ShopId(row.shop_id),
            number: row.number.clone(),
            added_at: row.added_at,
            items: self.items_for(row.id),
        }
    }

    fn delete_line_item(&mut self, id: i32) {
        self.line_items.remove(&id);
        self.links.retain(|(_, i)| *i != id);
    }

    fn delete_product(&mut self, id: i32) {
        self.products.remove(&id);
        let items: Vec<i32> = self
            .line_items
            .values()
            .filter(|r| r.product_id == id)
            .map(|r| r.id)
            .collect();
        for item in items {
            self.delete_line_item(item);
        }
    }

    fn delete_order(&mut self, id: i32) {
        self.orders.remove(&id);
        self.links.retain(|(o, _)| *o != id);
    }

    fn delete_shop(&mut self, id: i32) {
        self.shops.remove(&id);
        let products: Vec<i32> = self
            .products
            .values()
            .filter(|p| p.shop_id.0 == id)
            .map(|p| p.id.0)
            .collect();
        for product in products {
            self.delete_product(product);
        }
        let orders: Vec<i32> = self
            .orders
            .values()
            .filter(|o| o.shop_id == id)
            .map(|o| o.id)
            .collect();
        for order in orders {
            self.delete_order(order);
        }
    }

    fn name_taken(&self, name: &str) -> bool {
        self.products.values().any(|p| p.name == name)
    }
}

/// Newest first, ties broken by id
fn newest_first<T>(items: &mut [T], key: impl Fn(&T) -> (DateTime<Utc>, i32)) {
    items.sort_by(|a, b| key(b).cmp(&key(a)));
}

/// Backing store shared by the in-memory repositories
#[derive(Clone, Default)]
pub struct InMemoryDatabase {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of line items still stored, linked or not
    pub fn line_item_count(&self) -> usize {
        self.tables.read().unwrap().line_items.len()
    }

    /// Number of order/line item links
    pub fn link_count(&self) -> usize {
        self.tables.read().unwrap().links.len()
    }
}

// ============================================================================
// In-Memory Shop Repository
// ============================================================================

pub struct InMemoryShopRepository {
    db: InMemoryDatabase,
}

impl InMemoryShopRepository {
    pub fn new(db: InMemoryDatabase) -> Self {
        Self { db }
    }

    /// Pre-populate with a shop for testing
    pub fn with_shop(self, shop: Shop) -> Self {
        {
            let mut tables = self.db.tables.write().unwrap();
            tables.next_id = tables.next_id.max(shop.id.0);
            tables.shops.insert(shop.id.0, shop);
        }
        self
    }
}

#[async_trait]
impl ShopRepository for InMemoryShopRepository {
    async fn find_by_id(&self, id: &ShopId) -> Result<Option<Shop>, DomainError> {
        let tables = self.db.tables.read().unwrap();
        Ok(tables.shops.get(&id.0).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Shop>, DomainError> {
        let tables = self.db.tables.read().unwrap();
        Ok(tables.shops.values().find(|s| s.name == name).cloned())
    }

    async fn list(&self) -> Result<Vec<Shop>, DomainError> {
        let tables = self.db.tables.read().unwrap();
        let mut shops: Vec<Shop> = tables.shops.values().cloned().collect();
        newest_first(&mut shops, |s| (s.added_at, s.id.0));
        Ok(shops)
    }

    async fn create(&self, new_shop: &NewShop) -> Result<Shop, DomainError> {
        let mut tables = self.db.tables.write().unwrap();
        if tables.shops.values().any(|s| s.name == new_shop.name) {
            return Err(DomainError::AlreadyExists(format!(
                "Shop '{}'",
                new_shop.name
            )));
        }

        let shop = Shop {
            id: ShopId(tables.next_id()),
            name: new_shop.name.clone(),
            added_at: Utc::now(),
        };
        tables.shops.insert(shop.id.0, shop.clone());
        Ok(shop)
    }

    async fn rename(&self, id: &ShopId, name: &str) -> Result<Shop, DomainError> {
        let mut tables = self.db.tables.write().unwrap();
        if let Some(shop) = tables.shops.get_mut(&id.0) {
            shop.name = name.to_string();
            Ok(shop.clone())
        } else {
            Err(DomainError::NotFound(format!("Shop {} not found", id)))
        }
    }

    async fn delete(&self, id: &ShopId) -> Result<(), DomainError> {
        let mut tables = self.db.tables.write().unwrap();
        if !tables.shops.contains_key(&id.0) {
            return Err(DomainError::NotFound(format!("Shop {} not found", id)));
        }
        tables.delete_shop(id.0);
        Ok(())
    }
}

// ============================================================================
// In-Memory Product Repository
// ============================================================================

pub struct InMemoryProductRepository {
    db: InMemoryDatabase,
}

impl InMemoryProductRepository {
    pub fn new(db: InMemoryDatabase) -> Self {
        Self { db }
    }

    fn update(
        &self,
        id: &ProductId,
        apply: impl FnOnce(&mut Product),
    ) -> Result<Product, DomainError> {
        let mut tables = self.db.tables.write().unwrap();
        if let Some(product) = tables.products.get_mut(&id.0) {
            apply(product);
            Ok(product.clone())
        } else {
            Err(DomainError::NotFound(format!("Product {} not found", id)))
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        let tables = self.db.tables.read().unwrap();
        Ok(tables.products.get(&id.0).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError> {
        let tables = self.db.tables.read().unwrap();
        Ok(tables.products.values().find(|p| p.name == name).cloned())
    }

    async fn find_in_shop(
        &self,
        shop_id: &ShopId,
        name: &str,
    ) -> Result<Option<Product>, DomainError> {
        let tables = self.db.tables.read().unwrap();
        Ok(tables
            .products
            .values()
            .find(|p| p.shop_id == *shop_id && p.name == name)
            .cloned())
    }

    async fn find_by_shop(&self, shop_id: &ShopId) -> Result<Vec<Product>, DomainError> {
        let tables = self.db.tables.read().unwrap();
        let mut products: Vec<Product> = tables
            .products
            .values()
            .filter(|p| p.shop_id == *shop_id)
            .cloned()
            .collect();
        newest_first(&mut products, |p| (p.added_at, p.id.0));
        Ok(products)
    }

    async fn create(&self, new_product: &NewProduct) -> Result<Product, DomainError> {
        let mut tables = self.db.tables.write().unwrap();
        if !tables.shops.contains_key(&new_product.shop_id.0) {
            return Err(DomainError::NotFound(format!(
                "Shop {} not found",
                new_product.shop_id
            )));
        }
        if tables.name_taken(&new_product.name) {
            return Err(DomainError::AlreadyExists(format!(
                "Product '{}'",
                new_product.name
            )));
        }

        let product = Product {
            id: ProductId(tables.next_id()),
            shop_id: new_product.shop_id,
            name: new_product.name.clone(),
            value: new_product.value,
            added_at: Utc::now(),
        };
        tables.products.insert(product.id.0, product.clone());
        Ok(product)
    }

    async fn rename(&self, id: &ProductId, name: &str) -> Result<Product, DomainError> {
        let name = name.to_string();
        self.update(id, |p| p.name = name)
    }

    async fn update_value(&self, id: &ProductId, value: Decimal) -> Result<Product, DomainError> {
        self.update(id, |p| p.value = value)
    }

    async fn move_to_shop(
        &self,
        id: &ProductId,
        shop_id: &ShopId,
    ) -> Result<Product, DomainError> {
        let shop_id = *shop_id;
        self.update(id, |p| p.shop_id = shop_id)
    }

    async fn delete(&self, id: &ProductId) -> Result<(), DomainError> {
        let mut tables = self.db.tables.write().unwrap();
        if !tables.products.contains_key(&id.0) {
            return Err(DomainError::NotFound(format!("Product {} not found", id)));
        }
        tables.delete_product(id.0);
        Ok(())
    }
}

// ============================================================================
// In-Memory Line Item Repository
// ============================================================================

pub struct InMemoryLineItemRepository {
    db: InMemoryDatabase,
}

impl InMemoryLineItemRepository {
    pub fn new(db: InMemoryDatabase) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LineItemRepository for InMemoryLineItemRepository {
    async fn find_by_id(&self, id: &LineItemId) -> Result<Option<LineItem>, DomainError> {
        let tables = self.db.tables.read().unwrap();
        Ok(tables
            .line_items
            .get(&id.0)
            .and_then(|row| tables.line_item(row)))
    }

    async fn find_by_order(&self, order_id: &OrderId) -> Result<Vec<LineItem>, DomainError> {
        let tables = self.db.tables.read().unwrap();
        Ok(tables.items_for(order_id.0))
    }

    async fn update_quantity(
        &self,
        id: &LineItemId,
        quantity: i32,
    ) -> Result<LineItem, DomainError> {
        let mut tables = self.db.tables.write().unwrap();
        let row = match tables.line_items.get_mut(&id.0) {
            Some(row) => {
                row.quantity = quantity;
                row.clone()
            }
            None => return Err(DomainError::NotFound(format!("Line item {} not found", id))),
        };
        tables
            .line_item(&row)
            .ok_or_else(|| DomainError::Internal(format!("Line item {} has no product", id)))
    }

    async fn delete(&self, id: &LineItemId) -> Result<(), DomainError> {
        let mut tables = self.db.tables.write().unwrap();
        if !tables.line_items.contains_key(&id.0) {
            return Err(DomainError::NotFound(format!("Line item {} not found", id)));
        }
        tables.delete_line_item(id.0);
        Ok(())
    }
}

// ============================================================================
// In-Memory Order Repository
// ============================================================================

pub struct InMemoryOrderRepository {
    db: InMemoryDatabase,
}

impl InMemoryOrderRepository {
    pub fn new(db: InMemoryDatabase) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        let tables = self.db.tables.read().unwrap();
        Ok(tables.orders.get(&id.0).map(|row| tables.order(row)))
    }

    async fn find_by_number(
        &self,
        shop_id: &ShopId,
        number: &OrderNumber,
    ) -> Result<Option<Order>, DomainError> {
        let tables = self.db.tables.read().unwrap();
        Ok(tables
            .orders
            .values()
            .find(|row| row.shop_id == shop_id.0 && row.number == *number)
            .map(|row| tables.order(row)))
    }

    async fn find_by_shop(&self, shop_id: &ShopId) -> Result<Vec<Order>, DomainError> {
        let tables = self.db.tables.read().unwrap();
        let mut orders: Vec<Order> = tables
            .orders
            .values()
            .filter(|row| row.shop_id == shop_id.0)
            .map(|row| tables.order(row))
            .collect();
        newest_first(&mut orders, |o| (o.added_at, o.id.0));
        Ok(orders)
    }

    async fn create(&self, new_order: &NewOrder) -> Result<Order, DomainError> {
        let mut tables = self.db.tables.write().unwrap();
        if !tables.shops.contains_key(&new_order.shop_id.0) {
            return Err(DomainError::NotFound(format!(
                "Shop {} not found",
                new_order.shop_id
            )));
        }

        let row = OrderRow {
            id: tables.next_id(),
            shop_id: new_order.shop_id.0,
            number: new_order.number.clone(),
            added_at: Utc::now(),
        };
        tables.orders.insert(row.id, row.clone());
        Ok(tables.order(&row))
    }

    async fn move_to_shop(&self, id: &OrderId, shop_id: &ShopId) -> Result<Order, DomainError> {
        let mut tables = self.db.tables.write().unwrap();
        if !tables.shops.contains_key(&shop_id.0) {
            return Err(DomainError::NotFound(format!("Shop {} not found", shop_id)));
        }
        let row = match tables.orders.get_mut(&id.0) {
            Some(row) => {
                row.shop_id = shop_id.0;
                row.clone()
            }
            None => return Err(DomainError::NotFound(format!("Order {} not found", id))),
        };
        Ok(tables.order(&row))
    }

    async fn create_item(
        &self,
        id: &OrderId,
        item: &NewLineItem,
    ) -> Result<LineItem, DomainError> {
        let mut tables = self.db.tables.write().unwrap();
        if !tables.orders.contains_key(&id.0) {
            return Err(DomainError::NotFound(format!("Order {} not found", id)));
        }
        if !tables.products.contains_key(&item.product_id.0) {
            return Err(DomainError::NotFound(format!(
                "Product {} not found",
                item.product_id
            )));
        }

        let row = LineItemRow {
            id: tables.next_id(),
            product_id: item.product_id.0,
            quantity: item.quantity,
            added_at: Utc::now(),
        };
        tables.line_items.insert(row.id, row.clone());
        tables.links.insert((id.0, row.id));
        tables
            .line_item(&row)
            .ok_or_else(|| DomainError::Internal("product vanished".to_string()))
    }

    async fn link_item(&self, id: &OrderId, item_id: &LineItemId) -> Result<(), DomainError> {
        let mut tables = self.db.tables.write().unwrap();
        if !tables.orders.contains_key(&id.0) {
            return Err(DomainError::NotFound(format!("Order {} not found", id)));
        }
        if !tables.line_items.contains_key(&item_id.0) {
            return Err(DomainError::NotFound(format!(
                "Line item {} not found",
                item_id
            )));
        }
        tables.links.insert((id.0, item_id.0));
        Ok(())
    }
}

// ============================================================================
// Deterministic Order Number Generator
// ============================================================================

/// Hands out a fixed sequence of order numbers, then repeats the last one
pub struct SequenceOrderNumberGenerator {
    numbers: Mutex<VecDeque<OrderNumber>>,
    last: Mutex<OrderNumber>,
}

impl SequenceOrderNumberGenerator {
    pub fn new(numbers: impl IntoIterator<Item = OrderNumber>) -> Self {
        let numbers: VecDeque<OrderNumber> = numbers.into_iter().collect();
        let last = numbers
            .back()
            .cloned()
            .unwrap_or_else(|| OrderNumber::from_parts(0, 0));
        Self {
            numbers: Mutex::new(numbers),
            last: Mutex::new(last),
        }
    }

    /// Numbers built from consecutive millisecond timestamps
    pub fn counting_from(millis: i64, count: usize) -> Self {
        Self::new((0..count as i64).map(|i| OrderNumber::from_parts(millis + i, 0)))
    }
}

impl OrderNumberGenerator for SequenceOrderNumberGenerator {
    fn next_number(&self) -> OrderNumber {
        match self.numbers.lock().unwrap().pop_front() {
            Some(number) => number,
            None => self.last.lock().unwrap().clone(),
        }
    }
}
