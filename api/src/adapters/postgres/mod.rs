//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod line_item_repo;
pub mod order_repo;
pub mod product_repo;
pub mod schema;
pub mod shop_repo;


pub use line_item_repo::PostgresLineItemRepository;
pub use order_repo::PostgresOrderRepository;
pub use product_repo::PostgresProductRepository;
pub use schema::create_schema;
pub use shop_repo::PostgresShopRepository;

use sea_orm::DbErr;

use crate::error::DomainError;

/// Map a failed update to `NotFound` when no row matched the primary key
fn update_error(e: DbErr, what: String) -> DomainError {
    match e {
        DbErr::RecordNotUpdated => DomainError::NotFound(format!("{} not found", what)),
        e => e.into(),
    }
}
