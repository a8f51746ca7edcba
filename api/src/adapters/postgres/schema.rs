//! Table bootstrap for local development
//!
//! Creates any missing tables straight from the SeaORM entity definitions,
//! including foreign keys and their cascade rules. Existing tables are left
//! untouched, so this is not a migration mechanism.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Schema};

use crate::entity::{line_items, order_line_items, orders, products, shops};

/// Create the shop tables in dependency order
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let statements = [
        schema.create_table_from_entity(shops::Entity),
        schema.create_table_from_entity(products::Entity),
        schema.create_table_from_entity(orders::Entity),
        schema.create_table_from_entity(line_items::Entity),
        schema.create_table_from_entity(order_line_items::Entity),
    ];

    for mut statement in statements {
        statement.if_not_exists();
        db.execute(backend.build(&statement)).await?;
    }

    tracing::info!("Schema ready");
    Ok(())
}
