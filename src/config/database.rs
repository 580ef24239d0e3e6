//! Database configuration module.
//!
//! Handles database connection and table creation using `SeaORM`. Schema is
//! generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the tables always match the Rust struct definitions without manual SQL.

use crate::entities::{Product, Sale, SaleLine, Season, User};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from the environment or returns the default
/// `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/bakehouse.sqlite".to_string())
}

/// Establishes a connection to the database named by `DATABASE_URL`,
/// falling back to a local `SQLite` file.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url()).await.map_err(Into::into)
}

/// Creates all database tables from the entity definitions.
///
/// Tables are created for users, seasons, products, sales, and sale lines.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let user_table = schema.create_table_from_entity(User);
    let season_table = schema.create_table_from_entity(Season);
    let product_table = schema.create_table_from_entity(Product);
    let sale_table = schema.create_table_from_entity(Sale);
    let sale_line_table = schema.create_table_from_entity(SaleLine);

    db.execute(builder.build(&user_table)).await?;
    db.execute(builder.build(&season_table)).await?;
    db.execute(builder.build(&product_table)).await?;
    db.execute(builder.build(&sale_table)).await?;
    db.execute(builder.build(&sale_line_table)).await?;

    Ok(())
}

/// Connects to the given database URL and ensures all tables exist.
pub async fn init_db(database_url: &str) -> Result<DatabaseConnection> {
    let db = Database::connect(database_url).await?;
    create_tables(&db).await?;
    Ok(db)
}
