//! Shared test utilities for `Bakehouse`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{checkout::CartLine, product, season, user},
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test season with the given name and active flag.
pub async fn create_test_season(
    db: &DatabaseConnection,
    name: &str,
    active: bool,
) -> Result<entities::season::Model> {
    season::create_season(db, name.to_string(), active).await
}

/// Creates a year-round test product with no image.
///
/// # Arguments
/// * `db` - Database connection
/// * `name` - Product name
/// * `price` - Unit price
/// * `stock` - Initial stock
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
    price: f64,
    stock: i32,
) -> Result<entities::product::Model> {
    product::create_product(
        db,
        name.to_string(),
        "Test product".to_string(),
        price,
        stock,
        None,
        None,
    )
    .await
}

/// Creates a test product with custom season and image.
pub async fn create_custom_product(
    db: &DatabaseConnection,
    name: &str,
    price: f64,
    stock: i32,
    season_id: Option<i64>,
    image: Option<Vec<u8>>,
) -> Result<entities::product::Model> {
    product::create_product(
        db,
        name.to_string(),
        "Test product".to_string(),
        price,
        stock,
        season_id,
        image,
    )
    .await
}

/// Registers a customer account with valid defaults.
pub async fn create_test_customer(db: &DatabaseConnection) -> Result<entities::user::Model> {
    user::register_user(
        db,
        "Test Customer".to_string(),
        "customer@example.com".to_string(),
        "Secreto!x".to_string(),
        user::Role::Customer,
    )
    .await
}

/// Registers an admin account with valid defaults.
pub async fn create_test_admin(db: &DatabaseConnection) -> Result<entities::user::Model> {
    user::register_user(
        db,
        "Test Admin".to_string(),
        "admin@example.com".to_string(),
        "Secreto!x".to_string(),
        user::Role::Admin,
    )
    .await
}

/// Builds a cart line literal for checkout tests.
#[must_use]
pub const fn cart_line(product_id: i64, quantity: i32, unit_price: f64) -> CartLine {
    CartLine {
        product_id,
        quantity,
        unit_price,
    }
}
