//! Product business logic - Inventory CRUD and catalog queries.
//!
//! This module provides the admin-facing inventory operations (create,
//! update, delete) and the customer-facing catalog queries (all products
//! with their season, active-season products, year-round products). Stock
//! mutation during purchase lives in [`crate::core::checkout`]; admin
//! updates here go through the same store so both writers observe the same
//! committed stock values.

use crate::{
    entities::{Product, Season, product, season},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Validates the fields shared by create and update.
fn validate_product_fields(name: &str, price: f64, stock: i32) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Product name cannot be empty".to_string(),
        });
    }

    if !price.is_finite() || price <= 0.0 {
        return Err(Error::InvalidAmount { amount: price });
    }

    if stock < 0 {
        return Err(Error::Validation {
            message: format!("Stock cannot be negative: {stock}"),
        });
    }

    Ok(())
}

/// Confirms a referenced season exists, so a bad id surfaces as a
/// business-rule failure instead of a foreign-key error from the store.
async fn validate_season_exists(db: &DatabaseConnection, season_id: Option<i64>) -> Result<()> {
    if let Some(season_id) = season_id {
        Season::find_by_id(season_id)
            .one(db)
            .await?
            .ok_or(Error::SeasonNotFound { season_id })?;
    }
    Ok(())
}

/// Creates a new product with the specified parameters, performing input validation.
///
/// The name is trimmed, the price must be positive and finite, and the
/// initial stock must be non-negative. `season_id` of None means the product
/// is offered year-round.
pub async fn create_product(
    db: &DatabaseConnection,
    name: String,
    description: String,
    price: f64,
    stock: i32,
    season_id: Option<i64>,
    image: Option<Vec<u8>>,
) -> Result<product::Model> {
    validate_product_fields(&name, price, stock)?;
    validate_season_exists(db, season_id).await?;

    let now = chrono::Utc::now().naive_utc();

    let product = product::ActiveModel {
        name: Set(name.trim().to_string()),
        description: Set(description.trim().to_string()),
        price: Set(price),
        stock: Set(stock),
        season_id: Set(season_id),
        image: Set(image),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    product.insert(db).await.map_err(Into::into)
}

/// Retrieves every product together with its season (None for year-round),
/// ordered alphabetically by name.
///
/// This backs the admin inventory listing, where the season name is shown
/// alongside each product.
pub async fn get_all_products(
    db: &DatabaseConnection,
) -> Result<Vec<(product::Model, Option<season::Model>)>> {
    Product::find()
        .find_also_related(Season)
        .order_by_asc(product::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific product by its unique ID.
pub async fn get_product_by_id(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Option<product::Model>> {
    Product::find_by_id(product_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Updates an existing product's fields, performing the same validation as
/// creation and refreshing the updated timestamp.
///
/// When `image` is None the stored image is kept; pass Some to replace it.
/// This mirrors the admin form, where the image upload is optional.
pub async fn update_product(
    db: &DatabaseConnection,
    product_id: i64,
    name: String,
    description: String,
    price: f64,
    stock: i32,
    season_id: Option<i64>,
    image: Option<Vec<u8>>,
) -> Result<product::Model> {
    validate_product_fields(&name, price, stock)?;
    validate_season_exists(db, season_id).await?;

    let existing = Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(Error::ProductNotFound { product_id })?;

    let mut active: product::ActiveModel = existing.into();
    active.name = Set(name.trim().to_string());
    active.description = Set(description.trim().to_string());
    active.price = Set(price);
    active.stock = Set(stock);
    active.season_id = Set(season_id);
    if let Some(image) = image {
        active.image = Set(Some(image));
    }
    active.updated_at = Set(chrono::Utc::now().naive_utc());

    active.update(db).await.map_err(Into::into)
}

/// Removes a product from the catalog.
///
/// Past sales keep their line items; only the inventory row is deleted.
pub async fn delete_product(db: &DatabaseConnection, product_id: i64) -> Result<()> {
    let result = Product::delete_by_id(product_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::ProductNotFound { product_id });
    }
    Ok(())
}

/// Fetches the stored image bytes for a product, or None if it has no image.
pub async fn get_product_image(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Option<Vec<u8>>> {
    let product = Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(Error::ProductNotFound { product_id })?;
    Ok(product.image)
}

/// Retrieves the products offered in the currently active season.
///
/// Returns an empty list when no season is active.
pub async fn get_active_season_products(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    let rows = Product::find()
        .find_also_related(Season)
        .filter(season::Column::Active.eq(true))
        .order_by_asc(product::Column::Name)
        .all(db)
        .await?;
    Ok(rows.into_iter().map(|(p, _)| p).collect())
}

/// Retrieves the products offered year-round (no season association).
pub async fn get_year_round_products(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    Product::find()
        .filter(product::Column::SeasonId.is_null())
        .order_by_asc(product::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}
