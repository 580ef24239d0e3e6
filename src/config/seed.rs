//! Seed data loading from config.toml
//!
//! Seasons and starter products defined in config.toml are inserted on
//! bootstrap when missing, so a fresh database comes up with a usable
//! catalog. Seeding is idempotent: rows are matched by name and never
//! duplicated or overwritten.

use crate::{
    core::product::create_product,
    core::season::create_season,
    entities::{Product, Season, product, season},
    errors::{Error, Result},
};
use sea_orm::{DatabaseConnection, prelude::*};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Seed data parsed from config.toml.
#[derive(Debug, Default, Deserialize)]
pub struct SeedConfig {
    /// Seasons to create when missing
    #[serde(default)]
    pub seasons: Vec<SeasonSeed>,
    /// Products to create when missing
    #[serde(default)]
    pub products: Vec<ProductSeed>,
}

/// One season row to seed.
#[derive(Debug, Deserialize, Clone)]
pub struct SeasonSeed {
    /// Season name
    pub name: String,
    /// Whether this season starts out active
    #[serde(default)]
    pub active: bool,
}

/// One product row to seed.
#[derive(Debug, Deserialize, Clone)]
pub struct ProductSeed {
    /// Product name
    pub name: String,
    /// Customer-facing description
    #[serde(default)]
    pub description: String,
    /// Unit price
    pub price: f64,
    /// Initial stock
    pub stock: i32,
    /// Name of the season this product belongs to; omit for year-round
    pub season: Option<String>,
}

/// Loads seed configuration from a TOML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Inserts any missing seed rows.
///
/// Seasons are matched by name; products are matched by name and resolve
/// their season by name. Existing rows are left untouched so manual edits
/// survive restarts.
pub async fn seed_initial_data(db: &DatabaseConnection, config: &SeedConfig) -> Result<()> {
    for season_seed in &config.seasons {
        let existing = Season::find()
            .filter(season::Column::Name.eq(season_seed.name.clone()))
            .one(db)
            .await?;
        if existing.is_some() {
            debug!(name = %season_seed.name, "season already present, skipping");
            continue;
        }
        create_season(db, season_seed.name.clone(), season_seed.active).await?;
        info!(name = %season_seed.name, "seeded season");
    }

    for product_seed in &config.products {
        let existing = Product::find()
            .filter(product::Column::Name.eq(product_seed.name.clone()))
            .one(db)
            .await?;
        if existing.is_some() {
            debug!(name = %product_seed.name, "product already present, skipping");
            continue;
        }

        let season_id = match &product_seed.season {
            Some(season_name) => {
                let season = Season::find()
                    .filter(season::Column::Name.eq(season_name.clone()))
                    .one(db)
                    .await?
                    .ok_or_else(|| Error::Config {
                        message: format!(
                            "Seed product '{}' references unknown season '{season_name}'",
                            product_seed.name
                        ),
                    })?;
                Some(season.id)
            }
            None => None,
        };

        create_product(
            db,
            product_seed.name.clone(),
            product_seed.description.clone(),
            product_seed.price,
            product_seed.stock,
            season_id,
            None,
        )
        .await?;
        info!(name = %product_seed.name, "seeded product");
    }

    Ok(())
}
