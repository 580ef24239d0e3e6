//! Product entity - Represents bakery inventory items.
//!
//! Each product has a name, description, unit price, authoritative stock
//! count, an optional season association (None means offered year-round),
//! and an optional image blob. Stock is decremented only by a successful
//! checkout or an admin update; it must never go negative.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name of the product (e.g., "Concha", "Pan de Muerto")
    pub name: String,
    /// Customer-facing description
    pub description: String,
    /// Unit price in currency units, always positive
    pub price: f64,
    /// Units currently in stock, never negative
    pub stock: i32,
    /// Season this product belongs to; None means available year-round
    pub season_id: Option<i64>,
    /// Optional product image stored as raw image bytes
    pub image: Option<Vec<u8>>,
    /// When the product was created
    pub created_at: DateTime,
    /// When the product was last modified
    pub updated_at: DateTime,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each product optionally belongs to one season
    #[sea_orm(
        belongs_to = "super::season::Entity",
        from = "Column::SeasonId",
        to = "super::season::Column::Id"
    )]
    Season,
}

impl Related<super::season::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Season.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
