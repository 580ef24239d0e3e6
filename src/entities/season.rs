//! Season entity - Time-scoped groupings that gate product availability.
//!
//! Products attached to a season are offered to customers only while that
//! season is active. Activation is exclusive: at most one season is active at
//! a time, enforced by [`crate::core::season::activate_season`].

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Season database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "seasons")]
pub struct Model {
    /// Unique identifier for the season
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable name (e.g., "Day of the Dead", "Christmas")
    pub name: String,
    /// Whether this season is the currently active one
    pub active: bool,
}

/// Defines relationships between Season and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One season has many products
    #[sea_orm(has_many = "super::product::Entity")]
    Products,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
