//! Sale entity - The persisted record of one completed checkout.
//!
//! A sale row is created exactly once per successful checkout, together with
//! its line items, inside the same transaction. Sales are immutable once
//! written; the `total` always equals the sum of its lines' subtotals.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sale database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sales")]
pub struct Model {
    /// Unique identifier for the sale
    #[sea_orm(primary_key)]
    pub id: i64,
    /// The purchasing user
    pub user_id: i64,
    /// Server-assigned time of purchase
    pub timestamp: DateTimeUtc,
    /// Sum of all line subtotals
    pub total: f64,
}

/// Defines relationships between Sale and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each sale belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    /// One sale has many line items
    #[sea_orm(has_many = "super::sale_line::Entity")]
    SaleLines,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::sale_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SaleLines.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
