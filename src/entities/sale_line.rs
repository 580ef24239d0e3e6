//! Sale line entity - One product-quantity-subtotal entry within a sale.
//!
//! Lines are written only as a batch alongside their parent sale, under the
//! same transaction. `product_id` is deliberately a plain column rather than
//! a foreign key: a sale keeps its history even after the product is removed
//! from the catalog.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sale line database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sale_lines")]
pub struct Model {
    /// Unique identifier for the line
    #[sea_orm(primary_key)]
    pub id: i64,
    /// The parent sale
    pub sale_id: i64,
    /// Product sold (no FK; products may be deleted after the sale)
    pub product_id: i64,
    /// Units sold
    pub quantity: i32,
    /// Price per unit at time of sale
    pub unit_price: f64,
    /// `quantity * unit_price`
    pub subtotal: f64,
}

/// Defines relationships between SaleLine and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each line belongs to one sale
    #[sea_orm(
        belongs_to = "super::sale::Entity",
        from = "Column::SaleId",
        to = "super::sale::Column::Id"
    )]
    Sale,
}

impl Related<super::sale::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sale.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
