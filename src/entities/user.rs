//! User entity - Represents account holders of the bakery backend.
//!
//! Each user has a name, unique email, password, role (`"admin"` or
//! `"customer"`), and an optional profile photo stored as a blob. The
//! single-active-session rule is enforced by the in-process session registry,
//! not by a column on this table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier for the user
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name of the account holder
    pub name: String,
    /// Login email, unique across all users
    #[sea_orm(unique)]
    pub email: String,
    /// Login password (stored as provided; hashing is out of scope)
    pub password: String,
    /// Role of the account: `"admin"` or `"customer"`
    pub role: String,
    /// Optional profile photo stored as raw image bytes
    pub profile_photo: Option<Vec<u8>>,
    /// When the account was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between User and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One user has many sales
    #[sea_orm(has_many = "super::sale::Entity")]
    Sales,
}

impl Related<super::sale::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sales.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
