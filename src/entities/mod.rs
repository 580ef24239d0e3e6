//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod product;
pub mod sale;
pub mod sale_line;
pub mod season;
pub mod user;

// Re-export specific types to avoid conflicts
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
pub use sale::{Column as SaleColumn, Entity as Sale, Model as SaleModel};
pub use sale_line::{Column as SaleLineColumn, Entity as SaleLine, Model as SaleLineModel};
pub use season::{Column as SeasonColumn, Entity as Season, Model as SeasonModel};
pub use user::{Column as UserColumn, Entity as User, Model as UserModel};
