//! Application configuration: database connection and seed data.

/// Database connection and schema creation
pub mod database;
/// Seed data (seasons, starter products) from config.toml
pub mod seed;

use crate::errors::Result;
use tracing::warn;

/// Resolved application configuration.
#[derive(Debug)]
pub struct AppConfig {
    /// Database connection string
    pub database_url: String,
    /// Seed data to apply at bootstrap
    pub seed: seed::SeedConfig,
}

/// Loads the application configuration.
///
/// The database URL comes from `DATABASE_URL`; seed data comes from the file
/// named by `BAKEHOUSE_CONFIG` (default `config.toml`). A missing seed file
/// is not an error - the database simply starts empty.
pub fn load_app_configuration() -> Result<AppConfig> {
    let database_url = database::get_database_url();

    let config_path =
        std::env::var("BAKEHOUSE_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
    let seed = if std::path::Path::new(&config_path).exists() {
        seed::load_config(&config_path)?
    } else {
        warn!(path = %config_path, "no seed config found, starting with an empty catalog");
        seed::SeedConfig::default()
    };

    Ok(AppConfig { database_url, seed })
}
