//! Bootstrap binary: prepares the bakery database.
//!
//! Initializes tracing, loads configuration, creates the schema, and applies
//! the seed catalog from config.toml. The HTTP layer that serves the routes
//! lives outside this crate and connects to the same database.

use bakehouse::{config, core::season, errors::Result};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; non-fatal, env vars can be set externally
    dotenv().ok();

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Failed to load application configuration: {e}"))?;

    // 4. Initialize the database schema
    let db = config::database::init_db(&app_config.database_url)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {e}"))?;

    // 5. Apply seed data (idempotent)
    config::seed::seed_initial_data(&db, &app_config.seed)
        .await
        .inspect_err(|e| error!("Failed to seed initial data: {e}"))?;

    match season::get_active_season(&db).await? {
        Some(active) => info!(season = %active.name, "active season"),
        None => info!("no active season; only year-round products are offered"),
    }

    info!("Bakery database is ready.");
    Ok(())
}
