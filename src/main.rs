use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use salonslot_api::config::ApiConfig;
use salonslot_core::clock::SystemClock;
use salonslot_db::{create_pool, schema::initialize_database, PgSalonRepository};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Create database connection pool
    let db_pool = create_pool(&config.database_url).await?;

    // Initialize database schema
    initialize_database(&db_pool).await?;

    let repository = Arc::new(PgSalonRepository::new(db_pool));

    // Start API server
    salonslot_api::start_server(config, repository, Arc::new(SystemClock)).await?;

    Ok(())
}
