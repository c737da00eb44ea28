use color_eyre::eyre::Result;
use dotenv::dotenv;
use medcal_booking::{config::BookingConfig, init_tracing};
use medcal_db::SqliteSlotStore;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();

    let config = BookingConfig::from_env()?;
    init_tracing(config.log_level)?;

    info!(database_url = %config.database_url, "Connecting to database");
    let store = SqliteSlotStore::connect(&config.database_url).await?;

    store.init_schema().await?;
    store.close().await;
    info!("Database schema initialized successfully");

    Ok(())
}
