use sqlx::SqlitePool;
use tracing::{error, info};
use webfilter_domain::config::DatabaseConfig;
use webfilter_infrastructure::database::create_pool;

pub async fn init_database(database_url: &str, cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    info!("Initializing database: {}", database_url);

    let pool = create_pool(database_url, cfg).await.map_err(|e| {
        error!("Failed to initialize database: {}", e);
        anyhow::anyhow!(e)
    })?;

    Ok(pool)
}
