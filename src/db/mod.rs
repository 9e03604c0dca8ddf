pub mod contacts;
pub mod repository;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::config::DatabaseConfig;

/// Create a SeaORM connection pool from explicit configuration.
pub async fn create_pool(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(config.connect_timeout)
        .acquire_timeout(config.acquire_timeout)
        .sqlx_logging(config.log_sql);

    tracing::info!(url = %config.redacted_url(), "connecting to database");
    Database::connect(options).await
}
