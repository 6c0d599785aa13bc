//! Content store layer for the charity site.

pub mod entities;
pub mod migrations;
pub mod repositories;
pub mod store;
pub mod test_utils;

use std::sync::Arc;
use std::time::Duration;

use charity_common::{AppError, Config, StoreBackend, StoreConfig};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::log::LevelFilter;

use crate::store::{MemoryStore, PostgresStore, RestStore, SharedStore};

/// Initialize a `PostgreSQL` connection pool.
pub async fn init(config: &StoreConfig) -> Result<DatabaseConnection, AppError> {
    let url = config
        .database_url
        .as_deref()
        .ok_or_else(|| AppError::Config("store.database_url is required".to_string()))?;
    let mut opt = ConnectOptions::new(url);

    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(config.request_timeout_secs))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(true)
        .sqlx_logging_level(LevelFilter::Debug);

    Database::connect(opt)
        .await
        .map_err(|e| AppError::Database(e.to_string()))
}

/// Run pending migrations.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), AppError> {
    use sea_orm_migration::MigratorTrait;
    migrations::Migrator::up(db, None)
        .await
        .map_err(|e| AppError::Database(e.to_string()))
}

/// Build the content store selected by `store.backend`.
pub async fn connect_store(config: &Config) -> Result<SharedStore, AppError> {
    let store_config = &config.store;
    let store: SharedStore = match store_config.backend {
        StoreBackend::Rest => {
            let url = store_config
                .url
                .as_deref()
                .ok_or_else(|| AppError::Config("store.url is required".to_string()))?;
            let anon_key = store_config
                .anon_key
                .as_deref()
                .ok_or_else(|| AppError::Config("store.anon_key is required".to_string()))?;
            Arc::new(RestStore::new(
                url,
                anon_key,
                Duration::from_secs(store_config.request_timeout_secs),
            )?)
        }
        StoreBackend::Postgres => {
            let db = init(store_config).await?;
            if store_config.run_migrations {
                migrate(&db).await?;
                tracing::info!("Database migrations completed");
            }
            Arc::new(PostgresStore::new(Arc::new(db)))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using the in-memory store; content is lost on restart");
            Arc::new(MemoryStore::new())
        }
    };

    tracing::info!(backend = store.backend_name(), "Content store ready");
    Ok(store)
}
