use std::{str::FromStr, time::Duration};

use sqlx::{
    migrate::Migrator,
    pool::PoolOptions,
    sqlite::{SqliteConnectOptions, SqliteJournalMode},
    Pool, Sqlite,
};
use tracing::info;

use crate::settings::Config;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Open the SQLite file behind `database_url`, creating it (and its parent
/// directory) when absent.
pub async fn connect_pool(config: &Config) -> anyhow::Result<Pool<Sqlite>> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);
    if let Some(parent) = options.get_filename().parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            info!("create database directory {}", parent.display());
            std::fs::create_dir_all(parent)?;
        }
    }

    let pool = PoolOptions::new()
        .min_connections(1)
        .max_connections(10)
        .idle_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Connect and bring the schema up to date.
pub async fn init_pool(config: &Config) -> anyhow::Result<Pool<Sqlite>> {
    let pool = connect_pool(config).await?;
    MIGRATOR.run(&pool).await?;
    info!("database ready on {}", config.database_url);
    Ok(pool)
}
