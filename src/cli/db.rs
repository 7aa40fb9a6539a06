use anyhow::bail;
use sqlx::migrate::Migrate;
use tokio::process::Command;

use crate::{
    core::db::{connect_pool, MIGRATOR},
    settings::Config,
};

pub async fn db_generate(migration_name: &String) -> anyhow::Result<()> {
    let status = Command::new("sqlx")
        .arg("migrate")
        .arg("add")
        .arg(migration_name)
        .arg("-r")
        .status()
        .await?;
    if !status.success() {
        bail!("sqlx migrate add exited with {}", status);
    }
    Ok(())
}

pub async fn db_list(config: &Config) -> anyhow::Result<()> {
    let pool = connect_pool(config).await?;
    let mut conn = pool.acquire().await?;
    conn.ensure_migrations_table().await?;
    let applied: Vec<i64> = conn
        .list_applied_migrations()
        .await?
        .into_iter()
        .map(|x| x.version)
        .collect();
    for migration in MIGRATOR
        .iter()
        .filter(|x| !x.migration_type.is_down_migration())
    {
        let state = if applied.contains(&migration.version) {
            "installed"
        } else {
            "pending"
        };
        println!(
            "{}/{} {}",
            migration.version, state, migration.description
        );
    }
    Ok(())
}

pub async fn db_migrate(config: &Config) -> anyhow::Result<()> {
    let pool = connect_pool(config).await?;
    MIGRATOR.run(&pool).await?;
    Ok(())
}

pub async fn db_revert(config: &Config) -> anyhow::Result<()> {
    let pool = connect_pool(config).await?;
    let mut conn = pool.acquire().await?;
    conn.ensure_migrations_table().await?;
    let mut applied: Vec<i64> = conn
        .list_applied_migrations()
        .await?
        .into_iter()
        .map(|x| x.version)
        .collect();
    drop(conn);
    applied.sort();
    let Some(latest) = applied.pop() else {
        println!("no migration to revert");
        return Ok(());
    };
    println!("revert migration {}", latest);
    MIGRATOR.undo(&pool, applied.last().copied().unwrap_or(0)).await?;
    Ok(())
}
