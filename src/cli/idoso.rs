use sqlx::SqlitePool;

use crate::{factory::idoso::IdosoFactory, repository::idoso::count_idoso};

/// Insert `count` fake records, for local development. Returns the total
/// number of records afterwards.
pub async fn seed_idoso(pool: &SqlitePool, count: u32) -> anyhow::Result<i64> {
    let mut factory = IdosoFactory::new();
    let data = factory.generate_many(pool, count, ()).await?;
    for item in data {
        println!("{} {} ({})", item.id, item.nome, item.cidade);
    }
    let mut tx = pool.begin().await?;
    let total = count_idoso(&mut tx).await?;
    println!("{} idoso(s) cadastrados no total", total);
    Ok(total)
}
