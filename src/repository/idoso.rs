use sqlx::{Sqlite, Transaction};

use crate::{
    core::sqlx_utils::{binds_query, binds_query_as, query_builder, SqlxBinds},
    model::idoso::{Idoso, IdosoPatch, NewIdoso, TABLE_NAME},
};

pub async fn get_all_idoso(tx: &mut Transaction<'_, Sqlite>) -> anyhow::Result<Vec<Idoso>> {
    let stmt = query_builder(None, TABLE_NAME, &[], vec!["id ASC".to_string()]);
    let q = binds_query_as::<Idoso>(&stmt, vec![]);
    let data = q.fetch_all(&mut **tx).await?;
    Ok(data)
}

pub async fn count_idoso(tx: &mut Transaction<'_, Sqlite>) -> anyhow::Result<i64> {
    let stmt = query_builder(Some("count(id)".to_string()), TABLE_NAME, &[], vec![]);
    let q = binds_query_as::<(i64,)>(&stmt, vec![]);
    let count = q.fetch_one(&mut **tx).await?;
    Ok(count.0)
}

pub async fn get_idoso_by_id(
    tx: &mut Transaction<'_, Sqlite>,
    id: i64,
) -> anyhow::Result<Option<Idoso>> {
    let binds: Vec<SqlxBinds> = vec![SqlxBinds::Int(id)];
    let filters: Vec<String> = vec!["id = ?".to_string()];
    let stmt = query_builder(None, TABLE_NAME, &filters, vec![]);
    let q = binds_query_as::<Idoso>(&stmt, binds);
    let data = q.fetch_optional(&mut **tx).await?;
    Ok(data)
}

pub async fn create_idoso(
    tx: &mut Transaction<'_, Sqlite>,
    new_idoso: NewIdoso,
) -> anyhow::Result<Idoso> {
    let stmt = format!(
        r#"
    INSERT INTO {} (nome, idade, nome_responsavel, celular_responsavel, cep,
    logradouro, numero, bairro, cidade, uf)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        TABLE_NAME
    );
    let result = binds_query(
        &stmt,
        vec![
            SqlxBinds::String(new_idoso.nome.clone()),
            SqlxBinds::Int(new_idoso.idade),
            SqlxBinds::String(new_idoso.nome_responsavel.clone()),
            SqlxBinds::String(new_idoso.celular_responsavel.clone()),
            SqlxBinds::String(new_idoso.cep.clone()),
            SqlxBinds::String(new_idoso.logradouro.clone()),
            SqlxBinds::String(new_idoso.numero.clone()),
            SqlxBinds::String(new_idoso.bairro.clone()),
            SqlxBinds::String(new_idoso.cidade.clone()),
            SqlxBinds::String(new_idoso.uf.clone()),
        ],
    )
    .execute(&mut **tx)
    .await?;
    Ok(new_idoso.with_id(result.last_insert_rowid()))
}

pub async fn update_idoso(
    tx: &mut Transaction<'_, Sqlite>,
    idoso: &mut Idoso,
    patch: IdosoPatch,
) -> anyhow::Result<()> {
    patch.apply(idoso);
    sqlx::query(
        format!(
            r#"
        UPDATE {}
        SET nome = ?, idade = ?, nome_responsavel = ?, celular_responsavel = ?, cep = ?,
        logradouro = ?, numero = ?, bairro = ?, cidade = ?, uf = ?
        WHERE id = ?"#,
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(&idoso.nome)
    .bind(idoso.idade)
    .bind(&idoso.nome_responsavel)
    .bind(&idoso.celular_responsavel)
    .bind(&idoso.cep)
    .bind(&idoso.logradouro)
    .bind(&idoso.numero)
    .bind(&idoso.bairro)
    .bind(&idoso.cidade)
    .bind(&idoso.uf)
    .bind(idoso.id)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

pub async fn delete_idoso(tx: &mut Transaction<'_, Sqlite>, idoso: &Idoso) -> anyhow::Result<()> {
    sqlx::query(format!(r#"DELETE FROM {} WHERE id = ?"#, TABLE_NAME).as_str())
        .bind(idoso.id)
        .execute(&mut **tx)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use sqlx::SqlitePool;

    use crate::factory::idoso::IdosoFactory;

    use super::*;

    fn new_idoso() -> NewIdoso {
        NewIdoso {
            nome: "Fulano da Silva".to_string(),
            idade: 75,
            nome_responsavel: "Responsável Legal".to_string(),
            celular_responsavel: "(11) 98765-4321".to_string(),
            cep: "01001000".to_string(),
            ..Default::default()
        }
    }

    #[sqlx::test]
    async fn test_create_and_get_idoso(pool: SqlitePool) -> anyhow::Result<()> {
        // When
        let mut tx = pool.begin().await?;
        let created = create_idoso(&mut tx, new_idoso()).await?;
        tx.commit().await?;

        // Expect
        assert!(created.id > 0);
        let mut tx = pool.begin().await?;
        let fetched = get_idoso_by_id(&mut tx, created.id).await?;
        assert_eq!(fetched, Some(created.clone()));
        assert_eq!(created.logradouro, "");
        assert_eq!(created.uf, "");
        Ok(())
    }

    #[sqlx::test]
    async fn test_create_rolled_back_on_drop(pool: SqlitePool) -> anyhow::Result<()> {
        // When
        {
            let mut tx = pool.begin().await?;
            create_idoso(&mut tx, new_idoso()).await?;
        }

        // Expect
        let mut tx = pool.begin().await?;
        assert_eq!(count_idoso(&mut tx).await?, 0);
        Ok(())
    }

    #[sqlx::test]
    async fn test_ids_are_not_reused(pool: SqlitePool) -> anyhow::Result<()> {
        // Given
        let mut tx = pool.begin().await?;
        let first = create_idoso(&mut tx, new_idoso()).await?;
        delete_idoso(&mut tx, &first).await?;
        tx.commit().await?;

        // When
        let mut tx = pool.begin().await?;
        let second = create_idoso(&mut tx, new_idoso()).await?;
        tx.commit().await?;

        // Expect
        assert!(second.id > first.id);
        Ok(())
    }

    #[sqlx::test]
    async fn test_get_all_idoso(pool: SqlitePool) -> anyhow::Result<()> {
        // Given
        let mut factory = IdosoFactory::new();
        let expected = factory.generate_many(&pool, 5, ()).await?;

        // When
        let mut tx = pool.begin().await?;
        let data = get_all_idoso(&mut tx).await?;

        // Expect
        assert_eq!(data, expected);
        assert_eq!(count_idoso(&mut tx).await?, 5);
        Ok(())
    }

    #[sqlx::test]
    async fn test_update_idoso_partial(pool: SqlitePool) -> anyhow::Result<()> {
        // Given
        let mut factory = IdosoFactory::new();
        let idoso = factory.generate_one(&pool, ()).await?;

        // When
        let mut tx = pool.begin().await?;
        let mut data = get_idoso_by_id(&mut tx, idoso.id).await?.unwrap();
        update_idoso(
            &mut tx,
            &mut data,
            IdosoPatch {
                cidade: Some("Campinas".to_string()),
                idade: Some(90),
                ..Default::default()
            },
        )
        .await?;
        tx.commit().await?;

        // Expect
        let mut tx = pool.begin().await?;
        let stored = get_idoso_by_id(&mut tx, idoso.id).await?.unwrap();
        assert_eq!(stored, data);
        assert_eq!(stored.cidade, "Campinas");
        assert_eq!(stored.idade, 90);
        assert_eq!(stored.nome, idoso.nome);
        assert_eq!(stored.cep, idoso.cep);
        Ok(())
    }

    #[sqlx::test]
    async fn test_delete_idoso(pool: SqlitePool) -> anyhow::Result<()> {
        // Given
        let mut factory = IdosoFactory::new();
        let idoso = factory.generate_one(&pool, ()).await?;

        // When
        let mut tx = pool.begin().await?;
        delete_idoso(&mut tx, &idoso).await?;
        tx.commit().await?;

        // Expect
        let mut tx = pool.begin().await?;
        assert!(get_idoso_by_id(&mut tx, idoso.id).await?.is_none());
        Ok(())
    }
}
