use sqlx::{
    query::{Query, QueryAs},
    sqlite::{SqliteArguments, SqliteRow},
    Sqlite,
};

#[derive(Clone)]
pub enum SqlxBinds {
    String(String),
    Int(i64),
}

pub fn binds_query(stmt: &str, binds: Vec<SqlxBinds>) -> Query<'_, Sqlite, SqliteArguments<'_>> {
    let mut q: Query<'_, Sqlite, SqliteArguments<'_>> = sqlx::query(stmt);
    for bind in binds.into_iter() {
        q = match bind {
            SqlxBinds::String(val) => q.bind(val),
            SqlxBinds::Int(val) => q.bind(val),
        };
    }
    q
}

pub fn binds_query_as<'a, T: for<'r> sqlx::FromRow<'r, SqliteRow>>(
    stmt: &'a str,
    binds: Vec<SqlxBinds>,
) -> QueryAs<'a, Sqlite, T, SqliteArguments<'a>> {
    let mut q: QueryAs<'_, Sqlite, T, SqliteArguments<'_>> = sqlx::query_as(stmt);
    for bind in binds.into_iter() {
        q = match bind {
            SqlxBinds::String(val) => q.bind(val),
            SqlxBinds::Int(val) => q.bind(val),
        };
    }
    q
}

pub fn query_builder(
    select: Option<String>,
    table_name: &str,
    wheres: &[String],
    order_by: Vec<String>,
) -> String {
    // Select
    let mut stmt = "SELECT ".to_string();
    if let Some(val) = select {
        stmt.push_str(&val);
    } else {
        stmt.push('*');
    }

    // From
    stmt.push_str(format!(" FROM {}", table_name).as_str());

    // Where
    if !wheres.is_empty() {
        stmt.push_str(" WHERE");
        for (idx, item) in wheres.iter().enumerate() {
            stmt.push_str(&format!(" {}", item));
            if idx < wheres.len() - 1 {
                stmt.push_str(" AND");
            }
        }
    }

    // order by
    if !order_by.is_empty() {
        stmt.push_str(" ORDER BY");
        for (idx, item) in order_by.iter().enumerate() {
            stmt.push_str(format!(" {}", item).as_str());
            if idx < order_by.len() - 1 {
                stmt.push(',');
            }
        }
    }
    stmt
}
