use anyhow::Result;
use sea_orm::{FromQueryResult, Statement};

use crate::shared::data::db::get_connection;

#[derive(Debug, FromQueryResult)]
struct CountRow {
    cnt: i64,
}

pub async fn count_all() -> Result<u64> {
    let db = get_connection();

    let stmt = Statement::from_sql_and_values(
        sea_orm::DatabaseBackend::Sqlite,
        r#"SELECT COUNT(*) AS cnt FROM orders"#,
        [],
    );
    let row = CountRow::find_by_statement(stmt).one(db).await?;
    Ok(row.map(|r| r.cnt as u64).unwrap_or(0))
}

pub async fn count_by_status(status: &str) -> Result<u64> {
    let db = get_connection();

    let stmt = Statement::from_sql_and_values(
        sea_orm::DatabaseBackend::Sqlite,
        r#"SELECT COUNT(*) AS cnt FROM orders WHERE status = ?"#,
        [status.into()],
    );
    let row = CountRow::find_by_statement(stmt).one(db).await?;
    Ok(row.map(|r| r.cnt as u64).unwrap_or(0))
}

/// The item name with the most orders and its occurrence count, if any
/// orders exist. Ties resolve to whichever group the engine returns first.
pub async fn most_frequent_item() -> Result<Option<(String, u64)>> {
    let db = get_connection();

    #[derive(Debug, FromQueryResult)]
    struct ItemFrequency {
        item: String,
        cnt: i64,
    }

    let sql = r#"
        SELECT item, COUNT(*) AS cnt
        FROM orders
        GROUP BY item
        ORDER BY cnt DESC
        LIMIT 1
    "#;
    let stmt = Statement::from_sql_and_values(sea_orm::DatabaseBackend::Sqlite, sql, []);
    let result = ItemFrequency::find_by_statement(stmt).one(db).await?;

    Ok(result.map(|r| (r.item, r.cnt as u64)))
}
