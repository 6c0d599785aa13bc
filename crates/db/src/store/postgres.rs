//! Content store over a direct `PostgreSQL` connection.

use std::sync::Arc;

use async_trait::async_trait;
use charity_common::{AppError, AppResult};
use chrono::DateTime;
use sea_orm::sea_query::{
    Alias, Asterisk, DeleteStatement, Expr, InsertStatement, Order as SqlOrder,
    Query as SqlQuery, SelectStatement, SimpleExpr, UpdateStatement,
};
use sea_orm::{ConnectionTrait, DatabaseConnection, FromQueryResult, JsonValue, Value as SqlValue};
use serde_json::Value;

use super::{ContentStore, Filter, Query, Row, Table, require_filters};

/// Columns stored as `timestamptz`; their JSON strings are bound as timestamps.
const TIMESTAMP_COLUMNS: [&str; 2] = ["created_at", "updated_at"];

/// Content store issuing dynamic statements through sea-orm.
#[derive(Clone)]
pub struct PostgresStore {
    db: Arc<DatabaseConnection>,
}

impl PostgresStore {
    /// Create a store over an existing connection pool.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Convert a JSON value into a bind value for `column`.
fn bind_value(column: &str, value: &Value) -> AppResult<SqlValue> {
    Ok(match value {
        Value::Null => SqlValue::String(None),
        Value::Bool(b) => SqlValue::from(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                SqlValue::from(i)
            } else {
                SqlValue::from(n.as_f64().unwrap_or_default())
            }
        }
        Value::String(s) if TIMESTAMP_COLUMNS.contains(&column) => {
            let parsed = DateTime::parse_from_rfc3339(s).map_err(|e| {
                AppError::BadRequest(format!("{column} is not an RFC 3339 timestamp: {e}"))
            })?;
            SqlValue::from(parsed)
        }
        Value::String(s) => SqlValue::from(s.clone()),
        Value::Array(_) | Value::Object(_) => SqlValue::from(value.clone()),
    })
}

fn condition(filter: &Filter) -> AppResult<SimpleExpr> {
    let column = Expr::col(Alias::new(filter.column()));
    let value = filter.value();
    Ok(match filter {
        Filter::Eq { .. } if value.is_null() => column.is_null(),
        Filter::Neq { .. } if value.is_null() => column.is_not_null(),
        Filter::Eq { .. } => column.eq(bind_value(filter.column(), value)?),
        Filter::Neq { .. } => column.ne(bind_value(filter.column(), value)?),
    })
}

pub(crate) fn build_select(query: &Query) -> AppResult<SelectStatement> {
    let mut stmt = SqlQuery::select();
    if query.columns.is_empty() {
        stmt.column(Asterisk);
    } else {
        stmt.columns(query.columns.iter().map(|c| Alias::new(c.as_str())));
    }
    stmt.from(Alias::new(query.table.name()));
    for filter in &query.filters {
        stmt.and_where(condition(filter)?);
    }
    for key in &query.order {
        let direction = if key.ascending {
            SqlOrder::Asc
        } else {
            SqlOrder::Desc
        };
        stmt.order_by(Alias::new(key.column.as_str()), direction);
    }
    if let Some(limit) = query.limit {
        stmt.limit(limit);
    }
    Ok(stmt)
}

pub(crate) fn build_insert(table: Table, rows: &[Row]) -> AppResult<Option<InsertStatement>> {
    let Some(first) = rows.first() else {
        return Ok(None);
    };
    let columns: Vec<String> = first.keys().cloned().collect();

    let mut stmt = SqlQuery::insert();
    stmt.into_table(Alias::new(table.name()))
        .columns(columns.iter().map(|c| Alias::new(c.as_str())));
    for row in rows {
        let values = columns
            .iter()
            .map(|c| bind_value(c, row.get(c).unwrap_or(&Value::Null)).map(SimpleExpr::from))
            .collect::<AppResult<Vec<_>>>()?;
        stmt.values(values)
            .map_err(|e| AppError::BadRequest(format!("inconsistent insert rows: {e}")))?;
    }
    Ok(Some(stmt))
}

pub(crate) fn build_update(table: Table, patch: &Row, filters: &[Filter]) -> AppResult<UpdateStatement> {
    let mut stmt = SqlQuery::update();
    stmt.table(Alias::new(table.name()));
    for (column, value) in patch {
        stmt.value(Alias::new(column.as_str()), bind_value(column, value)?);
    }
    for filter in filters {
        stmt.and_where(condition(filter)?);
    }
    Ok(stmt)
}

pub(crate) fn build_delete(table: Table, filters: &[Filter]) -> AppResult<DeleteStatement> {
    let mut stmt = SqlQuery::delete();
    stmt.from_table(Alias::new(table.name()));
    for filter in filters {
        stmt.and_where(condition(filter)?);
    }
    Ok(stmt)
}

#[async_trait]
impl ContentStore for PostgresStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn select(&self, query: &Query) -> AppResult<Vec<Row>> {
        let backend = self.db.get_database_backend();
        let stmt = backend.build(&build_select(query)?);
        tracing::debug!(table = %query.table, sql = %stmt.sql, "Postgres select");

        let rows = JsonValue::find_by_statement(stmt)
            .all(self.db.as_ref())
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|row| match row {
                JsonValue::Object(map) => Some(map),
                _ => None,
            })
            .collect())
    }

    async fn insert(&self, table: Table, rows: Vec<Row>) -> AppResult<()> {
        let Some(stmt) = build_insert(table, &rows)? else {
            return Ok(());
        };
        let backend = self.db.get_database_backend();
        self.db.execute(backend.build(&stmt)).await?;
        Ok(())
    }

    async fn update(&self, table: Table, patch: Row, filters: &[Filter]) -> AppResult<u64> {
        require_filters(table, filters)?;
        if patch.is_empty() {
            return Ok(0);
        }
        let backend = self.db.get_database_backend();
        let result = self
            .db
            .execute(backend.build(&build_update(table, &patch, filters)?))
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, table: Table, filters: &[Filter]) -> AppResult<u64> {
        require_filters(table, filters)?;
        let backend = self.db.get_database_backend();
        let result = self
            .db
            .execute(backend.build(&build_delete(table, filters)?))
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::sea_query::PostgresQueryBuilder;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use serde_json::json;

    fn row(value: Value) -> Row {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_build_select_sql() {
        let query = Query::select(Table::Causes)
            .eq("is_active", true)
            .order("sort_order", true)
            .limit(6);

        let sql = build_select(&query).unwrap().to_string(PostgresQueryBuilder);

        assert_eq!(
            sql,
            r#"SELECT * FROM "causes" WHERE "is_active" = TRUE ORDER BY "sort_order" ASC LIMIT 6"#
        );
    }

    #[test]
    fn test_build_select_column_list() {
        let query = Query::select(Table::Banners)
            .columns(&["id", "is_active"])
            .eq("is_active", true);

        let sql = build_select(&query).unwrap().to_string(PostgresQueryBuilder);

        assert_eq!(
            sql,
            r#"SELECT "id", "is_active" FROM "banners" WHERE "is_active" = TRUE"#
        );
    }

    #[test]
    fn test_build_select_null_filter() {
        let query = Query::select(Table::Certifications).eq("pdf_url", Value::Null);
        let sql = build_select(&query).unwrap().to_string(PostgresQueryBuilder);
        assert!(sql.contains(r#""pdf_url" IS NULL"#));
    }

    #[test]
    fn test_build_update_binds_timestamps() {
        let patch = row(json!({
            "is_active": false,
            "updated_at": "2025-01-01T00:00:00.000000Z"
        }));
        let sql = build_update(Table::LogoSettings, &patch, &[Filter::neq("id", "b")])
            .unwrap()
            .to_string(PostgresQueryBuilder);

        assert!(sql.starts_with(r#"UPDATE "logo_settings" SET"#));
        assert!(sql.contains(r#""is_active" = FALSE"#));
        assert!(sql.contains("2025-01-01"));
        assert!(sql.contains(r#"WHERE "id" <> 'b'"#));
    }

    #[test]
    fn test_bad_timestamp_is_rejected() {
        let patch = row(json!({"updated_at": "yesterday"}));
        let result = build_update(Table::Banners, &patch, &[Filter::eq("id", "a")]);
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_build_insert_orders_values_by_first_row_columns() {
        let rows = vec![
            row(json!({"id": "1", "title": "A", "services": [{"icon": "heart"}]})),
            row(json!({"title": "B", "id": "2"})),
        ];
        let sql = build_insert(Table::ReliefContent, &rows)
            .unwrap()
            .unwrap()
            .to_string(PostgresQueryBuilder);

        assert!(sql.starts_with(r#"INSERT INTO "relief_content""#));
        assert!(sql.contains("'1'"));
        assert!(sql.contains("'2'"));
        assert!(build_insert(Table::Causes, &[]).unwrap().is_none());
    }

    #[test]
    fn test_build_delete_sql() {
        let sql = build_delete(Table::BoardStaff, &[Filter::eq("id", "m1")])
            .unwrap()
            .to_string(PostgresQueryBuilder);
        assert_eq!(sql, r#"DELETE FROM "board_staff" WHERE "id" = 'm1'"#);
    }

    #[tokio::test]
    async fn test_select_returns_rows_as_objects() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[maplit::btreemap! {
                    "id" => SqlValue::from("c1".to_string()),
                    "title" => SqlValue::from("Education".to_string()),
                    "sort_order" => SqlValue::from(0_i32),
                }]])
                .into_connection(),
        );

        let store = PostgresStore::new(db);
        let rows = store.select(&Query::select(Table::Causes)).await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["title"], "Education");
    }

    #[tokio::test]
    async fn test_update_reports_rows_affected() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 2,
                }])
                .into_connection(),
        );

        let store = PostgresStore::new(db);
        let affected = store
            .update(
                Table::LogoSettings,
                row(json!({"is_active": false})),
                &[Filter::neq("id", "b")],
            )
            .await
            .unwrap();

        assert_eq!(affected, 2);
    }

    #[tokio::test]
    async fn test_unfiltered_delete_never_reaches_database() {
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
        let store = PostgresStore::new(db);
        assert!(store.delete(Table::Causes, &[]).await.is_err());
    }
}
