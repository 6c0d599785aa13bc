//! Table-scoped repository shared by every content entity.

use std::marker::PhantomData;

use charity_common::{AppError, AppResult, timestamp_now};
use serde_json::Value;

use crate::entities::Record;
use crate::store::{Filter, Query, Row, SharedStore, Table};

/// Repository for one table, decoding rows into `T`.
pub struct ContentRepository<T> {
    store: SharedStore,
    table: Table,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for ContentRepository<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            table: self.table,
            _entity: PhantomData,
        }
    }
}

impl<T: Record> ContentRepository<T> {
    /// Create a repository for `table`.
    #[must_use]
    pub const fn new(store: SharedStore, table: Table) -> Self {
        Self {
            store,
            table,
            _entity: PhantomData,
        }
    }

    /// Display order for this table: `sort_order` ascending where present,
    /// newest first otherwise.
    fn ordered(&self, query: Query) -> Query {
        if self.table.has_sort_order() {
            query.order("sort_order", true)
        } else {
            query.order("created_at", false)
        }
    }

    /// Decode rows, skipping any that do not fit the entity shape.
    fn decode(&self, rows: Vec<Row>) -> Vec<T> {
        rows.into_iter()
            .filter_map(|row| match T::from_row(row) {
                Ok(entity) => Some(entity),
                Err(e) => {
                    tracing::warn!(table = %self.table, error = %e, "Skipping malformed row");
                    None
                }
            })
            .collect()
    }

    // ==================== Reads ====================

    /// Active rows in display order, at most `limit` of them.
    pub async fn find_active(&self, limit: Option<u64>) -> AppResult<Vec<T>> {
        let mut query = self.ordered(Query::select(self.table).eq("is_active", true));
        query.limit = limit;
        let rows = self.store.select(&query).await?;
        Ok(self.decode(rows))
    }

    /// The most recently created active row.
    pub async fn find_latest_active(&self) -> AppResult<Option<T>> {
        let query = Query::select(self.table)
            .eq("is_active", true)
            .order("created_at", false)
            .limit(1);
        let rows = self.store.select(&query).await?;
        Ok(self.decode(rows).into_iter().next())
    }

    /// Every row, active or not, in display order.
    pub async fn find_all(&self) -> AppResult<Vec<T>> {
        let query = self.ordered(Query::select(self.table));
        let rows = self.store.select(&query).await?;
        Ok(self.decode(rows))
    }

    /// Find a row by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<T>> {
        let query = Query::select(self.table).eq("id", id).limit(1);
        let rows = self.store.select(&query).await?;
        Ok(self.decode(rows).into_iter().next())
    }

    /// Get a row by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: &str) -> AppResult<T> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{}: {id}", self.table)))
    }

    /// Highest `sort_order` in the table, if any row has one.
    pub async fn max_sort_order(&self) -> AppResult<Option<i32>> {
        let query = Query::select(self.table)
            .neq("sort_order", Value::Null)
            .order("sort_order", false)
            .limit(1);
        let rows = self.store.select(&query).await?;
        Ok(rows
            .first()
            .and_then(|row| row.get("sort_order"))
            .and_then(Value::as_i64)
            .and_then(|n| i32::try_from(n).ok()))
    }

    // ==================== Writes ====================

    /// Insert an entity, stamping `created_at` when it has none.
    pub async fn insert(&self, entity: &T) -> AppResult<()> {
        let mut row = entity.to_row()?;
        row.entry("created_at")
            .or_insert_with(|| Value::String(timestamp_now()));
        self.store.insert(self.table, vec![row]).await
    }

    /// Write `fields` to one row and bump `updated_at`.
    ///
    /// `id` and `created_at` are never rewritten.
    pub async fn update(&self, id: &str, mut fields: Row) -> AppResult<u64> {
        fields.remove("id");
        fields.remove("created_at");
        fields.insert("updated_at".to_string(), Value::String(timestamp_now()));
        self.store
            .update(self.table, fields, &[Filter::eq("id", id)])
            .await
    }

    /// Set `is_active` on one row.
    pub async fn set_active(&self, id: &str, is_active: bool) -> AppResult<u64> {
        let mut fields = Row::new();
        fields.insert("is_active".to_string(), Value::Bool(is_active));
        self.update(id, fields).await
    }

    /// Clear `is_active` on every row except `id`.
    pub async fn deactivate_others(&self, id: &str) -> AppResult<u64> {
        let mut patch = Row::new();
        patch.insert("is_active".to_string(), Value::Bool(false));
        patch.insert("updated_at".to_string(), Value::String(timestamp_now()));
        self.store
            .update(self.table, patch, &[Filter::neq("id", id)])
            .await
    }

    /// Delete a row by ID.
    pub async fn delete(&self, id: &str) -> AppResult<u64> {
        self.store
            .delete(self.table, &[Filter::eq("id", id)])
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::entities::{Cause, LogoSettings};
    use crate::store::MemoryStore;
    use serde_json::json;

    fn row(value: Value) -> Row {
        value.as_object().cloned().unwrap_or_default()
    }

    async fn causes(rows: Vec<Value>) -> (Arc<MemoryStore>, ContentRepository<Cause>) {
        let store = Arc::new(MemoryStore::new());
        store
            .seed(Table::Causes, rows.into_iter().map(row).collect())
            .await;
        let repo = ContentRepository::new(store.clone(), Table::Causes);
        (store, repo)
    }

    #[tokio::test]
    async fn test_find_active_orders_by_sort_order() {
        let (_, repo) = causes(vec![
            json!({"id": "b", "title": "B", "sort_order": 1, "is_active": true}),
            json!({"id": "x", "title": "X", "sort_order": 0, "is_active": false}),
            json!({"id": "a", "title": "A", "sort_order": 0, "is_active": true}),
        ])
        .await;

        let active = repo.find_active(None).await.unwrap();
        let ids: Vec<&str> = active.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);

        assert_eq!(repo.find_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_find_active_honors_limit() {
        let (_, repo) = causes(vec![
            json!({"id": "c", "sort_order": 2, "is_active": true}),
            json!({"id": "a", "sort_order": 0, "is_active": true}),
            json!({"id": "b", "sort_order": 1, "is_active": true}),
        ])
        .await;

        let active = repo.find_active(Some(2)).await.unwrap();
        let ids: Vec<&str> = active.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_malformed_rows_are_skipped() {
        let (_, repo) = causes(vec![
            json!({"id": "ok", "title": "Fine", "sort_order": 0, "is_active": true}),
            json!({"id": "bad", "title": 42, "sort_order": 1, "is_active": true}),
        ])
        .await;

        let active = repo.find_active(None).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "ok");
    }

    #[tokio::test]
    async fn test_max_sort_order() {
        let (_, repo) = causes(vec![]).await;
        assert_eq!(repo.max_sort_order().await.unwrap(), None);

        let (_, repo) = causes(vec![
            json!({"id": "a", "sort_order": 3}),
            json!({"id": "b", "sort_order": 7}),
            json!({"id": "c", "sort_order": null}),
        ])
        .await;
        assert_eq!(repo.max_sort_order().await.unwrap(), Some(7));
    }

    #[tokio::test]
    async fn test_update_keeps_created_at_and_bumps_updated_at() {
        let (store, repo) = causes(vec![json!({
            "id": "a",
            "title": "Old",
            "sort_order": 0,
            "is_active": true,
            "created_at": "2024-01-01T00:00:00Z"
        })])
        .await;

        let fields = row(json!({
            "id": "b",
            "title": "New",
            "created_at": "2030-01-01T00:00:00Z"
        }));
        assert_eq!(repo.update("a", fields).await.unwrap(), 1);

        let stored = &store.rows(Table::Causes).await[0];
        assert_eq!(stored["id"], "a");
        assert_eq!(stored["title"], "New");
        assert_eq!(stored["created_at"], "2024-01-01T00:00:00Z");
        assert!(stored["updated_at"].is_string());
    }

    #[tokio::test]
    async fn test_insert_stamps_created_at() {
        let (store, repo) = causes(vec![]).await;
        let cause = Cause {
            id: "n".to_string(),
            title: "New".to_string(),
            ..Default::default()
        };
        repo.insert(&cause).await.unwrap();

        let stored = &store.rows(Table::Causes).await[0];
        assert!(stored["created_at"].as_str().unwrap().ends_with('Z'));
        assert!(!stored.contains_key("updated_at"));
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let (_, repo) = causes(vec![]).await;
        assert!(matches!(
            repo.get_by_id("missing").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_latest_active_and_deactivate_others() {
        let store = Arc::new(MemoryStore::new());
        store
            .seed(
                Table::LogoSettings,
                vec![
                    row(json!({"id": "old", "logo_url": "o", "is_active": true, "created_at": "2024-01-01T00:00:00Z"})),
                    row(json!({"id": "new", "logo_url": "n", "is_active": true, "created_at": "2025-01-01T00:00:00Z"})),
                ],
            )
            .await;
        let repo: ContentRepository<LogoSettings> =
            ContentRepository::new(store.clone(), Table::LogoSettings);

        let latest = repo.find_latest_active().await.unwrap().unwrap();
        assert_eq!(latest.id, "new");

        assert_eq!(repo.deactivate_others("old").await.unwrap(), 1);
        let latest = repo.find_latest_active().await.unwrap().unwrap();
        assert_eq!(latest.id, "old");
    }
}
