//! Content provider for public pages.
//!
//! Every public collection is read the same way: fetch the active rows, and
//! if the read fails or comes back empty, show the built-in default instead.
//! Public pages never see a store error.

use charity_db::entities::Record;
use charity_db::repositories::ContentRepository;
use charity_db::store::{SharedStore, Table};

/// Reads public content with fallback to defaults.
#[derive(Clone)]
pub struct ContentProvider {
    store: SharedStore,
}

impl ContentProvider {
    /// Create a provider over `store`.
    #[must_use]
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Up to `limit` active rows of a list table in display order, or
    /// `default()` when there are none.
    pub async fn collection<T, F>(&self, table: Table, limit: Option<u64>, default: F) -> Vec<T>
    where
        T: Record,
        F: FnOnce() -> Vec<T>,
    {
        let repo: ContentRepository<T> = ContentRepository::new(self.store.clone(), table);
        match repo.find_active(limit).await {
            Ok(rows) if !rows.is_empty() => rows,
            Ok(_) => {
                tracing::debug!(table = %table, "No rows, using defaults");
                default()
            }
            Err(e) => {
                tracing::warn!(table = %table, error = %e, "Content read failed, using defaults");
                default()
            }
        }
    }

    /// Most recent active row of a single-record table, or `default()`.
    pub async fn latest<T, F>(&self, table: Table, default: F) -> T
    where
        T: Record,
        F: FnOnce() -> T,
    {
        let repo: ContentRepository<T> = ContentRepository::new(self.store.clone(), table);
        match repo.find_latest_active().await {
            Ok(Some(row)) => row,
            Ok(None) => {
                tracing::debug!(table = %table, "No rows, using defaults");
                default()
            }
            Err(e) => {
                tracing::warn!(table = %table, error = %e, "Content read failed, using defaults");
                default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use charity_db::entities::{AboutContent, Cause};
    use charity_db::store::{MemoryStore, RestStore};
    use charity_db::test_utils::seeded_store;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn default_causes() -> Vec<Cause> {
        vec![Cause {
            title: "Default".to_string(),
            ..Default::default()
        }]
    }

    #[tokio::test]
    async fn test_zero_rows_yield_default() {
        let provider = ContentProvider::new(Arc::new(MemoryStore::new()));
        let causes = provider.collection(Table::Causes, None, default_causes).await;
        assert_eq!(causes, default_causes());
    }

    #[tokio::test]
    async fn test_read_failure_yields_default() {
        let store = seeded_store(vec![(
            Table::Causes,
            vec![json!({"id": "a", "title": "Stored"})],
        )])
        .await;
        store.set_fail_reads(true);
        let provider = ContentProvider::new(store);

        let causes = provider.collection(Table::Causes, None, default_causes).await;
        assert_eq!(causes, default_causes());
    }

    #[tokio::test]
    async fn test_rows_replace_default_and_skip_inactive() {
        let store = seeded_store(vec![(
            Table::Causes,
            vec![
                json!({"id": "a", "title": "Second", "sort_order": 2, "is_active": true}),
                json!({"id": "b", "title": "First", "sort_order": 1, "is_active": true}),
                json!({"id": "c", "title": "Hidden", "sort_order": 0, "is_active": false}),
            ],
        )])
        .await;
        let provider = ContentProvider::new(store);

        let causes: Vec<Cause> = provider.collection(Table::Causes, None, Vec::new).await;
        let titles: Vec<&str> = causes.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn test_limit_caps_rows() {
        let store = seeded_store(vec![(
            Table::Causes,
            (0..5)
                .map(|i| json!({"id": format!("c{i}"), "title": format!("T{i}"), "sort_order": i, "is_active": true}))
                .collect::<Vec<_>>(),
        )])
        .await;
        let provider = ContentProvider::new(store);

        let causes: Vec<Cause> = provider.collection(Table::Causes, Some(3), Vec::new).await;
        let ids: Vec<&str> = causes.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c0", "c1", "c2"]);
    }

    #[tokio::test]
    async fn test_limit_is_sent_to_store_and_empty_result_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/causes"))
            .and(query_param("is_active", "eq.true"))
            .and(query_param("limit", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let store = RestStore::new(&server.uri(), "anon", Duration::from_secs(5)).unwrap();
        let provider = ContentProvider::new(Arc::new(store));

        let causes = provider.collection(Table::Causes, Some(3), default_causes).await;
        assert_eq!(causes, default_causes());
    }

    #[tokio::test]
    async fn test_latest_picks_newest_active_row() {
        let store = seeded_store(vec![(
            Table::AboutContent,
            vec![
                json!({"id": "old", "title": "Old", "is_active": true, "created_at": "2024-01-01T00:00:00Z"}),
                json!({"id": "new", "title": "New", "is_active": true, "created_at": "2024-06-01T00:00:00Z"}),
                json!({"id": "off", "title": "Off", "created_at": "2024-09-01T00:00:00Z", "is_active": false}),
            ],
        )])
        .await;
        let provider = ContentProvider::new(store);

        let about: AboutContent = provider.latest(Table::AboutContent, Default::default).await;
        assert_eq!(about.title, "New");
    }
}
