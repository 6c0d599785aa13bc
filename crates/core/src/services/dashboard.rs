//! Admin dashboard counts.

use charity_db::store::{Query, SharedStore};
use futures::future::join_all;
use serde::Serialize;
use serde_json::Value;

use super::screens::{self, Screen};

/// Row counts for one admin screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenSummary {
    pub screen: Screen,
    /// `false` when the table could not be read; counts are then zero.
    pub available: bool,
    pub total: usize,
    pub active: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub screens: Vec<ScreenSummary>,
}

#[derive(Clone)]
pub struct DashboardService {
    store: SharedStore,
}

impl DashboardService {
    #[must_use]
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// One read per screen table. A failed read marks that screen
    /// unavailable without failing the rest.
    pub async fn summary(&self) -> Dashboard {
        let screens = join_all(screens::ALL.iter().map(|screen| self.summarize(*screen))).await;
        Dashboard { screens }
    }

    async fn summarize(&self, screen: Screen) -> ScreenSummary {
        let query = Query::select(screen.table).columns(&["id", "is_active"]);
        match self.store.select(&query).await {
            Ok(rows) => ScreenSummary {
                screen,
                available: true,
                total: rows.len(),
                active: rows
                    .iter()
                    .filter(|r| r.get("is_active") == Some(&Value::Bool(true)))
                    .count(),
            },
            Err(e) => {
                tracing::warn!(screen = screen.slug, error = %e, "Dashboard read failed");
                ScreenSummary {
                    screen,
                    available: false,
                    total: 0,
                    active: 0,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use std::time::Duration;

    use charity_db::store::{MemoryStore, RestStore, Table};
    use charity_db::test_utils::seeded_store;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_counts_per_screen() {
        let store = seeded_store(vec![(
            Table::Causes,
            vec![
                json!({"id": "a", "is_active": true}),
                json!({"id": "b", "is_active": false}),
                json!({"id": "c", "is_active": true}),
            ],
        )])
        .await;

        let dashboard = DashboardService::new(store).summary().await;

        assert_eq!(dashboard.screens.len(), screens::ALL.len());
        let causes = dashboard
            .screens
            .iter()
            .find(|s| s.screen.slug == "causes")
            .unwrap();
        assert!(causes.available);
        assert_eq!(causes.total, 3);
        assert_eq!(causes.active, 2);
    }

    #[tokio::test]
    async fn test_read_failures_mark_unavailable() {
        let store = Arc::new(MemoryStore::new());
        store.set_fail_reads(true);

        let dashboard = DashboardService::new(store).summary().await;

        assert!(dashboard.screens.iter().all(|s| !s.available && s.total == 0));
    }

    #[tokio::test]
    async fn test_counts_read_only_id_and_active_columns() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/logo_settings"))
            .and(query_param("select", "id,is_active"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "l1", "is_active": true},
                {"id": "l2", "is_active": false}
            ])))
            .expect(1)
            .mount(&server)
            .await;
        // Any other table answers with no rows, but only for the slim select.
        Mock::given(method("GET"))
            .and(query_param("select", "id,is_active"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let store = RestStore::new(&server.uri(), "anon", Duration::from_secs(5)).unwrap();
        let dashboard = DashboardService::new(Arc::new(store)).summary().await;

        assert!(dashboard.screens.iter().all(|s| s.available));
        let logos = dashboard
            .screens
            .iter()
            .find(|s| s.screen.slug == "logos")
            .unwrap();
        assert_eq!(logos.total, 2);
        assert_eq!(logos.active, 1);
    }
}
