//! Hosted content store speaking the PostgREST dialect.

use std::time::Duration;

use async_trait::async_trait;
use charity_common::{AppError, AppResult};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde_json::Value;
use url::Url;

use super::{ContentStore, Filter, Order, Query, Row, Table, require_filters};

/// Content store reached over the hosted backend's REST endpoint.
#[derive(Clone)]
pub struct RestStore {
    client: Client,
    base_url: Url,
    anon_key: String,
}

impl RestStore {
    /// Create a REST store for `<base_url>/rest/v1`.
    pub fn new(base_url: &str, anon_key: &str, timeout: Duration) -> AppResult<Self> {
        // `Url::join` replaces the last segment unless the base ends in '/'.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized)
            .map_err(|e| AppError::Config(format!("invalid store url: {e}")))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            anon_key: anon_key.to_string(),
        })
    }

    fn table_url(&self, table: Table) -> AppResult<Url> {
        self.base_url
            .join(&format!("rest/v1/{}", table.name()))
            .map_err(|e| AppError::Internal(format!("invalid table url: {e}")))
    }

    fn request(&self, method: Method, table: Table) -> AppResult<RequestBuilder> {
        Ok(self
            .client
            .request(method, self.table_url(table)?)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key))
    }

    async fn check(table: Table, response: Response) -> AppResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(AppError::ExternalService(format!(
            "{table}: {status}: {body}"
        )))
    }

    async fn affected(table: Table, response: Response) -> AppResult<u64> {
        let rows: Vec<Value> = Self::check(table, response).await?.json().await?;
        Ok(rows.len() as u64)
    }
}

/// Render a filter value the way PostgREST expects it in a query string.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render a filter as a `(column, operator.value)` query pair.
pub(crate) fn filter_param(filter: &Filter) -> (String, String) {
    let rendered = match filter {
        Filter::Eq { value, .. } if value.is_null() => "is.null".to_string(),
        Filter::Neq { value, .. } if value.is_null() => "not.is.null".to_string(),
        Filter::Eq { value, .. } => format!("eq.{}", render_value(value)),
        Filter::Neq { value, .. } => format!("neq.{}", render_value(value)),
    };
    (filter.column().to_string(), rendered)
}

fn order_param(order: &[Order]) -> Option<(String, String)> {
    if order.is_empty() {
        return None;
    }
    let keys = order
        .iter()
        .map(|o| {
            format!(
                "{}.{}",
                o.column,
                if o.ascending { "asc" } else { "desc" }
            )
        })
        .collect::<Vec<_>>()
        .join(",");
    Some(("order".to_string(), keys))
}

/// Query-string pairs for a select.
pub(crate) fn select_params(query: &Query) -> Vec<(String, String)> {
    let columns = if query.columns.is_empty() {
        "*".to_string()
    } else {
        query.columns.join(",")
    };
    let mut params = vec![("select".to_string(), columns)];
    params.extend(query.filters.iter().map(filter_param));
    params.extend(order_param(&query.order));
    if let Some(limit) = query.limit {
        params.push(("limit".to_string(), limit.to_string()));
    }
    params
}

#[async_trait]
impl ContentStore for RestStore {
    fn backend_name(&self) -> &'static str {
        "rest"
    }

    async fn select(&self, query: &Query) -> AppResult<Vec<Row>> {
        tracing::debug!(table = %query.table, "REST select");
        let response = self
            .request(Method::GET, query.table)?
            .query(&select_params(query))
            .send()
            .await?;
        let rows: Vec<Row> = Self::check(query.table, response).await?.json().await?;
        Ok(rows)
    }

    async fn insert(&self, table: Table, rows: Vec<Row>) -> AppResult<()> {
        tracing::debug!(table = %table, count = rows.len(), "REST insert");
        let response = self
            .request(Method::POST, table)?
            .header("Prefer", "return=minimal")
            .json(&rows)
            .send()
            .await?;
        Self::check(table, response).await?;
        Ok(())
    }

    async fn update(&self, table: Table, patch: Row, filters: &[Filter]) -> AppResult<u64> {
        require_filters(table, filters)?;
        tracing::debug!(table = %table, "REST update");
        let params: Vec<(String, String)> = filters.iter().map(filter_param).collect();
        let response = self
            .request(Method::PATCH, table)?
            .header("Prefer", "return=representation")
            .query(&params)
            .json(&patch)
            .send()
            .await?;
        Self::affected(table, response).await
    }

    async fn delete(&self, table: Table, filters: &[Filter]) -> AppResult<u64> {
        require_filters(table, filters)?;
        tracing::debug!(table = %table, "REST delete");
        let params: Vec<(String, String)> = filters.iter().map(filter_param).collect();
        let response = self
            .request(Method::DELETE, table)?
            .header("Prefer", "return=representation")
            .query(&params)
            .send()
            .await?;
        Self::affected(table, response).await
    }
}
