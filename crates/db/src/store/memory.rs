//! In-process content store.

use std::cmp::Ordering as CmpOrdering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use charity_common::{AppError, AppResult, IdGenerator, timestamp_now};
use serde_json::Value;
use tokio::sync::RwLock;

use super::{ContentStore, Filter, Order, Query, Row, Table, require_filters};

/// Content store backed by in-memory tables.
///
/// Fills `id` and `created_at` on insert when absent, like the hosted
/// store's column defaults. Supports injected failures for tests.
pub struct MemoryStore {
    tables: RwLock<HashMap<Table, Vec<Row>>>,
    id_gen: IdGenerator,
    fail_reads: AtomicBool,
    /// Writes allowed before the next injected failure; `usize::MAX` disables.
    writes_before_failure: AtomicUsize,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
            id_gen: IdGenerator::new(),
            fail_reads: AtomicBool::new(false),
            writes_before_failure: AtomicUsize::new(usize::MAX),
        }
    }

    /// Replace the contents of a table.
    pub async fn seed(&self, table: Table, rows: Vec<Row>) {
        self.tables.write().await.insert(table, rows);
    }

    /// Snapshot of a table in insertion order.
    pub async fn rows(&self, table: Table) -> Vec<Row> {
        self.tables
            .read()
            .await
            .get(&table)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of rows in a table.
    pub async fn count(&self, table: Table) -> usize {
        self.tables.read().await.get(&table).map_or(0, Vec::len)
    }

    /// Make every subsequent select fail until reset.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Let `successful_writes` more writes through, then fail exactly one.
    pub fn fail_write_after(&self, successful_writes: usize) {
        self.writes_before_failure
            .store(successful_writes, Ordering::SeqCst);
    }

    fn take_write_permit(&self, table: Table) -> AppResult<()> {
        let previous = self.writes_before_failure.fetch_update(
            Ordering::SeqCst,
            Ordering::SeqCst,
            |remaining| match remaining {
                usize::MAX => None,
                0 => Some(usize::MAX),
                n => Some(n - 1),
            },
        );
        if previous == Ok(0) {
            return Err(AppError::Database(format!(
                "injected write failure on {table}"
            )));
        }
        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn select(&self, query: &Query) -> AppResult<Vec<Row>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(AppError::Database(format!(
                "injected read failure on {}",
                query.table
            )));
        }

        let tables = self.tables.read().await;
        let mut rows: Vec<Row> = tables
            .get(&query.table)
            .map(|rows| {
                rows.iter()
                    .filter(|row| query.filters.iter().all(|f| f.matches(row)))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        // Stable sort keeps insertion order between equal keys.
        rows.sort_by(|a, b| compare_rows(a, b, &query.order));

        if let Some(limit) = query.limit {
            rows.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }
        Ok(rows.into_iter().map(|row| query.project(row)).collect())
    }

    async fn insert(&self, table: Table, rows: Vec<Row>) -> AppResult<()> {
        self.take_write_permit(table)?;

        let mut tables = self.tables.write().await;
        let stored = tables.entry(table).or_default();
        for mut row in rows {
            if !row.get("id").is_some_and(Value::is_string) {
                row.insert("id".to_string(), Value::String(self.id_gen.generate()));
            }
            if !row.get("created_at").is_some_and(Value::is_string) {
                row.insert("created_at".to_string(), Value::String(timestamp_now()));
            }
            stored.push(row);
        }
        Ok(())
    }

    async fn update(&self, table: Table, patch: Row, filters: &[Filter]) -> AppResult<u64> {
        require_filters(table, filters)?;
        self.take_write_permit(table)?;

        let mut tables = self.tables.write().await;
        let mut affected = 0;
        if let Some(rows) = tables.get_mut(&table) {
            for row in rows
                .iter_mut()
                .filter(|row| filters.iter().all(|f| f.matches(row)))
            {
                for (column, value) in &patch {
                    row.insert(column.clone(), value.clone());
                }
                affected += 1;
            }
        }
        Ok(affected)
    }

    async fn delete(&self, table: Table, filters: &[Filter]) -> AppResult<u64> {
        require_filters(table, filters)?;
        self.take_write_permit(table)?;

        let mut tables = self.tables.write().await;
        let Some(rows) = tables.get_mut(&table) else {
            return Ok(0);
        };
        let before = rows.len();
        rows.retain(|row| !filters.iter().all(|f| f.matches(row)));
        Ok((before - rows.len()) as u64)
    }
}

fn compare_rows(a: &Row, b: &Row, order: &[Order]) -> CmpOrdering {
    for key in order {
        let left = a.get(&key.column).unwrap_or(&Value::Null);
        let right = b.get(&key.column).unwrap_or(&Value::Null);
        let ordering = compare_values(left, right);
        let ordering = if key.ascending {
            ordering
        } else {
            ordering.reverse()
        };
        if ordering != CmpOrdering::Equal {
            return ordering;
        }
    }
    CmpOrdering::Equal
}

/// Postgres-like ordering: nulls sort after every value when ascending.
fn compare_values(a: &Value, b: &Value) -> CmpOrdering {
    match (a, b) {
        (Value::Null, Value::Null) => CmpOrdering::Equal,
        (Value::Null, _) => CmpOrdering::Greater,
        (_, Value::Null) => CmpOrdering::Less,
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(CmpOrdering::Equal),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => a.to_string().cmp(&b.to_string()),
    }
}
