//! Content store contract.
//!
//! Every table is reached through the same four operations: filtered,
//! ordered, limited `select`; `insert`; filtered `update`; filtered `delete`.
//! Rows travel as JSON objects so one contract serves every table.

mod memory;
mod postgres;
mod rest;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use charity_common::{AppError, AppResult};
use serde_json::{Map, Value};

pub use memory::MemoryStore;
pub use postgres::PostgresStore;
pub use rest::RestStore;

/// A stored row.
pub type Row = Map<String, Value>;

/// Shared handle to a content store.
pub type SharedStore = Arc<dyn ContentStore>;

/// Every table the site reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Table {
    /// `banners`.
    Banners,
    /// `oldage_banners`.
    OldageBanners,
    /// `children_banners`.
    ChildrenBanners,
    /// `about_content`.
    AboutContent,
    /// `relief_content`.
    ReliefContent,
    /// `medical_content`.
    MedicalContent,
    /// `oldage_content`.
    OldageContent,
    /// `children_content`.
    ChildrenContent,
    /// `home_gallery`.
    HomeGallery,
    /// `gallery_images`.
    GalleryImages,
    /// `relief_gallery`.
    ReliefGallery,
    /// `medical_gallery`.
    MedicalGallery,
    /// `oldage_gallery`.
    OldageGallery,
    /// `children_gallery`.
    ChildrenGallery,
    /// `causes`.
    Causes,
    /// `projects`.
    Projects,
    /// `certifications`.
    Certifications,
    /// `board_staff`.
    BoardStaff,
    /// `donate_content`.
    DonateContent,
    /// `logo_settings`.
    LogoSettings,
}

impl Table {
    /// All tables, in schema order.
    pub const ALL: [Self; 20] = [
        Self::Banners,
        Self::OldageBanners,
        Self::ChildrenBanners,
        Self::AboutContent,
        Self::ReliefContent,
        Self::MedicalContent,
        Self::OldageContent,
        Self::ChildrenContent,
        Self::HomeGallery,
        Self::GalleryImages,
        Self::ReliefGallery,
        Self::MedicalGallery,
        Self::OldageGallery,
        Self::ChildrenGallery,
        Self::Causes,
        Self::Projects,
        Self::Certifications,
        Self::BoardStaff,
        Self::DonateContent,
        Self::LogoSettings,
    ];

    /// Table name in the store.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Banners => "banners",
            Self::OldageBanners => "oldage_banners",
            Self::ChildrenBanners => "children_banners",
            Self::AboutContent => "about_content",
            Self::ReliefContent => "relief_content",
            Self::MedicalContent => "medical_content",
            Self::OldageContent => "oldage_content",
            Self::ChildrenContent => "children_content",
            Self::HomeGallery => "home_gallery",
            Self::GalleryImages => "gallery_images",
            Self::ReliefGallery => "relief_gallery",
            Self::MedicalGallery => "medical_gallery",
            Self::OldageGallery => "oldage_gallery",
            Self::ChildrenGallery => "children_gallery",
            Self::Causes => "causes",
            Self::Projects => "projects",
            Self::Certifications => "certifications",
            Self::BoardStaff => "board_staff",
            Self::DonateContent => "donate_content",
            Self::LogoSettings => "logo_settings",
        }
    }

    /// Whether rows carry a `sort_order` column.
    ///
    /// Content blocks and singletons are ordered by `created_at` instead.
    #[must_use]
    pub const fn has_sort_order(self) -> bool {
        !matches!(
            self,
            Self::AboutContent
                | Self::ReliefContent
                | Self::MedicalContent
                | Self::OldageContent
                | Self::ChildrenContent
                | Self::DonateContent
                | Self::LogoSettings
        )
    }

    /// Look a table up by its store name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Row filter.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// `column = value`.
    Eq {
        /// Column to compare.
        column: String,
        /// Value the column must equal.
        value: Value,
    },
    /// `column <> value`.
    Neq {
        /// Column to compare.
        column: String,
        /// Value the column must differ from.
        value: Value,
    },
}

impl Filter {
    /// `column = value`.
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Eq {
            column: column.into(),
            value: value.into(),
        }
    }

    /// `column <> value`.
    pub fn neq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Neq {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Column the filter applies to.
    #[must_use]
    pub fn column(&self) -> &str {
        match self {
            Self::Eq { column, .. } | Self::Neq { column, .. } => column,
        }
    }

    /// Value the column is compared against.
    #[must_use]
    pub const fn value(&self) -> &Value {
        match self {
            Self::Eq { value, .. } | Self::Neq { value, .. } => value,
        }
    }

    /// Evaluate the filter against a row. A missing column reads as null.
    #[must_use]
    pub fn matches(&self, row: &Row) -> bool {
        let actual = row.get(self.column()).unwrap_or(&Value::Null);
        match self {
            Self::Eq { value, .. } => actual == value,
            // SQL semantics: null never satisfies `<>`.
            Self::Neq { value, .. } => !actual.is_null() && actual != value,
        }
    }
}

/// Sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Column to sort by.
    pub column: String,
    /// Ascending when true.
    pub ascending: bool,
}

/// A select request against one table.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Table to read.
    pub table: Table,
    /// Columns to return; empty means every column.
    pub columns: Vec<String>,
    /// Filters, combined with AND.
    pub filters: Vec<Filter>,
    /// Sort keys, applied in order.
    pub order: Vec<Order>,
    /// Maximum number of rows.
    pub limit: Option<u64>,
}

impl Query {
    /// Select all columns of a table.
    #[must_use]
    pub const fn select(table: Table) -> Self {
        Self {
            table,
            columns: Vec::new(),
            filters: Vec::new(),
            order: Vec::new(),
            limit: None,
        }
    }

    /// Return only `columns` instead of whole rows.
    #[must_use]
    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(ToString::to_string).collect();
        self
    }

    /// Keep only the selected columns of `row`. No-op when every column
    /// was asked for.
    #[must_use]
    pub fn project(&self, row: Row) -> Row {
        if self.columns.is_empty() {
            return row;
        }
        row.into_iter()
            .filter(|(column, _)| self.columns.iter().any(|c| c == column))
            .collect()
    }

    /// Add an equality filter.
    #[must_use]
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::eq(column, value));
        self
    }

    /// Add an inequality filter.
    #[must_use]
    pub fn neq(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::neq(column, value));
        self
    }

    /// Add a sort key.
    #[must_use]
    pub fn order(mut self, column: impl Into<String>, ascending: bool) -> Self {
        self.order.push(Order {
            column: column.into(),
            ascending,
        });
        self
    }

    /// Limit the number of rows.
    #[must_use]
    pub const fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Table-scoped access to persisted content.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Short backend name for logs.
    fn backend_name(&self) -> &'static str;

    /// Read rows.
    async fn select(&self, query: &Query) -> AppResult<Vec<Row>>;

    /// Insert one or more rows.
    async fn insert(&self, table: Table, rows: Vec<Row>) -> AppResult<()>;

    /// Apply a partial row to every row matching the filters.
    async fn update(&self, table: Table, patch: Row, filters: &[Filter]) -> AppResult<u64>;

    /// Delete every row matching the filters.
    async fn delete(&self, table: Table, filters: &[Filter]) -> AppResult<u64>;
}

/// Writes without a filter would touch the whole table; no screen does that.
pub(crate) fn require_filters(table: Table, filters: &[Filter]) -> AppResult<()> {
    if filters.is_empty() {
        return Err(AppError::BadRequest(format!(
            "refusing unfiltered write to {table}"
        )));
    }
    Ok(())
}
