//! Board and staff member entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

/// A board or staff member card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardStaff {
    /// Row ID.
    pub id: String,
    /// Member name.
    pub name: String,

    /// Role, e.g. "Trustee".
    pub designation: String,

    /// Short note under the name.
    pub description: Option<String>,

    /// Portrait.
    pub image_url: String,

    /// Whether the row is shown on the site.
    pub is_active: bool,
    /// Display order, ascending.
    pub sort_order: i32,

    /// When the row was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the row was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for BoardStaff {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            designation: String::new(),
            description: None,
            image_url: String::new(),
            is_active: true,
            sort_order: 0,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Record for BoardStaff {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn sort_order(&self) -> Option<i32> {
        Some(self.sort_order)
    }

    fn set_sort_order(&mut self, sort_order: i32) {
        self.sort_order = sort_order;
    }
}
