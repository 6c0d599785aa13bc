//! Gallery image entity, shared by every gallery table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

/// A gallery photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryImage {
    /// Row ID.
    pub id: String,
    /// Image (URL or inline data URI).
    pub image_url: String,
    /// Text under the image.
    pub caption: Option<String>,
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

impl Default for GalleryImage {
    fn default() -> Self {
        Self {
            id: String::new(),
            image_url: String::new(),
            caption: None,
            is_active: true,
            sort_order: 0,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Record for GalleryImage {
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
