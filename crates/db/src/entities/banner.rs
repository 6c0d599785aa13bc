//! Banner entity, shared by the home, old-age and children carousels.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

/// Horizontal placement of the banner caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerPosition {
    /// Caption on the left.
    Left,
    /// Caption centered.
    #[default]
    Center,
    /// Caption on the right.
    Right,
}

impl BannerPosition {
    /// Accepted values, as stored.
    pub const VALUES: [&'static str; 3] = ["left", "center", "right"];
}

/// A hero banner slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Banner {
    /// Row ID.
    pub id: String,

    /// Slide image (URL or inline data URI).
    pub image_url: String,

    /// Caption heading.
    pub title: Option<String>,

    /// Caption text under the heading.
    pub subtitle: Option<String>,

    /// Caption placement.
    pub position: BannerPosition,

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

impl Default for Banner {
    fn default() -> Self {
        Self {
            id: String::new(),
            image_url: String::new(),
            title: None,
            subtitle: None,
            position: BannerPosition::default(),
            is_active: true,
            sort_order: 0,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Record for Banner {
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
