//! About section content.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

/// Text block shown on the home page and the About page.
///
/// Only the most recent active row is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutContent {
    /// Row ID.
    pub id: String,
    /// Section heading.
    pub title: String,
    /// Line under the heading.
    pub subtitle: Option<String>,
    /// Body text.
    pub description: String,
    /// Mission statement.
    pub mission: Option<String>,
    /// Vision statement.
    pub vision: Option<String>,
    /// Section image (URL or inline data URI).
    pub image_url: String,
    /// Whether the row is shown on the site.
    pub is_active: bool,

    /// When the row was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the row was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            subtitle: None,
            description: String::new(),
            mission: None,
            vision: None,
            image_url: String::new(),
            is_active: true,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Record for AboutContent {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}
