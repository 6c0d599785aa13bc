//! Site logo entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

/// A logo. At most one row is meant to be active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoSettings {
    /// Row ID.
    pub id: String,
    /// Logo image (URL or inline data URI).
    pub logo_url: String,
    /// Alternative text for the logo.
    pub alt_text: Option<String>,
    /// Whether the row is shown on the site.
    pub is_active: bool,

    /// When the row was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the row was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for LogoSettings {
    fn default() -> Self {
        Self {
            id: String::new(),
            logo_url: String::new(),
            alt_text: None,
            // New logos stay hidden until explicitly activated.
            is_active: false,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Record for LogoSettings {
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
