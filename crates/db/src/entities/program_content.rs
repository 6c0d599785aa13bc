//! Program content entity, shared by the relief, medical, old-age and
//! children program pages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

/// A service card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    /// Icon name understood by the front end.
    pub icon: String,
    /// Heading.
    pub title: String,
    /// Body text.
    pub description: String,
}

/// A headline figure, e.g. "5000+" / "Families helped".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistic {
    /// Display text, not necessarily numeric.
    pub number: String,
    /// Caption under the figure.
    pub label: String,
}

/// A health tip card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthTip {
    /// Heading.
    pub title: String,
    /// Body text.
    pub description: String,
    /// Icon name understood by the front end.
    pub icon: String,
}

/// Program page content.
///
/// The embedded lists have no identity of their own and are replaced
/// wholesale on every save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramContent {
    /// Row ID.
    pub id: String,
    /// Heading.
    pub title: String,
    /// Line under the heading.
    pub subtitle: Option<String>,
    /// Body text.
    pub description: String,
    /// Image (URL or inline data URI).
    pub image_url: String,
    /// Service cards.
    pub services: Vec<Service>,
    /// Headline figures.
    pub statistics: Vec<Statistic>,
    /// Health tip cards.
    pub health_tips: Vec<HealthTip>,
    /// Whether the row is shown on the site.
    pub is_active: bool,

    /// When the row was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the row was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for ProgramContent {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            subtitle: None,
            description: String::new(),
            image_url: String::new(),
            services: Vec::new(),
            statistics: Vec::new(),
            health_tips: Vec::new(),
            is_active: true,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Record for ProgramContent {
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
