//! Project entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

/// Where a project stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Work in progress.
    #[default]
    Ongoing,
    /// Finished.
    Completed,
    /// Not started yet.
    Planning,
}

impl ProjectStatus {
    /// Accepted values, as stored.
    pub const VALUES: [&'static str; 3] = ["ongoing", "completed", "planning"];

    /// All statuses, in display order.
    pub const ALL: [Self; 3] = [Self::Ongoing, Self::Completed, Self::Planning];

    /// Stored value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
            Self::Planning => "planning",
        }
    }

    /// Parse a stored value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// A project listed on the Projects page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Row ID.
    pub id: String,
    /// Project name.
    pub title: String,
    /// Body text.
    pub description: String,
    /// Image (URL or inline data URI).
    pub image_url: String,

    /// Free-text place name.
    pub location: Option<String>,

    /// Where the project stands.
    pub project_status: ProjectStatus,
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

impl Default for Project {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            description: String::new(),
            image_url: String::new(),
            location: None,
            project_status: ProjectStatus::default(),
            is_active: true,
            sort_order: 0,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Record for Project {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_values_match_serde() {
        for status in ProjectStatus::ALL {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(json, status.as_str());
            assert_eq!(ProjectStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ProjectStatus::parse("cancelled"), None);
    }
}
