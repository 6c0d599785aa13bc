//! Certification entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Record, is_present};

/// A registration or accreditation certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    /// Row ID.
    pub id: String,
    /// Certificate title.
    pub certificate_name: String,
    /// What the certificate covers.
    pub description: Option<String>,

    /// Scan of the certificate.
    pub image_url: String,

    /// Downloadable copy. Blank means none.
    pub pdf_url: Option<String>,

    /// Issuing authority.
    pub issued_by: Option<String>,

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

impl Certification {
    /// The PDF link, if one is set.
    #[must_use]
    pub fn pdf_link(&self) -> Option<&str> {
        let url = self.pdf_url.as_deref();
        if is_present(url) { url.map(str::trim) } else { None }
    }
}

impl Default for Certification {
    fn default() -> Self {
        Self {
            id: String::new(),
            certificate_name: String::new(),
            description: None,
            image_url: String::new(),
            pdf_url: None,
            issued_by: None,
            is_active: true,
            sort_order: 0,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Record for Certification {
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
