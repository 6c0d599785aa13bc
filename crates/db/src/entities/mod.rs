//! Content entities.
//!
//! Rows travel through the store as JSON objects; these are their typed shapes.
//! Several tables share a shape (three banner tables, four program-content
//! tables, six galleries), so the table is chosen by the caller, not the type.

pub mod about_content;
pub mod banner;
pub mod board_staff;
pub mod cause;
pub mod certification;
pub mod donate_content;
pub mod gallery_image;
pub mod logo_settings;
pub mod program_content;
pub mod project;

pub use about_content::AboutContent;
pub use banner::{Banner, BannerPosition};
pub use board_staff::BoardStaff;
pub use cause::Cause;
pub use certification::Certification;
pub use donate_content::{BankAccount, DonateContent, QrCode};
pub use gallery_image::GalleryImage;
pub use logo_settings::LogoSettings;
pub use program_content::{HealthTip, ProgramContent, Service, Statistic};
pub use project::{Project, ProjectStatus};

use charity_common::{AppError, AppResult};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::store::Row;

/// Common surface of every stored entity.
pub trait Record: Serialize + DeserializeOwned + Clone + Default + Send + Sync + 'static {
    /// Row id.
    fn id(&self) -> &str;

    /// Assign the row id.
    fn set_id(&mut self, id: String);

    /// Whether the row is shown on public pages.
    fn is_active(&self) -> bool;

    /// Display order, for shapes that carry one.
    fn sort_order(&self) -> Option<i32> {
        None
    }

    /// Assign the display order. Ignored by shapes without one.
    fn set_sort_order(&mut self, _sort_order: i32) {}

    /// Serialize into a store row.
    fn to_row(&self) -> AppResult<Row> {
        match serde_json::to_value(self)? {
            serde_json::Value::Object(map) => Ok(map),
            other => Err(AppError::Internal(format!(
                "entity serialized to a non-object: {other}"
            ))),
        }
    }

    /// Decode a store row.
    fn from_row(row: Row) -> Result<Self, serde_json::Error> {
        serde_json::from_value(serde_json::Value::Object(row))
    }
}

/// `true` when an optional text column holds something other than whitespace.
#[must_use]
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_round_trip_keeps_embedded_arrays() {
        let content = ProgramContent {
            id: "p1".to_string(),
            title: "Medical Care".to_string(),
            services: vec![Service {
                icon: "heart".to_string(),
                title: "Checkups".to_string(),
                description: "Free monthly checkups".to_string(),
            }],
            ..Default::default()
        };

        let row = content.to_row().unwrap();
        assert_eq!(row["services"][0]["icon"], "heart");

        let decoded = ProgramContent::from_row(row).unwrap();
        assert_eq!(decoded, content);
    }

    #[test]
    fn test_missing_columns_take_defaults() {
        let row = json!({"id": "b1", "image_url": "https://img/1.jpg"})
            .as_object()
            .cloned()
            .unwrap();

        let banner = Banner::from_row(row).unwrap();
        assert_eq!(banner.position, BannerPosition::Center);
        assert!(banner.is_active);
        assert_eq!(banner.sort_order, 0);
    }

    #[test]
    fn test_unset_timestamps_are_not_serialized() {
        let row = Cause::default().to_row().unwrap();
        assert!(!row.contains_key("created_at"));
        assert!(!row.contains_key("updated_at"));
    }

    #[test]
    fn test_is_present() {
        assert!(is_present(Some("https://x/a.pdf")));
        assert!(!is_present(Some("   ")));
        assert!(!is_present(None));
    }
}
