//! ID and timestamp utilities.

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

/// ID generator for content rows.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    _private: (),
}

impl IdGenerator {
    /// Create a new ID generator.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Generate a new random UUID v4, the id format the hosted store uses.
    #[must_use]
    pub fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Current time as an RFC 3339 UTC string with microsecond precision.
///
/// Fixed precision keeps lexicographic order equal to chronological order.
#[must_use]
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
