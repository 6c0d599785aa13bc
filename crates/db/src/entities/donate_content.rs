//! Donation page content.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

/// A payment QR code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QrCode {
    /// Caption, e.g. "UPI".
    pub label: String,
    /// QR code image (URL or inline data URI).
    pub image_url: String,
}

/// Bank transfer details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankAccount {
    /// Bank name.
    pub bank_name: String,
    /// Account holder.
    pub account_name: String,
    /// Account number.
    pub account_number: String,
    /// IFSC code of the branch.
    pub ifsc_code: String,
    /// Branch name.
    pub branch: Option<String>,
}

/// Donation instructions. Only the most recent active row is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonateContent {
    /// Row ID.
    pub id: String,
    /// Page heading.
    pub title: String,
    /// Donation appeal text.
    pub description: String,
    /// Payment QR codes.
    pub qr_codes: Vec<QrCode>,
    /// Accounts for bank transfers.
    pub bank_accounts: Vec<BankAccount>,
    /// Whether the row is shown on the site.
    pub is_active: bool,

    /// When the row was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the row was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for DonateContent {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            description: String::new(),
            qr_codes: Vec::new(),
            bank_accounts: Vec::new(),
            is_active: true,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Record for DonateContent {
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
