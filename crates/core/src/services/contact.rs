//! Contact form.

use charity_common::AppResult;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A contact form submission.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactInput {
    #[validate(length(max = 100), custom(function = "not_blank"))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(max = 200))]
    #[serde(default)]
    pub subject: Option<String>,

    #[validate(length(max = 5000), custom(function = "not_blank"))]
    pub message: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactAck {
    pub received: bool,
    pub message: &'static str,
}

/// Accepts contact submissions. Nothing is stored; each submission is logged.
#[derive(Debug, Clone, Default)]
pub struct ContactService;

impl ContactService {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    pub fn submit(&self, input: &ContactInput) -> AppResult<ContactAck> {
        input.validate()?;

        tracing::info!(
            name = %input.name.trim(),
            email = %input.email,
            subject = input.subject.as_deref().unwrap_or(""),
            length = input.message.len(),
            "Contact form submitted"
        );

        Ok(ContactAck {
            received: true,
            message: "Thank you for reaching out. We will get back to you soon.",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charity_common::AppError;

    fn input() -> ContactInput {
        ContactInput {
            name: "Priya".to_string(),
            email: "priya@example.com".to_string(),
            subject: None,
            message: "I'd like to volunteer.".to_string(),
        }
    }

    #[test]
    fn test_valid_submission_is_acknowledged() {
        let ack = ContactService::new().submit(&input()).unwrap();
        assert!(ack.received);
    }

    #[test]
    fn test_rejects_bad_email_and_blank_message() {
        let service = ContactService::new();

        let mut bad_email = input();
        bad_email.email = "not-an-email".to_string();
        assert!(matches!(service.submit(&bad_email), Err(AppError::Validation(_))));

        let mut blank = input();
        blank.message = "   ".to_string();
        assert!(matches!(service.submit(&blank), Err(AppError::Validation(_))));
    }
}
