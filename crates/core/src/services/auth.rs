//! Admin sign-in.
//!
//! The panel has no accounts of its own. With no token configured, login
//! accepts anything and admin routes are open. With a token configured, the
//! login password must equal it and admin requests must carry it as a
//! bearer token.

use charity_common::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Where a successful login lands.
pub const DASHBOARD_PATH: &str = "/admin/dashboard";

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginInput {
    #[validate(length(min = 1, max = 200))]
    pub email: String,

    #[validate(length(min = 1, max = 200))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginOutcome {
    pub redirect: &'static str,
    /// Token to send on admin requests, when one is required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(Clone)]
pub struct AuthService {
    api_token: Option<String>,
}

impl AuthService {
    #[must_use]
    pub fn new(api_token: Option<String>) -> Self {
        Self {
            api_token: api_token.filter(|t| !t.trim().is_empty()),
        }
    }

    /// Whether admin routes require a bearer token.
    #[must_use]
    pub const fn is_enforced(&self) -> bool {
        self.api_token.is_some()
    }

    pub fn login(&self, input: &LoginInput) -> AppResult<LoginOutcome> {
        input.validate()?;

        if let Some(token) = &self.api_token {
            if !constant_time_eq(input.password.as_bytes(), token.as_bytes()) {
                tracing::warn!(email = %input.email, "Admin login rejected");
                return Err(AppError::Unauthorized);
            }
        }

        tracing::info!(email = %input.email, "Admin login");
        Ok(LoginOutcome {
            redirect: DASHBOARD_PATH,
            token: self.api_token.clone(),
        })
    }

    /// Check an `Authorization` header value.
    pub fn verify_bearer(&self, header: Option<&str>) -> AppResult<()> {
        let Some(expected) = &self.api_token else {
            return Ok(());
        };

        let provided = header
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::trim)
            .ok_or(AppError::Unauthorized)?;

        if constant_time_eq(provided.as_bytes(), expected.as_bytes()) {
            Ok(())
        } else {
            Err(AppError::Unauthorized)
        }
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(password: &str) -> LoginInput {
        LoginInput {
            email: "admin@example.org".to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_open_panel_accepts_any_login() {
        let auth = AuthService::new(None);
        let outcome = auth.login(&login("anything")).unwrap();
        assert_eq!(outcome.redirect, DASHBOARD_PATH);
        assert!(outcome.token.is_none());
        assert!(auth.verify_bearer(None).is_ok());
    }

    #[test]
    fn test_blank_token_counts_as_unset() {
        assert!(!AuthService::new(Some("  ".to_string())).is_enforced());
    }

    #[test]
    fn test_token_checks() {
        let auth = AuthService::new(Some("s3cret".to_string()));

        assert!(matches!(auth.login(&login("wrong")), Err(AppError::Unauthorized)));
        assert_eq!(auth.login(&login("s3cret")).unwrap().token.as_deref(), Some("s3cret"));

        assert!(auth.verify_bearer(Some("Bearer s3cret")).is_ok());
        assert!(auth.verify_bearer(Some("Bearer nope")).is_err());
        assert!(auth.verify_bearer(Some("s3cret")).is_err());
        assert!(auth.verify_bearer(None).is_err());
    }
}
