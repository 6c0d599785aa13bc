//! Request extractors.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Request, rejection::JsonRejection},
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
};
use charity_common::AppError;
use charity_db::store::Row;
use serde_json::Value;

use crate::middleware::AppState;

/// Admin access. Passes every request when no admin token is configured;
/// otherwise requires `Authorization: Bearer <token>`.
#[derive(Debug, Clone, Copy)]
pub struct AdminAccess;

impl FromRequestParts<AppState> for AdminAccess {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        state.auth.verify_bearer(header).inspect_err(|_| {
            tracing::debug!(path = %parts.uri.path(), "Admin request without valid token");
        })?;
        Ok(Self)
    }
}

/// A JSON object body, as submitted by an admin form.
#[derive(Debug, Clone)]
pub struct FormBody(pub Row);

impl<S> FromRequest<S> for FormBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(json_rejection)?;

        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(AppError::BadRequest(
                "Form body must be a JSON object".to_string(),
            )),
        }
    }
}

/// Map a JSON rejection onto the API error shape.
pub fn json_rejection(rejection: JsonRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(rejection.body_text())
    } else {
        AppError::BadRequest(rejection.body_text())
    }
}
