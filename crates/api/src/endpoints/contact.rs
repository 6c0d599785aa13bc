//! Contact form endpoint.

use axum::{Json, Router, extract::State, routing::post};
use charity_common::AppResult;
use charity_core::{ContactAck, ContactInput};

use crate::{middleware::AppState, response::ApiResponse};

/// Submit the contact form.
async fn submit(
    State(state): State<AppState>,
    Json(input): Json<ContactInput>,
) -> AppResult<ApiResponse<ContactAck>> {
    let ack = state.contact.submit(&input)?;
    Ok(ApiResponse::ok(ack))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(submit))
}
