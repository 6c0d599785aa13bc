//! Admin endpoints outside the per-screen CRUD routes.

use axum::{
    Json, Router,
    extract::{Multipart, Query, State},
    routing::{get, post},
};
use charity_common::{AppError, AppResult};
use charity_core::{Dashboard, LoginInput, LoginOutcome, Screen, screens};
use charity_db::store::Row;
use serde::{Deserialize, Serialize};

use crate::{extractors::AdminAccess, middleware::AppState, response::ApiResponse};

/// Sign in. Lands on the dashboard.
async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginInput>,
) -> AppResult<ApiResponse<LoginOutcome>> {
    Ok(ApiResponse::ok(state.auth.login(&input)?))
}

async fn dashboard(_: AdminAccess, State(state): State<AppState>) -> ApiResponse<Dashboard> {
    ApiResponse::ok(state.dashboard.summary().await)
}

async fn catalog(_: AdminAccess) -> ApiResponse<Vec<Screen>> {
    ApiResponse::ok(screens::ALL.to_vec())
}

/// Upload target.
#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    /// Screen the image is for; decides whether the size limit applies.
    pub screen: String,
    /// Image field to set when a form is sent along.
    #[serde(default)]
    pub field: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Uploaded image as a base64 data URI.
    pub data_uri: String,
    /// Decoded upload size in bytes.
    pub size: usize,
    /// The submitted form with the image applied, when one was sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<Row>,
}

/// Encode an uploaded image as a data URI.
///
/// Multipart fields: `file` (required) and `form`, the current form values as
/// JSON. With `form` and `?field=`, the image replaces that field's value.
async fn upload(
    _: AdminAccess,
    State(state): State<AppState>,
    Query(q): Query<UploadQuery>,
    mut multipart: Multipart,
) -> AppResult<ApiResponse<UploadResponse>> {
    let handler = state.admin.get(&q.screen)?;
    let screen = handler.screen();

    let mut file: Option<(Option<String>, Option<String>, Vec<u8>)> = None;
    let mut form: Option<Row> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().map(ToString::to_string);
                let content_type = field.content_type().map(ToString::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file = Some((content_type, file_name, bytes.to_vec()));
            }
            "form" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                form = Some(
                    serde_json::from_str(&text)
                        .map_err(|e| AppError::BadRequest(format!("Invalid form: {e}")))?,
                );
            }
            _ => {}
        }
    }

    let (content_type, file_name, bytes) =
        file.ok_or_else(|| AppError::BadRequest("No file provided".to_string()))?;

    let data_uri = state.media.encode_upload(
        content_type.as_deref(),
        file_name.as_deref(),
        &bytes,
        screen.limit_uploads,
    )?;

    let form = match (form, q.field) {
        (Some(form), Some(field)) => {
            let mut form = handler.schema().normalize(&form);
            handler
                .schema()
                .set_image(&mut form, &field, data_uri.clone())?;
            Some(form)
        }
        (Some(_), None) => {
            return Err(AppError::BadRequest(
                "field is required when a form is sent".to_string(),
            ));
        }
        (None, _) => None,
    };

    tracing::info!(screen = screen.slug, size = bytes.len(), "Image uploaded");

    Ok(ApiResponse::ok(UploadResponse {
        data_uri,
        size: bytes.len(),
        form,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/dashboard", get(dashboard))
        .route("/screens", get(catalog))
        .route("/uploads", post(upload))
}
