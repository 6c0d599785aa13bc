//! CRUD routes shared by every admin screen.
//!
//! The first path segment picks the screen (`banners`, `causes`, `logos`,
//! ...). Writes answer with the affected id only; clients reload the list.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post, put},
};
use charity_common::AppResult;
use charity_core::{DeleteOutcome, FormSchema, FormView};
use charity_db::store::Row;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    extractors::{AdminAccess, FormBody},
    middleware::AppState,
    response::ApiResponse,
};

#[derive(Serialize)]
pub struct Saved {
    /// Affected row ID.
    pub id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Toggled {
    /// Affected row ID.
    pub id: String,
    /// Active flag after the toggle.
    pub is_active: bool,
}

#[derive(Serialize)]
pub struct Deleted {
    /// Affected row ID.
    pub id: String,
    /// What the delete did.
    pub outcome: DeleteOutcome,
}

/// Deletes run only with `?confirm=true`.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteQuery {
    /// Set once the admin has confirmed the delete.
    #[serde(default)]
    pub confirm: bool,
}

/// Edit a repeatable group on an unsaved form.
#[derive(Debug, Deserialize)]
pub struct ItemsRequest {
    /// Current form values.
    #[serde(default)]
    pub form: Row,
    /// Image field the upload fills.
    pub field: String,
    /// Index to remove; absent appends a blank item.
    #[serde(default)]
    pub remove: Option<usize>,
}

async fn list(
    _: AdminAccess,
    State(state): State<AppState>,
    Path(screen): Path<String>,
) -> AppResult<ApiResponse<Value>> {
    let handler = state.admin.get(&screen)?;
    Ok(ApiResponse::ok(handler.list().await?))
}

async fn schema(
    _: AdminAccess,
    State(state): State<AppState>,
    Path(screen): Path<String>,
) -> AppResult<ApiResponse<FormSchema>> {
    let handler = state.admin.get(&screen)?;
    Ok(ApiResponse::ok(handler.schema().clone()))
}

async fn new_form(
    _: AdminAccess,
    State(state): State<AppState>,
    Path(screen): Path<String>,
) -> AppResult<ApiResponse<FormView>> {
    let handler = state.admin.get(&screen)?;
    Ok(ApiResponse::ok(handler.new_form()))
}

async fn edit_form(
    _: AdminAccess,
    State(state): State<AppState>,
    Path((screen, id)): Path<(String, String)>,
) -> AppResult<ApiResponse<FormView>> {
    let handler = state.admin.get(&screen)?;
    Ok(ApiResponse::ok(handler.edit_form(&id).await?))
}

async fn form_items(
    _: AdminAccess,
    State(state): State<AppState>,
    Path(screen): Path<String>,
    Json(req): Json<ItemsRequest>,
) -> AppResult<ApiResponse<Row>> {
    let handler = state.admin.get(&screen)?;
    Ok(ApiResponse::ok(
        handler.edit_items(&req.form, &req.field, req.remove)?,
    ))
}

async fn create(
    _: AdminAccess,
    State(state): State<AppState>,
    Path(screen): Path<String>,
    FormBody(form): FormBody,
) -> AppResult<ApiResponse<Saved>> {
    let handler = state.admin.get(&screen)?;
    let id = handler.create(&form).await?;
    Ok(ApiResponse::created(Saved { id }))
}

async fn update(
    _: AdminAccess,
    State(state): State<AppState>,
    Path((screen, id)): Path<(String, String)>,
    FormBody(form): FormBody,
) -> AppResult<ApiResponse<Saved>> {
    let handler = state.admin.get(&screen)?;
    handler.update(&id, &form).await?;
    Ok(ApiResponse::ok(Saved { id }))
}

async fn toggle(
    _: AdminAccess,
    State(state): State<AppState>,
    Path((screen, id)): Path<(String, String)>,
) -> AppResult<ApiResponse<Toggled>> {
    let handler = state.admin.get(&screen)?;
    let is_active = handler.toggle(&id).await?;
    Ok(ApiResponse::ok(Toggled { id, is_active }))
}

async fn delete(
    _: AdminAccess,
    State(state): State<AppState>,
    Path((screen, id)): Path<(String, String)>,
    Query(q): Query<DeleteQuery>,
) -> AppResult<ApiResponse<Deleted>> {
    let handler = state.admin.get(&screen)?;
    let outcome = handler.delete(&id, q.confirm).await?;
    Ok(ApiResponse::ok(Deleted { id, outcome }))
}

/// Make one row the only active one. Logos only.
async fn activate(
    _: AdminAccess,
    State(state): State<AppState>,
    Path((screen, id)): Path<(String, String)>,
) -> AppResult<ApiResponse<Saved>> {
    let handler = state.admin.get(&screen)?;
    handler.activate(&id).await?;
    Ok(ApiResponse::ok(Saved { id }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{screen}", get(list).post(create))
        .route("/{screen}/schema", get(schema))
        .route("/{screen}/new", get(new_form))
        .route("/{screen}/form/items", post(form_items))
        .route("/{screen}/{id}", put(update).delete(delete))
        .route("/{screen}/{id}/edit", get(edit_form))
        .route("/{screen}/{id}/toggle", post(toggle))
        .route("/{screen}/{id}/activate", post(activate))
}
