//! API endpoints.

mod admin;
mod contact;
mod health;
mod pages;
mod screens;

use axum::Router;

use crate::middleware::AppState;

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/pages", pages::router())
        .nest("/contact", contact::router())
        .nest("/admin", admin::router().merge(screens::router()))
        .nest("/health", health::router())
}
