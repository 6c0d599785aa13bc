//! HTTP API layer for the charity site.
//!
//! - **Public pages**: one JSON view model per route under `/api/pages`
//! - **Contact**: contact form submission
//! - **Admin**: login, dashboard, image uploads and a CRUD router shared by
//!   every content screen
//!
//! Built on Axum 0.8.

pub mod endpoints;
pub mod extractors;
pub mod middleware;
pub mod response;

use axum::{Router, extract::DefaultBodyLimit};

pub use endpoints::router;
pub use middleware::AppState;

/// The API mounted under `/api`, with state and body limit applied.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .nest("/api", router())
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .with_state(state)
}
