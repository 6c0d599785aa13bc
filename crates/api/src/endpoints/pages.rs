//! Public page endpoints.
//!
//! Every page renders even when the store is unreachable, so only request
//! parsing can fail here.

use axum::{
    Router,
    extract::{Query, State},
    routing::get,
};
use charity_common::{AppError, AppResult};
use charity_core::pages::{
    AboutPage, CertificationsPage, ContactPage, DonatePage, FooterView, HistoryPage, HomePage,
    HomeProgramPage, MissionPage, ProgramPage, ProjectsPage, TeamPage,
};
use charity_db::entities::ProjectStatus;
use serde::Deserialize;

use crate::{middleware::AppState, response::ApiResponse};

/// Carousel positions on the home page.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeQuery {
    /// Page offset of the causes carousel.
    #[serde(default)]
    pub cause_index: i64,
    /// Page offset of the board carousel.
    #[serde(default)]
    pub board_index: i64,
}

/// Project status filter.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectsQuery {
    /// Status filter; absent or "all" shows every project.
    #[serde(default)]
    pub status: Option<String>,
}

async fn home(State(state): State<AppState>, Query(q): Query<HomeQuery>) -> ApiResponse<HomePage> {
    ApiResponse::ok(state.pages.home(q.cause_index, q.board_index).await)
}

async fn about(State(state): State<AppState>) -> ApiResponse<AboutPage> {
    ApiResponse::ok(state.pages.about().await)
}

async fn history(State(state): State<AppState>) -> ApiResponse<HistoryPage> {
    ApiResponse::ok(state.pages.history())
}

async fn team(State(state): State<AppState>) -> ApiResponse<TeamPage> {
    ApiResponse::ok(state.pages.team().await)
}

async fn mission(State(state): State<AppState>) -> ApiResponse<MissionPage> {
    ApiResponse::ok(state.pages.mission())
}

async fn medical(State(state): State<AppState>) -> ApiResponse<ProgramPage> {
    ApiResponse::ok(state.pages.medical().await)
}

async fn relief(State(state): State<AppState>) -> ApiResponse<ProgramPage> {
    ApiResponse::ok(state.pages.relief().await)
}

async fn oldage_home(State(state): State<AppState>) -> ApiResponse<HomeProgramPage> {
    ApiResponse::ok(state.pages.oldage_home().await)
}

async fn children_home(State(state): State<AppState>) -> ApiResponse<HomeProgramPage> {
    ApiResponse::ok(state.pages.children_home().await)
}

async fn projects(
    State(state): State<AppState>,
    Query(q): Query<ProjectsQuery>,
) -> AppResult<ApiResponse<ProjectsPage>> {
    let filter = match q.status.as_deref().map(str::trim) {
        None | Some("" | "all") => None,
        Some(value) => Some(ProjectStatus::parse(value).ok_or_else(|| {
            AppError::BadRequest(format!(
                "status must be one of: all, {}",
                ProjectStatus::VALUES.join(", ")
            ))
        })?),
    };
    Ok(ApiResponse::ok(state.pages.projects(filter).await))
}

async fn certifications(State(state): State<AppState>) -> ApiResponse<CertificationsPage> {
    ApiResponse::ok(state.pages.certifications().await)
}

async fn donate(State(state): State<AppState>) -> ApiResponse<DonatePage> {
    ApiResponse::ok(state.pages.donate().await)
}

async fn contact(State(state): State<AppState>) -> ApiResponse<ContactPage> {
    ApiResponse::ok(state.pages.contact())
}

async fn footer(State(state): State<AppState>) -> ApiResponse<FooterView> {
    ApiResponse::ok(state.pages.footer().await)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/about", get(about))
        .route("/about/our-history", get(history))
        .route("/about/our-team", get(team))
        .route("/about/our-mission", get(mission))
        .route("/medical", get(medical))
        .route("/relief", get(relief))
        .route("/oldage-home", get(oldage_home))
        .route("/children-home", get(children_home))
        .route("/projects", get(projects))
        .route("/certifications", get(certifications))
        .route("/donate", get(donate))
        .route("/contact", get(contact))
        .route("/footer", get(footer))
}
