use axum::{
    extract::State,
    http::header::CONTENT_TYPE,
    response::{Html, IntoResponse},
};

use crate::errors::AppError;
use crate::models::project::projects;
use crate::state::AppState;
use crate::views::STYLESHEET;

/// GET / and GET /home
pub async fn handle_home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    Ok(Html(state.views.home(&state.config.owner)?))
}

/// GET /projects
pub async fn handle_projects(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    Ok(Html(state.views.projects(&state.config.owner, &projects())?))
}

/// GET /resume
pub async fn handle_builder(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let doc = state.store.current();
    Ok(Html(state.views.resume(
        &state.config.owner,
        &doc,
        state.export_label(),
    )?))
}

/// GET /assets/site.css
pub async fn handle_stylesheet() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}
