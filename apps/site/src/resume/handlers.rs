use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::project::{projects, CardLink, Project};
use crate::models::resume::ResumeDocument;
use crate::resume::edits::Edit;
use crate::resume::preview::{render_preview, ResumePreview};
use crate::state::AppState;

/// Body of `POST /api/v1/resume/edits`: a single edit or a list applied in order.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum EditBatch {
    One(Edit),
    Many(Vec<Edit>),
}

impl EditBatch {
    fn into_edits(self) -> Vec<Edit> {
        match self {
            EditBatch::One(edit) => vec![edit],
            EditBatch::Many(edits) => edits,
        }
    }
}

#[derive(Serialize)]
pub struct ProjectResponse {
    #[serde(flatten)]
    pub project: Project,
    pub link: CardLink,
}

fn invalid_body(rejection: JsonRejection) -> AppError {
    AppError::Validation(rejection.body_text())
}

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeDocument> {
    Json(state.store.current().as_ref().clone())
}

/// PUT /api/v1/resume
pub async fn handle_put_resume(
    State(state): State<AppState>,
    body: Result<Json<ResumeDocument>, JsonRejection>,
) -> Result<Json<ResumeDocument>, AppError> {
    let Json(doc) = body.map_err(invalid_body)?;
    let next = state.store.replace(doc);
    Ok(Json(next.as_ref().clone()))
}

/// POST /api/v1/resume/edits
///
/// Stops at the first edit that addresses a missing entry; edits before it
/// stay applied.
pub async fn handle_apply_edits(
    State(state): State<AppState>,
    body: Result<Json<EditBatch>, JsonRejection>,
) -> Result<Json<ResumeDocument>, AppError> {
    let Json(batch) = body.map_err(invalid_body)?;
    let mut current = state.store.current();
    for (position, edit) in batch.into_edits().iter().enumerate() {
        current = state.store.try_apply(edit).ok_or_else(|| {
            AppError::NotFound(format!(
                "Edit #{position} ({}) addresses an entry that does not exist",
                edit.op()
            ))
        })?;
    }
    Ok(Json(current.as_ref().clone()))
}

/// GET /api/v1/resume/preview
pub async fn handle_get_preview(State(state): State<AppState>) -> Json<ResumePreview> {
    Json(render_preview(&state.store.current()))
}

/// GET /api/v1/projects
pub async fn handle_list_projects() -> Json<Vec<ProjectResponse>> {
    Json(
        projects()
            .into_iter()
            .map(|project| ProjectResponse {
                link: project.link(),
                project,
            })
            .collect(),
    )
}
