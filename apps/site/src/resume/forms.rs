//! Editor form posts from the builder page.
//!
//! Every handler maps its form to exactly one `Edit`, applies it and redirects
//! back to `/resume` (303, post/redirect/get). Indices that no longer exist,
//! e.g. from a stale tab, leave the document unchanged.

use axum::{
    extract::{Path, State},
    response::Redirect,
    Form,
};
use serde::Deserialize;

use crate::models::resume::{HeaderPatch, RolePatch, SchoolPatch, SkillsPatch};
use crate::resume::edits::Edit;
use crate::state::AppState;

const BUILDER: &str = "/resume";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SummaryForm {
    pub summary: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ValueForm {
    pub value: String,
}

fn apply(state: &AppState, edit: Edit) -> Redirect {
    state.store.apply(&edit);
    Redirect::to(BUILDER)
}

/// POST /resume/header
pub async fn handle_header(
    State(state): State<AppState>,
    Form(patch): Form<HeaderPatch>,
) -> Redirect {
    apply(&state, Edit::PatchHeader { patch })
}

/// POST /resume/summary
pub async fn handle_summary(
    State(state): State<AppState>,
    Form(form): Form<SummaryForm>,
) -> Redirect {
    apply(&state, Edit::SetSummary { summary: form.summary })
}

/// POST /resume/strengths
pub async fn handle_add_strength(
    State(state): State<AppState>,
    Form(form): Form<ValueForm>,
) -> Redirect {
    apply(&state, Edit::AddStrength { value: form.value })
}

/// POST /resume/strengths/:index/remove
pub async fn handle_remove_strength(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Redirect {
    apply(&state, Edit::RemoveStrength { index })
}

/// POST /resume/roles
pub async fn handle_add_role(State(state): State<AppState>) -> Redirect {
    apply(&state, Edit::AddRole)
}

/// POST /resume/roles/:index
pub async fn handle_patch_role(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Form(patch): Form<RolePatch>,
) -> Redirect {
    apply(&state, Edit::PatchRole { index, patch })
}

/// POST /resume/roles/:index/remove
pub async fn handle_remove_role(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Redirect {
    apply(&state, Edit::RemoveRole { index })
}

/// POST /resume/roles/:index/bullets
pub async fn handle_add_bullet(State(state): State<AppState>, Path(role): Path<usize>) -> Redirect {
    apply(&state, Edit::AddBullet { role })
}

/// POST /resume/roles/:index/bullets/:bullet
pub async fn handle_update_bullet(
    State(state): State<AppState>,
    Path((role, bullet)): Path<(usize, usize)>,
    Form(form): Form<ValueForm>,
) -> Redirect {
    apply(
        &state,
        Edit::UpdateBullet {
            role,
            bullet,
            value: form.value,
        },
    )
}

/// POST /resume/roles/:index/bullets/:bullet/remove
pub async fn handle_remove_bullet(
    State(state): State<AppState>,
    Path((role, bullet)): Path<(usize, usize)>,
) -> Redirect {
    apply(&state, Edit::RemoveBullet { role, bullet })
}

/// POST /resume/schools
pub async fn handle_add_school(State(state): State<AppState>) -> Redirect {
    apply(&state, Edit::AddSchool)
}

/// POST /resume/schools/:index
pub async fn handle_patch_school(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Form(patch): Form<SchoolPatch>,
) -> Redirect {
    apply(&state, Edit::PatchSchool { index, patch })
}

/// POST /resume/schools/:index/remove
pub async fn handle_remove_school(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Redirect {
    apply(&state, Edit::RemoveSchool { index })
}

/// POST /resume/skills
pub async fn handle_skills(
    State(state): State<AppState>,
    Form(patch): Form<SkillsPatch>,
) -> Redirect {
    apply(&state, Edit::PatchSkills { patch })
}

/// POST /resume/reset
pub async fn handle_reset(State(state): State<AppState>) -> Redirect {
    state.store.reset();
    Redirect::to(BUILDER)
}
