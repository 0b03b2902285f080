use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::store::{get_projects_by_ids, require_project};
use crate::errors::AppError;
use crate::models::progress::ProgressRow;
use crate::models::project::ProjectRow;
use crate::progress::plan::learning_plan_steps;
use crate::progress::store::{
    get_progress_by_student, get_progress_for_project, insert_plan, set_step_completed,
};
use crate::state::AppState;
use crate::students::handlers::UserIdQuery;
use crate::students::store::require_student;

#[derive(Debug, Deserialize)]
pub struct StartProjectRequest {
    pub user_id: Uuid,
    pub project_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct ToggleStepRequest {
    pub step_id: Uuid,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct ProgressWithProject {
    #[serde(flatten)]
    pub step: ProgressRow,
    pub project: Option<ProjectRow>,
}

/// GET /api/v1/progress?user_id=
pub async fn handle_get_progress(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<ProgressWithProject>>, AppError> {
    let steps = get_progress_by_student(&state.db, params.user_id).await?;

    let mut ids: Vec<Uuid> = steps.iter().map(|s| s.project_id).collect();
    ids.dedup();
    let projects: HashMap<Uuid, ProjectRow> = get_projects_by_ids(&state.db, &ids)
        .await?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();

    let response = steps
        .into_iter()
        .map(|step| {
            let project = projects.get(&step.project_id).cloned();
            ProgressWithProject { step, project }
        })
        .collect();

    Ok(Json(response))
}

/// POST /api/v1/progress/start
///
/// Creates the learning plan for a project. Starting twice returns the existing steps.
pub async fn handle_start_project(
    State(state): State<AppState>,
    Json(request): Json<StartProjectRequest>,
) -> Result<Json<Vec<ProgressRow>>, AppError> {
    let student = require_student(&state.db, request.user_id).await?;
    let project = require_project(&state.db, request.project_id).await?;

    let existing = get_progress_for_project(&state.db, student.id, project.id).await?;
    if !existing.is_empty() {
        return Ok(Json(existing));
    }

    let steps = learning_plan_steps(&project);
    Ok(Json(insert_plan(&state.db, student.id, project.id, &steps).await?))
}

/// POST /api/v1/progress/toggle
pub async fn handle_toggle_step(
    State(state): State<AppState>,
    Json(request): Json<ToggleStepRequest>,
) -> Result<Json<ProgressRow>, AppError> {
    let step = set_step_completed(&state.db, request.step_id, request.completed)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Progress step {} not found", request.step_id)))?;
    Ok(Json(step))
}
