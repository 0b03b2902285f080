use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    Json,
};
use uuid::Uuid;

use crate::catalog::store::get_projects_by_ids;
use crate::dashboard::stats::{compute_dashboard, DashboardStats};
use crate::errors::AppError;
use crate::models::project::ProjectRow;
use crate::progress::stats::completed_project_ids;
use crate::progress::store::get_progress_by_student;
use crate::recommendation::store::get_recommendations_by_student;
use crate::state::AppState;
use crate::students::handlers::UserIdQuery;
use crate::students::store::require_student;

/// GET /api/v1/dashboard?user_id=
pub async fn handle_dashboard(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<DashboardStats>, AppError> {
    let student = require_student(&state.db, params.user_id).await?;
    let steps = get_progress_by_student(&state.db, student.id).await?;
    let recommendations = get_recommendations_by_student(&state.db, student.id).await?;

    let completed = completed_project_ids(&steps);
    let projects: HashMap<Uuid, ProjectRow> = get_projects_by_ids(&state.db, &completed)
        .await?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();

    Ok(Json(compute_dashboard(
        &student,
        &steps,
        &recommendations,
        &projects,
    )))
}
