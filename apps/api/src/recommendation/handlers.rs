//! Axum route handlers for the Recommendation API.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::store::{get_projects_by_ids, list_projects};
use crate::errors::AppError;
use crate::models::project::ProjectRow;
use crate::models::recommendation::RecommendationRow;
use crate::recommendation::store::{get_recommendations_by_student, replace_recommendations};
use crate::recommendation::strategy::{CandidateProject, SkillProfile};
use crate::state::AppState;
use crate::students::handlers::UserIdQuery;
use crate::students::store::require_student;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub user_id: Uuid,
    /// Overrides the stored profile's skills for this run only.
    pub skills: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationWithProject {
    #[serde(flatten)]
    pub recommendation: RecommendationRow,
    pub project: ProjectRow,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/recommend
///
/// Ranks the whole catalog for the student and replaces their stored set.
/// Never fails because of the AI tier: the recommender falls back internally.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<Vec<RecommendationRow>>, AppError> {
    let student = require_student(&state.db, request.user_id).await?;

    let projects = list_projects(&state.db).await?;
    if projects.is_empty() {
        return Ok(Json(vec![]));
    }

    let candidates = projects
        .iter()
        .map(CandidateProject::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let skills = request.skills.unwrap_or(student.skills);
    let profile = SkillProfile::new(skills, student.branch);

    let entries = state.recommender.recommend(&profile, &candidates).await?;
    let saved = replace_recommendations(&state.db, student.id, &entries).await?;

    Ok(Json(saved))
}

/// GET /api/v1/recommendations?user_id=
///
/// Returns the stored set with project details re-attached.
pub async fn handle_get_recommendations(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<RecommendationWithProject>>, AppError> {
    let recommendations = get_recommendations_by_student(&state.db, params.user_id).await?;

    let ids: Vec<Uuid> = recommendations.iter().map(|r| r.project_id).collect();
    let projects = get_projects_by_ids(&state.db, &ids).await?;

    Ok(Json(attach_projects(recommendations, projects)?))
}

/// Pairs each recommendation with its project; a dangling project id is a not-found.
fn attach_projects(
    recommendations: Vec<RecommendationRow>,
    projects: Vec<ProjectRow>,
) -> Result<Vec<RecommendationWithProject>, AppError> {
    let by_id: HashMap<Uuid, ProjectRow> = projects.into_iter().map(|p| (p.id, p)).collect();

    recommendations
        .into_iter()
        .map(|recommendation| {
            let project = by_id.get(&recommendation.project_id).cloned().ok_or_else(|| {
                AppError::NotFound(format!("Project {} not found", recommendation.project_id))
            })?;
            Ok(RecommendationWithProject {
                recommendation,
                project,
            })
        })
        .collect()
}
