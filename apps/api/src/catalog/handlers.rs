//! Axum route handlers for the project catalog.

use std::str::FromStr;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::catalog::store::{
    delete_project, insert_project, list_projects, list_projects_by_difficulty, require_project,
};
use crate::catalog::validation::{validate_new_project, NewProject};
use crate::errors::AppError;
use crate::models::project::ProjectRow;
use crate::recommendation::strategy::Difficulty;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListProjectsQuery {
    pub difficulty: Option<String>,
}

impl ListProjectsQuery {
    /// Blank means no filter; anything else must name a known level.
    fn difficulty(&self) -> Result<Option<Difficulty>, AppError> {
        match self.difficulty.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => Difficulty::from_str(raw).map(Some),
        }
    }
}

/// GET /api/v1/projects?difficulty=
pub async fn handle_list_projects(
    State(state): State<AppState>,
    Query(params): Query<ListProjectsQuery>,
) -> Result<Json<Vec<ProjectRow>>, AppError> {
    let projects = match params.difficulty()? {
        Some(difficulty) => list_projects_by_difficulty(&state.db, difficulty).await?,
        None => list_projects(&state.db).await?,
    };
    Ok(Json(projects))
}

/// GET /api/v1/projects/:id
pub async fn handle_get_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProjectRow>, AppError> {
    Ok(Json(require_project(&state.db, id).await?))
}

/// POST /api/v1/projects
pub async fn handle_create_project(
    State(state): State<AppState>,
    Json(request): Json<NewProject>,
) -> Result<(StatusCode, Json<ProjectRow>), AppError> {
    let project = validate_new_project(request)?;
    let row = insert_project(&state.db, &project).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// DELETE /api/v1/projects/:id
pub async fn handle_delete_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !delete_project(&state.db, id).await? {
        return Err(AppError::NotFound(format!("Project {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(difficulty: Option<&str>) -> ListProjectsQuery {
        ListProjectsQuery {
            difficulty: difficulty.map(str::to_string),
        }
    }

    #[test]
    fn test_no_difficulty_means_full_catalog() {
        assert_eq!(query(None).difficulty().unwrap(), None);
        assert_eq!(query(Some("  ")).difficulty().unwrap(), None);
    }

    #[test]
    fn test_difficulty_filter_is_case_insensitive() {
        assert_eq!(
            query(Some("advanced")).difficulty().unwrap(),
            Some(Difficulty::Advanced)
        );
        assert_eq!(
            query(Some("Beginner")).difficulty().unwrap(),
            Some(Difficulty::Beginner)
        );
    }

    #[test]
    fn test_unknown_difficulty_is_validation_error() {
        assert!(matches!(
            query(Some("Expert")).difficulty(),
            Err(AppError::Validation(_))
        ));
    }
}
