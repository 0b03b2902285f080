use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::student::StudentRow;
use crate::state::AppState;
use crate::students::store::{get_student_by_username, insert_student, update_skills};
use crate::students::validation::{validate_new_student, validate_skills, NewStudent};

/// `?user_id=` selector shared by the per-student read endpoints.
#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSkillsRequest {
    pub skills: Vec<String>,
}

/// POST /api/v1/students
pub async fn handle_register_student(
    State(state): State<AppState>,
    Json(request): Json<NewStudent>,
) -> Result<(StatusCode, Json<StudentRow>), AppError> {
    let student = validate_new_student(request)?;
    let row = insert_student(&state.db, &student).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/students/:username
pub async fn handle_get_student(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<StudentRow>, AppError> {
    let student = get_student_by_username(&state.db, &username)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Student '{username}' not found")))?;
    Ok(Json(student))
}

/// PUT /api/v1/students/:id/skills
pub async fn handle_update_skills(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateSkillsRequest>,
) -> Result<Json<StudentRow>, AppError> {
    let skills = validate_skills(request.skills)?;
    let student = update_skills(&state.db, id, &skills)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Student {id} not found")))?;
    Ok(Json(student))
}
