use axum::{extract::State, Json};
use serde::Deserialize;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::compare::comparison::{compare_students, summarize_student, ComparisonResult, StudentSummary};
use crate::errors::AppError;
use crate::models::comparison::ComparisonRow;
use crate::models::student::StudentRow;
use crate::progress::store::get_progress_by_student;
use crate::recommendation::store::get_recommendations_by_student;
use crate::state::AppState;
use crate::students::store::get_student_by_username;

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub student1_username: String,
    pub student2_username: String,
}

/// POST /api/v1/compare
///
/// Compares two students and records the result.
pub async fn handle_compare(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<ComparisonResult>, AppError> {
    let student1 = get_student_by_username(&state.db, request.student1_username.trim()).await?;
    let student2 = get_student_by_username(&state.db, request.student2_username.trim()).await?;

    let (student1, student2) = match (student1, student2) {
        (Some(a), Some(b)) => (a, b),
        _ => {
            return Err(AppError::NotFound(
                "One or both students not found".to_string(),
            ))
        }
    };

    let summary1 = load_summary(&state.db, &student1).await?;
    let summary2 = load_summary(&state.db, &student2).await?;
    let result = compare_students(summary1, summary2);

    save_comparison(&state.db, student1.id, student2.id, &result).await?;

    Ok(Json(result))
}

async fn load_summary(pool: &PgPool, student: &StudentRow) -> Result<StudentSummary, AppError> {
    let steps = get_progress_by_student(pool, student.id).await?;
    let recommendations = get_recommendations_by_student(pool, student.id).await?;
    Ok(summarize_student(student, &steps, &recommendations))
}

async fn save_comparison(
    pool: &PgPool,
    student1_id: Uuid,
    student2_id: Uuid,
    result: &ComparisonResult,
) -> Result<ComparisonRow, AppError> {
    let results_json = serde_json::to_value(result)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize comparison: {e}")))?;

    let row = sqlx::query_as::<_, ComparisonRow>(
        r#"
        INSERT INTO comparisons (student1_id, student2_id, results_json)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(student1_id)
    .bind(student2_id)
    .bind(&results_json)
    .fetch_one(pool)
    .await?;

    info!(
        "Recorded comparison {} between {} and {}",
        row.id, row.student1_id, row.student2_id
    );
    Ok(row)
}
