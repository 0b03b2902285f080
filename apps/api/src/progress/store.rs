use chrono::Utc;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::progress::ProgressRow;

/// A concurrent start of the same plan makes this a no-op instead of a unique violation.
const INSERT_STEP: &str = r#"
    INSERT INTO progress (student_id, project_id, step_number, step_description)
    VALUES ($1, $2, $3, $4)
    ON CONFLICT (student_id, project_id, step_number) DO NOTHING
    RETURNING *
"#;

/// All steps for a student, grouped by project then step order.
pub async fn get_progress_by_student(
    pool: &PgPool,
    student_id: Uuid,
) -> Result<Vec<ProgressRow>, AppError> {
    Ok(sqlx::query_as::<_, ProgressRow>(
        "SELECT * FROM progress WHERE student_id = $1 ORDER BY project_id, step_number",
    )
    .bind(student_id)
    .fetch_all(pool)
    .await?)
}

pub async fn get_progress_for_project(
    pool: &PgPool,
    student_id: Uuid,
    project_id: Uuid,
) -> Result<Vec<ProgressRow>, AppError> {
    Ok(sqlx::query_as::<_, ProgressRow>(
        "SELECT * FROM progress WHERE student_id = $1 AND project_id = $2 ORDER BY step_number",
    )
    .bind(student_id)
    .bind(project_id)
    .fetch_all(pool)
    .await?)
}

/// Inserts steps numbered from 1 in one transaction.
/// If another request created the plan first, its committed steps are returned instead.
pub async fn insert_plan(
    pool: &PgPool,
    student_id: Uuid,
    project_id: Uuid,
    steps: &[String],
) -> Result<Vec<ProgressRow>, AppError> {
    let mut tx = pool.begin().await?;
    let mut rows = Vec::with_capacity(steps.len());

    for (step_number, description) in (1_i32..).zip(steps) {
        let inserted = sqlx::query_as::<_, ProgressRow>(INSERT_STEP)
            .bind(student_id)
            .bind(project_id)
            .bind(step_number)
            .bind(description)
            .fetch_optional(&mut *tx)
            .await?;
        rows.extend(inserted);
    }

    tx.commit().await?;

    if rows.len() < steps.len() {
        info!(
            "Plan for student {} on project {} already existed, returning stored steps",
            student_id, project_id
        );
        return get_progress_for_project(pool, student_id, project_id).await;
    }

    info!(
        "Created {} progress steps for student {} on project {}",
        rows.len(),
        student_id,
        project_id
    );
    Ok(rows)
}

/// Sets completion; completing stamps now, un-completing clears the date.
pub async fn set_step_completed(
    pool: &PgPool,
    step_id: Uuid,
    completed: bool,
) -> Result<Option<ProgressRow>, AppError> {
    let completed_date = completed.then(Utc::now);
    Ok(sqlx::query_as::<_, ProgressRow>(
        "UPDATE progress SET is_completed = $1, completed_date = $2 WHERE id = $3 RETURNING *",
    )
    .bind(completed)
    .bind(completed_date)
    .bind(step_id)
    .fetch_optional(pool)
    .await?)
}
