use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::catalog::validation::NewProject;
use crate::errors::AppError;
use crate::models::project::ProjectRow;
use crate::recommendation::strategy::Difficulty;

/// Full catalog, newest first.
pub async fn list_projects(pool: &PgPool) -> Result<Vec<ProjectRow>, AppError> {
    Ok(
        sqlx::query_as::<_, ProjectRow>("SELECT * FROM projects ORDER BY created_at DESC, name ASC")
            .fetch_all(pool)
            .await?,
    )
}

/// Catalog restricted to one difficulty level, newest first.
pub async fn list_projects_by_difficulty(
    pool: &PgPool,
    difficulty: Difficulty,
) -> Result<Vec<ProjectRow>, AppError> {
    Ok(sqlx::query_as::<_, ProjectRow>(
        "SELECT * FROM projects WHERE difficulty = $1 ORDER BY created_at DESC, name ASC",
    )
    .bind(difficulty.as_str())
    .fetch_all(pool)
    .await?)
}

pub async fn get_project(pool: &PgPool, id: Uuid) -> Result<Option<ProjectRow>, AppError> {
    Ok(
        sqlx::query_as::<_, ProjectRow>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?,
    )
}

pub async fn require_project(pool: &PgPool, id: Uuid) -> Result<ProjectRow, AppError> {
    get_project(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Project {id} not found")))
}

pub async fn get_projects_by_ids(pool: &PgPool, ids: &[Uuid]) -> Result<Vec<ProjectRow>, AppError> {
    if ids.is_empty() {
        return Ok(vec![]);
    }
    Ok(
        sqlx::query_as::<_, ProjectRow>("SELECT * FROM projects WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(pool)
            .await?,
    )
}

/// Expects input already passed through `validate_new_project`.
pub async fn insert_project(pool: &PgPool, project: &NewProject) -> Result<ProjectRow, AppError> {
    let row = sqlx::query_as::<_, ProjectRow>(
        r#"
        INSERT INTO projects (name, description, skills, difficulty, estimated_hours, repo_url)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(&project.name)
    .bind(&project.description)
    .bind(&project.skills)
    .bind(project.difficulty.as_str())
    .bind(project.estimated_hours)
    .bind(&project.repo_url)
    .fetch_one(pool)
    .await
    .map_err(|e| AppError::from_insert(e, "Project"))?;

    info!("Created project {} ({})", row.id, row.name);
    Ok(row)
}

/// Returns false when nothing was deleted.
pub async fn delete_project(pool: &PgPool, id: Uuid) -> Result<bool, AppError> {
    let affected = sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();
    Ok(affected > 0)
}

pub async fn count_projects(pool: &PgPool) -> Result<i64, AppError> {
    Ok(sqlx::query_scalar("SELECT COUNT(*) FROM projects")
        .fetch_one(pool)
        .await?)
}
