use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::student::StudentRow;
use crate::students::validation::NewStudent;

pub async fn get_student(pool: &PgPool, id: Uuid) -> Result<Option<StudentRow>, AppError> {
    Ok(
        sqlx::query_as::<_, StudentRow>("SELECT * FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?,
    )
}

pub async fn require_student(pool: &PgPool, id: Uuid) -> Result<StudentRow, AppError> {
    get_student(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Student {id} not found")))
}

pub async fn get_student_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<StudentRow>, AppError> {
    Ok(
        sqlx::query_as::<_, StudentRow>("SELECT * FROM students WHERE username = $1")
            .bind(username)
            .fetch_optional(pool)
            .await?,
    )
}

/// Expects input already passed through `validate_new_student`.
pub async fn insert_student(pool: &PgPool, student: &NewStudent) -> Result<StudentRow, AppError> {
    let row = sqlx::query_as::<_, StudentRow>(
        r#"
        INSERT INTO students (username, name, email, branch, skills, github_username)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(&student.username)
    .bind(&student.name)
    .bind(&student.email)
    .bind(&student.branch)
    .bind(&student.skills)
    .bind(&student.github_username)
    .fetch_one(pool)
    .await
    .map_err(|e| AppError::from_insert(e, "Student with this username or email"))?;

    info!("Registered student {} ({})", row.id, row.username);
    Ok(row)
}

pub async fn update_skills(
    pool: &PgPool,
    id: Uuid,
    skills: &[String],
) -> Result<Option<StudentRow>, AppError> {
    Ok(sqlx::query_as::<_, StudentRow>(
        "UPDATE students SET skills = $1 WHERE id = $2 RETURNING *",
    )
    .bind(skills)
    .bind(id)
    .fetch_optional(pool)
    .await?)
}
