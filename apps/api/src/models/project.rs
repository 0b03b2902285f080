use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProjectRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub skills: Vec<String>,
    /// One of "Beginner", "Intermediate", "Advanced" (CHECK constraint).
    pub difficulty: String,
    pub estimated_hours: Option<i32>,
    pub repo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
