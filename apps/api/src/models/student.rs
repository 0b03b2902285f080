use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StudentRow {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub email: String,
    pub branch: String,
    pub skills: Vec<String>,
    pub github_username: Option<String>,
    pub created_at: DateTime<Utc>,
}
