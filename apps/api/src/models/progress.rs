use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProgressRow {
    pub id: Uuid,
    pub student_id: Uuid,
    pub project_id: Uuid,
    pub step_number: i32,
    pub step_description: String,
    pub is_completed: bool,
    pub completed_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
