use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecommendationRow {
    pub id: Uuid,
    pub student_id: Uuid,
    pub project_id: Uuid,
    pub match_percentage: i32,
    pub resume_points: Vec<String>,
    pub reasoning: Option<String>,
    pub created_at: DateTime<Utc>,
}
