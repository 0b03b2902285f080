use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ComparisonRow {
    pub id: Uuid,
    pub student1_id: Uuid,
    pub student2_id: Uuid,
    pub results_json: Value,
    pub created_at: DateTime<Utc>,
}
