use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::recommendation::RecommendationRow;
use crate::recommendation::strategy::RecommendationEntry;

const INSERT_RECOMMENDATION: &str = r#"
    INSERT INTO recommendations
        (student_id, project_id, match_percentage, resume_points, reasoning, rank)
    VALUES ($1, $2, $3, $4, $5, $6)
    RETURNING *
"#;

const SELECT_BY_STUDENT: &str =
    "SELECT * FROM recommendations WHERE student_id = $1 ORDER BY rank ASC";

/// Pairs each entry with its position. `entries` is already ranked, so the
/// position carries both the descending order and the tie order.
fn with_ranks(entries: &[RecommendationEntry]) -> impl Iterator<Item = (i32, &RecommendationEntry)> {
    (0_i32..).zip(entries)
}

/// Replaces a student's stored recommendation set with `entries`.
/// Delete and inserts share one transaction so readers never see a merged set.
pub async fn replace_recommendations(
    pool: &PgPool,
    student_id: Uuid,
    entries: &[RecommendationEntry],
) -> Result<Vec<RecommendationRow>, AppError> {
    let mut tx = pool.begin().await?;

    let removed = sqlx::query("DELETE FROM recommendations WHERE student_id = $1")
        .bind(student_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let mut saved = Vec::with_capacity(entries.len());
    for (rank, entry) in with_ranks(entries) {
        let row = sqlx::query_as::<_, RecommendationRow>(INSERT_RECOMMENDATION)
            .bind(student_id)
            .bind(entry.project_id)
            .bind(i32::from(entry.match_percentage))
            .bind(&entry.resume_points)
            .bind(&entry.reasoning)
            .bind(rank)
            .fetch_one(&mut *tx)
            .await?;
        saved.push(row);
    }

    tx.commit().await?;

    info!(
        "Replaced {} recommendations with {} for student {}",
        removed,
        saved.len(),
        student_id
    );
    Ok(saved)
}

/// Stored recommendations for a student, in the order they were ranked.
pub async fn get_recommendations_by_student(
    pool: &PgPool,
    student_id: Uuid,
) -> Result<Vec<RecommendationRow>, AppError> {
    Ok(sqlx::query_as::<_, RecommendationRow>(SELECT_BY_STUDENT)
        .bind(student_id)
        .fetch_all(pool)
        .await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::strategy::rank_entries;

    fn entry(pct: u8) -> RecommendationEntry {
        RecommendationEntry {
            project_id: Uuid::new_v4(),
            match_percentage: pct,
            resume_points: vec![],
            reasoning: String::new(),
        }
    }

    #[test]
    fn test_ranks_follow_input_order_for_ties() {
        let mut entries = vec![entry(40), entry(80), entry(40), entry(80), entry(40)];
        let ids: Vec<Uuid> = entries.iter().map(|e| e.project_id).collect();
        rank_entries(&mut entries);

        let ranked: Vec<(i32, Uuid)> = with_ranks(&entries)
            .map(|(rank, e)| (rank, e.project_id))
            .collect();
        assert_eq!(
            ranked,
            vec![(0, ids[1]), (1, ids[3]), (2, ids[0]), (3, ids[2]), (4, ids[4])]
        );
    }

    #[test]
    fn test_stored_set_is_read_back_by_rank() {
        assert!(INSERT_RECOMMENDATION.contains("rank"));
        assert!(SELECT_BY_STUDENT.ends_with("ORDER BY rank ASC"));
    }
}
