//! Shared recommendation types and the `RecommendationStrategy` trait.
//!
//! `AppState` holds an `Arc<dyn RecommendationStrategy>`; in production that is a
//! `FailoverRecommender` wrapping the LLM tier and the fallback scorer.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::project::ProjectRow;

// ────────────────────────────────────────────────────────────────────────────
// Input data models
// ────────────────────────────────────────────────────────────────────────────

/// What a student brings: their skills and academic branch.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillProfile {
    skills: Vec<String>,
    pub branch: String,
}

impl SkillProfile {
    /// Trims skills, drops blanks and case-insensitive duplicates (first spelling wins).
    pub fn new<I, S>(skills: I, branch: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let skills = skills
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .filter(|s| seen.insert(s.to_lowercase()))
            .collect();

        Self {
            skills,
            branch: branch.into(),
        }
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(AppError::Validation(format!(
                "difficulty must be Beginner, Intermediate or Advanced (got '{other}')"
            ))),
        }
    }
}

/// A catalog project as seen by the ranking tiers. Never mutated by them.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateProject {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub difficulty: Difficulty,
    pub estimated_hours: Option<u32>,
}

impl TryFrom<&ProjectRow> for CandidateProject {
    type Error = AppError;

    fn try_from(row: &ProjectRow) -> Result<Self, Self::Error> {
        let difficulty = row.difficulty.parse::<Difficulty>().map_err(|_| {
            AppError::Internal(anyhow::anyhow!(
                "Project {} has unknown difficulty '{}'",
                row.id,
                row.difficulty
            ))
        })?;

        Ok(CandidateProject {
            id: row.id,
            name: row.name.clone(),
            description: row.description.clone(),
            required_skills: row.skills.clone(),
            difficulty,
            estimated_hours: row.estimated_hours.and_then(|h| u32::try_from(h).ok()),
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output data model (shared across all strategy backends)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationEntry {
    pub project_id: Uuid,
    /// 0 – 100. The fallback tier never exceeds 95.
    pub match_percentage: u8,
    pub resume_points: Vec<String>,
    pub reasoning: String,
}

/// Stable sort, highest match first. Ties keep input order.
pub fn rank_entries(entries: &mut [RecommendationEntry]) {
    entries.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Produces ranked project recommendations for a skill profile.
/// Implement this to add a backend without touching the handlers.
#[async_trait]
pub trait RecommendationStrategy: Send + Sync {
    /// Short backend label for logs.
    fn name(&self) -> &'static str;

    async fn recommend(
        &self,
        profile: &SkillProfile,
        candidates: &[CandidateProject],
    ) -> Result<Vec<RecommendationEntry>, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(pct: u8, reasoning: &str) -> RecommendationEntry {
        RecommendationEntry {
            project_id: Uuid::new_v4(),
            match_percentage: pct,
            resume_points: vec![],
            reasoning: reasoning.to_string(),
        }
    }

    #[test]
    fn test_skill_profile_dedupes_case_insensitively() {
        let profile = SkillProfile::new(["React", " react ", "", "Python"], "Computer Science");
        assert_eq!(profile.skills(), &["React".to_string(), "Python".to_string()]);
    }

    #[test]
    fn test_difficulty_parses_any_case() {
        assert_eq!("advanced".parse::<Difficulty>().unwrap(), Difficulty::Advanced);
        assert_eq!(" Beginner".parse::<Difficulty>().unwrap(), Difficulty::Beginner);
        assert!("Expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_difficulty_serde_uses_variant_names() {
        let json = serde_json::to_string(&Difficulty::Intermediate).unwrap();
        assert_eq!(json, r#""Intermediate""#);
    }

    #[test]
    fn test_rank_entries_is_stable_for_ties() {
        let mut entries = vec![entry(40, "a"), entry(80, "b"), entry(40, "c"), entry(80, "d")];
        rank_entries(&mut entries);
        let order: Vec<&str> = entries.iter().map(|e| e.reasoning.as_str()).collect();
        assert_eq!(order, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_candidate_from_row_drops_non_positive_hours() {
        let row = ProjectRow {
            id: Uuid::new_v4(),
            name: "Portfolio Website".to_string(),
            description: "Showcase".to_string(),
            skills: vec!["HTML".to_string()],
            difficulty: "Beginner".to_string(),
            estimated_hours: Some(-3),
            repo_url: None,
            created_at: Utc::now(),
        };
        let candidate = CandidateProject::try_from(&row).unwrap();
        assert_eq!(candidate.difficulty, Difficulty::Beginner);
        assert_eq!(candidate.estimated_hours, None);
    }

    #[test]
    fn test_candidate_from_row_rejects_unknown_difficulty() {
        let row = ProjectRow {
            id: Uuid::new_v4(),
            name: "X".to_string(),
            description: "Y".to_string(),
            skills: vec!["Rust".to_string()],
            difficulty: "Legendary".to_string(),
            estimated_hours: None,
            repo_url: None,
            created_at: Utc::now(),
        };
        assert!(matches!(
            CandidateProject::try_from(&row),
            Err(AppError::Internal(_))
        ));
    }
}
