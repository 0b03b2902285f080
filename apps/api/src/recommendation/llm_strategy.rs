//! LLM-backed recommendation tier.
//!
//! Serializes the profile and catalog into one prompt, asks for strict JSON, then
//! validates the typed response before mapping it onto `RecommendationEntry`.
//! Any transport or shape failure surfaces as `AppError::Llm`.

use std::collections::HashSet;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::LlmClient;
use crate::recommendation::prompts::{RECOMMENDATION_PROMPT_TEMPLATE, RECOMMENDATION_SYSTEM};
use crate::recommendation::strategy::{
    rank_entries, CandidateProject, RecommendationEntry, RecommendationStrategy, SkillProfile,
};

// ────────────────────────────────────────────────────────────────────────────
// Wire schema (what the model is told to return)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct LlmRecommendations {
    /// A missing key is an empty answer, not a failure.
    #[serde(default)]
    recommendations: Vec<LlmRecommendation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LlmRecommendation {
    project_id: Uuid,
    match_percentage: u32,
    resume_points: Vec<String>,
    reasoning: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Strategy
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmRecommender {
    llm: LlmClient,
}

impl LlmRecommender {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl RecommendationStrategy for LlmRecommender {
    fn name(&self) -> &'static str {
        "llm"
    }

    async fn recommend(
        &self,
        profile: &SkillProfile,
        candidates: &[CandidateProject],
    ) -> Result<Vec<RecommendationEntry>, AppError> {
        let prompt = build_recommendation_prompt(profile, candidates);
        let system = format!("{RECOMMENDATION_SYSTEM} {JSON_ONLY_INSTRUCTION}");

        let response: LlmRecommendations = self
            .llm
            .call_json(&prompt, &system)
            .await
            .map_err(|e| AppError::Llm(format!("Recommendation LLM call failed: {e}")))?;

        let entries = map_recommendations(response, candidates)?;
        info!("LLM produced {} recommendations", entries.len());
        Ok(entries)
    }
}

/// Fills the prompt template with the student's profile and the numbered catalog.
pub fn build_recommendation_prompt(profile: &SkillProfile, candidates: &[CandidateProject]) -> String {
    let projects = candidates
        .iter()
        .enumerate()
        .map(|(idx, p)| {
            let mut block = format!(
                "{}. {} ({})\n   Description: {}\n   Required Skills: {}\n",
                idx + 1,
                p.name,
                p.difficulty,
                p.description,
                p.required_skills.join(", ")
            );
            if let Some(hours) = p.estimated_hours {
                block.push_str(&format!("   Estimated Hours: {hours}\n"));
            }
            block.push_str(&format!("   Project ID: {}\n", p.id));
            block
        })
        .collect::<Vec<_>>()
        .join("\n");

    RECOMMENDATION_PROMPT_TEMPLATE
        .replace("{branch}", &profile.branch)
        .replace("{skills}", &profile.skills().join(", "))
        .replace("{projects}", &projects)
}

/// Validates the model's answer and maps it onto output entries.
///
/// - matchPercentage > 100 → error (shape violation)
/// - projectId not in the catalog → dropped with a warning
/// - result ranked descending, stable
fn map_recommendations(
    response: LlmRecommendations,
    candidates: &[CandidateProject],
) -> Result<Vec<RecommendationEntry>, AppError> {
    let known_ids: HashSet<Uuid> = candidates.iter().map(|c| c.id).collect();
    let mut entries = Vec::with_capacity(response.recommendations.len());

    for rec in response.recommendations {
        let match_percentage = u8::try_from(rec.match_percentage)
            .ok()
            .filter(|pct| *pct <= 100)
            .ok_or_else(|| {
                AppError::Llm(format!(
                    "matchPercentage {} for project {} is outside 0-100",
                    rec.match_percentage, rec.project_id
                ))
            })?;

        if !known_ids.contains(&rec.project_id) {
            warn!(
                "LLM recommended unknown project {}, dropping entry",
                rec.project_id
            );
            continue;
        }

        entries.push(RecommendationEntry {
            project_id: rec.project_id,
            match_percentage,
            resume_points: rec.resume_points,
            reasoning: rec.reasoning,
        });
    }

    rank_entries(&mut entries);
    Ok(entries)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
