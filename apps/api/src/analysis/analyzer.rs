//! Repository analyzer: asks the LLM for a plausibly-shaped analysis of a URL.
//!
//! No correctness guarantee: the model never sees repository contents. Callers
//! substitute `fallback_analysis()` on any failure.

use serde::{Deserialize, Serialize};

use crate::analysis::prompts::{ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::LlmClient;

const INSIGHT_UNAVAILABLE: &str = "Analysis unavailable";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Complexity {
    Low,
    #[default]
    Medium,
    High,
}

fn insight_unavailable() -> String {
    INSIGHT_UNAVAILABLE.to_string()
}

/// Each field defaults on its own, so a partial answer from the model is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    #[serde(rename(deserialize = "codeQuality"), default = "insight_unavailable")]
    pub code_quality: String,
    #[serde(rename(deserialize = "learningValue"), default = "insight_unavailable")]
    pub learning_value: String,
    #[serde(rename(deserialize = "portfolioImpact"), default = "insight_unavailable")]
    pub portfolio_impact: String,
}

impl Default for Insights {
    fn default() -> Self {
        Self {
            code_quality: insight_unavailable(),
            learning_value: insight_unavailable(),
            portfolio_impact: insight_unavailable(),
        }
    }
}

/// Deserialized from the model (camelCase insight keys), serialized to clients in snake_case.
/// Missing keys take defaults; wrongly-typed keys are a parse failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoAnalysis {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub complexity: Complexity,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub insights: Insights,
}

pub fn build_analysis_prompt(repo_url: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE.replace("{repo_url}", repo_url)
}

pub async fn analyze_repository(llm: &LlmClient, repo_url: &str) -> Result<RepoAnalysis, AppError> {
    let prompt = build_analysis_prompt(repo_url);
    let system = format!("{ANALYSIS_SYSTEM} {JSON_ONLY_INSTRUCTION}");
    llm.call_json::<RepoAnalysis>(&prompt, &system)
        .await
        .map_err(|e| AppError::Llm(format!("Repository analysis failed: {e}")))
}

/// Static answer served whenever the LLM call fails. Never recomputed.
pub fn fallback_analysis() -> RepoAnalysis {
    RepoAnalysis {
        skills: vec![
            "JavaScript".to_string(),
            "Git".to_string(),
            "Web Development".to_string(),
        ],
        complexity: Complexity::Medium,
        recommendations: vec![
            "Add comprehensive README documentation".to_string(),
            "Implement unit tests for better code reliability".to_string(),
            "Consider adding CI/CD pipeline for automated testing".to_string(),
        ],
        insights: Insights {
            code_quality: "Repository analysis is temporarily unavailable. Please try again later."
                .to_string(),
            learning_value: "This project demonstrates fundamental software development practices."
                .to_string(),
            portfolio_impact: "A well-documented project can significantly enhance your portfolio."
                .to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::parse_json_text;

    #[test]
    fn test_full_analysis_deserializes() {
        let json = r#"{
            "skills": ["Rust", "Tokio"],
            "complexity": "High",
            "recommendations": ["Add benchmarks"],
            "insights": {
                "codeQuality": "Idiomatic",
                "learningValue": "Async networking",
                "portfolioImpact": "Strong"
            }
        }"#;
        let analysis: RepoAnalysis = parse_json_text(json).unwrap();
        assert_eq!(analysis.complexity, Complexity::High);
        assert_eq!(analysis.skills, vec!["Rust".to_string(), "Tokio".to_string()]);
        assert_eq!(analysis.insights.learning_value, "Async networking");
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let analysis: RepoAnalysis = parse_json_text(r#"{"skills": ["Go"]}"#).unwrap();
        assert_eq!(analysis.complexity, Complexity::Medium);
        assert!(analysis.recommendations.is_empty());
        assert_eq!(analysis.insights.code_quality, INSIGHT_UNAVAILABLE);
    }

    #[test]
    fn test_partial_insights_keep_model_fields() {
        let json = r#"{
            "skills": ["Python"],
            "complexity": "Low",
            "insights": {"codeQuality": "Readable"}
        }"#;
        let analysis: RepoAnalysis = parse_json_text(json).unwrap();
        assert_eq!(analysis.complexity, Complexity::Low);
        assert_eq!(analysis.insights.code_quality, "Readable");
        assert_eq!(analysis.insights.learning_value, INSIGHT_UNAVAILABLE);
        assert_eq!(analysis.insights.portfolio_impact, INSIGHT_UNAVAILABLE);
    }

    #[test]
    fn test_unknown_complexity_is_parse_failure() {
        let result: Result<RepoAnalysis, _> = parse_json_text(r#"{"complexity": "Extreme"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serializes_snake_case_for_clients() {
        let value = serde_json::to_value(fallback_analysis()).unwrap();
        assert!(value["insights"]["code_quality"].is_string());
        assert_eq!(value["complexity"], "Medium");
    }

    #[test]
    fn test_prompt_embeds_url_only() {
        let prompt = build_analysis_prompt("https://github.com/example/chat-app");
        assert!(prompt.contains("insights: https://github.com/example/chat-app"));
        assert!(!prompt.contains("{repo_url}"));
    }

    #[test]
    fn test_fallback_is_stable() {
        assert_eq!(fallback_analysis(), fallback_analysis());
        assert_eq!(fallback_analysis().recommendations.len(), 3);
    }
}
