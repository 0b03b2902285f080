use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analysis::analyzer::{analyze_repository, fallback_analysis, RepoAnalysis};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub repo_url: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub analysis: RepoAnalysis,
    pub repo_url: String,
}

/// POST /api/v1/analyze
///
/// Returns the LLM analysis, or the static fallback when the LLM call fails.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let repo_url = request.repo_url.trim().to_string();
    if repo_url.is_empty() {
        return Err(AppError::Validation("Repository URL is required".to_string()));
    }

    let analysis = match analyze_repository(&state.llm, &repo_url).await {
        Ok(analysis) => analysis,
        Err(e) => {
            warn!("Repository analysis failed, using static fallback: {e}");
            fallback_analysis()
        }
    };

    Ok(Json(AnalyzeResponse { analysis, repo_url }))
}
