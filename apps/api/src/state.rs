use std::sync::Arc;

use sqlx::PgPool;

use crate::llm_client::LlmClient;
use crate::recommendation::strategy::RecommendationStrategy;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Used directly by repository analysis; the recommender holds its own clone.
    pub llm: LlmClient,
    /// Pluggable recommender. Production: `FailoverRecommender` (LLM tier, fallback scorer).
    pub recommender: Arc<dyn RecommendationStrategy>,
}
