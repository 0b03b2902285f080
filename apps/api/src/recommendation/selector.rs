//! Failover selector: the primary strategy answers unless it errors, in which case
//! the fallback scorer answers with the same inputs. Callers never learn which tier ran.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::recommendation::fallback::FallbackScorer;
use crate::recommendation::strategy::{
    CandidateProject, RecommendationEntry, RecommendationStrategy, SkillProfile,
};

pub struct FailoverRecommender {
    primary: Box<dyn RecommendationStrategy>,
    fallback: FallbackScorer,
}

impl FailoverRecommender {
    pub fn new(primary: Box<dyn RecommendationStrategy>, fallback: FallbackScorer) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl RecommendationStrategy for FailoverRecommender {
    fn name(&self) -> &'static str {
        "failover"
    }

    async fn recommend(
        &self,
        profile: &SkillProfile,
        candidates: &[CandidateProject],
    ) -> Result<Vec<RecommendationEntry>, AppError> {
        if candidates.is_empty() {
            return Ok(vec![]);
        }

        match self.primary.recommend(profile, candidates).await {
            Ok(entries) => {
                info!(
                    "Recommendations served by '{}' tier ({} entries)",
                    self.primary.name(),
                    entries.len()
                );
                Ok(entries)
            }
            Err(e) => {
                warn!(
                    "Recommendation tier '{}' failed, using '{}' instead: {e}",
                    self.primary.name(),
                    self.fallback.name()
                );
                self.fallback.recommend(profile, candidates).await
            }
        }
    }
}
