use std::sync::Arc;

use sqlbench_core::config::{ScoringConfig, ScoringMode};
use sqlbench_core::providers::judge::SqlEquivalenceJudge;
use sqlbench_core::score::Scorer;

mod exact;
mod judge;
mod normalized;
mod similarity;

pub use exact::ExactMatchScorer;
pub use judge::JudgeScorer;
pub use normalized::NormalizedScorer;
pub use similarity::SimilarityScorer;

/// Builds the scorer for the configured comparison rule. `judge` is only
/// required for `ScoringMode::Judge`.
pub fn scorer_for(
    cfg: &ScoringConfig,
    judge: Option<Arc<dyn SqlEquivalenceJudge>>,
) -> anyhow::Result<Arc<dyn Scorer>> {
    match cfg.mode {
        ScoringMode::Exact => Ok(Arc::new(ExactMatchScorer)),
        ScoringMode::Normalized => Ok(Arc::new(NormalizedScorer)),
        ScoringMode::Similarity => Ok(Arc::new(SimilarityScorer {
            min_similarity: cfg.min_similarity,
        })),
        ScoringMode::Judge => {
            let judge = judge.ok_or_else(|| {
                anyhow::anyhow!("config error: judge scoring requires an equivalence judge")
            })?;
            Ok(Arc::new(JudgeScorer::new(judge)))
        }
    }
}
