use async_trait::async_trait;
use sqlbench_core::model::QuestionRecord;
use sqlbench_core::score::{normalize_sql, ScoreOutcome, Scorer};

/// Normalized Levenshtein similarity over normalized SQL text. Tolerates
/// alias and formatting drift that normalized equality rejects.
pub struct SimilarityScorer {
    pub min_similarity: f64,
}

#[async_trait]
impl Scorer for SimilarityScorer {
    fn name(&self) -> &'static str {
        "similarity"
    }

    async fn score(
        &self,
        record: &QuestionRecord,
        generated_sql: &str,
    ) -> anyhow::Result<ScoreOutcome> {
        let score = strsim::normalized_levenshtein(
            &normalize_sql(generated_sql),
            &normalize_sql(&record.expected_sql),
        );
        if score >= self.min_similarity {
            Ok(ScoreOutcome::correct())
        } else {
            Ok(ScoreOutcome::incorrect(format!(
                "similarity {:.3} below threshold {:.3}",
                score, self.min_similarity
            )))
        }
    }
}
