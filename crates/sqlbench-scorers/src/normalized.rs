use async_trait::async_trait;
use sqlbench_core::model::QuestionRecord;
use sqlbench_core::score::{normalize_sql, ScoreOutcome, Scorer};

/// Equality after case folding, whitespace collapse, and trailing-semicolon
/// trim. The default rule.
pub struct NormalizedScorer;

#[async_trait]
impl Scorer for NormalizedScorer {
    fn name(&self) -> &'static str {
        "normalized"
    }

    async fn score(
        &self,
        record: &QuestionRecord,
        generated_sql: &str,
    ) -> anyhow::Result<ScoreOutcome> {
        if normalize_sql(generated_sql) == normalize_sql(&record.expected_sql) {
            Ok(ScoreOutcome::correct())
        } else {
            Ok(ScoreOutcome::incorrect(
                "normalized sql differs from expected",
            ))
        }
    }
}
