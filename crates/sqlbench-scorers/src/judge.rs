use async_trait::async_trait;
use sqlbench_core::model::QuestionRecord;
use sqlbench_core::providers::judge::SqlEquivalenceJudge;
use sqlbench_core::score::{ScoreOutcome, Scorer};
use std::sync::Arc;
use tracing::debug;

/// Delegates equivalence to an LLM judge. Judge failures propagate to the
/// runner, which records the row as incorrect without aborting the batch.
pub struct JudgeScorer {
    judge: Arc<dyn SqlEquivalenceJudge>,
}

impl JudgeScorer {
    pub fn new(judge: Arc<dyn SqlEquivalenceJudge>) -> Self {
        Self { judge }
    }
}

#[async_trait]
impl Scorer for JudgeScorer {
    fn name(&self) -> &'static str {
        "judge"
    }

    async fn score(
        &self,
        record: &QuestionRecord,
        generated_sql: &str,
    ) -> anyhow::Result<ScoreOutcome> {
        let equivalent = self
            .judge
            .is_equivalent(&record.question, &record.expected_sql, generated_sql)
            .await?;
        debug!(record = %record.id, equivalent, "judge scored");
        if equivalent {
            Ok(ScoreOutcome::correct())
        } else {
            Ok(ScoreOutcome::incorrect("judge ruled queries not equivalent"))
        }
    }
}
