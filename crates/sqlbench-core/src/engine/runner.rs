use crate::aggregate::Aggregator;
use crate::errors::BenchError;
use crate::model::{QuestionRecord, ResultsFile, ScoredResult, Strategy};
use crate::providers::llm::SqlGenerator;
use crate::score::{ScoreOutcome, Scorer};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::time::{timeout, Duration};
use tracing::{info, warn};

/// Drives one benchmark run: every record is sent through both strategies,
/// scored, and aggregated. Records are independent, so per-record work runs
/// on a bounded pool; results are collected in input order regardless of
/// completion order.
pub struct Runner {
    pub generator: Arc<dyn SqlGenerator>,
    pub scorer: Arc<dyn Scorer>,
    pub parallel: usize,
    pub timeout: Duration,
}

impl Runner {
    pub async fn run_suite(
        &self,
        suite: &str,
        model: &str,
        records: &[QuestionRecord],
    ) -> anyhow::Result<ResultsFile> {
        let parallel = self.parallel.max(1);
        let sem = Arc::new(Semaphore::new(parallel));
        let mut handles = Vec::with_capacity(records.len());

        info!(suite, records = records.len(), parallel, "starting run");

        for rec in records {
            let permit = sem.clone().acquire_owned().await?;
            let generator = self.generator.clone();
            let scorer = self.scorer.clone();
            let per_call = self.timeout;
            let rec = rec.clone();
            handles.push(tokio::spawn(async move {
                let _permit = permit;
                run_record(generator, scorer, per_call, rec).await
            }));
        }

        let mut agg = Aggregator::new(suite, model);
        for h in handles {
            for row in h.await? {
                agg.push(row);
            }
        }
        Ok(agg.finish())
    }
}

async fn run_record(
    generator: Arc<dyn SqlGenerator>,
    scorer: Arc<dyn Scorer>,
    per_call: Duration,
    rec: QuestionRecord,
) -> Vec<ScoredResult> {
    let mut rows = Vec::with_capacity(Strategy::ALL.len());
    for strategy in Strategy::ALL {
        rows.push(run_one(generator.as_ref(), scorer.as_ref(), per_call, &rec, strategy).await);
    }
    rows
}

async fn run_one(
    generator: &dyn SqlGenerator,
    scorer: &dyn Scorer,
    per_call: Duration,
    rec: &QuestionRecord,
    strategy: Strategy,
) -> ScoredResult {
    let start = Instant::now();

    let generated = match timeout(per_call, generator.generate(&rec.question, strategy)).await {
        Ok(Ok(out)) => out,
        Ok(Err(e)) => {
            let err = BenchError::AgentInvocation(e.to_string());
            warn!(record = %rec.id, %strategy, "agent call failed: {e}");
            return errored_row(rec, strategy, err.to_string(), start);
        }
        Err(_) => {
            let err =
                BenchError::AgentInvocation(format!("timed out after {}s", per_call.as_secs()));
            warn!(record = %rec.id, %strategy, "agent call timed out");
            return errored_row(rec, strategy, err.to_string(), start);
        }
    };

    // Same policy as a failed agent call: the record stays in the
    // denominator, the run continues. The timeout also bounds remote judge
    // calls so a stalled scorer cannot block the run.
    let outcome = match timeout(per_call, scorer.score(rec, &generated.sql)).await {
        Ok(Ok(o)) => o,
        Ok(Err(e)) => {
            warn!(record = %rec.id, %strategy, "scoring failed: {e}");
            ScoreOutcome::incorrect(format!("scoring error: {e}"))
        }
        Err(_) => {
            warn!(record = %rec.id, %strategy, "scoring timed out");
            ScoreOutcome::incorrect(format!(
                "scoring error: timed out after {}s",
                per_call.as_secs()
            ))
        }
    };

    info!(record = %rec.id, %strategy, correct = outcome.is_correct, "scored");
    ScoredResult {
        record_id: rec.id.clone(),
        strategy,
        question: rec.question.clone(),
        expected_sql: rec.expected_sql.clone(),
        generated_sql: Some(generated.sql),
        is_correct: outcome.is_correct,
        note: outcome.note,
        duration_ms: Some(start.elapsed().as_millis() as u64),
    }
}

fn errored_row(
    rec: &QuestionRecord,
    strategy: Strategy,
    note: String,
    start: Instant,
) -> ScoredResult {
    ScoredResult {
        record_id: rec.id.clone(),
        strategy,
        question: rec.question.clone(),
        expected_sql: rec.expected_sql.clone(),
        generated_sql: None,
        is_correct: false,
        note: Some(note),
        duration_ms: Some(start.elapsed().as_millis() as u64),
    }
}
