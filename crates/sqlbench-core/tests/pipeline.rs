use async_trait::async_trait;
use sqlbench_core::dataset;
use sqlbench_core::engine::runner::Runner;
use sqlbench_core::errors::BenchError;
use sqlbench_core::model::{QuestionRecord, Strategy};
use sqlbench_core::providers::llm::fake::FakeSqlGenerator;
use sqlbench_core::score::{ScoreOutcome, Scorer};
use sqlbench_scorers::ExactMatchScorer;
use std::collections::HashSet;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

const Q1: &str = "how many employees are there?";
const SQL1: &str = "SELECT COUNT(*) FROM employees";
const Q2: &str = "list engineering managers";
const SQL2: &str = "SELECT name FROM employees WHERE dept='Engineering' AND role='Manager'";

fn records() -> Vec<QuestionRecord> {
    vec![
        QuestionRecord {
            id: "q001".into(),
            question: Q1.into(),
            expected_sql: SQL1.into(),
        },
        QuestionRecord {
            id: "q002".into(),
            question: Q2.into(),
            expected_sql: SQL2.into(),
        },
    ]
}

fn runner(generator: Arc<FakeSqlGenerator>) -> Runner {
    Runner {
        generator,
        scorer: Arc::new(ExactMatchScorer),
        parallel: 4,
        timeout: Duration::from_secs(5),
    }
}

#[tokio::test]
async fn baseline_perfect_improved_half() {
    let generator = Arc::new(
        FakeSqlGenerator::new()
            .with_sql(Q1, Strategy::Baseline, SQL1)
            .with_sql(Q2, Strategy::Baseline, SQL2)
            .with_sql(Q1, Strategy::Improved, SQL1)
            .with_sql(Q2, Strategy::Improved, "SELECT * FROM departments"),
    );
    let results = runner(generator)
        .run_suite("core", "fake", &records())
        .await
        .unwrap();

    assert_eq!(results.summary[&Strategy::Baseline].accuracy, 1.0);
    assert_eq!(results.summary[&Strategy::Baseline].correct, 2);
    assert_eq!(results.summary[&Strategy::Improved].accuracy, 0.5);
    assert_eq!(results.summary[&Strategy::Improved].correct, 1);

    // Exactly one row per (record, strategy), in input order.
    let pairs: Vec<_> = results
        .results
        .iter()
        .map(|r| (r.record_id.as_str(), r.strategy))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("q001", Strategy::Baseline),
            ("q001", Strategy::Improved),
            ("q002", Strategy::Baseline),
            ("q002", Strategy::Improved),
        ]
    );
    let unique: HashSet<_> = pairs.iter().collect();
    assert_eq!(unique.len(), pairs.len());
}

#[tokio::test]
async fn agent_error_is_recorded_not_fatal() {
    let generator = Arc::new(
        FakeSqlGenerator::new()
            .with_sql(Q1, Strategy::Baseline, SQL1)
            .with_sql(Q2, Strategy::Baseline, SQL2)
            .with_sql(Q1, Strategy::Improved, SQL1)
            .with_error(Q2, Strategy::Improved, "quota exceeded"),
    );
    let results = runner(generator)
        .run_suite("core", "fake", &records())
        .await
        .unwrap();

    let errored = results
        .results
        .iter()
        .find(|r| r.record_id == "q002" && r.strategy == Strategy::Improved)
        .unwrap();
    assert!(!errored.is_correct);
    assert!(errored.generated_sql.is_none());
    let note = errored.note.as_deref().unwrap();
    assert!(note.contains("agent invocation error"), "{note}");
    assert!(note.contains("quota exceeded"), "{note}");

    // The errored record still counts in the denominator.
    let improved = &results.summary[&Strategy::Improved];
    assert_eq!(improved.total, 2);
    assert_eq!(improved.accuracy, 0.5);
}

#[tokio::test]
async fn malformed_dataset_fails_before_any_agent_call() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(f, "question\n{Q1}\n").unwrap();

    let generator = Arc::new(FakeSqlGenerator::new());
    let err = dataset::load_core(f.path()).unwrap_err();
    assert!(matches!(err, BenchError::DatasetFormat(_)), "{err}");
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn unscripted_questions_fall_back_and_score_incorrect() {
    let generator = Arc::new(FakeSqlGenerator::new());
    let results = runner(generator.clone())
        .run_suite("core", "fake", &records())
        .await
        .unwrap();
    assert_eq!(generator.calls(), 4);
    assert!(results.results.iter().all(|r| !r.is_correct));
    assert_eq!(results.summary[&Strategy::Baseline].accuracy, 0.0);
}

struct StallScorer;

#[async_trait]
impl Scorer for StallScorer {
    fn name(&self) -> &'static str {
        "stall"
    }

    async fn score(
        &self,
        _record: &QuestionRecord,
        _generated_sql: &str,
    ) -> anyhow::Result<ScoreOutcome> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(ScoreOutcome::correct())
    }
}

#[tokio::test]
async fn stalled_scorer_times_out_and_run_completes() {
    let generator = Arc::new(
        FakeSqlGenerator::new()
            .with_sql(Q1, Strategy::Baseline, SQL1)
            .with_sql(Q2, Strategy::Baseline, SQL2)
            .with_sql(Q1, Strategy::Improved, SQL1)
            .with_sql(Q2, Strategy::Improved, SQL2),
    );
    let runner = Runner {
        generator,
        scorer: Arc::new(StallScorer),
        parallel: 4,
        timeout: Duration::from_millis(100),
    };
    let results = runner
        .run_suite("core", "fake", &records())
        .await
        .unwrap();

    assert_eq!(results.results.len(), 4);
    for row in &results.results {
        assert!(!row.is_correct);
        // Generation succeeded; only the scoring call was cut off.
        assert!(row.generated_sql.is_some());
        let note = row.note.as_deref().unwrap();
        assert!(note.contains("scoring error"), "{note}");
        assert!(note.contains("timed out"), "{note}");
    }
    assert_eq!(results.summary[&Strategy::Baseline].total, 2);
}
