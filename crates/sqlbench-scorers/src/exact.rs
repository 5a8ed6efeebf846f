use async_trait::async_trait;
use sqlbench_core::model::QuestionRecord;
use sqlbench_core::score::{ScoreOutcome, Scorer};

pub struct ExactMatchScorer;

#[async_trait]
impl Scorer for ExactMatchScorer {
    fn name(&self) -> &'static str {
        "exact"
    }

    async fn score(
        &self,
        record: &QuestionRecord,
        generated_sql: &str,
    ) -> anyhow::Result<ScoreOutcome> {
        if generated_sql == record.expected_sql {
            Ok(ScoreOutcome::correct())
        } else {
            Ok(ScoreOutcome::incorrect("generated sql differs from expected"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sql: &str) -> QuestionRecord {
        QuestionRecord {
            id: "q001".into(),
            question: "how many employees are there?".into(),
            expected_sql: sql.into(),
        }
    }

    #[tokio::test]
    async fn matches_identical_sql() {
        let rec = record("SELECT COUNT(*) FROM employees");
        let outcome = ExactMatchScorer
            .score(&rec, "SELECT COUNT(*) FROM employees")
            .await
            .unwrap();
        assert!(outcome.is_correct);
    }

    #[tokio::test]
    async fn rejects_case_differences() {
        let rec = record("SELECT COUNT(*) FROM employees");
        let outcome = ExactMatchScorer
            .score(&rec, "select count(*) from employees")
            .await
            .unwrap();
        assert!(!outcome.is_correct);
        assert!(outcome.note.is_some());
    }

    #[tokio::test]
    async fn is_deterministic() {
        let rec = record("SELECT 1");
        let a = ExactMatchScorer.score(&rec, "SELECT 2").await.unwrap();
        let b = ExactMatchScorer.score(&rec, "SELECT 2").await.unwrap();
        assert_eq!(a.is_correct, b.is_correct);
        assert_eq!(a.note, b.note);
    }
}
