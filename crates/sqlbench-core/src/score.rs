use crate::model::QuestionRecord;
use async_trait::async_trait;

#[derive(Debug, Clone, Default)]
pub struct ScoreOutcome {
    pub is_correct: bool,
    pub note: Option<String>,
}

impl ScoreOutcome {
    pub fn correct() -> Self {
        Self {
            is_correct: true,
            note: None,
        }
    }

    pub fn incorrect(note: impl Into<String>) -> Self {
        Self {
            is_correct: false,
            note: Some(note.into()),
        }
    }
}

/// Comparison rule applied to a generated query. Implementations live in
/// `sqlbench-scorers`; the trait is async because the judge rule makes a
/// remote call.
#[async_trait]
pub trait Scorer: Send + Sync {
    fn name(&self) -> &'static str;

    async fn score(
        &self,
        record: &QuestionRecord,
        generated_sql: &str,
    ) -> anyhow::Result<ScoreOutcome>;
}

/// Case folding, whitespace collapse, trailing-semicolon trim. Shared by the
/// normalized and similarity rules and by the fake judge.
pub fn normalize_sql(sql: &str) -> String {
    let mut s = sql.split_whitespace().collect::<Vec<_>>().join(" ");
    s.make_ascii_lowercase();
    s.trim_end_matches(';').trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_collapses_whitespace_and_case() {
        assert_eq!(
            normalize_sql("SELECT  *\n  FROM Employees ;"),
            "select * from employees"
        );
    }

    #[test]
    fn normalization_is_deterministic() {
        let sql = "SELECT COUNT(*) FROM employees WHERE is_active = true";
        assert_eq!(normalize_sql(sql), normalize_sql(sql));
    }
}
