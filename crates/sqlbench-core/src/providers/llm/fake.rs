use super::SqlGenerator;
use crate::model::{GenerationOutput, Strategy};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

enum FakeResponse {
    Sql(String),
    Error(String),
}

/// Deterministic generator for tests and offline runs. Responses are keyed by
/// (question, strategy); unscripted questions fall back to a canned query.
/// Counts calls so tests can assert nothing ran.
#[derive(Default)]
pub struct FakeSqlGenerator {
    responses: HashMap<(String, Strategy), FakeResponse>,
    calls: AtomicUsize,
}

impl FakeSqlGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sql(
        mut self,
        question: impl Into<String>,
        strategy: Strategy,
        sql: impl Into<String>,
    ) -> Self {
        self.responses
            .insert((question.into(), strategy), FakeResponse::Sql(sql.into()));
        self
    }

    pub fn with_error(
        mut self,
        question: impl Into<String>,
        strategy: Strategy,
        message: impl Into<String>,
    ) -> Self {
        self.responses.insert(
            (question.into(), strategy),
            FakeResponse::Error(message.into()),
        );
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SqlGenerator for FakeSqlGenerator {
    async fn generate(
        &self,
        question: &str,
        strategy: Strategy,
    ) -> anyhow::Result<GenerationOutput> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.responses.get(&(question.to_string(), strategy)) {
            Some(FakeResponse::Sql(sql)) => Ok(GenerationOutput {
                sql: sql.clone(),
                model: "fake".into(),
            }),
            Some(FakeResponse::Error(message)) => anyhow::bail!("{}", message),
            None => Ok(GenerationOutput {
                sql: "SELECT 1".into(),
                model: "fake".into(),
            }),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}
