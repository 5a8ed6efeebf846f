use crate::model::{GenerationOutput, Strategy};
use async_trait::async_trait;

/// The agent boundary: maps a natural-language question to a SQL query using
/// the given prompting strategy.
#[async_trait]
pub trait SqlGenerator: Send + Sync {
    async fn generate(&self, question: &str, strategy: Strategy)
        -> anyhow::Result<GenerationOutput>;

    fn provider_name(&self) -> &'static str;
}

pub mod fake;
pub mod openai;
