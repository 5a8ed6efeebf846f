use crate::prompts;
use crate::score::normalize_sql;
use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

/// Equivalence oracle used by the `judge` scoring mode: an LLM is asked
/// whether two queries answer the question equivalently. The trait keeps the
/// oracle swappable so tests stay offline.
#[async_trait]
pub trait SqlEquivalenceJudge: Send + Sync {
    async fn is_equivalent(
        &self,
        question: &str,
        expected_sql: &str,
        generated_sql: &str,
    ) -> anyhow::Result<bool>;
}

pub struct OpenAiJudge {
    pub model: String,
    pub api_key: String,
    pub client: reqwest::Client,
}

impl OpenAiJudge {
    pub fn new(model: String, api_key: String) -> Self {
        Self {
            model,
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SqlEquivalenceJudge for OpenAiJudge {
    async fn is_equivalent(
        &self,
        question: &str,
        expected_sql: &str,
        generated_sql: &str,
    ) -> anyhow::Result<bool> {
        let url = "https://api.openai.com/v1/chat/completions";

        let input = json!({
            "question": question,
            "query1": expected_sql,
            "query2": generated_sql,
        });
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": prompts::EQUIVALENCE_SYSTEM },
                { "role": "user", "content": input.to_string() },
            ],
            "temperature": 0.0,
            "response_format": { "type": "json_object" },
        });

        let resp = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let error_text = resp.text().await.unwrap_or_default();
            anyhow::bail!("OpenAI judge API error ({}): {}", status, error_text);
        }

        let json: serde_json::Value = resp.json().await?;
        let content = json
            .pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .ok_or_else(|| anyhow::anyhow!("OpenAI judge response missing content"))?;

        let verdict: serde_json::Value = serde_json::from_str(content)?;
        let equivalent = verdict
            .get("is_equivalent")
            .and_then(|v| v.as_bool())
            .ok_or_else(|| anyhow::anyhow!("judge verdict missing is_equivalent"))?;

        debug!(equivalent, "judge verdict");
        Ok(equivalent)
    }
}

/// Offline stand-in: equivalence collapses to normalized string equality.
pub struct FakeJudge;

#[async_trait]
impl SqlEquivalenceJudge for FakeJudge {
    async fn is_equivalent(
        &self,
        _question: &str,
        expected_sql: &str,
        generated_sql: &str,
    ) -> anyhow::Result<bool> {
        Ok(normalize_sql(expected_sql) == normalize_sql(generated_sql))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fake_judge_ignores_case_and_spacing() {
        let eq = FakeJudge
            .is_equivalent(
                "how many employees are there?",
                "SELECT COUNT(*) FROM employees",
                "select count(*)  from employees;",
            )
            .await
            .unwrap();
        assert!(eq);
    }

    #[tokio::test]
    async fn fake_judge_rejects_different_queries() {
        let eq = FakeJudge
            .is_equivalent(
                "list engineering managers",
                "SELECT name FROM employees WHERE dept='Engineering'",
                "SELECT * FROM departments",
            )
            .await
            .unwrap();
        assert!(!eq);
    }
}
