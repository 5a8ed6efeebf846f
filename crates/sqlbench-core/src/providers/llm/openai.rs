use super::SqlGenerator;
use crate::model::{GenerationOutput, Strategy};
use crate::prompts;
use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

pub struct OpenAiGenerator {
    pub model: String,
    pub api_key: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub client: reqwest::Client,
}

impl OpenAiGenerator {
    pub fn new(model: String, api_key: String, temperature: f32, max_tokens: u32) -> Self {
        Self {
            model,
            api_key,
            temperature,
            max_tokens,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SqlGenerator for OpenAiGenerator {
    async fn generate(
        &self,
        question: &str,
        strategy: Strategy,
    ) -> anyhow::Result<GenerationOutput> {
        let url = "https://api.openai.com/v1/chat/completions";

        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": prompts::system_prompt(strategy) },
                { "role": "user", "content": question },
            ],
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
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
            anyhow::bail!("OpenAI chat API error ({}): {}", status, error_text);
        }

        let json: serde_json::Value = resp.json().await?;
        let text = json
            .pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .ok_or_else(|| anyhow::anyhow!("OpenAI API response missing content"))?;

        debug!(%strategy, len = text.len(), "received completion");
        Ok(GenerationOutput {
            sql: strip_code_fences(text).to_string(),
            model: self.model.clone(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}

// Models often wrap the query in a markdown fence despite the prompt.
pub(crate) fn strip_code_fences(text: &str) -> &str {
    let t = text.trim();
    let Some(rest) = t.strip_prefix("```") else {
        return t;
    };
    let rest = rest
        .strip_prefix("sql")
        .or_else(|| rest.strip_prefix("SQL"))
        .unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

#[cfg(test)]
mod tests {
    use super::strip_code_fences;

    #[test]
    fn passes_plain_sql_through() {
        assert_eq!(
            strip_code_fences("SELECT 1 FROM employees"),
            "SELECT 1 FROM employees"
        );
    }

    #[test]
    fn strips_sql_fence() {
        assert_eq!(
            strip_code_fences("```sql\nSELECT COUNT(*) FROM employees\n```"),
            "SELECT COUNT(*) FROM employees"
        );
    }

    #[test]
    fn strips_anonymous_fence() {
        assert_eq!(strip_code_fences("```\nSELECT 1\n```"), "SELECT 1");
    }
}
