use crate::errors::BenchError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable carrying the OpenAI credential.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    pub suite: String,
    pub model: String,
    pub dataset: PathBuf,
    pub out: PathBuf,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub scoring: ScoringConfig,
}

impl BenchConfig {
    pub fn load(path: &Path) -> Result<Self, BenchError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| BenchError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        serde_yaml::from_str(&text)
            .map_err(|e| BenchError::Config(format!("cannot parse {}: {}", path.display(), e)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// Which comparison rule decides `is_correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    Exact,
    Normalized,
    Similarity,
    Judge,
}

impl ScoringMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "exact" => Some(ScoringMode::Exact),
            "normalized" => Some(ScoringMode::Normalized),
            "similarity" => Some(ScoringMode::Similarity),
            "judge" => Some(ScoringMode::Judge),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_mode")]
    pub mode: ScoringMode,
    #[serde(default = "default_min_similarity")]
    pub min_similarity: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            min_similarity: default_min_similarity(),
        }
    }
}

fn default_mode() -> ScoringMode {
    ScoringMode::Normalized
}

fn default_min_similarity() -> f64 {
    0.9
}

/// Resolves the credential for live providers. Callers check this before any
/// dataset row is read so a missing key fails fast.
pub fn api_key_from_env() -> Result<String, BenchError> {
    std::env::var(API_KEY_VAR)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| {
            BenchError::Config(format!(
                "{} is not set; live agent calls need the OpenAI credential",
                API_KEY_VAR
            ))
        })
}
