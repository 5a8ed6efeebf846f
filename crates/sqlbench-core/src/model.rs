use crate::errors::BenchError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A named prompting configuration given to the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Baseline,
    Improved,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Baseline, Strategy::Improved];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Baseline => "baseline",
            Strategy::Improved => "improved",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One natural-language question paired with its expected SQL.
/// Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: String,
    pub question: String,
    pub expected_sql: String,
}

/// What one agent call returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOutput {
    pub sql: String,
    pub model: String,
}

/// Outcome for one (record, strategy) pair. `generated_sql` is absent when
/// the agent call itself failed; `note` then carries the error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredResult {
    pub record_id: String,
    pub strategy: Strategy,
    pub question: String,
    pub expected_sql: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_sql: Option<String>,
    pub is_correct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategySummary {
    pub correct: usize,
    pub total: usize,
    pub accuracy: f64,
}

/// The run's sole durable output. Invariant: exactly one `ScoredResult` per
/// (record_id, strategy) pair, in input order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsFile {
    pub suite: String,
    pub model: String,
    pub generated_at: DateTime<Utc>,
    pub results: Vec<ScoredResult>,
    pub summary: BTreeMap<Strategy, StrategySummary>,
}

impl ResultsFile {
    pub fn write(&self, path: &Path) -> Result<(), BenchError> {
        let json = serde_json::to_string_pretty(self).map_err(|e| BenchError::Persistence {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        })?;
        std::fs::write(path, json).map_err(|e| BenchError::Persistence {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
