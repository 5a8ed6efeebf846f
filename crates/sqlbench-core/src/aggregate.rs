use crate::model::{ResultsFile, ScoredResult, Strategy, StrategySummary};
use chrono::Utc;
use std::collections::BTreeMap;

/// Accumulates per-record outcomes and computes the per-strategy summary.
/// Rows are kept in push order so the results file stays deterministic.
pub struct Aggregator {
    suite: String,
    model: String,
    rows: Vec<ScoredResult>,
}

impl Aggregator {
    pub fn new(suite: &str, model: &str) -> Self {
        Self {
            suite: suite.to_string(),
            model: model.to_string(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: ScoredResult) {
        self.rows.push(row);
    }

    pub fn finish(self) -> ResultsFile {
        let mut summary = BTreeMap::new();
        for strategy in Strategy::ALL {
            let total = self.rows.iter().filter(|r| r.strategy == strategy).count();
            let correct = self
                .rows
                .iter()
                .filter(|r| r.strategy == strategy && r.is_correct)
                .count();
            let accuracy = if total == 0 {
                0.0
            } else {
                correct as f64 / total as f64
            };
            summary.insert(
                strategy,
                StrategySummary {
                    correct,
                    total,
                    accuracy,
                },
            );
        }
        ResultsFile {
            suite: self.suite,
            model: self.model,
            generated_at: Utc::now(),
            results: self.rows,
            summary,
        }
    }
}
