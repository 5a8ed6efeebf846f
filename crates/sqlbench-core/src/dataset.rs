use crate::errors::BenchError;
use crate::model::QuestionRecord;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

#[derive(Debug, Deserialize)]
struct CoreRow {
    question: String,
    sql: String,
}

// The expanded dataset keeps the original question in a third column
// (`original-question`); only the alternative phrasing is benchmarked.
#[derive(Debug, Deserialize)]
struct ExpandedRow {
    #[serde(rename = "alternative-question")]
    alternative_question: String,
    sql: String,
}

/// Loads the core dataset: header row, columns `question` and `sql`.
pub fn load_core(path: &Path) -> Result<Vec<QuestionRecord>, BenchError> {
    let mut rdr = open(path, &["question", "sql"])?;
    let mut records = Vec::new();
    for (idx, row) in rdr.deserialize::<CoreRow>().enumerate() {
        let row = row.map_err(|e| row_error(path, idx, e))?;
        records.push(to_record(path, idx, row.question, row.sql)?);
    }
    info!(path = %path.display(), rows = records.len(), "loaded dataset");
    Ok(records)
}

/// Loads the expanded dataset produced by the alternative-phrasing tooling:
/// columns `original-question`, `alternative-question`, `sql`.
pub fn load_expanded(path: &Path) -> Result<Vec<QuestionRecord>, BenchError> {
    let mut rdr = open(path, &["alternative-question", "sql"])?;
    let mut records = Vec::new();
    for (idx, row) in rdr.deserialize::<ExpandedRow>().enumerate() {
        let row = row.map_err(|e| row_error(path, idx, e))?;
        records.push(to_record(path, idx, row.alternative_question, row.sql)?);
    }
    info!(path = %path.display(), rows = records.len(), "loaded expanded dataset");
    Ok(records)
}

// Header checks happen here so a dataset missing a required column fails
// even when it carries no data rows.
fn open(path: &Path, required: &[&str]) -> Result<csv::Reader<std::fs::File>, BenchError> {
    let mut rdr = csv::Reader::from_path(path)
        .map_err(|e| BenchError::DatasetFormat(format!("{}: {}", path.display(), e)))?;
    let headers = rdr
        .headers()
        .map_err(|e| BenchError::DatasetFormat(format!("{}: {}", path.display(), e)))?;
    for col in required {
        if !headers.iter().any(|h| h == *col) {
            return Err(BenchError::DatasetFormat(format!(
                "{}: missing required column '{}'",
                path.display(),
                col
            )));
        }
    }
    Ok(rdr)
}

fn row_error(path: &Path, idx: usize, e: csv::Error) -> BenchError {
    // +2: one for the header, one for zero-based indexing.
    BenchError::DatasetFormat(format!("{} row {}: {}", path.display(), idx + 2, e))
}

fn to_record(
    path: &Path,
    idx: usize,
    question: String,
    sql: String,
) -> Result<QuestionRecord, BenchError> {
    if question.trim().is_empty() || sql.trim().is_empty() {
        return Err(BenchError::DatasetFormat(format!(
            "{} row {}: empty question or sql",
            path.display(),
            idx + 2
        )));
    }
    Ok(QuestionRecord {
        id: format!("q{:03}", idx + 1),
        question,
        expected_sql: sql,
    })
}
