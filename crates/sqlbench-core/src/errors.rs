use std::path::PathBuf;
use thiserror::Error;

/// Failure taxonomy for a benchmark run.
///
/// Policy: a malformed dataset or a failed results write aborts the run; a
/// failed agent call only fails that record and the batch continues.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("dataset format error: {0}")]
    DatasetFormat(String),

    #[error("agent invocation error: {0}")]
    AgentInvocation(String),

    #[error("persistence error writing {path}: {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {0}")]
    Config(String),
}
