use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sqlbench",
    version,
    about = "Benchmark harness comparing prompt strategies for text-to-SQL agents"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Process the core dataset (dataset.csv -> results.json)
    Run(RunArgs),
    /// Process the expanded dataset (dataset-expanded.csv -> results_expanded.json)
    RunExpanded(RunArgs),
    /// Render comparison charts from existing results files
    Charts(ChartsArgs),
}

#[derive(clap::Args, Clone)]
pub struct RunArgs {
    /// Input CSV; defaults to dataset.csv (dataset-expanded.csv for run-expanded)
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// Output results file; defaults to results.json (results_expanded.json for run-expanded)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Optional YAML config; when given it takes precedence over the flags below
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Agent provider: openai|fake
    #[arg(long, default_value = "openai")]
    pub provider: String,

    #[arg(long, default_value = "gpt-4o-mini")]
    pub model: String,

    /// Model used by the equivalence judge (--scoring judge)
    #[arg(long, default_value = "gpt-4o")]
    pub judge_model: String,

    /// Bounded worker pool size
    #[arg(long, default_value_t = 10)]
    pub parallel: usize,

    /// Per-call timeout for agent invocations
    #[arg(long, default_value_t = 30)]
    pub timeout_seconds: u64,

    #[arg(long, default_value_t = 0.0)]
    pub temperature: f32,

    #[arg(long, default_value_t = 1000)]
    pub max_tokens: u32,

    /// Comparison rule: exact|normalized|similarity|judge
    #[arg(long, default_value = "normalized")]
    pub scoring: String,

    /// Threshold for --scoring similarity
    #[arg(long, default_value_t = 0.9)]
    pub min_similarity: f64,
}

#[derive(clap::Args, Clone)]
pub struct ChartsArgs {
    #[arg(long, default_value = "results.json")]
    pub results: PathBuf,

    /// Optional second results file; enables the combined chart when present
    #[arg(long, default_value = "results_expanded.json")]
    pub expanded_results: PathBuf,

    #[arg(long, default_value = "charts")]
    pub out_dir: PathBuf,
}
