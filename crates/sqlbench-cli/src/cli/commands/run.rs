use crate::cli::args::RunArgs;
use crate::cli::commands::exit_codes;
use sqlbench_core::config::{
    api_key_from_env, BenchConfig, ScoringConfig, ScoringMode, Settings,
};
use sqlbench_core::dataset;
use sqlbench_core::engine::runner::Runner;
use sqlbench_core::errors::BenchError;
use sqlbench_core::providers::judge::{FakeJudge, OpenAiJudge, SqlEquivalenceJudge};
use sqlbench_core::providers::llm::{fake::FakeSqlGenerator, openai::OpenAiGenerator, SqlGenerator};
use sqlbench_core::report::console;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Clone, Copy)]
pub enum DatasetKind {
    Core,
    Expanded,
}

pub async fn run(args: RunArgs, kind: DatasetKind) -> anyhow::Result<i32> {
    let cfg = match resolve_config(&args, kind) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return Ok(exit_codes::CONFIG_ERROR);
        }
    };

    // The credential check happens before any dataset row is read.
    let needs_key = args.provider == "openai" || cfg.scoring.mode == ScoringMode::Judge;
    let api_key = if needs_key && args.provider != "fake" {
        match api_key_from_env() {
            Ok(k) => Some(k),
            Err(e) => {
                eprintln!("{e}");
                return Ok(exit_codes::CONFIG_ERROR);
            }
        }
    } else {
        None
    };

    let temperature = cfg.settings.temperature.unwrap_or(0.0);
    let max_tokens = cfg.settings.max_tokens.unwrap_or(1000);

    let generator: Arc<dyn SqlGenerator> = match args.provider.as_str() {
        "openai" => Arc::new(OpenAiGenerator::new(
            cfg.model.clone(),
            api_key.clone().unwrap_or_default(),
            temperature,
            max_tokens,
        )),
        "fake" => Arc::new(FakeSqlGenerator::new()),
        other => {
            eprintln!("config error: unknown provider '{other}' (expected openai|fake)");
            return Ok(exit_codes::CONFIG_ERROR);
        }
    };

    // Fake provider keeps the judge offline too.
    let judge: Option<Arc<dyn SqlEquivalenceJudge>> = match cfg.scoring.mode {
        ScoringMode::Judge if args.provider == "fake" => Some(Arc::new(FakeJudge)),
        ScoringMode::Judge => Some(Arc::new(OpenAiJudge::new(
            args.judge_model.clone(),
            api_key.clone().unwrap_or_default(),
        ))),
        _ => None,
    };
    let scorer = sqlbench_scorers::scorer_for(&cfg.scoring, judge)?;

    let loaded = match kind {
        DatasetKind::Core => dataset::load_core(&cfg.dataset),
        DatasetKind::Expanded => dataset::load_expanded(&cfg.dataset),
    };
    let records = match loaded {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{e}");
            return Ok(exit_codes::RUN_ERROR);
        }
    };
    info!(
        suite = %cfg.suite,
        provider = generator.provider_name(),
        scorer = scorer.name(),
        records = records.len(),
        "starting benchmark"
    );

    let runner = Runner {
        generator,
        scorer,
        parallel: cfg.settings.parallel.unwrap_or(10),
        timeout: Duration::from_secs(cfg.settings.timeout_seconds.unwrap_or(30)),
    };
    let results = runner.run_suite(&cfg.suite, &cfg.model, &records).await?;

    console::print_summary(&results);

    if let Err(e) = results.write(&cfg.out) {
        eprintln!("{e}");
        return Ok(exit_codes::RUN_ERROR);
    }
    eprintln!("Results written to {}", cfg.out.display());
    Ok(exit_codes::OK)
}

fn resolve_config(args: &RunArgs, kind: DatasetKind) -> Result<BenchConfig, BenchError> {
    if let Some(path) = &args.config {
        return BenchConfig::load(path);
    }

    let (suite, dataset, out) = match kind {
        DatasetKind::Core => ("core", "dataset.csv", "results.json"),
        DatasetKind::Expanded => ("expanded", "dataset-expanded.csv", "results_expanded.json"),
    };
    let mode = ScoringMode::parse(&args.scoring).ok_or_else(|| {
        BenchError::Config(format!(
            "unknown scoring mode '{}' (expected exact|normalized|similarity|judge)",
            args.scoring
        ))
    })?;

    Ok(BenchConfig {
        suite: suite.into(),
        model: args.model.clone(),
        dataset: args.dataset.clone().unwrap_or_else(|| dataset.into()),
        out: args.out.clone().unwrap_or_else(|| out.into()),
        settings: Settings {
            parallel: Some(args.parallel),
            timeout_seconds: Some(args.timeout_seconds),
            temperature: Some(args.temperature),
            max_tokens: Some(args.max_tokens),
        },
        scoring: ScoringConfig {
            mode,
            min_similarity: args.min_similarity,
        },
    })
}
