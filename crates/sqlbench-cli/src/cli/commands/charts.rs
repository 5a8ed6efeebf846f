use crate::charts;
use crate::cli::args::ChartsArgs;
use crate::cli::commands::exit_codes;
use sqlbench_core::model::ResultsFile;

pub fn run(args: ChartsArgs) -> anyhow::Result<i32> {
    let results = match ResultsFile::read(&args.results) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("cannot read {}: {e}", args.results.display());
            return Ok(exit_codes::RUN_ERROR);
        }
    };

    let expanded = if args.expanded_results.exists() {
        Some(ResultsFile::read(&args.expanded_results)?)
    } else {
        None
    };

    let written = charts::render_all(&results, expanded.as_ref(), &args.out_dir)?;
    for path in &written {
        eprintln!("wrote {}", path.display());
    }
    Ok(exit_codes::OK)
}
