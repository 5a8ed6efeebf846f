//! Chart rendering over persisted results files. Purely presentational:
//! reads a `ResultsFile`, writes SVG artifacts, feeds nothing back into the
//! benchmark loop.

use plotters::prelude::*;
use sqlbench_core::model::{ResultsFile, ScoredResult, Strategy};
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

pub const CATEGORIES: [&str; 6] = [
    "department",
    "leave",
    "location",
    "management",
    "client",
    "other",
];

const BASELINE_COLOR: RGBColor = RGBColor(0x99, 0x99, 0x99);
const PRIMARY_COLOR: RGBColor = RGBColor(0x00, 0x00, 0xff);
const SECONDARY_COLOR: RGBColor = RGBColor(0x88, 0x88, 0xff);

struct Bar {
    label: String,
    value: f64,
    text: String,
    color: RGBColor,
}

pub fn render_all(
    results: &ResultsFile,
    expanded: Option<&ResultsFile>,
    out_dir: &Path,
) -> anyhow::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)?;
    let mut written = Vec::new();
    written.push(accuracy_chart(results, out_dir, "original")?);
    written.push(distribution_chart(results, out_dir, "original")?);
    written.push(error_chart(results, out_dir, "original")?);
    if let Some(exp) = expanded {
        written.push(accuracy_chart(exp, out_dir, "expanded")?);
        written.push(distribution_chart(exp, out_dir, "expanded")?);
        written.push(error_chart(exp, out_dir, "expanded")?);
        written.push(combined_accuracy_chart(results, exp, out_dir)?);
        written.push(comparative_distribution_chart(results, exp, out_dir)?);
    }
    Ok(written)
}

/// Keyword categorizer for the distribution chart.
pub fn categorize(question: &str) -> &'static str {
    let q = question.to_lowercase();
    let keyword_sets: [(&str, &[&str]); 5] = [
        (
            "department",
            &["department", "engineering", "sales", "hr", "design", "operations"],
        ),
        (
            "leave",
            &["leave", "vacation", "sick", "birthday", "out of office"],
        ),
        ("location", &["location", "remote", "london", "new york"]),
        ("management", &["manager", "report"]),
        ("client", &["client", "marketing", "apollo"]),
    ];
    for (category, keywords) in keyword_sets {
        if keywords.iter().any(|k| q.contains(k)) {
            return category;
        }
    }
    "other"
}

fn accuracy_pct(results: &ResultsFile, strategy: Strategy) -> f64 {
    results
        .summary
        .get(&strategy)
        .map(|s| s.accuracy * 100.0)
        .unwrap_or(0.0)
}

fn accuracy_chart(results: &ResultsFile, out_dir: &Path, suffix: &str) -> anyhow::Result<PathBuf> {
    let path = out_dir.join(format!("agent_accuracy_{suffix}.svg"));
    let bars = [Strategy::Baseline, Strategy::Improved]
        .into_iter()
        .map(|s| {
            let pct = accuracy_pct(results, s);
            Bar {
                label: s.as_str().to_string(),
                value: pct,
                text: format!("{pct:.1}%"),
                color: strategy_color(s),
            }
        })
        .collect::<Vec<_>>();
    draw_bars(
        &path,
        &format!("Query Accuracy ({suffix} dataset)"),
        "Accuracy (%)",
        &bars,
        110.0,
    )?;
    Ok(path)
}

fn distribution_chart(
    results: &ResultsFile,
    out_dir: &Path,
    suffix: &str,
) -> anyhow::Result<PathBuf> {
    let path = out_dir.join(format!("query_distribution_{suffix}.svg"));
    let counts = category_counts(results);
    let bars = CATEGORIES
        .iter()
        .map(|c| {
            let n = counts.get(c).copied().unwrap_or(0);
            Bar {
                label: c.to_string(),
                value: n as f64,
                text: n.to_string(),
                color: PRIMARY_COLOR,
            }
        })
        .collect::<Vec<_>>();
    let y_max = bars.iter().map(|b| b.value).fold(1.0, f64::max) * 1.2;
    draw_bars(
        &path,
        &format!("Distribution of Query Types ({suffix})"),
        "Number of Queries",
        &bars,
        y_max,
    )?;
    Ok(path)
}

fn error_chart(results: &ResultsFile, out_dir: &Path, suffix: &str) -> anyhow::Result<PathBuf> {
    let path = out_dir.join(format!("error_analysis_{suffix}.svg"));
    let record_ids: BTreeSet<&str> = results
        .results
        .iter()
        .map(|r| r.record_id.as_str())
        .collect();
    let errored: BTreeSet<&str> = results
        .results
        .iter()
        .filter(|r| r.generated_sql.is_none())
        .map(|r| r.record_id.as_str())
        .collect();
    let with_errors = errored.len();
    let without_errors = record_ids.len() - with_errors;
    let bars = vec![
        Bar {
            label: "with errors".into(),
            value: with_errors as f64,
            text: with_errors.to_string(),
            color: SECONDARY_COLOR,
        },
        Bar {
            label: "without errors".into(),
            value: without_errors as f64,
            text: without_errors.to_string(),
            color: PRIMARY_COLOR,
        },
    ];
    let y_max = bars.iter().map(|b| b.value).fold(1.0, f64::max) * 1.2;
    draw_bars(
        &path,
        &format!("Query Error Analysis ({suffix})"),
        "Number of Queries",
        &bars,
        y_max,
    )?;
    Ok(path)
}

fn combined_accuracy_chart(
    core: &ResultsFile,
    expanded: &ResultsFile,
    out_dir: &Path,
) -> anyhow::Result<PathBuf> {
    let path = out_dir.join("combined_accuracy.svg");
    let mut bars = Vec::new();
    for (name, file) in [("core", core), ("expanded", expanded)] {
        for strategy in [Strategy::Baseline, Strategy::Improved] {
            let pct = accuracy_pct(file, strategy);
            bars.push(Bar {
                label: format!("{} ({name})", strategy.as_str()),
                value: pct,
                text: format!("{pct:.1}%"),
                color: strategy_color(strategy),
            });
        }
    }
    draw_bars(
        &path,
        "Agent Accuracy: Core vs Expanded Dataset",
        "Accuracy (%)",
        &bars,
        110.0,
    )?;
    Ok(path)
}

fn category_counts(results: &ResultsFile) -> HashMap<&'static str, usize> {
    let mut counts: HashMap<&'static str, usize> = HashMap::new();
    for (_, question) in unique_records(results) {
        *counts.entry(categorize(question)).or_default() += 1;
    }
    counts
}

fn comparative_distribution_chart(
    core: &ResultsFile,
    expanded: &ResultsFile,
    out_dir: &Path,
) -> anyhow::Result<PathBuf> {
    let path = out_dir.join("comparative_distribution.svg");
    let core_counts = category_counts(core);
    let expanded_counts = category_counts(expanded);
    let mut bars = Vec::new();
    for category in CATEGORIES {
        for (name, counts, color) in [
            ("core", &core_counts, PRIMARY_COLOR),
            ("expanded", &expanded_counts, SECONDARY_COLOR),
        ] {
            let n = counts.get(category).copied().unwrap_or(0);
            bars.push(Bar {
                label: format!("{category} ({name})"),
                value: n as f64,
                text: n.to_string(),
                color,
            });
        }
    }
    let y_max = bars.iter().map(|b| b.value).fold(1.0, f64::max) * 1.2;
    draw_bars(
        &path,
        "Query Type Distribution: Core vs Expanded Dataset",
        "Number of Queries",
        &bars,
        y_max,
    )?;
    Ok(path)
}

fn strategy_color(strategy: Strategy) -> RGBColor {
    match strategy {
        Strategy::Baseline => BASELINE_COLOR,
        Strategy::Improved => PRIMARY_COLOR,
    }
}

// One question per record; results carry a row per strategy.
fn unique_records(results: &ResultsFile) -> Vec<(&str, &str)> {
    let mut seen = BTreeSet::new();
    let mut records = Vec::new();
    for ScoredResult {
        record_id,
        question,
        ..
    } in &results.results
    {
        if seen.insert(record_id.as_str()) {
            records.push((record_id.as_str(), question.as_str()));
        }
    }
    records
}

fn draw_bars(
    path: &Path,
    title: &str,
    y_desc: &str,
    bars: &[Bar],
    y_max: f64,
) -> anyhow::Result<()> {
    let root = SVGBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d((0..bars.len()).into_segmented(), 0f64..y_max)?;

    let labels: Vec<String> = bars.iter().map(|b| b.label.clone()).collect();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc(y_desc)
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                labels.get(*i).cloned().unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        })
        .draw()?;

    for (i, bar) in bars.iter().enumerate() {
        chart.draw_series(std::iter::once(Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), bar.value),
            ],
            bar.color.filled(),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            bar.text.clone(),
            (SegmentValue::CenterOf(i), bar.value),
            ("sans-serif", 16),
        )))?;
    }

    root.present()?;
    Ok(())
}
