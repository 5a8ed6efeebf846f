use crate::model::{ResultsFile, Strategy};

pub fn print_summary(results: &ResultsFile) {
    eprintln!(
        "\nScored {} questions x {} strategies...",
        results.results.len() / Strategy::ALL.len().max(1),
        Strategy::ALL.len()
    );

    for r in &results.results {
        let duration = r
            .duration_ms
            .map(|d| format!("({:.1}s)", d as f64 / 1000.0))
            .unwrap_or_default();
        if r.is_correct {
            eprintln!("✅ {:<6} {:<9} {}", r.record_id, r.strategy.as_str(), duration);
        } else if r.generated_sql.is_none() {
            eprintln!(
                "💥 {:<6} {:<9} ERROR: {}",
                r.record_id,
                r.strategy.as_str(),
                r.note.as_deref().unwrap_or("unknown")
            );
        } else {
            eprintln!(
                "❌ {:<6} {:<9} {}  {}",
                r.record_id,
                r.strategy.as_str(),
                r.note.as_deref().unwrap_or("mismatch"),
                duration
            );
        }
    }

    eprintln!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for (strategy, s) in &results.summary {
        eprintln!(
            "{:<9} {}/{} correct ({:.1}%)",
            strategy.as_str(),
            s.correct,
            s.total,
            s.accuracy * 100.0
        );
    }
}
