//! Show the intermediate results of a classification.

use std::path::PathBuf;

use anyhow::Context;
use spinetrace_common::config::AppConfig;

use super::{build_classifier, load_raster, ClassifierOverrides};

pub fn run(
    config: &AppConfig,
    path: PathBuf,
    overrides: &ClassifierOverrides,
    json: bool,
) -> anyhow::Result<()> {
    let classifier = build_classifier(config, overrides)?;
    let mut raster = load_raster(&path)?;
    let analysis = classifier
        .analyze(&mut raster)
        .with_context(|| format!("Failed to trace {}", path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    let trace = &analysis.trace;
    let step = classifier.config().step;

    println!("Trace of: {}", path.display());
    println!(
        "  Rows: {} (raster rows {}..={})",
        trace.len(),
        trace.rows.first().copied().unwrap_or_default(),
        trace.rows.last().copied().unwrap_or_default()
    );

    let gaps = trace.gap_rows();
    if gaps.is_empty() {
        println!("  Gaps: none");
    } else {
        println!("  Gaps: {} blank rows skipped", gaps.len());
    }
    println!();

    println!("Samples (every {step} rows):");
    println!("  {:>6} {:>6} {:>6} {:>7}", "index", "row", "x", "delta");
    for i in (0..trace.len()).step_by(step) {
        let delta = analysis
            .deltas
            .get(i)
            .map_or_else(|| "-".to_string(), |d| d.to_string());
        println!(
            "  {:>6} {:>6} {:>6} {:>7}",
            i, trace.rows[i], trace.positions[i], delta
        );
    }
    println!();

    println!("Pivots:");
    for pivot in &analysis.pivots {
        println!("  x={} at index {}", pivot.x, pivot.index);
    }
    println!();

    println!("Label: {}", analysis.label);

    Ok(())
}
