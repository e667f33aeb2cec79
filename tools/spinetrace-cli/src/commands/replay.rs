//! Replay a recorded pointer stroke through a drawing session.

use std::path::PathBuf;

use anyhow::Context;
use spinetrace_common::config::AppConfig;
use spinetrace_core::session::DrawingSession;
use spinetrace_model::event::parse_events;

use super::{build_classifier, save_raster, ClassifierOverrides};

pub fn run(
    config: &AppConfig,
    path: PathBuf,
    width: Option<u32>,
    height: Option<u32>,
    overrides: &ClassifierOverrides,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Events file not found: {}", path.display()))?;
    let events = parse_events(&content).context("Failed to parse events")?;

    let width = width.unwrap_or(config.canvas.width);
    let height = height.unwrap_or(config.canvas.height);
    let classifier = build_classifier(config, overrides)?;
    let mut session = DrawingSession::new(width, height, classifier)?;

    println!(
        "Replaying {} events on a {width}x{height} surface",
        events.len()
    );

    let labels = session.replay(&events)?;
    if labels.is_empty() {
        println!("  No completed stroke.");
    }
    for (i, label) in labels.iter().enumerate() {
        println!("  Stroke {}: {label}", i + 1);
    }
    if session.is_drawing() {
        println!("  (last stroke was never released)");
    }

    if let Some(output) = output {
        let image = session.composite()?;
        save_raster(&image, &output)?;
        println!("  Composite written to: {}", output.display());
    }

    Ok(())
}
