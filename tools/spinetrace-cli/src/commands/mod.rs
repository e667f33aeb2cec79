pub mod classify;
pub mod config;
pub mod replay;
pub mod trace;

use std::path::Path;

use anyhow::Context;
use clap::Args;
use spinetrace_common::config::{AppConfig, ClassifierSettings};
use spinetrace_core::classifier::{ClassifierConfig, SpineClassifier};
use spinetrace_model::raster::RasterBuffer;

/// Classifier parameters that override the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct ClassifierOverrides {
    /// Smoothing window in rows
    #[arg(long)]
    pub step: Option<usize>,

    /// Minimum horizontal distance (px) between pivots
    #[arg(long)]
    pub threshold: Option<u32>,

    /// Leave the scanned raster untouched (no red-channel inversion)
    #[arg(long)]
    pub no_debug_invert: bool,
}

impl ClassifierOverrides {
    /// Merge the overrides into the configured classifier settings.
    pub fn apply(&self, settings: &ClassifierSettings) -> ClassifierSettings {
        let mut merged = settings.clone();
        if let Some(step) = self.step {
            merged.step = step;
        }
        if let Some(threshold) = self.threshold {
            merged.curve_delta_threshold = threshold;
        }
        if self.no_debug_invert {
            merged.mutate_for_debug = false;
        }
        merged
    }
}

/// Build a classifier from config plus command-line overrides.
pub fn build_classifier(
    config: &AppConfig,
    overrides: &ClassifierOverrides,
) -> anyhow::Result<SpineClassifier> {
    let settings = overrides.apply(&config.classifier);
    let config = ClassifierConfig::from_settings(&settings)?;
    tracing::debug!(?config, "Classifier configured");
    Ok(SpineClassifier::new(config))
}

/// Decode a PNG into an RGBA raster.
pub fn load_raster(path: &Path) -> anyhow::Result<RasterBuffer> {
    let image = image::open(path)
        .with_context(|| format!("Failed to open image {}", path.display()))?
        .into_rgba8();
    RasterBuffer::from_image(image).with_context(|| format!("Unusable image {}", path.display()))
}

/// Encode an RGBA raster as PNG.
pub fn save_raster(raster: &RasterBuffer, path: &Path) -> anyhow::Result<()> {
    raster
        .as_image()
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))
}
