//! Classify the spine drawn in a PNG.

use std::path::{Path, PathBuf};

use spinetrace_common::config::AppConfig;
use spinetrace_common::SpineError;
use spinetrace_core::classifier::SpineClassifier;
use spinetrace_model::label::ShapeLabel;
use spinetrace_model::raster::RasterBuffer;

use super::{build_classifier, load_raster, save_raster, ClassifierOverrides};

pub fn run(
    config: &AppConfig,
    path: PathBuf,
    overrides: &ClassifierOverrides,
    debug_output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let classifier = build_classifier(config, overrides)?;
    let (label, raster) = classify_file(&classifier, &path)?;

    println!("{label}");

    if let Some(output) = debug_output {
        save_raster(&raster, &output)?;
        tracing::info!("Scanned raster written to {}", output.display());
    }

    Ok(())
}

/// Load and classify a drawing. A drawing without ink is `unrecognised`.
///
/// The scanned raster is returned so debug marks can be written out.
pub fn classify_file(
    classifier: &SpineClassifier,
    path: &Path,
) -> anyhow::Result<(ShapeLabel, RasterBuffer)> {
    let mut raster = load_raster(path)?;
    tracing::debug!(
        width = raster.width(),
        height = raster.height(),
        "Loaded drawing from {}",
        path.display()
    );

    let label = match classifier.classify(&mut raster) {
        Ok(label) => label,
        Err(SpineError::EmptyStroke) => {
            tracing::warn!("No ink found in {}", path.display());
            ShapeLabel::Unrecognised
        }
        Err(e) => return Err(e.into()),
    };

    Ok((label, raster))
}

#[cfg(test)]
mod tests {
    use super::*;
    use spinetrace_model::raster::INK;

    fn temp_png(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("spinetrace-{name}-{}.png", std::process::id()))
    }

    #[test]
    fn test_blank_png_is_unrecognised() {
        let path = temp_png("blank");
        save_raster(&RasterBuffer::new(30, 40).unwrap(), &path).unwrap();

        let (label, _) = classify_file(&SpineClassifier::with_defaults(), &path).unwrap();
        assert_eq!(label.to_string(), "unrecognised spine");
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_inked_png_is_classified_and_marked() {
        let path = temp_png("vertical");
        let mut raster = RasterBuffer::new(30, 40).unwrap();
        for y in 0..40 {
            raster.set_pixel(12, y, INK);
        }
        save_raster(&raster, &path).unwrap();

        let (label, scanned) = classify_file(&SpineClassifier::with_defaults(), &path).unwrap();
        assert_eq!(label, ShapeLabel::Straight);
        assert_eq!(scanned.pixel(12, 0).map(|p| p[0]), Some(255));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_png_is_an_error() {
        let path = temp_png("missing");
        assert!(classify_file(&SpineClassifier::with_defaults(), &path).is_err());
    }
}
