//! The spine classifier: raster in, shape label out.

use serde::Serialize;
use spinetrace_common::config::ClassifierSettings;
use spinetrace_common::{SpineError, SpineResult};
use spinetrace_model::label::ShapeLabel;
use spinetrace_model::pivot::Pivot;
use spinetrace_model::raster::RasterBuffer;

use crate::boundary::{extract_boundary, BoundaryTrace, ExtractOptions};
use crate::pivots::{delta_sequence, detect_pivots_with_deltas, label_for_pivots};

/// Configuration for the spine classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Smoothing window in trace rows. Deltas span this many rows and sign
    /// changes are only sampled every `step` rows.
    pub step: usize,

    /// Minimum horizontal distance (pixels) between consecutive pivots.
    pub curve_delta_threshold: u32,

    /// Invert the red channel of every inspected pixel while scanning.
    pub mutate_for_debug: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            step: 8,
            curve_delta_threshold: 15,
            mutate_for_debug: true,
        }
    }
}

impl ClassifierConfig {
    /// Build a validated config from application settings.
    pub fn from_settings(settings: &ClassifierSettings) -> SpineResult<Self> {
        let config = Self {
            step: settings.step,
            curve_delta_threshold: settings.curve_delta_threshold,
            mutate_for_debug: settings.mutate_for_debug,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SpineResult<()> {
        if self.step == 0 {
            return Err(SpineError::config("step must be at least 1"));
        }
        Ok(())
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            mutate_for_debug: self.mutate_for_debug,
        }
    }
}

/// Full intermediate results of one classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpineAnalysis {
    pub trace: BoundaryTrace,
    pub deltas: Vec<i64>,
    pub pivots: Vec<Pivot>,
    pub label: ShapeLabel,
}

/// Classifies drawn spines.
#[derive(Debug, Clone, Default)]
pub struct SpineClassifier {
    config: ClassifierConfig,
}

impl SpineClassifier {
    /// Create a new classifier with the given configuration.
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Create a classifier with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ClassifierConfig::default())
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify the drawing in `raster`.
    ///
    /// The raster is only modified when `mutate_for_debug` is enabled.
    /// A raster without ink yields [`SpineError::EmptyStroke`].
    pub fn classify(&self, raster: &mut RasterBuffer) -> SpineResult<ShapeLabel> {
        Ok(self.analyze(raster)?.label)
    }

    /// Classify and keep every intermediate result.
    pub fn analyze(&self, raster: &mut RasterBuffer) -> SpineResult<SpineAnalysis> {
        let trace = extract_boundary(raster, self.config.extract_options());
        self.analyze_trace(trace)
    }

    /// Classify an already extracted boundary trace.
    pub fn analyze_trace(&self, trace: BoundaryTrace) -> SpineResult<SpineAnalysis> {
        self.config.validate()?;
        if trace.is_empty() {
            return Err(SpineError::EmptyStroke);
        }

        let deltas = delta_sequence(&trace.positions, self.config.step);
        let pivots = detect_pivots_with_deltas(
            &trace.positions,
            &deltas,
            self.config.step,
            self.config.curve_delta_threshold,
        )?;
        let label = label_for_pivots(&pivots, trace.len());

        tracing::info!(
            rows = trace.len(),
            pivots = pivots.len(),
            label = %label,
            "Classified spine"
        );

        Ok(SpineAnalysis {
            trace,
            deltas,
            pivots,
            label,
        })
    }

    /// Classify a bare position sequence.
    pub fn classify_positions(&self, positions: &[u32]) -> SpineResult<ShapeLabel> {
        let analysis = self.analyze_trace(BoundaryTrace::from_positions(positions.to_vec()))?;
        Ok(analysis.label)
    }
}
