//! Error types shared across SpineTrace crates.

/// Top-level error type for SpineTrace operations.
#[derive(Debug, thiserror::Error)]
pub enum SpineError {
    /// The drawing surface holds no ink, so there is nothing to classify.
    #[error("Empty stroke: no non-transparent pixel found")]
    EmptyStroke,

    #[error("Raster error: {message}")]
    Raster { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using SpineError.
pub type SpineResult<T> = Result<T, SpineError>;

impl SpineError {
    pub fn raster(msg: impl Into<String>) -> Self {
        Self::Raster {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Whether this error means "nothing was drawn".
    pub fn is_empty_stroke(&self) -> bool {
        matches!(self, Self::EmptyStroke)
    }
}
