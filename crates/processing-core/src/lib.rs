//! SpineTrace Processing Core
//!
//! Turns a free-hand spine drawing into a shape label:
//! - **Boundary:** Scan a raster for the leftmost ink in every row
//! - **Pivots:** Find horizontal direction changes in that trace
//! - **Classifier:** Map the pivot pattern to a [`ShapeLabel`]
//! - **Session:** Pencil-style pointer handling that classifies on release
//!
//! Everything except the session is pure computation over its inputs.
//!
//! [`ShapeLabel`]: spinetrace_model::ShapeLabel

pub mod boundary;
pub mod classifier;
pub mod pivots;
pub mod session;
pub mod stroke;

pub use boundary::{extract_boundary, BoundaryTrace, ExtractOptions};
pub use classifier::{ClassifierConfig, SpineAnalysis, SpineClassifier};
pub use session::DrawingSession;
