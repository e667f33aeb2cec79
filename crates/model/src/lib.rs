//! SpineTrace Model
//!
//! Defines the core data contracts shared by the spine pipeline:
//! - **Raster:** RGBA pixel buffers read by the boundary extractor
//! - **Events:** Normalized pointer events that drive a drawing session
//! - **Pivots & Labels:** Direction changes and the shape they classify to
//! - **Skeleton:** The fixed reference figure drawn under the spine
//!
//! Raster coordinates are integer pixels with `(0, 0)` at the top-left.

pub mod event;
pub mod label;
pub mod pivot;
pub mod raster;
pub mod skeleton;

pub use event::*;
pub use label::*;
pub use pivot::*;
pub use raster::*;
pub use skeleton::*;
