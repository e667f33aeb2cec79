//! Pivots: direction changes along a boundary trace.

use serde::{Deserialize, Serialize};

/// A point where the traced spine changes horizontal direction.
///
/// `index` is the position in the trace (not the absolute raster row).
/// The first pivot of every trace is synthetic: the stroke's starting point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pivot {
    /// Horizontal pixel position.
    pub x: u32,
    /// Index into the position sequence.
    pub index: usize,
}

impl Pivot {
    pub fn new(x: u32, index: usize) -> Self {
        Self { x, index }
    }

    /// Absolute horizontal distance to another pivot or candidate position.
    pub fn distance_to(&self, x: u32) -> u32 {
        self.x.abs_diff(x)
    }
}
