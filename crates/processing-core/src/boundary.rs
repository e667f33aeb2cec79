//! Boundary extraction: the leftmost ink of every row.
//!
//! Rows are scanned top to bottom and, within a row, left to right. The
//! first pixel with a non-zero alpha ends the row and its column is
//! recorded. Rows without ink are skipped, so trace indices and raster rows
//! drift apart after a gap; [`BoundaryTrace::rows`] keeps the mapping.

use serde::Serialize;
use spinetrace_model::raster::RasterBuffer;

/// Options for [`extract_boundary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Replace the red channel of every inspected pixel with `255 - red`.
    ///
    /// This leaves a visible footprint of the scan on the caller's buffer
    /// and never changes the extracted positions.
    pub mutate_for_debug: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            mutate_for_debug: true,
        }
    }
}

impl ExtractOptions {
    /// Scan without touching the buffer.
    pub fn read_only() -> Self {
        Self {
            mutate_for_debug: false,
        }
    }
}

/// Ordered leftmost-ink positions, one per inked row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BoundaryTrace {
    /// Horizontal position of the first inked pixel, per inked row.
    pub positions: Vec<u32>,
    /// Absolute raster row of each entry in `positions`.
    pub rows: Vec<u32>,
}

impl BoundaryTrace {
    /// Build a trace from positions of contiguous rows starting at row 0.
    pub fn from_positions(positions: Vec<u32>) -> Self {
        let rows = (0..positions.len() as u32).collect();
        Self { positions, rows }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Rows between the first and last inked row that held no ink.
    pub fn gap_rows(&self) -> Vec<u32> {
        self.rows
            .windows(2)
            .flat_map(|pair| pair[0] + 1..pair[1])
            .collect()
    }

    fn push(&mut self, row: u32, x: u32) {
        self.rows.push(row);
        self.positions.push(x);
    }
}

/// Extract the leftmost boundary of the drawing in `buffer`.
///
/// With `options.mutate_for_debug` set, every pixel visited by the scan has
/// its red channel inverted in place: all pixels of blank rows, and the
/// pixels up to and including the hit in inked rows.
pub fn extract_boundary(buffer: &mut RasterBuffer, options: ExtractOptions) -> BoundaryTrace {
    if !options.mutate_for_debug {
        return extract_boundary_readonly(buffer);
    }

    let mut trace = BoundaryTrace::default();
    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            buffer.invert_red(x, y);
            if buffer.alpha(x, y) != 0 {
                trace.push(y, x);
                break;
            }
        }
    }

    tracing::debug!(
        rows = trace.len(),
        gaps = trace.gap_rows().len(),
        "Extracted boundary (debug inversion applied)"
    );
    trace
}

/// Extract the leftmost boundary without modifying the buffer.
pub fn extract_boundary_readonly(buffer: &RasterBuffer) -> BoundaryTrace {
    let mut trace = BoundaryTrace::default();
    for (y, mut row) in buffer.as_image().enumerate_rows() {
        if let Some((x, _, _)) = row.find(|(_, _, pixel)| pixel[3] != 0) {
            trace.push(y, x);
        }
    }

    tracing::debug!(
        rows = trace.len(),
        gaps = trace.gap_rows().len(),
        "Extracted boundary"
    );
    trace
}
