//! Shape labels produced by the spine classifier.
//!
//! Every label renders as `"<descriptor> spine"`, e.g. `"straight spine"`
//! or `"bottom right-curved spine"`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which third of the trace a position falls into, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalThird {
    Upper,
    Centered,
    Bottom,
}

impl VerticalThird {
    /// Locate `index` within a trace of `len` entries.
    ///
    /// Upper when `index < len / 3`, centered when `index < 2 * len / 3`,
    /// bottom otherwise. The comparison is exact (no integer truncation of
    /// the thirds). `len` must be at least 1 for the answer to be meaningful.
    pub fn of(index: usize, len: usize) -> Self {
        if 3 * index < len {
            Self::Upper
        } else if 3 * index < 2 * len {
            Self::Centered
        } else {
            Self::Bottom
        }
    }

    /// Numeric interval: 0 upper, 1 centered, 2 bottom.
    pub fn interval(&self) -> u8 {
        match self {
            Self::Upper => 0,
            Self::Centered => 1,
            Self::Bottom => 2,
        }
    }

    fn descriptor(&self) -> &'static str {
        match self {
            Self::Upper => "upper",
            Self::Centered => "centered",
            Self::Bottom => "bottom",
        }
    }
}

/// Side toward which a single curve bends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveDirection {
    Left,
    Right,
}

/// Classified shape of a drawn spine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ShapeLabel {
    /// No accepted direction change.
    Straight,
    /// One dominant bend in the given third.
    Curved {
        region: VerticalThird,
        direction: CurveDirection,
    },
    /// Two bends, upper then bottom, not bending right-then-back.
    SCurved,
    /// Two bends, upper then bottom, bending right and then back left.
    InvertedSCurved,
    /// Too many (or no) pivots to name the shape.
    Unrecognised,
}

impl ShapeLabel {
    /// The descriptor without the trailing `" spine"`.
    pub fn descriptor(&self) -> String {
        match self {
            Self::Straight => "straight".to_string(),
            Self::Curved { region, direction } => {
                let side = match direction {
                    CurveDirection::Left => "left",
                    CurveDirection::Right => "right",
                };
                format!("{} {}-curved", region.descriptor(), side)
            }
            Self::SCurved => "S-curved".to_string(),
            Self::InvertedSCurved => "inverted S-curved".to_string(),
            Self::Unrecognised => "unrecognised".to_string(),
        }
    }
}

impl fmt::Display for ShapeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} spine", self.descriptor())
    }
}
