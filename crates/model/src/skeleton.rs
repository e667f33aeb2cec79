//! The fixed reference figure the user draws a spine over.

use serde::{Deserialize, Serialize};

/// A circle outline in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circle {
    pub cx: i32,
    pub cy: i32,
    pub radius: i32,
}

/// Reference skeleton: a head and a pair of bent legs.
///
/// Lives on its own layer; it is never part of the classified drawing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceSkeleton {
    pub head: Circle,
    /// Polyline vertices for the legs.
    pub legs: Vec<(i32, i32)>,
}

impl ReferenceSkeleton {
    /// The seated figure used by the drawing tool: head at (150, 100),
    /// hips at (150, 320), knee at (250, 320), foot at (250, 420).
    pub fn seated() -> Self {
        Self {
            head: Circle {
                cx: 150,
                cy: 100,
                radius: 40,
            },
            legs: vec![(150, 320), (250, 320), (250, 420)],
        }
    }
}

