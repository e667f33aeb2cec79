//! Pointer event types for drawing sessions.
//!
//! Device-specific mouse/touch events are normalized into a single
//! [`PointerEvent`] carrying a position in surface pixels and a phase.
//! Strokes are stored as JSONL, one event per line; lines starting with
//! `#` are treated as comments.

use serde::{Deserialize, Serialize};

/// Lifecycle phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerPhase {
    /// Button pressed: a new stroke begins.
    Down,
    /// Pointer moved, with or without a stroke in progress.
    Move,
    /// Button released: the stroke ends and is classified.
    Up,
}

/// A normalized pointer event in drawing-surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    pub phase: PointerPhase,
}

impl PointerEvent {
    pub fn new(x: f64, y: f64, phase: PointerPhase) -> Self {
        Self { x, y, phase }
    }

    /// Create a press event.
    pub fn down(x: f64, y: f64) -> Self {
        Self::new(x, y, PointerPhase::Down)
    }

    /// Create a move event.
    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(x, y, PointerPhase::Move)
    }

    /// Create a release event.
    pub fn up(x: f64, y: f64) -> Self {
        Self::new(x, y, PointerPhase::Up)
    }

    /// The pixel containing this event's position.
    pub fn pixel(&self) -> (i64, i64) {
        (self.x.floor() as i64, self.y.floor() as i64)
    }
}

/// Parse pointer events from JSONL content (one JSON object per line).
pub fn parse_events(jsonl: &str) -> Result<Vec<PointerEvent>, serde_json::Error> {
    jsonl
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(serde_json::from_str)
        .collect()
}

/// Serialize pointer events to JSONL format.
pub fn serialize_events(events: &[PointerEvent]) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    for event in events {
        output.push_str(&serde_json::to_string(event)?);
        output.push('\n');
    }
    Ok(output)
}
