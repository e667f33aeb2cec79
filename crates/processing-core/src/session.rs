//! Pencil drawing session.
//!
//! A [`DrawingSession`] owns the drawing surface and the stroke state that
//! the browser tool kept in globals. Pointer events drive it:
//!
//! - **Down** clears the surface, moves the pen and starts a stroke.
//! - **Move** draws a segment to the pointer while a stroke is in progress.
//! - **Up** draws the final segment, ends the stroke and classifies it.
//!
//! Only one stroke is ever in progress, and classification runs to
//! completion inside the release handler.

use spinetrace_common::{SpineError, SpineResult};
use spinetrace_model::event::{PointerEvent, PointerPhase};
use spinetrace_model::label::ShapeLabel;
use spinetrace_model::raster::{RasterBuffer, INK};
use spinetrace_model::skeleton::ReferenceSkeleton;

use crate::classifier::SpineClassifier;
use crate::stroke::{draw_line, draw_skeleton, SKELETON_INK};

/// Interactive spine drawing state.
#[derive(Debug, Clone)]
pub struct DrawingSession {
    surface: RasterBuffer,
    skeleton: ReferenceSkeleton,
    classifier: SpineClassifier,
    pen: (i64, i64),
    stroke_in_progress: bool,
    last_label: Option<ShapeLabel>,
}

impl DrawingSession {
    /// Create a session with a blank `width`×`height` surface.
    pub fn new(width: u32, height: u32, classifier: SpineClassifier) -> SpineResult<Self> {
        let surface =
            RasterBuffer::new(width, height).map_err(|e| SpineError::raster(e.to_string()))?;
        Ok(Self {
            surface,
            skeleton: ReferenceSkeleton::seated(),
            classifier,
            pen: (0, 0),
            stroke_in_progress: false,
            last_label: None,
        })
    }

    /// The drawing surface (the spine layer only).
    pub fn surface(&self) -> &RasterBuffer {
        &self.surface
    }

    /// Whether a stroke is currently being drawn.
    pub fn is_drawing(&self) -> bool {
        self.stroke_in_progress
    }

    /// Label of the most recently completed stroke.
    pub fn last_label(&self) -> Option<ShapeLabel> {
        self.last_label
    }

    /// Erase the drawing surface. The stroke state is left alone.
    pub fn clear(&mut self) {
        self.surface.clear();
    }

    /// Feed one pointer event. Returns the label when a stroke completes.
    pub fn handle(&mut self, event: PointerEvent) -> SpineResult<Option<ShapeLabel>> {
        match event.phase {
            PointerPhase::Down => {
                self.press(event);
                Ok(None)
            }
            PointerPhase::Move => {
                self.drag(event);
                Ok(None)
            }
            PointerPhase::Up => self.release(event),
        }
    }

    /// Feed a whole event stream, collecting the label of every stroke.
    pub fn replay(&mut self, events: &[PointerEvent]) -> SpineResult<Vec<ShapeLabel>> {
        let mut labels = Vec::new();
        for event in events {
            if let Some(label) = self.handle(*event)? {
                labels.push(label);
            }
        }
        Ok(labels)
    }

    /// Skeleton and spine layers flattened into one image.
    pub fn composite(&self) -> SpineResult<RasterBuffer> {
        let mut image = RasterBuffer::new(self.surface.width(), self.surface.height())
            .map_err(|e| SpineError::raster(e.to_string()))?;
        draw_skeleton(&mut image, &self.skeleton, SKELETON_INK);
        image
            .overlay(&self.surface)
            .map_err(|e| SpineError::raster(e.to_string()))?;
        Ok(image)
    }

    fn press(&mut self, event: PointerEvent) {
        self.clear();
        self.pen = event.pixel();
        self.stroke_in_progress = true;
        tracing::trace!(x = self.pen.0, y = self.pen.1, "Stroke started");
    }

    fn drag(&mut self, event: PointerEvent) {
        if !self.stroke_in_progress {
            return;
        }
        let to = event.pixel();
        draw_line(&mut self.surface, self.pen, to, INK);
        self.pen = to;
    }

    fn release(&mut self, event: PointerEvent) -> SpineResult<Option<ShapeLabel>> {
        if !self.stroke_in_progress {
            return Ok(None);
        }
        self.drag(event);
        self.stroke_in_progress = false;

        let label = match self.classifier.classify(&mut self.surface) {
            Ok(label) => label,
            Err(SpineError::EmptyStroke) => {
                tracing::warn!("Stroke left no ink on the surface");
                ShapeLabel::Unrecognised
            }
            Err(e) => return Err(e),
        };

        self.last_label = Some(label);
        Ok(Some(label))
    }
}
