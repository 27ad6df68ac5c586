use egui::{Color32, Pos2};
use std::sync::Arc;

use crate::session::SessionParams;

// Immutable record of one completed drawing gesture, shared between the live
// history and any gallery slots that captured it.
#[derive(Clone, Debug)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: [u8; 3],
    width: u8,
    eraser: bool,
    mirror: bool,
}

// Define a reference-counted type alias for Stroke
pub type StrokeRef = Arc<Stroke>;

impl Stroke {
    /// Create a new immutable stroke. `width` is clamped to the pen range.
    pub fn new(points: Vec<Pos2>, color: [u8; 3], width: u8, eraser: bool, mirror: bool) -> Self {
        Self {
            points,
            color,
            width: width.min(crate::session::PEN_WIDTH_MAX),
            eraser,
            mirror,
        }
    }

    /// Create a new reference-counted Stroke
    pub fn new_ref(
        points: Vec<Pos2>,
        color: [u8; 3],
        width: u8,
        eraser: bool,
        mirror: bool,
    ) -> StrokeRef {
        Arc::new(Self::new(points, color, width, eraser, mirror))
    }

    /// The path as drawn, in canvas-local coordinates (not yet replicated).
    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> [u8; 3] {
        self.color
    }

    /// The snapshotted pen color as an opaque egui color.
    pub fn color32(&self) -> Color32 {
        let [r, g, b] = self.color;
        Color32::from_rgb(r, g, b)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    /// Whether this stroke subtracts alpha instead of painting.
    pub fn is_eraser(&self) -> bool {
        self.eraser
    }

    /// Whether each sector copy also gets a reflected counterpart.
    pub fn is_mirrored(&self) -> bool {
        self.mirror
    }
}

// Mutable accumulator for the stroke currently being drawn. Discarded once
// `finish` snapshots it into an immutable Stroke.
pub struct LiveStroke {
    points: Vec<Pos2>,
}

impl LiveStroke {
    /// Start a live path. The path is seeded with the press position twice so
    /// that a click with no drag still yields a drawable degenerate stroke.
    pub fn new(start: Pos2) -> Self {
        Self {
            points: vec![start, start],
        }
    }

    /// Add a point to the live path
    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    /// The last recorded point (the path is never empty by construction).
    pub fn last_point(&self) -> Pos2 {
        *self.points.last().expect("live path is never empty")
    }

    /// Get a reference to the points for preview
    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    /// Snapshot the live path plus the current session parameters into an
    /// immutable, reference-counted Stroke.
    pub fn finish(self, params: &SessionParams) -> StrokeRef {
        Stroke::new_ref(
            self.points,
            params.pen_color,
            params.pen_width,
            params.eraser,
            params.mirror,
        )
    }
}
